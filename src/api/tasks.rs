//! Task Calls
//!
//! CRUD bindings for `/todos`. Every call carries the session's bearer
//! token; the server echoes the full task back on create and update.

use gloo_net::http::Request;
use serde::Serialize;

use super::{bearer, endpoint, fail_protected, transport, with_deadline, ApiError};
use crate::models::Task;
use crate::session::SessionContext;

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
}

/// Full-representation update; the server's echo is authoritative
#[derive(Serialize)]
pub struct UpdateTaskArgs<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub completed: bool,
}

/// Fetch the whole task collection for the session, in server order
pub async fn list_tasks(session: SessionContext) -> Result<Vec<Task>, ApiError> {
    with_deadline(async move {
        let resp = bearer(Request::get(&endpoint("/todos")), &session)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return fail_protected(resp).await;
        }
        resp.json().await.map_err(transport)
    })
    .await
}

pub async fn create_task(
    session: SessionContext,
    args: &CreateTaskArgs<'_>,
) -> Result<Task, ApiError> {
    with_deadline(async move {
        let resp = bearer(Request::post(&endpoint("/todos")), &session)
            .json(args)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return fail_protected(resp).await;
        }
        resp.json().await.map_err(transport)
    })
    .await
}

pub async fn update_task(
    session: SessionContext,
    id: u32,
    args: &UpdateTaskArgs<'_>,
) -> Result<Task, ApiError> {
    with_deadline(async move {
        let resp = bearer(Request::put(&endpoint(&format!("/todos/{}", id))), &session)
            .json(args)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return fail_protected(resp).await;
        }
        resp.json().await.map_err(transport)
    })
    .await
}

pub async fn delete_task(session: SessionContext, id: u32) -> Result<(), ApiError> {
    with_deadline(async move {
        let resp = bearer(Request::delete(&endpoint(&format!("/todos/{}", id))), &session)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return fail_protected(resp).await;
        }
        Ok(())
    })
    .await
}
