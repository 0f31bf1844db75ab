//! Frontend Models
//!
//! Data structures matching the remote API's wire format.

use serde::Deserialize;

/// A single task (matches the API's todo schema). Only received, never
/// sent; outbound payloads are the arg structs in `api::tasks`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    /// Optional free-form notes; carried by the API but not shown in the UI
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
}

/// Display-only partition of the task list. Never mutates the tasks
/// themselves; only changes what is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    /// Tab order in the filter bar
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
        }
    }

    /// Whether a task is visible under this filter
    pub fn admits(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

/// Successful `/login` response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Failure body the API sends for 4xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
