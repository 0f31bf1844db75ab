//! UI Components
//!
//! Reusable Leptos components.

mod auth_page;
mod filter_bar;
mod login_form;
mod new_task_form;
mod register_form;
mod task_page;
mod task_row;

pub use auth_page::AuthPage;
pub use filter_bar::FilterBar;
pub use login_form::LoginForm;
pub use new_task_form::NewTaskForm;
pub use register_form::RegisterForm;
pub use task_page::TaskPage;
pub use task_row::TaskRow;
