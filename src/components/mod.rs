//! UI Components
//!
//! Leptos components that apply the list view to the page.

mod list_footer;
mod new_task_form;
mod task_list_view;
mod task_row;

pub use list_footer::ListFooter;
pub use new_task_form::NewTaskForm;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
