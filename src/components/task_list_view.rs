//! Task List View Component
//!
//! The `<ul>` of task rows.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_task_list;

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_task_list();

    view! {
        <ul class="todoList">
            <For
                each=move || ctx.rows()
                // Rebuild a row when anything it shows changes; the draft is
                // left out so typing does not recreate the field
                key=|row| (row.id, row.text.clone(), row.done, row.editor.is_some())
                children=move |row| view! { <TaskRow row=row /> }
            />
        </ul>
    }
}
