//! List Footer Component
//!
//! Pending count and the clear-completed button.

use leptos::prelude::*;

use crate::context::use_task_list;

#[component]
pub fn ListFooter() -> impl IntoView {
    let ctx = use_task_list();

    view! {
        <div class="footer">
            <span>{move || ctx.footer()}</span>
            <button on:click=move |_| ctx.clear_completed()>"Clear Done"</button>
        </div>
    }
}
