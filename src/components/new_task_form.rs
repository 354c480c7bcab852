//! New Task Form Component
//!
//! Text input plus add button. Enter in the input submits the form.

use leptos::prelude::*;

use crate::context::use_task_list;

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_task_list();

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_task(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="inputField" on:submit=add_task>
            <input
                type="text"
                placeholder="Add your new todo"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">
                <i class="fa fa-plus"></i>
            </button>
        </form>
    }
}
