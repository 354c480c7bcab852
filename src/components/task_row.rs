//! Task Row Component
//!
//! One list item: click toggles, double click edits, trash deletes.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::use_task_list;
use crate::models::TaskId;
use crate::view::{EditorView, RowView};

#[component]
pub fn TaskRow(row: RowView) -> impl IntoView {
    let ctx = use_task_list();
    let id = row.id;
    let class = if row.done { "done" } else { "" };

    let content = match row.editor {
        Some(editor) => view! { <TaskEditor id=id editor=editor /> }.into_any(),
        None => view! {
            {row.text}
            // Keep clicks on the trash away from the row's click/dblclick handlers
            <span
                on:click=move |ev| {
                    ev.stop_propagation();
                    ctx.delete_task(id);
                }
                on:dblclick=move |ev| ev.stop_propagation()
            >
                <i class="fa fa-trash"></i>
            </span>
        }
        .into_any(),
    };

    view! {
        <li
            class=class
            on:click=move |_| ctx.click(id)
            on:dblclick=move |_| ctx.double_click(id)
        >
            {content}
        </li>
    }
}

/// Edit field shown in place of the row text
#[component]
fn TaskEditor(id: TaskId, editor: EditorView) -> impl IntoView {
    let ctx = use_task_list();
    let input_ref = NodeRef::<Input>::new();
    let caret = editor.caret;

    // Focus once mounted, caret after the text rather than selecting it
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            let _ = input.set_selection_range(caret, caret);
        }
    });

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            ctx.commit_edit(id, &event_target_value(&ev));
        }
        "Escape" => ctx.cancel_edit(),
        _ => {}
    };

    view! {
        <input
            type="text"
            node_ref=input_ref
            prop:value=editor.value
            on:input=move |ev| ctx.update_draft(id, &event_target_value(&ev))
            on:keydown=on_keydown
            on:blur=move |ev| ctx.commit_edit(id, &event_target_value(&ev))
            on:pointerdown=move |ev| ev.stop_propagation()
            on:click=move |ev| ev.stop_propagation()
            on:dblclick=move |ev| ev.stop_propagation()
        />
    }
}
