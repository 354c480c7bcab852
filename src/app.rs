//! Task List App
//!
//! Root component: new-task form, the list, and the footer.

use leptos::prelude::*;

use crate::components::{ListFooter, NewTaskForm, TaskListView};
use crate::config::AppConfig;
use crate::context::TaskListContext;
use crate::inspect;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = TaskListContext::new(&config);
    provide_context(ctx);

    if let Err(err) = inspect::expose_live_view(&config.inspect_global, ctx) {
        log::warn!("[APP] could not expose window.{}: {:?}", config.inspect_global, err);
    }
    log::info!("[APP] started with {} tasks", config.seed.len());

    view! {
        <div class="wrapper">
            <header>"Todo App"</header>
            <NewTaskForm />
            <TaskListView />
            <ListFooter />
        </div>
    }
}
