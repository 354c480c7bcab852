//! Application Context
//!
//! The task list controller shared with components via Leptos Context API.

use std::cell::OnceCell;
use std::rc::Rc;

use click_gesture::TimeoutTimer;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::controller::TaskListController;
use crate::models::{Task, TaskId};
use crate::view::{pending_message, RowView};

pub type BrowserController = TaskListController<TimeoutTimer<TaskId>>;

/// Handle to the controller. Local storage because it owns browser timeouts.
#[derive(Clone, Copy)]
pub struct TaskListContext {
    controller: RwSignal<BrowserController, LocalStorage>,
}

impl TaskListContext {
    pub fn new(config: &AppConfig) -> Self {
        // Timer callbacks need the signal, which needs the timer
        let slot: Rc<OnceCell<TaskListContext>> = Rc::new(OnceCell::new());
        let timer = TimeoutTimer::new({
            let slot = Rc::clone(&slot);
            move |id: TaskId| {
                if let Some(ctx) = slot.get() {
                    ctx.mutate(|c| c.click_elapsed(id));
                }
            }
        });

        let controller = TaskListController::new(config.seed.clone(), timer, config.click_delay());
        let ctx = Self {
            controller: RwSignal::new_local(controller),
        };
        let _ = slot.set(ctx);
        ctx
    }

    /// Apply `f`; re-render only when it reports a change
    fn mutate(&self, f: impl FnOnce(&mut BrowserController) -> bool) -> bool {
        let changed = self.controller.try_update_untracked(f).unwrap_or(false);
        if changed {
            self.controller.notify();
        }
        changed
    }

    // ========================
    // Reads
    // ========================

    pub fn rows(&self) -> Vec<RowView> {
        self.controller.with(|c| c.render().rows)
    }

    pub fn footer(&self) -> String {
        self.controller.with(|c| pending_message(c.pending_count()))
    }

    /// Snapshot of the collection, without subscribing
    pub fn tasks(&self) -> Vec<Task> {
        self.controller.with_untracked(|c| c.tasks().to_vec())
    }

    // ========================
    // Operations
    // ========================

    pub fn add_task(&self, raw: &str) -> bool {
        self.mutate(|c| c.add_task(raw))
    }

    pub fn click(&self, id: TaskId) {
        // Arming the timer changes nothing visible
        self.controller.update_untracked(|c| c.click(id));
    }

    pub fn double_click(&self, id: TaskId) {
        self.mutate(|c| c.double_click(id));
    }

    pub fn update_draft(&self, id: TaskId, value: &str) {
        self.controller.update_untracked(|c| c.update_draft(id, value));
    }

    pub fn commit_edit(&self, id: TaskId, raw: &str) {
        self.mutate(|c| c.commit_edit(id, raw));
    }

    pub fn cancel_edit(&self) {
        self.mutate(|c| c.cancel_edit());
    }

    pub fn delete_task(&self, id: TaskId) {
        self.mutate(|c| c.delete_task(id));
    }

    pub fn clear_completed(&self) {
        self.mutate(|c| c.clear_completed() > 0);
    }
}

pub fn use_task_list() -> TaskListContext {
    expect_context::<TaskListContext>()
}
