//! Task List Controller
//!
//! Owns the task collection and performs every mutation of it.
//! Row gestures go through a per-task click state machine so a double click
//! (edit) never also counts as a single click (toggle).

use std::time::Duration;

use click_gesture::{ClickGestures, GestureTimer};

use crate::models::{next_task_id, Task, TaskId};
use crate::view::{self, ListView};

/// Row currently in edit mode and the value typed so far
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditSession {
    id: TaskId,
    draft: String,
}

pub struct TaskListController<T> {
    tasks: Vec<Task>,
    gestures: ClickGestures<TaskId, T>,
    editing: Option<EditSession>,
}

impl<T: GestureTimer<TaskId>> TaskListController<T> {
    pub fn new(seed: Vec<Task>, timer: T, click_delay: Duration) -> Self {
        Self {
            tasks: seed,
            gestures: ClickGestures::new(timer, click_delay),
            editing: None,
        }
    }

    /// Read-only live view of the collection
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Task in edit mode, if any
    pub fn editing(&self) -> Option<TaskId> {
        self.editing.as_ref().map(|s| s.id)
    }

    pub fn pending_count(&self) -> usize {
        view::pending_count(&self.tasks)
    }

    pub fn render(&self) -> ListView {
        let editing = self.editing.as_ref().map(|s| (s.id, s.draft.as_str()));
        view::render(&self.tasks, editing)
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    // ========================
    // Mutations
    // ========================

    /// Append a task. Blank input is ignored.
    pub fn add_task(&mut self, raw: &str) -> bool {
        let text = raw.trim();
        if text.is_empty() {
            log::trace!("[TaskList] ignoring blank new task");
            return false;
        }
        let id = next_task_id(&self.tasks);
        self.tasks.push(Task::new(id, text, false));
        log::debug!("[TaskList] added task {}: {:?}", id, text);
        true
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.complete = !task.complete;
                log::debug!("[TaskList] task {} complete={}", id, task.complete);
                true
            }
            None => false,
        }
    }

    /// Put `id` in edit mode with the field holding its current text.
    /// An edit already open on another row is committed first.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        if self.editing() == Some(id) {
            return false;
        }
        let Some(text) = self.tasks.iter().find(|t| t.id == id).map(|t| t.text.clone()) else {
            return false;
        };
        if let Some(open) = self.editing.clone() {
            self.commit_edit(open.id, &open.draft);
        }
        self.editing = Some(EditSession { id, draft: text });
        log::debug!("[TaskList] editing task {}", id);
        true
    }

    /// Remember what is typed in the edit field
    pub fn update_draft(&mut self, id: TaskId, value: &str) {
        if let Some(session) = self.editing.as_mut().filter(|s| s.id == id) {
            session.draft = value.to_string();
        }
    }

    /// Leave edit mode, storing `raw` unless it is blank.
    /// Does nothing unless `id` is the row in edit mode.
    pub fn commit_edit(&mut self, id: TaskId, raw: &str) -> bool {
        if self.editing() != Some(id) {
            return false;
        }
        self.editing = None;
        let text = raw.trim();
        if text.is_empty() {
            log::trace!("[TaskList] blank edit on task {}, keeping text", id);
            return true;
        }
        if let Some(task) = self.find_mut(id) {
            task.text = text.to_string();
            log::debug!("[TaskList] renamed task {}: {:?}", id, text);
        }
        true
    }

    /// Leave edit mode without saving
    pub fn cancel_edit(&mut self) -> bool {
        self.editing.take().is_some()
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            log::trace!("[TaskList] delete of missing task {}", id);
            return false;
        }
        self.release(id);
        log::debug!("[TaskList] deleted task {}", id);
        true
    }

    /// Remove every completed task, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let (done, kept): (Vec<Task>, Vec<Task>) =
            std::mem::take(&mut self.tasks).into_iter().partition(|t| t.complete);
        self.tasks = kept;
        for task in &done {
            self.release(task.id);
        }
        log::debug!("[TaskList] cleared {} completed tasks", done.len());
        done.len()
    }

    fn release(&mut self, id: TaskId) {
        self.gestures.forget(id);
        if self.editing() == Some(id) {
            self.editing = None;
        }
    }

    // ========================
    // Row gestures
    // ========================

    /// Single click on a row. The toggle happens in [`Self::click_elapsed`].
    pub fn click(&mut self, id: TaskId) -> bool {
        self.contains(id) && self.gestures.click(id)
    }

    /// Click timer for `id` ran out. Returns `true` when the task was toggled.
    pub fn click_elapsed(&mut self, id: TaskId) -> bool {
        self.gestures.elapsed(id) && self.toggle_complete(id)
    }

    /// Double click on a row: drop the pending toggle and enter edit mode
    pub fn double_click(&mut self, id: TaskId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.gestures.double_click(id);
        self.begin_edit(id)
    }
}
