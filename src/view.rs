//! List Rendering
//!
//! Pure description of the visible list, built from the task collection.
//! Components apply it to the DOM; nothing here touches the browser.

use crate::models::{Task, TaskId};

/// Everything the list and footer display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub rows: Vec<RowView>,
    pub pending: usize,
    pub footer: String,
}

/// One `<li>` in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
    /// Present while this row is in edit mode
    pub editor: Option<EditorView>,
}

/// Text field replacing the row text in edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorView {
    pub value: String,
    /// Caret position in UTF-16 units, the way `setSelectionRange` counts
    pub caret: u32,
}

impl EditorView {
    /// Field pre-filled with `value`, caret after the last character
    pub fn at_end(value: &str) -> Self {
        let caret = u32::try_from(value.encode_utf16().count()).unwrap_or(u32::MAX);
        Self {
            value: value.to_string(),
            caret,
        }
    }
}

/// Build the view for `tasks`. `editing` is the row in edit mode and its current field value.
pub fn render(tasks: &[Task], editing: Option<(TaskId, &str)>) -> ListView {
    let rows = tasks
        .iter()
        .map(|task| RowView {
            id: task.id,
            text: task.text.clone(),
            done: task.complete,
            editor: editing
                .filter(|(id, _)| *id == task.id)
                .map(|(_, draft)| EditorView::at_end(draft)),
        })
        .collect();
    let pending = pending_count(tasks);

    ListView {
        rows,
        pending,
        footer: pending_message(pending),
    }
}

pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.complete).count()
}

/// Footer text, e.g. "You have 1 pending task."
pub fn pending_message(pending: usize) -> String {
    let plural = if pending == 1 { "" } else { "s" };
    format!("You have {} pending task{}.", pending, plural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_seed;

    #[test]
    fn test_pending_message() {
        assert_eq!(pending_message(0), "You have 0 pending tasks.");
        assert_eq!(pending_message(1), "You have 1 pending task.");
        assert_eq!(pending_message(2), "You have 2 pending tasks.");
    }

    #[test]
    fn test_render_seed() {
        let view = render(&default_seed(), None);

        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0].text, "Finish Homework");
        assert!(!view.rows[0].done);
        assert!(view.rows[1].done);
        assert_eq!(view.rows[2].id, 2);
        assert!(view.rows.iter().all(|r| r.editor.is_none()));
        assert_eq!(view.pending, 2);
        assert_eq!(view.footer, "You have 2 pending tasks.");
    }

    #[test]
    fn test_render_is_idempotent() {
        let tasks = default_seed();
        assert_eq!(render(&tasks, Some((1, "Walk"))), render(&tasks, Some((1, "Walk"))));
    }

    #[test]
    fn test_editor_only_on_edited_row() {
        let view = render(&default_seed(), Some((2, "Clean my room")));

        assert!(view.rows[0].editor.is_none());
        assert!(view.rows[1].editor.is_none());
        let editor = view.rows[2].editor.as_ref().unwrap();
        assert_eq!(editor.value, "Clean my room");
        assert_eq!(editor.caret, 13);
        // Row text stays the stored text while editing
        assert_eq!(view.rows[2].text, "Clean my room");
    }

    #[test]
    fn test_caret_counts_utf16_units() {
        assert_eq!(EditorView::at_end("café").caret, 4);
        assert_eq!(EditorView::at_end("🐕 walk").caret, 7);
    }
}
