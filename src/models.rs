//! Frontend Models
//!
//! Task records held by the controller.

use serde::{Deserialize, Serialize};

pub type TaskId = u32;

/// One to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub complete: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>, complete: bool) -> Self {
        Self {
            id,
            text: text.into(),
            complete,
        }
    }
}

/// Next id for a collection: one past the largest id, or 0 when empty
pub fn next_task_id(tasks: &[Task]) -> TaskId {
    tasks.iter().map(|t| t.id).max().map_or(0, |max| max + 1)
}

/// Seed tasks shown on first load
pub fn default_seed() -> Vec<Task> {
    vec![
        Task::new(0, "Finish Homework", false),
        Task::new(1, "Walk the dog", true),
        Task::new(2, "Clean my room", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_task_id() {
        assert_eq!(next_task_id(&[]), 0);
        let tasks = vec![Task::new(0, "a", false), Task::new(2, "b", true)];
        assert_eq!(next_task_id(&tasks), 3);
    }

    #[test]
    fn test_complete_defaults_to_false() {
        let task: Task = serde_json::from_str(r#"{"id": 4, "text": "Read"}"#).unwrap();
        assert_eq!(task, Task::new(4, "Read", false));
    }
}
