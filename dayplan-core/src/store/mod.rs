//! JSON document store for planner entities.
//!
//! Each entity is persisted as one JSON document per file under the data
//! directory (`events/<id>.json`, `goals/<id>.json`, `tasks/<id>.json`).
//! Writes go through a temp file and rename, so a crash cannot leave a
//! half-written document behind. Listing tolerates unreadable documents
//! (logged and skipped) instead of failing the whole read.
//!
//! The store is also the single writer for derived state: event color
//! defaulting and task color resolution run inside the `create_*` /
//! `update_*` operations, before a write is considered complete.

mod events;
mod goals;
mod tasks;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PlannerResult;

/// Handle to the on-disk document store.
///
/// Cheap to clone; every operation re-reads the filesystem so external
/// writers (the CLI next to a running server) are picked up immediately.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    /// Open a store rooted at `root`, creating the entity directories.
    pub fn open(root: impl AsRef<Path>) -> PlannerResult<Store> {
        let root = root.as_ref().to_path_buf();
        for dir in ["events", "goals", "tasks"] {
            std::fs::create_dir_all(root.join(dir))?;
        }
        Ok(Store { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn doc_path(&self, kind: &str, id: &str) -> PathBuf {
        self.root.join(kind).join(format!("{}.json", id))
    }

    fn read_doc<T: DeserializeOwned>(&self, kind: &str, id: &str) -> PlannerResult<Option<T>> {
        let path = self.doc_path(kind, id);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn write_doc<T: Serialize>(&self, kind: &str, id: &str, doc: &T) -> PlannerResult<()> {
        let path = self.doc_path(kind, id);
        let temp = path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(doc)?;
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    /// Returns whether a document was actually removed.
    fn delete_doc(&self, kind: &str, id: &str) -> PlannerResult<bool> {
        let path = self.doc_path(kind, id);
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)?;
        Ok(true)
    }

    fn list_docs<T: DeserializeOwned>(&self, kind: &str) -> PlannerResult<Vec<T>> {
        let dir = self.root.join(kind);
        let mut docs = Vec::new();
        if !dir.exists() {
            return Ok(docs);
        }

        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.extension().map(|e| e == "json").unwrap_or(false) {
                continue;
            }
            let content = std::fs::read_to_string(&path)?;
            match serde_json::from_str(&content) {
                Ok(doc) => docs.push(doc),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        %err,
                        "skipping unreadable document"
                    );
                }
            }
        }
        Ok(docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlannerError;
    use crate::event::{EventDraft, EventPatch};
    use crate::goal::{GoalDraft, GoalPatch};
    use crate::task::{GoalLookup, TaskDraft, TaskPatch};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store)
    }

    fn event_draft(title: &str, day: NaiveDate) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            category: "work".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
            date: day,
            color: None,
        }
    }

    #[test]
    fn test_event_crud_roundtrip() {
        let (_dir, store) = store();
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let created = store.create_event(event_draft("Standup", day)).unwrap();
        assert_eq!(created.color, "#2196F3");

        let fetched = store.get_event(&created.id).unwrap();
        assert_eq!(fetched.title, "Standup");

        let updated = store
            .update_event(
                &created.id,
                EventPatch {
                    title: Some("Daily standup".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.title, "Daily standup");

        store.delete_event(&created.id).unwrap();
        assert!(matches!(
            store.get_event(&created.id),
            Err(PlannerError::EventNotFound(_))
        ));
    }

    #[test]
    fn test_events_for_day_filters_by_date_key() {
        let (_dir, store) = store();
        let day1 = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();

        store.create_event(event_draft("On day 1", day1)).unwrap();
        store.create_event(event_draft("On day 2", day2)).unwrap();

        let bucket = store.events_for_day(day1).unwrap();
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket[0].title, "On day 1");
    }

    #[test]
    fn test_list_events_sorted_by_start_time() {
        let (_dir, store) = store();
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let mut late = event_draft("Late", day);
        late.start_time = Utc.with_ymd_and_hms(2024, 6, 1, 15, 0, 0).unwrap();
        late.end_time = Utc.with_ymd_and_hms(2024, 6, 1, 16, 0, 0).unwrap();
        store.create_event(late).unwrap();
        store.create_event(event_draft("Early", day)).unwrap();

        let events = store.list_events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Early");
        assert_eq!(events[1].title, "Late");
    }

    #[test]
    fn test_goal_name_must_be_unique() {
        let (_dir, store) = store();
        store
            .create_goal(GoalDraft {
                name: "Fitness".to_string(),
                color: "#4CAF50".to_string(),
            })
            .unwrap();

        let err = store.create_goal(GoalDraft {
            name: "Fitness".to_string(),
            color: "#FF9800".to_string(),
        });
        assert!(matches!(err, Err(PlannerError::Validation(_))));
    }

    #[test]
    fn test_goal_rename_to_existing_name_rejected() {
        let (_dir, store) = store();
        store
            .create_goal(GoalDraft {
                name: "Fitness".to_string(),
                color: "#4CAF50".to_string(),
            })
            .unwrap();
        let other = store
            .create_goal(GoalDraft {
                name: "Reading".to_string(),
                color: "#2196F3".to_string(),
            })
            .unwrap();

        let err = store.update_goal(
            &other.id,
            GoalPatch {
                name: Some("Fitness".to_string()),
                color: None,
            },
        );
        assert!(matches!(err, Err(PlannerError::Validation(_))));

        // Renaming to its own name is fine.
        store
            .update_goal(
                &other.id,
                GoalPatch {
                    name: Some("Reading".to_string()),
                    color: None,
                },
            )
            .unwrap();
    }

    #[test]
    fn test_task_inherits_and_reresolves_goal_color() {
        let (_dir, store) = store();
        let fitness = store
            .create_goal(GoalDraft {
                name: "Fitness".to_string(),
                color: "#4CAF50".to_string(),
            })
            .unwrap();
        let reading = store
            .create_goal(GoalDraft {
                name: "Reading".to_string(),
                color: "#2196F3".to_string(),
            })
            .unwrap();

        let task = store
            .create_task(TaskDraft {
                name: "Run 5k".to_string(),
                goal_id: fitness.id.clone(),
                color: None,
            })
            .unwrap();
        assert_eq!(task.color, "#4CAF50");

        // Re-parenting picks up the new goal's color, dropping the old copy.
        let moved = store
            .update_task(
                &task.id,
                TaskPatch {
                    goal_id: Some(reading.id.clone()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(moved.color, "#2196F3");

        // An explicit override sticks while the goal is unchanged.
        let recolored = store
            .update_task(
                &task.id,
                TaskPatch {
                    color: Some("#111111".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(recolored.color, "#111111");
    }

    #[test]
    fn test_task_creation_requires_existing_goal() {
        let (_dir, store) = store();
        let err = store.create_task(TaskDraft {
            name: "Orphan".to_string(),
            goal_id: "missing-goal".to_string(),
            color: None,
        });
        assert!(matches!(err, Err(PlannerError::ReferenceNotFound(_))));
    }

    #[test]
    fn test_goal_deletion_leaves_tasks_readable() {
        let (_dir, store) = store();
        let goal = store
            .create_goal(GoalDraft {
                name: "Fitness".to_string(),
                color: "#4CAF50".to_string(),
            })
            .unwrap();
        let task = store
            .create_task(TaskDraft {
                name: "Run 5k".to_string(),
                goal_id: goal.id.clone(),
                color: None,
            })
            .unwrap();

        store.delete_goal(&goal.id).unwrap();

        // No cascade: the task is still listed with its dangling reference
        // and keeps the color it had.
        let tasks = store.list_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].goal_id, goal.id);
        assert_eq!(tasks[0].color, "#4CAF50");
        assert!(store.lookup(&goal.id).is_none());

        // A write that re-resolves against the missing goal is rejected.
        let err = store.update_task(
            &task.id,
            TaskPatch {
                goal_id: Some(goal.id.clone()),
                ..Default::default()
            },
        );
        assert!(matches!(err, Err(PlannerError::ReferenceNotFound(_))));
    }

    #[test]
    fn test_tasks_for_goal_filters() {
        let (_dir, store) = store();
        let fitness = store
            .create_goal(GoalDraft {
                name: "Fitness".to_string(),
                color: "#4CAF50".to_string(),
            })
            .unwrap();
        let reading = store
            .create_goal(GoalDraft {
                name: "Reading".to_string(),
                color: "#2196F3".to_string(),
            })
            .unwrap();

        for name in ["Run 5k", "Stretch"] {
            store
                .create_task(TaskDraft {
                    name: name.to_string(),
                    goal_id: fitness.id.clone(),
                    color: None,
                })
                .unwrap();
        }
        store
            .create_task(TaskDraft {
                name: "Finish novel".to_string(),
                goal_id: reading.id.clone(),
                color: None,
            })
            .unwrap();

        let fitness_tasks = store.tasks_for_goal(&fitness.id).unwrap();
        assert_eq!(fitness_tasks.len(), 2);
        assert!(fitness_tasks.iter().all(|t| t.goal_id == fitness.id));
    }

    #[test]
    fn test_listing_skips_unreadable_documents() {
        let (_dir, store) = store();
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        store.create_event(event_draft("Good", day)).unwrap();

        std::fs::write(store.root().join("events/broken.json"), "{not json").unwrap();

        let events = store.list_events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Good");
    }
}
