use serde::{Deserialize, Serialize};

use super::TaskMap;

/// One calendar day's checklist, keyed by its `YYYY-MM-DD` date.
///
/// Records are created server-side on first reference to a date; the client
/// only ever writes through the task-update and water-increment endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: String,
    pub tasks: TaskMap,
}

impl DayRecord {
    pub fn new(date: impl Into<String>, tasks: TaskMap) -> Self {
        Self {
            date: date.into(),
            tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskId, TaskValue};

    #[test]
    fn decodes_mixed_flag_and_milliliter_tasks() {
        // Shape as served by the backend: water is an integer, the rest bools.
        let raw = r#"{
            "date": "2024-01-05",
            "tasks": {
                "drink_gallon_water": 1500,
                "two_workouts": true,
                "read_ten_pages": false,
                "five_min_cold_shower": false,
                "follow_diet": true,
                "no_alcohol_or_cheat_meals": true,
                "take_progress_pic": false
            }
        }"#;

        let record: DayRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.date, "2024-01-05");
        assert_eq!(record.tasks.len(), 7);
        assert_eq!(
            record.tasks.get(&TaskId::DrinkGallonWater),
            Some(&TaskValue::Milliliters(1500))
        );
        assert_eq!(
            record.tasks.get(&TaskId::TwoWorkouts),
            Some(&TaskValue::Flag(true))
        );
    }
}
