use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One US gallon in milliliters. The water task counts as complete at or
/// above this level, and the server clamps stored values to it.
pub const WATER_GOAL_ML: u32 = 3785;

/// The seven daily habits. Declaration order is the canonical display and
/// iteration order everywhere in the app; the wire keys are the snake_case
/// variant names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskId {
    DrinkGallonWater,
    TwoWorkouts,
    ReadTenPages,
    FiveMinColdShower,
    FollowDiet,
    NoAlcoholOrCheatMeals,
    TakeProgressPic,
}

impl TaskId {
    pub const ALL: [TaskId; 7] = [
        TaskId::DrinkGallonWater,
        TaskId::TwoWorkouts,
        TaskId::ReadTenPages,
        TaskId::FiveMinColdShower,
        TaskId::FollowDiet,
        TaskId::NoAlcoholOrCheatMeals,
        TaskId::TakeProgressPic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskId::DrinkGallonWater => "drink_gallon_water",
            TaskId::TwoWorkouts => "two_workouts",
            TaskId::ReadTenPages => "read_ten_pages",
            TaskId::FiveMinColdShower => "five_min_cold_shower",
            TaskId::FollowDiet => "follow_diet",
            TaskId::NoAlcoholOrCheatMeals => "no_alcohol_or_cheat_meals",
            TaskId::TakeProgressPic => "take_progress_pic",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TaskId::DrinkGallonWater => "Drink 1 Gallon Water",
            TaskId::TwoWorkouts => "Two 45-Min Workouts",
            TaskId::ReadTenPages => "Read 10 Pages",
            TaskId::FiveMinColdShower => "5-Min Cold Shower",
            TaskId::FollowDiet => "Follow Diet",
            TaskId::NoAlcoholOrCheatMeals => "No Alcohol/Cheat Meals",
            TaskId::TakeProgressPic => "Take Progress Picture",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            TaskId::DrinkGallonWater => "💧",
            TaskId::TwoWorkouts => "🏋",
            TaskId::ReadTenPages => "📖",
            TaskId::FiveMinColdShower => "❄",
            TaskId::FollowDiet => "🍎",
            TaskId::NoAlcoholOrCheatMeals => "✕",
            TaskId::TakeProgressPic => "📷",
        }
    }

    /// The water task carries a milliliter count instead of a done flag.
    pub fn is_water(self) -> bool {
        self == TaskId::DrinkGallonWater
    }
}

/// Value of one task for one day: a done flag, or a milliliter count for
/// the water task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskValue {
    Flag(bool),
    Milliliters(u32),
}

impl TaskValue {
    pub fn is_complete(self) -> bool {
        match self {
            TaskValue::Flag(done) => done,
            TaskValue::Milliliters(ml) => ml >= WATER_GOAL_ML,
        }
    }
}

/// Task map for one day. BTreeMap keyed by `TaskId` so iteration follows
/// the canonical task order.
pub type TaskMap = BTreeMap<TaskId, TaskValue>;

/// The task map a fresh day starts with: water at zero, everything else
/// not done. Mirrors what the server seeds on first reference to a date.
pub fn default_tasks() -> TaskMap {
    TaskId::ALL
        .iter()
        .map(|&task| {
            let value = if task.is_water() {
                TaskValue::Milliliters(0)
            } else {
                TaskValue::Flag(false)
            };
            (task, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_keys_round_trip_as_snake_case() {
        for task in TaskId::ALL {
            let encoded = serde_json::to_string(&task).unwrap();
            assert_eq!(encoded, format!("\"{}\"", task.as_str()));
            let decoded: TaskId = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, task);
        }
    }

    #[test]
    fn default_tasks_cover_every_task_in_order() {
        let tasks = default_tasks();
        let keys: Vec<TaskId> = tasks.keys().copied().collect();
        assert_eq!(keys, TaskId::ALL);
        assert_eq!(
            tasks.get(&TaskId::DrinkGallonWater),
            Some(&TaskValue::Milliliters(0))
        );
        assert_eq!(tasks.get(&TaskId::FollowDiet), Some(&TaskValue::Flag(false)));
    }

    #[test]
    fn water_completion_threshold() {
        assert!(!TaskValue::Milliliters(3784).is_complete());
        assert!(TaskValue::Milliliters(WATER_GOAL_ML).is_complete());
        assert!(TaskValue::Flag(true).is_complete());
        assert!(!TaskValue::Flag(false).is_complete());
    }
}
