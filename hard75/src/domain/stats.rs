use std::collections::BTreeMap;

use serde::Deserialize;

use super::TaskId;

/// Aggregate statistics computed server-side over the whole history.
/// Read-only from the client's perspective.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsSummary {
    pub total_days: u32,
    /// Days on which every task was done and water was at goal.
    pub completed_days: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Integer percentage, 0–100.
    pub completion_rate: u32,
    #[serde(default)]
    pub task_stats: BTreeMap<TaskId, TaskStat>,
}

/// Per-task completion percentage across all tracked days.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskStat {
    pub name: String,
    /// Integer percentage, 0–100.
    pub percentage: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_stats_payload() {
        let raw = r#"{
            "total_days": 12,
            "completed_days": 4,
            "current_streak": 2,
            "longest_streak": 3,
            "completion_rate": 33,
            "task_stats": {
                "follow_diet": {"name": "Follow Diet", "percentage": 75},
                "drink_gallon_water": {"name": "Drink 1 Gallon Water", "percentage": 50}
            }
        }"#;

        let stats: StatsSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.total_days, 12);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.task_stats[&TaskId::FollowDiet].percentage, 75);
        assert_eq!(
            stats.task_stats[&TaskId::DrinkGallonWater].name,
            "Drink 1 Gallon Water"
        );
    }

    #[test]
    fn missing_task_stats_defaults_to_empty() {
        let raw = r#"{
            "total_days": 0,
            "completed_days": 0,
            "current_streak": 0,
            "longest_streak": 0,
            "completion_rate": 0
        }"#;

        let stats: StatsSummary = serde_json::from_str(raw).unwrap();
        assert!(stats.task_stats.is_empty());
    }
}
