//! Derived values over a single day record: completion counts, remaining
//! tasks, and water progress. Pure and total: an empty task map yields
//! zero/empty results.

use super::{DayRecord, TaskId, TaskValue, WATER_GOAL_ML};

impl DayRecord {
    /// Number of tasks that are done, counting water only at or above goal.
    pub fn completed_count(&self) -> usize {
        self.tasks.values().filter(|v| v.is_complete()).count()
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }

    /// Rounded integer percentage of completed tasks; 0 for an empty map.
    pub fn completion_rate(&self) -> u32 {
        let total = self.total_count();
        if total == 0 {
            return 0;
        }
        let completed = self.completed_count();
        (completed as f64 / total as f64 * 100.0).round() as u32
    }

    /// Identifiers of tasks not yet complete, in canonical task order.
    pub fn remaining_tasks(&self) -> Vec<TaskId> {
        self.tasks
            .iter()
            .filter(|(_, value)| !value.is_complete())
            .map(|(&task, _)| task)
            .collect()
    }

    /// Current water intake in milliliters; 0 when the task is missing or
    /// holds a plain flag.
    pub fn water_ml(&self) -> u32 {
        match self.tasks.get(&TaskId::DrinkGallonWater) {
            Some(TaskValue::Milliliters(ml)) => *ml,
            _ => 0,
        }
    }

    pub fn is_water_complete(&self) -> bool {
        self.water_ml() >= WATER_GOAL_ML
    }

    /// Water progress as a percentage of the goal, capped at 100.
    pub fn water_progress_percent(&self) -> f64 {
        (self.water_ml() as f64 / WATER_GOAL_ML as f64 * 100.0).min(100.0)
    }
}

/// Client-side pre-check for a water increment. A disallowed increment must
/// not be sent to the server: the goal is a hard cap, so an increment that
/// would overshoot it, or one requested after the goal is reached, is
/// rejected locally.
pub fn water_increment_allowed(current_ml: u32, amount_ml: u32) -> bool {
    current_ml < WATER_GOAL_ML && current_ml + amount_ml <= WATER_GOAL_ML
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{default_tasks, TaskMap};

    fn record(tasks: TaskMap) -> DayRecord {
        DayRecord::new("2024-01-05", tasks)
    }

    fn sample(water_ml: u32, done: &[TaskId]) -> DayRecord {
        let mut tasks = default_tasks();
        tasks.insert(TaskId::DrinkGallonWater, TaskValue::Milliliters(water_ml));
        for &task in done {
            tasks.insert(task, TaskValue::Flag(true));
        }
        record(tasks)
    }

    #[test]
    fn empty_map_yields_zeroes() {
        let r = record(TaskMap::new());
        assert_eq!(r.completed_count(), 0);
        assert_eq!(r.total_count(), 0);
        assert_eq!(r.completion_rate(), 0);
        assert!(r.remaining_tasks().is_empty());
        assert_eq!(r.water_ml(), 0);
    }

    #[test]
    fn water_below_goal_is_not_counted_complete() {
        // 3500ml of water plus one done task: exactly one complete out of 7.
        let r = sample(3500, &[TaskId::TwoWorkouts]);
        assert_eq!(r.completed_count(), 1);
        assert_eq!(r.total_count(), 7);
        assert_eq!(r.completion_rate(), 14);
    }

    #[test]
    fn completion_rate_rounds() {
        let mut tasks = TaskMap::new();
        tasks.insert(TaskId::TwoWorkouts, TaskValue::Flag(true));
        tasks.insert(TaskId::ReadTenPages, TaskValue::Flag(false));
        tasks.insert(TaskId::FollowDiet, TaskValue::Flag(false));
        let r = record(tasks);
        // 1 of 3 -> 33.33 -> 33
        assert_eq!(r.completion_rate(), 33);

        let mut tasks = TaskMap::new();
        tasks.insert(TaskId::TwoWorkouts, TaskValue::Flag(true));
        tasks.insert(TaskId::ReadTenPages, TaskValue::Flag(true));
        tasks.insert(TaskId::FollowDiet, TaskValue::Flag(false));
        let r = record(tasks);
        // 2 of 3 -> 66.67 -> 67
        assert_eq!(r.completion_rate(), 67);
    }

    #[test]
    fn remaining_tasks_in_canonical_order() {
        let r = sample(WATER_GOAL_ML, &[TaskId::ReadTenPages, TaskId::FollowDiet]);
        assert_eq!(
            r.remaining_tasks(),
            vec![
                TaskId::TwoWorkouts,
                TaskId::FiveMinColdShower,
                TaskId::NoAlcoholOrCheatMeals,
                TaskId::TakeProgressPic,
            ]
        );
    }

    #[test]
    fn remaining_is_empty_when_everything_done() {
        let r = sample(
            WATER_GOAL_ML,
            &[
                TaskId::TwoWorkouts,
                TaskId::ReadTenPages,
                TaskId::FiveMinColdShower,
                TaskId::FollowDiet,
                TaskId::NoAlcoholOrCheatMeals,
                TaskId::TakeProgressPic,
            ],
        );
        assert_eq!(r.completed_count(), r.total_count());
        assert!(r.remaining_tasks().is_empty());
        assert_eq!(r.completion_rate(), 100);
    }

    #[test]
    fn water_progress_is_capped_and_monotonic() {
        let mut last = -1.0;
        for ml in [0, 1000, 2000, 3784, 3785, 4000, 10_000] {
            let r = sample(ml, &[]);
            let pct = r.water_progress_percent();
            assert!(pct >= last, "not monotonic at {ml}");
            assert!(pct <= 100.0, "exceeded cap at {ml}");
            last = pct;
        }
        assert_eq!(sample(WATER_GOAL_ML, &[]).water_progress_percent(), 100.0);
        assert_eq!(sample(10_000, &[]).water_progress_percent(), 100.0);
    }

    #[test]
    fn water_completion_boundary() {
        assert!(!sample(3784, &[]).is_water_complete());
        assert!(sample(3785, &[]).is_water_complete());
    }

    #[test]
    fn increment_precheck() {
        // 3600 + 500 overshoots the goal; 3600 + 185 lands exactly on it.
        assert!(!water_increment_allowed(3600, 500));
        assert!(water_increment_allowed(3600, 185));
        // Already at goal: nothing more may be sent.
        assert!(!water_increment_allowed(WATER_GOAL_ML, 35));
        assert!(water_increment_allowed(0, 1000));
    }
}
