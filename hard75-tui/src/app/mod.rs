use hard75::domain::{DayRecord, ProgressPhoto, StatsSummary, TaskId, TaskMap, TaskValue};

mod state;
pub use state::{LoadState, Tab, TextField, WATER_INCREMENTS_ML};

/// All view state for the running session. The event loop owns exactly one
/// of these; every mutation flows through it.
pub struct App {
    pub running: bool,
    pub current_tab: Tab,

    /// Canonical `YYYY-MM-DD` key of the day being viewed and edited.
    pub selected_date: String,
    pub load_state: LoadState,
    /// Bumped on every date change / refresh; a load carrying an older
    /// generation is stale and must not touch state.
    pub fetch_generation: u64,
    /// At most one task/water mutation may be outstanding at a time.
    pub mutation_in_flight: bool,

    // Server copies, owned exclusively by this controller
    pub day: Option<DayRecord>,
    pub history: Vec<DayRecord>,
    pub stats: Option<StatsSummary>,

    pub status_message: Option<String>,

    // Today tab navigation
    pub focused_task_index: usize,
    pub water_amount_index: usize,

    // History tab
    pub history_scroll: usize,

    // Gallery tab, loads independently of the main state machine
    pub gallery_photos: Vec<ProgressPhoto>,
    pub gallery_loading: bool,
    pub gallery_scroll: usize,

    // Overlays
    pub date_input: Option<TextField>,
    pub photo_input: Option<TextField>,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(selected_date: String) -> Self {
        Self {
            running: true,
            current_tab: Tab::Today,
            selected_date,
            load_state: LoadState::Idle,
            fetch_generation: 0,
            mutation_in_flight: false,
            day: None,
            history: Vec::new(),
            stats: None,
            status_message: None,
            focused_task_index: 0,
            water_amount_index: 1,
            history_scroll: 0,
            gallery_photos: Vec::new(),
            gallery_loading: false,
            gallery_scroll: 0,
            date_input: None,
            photo_input: None,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    /// Start a new fetch generation, superseding any load still in flight.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_generation
    }

    pub fn is_stale(&self, generation: u64) -> bool {
        generation != self.fetch_generation
    }

    pub fn focused_task(&self) -> TaskId {
        TaskId::ALL[self.focused_task_index % TaskId::ALL.len()]
    }

    pub fn task_focus_up(&mut self) {
        let len = TaskId::ALL.len();
        self.focused_task_index = (self.focused_task_index + len - 1) % len;
    }

    pub fn task_focus_down(&mut self) {
        self.focused_task_index = (self.focused_task_index + 1) % TaskId::ALL.len();
    }

    pub fn water_amount_left(&mut self) {
        let len = WATER_INCREMENTS_ML.len();
        self.water_amount_index = (self.water_amount_index + len - 1) % len;
    }

    pub fn water_amount_right(&mut self) {
        self.water_amount_index = (self.water_amount_index + 1) % WATER_INCREMENTS_ML.len();
    }

    pub fn selected_water_amount(&self) -> u32 {
        WATER_INCREMENTS_ML[self.water_amount_index % WATER_INCREMENTS_ML.len()]
    }

    pub fn current_water_ml(&self) -> u32 {
        self.day.as_ref().map(DayRecord::water_ml).unwrap_or(0)
    }

    /// Whether a task currently reads as done (water: at goal).
    pub fn task_is_complete(&self, task: TaskId) -> bool {
        self.day
            .as_ref()
            .and_then(|day| day.tasks.get(&task))
            .map(|value| value.is_complete())
            .unwrap_or(false)
    }

    /// Optimistically flip a non-water task in local state, returning a
    /// snapshot of the task map to restore should the server write fail.
    pub fn flip_task(&mut self, task: TaskId) -> Option<TaskMap> {
        if task.is_water() {
            return None;
        }
        let day = self.day.as_mut()?;
        let snapshot = day.tasks.clone();
        let done = matches!(day.tasks.get(&task), Some(TaskValue::Flag(true)));
        day.tasks.insert(task, TaskValue::Flag(!done));
        Some(snapshot)
    }

    /// Roll the task map back to a pre-mutation snapshot.
    pub fn restore_tasks(&mut self, snapshot: TaskMap) {
        if let Some(day) = self.day.as_mut() {
            day.tasks = snapshot;
        }
    }

    /// Adopt the server's clamped water total.
    pub fn set_water_total(&mut self, total_ml: u32) {
        if let Some(day) = self.day.as_mut() {
            day.tasks
                .insert(TaskId::DrinkGallonWater, TaskValue::Milliliters(total_ml));
        }
    }

    /// History entries for display, most recent first (the server returns
    /// them date-ascending).
    pub fn history_recent_first(&self) -> Vec<&DayRecord> {
        self.history.iter().rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hard75::domain::default_tasks;

    fn ready_app() -> App {
        let mut app = App::new("2024-01-05".to_string());
        app.day = Some(DayRecord::new("2024-01-05", default_tasks()));
        app.load_state = LoadState::Ready;
        app
    }

    #[test]
    fn flip_then_restore_round_trips() {
        let mut app = ready_app();
        assert!(!app.task_is_complete(TaskId::FollowDiet));

        let snapshot = app.flip_task(TaskId::FollowDiet).unwrap();
        assert!(app.task_is_complete(TaskId::FollowDiet));

        app.restore_tasks(snapshot);
        assert!(!app.task_is_complete(TaskId::FollowDiet));
    }

    #[test]
    fn water_task_cannot_be_flipped() {
        let mut app = ready_app();
        assert!(app.flip_task(TaskId::DrinkGallonWater).is_none());
    }

    #[test]
    fn stale_generations_are_detected() {
        let mut app = App::new("2024-01-05".to_string());
        let first = app.begin_fetch();
        assert!(!app.is_stale(first));

        let second = app.begin_fetch();
        assert!(app.is_stale(first));
        assert!(!app.is_stale(second));
    }

    #[test]
    fn server_water_total_is_adopted() {
        let mut app = ready_app();
        app.set_water_total(3785);
        assert_eq!(app.current_water_ml(), 3785);
        assert!(app.task_is_complete(TaskId::DrinkGallonWater));
    }

    #[test]
    fn task_focus_wraps_both_ways() {
        let mut app = App::new("2024-01-05".to_string());
        assert_eq!(app.focused_task(), TaskId::DrinkGallonWater);
        app.task_focus_up();
        assert_eq!(app.focused_task(), TaskId::TakeProgressPic);
        app.task_focus_down();
        assert_eq!(app.focused_task(), TaskId::DrinkGallonWater);
    }

    #[test]
    fn water_amount_selection_cycles() {
        let mut app = App::new("2024-01-05".to_string());
        assert_eq!(app.selected_water_amount(), 250);
        app.water_amount_right();
        assert_eq!(app.selected_water_amount(), 500);
        app.water_amount_left();
        app.water_amount_left();
        assert_eq!(app.selected_water_amount(), 35);
    }

    #[test]
    fn history_display_order_is_recent_first() {
        let mut app = ready_app();
        app.history = vec![
            DayRecord::new("2024-01-03", default_tasks()),
            DayRecord::new("2024-01-04", default_tasks()),
            DayRecord::new("2024-01-05", default_tasks()),
        ];
        let dates: Vec<&str> = app
            .history_recent_first()
            .iter()
            .map(|d| d.date.as_str())
            .collect();
        assert_eq!(dates, vec!["2024-01-05", "2024-01-04", "2024-01-03"]);
    }
}
