use hard75::domain::TaskId;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    /// Concurrent day/history/stats fetch. Discarded if `generation` no
    /// longer matches the app's fetch generation.
    LoadAll { generation: u64 },
    ToggleTask { task: TaskId },
    IncrementWater { amount_ml: u32 },
    LoadGallery,
    UploadPhoto { path: String },
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
