use anyhow::Result;
use hard75::domain::{water_increment_allowed, TaskId, TaskValue, WATER_GOAL_ML};
use hard75::ProgressClient;

use crate::app::{App, LoadState};

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App, client: &ProgressClient) -> Result<()> {
    match action {
        Action::LoadAll { generation } => load_all(app, client, generation).await,
        Action::ToggleTask { task } => toggle_task(app, client, task).await,
        Action::IncrementWater { amount_ml } => increment_water(app, client, amount_ml).await,
        Action::LoadGallery => load_gallery(app, client).await,
        Action::UploadPhoto { path } => upload_photo(app, client, path).await,
    }
    Ok(())
}

/// Fetch day, history and stats concurrently; all three must succeed before
/// the app leaves `Loading`. A failure discards the other results and shows
/// the message verbatim.
async fn load_all(app: &mut App, client: &ProgressClient, generation: u64) {
    if app.is_stale(generation) {
        // A newer date change was queued behind this load.
        tracing::debug!("discarding stale load (generation {generation})");
        return;
    }

    app.load_state = LoadState::Loading;
    app.is_loading = true;
    let date = app.selected_date.clone();

    let result = tokio::try_join!(
        client.fetch_day(&date),
        client.fetch_history(),
        client.fetch_stats(),
    );

    app.is_loading = false;
    if app.is_stale(generation) {
        return;
    }

    match result {
        Ok((day, history, stats)) => {
            app.day = Some(day);
            app.history = history;
            app.stats = Some(stats);
            app.history_scroll = 0;
            app.load_state = LoadState::Ready;
        }
        Err(e) => {
            app.day = None;
            app.history.clear();
            app.stats = None;
            app.load_state = LoadState::Error(e.to_string());
        }
    }
}

/// Optimistic toggle: flip locally, write the full task map, re-fetch stats
/// on success. On failure the flip is rolled back to the snapshot.
async fn toggle_task(app: &mut App, client: &ProgressClient, task: TaskId) {
    if app.load_state != LoadState::Ready {
        return;
    }
    if app.mutation_in_flight {
        app.set_status("Another update is still in flight".to_string());
        return;
    }
    let Some(snapshot) = app.flip_task(task) else {
        return;
    };
    let tasks = match app.day.as_ref() {
        Some(day) => day.tasks.clone(),
        None => return,
    };
    let date = app.selected_date.clone();

    app.mutation_in_flight = true;
    match client.update_day(&date, &tasks).await {
        Ok(_) => {
            app.clear_status();
            refresh_stats(app, client).await;
        }
        Err(e) => {
            tracing::warn!("update for {} failed, rolling back: {e}", task.as_str());
            app.restore_tasks(snapshot);
            app.set_status(format!("Error updating task: {}", e));
        }
    }
    app.mutation_in_flight = false;
}

/// Water increments are pre-checked locally: once the goal is reached, or
/// when the amount would overshoot it, no request is sent. The server's
/// returned total is authoritative and replaces the local value.
async fn increment_water(app: &mut App, client: &ProgressClient, amount_ml: u32) {
    if app.load_state != LoadState::Ready {
        return;
    }
    if app.mutation_in_flight {
        app.set_status("Another update is still in flight".to_string());
        return;
    }

    let current = app.current_water_ml();
    if current >= WATER_GOAL_ML {
        app.set_status("Water goal already reached".to_string());
        return;
    }
    if !water_increment_allowed(current, amount_ml) {
        app.set_status(format!(
            "+{}ml would exceed the {}ml goal",
            amount_ml, WATER_GOAL_ML
        ));
        return;
    }
    let date = app.selected_date.clone();

    app.mutation_in_flight = true;
    match client.increment_water(&date, amount_ml).await {
        Ok(level) => {
            app.set_water_total(level.water);
            app.clear_status();
            refresh_stats(app, client).await;
        }
        Err(e) => {
            app.set_status(format!("Error logging water: {}", e));
        }
    }
    app.mutation_in_flight = false;
}

/// Stats refresh after a mutation settles. History and the day listing are
/// deliberately not re-fetched here.
async fn refresh_stats(app: &mut App, client: &ProgressClient) {
    match client.fetch_stats().await {
        Ok(stats) => app.stats = Some(stats),
        Err(e) => app.set_status(format!("Could not refresh stats: {}", e)),
    }
}

/// Gallery loads on its own flag, decoupled from the day/history/stats
/// machine; a failure here never takes down the main view.
async fn load_gallery(app: &mut App, client: &ProgressClient) {
    app.gallery_loading = true;
    match client.fetch_all_photos().await {
        Ok(photos) => {
            app.gallery_photos = photos;
            app.gallery_scroll = 0;
        }
        Err(e) => app.set_status(format!("Could not load gallery: {}", e)),
    }
    app.gallery_loading = false;
}

/// Read an image from disk and upload it as the day's progress photo. A
/// successful upload marks the photo task complete through the regular
/// task-update path.
async fn upload_photo(app: &mut App, client: &ProgressClient, path: String) {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            app.set_status(format!("Could not read {}: {}", path, e));
            return;
        }
    };
    let file_name = std::path::Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "progress.jpg".to_string());
    let date = app.selected_date.clone();

    match client.upload_photo(&date, bytes, &file_name).await {
        Ok(()) => {
            let pic_pending = app
                .day
                .as_ref()
                .and_then(|day| day.tasks.get(&TaskId::TakeProgressPic))
                .map(|value| !matches!(value, TaskValue::Flag(true)))
                .unwrap_or(false);
            if pic_pending {
                toggle_task(app, client, TaskId::TakeProgressPic).await;
            }
            app.set_status("Progress photo uploaded".to_string());
        }
        Err(e) => {
            app.set_status(format!("Photo upload failed: {}", e));
        }
    }
}
