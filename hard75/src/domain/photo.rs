use serde::Deserialize;

/// A progress photo reference, at most one per date. Uploading a new photo
/// for a date replaces the previous one (server policy).
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressPhoto {
    pub date: String,
    pub image_url: String,
}
