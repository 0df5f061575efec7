use reqwest::{multipart, Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use crate::domain::{DayRecord, ProgressPhoto, StatsSummary, TaskMap};

/// Placeholder identity attached to photo requests. The backend has no
/// authentication scheme.
pub const DEFAULT_USER_ID: &str = "demo_user";

/// Typed client for the tracker REST backend. One method per endpoint; every
/// dispatch and every failure is logged, and failures surface as a single
/// `ProgressFetchError` regardless of whether the transport or the server
/// rejected the call.
#[derive(Debug, Clone)]
pub struct ProgressClient {
    client: Client,
    base_url: Url,
    user_id: String,
}

#[derive(Error, Debug)]
pub enum ProgressFetchError {
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("{call} returned {status}: {body}")]
    Status {
        call: String,
        status: StatusCode,
        body: String,
    },
    #[error("ParsingError: {0}")]
    ParsingError(String),
}

impl ProgressClient {
    pub fn new(
        base_url: &str,
        user_id: impl Into<String>,
    ) -> Result<Self, ProgressFetchError> {
        let parsed = Url::parse(base_url.trim_end_matches('/')).map_err(|e| {
            ProgressFetchError::ResponseError(format!("invalid base URL {base_url}: {e}"))
        })?;
        Ok(Self {
            client: Client::new(),
            base_url: parsed,
            user_id: user_id.into(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ProgressFetchError> {
        self.base_url.join(path).map_err(|e| {
            ProgressFetchError::ResponseError(format!("invalid endpoint {path}: {e}"))
        })
    }

    /// Send a request, logging the call before dispatch and any transport
    /// failure before it propagates.
    async fn dispatch(
        &self,
        call: &str,
        request: RequestBuilder,
    ) -> Result<Response, ProgressFetchError> {
        debug!("dispatching {call}");
        request.send().await.map_err(|e| {
            error!("{call} failed: {e}");
            ProgressFetchError::ResponseError(e.to_string())
        })
    }

    /// Reject non-2xx responses, logging the response body first.
    async fn require_success(
        call: &str,
        response: Response,
    ) -> Result<Response, ProgressFetchError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        error!("{call} returned {status}: {body}");
        Err(ProgressFetchError::Status {
            call: call.to_string(),
            status,
            body,
        })
    }

    async fn send(
        &self,
        call: &str,
        request: RequestBuilder,
    ) -> Result<Response, ProgressFetchError> {
        let response = self.dispatch(call, request).await?;
        Self::require_success(call, response).await
    }

    async fn decode<T: DeserializeOwned>(
        call: &str,
        response: Response,
    ) -> Result<T, ProgressFetchError> {
        response.json::<T>().await.map_err(|e| {
            error!("{call} returned an undecodable body: {e}");
            ProgressFetchError::ParsingError(format!("failed to parse {call} response: {e}"))
        })
    }

    /// GET /progress/{date}. The server creates a fresh record on first
    /// reference to a date, so this never 404s for a well-formed key.
    pub async fn fetch_day(&self, date: &str) -> Result<DayRecord, ProgressFetchError> {
        let call = format!("GET /progress/{date}");
        let url = self.endpoint(&format!("progress/{date}"))?;
        let response = self.send(&call, self.client.get(url)).await?;
        Self::decode(&call, response).await
    }

    /// GET /progress/history: last 30 days, date-ascending (most recent
    /// last).
    pub async fn fetch_history(&self) -> Result<Vec<DayRecord>, ProgressFetchError> {
        let call = "GET /progress/history";
        let url = self.endpoint("progress/history")?;
        let response = self.send(call, self.client.get(url)).await?;
        Self::decode(call, response).await
    }

    /// GET /progress: every tracked day.
    pub async fn fetch_all(&self) -> Result<Vec<DayRecord>, ProgressFetchError> {
        let call = "GET /progress";
        let url = self.endpoint("progress")?;
        let response = self.send(call, self.client.get(url)).await?;
        Self::decode(call, response).await
    }

    /// GET /progress/stats
    pub async fn fetch_stats(&self) -> Result<StatsSummary, ProgressFetchError> {
        let call = "GET /progress/stats";
        let url = self.endpoint("progress/stats")?;
        let response = self.send(call, self.client.get(url)).await?;
        Self::decode(call, response).await
    }

    /// PUT /progress/{date}: full replace of the day's task map.
    pub async fn update_day(
        &self,
        date: &str,
        tasks: &TaskMap,
    ) -> Result<DayRecord, ProgressFetchError> {
        #[derive(Serialize)]
        struct Body<'a> {
            tasks: &'a TaskMap,
        }

        let call = format!("PUT /progress/{date}");
        let url = self.endpoint(&format!("progress/{date}"))?;
        let response = self
            .send(&call, self.client.put(url).json(&Body { tasks }))
            .await?;
        Self::decode(&call, response).await
    }

    /// POST /progress/{date}/water. The server clamps to the goal and
    /// returns the new total, which is authoritative; the caller must not
    /// compute the total locally.
    pub async fn increment_water(
        &self,
        date: &str,
        amount_ml: u32,
    ) -> Result<WaterLevel, ProgressFetchError> {
        #[derive(Serialize)]
        struct Body {
            amount: u32,
        }

        let call = format!("POST /progress/{date}/water");
        let url = self.endpoint(&format!("progress/{date}/water"))?;
        let response = self
            .send(&call, self.client.post(url).json(&Body { amount: amount_ml }))
            .await?;
        Self::decode(&call, response).await
    }

    /// POST /progress/pic/{date}: multipart upload; replaces any previous
    /// photo for the date.
    pub async fn upload_photo(
        &self,
        date: &str,
        image: Vec<u8>,
        file_name: &str,
    ) -> Result<(), ProgressFetchError> {
        let call = format!("POST /progress/pic/{date}");
        let url = self.endpoint(&format!("progress/pic/{date}"))?;
        let part = multipart::Part::bytes(image).file_name(file_name.to_string());
        let form = multipart::Form::new()
            .part("file", part)
            .text("user_id", self.user_id.clone());
        self.send(&call, self.client.post(url).multipart(form))
            .await?;
        Ok(())
    }

    /// GET /progress/pic/{date}: raw image bytes, or `None` when no photo
    /// exists for the date.
    pub async fn fetch_photo(&self, date: &str) -> Result<Option<Vec<u8>>, ProgressFetchError> {
        let call = format!("GET /progress/pic/{date}");
        let url = self.endpoint(&format!("progress/pic/{date}"))?;
        let request = self
            .client
            .get(url)
            .query(&[("user_id", self.user_id.as_str())]);
        let response = self.dispatch(&call, request).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::require_success(&call, response).await?;
        let bytes = response.bytes().await.map_err(|e| {
            error!("{call} body read failed: {e}");
            ProgressFetchError::ResponseError(e.to_string())
        })?;
        Ok(Some(bytes.to_vec()))
    }

    /// GET /progress/pics: every stored photo reference, for the gallery.
    pub async fn fetch_all_photos(&self) -> Result<Vec<ProgressPhoto>, ProgressFetchError> {
        let call = "GET /progress/pics";
        let url = self.endpoint("progress/pics")?;
        let response = self.send(call, self.client.get(url)).await?;
        Self::decode(call, response).await
    }
}

/// Server response to a water increment.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WaterLevel {
    pub water: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_endpoints_from_base_url() {
        let client = ProgressClient::new("http://localhost:8917/", DEFAULT_USER_ID).unwrap();
        assert_eq!(
            client.endpoint("progress/2024-01-05").unwrap().as_str(),
            "http://localhost:8917/progress/2024-01-05"
        );
        assert_eq!(
            client.endpoint("progress/pics").unwrap().as_str(),
            "http://localhost:8917/progress/pics"
        );
    }

    #[test]
    fn rejects_malformed_base_url() {
        assert!(ProgressClient::new("not a url", DEFAULT_USER_ID).is_err());
    }

    #[test]
    fn decodes_water_level() {
        let level: WaterLevel = serde_json::from_str(r#"{"water": 3785}"#).unwrap();
        assert_eq!(level.water, 3785);
    }
}
