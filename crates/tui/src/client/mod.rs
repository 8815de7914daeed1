use api_types::salary::{SalaryEntry, SalaryEntryNew};
use reqwest::Url;
use serde::Deserialize;

use crate::error::{AppError, Result};

/// Failure taxonomy of the entry store.
///
/// `Validation` carries the store's human-readable message and is the only
/// variant whose text is shown to the user verbatim.
#[derive(Debug)]
pub enum ClientError {
    NotFound,
    Validation(String),
    Server(String),
    Transport(reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// HTTP client of the remote entry store.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| AppError::Terminal(format!("invalid base_url: {err}")))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    /// Fetches all entries persisted for the given month/year.
    pub async fn entries_for(
        &self,
        year: i32,
        month: u32,
    ) -> std::result::Result<Vec<SalaryEntry>, ClientError> {
        let endpoint = self
            .base_url
            .join(&format!("api/salary/{year}/{month}"))
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))?;

        let res = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return res
                .json::<Vec<SalaryEntry>>()
                .await
                .map_err(ClientError::Transport);
        }

        Err(error_for(res).await)
    }

    /// Persists one entry. The store assigns `id` and `date` and returns the
    /// stored record.
    pub async fn submit(
        &self,
        entry: &SalaryEntryNew,
    ) -> std::result::Result<SalaryEntry, ClientError> {
        let endpoint = self
            .base_url
            .join("api/salary")
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))?;

        let res = self
            .http
            .post(endpoint)
            .json(entry)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return res.json::<SalaryEntry>().await.map_err(ClientError::Transport);
        }

        Err(error_for(res).await)
    }
}

async fn error_for(res: reqwest::Response) -> ClientError {
    let status = res.status();
    let body = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.message)
        .unwrap_or_else(|_| "unknown error".to_string());

    match status.as_u16() {
        404 => ClientError::NotFound,
        400 | 422 => ClientError::Validation(body),
        _ => ClientError::Server(body),
    }
}
