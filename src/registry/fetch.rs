use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::GenError;

/// Where a registry document comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Build the HTTP client used for every registry download.
pub fn build_client(timeout: Duration) -> Result<Client, GenError> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("spdx-gen/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| GenError::fetch("http client", e))
}

/// Fetch one registry document and parse it as JSON. No retries.
pub async fn fetch_document(client: &Client, source: &Source) -> Result<Value, GenError> {
    match source {
        Source::Url(url) => fetch_url(client, url).await,
        Source::File(path) => read_file(path),
    }
}

async fn fetch_url(client: &Client, url: &str) -> Result<Value, GenError> {
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| GenError::fetch(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GenError::fetch(url, format!("HTTP status {}", status)));
    }

    response.json::<Value>().await.map_err(|e| {
        if e.is_decode() {
            GenError::fetch(url, format!("malformed JSON: {}", e))
        } else {
            GenError::fetch(url, e)
        }
    })
}

fn read_file(path: &Path) -> Result<Value, GenError> {
    let name = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| GenError::fetch(&name, e))?;
    parse_document(&name, &content)
}

fn parse_document(source_name: &str, body: &str) -> Result<Value, GenError> {
    serde_json::from_str(body)
        .map_err(|e| GenError::fetch(source_name, format!("malformed JSON: {}", e)))
}
