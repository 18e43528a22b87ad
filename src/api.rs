//! Backend API Bindings
//!
//! Thin wrappers over the three record routes. Every call resolves to
//! `Result<T, String>`; callers decide how loudly each failure matters.

use gloo_net::http::Request;

use crate::config::api_base_url;
use crate::models::{LocationPayload, LocationRecord, TextsPayload};

/// Fetch the one location record.
pub async fn fetch_record() -> Result<LocationRecord, String> {
    let url = format!("{}/api/data", api_base_url());
    let resp = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("GET /api/data returned {}", resp.status()));
    }
    resp.json::<LocationRecord>()
        .await
        .map_err(|e| e.to_string())
}

/// Persist a new marker position.
pub async fn put_location(payload: &LocationPayload) -> Result<(), String> {
    let url = format!("{}/api/data/location", api_base_url());
    let resp = Request::put(&url)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.ok() {
        Ok(())
    } else {
        Err(format!("PUT /api/data/location returned {}", resp.status()))
    }
}

/// Persist all three text attributes as one batched write.
pub async fn put_texts(payload: &TextsPayload) -> Result<(), String> {
    let url = format!("{}/api/data/texts", api_base_url());
    let resp = Request::put(&url)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if resp.ok() {
        Ok(())
    } else {
        Err(format!("PUT /api/data/texts returned {}", resp.status()))
    }
}
