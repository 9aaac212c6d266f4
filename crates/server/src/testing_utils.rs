//! In-memory provider for tests: canned JSON per request, with call counting.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;

use crate::clients::StatsTransport;
use crate::error::FetchError;

enum Scripted {
    Body(Value),
    Status(u16, String),
}

/// A `StatsTransport` that answers from a script keyed by request path plus
/// decoded query, e.g. `/v1/stats?player_ids[]=42&seasons[]=2025&per_page=100`.
/// Unscripted requests answer 404.
#[derive(Default)]
pub struct ScriptedTransport {
    script: Mutex<HashMap<String, Scripted>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, request: &str, body: Value) {
        self.lock_script()
            .insert(request.to_string(), Scripted::Body(body));
    }

    pub fn fail(&self, request: &str, status: u16, body: &str) {
        self.lock_script()
            .insert(request.to_string(), Scripted::Status(status, body.to_string()));
    }

    /// Every request key seen, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self, request: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == request).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls().len()
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, HashMap<String, Scripted>> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// `path?k=v&k=v` with the query decoded.
pub fn request_key(url: &Url) -> String {
    let query: Vec<String> = url
        .query_pairs()
        .map(|(k, v)| format!("{k}={v}"))
        .collect();
    if query.is_empty() {
        url.path().to_string()
    } else {
        format!("{}?{}", url.path(), query.join("&"))
    }
}

#[async_trait]
impl StatsTransport for ScriptedTransport {
    async fn get_json(&self, url: &Url) -> Result<Value, FetchError> {
        let key = request_key(url);
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(key.clone());

        match self.lock_script().get(&key) {
            Some(Scripted::Body(body)) => Ok(body.clone()),
            Some(Scripted::Status(status, body)) => Err(FetchError::Upstream {
                status: *status,
                body: body.clone(),
            }),
            None => Err(FetchError::Upstream {
                status: 404,
                body: format!("no scripted response for {key}"),
            }),
        }
    }
}
