//! HTTP API over a precomputed message list.
//!
//! The pipeline runs once at startup; handlers only read the shared result.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use grapevine_core::{Confidence, Message};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    messages: Arc<Vec<Message>>,
}

impl AppState {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages: Arc::new(messages),
        }
    }
}

/// Query parameters of `/api/messages`; absent fields match everything.
#[derive(Debug, Default, Deserialize)]
pub struct MessageFilter {
    pub category: Option<String>,
    pub group: Option<String>,
}

impl MessageFilter {
    fn matches(&self, msg: &Message) -> bool {
        self.category.as_deref().is_none_or(|c| msg.category == c)
            && self.group.as_deref().is_none_or(|g| msg.group == g)
    }
}

/// Response body of `/api/stats`.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_confidence: BTreeMap<Confidence, usize>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/api/messages", get(list_messages))
        .route("/api/stats", get(stats))
        .with_state(state)
}

async fn list_messages(
    State(state): State<AppState>,
    Query(filter): Query<MessageFilter>,
) -> Json<Vec<Message>> {
    let hits = state
        .messages
        .iter()
        .filter(|m| filter.matches(m))
        .cloned()
        .collect();
    Json(hits)
}

async fn stats(State(state): State<AppState>) -> Json<Stats> {
    let mut by_category = BTreeMap::new();
    let mut by_confidence = BTreeMap::new();
    for msg in state.messages.iter() {
        *by_category.entry(msg.category.clone()).or_insert(0) += 1;
        *by_confidence.entry(msg.confidence).or_insert(0) += 1;
    }
    Json(Stats {
        total: state.messages.len(),
        by_category,
        by_confidence,
    })
}

/// Bind and serve until the process is interrupted.
pub async fn serve(messages: Vec<Message>, port: u16) -> anyhow::Result<()> {
    let app = router(AppState::new(messages));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("portal API live at http://localhost:{port}/api/messages");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("server stopped");
        })
        .await?;
    Ok(())
}
