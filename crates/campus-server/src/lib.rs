//! HTTP server assembly for the campus records service.
//!
//! Wraps the record routes from [`campus_api`] with the welcome and health
//! endpoints and a request tracing layer.

use std::{net::IpAddr, sync::Arc};

use axum::{
  Json, Router,
  extract::{Path, Query, State},
  routing::get,
};
use campus_core::store::CampusStore;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, layered from `config.toml` and `CAMPUS_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "0.0.0.0";
  pub const DEFAULT_PORT: u16 = 8000;

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Host information ─────────────────────────────────────────────────────────

/// Facts about the running host reported by `/health`.
#[derive(Debug, Clone)]
pub struct ServerInfo {
  pub ip_address: IpAddr,
}

impl ServerInfo {
  /// Resolve the address of `$HOSTNAME`, falling back to `fallback` when the
  /// variable is unset or does not resolve.
  pub async fn resolve(fallback: IpAddr) -> Self {
    let resolved = match std::env::var("HOSTNAME") {
      Ok(host) if !host.is_empty() => {
        match tokio::net::lookup_host((host.as_str(), 0)).await {
          Ok(mut addrs) => addrs.next().map(|a| a.ip()),
          Err(e) => {
            tracing::debug!(%host, error = %e, "hostname did not resolve");
            None
          }
        }
      }
      _ => None,
    };
    Self {
      ip_address: resolved.unwrap_or(fallback),
    }
  }
}

// ─── Health ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct EchoQuery {
  echo: Option<String>,
}

/// Body of `GET /health` and `GET /health/{path_echo}`.
#[derive(Debug, Serialize)]
pub struct Health {
  pub status:         u16,
  pub status_message: &'static str,
  pub timestamp:      String,
  pub ip_address:     String,
  pub echo:           Option<String>,
  pub path_echo:      Option<String>,
}

impl Health {
  fn ok(info: &ServerInfo, echo: Option<String>, path_echo: Option<String>) -> Self {
    Self {
      status: 200,
      status_message: "OK",
      timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
      ip_address: info.ip_address.to_string(),
      echo,
      path_echo,
    }
  }
}

async fn welcome() -> Json<Value> {
  Json(json!({ "message": "Welcome to the University Management API." }))
}

async fn health(
  State(info): State<Arc<ServerInfo>>,
  Query(q): Query<EchoQuery>,
) -> Json<Health> {
  Json(Health::ok(&info, q.echo, None))
}

async fn health_with_path(
  State(info): State<Arc<ServerInfo>>,
  Path(path_echo): Path<String>,
  Query(q): Query<EchoQuery>,
) -> Json<Health> {
  Json(Health::ok(&info, q.echo, Some(path_echo)))
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router.
pub fn router<S: CampusStore>(store: Arc<S>, info: ServerInfo) -> Router {
  let service = Router::new()
    .route("/",                   get(welcome))
    .route("/health",             get(health))
    .route("/health/{path_echo}", get(health_with_path))
    .with_state(Arc::new(info));

  campus_api::api_router(store)
    .merge(service)
    .layer(TraceLayer::new_for_http())
}
