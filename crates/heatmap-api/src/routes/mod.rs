//! # Route Modules
//!
//! - `data` — `GET /get_data/{search_term}`: the country-filtered dataset.
//! - `index` — `GET /`: the heatmap page, and `/static/*` assets.
//! - `health` — Kubernetes-style liveness/readiness probes and `/metrics`.

pub mod data;
pub mod health;
pub mod index;
