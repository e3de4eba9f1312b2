//! `finlit-http` is a resilient async JSON client for the financial-literacy
//! content API.
//!
//! Every call goes through [`ApiClient::request`], which joins the endpoint
//! onto a configured base URL, sends it with `Content-Type: application/json`
//! and retries failures with linear backoff before giving up with a single
//! [`ApiError::Network`].
//!
//! Typed helpers for the backend's routes live behind
//! [`ApiClient::learning`], [`ApiClient::news`], [`ApiClient::questions`],
//! [`ApiClient::search`] and [`ApiClient::chat`].

mod client;
mod endpoints;
mod error;
mod options;
mod request;
mod retry;
mod transport;
mod wire;

pub use client::ApiClient;
pub use endpoints::{LearningApi, NewsApi, QuestionsApi};
pub use error::{ApiError, AttemptError};
pub use options::{ClientOptions, RetryPolicy};
pub use request::{Method, RequestOptions};
pub use retry::{backoff_delay, RetryState};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
pub use wire::{ChatRequest, ChatRole, ChatTurn, SearchRequest};

pub type Result<T> = std::result::Result<T, ApiError>;

/// Message carried by [`ApiError::Network`] once retries are exhausted.
pub const NETWORK_FAILURE_MESSAGE: &str =
    "network request failed, please check your connection and retry";

/// Environment variable read by [`ApiClient::from_env`].
pub const BASE_URL_ENV: &str = "FINLIT_API_BASE_URL";
