use std::fmt;
use std::future::Future;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value as JsonValue;
use tokio::time::sleep;

use crate::{
    retry::{backoff_delay, RetryState},
    ApiError, AttemptError, ClientOptions, ReqwestTransport, RequestOptions, Result, Transport,
    TransportRequest, BASE_URL_ENV,
};

#[derive(Clone)]
/// JSON client for the content backend with linear-backoff retries.
///
/// Calls share nothing but the immutable configuration, so any number of
/// them may be in flight at once.
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    options: ClientOptions,
}

impl<T> fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl ApiClient<ReqwestTransport> {
    /// Creates a client over a default `reqwest` transport.
    ///
    /// `base_url` is used verbatim; endpoints are appended to it, so
    /// `"http://host:8000/api"` plus `"/news"` targets
    /// `"http://host:8000/api/news"`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, ReqwestTransport::new())
    }

    /// Creates a client from the `FINLIT_API_BASE_URL` environment variable.
    ///
    /// Returns an error if the variable is missing or empty.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use finlit_http::ApiClient;
    ///
    /// let api = ApiClient::from_env().expect("missing FINLIT_API_BASE_URL");
    /// ```
    pub fn from_env() -> std::result::Result<Self, String> {
        let url = std::env::var(BASE_URL_ENV)
            .map_err(|_| format!("missing {BASE_URL_ENV} environment variable"))?;
        if url.trim().is_empty() {
            return Err(format!("{BASE_URL_ENV} is set but empty"));
        }
        Ok(Self::new(url.trim()))
    }
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client over any [`Transport`].
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            options: ClientOptions::default(),
        }
    }

    /// Applies client options such as attempt count, backoff and timeout.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Sends `GET {base}{endpoint}`.
    pub async fn get(&self, endpoint: &str) -> Result<JsonValue> {
        self.request(endpoint, RequestOptions::get()).await
    }

    /// Sends `POST {base}{endpoint}` with `data` as the JSON body.
    pub async fn post<B>(&self, endpoint: &str, data: &B) -> Result<JsonValue>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(data).map_err(ApiError::Serialize)?;
        self.request(endpoint, RequestOptions::post(body)).await
    }

    /// Like [`ApiClient::get`], then decodes the JSON into `D`.
    pub async fn get_as<D: DeserializeOwned>(&self, endpoint: &str) -> Result<D> {
        let value = self.get(endpoint).await?;
        serde_json::from_value(value).map_err(ApiError::Decode)
    }

    /// Like [`ApiClient::post`], then decodes the JSON into `D`.
    pub async fn post_as<D, B>(&self, endpoint: &str, data: &B) -> Result<D>
    where
        D: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let value = self.post(endpoint, data).await?;
        serde_json::from_value(value).map_err(ApiError::Decode)
    }

    /// Performs one logical request, retrying failed attempts.
    ///
    /// Every failure counts: transport errors, timeouts, non-2xx statuses
    /// and bodies that are not JSON. Under [`crate::RetryPolicy::Transient`]
    /// only the transient subset is retried. Once no attempt is left the
    /// call fails with [`ApiError::Network`] carrying the last cause.
    ///
    /// There is no way to abort a call started here; see
    /// [`ApiClient::request_until`].
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<JsonValue> {
        let url = format!("{}{}", self.base_url, endpoint);
        let headers = options.merged_headers();
        let body = options.body.as_ref().map(JsonValue::to_string);
        let mut state = RetryState::new(self.options.effective_max_attempts());

        loop {
            let attempt = TransportRequest {
                method: options.method,
                url: url.clone(),
                headers: headers.clone(),
                body: body.clone(),
            };

            let err = match self.send_once(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            let retry = state.record_failure(&err, self.options.retry_policy);

            #[cfg(feature = "tracing")]
            tracing::warn!(
                method = options.method.as_str(),
                attempt = state.attempt,
                max_attempts = state.max_attempts,
                error = %err,
                "request to {} failed",
                url
            );

            if !retry {
                return Err(ApiError::Network {
                    attempts: state.attempt,
                    source: err,
                });
            }

            self.wait_before_retry(state.attempt).await;
        }
    }

    /// Runs [`ApiClient::request`] until it finishes or `cancel` resolves,
    /// whichever comes first.
    ///
    /// Cancelling drops the in-flight attempt or backoff sleep and returns
    /// [`ApiError::Cancelled`].
    pub async fn request_until<F>(
        &self,
        endpoint: &str,
        options: RequestOptions,
        cancel: F,
    ) -> Result<JsonValue>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            () = cancel => Err(ApiError::Cancelled),
            result = self.request(endpoint, options) => result,
        }
    }

    async fn send_once(
        &self,
        request: TransportRequest,
    ) -> std::result::Result<JsonValue, AttemptError> {
        let response = match self.options.timeout_ms {
            Some(timeout_ms) => {
                tokio::time::timeout(
                    Duration::from_millis(timeout_ms),
                    self.transport.send(request),
                )
                .await
                .map_err(|_| AttemptError::Timeout)??
            }
            None => self.transport.send(request).await?,
        };

        if !response.is_success() {
            return Err(AttemptError::Http {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|err| {
            AttemptError::Decode(format!(
                "invalid response JSON: {err}; body: {}",
                response.body
            ))
        })
    }

    /// Sleeps `retry_backoff_ms * attempt` before the next attempt.
    async fn wait_before_retry(&self, attempt: usize) {
        let delay = backoff_delay(self.options.retry_backoff_ms, attempt);

        #[cfg(feature = "tracing")]
        tracing::debug!("retrying request after {} ms", delay.as_millis());

        sleep(delay).await;
    }
}
