//! Route helpers for the content backend.
//!
//! These are plain delegations to [`ApiClient::get`] and
//! [`ApiClient::post`]; the response is whatever JSON the backend sends.

use serde_json::Value as JsonValue;
use urlencoding::encode;

use crate::{ApiClient, ChatRequest, ChatTurn, Result, SearchRequest, Transport};

impl<T: Transport> ApiClient<T> {
    /// Learning articles under `/learning`.
    pub fn learning(&self) -> LearningApi<'_, T> {
        LearningApi { client: self }
    }

    /// News items under `/news`.
    pub fn news(&self) -> NewsApi<'_, T> {
        NewsApi { client: self }
    }

    /// Q&A entries under `/questions`.
    pub fn questions(&self) -> QuestionsApi<'_, T> {
        QuestionsApi { client: self }
    }

    /// Global search across content kinds. No categories means all of them.
    pub async fn search<I, S>(&self, query: &str, categories: I) -> Result<JsonValue>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post("/search", &SearchRequest::new(query, categories)).await
    }

    /// Sends a chat message along with the prior turns, if any.
    pub async fn chat(&self, message: &str, history: Option<&[ChatTurn]>) -> Result<JsonValue> {
        let body = ChatRequest {
            message: message.to_owned(),
            history: history.map(<[ChatTurn]>::to_vec),
        };
        self.post("/chat", &body).await
    }
}

fn filtered_path(root: &str, key: &str, filter: Option<&str>) -> String {
    match filter {
        Some(value) if !value.is_empty() => format!("{root}?{key}={}", encode(value)),
        _ => root.to_owned(),
    }
}

fn item_path(root: &str, id: &str) -> String {
    format!("{root}/{}", encode(id))
}

fn search_path(root: &str, keyword: &str) -> String {
    format!("{root}/search/{}", encode(keyword))
}

/// Handle returned by [`ApiClient::learning`]. It is `Copy`, and
/// its methods take it by value, so several calls can be joined at once.
#[derive(Debug)]
pub struct LearningApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T> Clone for LearningApi<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LearningApi<'_, T> {}

impl<T: Transport> LearningApi<'_, T> {
    /// All articles, optionally narrowed to one difficulty level.
    pub async fn all(self, difficulty: Option<&str>) -> Result<JsonValue> {
        self.client
            .get(&filtered_path("/learning", "difficulty", difficulty))
            .await
    }

    pub async fn by_id(self, id: &str) -> Result<JsonValue> {
        self.client.get(&item_path("/learning", id)).await
    }

    pub async fn search(self, keyword: &str) -> Result<JsonValue> {
        self.client.get(&search_path("/learning", keyword)).await
    }
}

/// Handle returned by [`ApiClient::news`].
#[derive(Debug)]
pub struct NewsApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T> Clone for NewsApi<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NewsApi<'_, T> {}

impl<T: Transport> NewsApi<'_, T> {
    pub async fn all(self, category: Option<&str>) -> Result<JsonValue> {
        self.client
            .get(&filtered_path("/news", "category", category))
            .await
    }

    pub async fn by_id(self, id: &str) -> Result<JsonValue> {
        self.client.get(&item_path("/news", id)).await
    }

    pub async fn search(self, keyword: &str) -> Result<JsonValue> {
        self.client.get(&search_path("/news", keyword)).await
    }
}

/// Handle returned by [`ApiClient::questions`].
#[derive(Debug)]
pub struct QuestionsApi<'a, T> {
    client: &'a ApiClient<T>,
}

impl<T> Clone for QuestionsApi<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for QuestionsApi<'_, T> {}

impl<T: Transport> QuestionsApi<'_, T> {
    pub async fn all(self, category: Option<&str>) -> Result<JsonValue> {
        self.client
            .get(&filtered_path("/questions", "category", category))
            .await
    }

    pub async fn by_id(self, id: &str) -> Result<JsonValue> {
        self.client.get(&item_path("/questions", id)).await
    }

    pub async fn search(self, keyword: &str) -> Result<JsonValue> {
        self.client.get(&search_path("/questions", keyword)).await
    }

    /// Questions the backend considers related to `id`.
    pub async fn related(self, id: &str) -> Result<JsonValue> {
        self.client.get(&item_path("/questions/related", id)).await
    }
}
