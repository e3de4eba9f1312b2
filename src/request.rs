use serde_json::Value as JsonValue;

/// HTTP verbs the backend accepts.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Per-call request options: method, JSON body and extra headers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub(crate) method: Method,
    pub(crate) body: Option<JsonValue>,
    pub(crate) headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get() -> Self {
        Self::new().method(Method::Get)
    }

    pub fn post(body: JsonValue) -> Self {
        Self::new().method(Method::Post).body(body)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a header. Names and values are not validated here; an invalid
    /// one fails at send time like any other transport error.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Default `Content-Type` first, then caller headers. A caller header
    /// with the same name (case-insensitive) replaces an earlier one.
    pub(crate) fn merged_headers(&self) -> Vec<(String, String)> {
        let mut merged: Vec<(String, String)> =
            vec![("Content-Type".to_owned(), "application/json".to_owned())];
        for (name, value) in &self.headers {
            match merged
                .iter_mut()
                .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            {
                Some(slot) => *slot = (name.clone(), value.clone()),
                None => merged.push((name.clone(), value.clone())),
            }
        }
        merged
    }
}
