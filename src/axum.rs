//! Functionality for using `qs_fields` with `axum`.
//!
//! Enable with the `axum` feature.

use axum_framework as axum;

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{Config, Decode, Error as QsError};

pub use crate::web::QsQuery;

/// Extract typed information from the request's query.
///
/// ## Example
///
/// ```rust
/// # extern crate axum_framework as axum;
/// use qs_fields::axum::QsQuery;
///
/// #[derive(Debug, Default)]
/// pub struct UsersFilter {
///    id: Vec<u64>,
///    page: u32,
/// }
///
/// qs_fields::decode_fields! {
///     UsersFilter { id => "id", page => "page" }
/// }
///
/// async fn filter_users(QsQuery(info): QsQuery<UsersFilter>) -> String {
///     info.id
///         .iter()
///         .map(|i| i.to_string())
///         .collect::<Vec<String>>()
///         .join(", ")
/// }
///
/// fn main() {
///     let app = axum::Router::<()>::new()
///         .route("/users", axum::routing::get(filter_users));
/// }
/// ```
impl<T, S> FromRequestParts<S> for QsQuery<T>
where
    T: Decode + Default + Send,
    S: Send + Sync,
{
    type Rejection = QsQueryRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_config = parts
            .extensions
            .get::<QsQueryConfig>()
            .cloned()
            .unwrap_or_default();
        let query = parts.uri.query().unwrap_or_default();
        query_config.decode(query).map(QsQuery)
    }
}

/// Rejection type for extractors that decode query strings
#[derive(Debug, thiserror::Error)]
#[error("Failed to decode query string. Error: {error}")]
pub struct QsQueryRejection {
    #[source]
    error: QsError,
    status: StatusCode,
}

impl QsQueryRejection {
    /// Create new rejection
    pub fn new(error: QsError, status: StatusCode) -> Self {
        QsQueryRejection { error, status }
    }

    /// The decoding error behind this rejection
    pub fn error(&self) -> &QsError {
        &self.error
    }
}

impl IntoResponse for QsQueryRejection {
    fn into_response(self) -> Response {
        (self.status, self.to_string()).into_response()
    }
}

/// Query extractor configuration
///
/// Inserted as a request extension, usually with a layer.
///
/// ## Example
///
/// ```rust
/// # extern crate axum_framework as axum;
/// use axum::{http::StatusCode, Extension};
/// use qs_fields::axum::{QsQuery, QsQueryConfig, QsQueryRejection};
/// use qs_fields::Config;
///
/// #[derive(Default)]
/// struct Info {
///     username: String,
/// }
///
/// qs_fields::decode_fields! {
///     Info { username => "username" }
/// }
///
/// async fn index(QsQuery(info): QsQuery<Info>) -> String {
///     format!("Welcome {}!", info.username)
/// }
///
/// fn main() {
///     let app = axum::Router::<()>::new()
///         .route("/index.html", axum::routing::get(index))
///         .layer(Extension(
///             QsQueryConfig::new(Config::new().strict(false)).error_handler(|err| {
///                 QsQueryRejection::new(err, StatusCode::UNPROCESSABLE_ENTITY)
///             }),
///         ));
/// }
/// ```
#[derive(Clone, Default)]
pub struct QsQueryConfig {
    config: Config,
    error_handler: Option<Arc<dyn Fn(QsError) -> QsQueryRejection + Send + Sync>>,
}

impl QsQueryConfig {
    /// Create new config with the given decoding `Config`
    pub fn new(config: Config) -> Self {
        Self {
            config,
            error_handler: None,
        }
    }

    /// Set custom error handler
    pub fn error_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(QsError) -> QsQueryRejection + Send + Sync + 'static,
    {
        self.error_handler = Some(Arc::new(f));
        self
    }

    fn decode<T: Decode + Default>(&self, query: &str) -> Result<T, QsQueryRejection> {
        self.config.from_str(query).map_err(|err| match &self.error_handler {
            Some(handler) => handler(err),
            None => QsQueryRejection::new(err, StatusCode::BAD_REQUEST),
        })
    }
}

impl std::fmt::Debug for QsQueryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QsQueryConfig")
            .field("config", &self.config)
            .field("error_handler", &self.error_handler.is_some())
            .finish()
    }
}
