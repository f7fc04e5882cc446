//! Functionality for using `qs_fields` with `actix_web`.
//!
//! Enable with the `actix4` feature.

use actix_web4 as actix_web;

use std::sync::Arc;

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::{Error as ActixError, FromRequest, HttpRequest, ResponseError};
use futures_util::future::{ready, Ready};

use crate::{Config, Decode, Error as QsError};

pub use crate::web::QsQuery;

impl ResponseError for QsError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// Extract typed information from the request's query.
///
/// `qs_fields` equivalent to `actix_web::web::Query`, decoding into
/// `T::default()`.
///
/// ## Example
///
/// ```rust
/// # extern crate actix_web4 as actix_web;
/// use actix_web::{web, App, HttpResponse};
/// use qs_fields::actix::QsQuery;
///
/// #[derive(Default)]
/// pub struct UsersFilter {
///    id: Vec<u64>,
/// }
///
/// qs_fields::decode_fields! {
///     UsersFilter { id => "id" }
/// }
///
/// // Use `QsQuery` extractor for query information.
/// // The correct request for this handler would be `/users?id=1&id=2"`
/// async fn filter_users(info: QsQuery<UsersFilter>) -> HttpResponse {
///     HttpResponse::Ok().body(
///         info.id.iter().map(|i| i.to_string()).collect::<Vec<String>>().join(", ")
///     )
/// }
///
/// fn main() {
///     let app = App::new().service(
///        web::resource("/users")
///            .route(web::get().to(filter_users))
///     );
/// }
/// ```
impl<T> FromRequest for QsQuery<T>
where
    T: Decode + Default,
{
    type Error = ActixError;
    type Future = Ready<Result<Self, ActixError>>;

    #[inline]
    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let query_config = req.app_data::<QsQueryConfig>();
        let config = query_config.map(|c| c.config).unwrap_or_default();

        let res = config
            .from_str::<T>(req.query_string())
            .map(QsQuery)
            .map_err(|e| match query_config.and_then(|c| c.ehandler.as_ref()) {
                Some(handler) => handler(e, req),
                None => e.into(),
            });

        ready(res)
    }
}

/// Query extractor configuration
///
/// ```rust
/// # extern crate actix_web4 as actix_web;
/// use actix_web::{error, web, App, HttpResponse};
/// use qs_fields::actix::{QsQuery, QsQueryConfig};
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
/// async fn index(info: QsQuery<Info>) -> HttpResponse {
///     HttpResponse::Ok().body(format!("Welcome {}!", info.username))
/// }
///
/// fn main() {
///     let qs_config = QsQueryConfig::default()
///         .error_handler(|err, req| {  // <- create custom error response
///             error::InternalError::from_response(err, HttpResponse::Conflict().finish()).into()
///         })
///         .qs_config(Config::new().strict(false));
///
///     let app = App::new().service(
///             web::resource("/index.html").app_data(qs_config)
///                 .route(web::post().to(index))
///         );
/// }
/// ```
#[derive(Clone, Default)]
pub struct QsQueryConfig {
    ehandler: Option<Arc<dyn Fn(QsError, &HttpRequest) -> ActixError + Send + Sync>>,
    config: Config,
}

impl QsQueryConfig {
    /// Set custom error handler
    pub fn error_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(QsError, &HttpRequest) -> ActixError + Send + Sync + 'static,
    {
        self.ehandler = Some(Arc::new(f));
        self
    }

    /// Set custom decoding configuration
    pub fn qs_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
}

impl std::fmt::Debug for QsQueryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QsQueryConfig")
            .field("config", &self.config)
            .field("error_handler", &self.ehandler.is_some())
            .finish()
    }
}
