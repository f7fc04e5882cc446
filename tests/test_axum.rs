#![cfg(feature = "axum")]

extern crate axum_framework as axum;

use axum::{extract::FromRequestParts, http::StatusCode, response::IntoResponse};
use pretty_assertions::assert_eq;
use qs_fields::axum::{QsQuery, QsQueryConfig, QsQueryRejection};
use qs_fields::Config;

#[derive(Debug, PartialEq)]
struct Query {
    foo: u64,
    bars: Vec<u64>,
    limit: u64,
    offset: u64,
    remaining: bool,
}

impl Default for Query {
    fn default() -> Self {
        Query {
            foo: 0,
            bars: Vec::new(),
            limit: 20,
            offset: 0,
            remaining: false,
        }
    }
}

qs_fields::decode_fields! {
    Query {
        foo => "foo",
        bars => "bars",
        limit => "limit",
        offset => "offset",
        remaining => "remaining",
    }
}

async fn extract(req: axum::http::Request<()>) -> Result<QsQuery<Query>, QsQueryRejection> {
    let (mut req_parts, _) = req.into_parts();
    QsQuery::<Query>::from_request_parts(&mut req_parts, &()).await
}

#[test]
fn test_default_error_handler() {
    futures::executor::block_on(async {
        let req = axum::http::Request::builder()
            .uri("/test?foo=one")
            .body(())
            .unwrap();

        let e = extract(req).await.unwrap_err();
        assert!(matches!(e.error(), qs_fields::Error::Conversion { .. }));
        assert_eq!(e.into_response().status(), StatusCode::BAD_REQUEST);
    })
}

#[test]
fn test_custom_error_handler() {
    futures::executor::block_on(async {
        let req = axum::http::Request::builder()
            .uri("/test?foo=1&bars=3&limit=-100")
            .extension(QsQueryConfig::default().error_handler(|err| {
                QsQueryRejection::new(err, StatusCode::UNPROCESSABLE_ENTITY)
            }))
            .body(())
            .unwrap();

        let query = extract(req).await;
        assert!(query.is_err());
        assert_eq!(
            query.unwrap_err().into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    })
}

#[test]
fn test_querystring_extractor() {
    futures::executor::block_on(async {
        let req = axum::http::Request::builder()
            .uri("/test?foo=1&bars=0&bars=1&limit=100&offset=50&remaining")
            .body(())
            .unwrap();

        let QsQuery(s) = extract(req).await.unwrap();
        assert_eq!(
            s,
            Query {
                foo: 1,
                bars: vec![0, 1],
                limit: 100,
                offset: 50,
                remaining: true,
            }
        );
    })
}

#[test]
fn test_missing_query_keeps_defaults() {
    futures::executor::block_on(async {
        let req = axum::http::Request::builder()
            .uri("/test")
            .body(())
            .unwrap();

        let s = extract(req).await.unwrap();
        assert_eq!(s.into_inner(), Query::default());
    })
}

#[test]
fn test_default_qs_config() {
    futures::executor::block_on(async {
        let req = axum::http::Request::builder()
            .uri("/test?foo=1&offset=50%")
            .body(())
            .unwrap();

        let e = extract(req).await.unwrap_err();
        assert!(matches!(e.error(), qs_fields::Error::Parse { .. }));
        assert_eq!(e.into_response().status(), StatusCode::BAD_REQUEST);
    })
}

#[test]
fn test_custom_qs_config() {
    futures::executor::block_on(async {
        #[derive(Debug, Default)]
        struct Search {
            q: String,
        }

        qs_fields::decode_fields! {
            Search { q => "q" }
        }

        let req = axum::http::Request::builder()
            .uri("/test?q=50%25%")
            .extension(QsQueryConfig::new(Config::new().strict(false)))
            .body(())
            .unwrap();

        let (mut req_parts, _) = req.into_parts();
        let s = QsQuery::<Search>::from_request_parts(&mut req_parts, &())
            .await
            .unwrap();
        assert_eq!(s.q, "50%%");
    })
}

#[test]
fn test_rejection_message() {
    futures::executor::block_on(async {
        let req = axum::http::Request::builder()
            .uri("/test?limit=lots")
            .body(())
            .unwrap();

        let e = extract(req).await.unwrap_err();
        insta::assert_snapshot!(
            e.to_string(),
            @"Failed to decode query string. Error: invalid value `lots` for `limit`: invalid digit found in string"
        );
        let source = std::error::Error::source(&e).unwrap();
        assert_eq!(source.to_string(), e.error().to_string());
    })
}
