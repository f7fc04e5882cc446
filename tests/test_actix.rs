#![cfg(feature = "actix4")]

extern crate actix_web4 as actix_web;

use actix_web::http::StatusCode;
use actix_web::test::TestRequest;
use actix_web::{error, FromRequest, HttpResponse, ResponseError};
use pretty_assertions::assert_eq;
use qs_fields::actix::{QsQuery, QsQueryConfig};
use qs_fields::Config;

#[derive(Debug, Default, PartialEq)]
struct Query {
    foo: u64,
    bars: Vec<u64>,
    limit: Option<u64>,
    remaining: bool,
}

qs_fields::decode_fields! {
    Query {
        foo => "foo",
        bars => "bars",
        limit => "limit",
        remaining => "remaining",
    }
}

#[test]
fn test_querystring_extractor() {
    futures::executor::block_on(async {
        let req = TestRequest::with_uri("/test?foo=1&bars=0&bars=1&limit=100&remaining=true")
            .to_http_request();

        let s = QsQuery::<Query>::extract(&req).await.unwrap();
        assert_eq!(
            s.into_inner(),
            Query {
                foo: 1,
                bars: vec![0, 1],
                limit: Some(100),
                remaining: true,
            }
        );
    })
}

#[test]
fn test_missing_query_keeps_defaults() {
    futures::executor::block_on(async {
        let req = TestRequest::with_uri("/test").to_http_request();

        let s = QsQuery::<Query>::extract(&req).await.unwrap();
        assert_eq!(*s, Query::default());
    })
}

#[test]
fn test_default_error_handler() {
    futures::executor::block_on(async {
        let req = TestRequest::with_uri("/test?foo=-1").to_http_request();

        let e = QsQuery::<Query>::extract(&req).await.unwrap_err();
        assert_eq!(
            e.as_response_error().status_code(),
            StatusCode::BAD_REQUEST
        );
    })
}

#[test]
fn test_custom_error_handler() {
    futures::executor::block_on(async {
        let req = TestRequest::with_uri("/test?foo=x")
            .app_data(QsQueryConfig::default().error_handler(|e, _| {
                let resp = HttpResponse::UnprocessableEntity().finish();
                error::InternalError::from_response(e, resp).into()
            }))
            .to_http_request();

        let e = QsQuery::<Query>::extract(&req).await.unwrap_err();
        assert_eq!(
            e.as_response_error().error_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    })
}

#[test]
fn test_custom_qs_config() {
    futures::executor::block_on(async {
        let uri = "/test?foo=1&bars=%zz";

        let req = TestRequest::with_uri(uri).to_http_request();
        let e = QsQuery::<Query>::extract(&req).await.unwrap_err();
        assert_eq!(
            e.as_response_error().status_code(),
            StatusCode::BAD_REQUEST
        );

        // lenient decoding keeps the escape, which is not a boolean literal
        let req = TestRequest::with_uri("/test?foo=1&remaining=%zz")
            .app_data(QsQueryConfig::default().qs_config(Config::new().strict(false)))
            .to_http_request();
        let e = QsQuery::<Query>::extract(&req).await.unwrap_err();
        assert!(e.to_string().contains("invalid boolean literal"), "{e}");
    })
}

#[test]
fn test_decode_error_status() {
    let err = qs_fields::from_str::<Query>("foo=%zz").unwrap_err();
    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
}
