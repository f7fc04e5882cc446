use pretty_assertions::assert_eq;
use qs_fields::helpers::{CommaSeparated, Delimited, PipeDelimited, SpaceDelimited};
use qs_fields::Error;

#[derive(Debug, Default, PartialEq)]
struct Query {
    ids: CommaSeparated<u32>,
    names: PipeDelimited<String>,
    words: SpaceDelimited<String>,
    coords: Option<Delimited<f64, ';'>>,
}

qs_fields::decode_fields! {
    Query {
        ids => "ids",
        names => "names",
        words => "words",
        coords => "coords",
    }
}

#[test]
fn delimited_styles() {
    let query: Query =
        qs_fields::from_str("ids=1,2,3&names=a|b&words=hello+big%20world&coords=1.5;-2").unwrap();
    assert_eq!(query.ids.into_inner(), vec![1, 2, 3]);
    assert_eq!(*query.names, vec!["a", "b"]);
    assert_eq!(*query.words, vec!["hello", "big", "world"]);
    assert_eq!(query.coords, Some(Delimited(vec![1.5, -2.0])));
}

#[test]
fn delimited_replaces_previous_list() {
    let mut query = Query {
        ids: vec![9, 9, 9, 9].into(),
        ..Default::default()
    };
    qs_fields::decode("ids=4,5", &mut query).unwrap();
    assert_eq!(*query.ids, vec![4, 5]);
}

#[test]
fn delimited_only_reads_first_value() {
    let query: Query = qs_fields::from_str("ids=1,2&ids=3,4").unwrap();
    assert_eq!(*query.ids, vec![1, 2]);
}

#[test]
fn delimited_empty_value_is_skipped() {
    let mut query = Query {
        ids: vec![7].into(),
        ..Default::default()
    };
    qs_fields::decode("ids=", &mut query).unwrap();
    assert_eq!(*query.ids, vec![7]);
}

#[test]
fn delimited_bad_element() {
    let mut query = Query {
        ids: vec![7].into(),
        ..Default::default()
    };
    let err = qs_fields::decode("ids=1,x,3", &mut query).unwrap_err();
    match &err {
        Error::Custom(inner) => assert!(inner.is::<std::num::ParseIntError>()),
        other => panic!("unexpected error: {other:?}"),
    }
    insta::assert_snapshot!(err.to_string(), @"invalid digit found in string");
    assert_eq!(*query.ids, vec![7]);
}
