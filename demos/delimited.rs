use qs_fields::helpers::CommaSeparated;

#[derive(Debug, Default)]
struct Query {
    r: CommaSeparated<u8>,
    s: u8,
}

qs_fields::decode_fields! {
    Query { r => "r", s => "s" }
}

fn main() {
    let q = "s=12&r=1,2,3";
    let q: Query = qs_fields::from_str(q).unwrap();
    println!("{:?}", q);
}
