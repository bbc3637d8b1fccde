use bytes::Bytes;
use http::{Request, Response, StatusCode};
use hyperdoc_core::CapturedExchange;
use rstest::fixture;
use tracing::info;

pub fn init_tracing() {
    // should be run once, fail otherwise, we skip that error
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    info!("Tracing initialized");
}

pub fn get_exchange(path: &str, content_type: &str, body: &'static str) -> CapturedExchange {
    init_tracing();
    let request = Request::get(path)
        .header("Accept", content_type)
        .body(Bytes::new())
        .unwrap_or_else(|error| panic!("invalid request for {path}: {error}"));
    let response = Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", content_type)
        .body(Bytes::from_static(body.as_bytes()))
        .unwrap_or_else(|error| panic!("invalid response for {path}: {error}"));
    CapturedExchange::new(request, response)
}

#[fixture]
pub fn index() -> CapturedExchange {
    get_exchange(
        "/",
        "application/hal+json",
        include_str!("../payloads/index.json"),
    )
}

#[fixture]
pub fn note() -> CapturedExchange {
    get_exchange(
        "/notes/1",
        "application/hal+json",
        include_str!("../payloads/note.json"),
    )
}

#[fixture]
pub fn tag() -> CapturedExchange {
    get_exchange(
        "/tags/1",
        "application/json",
        include_str!("../payloads/tag-atom.json"),
    )
}

#[fixture]
pub fn note_schema() -> CapturedExchange {
    get_exchange(
        "/notes/schema",
        "application/schema+json",
        include_str!("../payloads/single-schema.json"),
    )
}
