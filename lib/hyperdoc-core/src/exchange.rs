use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{Request, Response};

/// A captured HTTP request and the response it received.
///
/// The exchange is produced by whatever drives the API under test; documentation only
/// reads it.
///
/// ```rust
/// use bytes::Bytes;
/// use hyperdoc_core::CapturedExchange;
///
/// # fn example() -> Result<(), http::Error> {
/// let request = http::Request::get("/notes").body(Bytes::new())?;
/// let response = http::Response::builder()
///     .header("Content-Type", "application/hal+json")
///     .body(Bytes::from_static(br#"{"_links": {}}"#))?;
///
/// let exchange = CapturedExchange::new(request, response);
/// assert_eq!(exchange.response_content_type(), Some("application/hal+json"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CapturedExchange {
    request: Request<Bytes>,
    response: Response<Bytes>,
}

impl CapturedExchange {
    /// Wraps a request and its response.
    pub fn new(request: Request<Bytes>, response: Response<Bytes>) -> Self {
        Self { request, response }
    }

    /// The captured request.
    pub fn request(&self) -> &Request<Bytes> {
        &self.request
    }

    /// The captured response.
    pub fn response(&self) -> &Response<Bytes> {
        &self.response
    }

    /// The response body.
    pub fn response_body(&self) -> &[u8] {
        self.response.body()
    }

    /// The declared `Content-Type` of the response, verbatim.
    ///
    /// Returns `None` when the header is absent or not visible ASCII.
    pub fn response_content_type(&self) -> Option<&str> {
        self.response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
    }
}
