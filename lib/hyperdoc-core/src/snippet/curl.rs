use http::Method;
use tracing::warn;

use super::{Snippet, SnippetContext};
use crate::DocumentationError;

/// The request as a `curl` command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlRequestSnippet;

/// The response as raw HTTP.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpResponseSnippet;

/// The `curl` command followed by the raw HTTP response.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlRequestAndResponseSnippet;

impl Snippet for CurlRequestSnippet {
    fn name(&self) -> &str {
        "curl-request"
    }

    fn render(&self, context: &SnippetContext<'_>) -> Result<String, DocumentationError> {
        Ok(curl_request(context))
    }
}

impl Snippet for HttpResponseSnippet {
    fn name(&self) -> &str {
        "http-response"
    }

    fn render(&self, context: &SnippetContext<'_>) -> Result<String, DocumentationError> {
        Ok(http_response(context))
    }
}

impl Snippet for CurlRequestAndResponseSnippet {
    fn name(&self) -> &str {
        "curl-request-and-response"
    }

    fn render(&self, context: &SnippetContext<'_>) -> Result<String, DocumentationError> {
        let mut out = curl_request(context);
        out.push('\n');
        out.push_str(&http_response(context));
        Ok(out)
    }
}

fn curl_request(context: &SnippetContext<'_>) -> String {
    let request = context.exchange.request();
    let uri = request.uri();
    let target = if uri.authority().is_some() {
        uri.to_string()
    } else {
        let path = uri.path_and_query().map_or("/", |it| it.as_str());
        format!("{}{path}", context.config.default_base_uri())
    };

    let mut command = format!("$ curl {} -i", quote(&target));
    if request.method() != Method::GET {
        command.push_str(" -X ");
        command.push_str(request.method().as_str());
    }
    for (name, value) in request.headers() {
        match value.to_str() {
            Ok(value) => {
                command.push_str(" -H ");
                command.push_str(&quote(&format!("{name}: {value}")));
            }
            Err(error) => warn!(%name, %error, "skip non-textual header in curl snippet"),
        }
    }
    if !request.body().is_empty() {
        command.push_str(" -d ");
        command.push_str(&quote(&String::from_utf8_lossy(request.body())));
    }

    code_block("bash", &command)
}

fn http_response(context: &SnippetContext<'_>) -> String {
    let response = context.exchange.response();
    let mut message = format!("{:?} {}", response.version(), response.status());
    for (name, value) in response.headers() {
        match value.to_str() {
            Ok(value) => message.push_str(&format!("\n{name}: {value}")),
            Err(error) => warn!(%name, %error, "skip non-textual header in response snippet"),
        }
    }
    if !response.body().is_empty() {
        message.push_str("\n\n");
        message.push_str(&String::from_utf8_lossy(response.body()));
    }

    code_block("http", &message)
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

fn code_block(language: &str, content: &str) -> String {
    format!("[source,{language}]\n----\n{content}\n----\n")
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::{Request, Response, StatusCode};

    use super::*;
    use crate::{CapturedExchange, DocumentationConfig, Extractors};

    fn render(snippet: &impl Snippet, exchange: &CapturedExchange) -> String {
        let config = DocumentationConfig::default();
        let context = SnippetContext {
            exchange,
            config: &config,
            extractors: Extractors::standard(),
        };
        snippet.render(&context).expect("http snippets always render")
    }

    fn create_note_exchange() -> CapturedExchange {
        let request = Request::post("/notes")
            .header("Content-Type", "application/hal+json")
            .body(Bytes::from_static(br#"{"title":"It's REST"}"#))
            .expect("valid request");
        let response = Response::builder()
            .status(StatusCode::CREATED)
            .header("Location", "http://localhost:8080/notes/1")
            .body(Bytes::new())
            .expect("valid response");
        CapturedExchange::new(request, response)
    }

    #[test]
    fn should_render_curl_request() {
        let snippet = render(&CurlRequestSnippet, &create_note_exchange());

        insta::assert_snapshot!(snippet, @r#"
        [source,bash]
        ----
        $ curl 'http://localhost:8080/notes' -i -X POST -H 'content-type: application/hal+json' -d '{"title":"It'\''s REST"}'
        ----
        "#);
    }

    #[test]
    fn should_keep_absolute_request_uri() {
        let request = Request::get("https://api.example.com/tags?page=2")
            .body(Bytes::new())
            .expect("valid request");
        let exchange = CapturedExchange::new(request, Response::new(Bytes::new()));

        let snippet = render(&CurlRequestSnippet, &exchange);

        assert!(snippet.contains("$ curl 'https://api.example.com/tags?page=2' -i\n"));
    }

    #[test]
    fn should_render_http_response() {
        let response = Response::builder()
            .header("Content-Type", "application/hal+json")
            .body(Bytes::from_static(br#"{"_links":{}}"#))
            .expect("valid response");
        let exchange = CapturedExchange::new(Request::new(Bytes::new()), response);

        let snippet = render(&HttpResponseSnippet, &exchange);

        insta::assert_snapshot!(snippet, @r#"
        [source,http]
        ----
        HTTP/1.1 200 OK
        content-type: application/hal+json

        {"_links":{}}
        ----
        "#);
    }

    #[test]
    fn should_render_request_and_response() {
        let snippet = render(&CurlRequestAndResponseSnippet, &create_note_exchange());

        insta::assert_snapshot!(snippet, @r#"
        [source,bash]
        ----
        $ curl 'http://localhost:8080/notes' -i -X POST -H 'content-type: application/hal+json' -d '{"title":"It'\''s REST"}'
        ----

        [source,http]
        ----
        HTTP/1.1 201 Created
        location: http://localhost:8080/notes/1
        ----
        "#);
    }
}
