use itertools::Itertools;
use reqwest::{header::HeaderMap, Request, StatusCode};
use tracing::info;

pub(super) fn request(req: &Request) {
    let head = format!("{} {} {:?}", req.method(), req.url(), req.version());
    info!(
        target: "elastic_aliases::dump",
        "\n{}",
        with_headers(head, req.headers(), None)
    );
}

pub(super) fn response(status: StatusCode, headers: &HeaderMap, body: &[u8]) {
    info!(
        target: "elastic_aliases::dump",
        "\n{}",
        with_headers(status.to_string(), headers, Some(body))
    );
}

fn with_headers(head: String, headers: &HeaderMap, body: Option<&[u8]>) -> String {
    let lines = headers
        .iter()
        .map(|(name, value)| format!("{}: {}", name, value.to_str().unwrap_or("<binary>")))
        .join("\n");

    let mut out = head;
    if !lines.is_empty() {
        out.push('\n');
        out.push_str(&lines);
    }

    if let Some(body) = body {
        out.push_str("\n\n");
        out.push_str(&String::from_utf8_lossy(body));
    }

    out
}
