use std::io::{self, Read, Write};
use std::net::TcpStream;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashboard_core::{messages_for, BridgePayload, Msg, Trigger, OPTION_FIELD, VIDEO_URL_FIELD};
use dashboard_engine::{Output, SessionId, SessionRegistry};
use dashboard_logging::{dash_debug, dash_warn};
use dashboard_page::{notice_html, render, Element};
use serde_json::json;

const MAX_HEADER_BYTES: usize = 16 * 1024;
const MAX_BODY_BYTES: usize = 64 * 1024;
const READ_TIMEOUT: Duration = Duration::from_secs(5);
const WRITE_TIMEOUT: Duration = Duration::from_secs(5);
const SESSION_PARAM: &str = "session";
const BRIDGE_PREFIX: &str = "/bridge/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    fn html(body: String) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body,
        }
    }

    fn fragment(status: u16, html: String) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: json!({ "html": html }).to_string(),
        }
    }

    fn plain(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain; charset=utf-8",
            body: body.to_string(),
        }
    }
}

/// One of the server's connection slots, released when dropped.
pub struct ConnectionGuard {
    active: Arc<AtomicUsize>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.active.fetch_sub(1, Ordering::SeqCst);
    }
}

pub fn try_acquire_connection_slot(
    active: &Arc<AtomicUsize>,
    limit: usize,
) -> Option<ConnectionGuard> {
    loop {
        let current = active.load(Ordering::SeqCst);
        if current >= limit {
            return None;
        }
        if active
            .compare_exchange(current, current + 1, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return Some(ConnectionGuard {
                active: Arc::clone(active),
            });
        }
    }
}

/// Answers 503 without reading the request.
pub fn reject_busy(mut stream: TcpStream) -> io::Result<()> {
    stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
    write_response(&mut stream, &HttpResponse::plain(503, "server busy"))
}

/// Serves exactly one request on the connection, then closes it.
pub fn serve_connection(mut stream: TcpStream, registry: &SessionRegistry) -> io::Result<()> {
    stream.set_read_timeout(Some(READ_TIMEOUT))?;
    stream.set_write_timeout(Some(WRITE_TIMEOUT))?;
    let response = match read_request(&mut stream) {
        Ok(request) => route(registry, &request),
        Err(err) => {
            dash_warn!("Rejected malformed request: {}", err);
            HttpResponse::plain(400, "bad request")
        }
    };
    write_response(&mut stream, &response)
}

pub fn route(registry: &SessionRegistry, request: &HttpRequest) -> HttpResponse {
    dash_debug!("{} {}", request.method, request.path);
    match (request.method.as_str(), request.path.as_str()) {
        ("GET", "/") => match registry.open() {
            Ok((id, view)) => {
                let page = render(registry.config(), &view, &id.to_string());
                HttpResponse::html(page.to_html())
            }
            Err(err) => {
                dash_warn!("Refusing page load: {}", err);
                HttpResponse::plain(503, "too many open sessions, try again later")
            }
        },
        ("POST", "/theme") => match session_of(request) {
            Some(id) => match registry.handle(id, vec![Msg::ThemeToggled]) {
                Ok(_) => HttpResponse::plain(204, ""),
                Err(_) => expired(),
            },
            None => expired(),
        },
        ("POST", path) if path.starts_with(BRIDGE_PREFIX) => {
            let name = &path[BRIDGE_PREFIX.len()..];
            let Some(trigger) = Trigger::from_name(name) else {
                dash_warn!("Unknown bridge trigger {:?}", name);
                return HttpResponse::plain(404, "unknown trigger");
            };
            let Some(id) = session_of(request) else {
                return expired();
            };
            let msgs = messages_for(trigger, payload_of(&request.body));
            match registry.handle(id, msgs) {
                Ok(outputs) => HttpResponse::fragment(200, render_outputs(&outputs)),
                Err(_) => expired(),
            }
        }
        (_, "/" | "/theme") => HttpResponse::plain(405, "method not allowed"),
        (_, path) if path.starts_with(BRIDGE_PREFIX) => {
            HttpResponse::plain(405, "method not allowed")
        }
        _ => HttpResponse::plain(404, "not found"),
    }
}

fn session_of(request: &HttpRequest) -> Option<SessionId> {
    request.query_value(SESSION_PARAM).and_then(SessionId::parse)
}

fn payload_of(body: &[u8]) -> BridgePayload {
    let mut payload = BridgePayload::default();
    for (key, value) in url::form_urlencoded::parse(body) {
        if key == VIDEO_URL_FIELD {
            payload.video_url = Some(value.into_owned());
        } else if key == OPTION_FIELD {
            payload.option = Some(value.into_owned());
        }
    }
    payload
}

fn render_outputs(outputs: &[Output]) -> String {
    outputs
        .iter()
        .map(|output| match output {
            Output::Html(html) => html.clone(),
            Output::Notice(notice) => notice_html(notice),
        })
        .collect()
}

fn expired() -> HttpResponse {
    let html = Element::new("div")
        .class("notice notice-error")
        .attr("role", "alert")
        .text("This session has expired. Please reload the page.")
        .to_html();
    HttpResponse::fragment(404, html)
}

pub fn read_request(stream: &mut impl Read) -> io::Result<HttpRequest> {
    let mut buffer = Vec::with_capacity(1024);
    let header_end = loop {
        if let Some(pos) = find_header_end(&buffer) {
            break pos;
        }
        if buffer.len() > MAX_HEADER_BYTES {
            return Err(invalid("request header too large"));
        }
        let mut chunk = [0u8; 1024];
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            return Err(invalid("connection closed before end of headers"));
        }
        buffer.extend_from_slice(&chunk[..n]);
    };

    let header_str = String::from_utf8_lossy(&buffer[..header_end]).into_owned();
    let mut lines = header_str.lines();
    let request_line = lines.next().ok_or_else(|| invalid("missing request line"))?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().ok_or_else(|| invalid("missing method"))?;
    let target = parts.next().ok_or_else(|| invalid("missing path"))?;
    if !target.starts_with('/') {
        return Err(invalid("invalid path"));
    }

    let mut content_length = 0usize;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-length") {
                content_length = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid("invalid content length"))?;
            }
        }
    }
    if content_length > MAX_BODY_BYTES {
        return Err(invalid("request body too large"));
    }

    let mut body = buffer[header_end + 4..].to_vec();
    while body.len() < content_length {
        let mut chunk = [0u8; 1024];
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "request body truncated",
            ));
        }
        body.extend_from_slice(&chunk[..n]);
    }
    body.truncate(content_length);

    let (path, query) = match target.split_once('?') {
        Some((path, query)) => (
            path.to_string(),
            url::form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        ),
        None => (target.to_string(), Vec::new()),
    };

    Ok(HttpRequest {
        method: method.to_string(),
        path,
        query,
        body,
    })
}

pub fn write_response(stream: &mut impl Write, response: &HttpResponse) -> io::Result<()> {
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nCache-Control: no-store\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason_phrase(response.status),
        response.content_type,
        response.body.len()
    );
    stream.write_all(head.as_bytes())?;
    stream.write_all(response.body.as_bytes())?;
    stream.flush()
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|window| window == b"\r\n\r\n")
}

fn invalid(message: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message.to_string())
}

fn reason_phrase(code: u16) -> &'static str {
    match code {
        200 => "OK",
        204 => "No Content",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        503 => "Service Unavailable",
        _ => "Internal Server Error",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dashboard_core::Config;
    use dashboard_engine::EffectRunner;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::platform::panels::BuiltinPanels;

    fn registry() -> SessionRegistry {
        dashboard_logging::initialize_for_tests();
        let config = Config::new("dark", "Downloader", "d", "/f.png").unwrap();
        let panels = Arc::new(BuiltinPanels::new("/docs", "/api/hybrid/video_data"));
        SessionRegistry::new(Arc::new(config), EffectRunner::new(panels))
    }

    fn request(method: &str, target: &str, body: &str) -> HttpRequest {
        let raw = format!(
            "{method} {target} HTTP/1.1\r\nHost: localhost\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        );
        read_request(&mut raw.as_bytes()).unwrap()
    }

    fn open_session(registry: &SessionRegistry) -> String {
        let page = route(registry, &request("GET", "/", ""));
        assert_eq!(page.status, 200);
        let marker = "data-session=\"";
        let start = page.body.find(marker).unwrap() + marker.len();
        let end = start + page.body[start..].find('"').unwrap();
        page.body[start..end].to_string()
    }

    fn fragment_of(response: &HttpResponse) -> String {
        let value: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        value["html"].as_str().unwrap().to_string()
    }

    #[test]
    fn parses_request_line_query_and_body() {
        let parsed = request("POST", "/bridge/onAbout?session=abc%20d", "option=x");
        assert_eq!(parsed.method, "POST");
        assert_eq!(parsed.path, "/bridge/onAbout");
        assert_eq!(parsed.query_value("session"), Some("abc d"));
        assert_eq!(parsed.body, b"option=x");
    }

    #[test]
    fn truncated_body_is_an_error() {
        let raw = "POST /theme HTTP/1.1\r\nContent-Length: 10\r\n\r\nabc";
        assert!(read_request(&mut raw.as_bytes()).is_err());
    }

    #[test]
    fn nav_trigger_returns_the_panel() {
        let registry = registry();
        let session = open_session(&registry);

        let response = route(
            &registry,
            &request("POST", &format!("/bridge/onAbout?session={session}"), ""),
        );

        assert_eq!(response.status, 200);
        assert!(fragment_of(&response).contains("About"));
    }

    #[test]
    fn option_trigger_reports_pending_feature() {
        let registry = registry();
        let session = open_session(&registry);
        let body: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("option", "🎵 Download music only")
            .finish();

        let response = route(
            &registry,
            &request(
                "POST",
                &format!("/bridge/onOptionSubmit?session={session}"),
                &body,
            ),
        );

        let html = fragment_of(&response);
        assert!(html.contains("notice-info"));
        assert!(html.contains("Music-only downloads"));
    }

    #[test]
    fn empty_primary_submit_returns_validation_notice() {
        let registry = registry();
        let session = open_session(&registry);

        let response = route(
            &registry,
            &request(
                "POST",
                &format!("/bridge/onPrimarySubmit?session={session}"),
                "video_url=",
            ),
        );

        let html = fragment_of(&response);
        assert!(html.contains("notice-error"));
        assert!(html.contains("paste a video link"));
    }

    #[test]
    fn theme_beacon_flips_the_session() {
        let registry = registry();
        let session = open_session(&registry);

        let response = route(
            &registry,
            &request("POST", &format!("/theme?session={session}"), ""),
        );

        assert_eq!(response.status, 204);
        let id = SessionId::parse(&session).unwrap();
        assert!(!registry.view(id).unwrap().dark_mode());
    }

    #[test]
    fn unknown_trigger_and_session_are_refused() {
        let registry = registry();
        let session = open_session(&registry);

        let unknown_trigger = route(
            &registry,
            &request("POST", &format!("/bridge/onDelete?session={session}"), ""),
        );
        assert_eq!(unknown_trigger.status, 404);

        let unknown_session = route(
            &registry,
            &request(
                "POST",
                "/bridge/onAbout?session=00000000-0000-0000-0000-000000000000",
                "",
            ),
        );
        assert_eq!(unknown_session.status, 404);
        assert!(fragment_of(&unknown_session).contains("expired"));

        let wrong_method = route(&registry, &request("GET", "/bridge/onAbout", ""));
        assert_eq!(wrong_method.status, 405);
    }

    #[test]
    fn connection_slots_are_capped_and_released() {
        let active = Arc::new(AtomicUsize::new(0));
        let first = try_acquire_connection_slot(&active, 2).unwrap();
        let _second = try_acquire_connection_slot(&active, 2).unwrap();

        assert!(try_acquire_connection_slot(&active, 2).is_none());

        drop(first);
        assert_eq!(active.load(Ordering::SeqCst), 1);
        assert!(try_acquire_connection_slot(&active, 2).is_some());
    }

    #[test]
    fn page_load_beyond_session_limit_is_refused() {
        let registry = registry().with_max_sessions(1);
        open_session(&registry);

        let response = route(&registry, &request("GET", "/", ""));

        assert_eq!(response.status, 503);
        assert_eq!(registry.len(), 1);
    }
}
