//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, CORS application and access logging.

use crate::api;
use crate::config::{AppState, RoutesConfig};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context for the GET/HEAD file-serving paths
pub struct RequestContext {
    pub path: String,
    pub is_head: bool,
    pub if_none_match: Option<String>,
    pub range_header: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(ToString::to_string);
    let http_version = version_label(req.version());
    let user_agent = header_string(&req, "user-agent");

    let access_log = state
        .cached_access_log
        .load(std::sync::atomic::Ordering::Relaxed);
    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let mut response = match check_body_size(&req, state.config.http.max_body_size) {
        Some(resp) => resp,
        None => {
            let ctx = RequestContext {
                path: path.clone(),
                is_head: method == Method::HEAD,
                if_none_match: header_string(&req, "if-none-match"),
                range_header: header_string(&req, "range"),
            };
            route_request(req, &method, &ctx, &state).await?
        }
    };

    if state.config.http.enable_cors {
        http::apply_cors(&mut response);
    }

    if access_log {
        let mut entry = AccessLogEntry::new(peer_addr.ip().to_string(), method.to_string(), path);
        entry.query = query;
        entry.http_version = http_version;
        entry.status = response.status().as_u16();
        entry.body_bytes = response_body_bytes(&response);
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Route request based on method and path
async fn route_request(
    req: Request<hyper::body::Incoming>,
    method: &Method,
    ctx: &RequestContext,
    state: &Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    use crate::handler::static_files;

    let routes = &state.config.routes;
    let path = ctx.path.as_str();

    match *method {
        // Preflight is answered on every path
        Method::OPTIONS => Ok(http::build_preflight_response()),

        Method::POST => match path {
            "/receive_text" | "/receive_text/" => {
                api::handle_receive_text(req, Arc::clone(state)).await
            }
            _ => Ok(api::not_found()),
        },

        Method::GET | Method::HEAD => match path {
            "/get_messages" | "/get_messages/" => {
                api::handle_get_messages(Arc::clone(state)).await
            }
            "/" => Ok(static_files::serve_index(ctx, &routes.index_file).await),
            p if routes.favicon_paths.iter().any(|f| f == p) => {
                Ok(static_files::serve_favicon(ctx, &routes.static_dir).await)
            }
            p if is_static_path(p, routes) => {
                Ok(static_files::serve_clip(ctx, &routes.static_dir, &routes.static_route).await)
            }
            _ => Ok(http::build_404_response()),
        },

        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Ok(http::build_405_response())
        }
    }
}

/// Does the path fall under the static clip route?
fn is_static_path(path: &str, routes: &RoutesConfig) -> bool {
    let prefix = routes.static_route.trim_end_matches('/');
    path == prefix || path.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('/'))
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

/// Extract a header value as an owned string
fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

/// HTTP version as it appears in the access log request line
fn version_label(version: Version) -> String {
    match version {
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string()
}

/// Body size for the access log, taken from the Content-Length header
fn response_body_bytes(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn routes() -> RoutesConfig {
        Config::load_from("no-such-config").unwrap().routes
    }

    #[test]
    fn test_static_path_detection() {
        let routes = routes();
        assert!(is_static_path("/static/hello.mp4", &routes));
        assert!(is_static_path("/static", &routes));
        assert!(!is_static_path("/staticfile", &routes));
        assert!(!is_static_path("/receive_text/", &routes));
        assert!(!is_static_path("/", &routes));
    }

    #[test]
    fn test_version_labels() {
        assert_eq!(version_label(Version::HTTP_10), "1.0");
        assert_eq!(version_label(Version::HTTP_11), "1.1");
        assert_eq!(version_label(Version::HTTP_2), "2");
    }
}
