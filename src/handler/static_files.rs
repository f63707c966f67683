//! Static file serving module
//!
//! Serves the landing page and the clip files: path traversal guard,
//! MIME detection, ETag revalidation and Range support (browsers fetch
//! clip ranges when the user seeks within a video).

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime, range::RangeOutcome};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

const FAVICON_FILE: &str = "favicon.svg";

/// Serve the landing page at `/`.
///
/// Reads the configured index file; if it is missing the built-in page
/// is served instead so a bare checkout still answers something useful.
pub async fn serve_index(ctx: &RequestContext, index_file: &str) -> Response<Full<Bytes>> {
    let html = match fs::read_to_string(index_file).await {
        Ok(content) => content,
        Err(_) => fallback_index_page(),
    };

    http::response::build_html_response(html, ctx.is_head)
}

/// Serve the favicon from the static directory
pub async fn serve_favicon(ctx: &RequestContext, static_dir: &str) -> Response<Full<Bytes>> {
    let path = Path::new(static_dir).join(FAVICON_FILE);
    match fs::read(&path).await {
        Ok(data) => respond_with_file(ctx, &data, "image/svg+xml"),
        Err(_) => http::build_404_response(),
    }
}

/// Serve a clip (or any other file) from under the static route
pub async fn serve_clip(
    ctx: &RequestContext,
    static_dir: &str,
    static_route: &str,
) -> Response<Full<Bytes>> {
    match load_from_directory(static_dir, &ctx.path, static_route).await {
        Some((content, content_type)) => respond_with_file(ctx, &content, content_type),
        None => http::build_404_response(),
    }
}

/// Load a file from the static directory, refusing paths that escape it
async fn load_from_directory(
    static_dir: &str,
    path: &str,
    static_route: &str,
) -> Option<(Vec<u8>, &'static str)> {
    // Strip the route prefix and neutralize traversal sequences
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let prefix_clean = static_route.trim_matches('/');
    let relative_path = clean_path
        .strip_prefix(&format!("{prefix_clean}/"))
        .unwrap_or("");

    if relative_path.is_empty() {
        return None;
    }

    let file_path = Path::new(static_dir).join(relative_path);

    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // Missing file is an ordinary 404, not worth a warning
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build the response for file content: 304 when the client copy is
/// current, 206 for a satisfiable range, otherwise the full body.
fn respond_with_file(
    ctx: &RequestContext,
    data: &[u8],
    content_type: &str,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);
    let total_size = data.len();

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    match http::resolve_range(ctx.range_header.as_deref(), total_size) {
        RangeOutcome::Satisfiable(range) => {
            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(data[range.start..=range.end].to_vec())
            };
            http::response::build_partial_response(
                body,
                content_type,
                &etag,
                range.start,
                range.end,
                total_size,
                ctx.is_head,
            )
        }
        RangeOutcome::NotSatisfiable => http::build_416_response(total_size),
        RangeOutcome::Ignored => {
            let body = if ctx.is_head {
                Bytes::new()
            } else {
                Bytes::from(data.to_owned())
            };
            http::response::build_file_response(body, content_type, &etag, ctx.is_head)
        }
    }
}

/// Built-in landing page, used when the index file is absent
pub fn fallback_index_page() -> String {
    String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>signrelay</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            max-width: 640px;
            margin: 60px auto;
            padding: 0 20px;
            line-height: 1.6;
            color: #222;
        }
        h1 { margin-bottom: 4px; }
        .sub { color: #666; margin-top: 0; }
        code {
            background: #f2f2f2;
            padding: 2px 6px;
            border-radius: 4px;
        }
        pre {
            background: #f2f2f2;
            padding: 12px;
            border-radius: 6px;
            overflow-x: auto;
        }
    </style>
</head>
<body>
    <h1>signrelay</h1>
    <p class="sub">Text-to-ASL message relay</p>
    <p>POST a message and every word with a known sign clip comes back
       mapped to its video:</p>
    <pre>curl -X POST /receive_text/ \
  -H 'Content-Type: application/json' \
  -d '{"message": "hello how are you"}'</pre>
    <p>All received messages: <code>GET /get_messages/</code></p>
    <p>Clips are served under <code>/static/</code>.</p>
</body>
</html>"#,
    )
}
