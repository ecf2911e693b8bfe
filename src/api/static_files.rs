//! Embedded static assets

use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Stylesheet and scripts shipped with the binary
#[derive(RustEmbed)]
#[folder = "public/"]
#[include = "*.css"]
#[include = "*.js"]
#[include = "*.svg"]
#[include = "*.ico"]
struct PublicAssets;

/// GET /static/{*path}
pub async fn serve_static(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    match PublicAssets::get(path) {
        Some(content) => build_response(path, content.data.into_owned()),
        None => not_found(),
    }
}

/// Build HTTP response with proper headers
fn build_response(path: &str, data: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, get_content_type(path)),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        data,
    )
        .into_response()
}

/// 404 response
fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

/// Get content type from file extension
fn get_content_type(path: &str) -> &'static str {
    match path.rsplit('.').next().unwrap_or("") {
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        assert_eq!(get_content_type("styles.css"), "text/css; charset=utf-8");
        assert_eq!(get_content_type("carousel.js"), "application/javascript; charset=utf-8");
        assert_eq!(get_content_type("README"), "application/octet-stream");
    }

    #[test]
    fn test_assets_are_embedded() {
        assert!(PublicAssets::get("styles.css").is_some());
        assert!(PublicAssets::get("carousel.js").is_some());
    }
}
