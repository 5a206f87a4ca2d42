//! Static files (WASM bundle, stylesheet, logos) for paths no Leptos route claims.

use tower_http::services::ServeDir;

/// Serve the compiled site root; unknown files and traversal attempts get 404.
pub fn static_files(site_root: &str) -> ServeDir {
    ServeDir::new(site_root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn site_root() -> PathBuf {
        let dir = std::env::temp_dir().join("rdk_assets_test");
        std::fs::create_dir_all(dir.join("pkg")).unwrap();
        std::fs::write(dir.join("rdk.svg"), "<svg/>").unwrap();
        std::fs::write(dir.join("pkg").join("rdk-web.css"), "body{}").unwrap();
        dir
    }

    async fn get(uri: &str) -> axum::http::Response<tower_http::services::fs::ServeFileSystemResponseBody> {
        let root = site_root();
        let request = Request::get(uri).body(Body::empty()).unwrap();
        static_files(&root.to_string_lossy())
            .oneshot(request)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_serves_logo_with_mime() {
        let res = get("/rdk.svg").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "image/svg+xml");
    }

    #[tokio::test]
    async fn test_serves_bundle_stylesheet() {
        let res = get("/pkg/rdk-web.css").await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()[header::CONTENT_TYPE], "text/css");
    }

    #[tokio::test]
    async fn test_missing_and_traversal_are_not_found() {
        assert_eq!(get("/missing.png").await.status(), StatusCode::NOT_FOUND);
        assert_eq!(get("/../etc/passwd").await.status(), StatusCode::NOT_FOUND);
    }
}
