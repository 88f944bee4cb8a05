/// Static files served from the Leptos site root, next to the app itself.
#[cfg(feature = "ssr")]
const SITE_ASSETS: [&str; 3] = ["/favicon.ico", "/Swasthya360.png", "/site.webmanifest"];

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use swasthya_header::*;
    use tower_http::services::ServeDir;
    use tracing::info;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_filter()))
        .init();

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    info!("Site root: `{}`", leptos_options.site_root);

    let pkg_dir = format!("{}/pkg", leptos_options.site_root);
    let static_routes = Router::new()
        .nest_service("/pkg", ServeDir::new(&pkg_dir))
        .merge(asset_routes(leptos_options.site_root.to_string()));

    // Fallback catches everything not matched by the static routes
    let leptos_app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = static_routes.merge(leptos_app);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Swasthya360 listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service()).await.unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

/// Log directives for the server, from `SWASTHYA_LOG`.
#[cfg(feature = "ssr")]
fn log_filter() -> String {
    std::env::var("SWASTHYA_LOG").unwrap_or_else(|_| "info".to_string())
}

#[cfg(feature = "ssr")]
fn asset_routes(site_root: String) -> axum::Router {
    SITE_ASSETS
        .iter()
        .fold(axum::Router::new(), |router, path| {
            router.route(path, axum::routing::get(serve_site_asset))
        })
        .with_state(site_root)
}

#[cfg(feature = "ssr")]
async fn serve_site_asset(
    axum::extract::State(site_root): axum::extract::State<String>,
    request: axum::extract::Request,
) -> Result<axum::response::Response<axum::body::Body>, axum::http::StatusCode> {
    use axum::{
        body::Body,
        http::{header, StatusCode},
        response::Response,
    };
    use std::path::Path;
    use tokio::fs;

    let filename = request.uri().path().trim_start_matches('/');
    let file_path = Path::new(&site_root).join(filename);

    match fs::read(&file_path).await {
        Ok(content) => Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, asset_mime_type(filename))
            .header(header::CACHE_CONTROL, "public, max-age=86400")
            .body(Body::from(content))
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR),
        Err(e) => {
            tracing::debug!("Site asset `{}` not served: {}", filename, e);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

#[cfg_attr(not(feature = "ssr"), allow(dead_code))]
fn asset_mime_type(filename: &str) -> &'static str {
    match filename.rsplit('.').next() {
        Some("ico") => "image/x-icon",
        Some("png") => "image/png",
        Some("webmanifest") => "application/manifest+json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_mime_type_detection() {
        let test_cases = vec![
            ("favicon.ico", "image/x-icon"),
            ("Swasthya360.png", "image/png"),
            ("site.webmanifest", "application/manifest+json"),
            ("unknown.xyz", "application/octet-stream"),
            ("noextension", "application/octet-stream"),
        ];

        for (filename, expected_mime) in test_cases {
            assert_eq!(asset_mime_type(filename), expected_mime, "Failed for {}", filename);
        }
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_site_assets_are_root_paths() {
        for path in SITE_ASSETS {
            assert!(path.starts_with('/'));
            assert!(path.contains('.'));
        }
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_site_asset_serving() {
        use axum::body::Body;
        use axum::http::{Method, Request, StatusCode};
        use std::fs;
        use tempfile::tempdir;
        use tower::ServiceExt;

        let temp_dir = tempdir().expect("Failed to create temp directory");
        fs::write(
            temp_dir.path().join("favicon.ico"),
            b"\x00\x00\x01\x00\x01\x00\x10\x10\x00\x00",
        )
        .unwrap();
        fs::write(temp_dir.path().join("Swasthya360.png"), b"fake png").unwrap();

        let router = asset_routes(temp_dir.path().to_string_lossy().to_string());

        let request = Request::builder()
            .method(Method::GET)
            .uri("/favicon.ico")
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "image/x-icon"
        );
        assert_eq!(
            response.headers().get("cache-control").unwrap(),
            "public, max-age=86400"
        );

        let request = Request::builder()
            .method(Method::GET)
            .uri("/Swasthya360.png")
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"fake png");

        // Routed but missing on disk
        let request = Request::builder()
            .method(Method::GET)
            .uri("/site.webmanifest")
            .body(Body::empty())
            .unwrap();
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Not an asset route at all
        let request = Request::builder()
            .method(Method::GET)
            .uri("/secrets.txt")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
