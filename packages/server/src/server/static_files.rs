use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use rust_embed::RustEmbed;

// Front-end bundle embedded at compile time
#[derive(RustEmbed)]
#[folder = "static/"]
pub struct FrontendAssets;

/// `/` lands on the front-end page
pub async fn redirect_to_index() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// Serve a file from the embedded front-end bundle
pub async fn serve_static(Path(path): Path<String>) -> Response {
    serve_embedded::<FrontendAssets>(&path)
}

fn serve_embedded<E: RustEmbed>(path: &str) -> Response {
    let path = path.trim_start_matches('/');

    // If path is empty, serve index.html
    let path = if path.is_empty() { "index.html" } else { path };

    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
