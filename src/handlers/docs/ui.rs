use axum::{extract::State, response::Html};
use serde_json::json;

use crate::app::AppState;
use crate::config::DocsConfig;

const SCALAR_BUNDLE: &str = "https://cdn.jsdelivr.net/npm/@scalar/api-reference";

/// GET /ui - Interactive API reference
///
/// A static page; the Scalar bundle fetches the document from the configured
/// OpenAPI path in the browser.
pub async fn ui_get(State(state): State<AppState>) -> Html<String> {
    Html(render_page(state.docs.info()))
}

/// Title, document path and theme are built-in constants, never request or env input.
pub fn render_page(info: &DocsConfig) -> String {
    let configuration = json!({ "theme": info.ui_theme }).to_string();

    format!(
        r#"<!doctype html>
<html>
  <head>
    <title>{title}</title>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
  </head>
  <body>
    <script id="api-reference" data-url="{url}" data-configuration='{configuration}'></script>
    <script src="{bundle}"></script>
  </body>
</html>
"#,
        title = info.title,
        url = info.openapi_path,
        configuration = configuration,
        bundle = SCALAR_BUNDLE,
    )
}
