//! Entry view and health check handlers.

use axum::{Extension, http::StatusCode, response::Html};

use crate::csrf::CsrfToken;

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Health check passed")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Entry view: the HTML shell the user table component mounts into.
///
/// The only dynamic datum is the session's CSRF token; everything else is a
/// fixed document referencing the two asset bundles.
pub async fn index(Extension(csrf): Extension<CsrfToken>) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="csrf-token" content="{token}">
    <title>Roster</title>
    <link href="/css/app.css" rel="stylesheet">
</head>
<body>
    <div id="app" class="container-fluid">
        <user-table></user-table>
    </div>
    <script src="/js/app.js"></script>
</body>
</html>
"#,
        token = csrf.value()
    ))
}
