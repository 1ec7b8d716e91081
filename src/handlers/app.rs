use axum::response::Html;

static APP_HTML: &str = include_str!("../web/app.html");

/// Entry document for the browser client. Registered for the client routes
/// and as the catch-all fallback so a hard refresh on a client-side route
/// still resolves.
pub async fn app_page() -> Html<&'static str> {
    Html(APP_HTML)
}
