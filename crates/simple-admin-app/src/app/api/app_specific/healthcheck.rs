use salvo::{Router, handler};

#[handler]
async fn healthy() -> &'static str {
    "OK"
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("healthcheck").get(healthy)
}
