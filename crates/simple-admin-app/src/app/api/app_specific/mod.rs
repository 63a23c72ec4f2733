// App-specific API handlers.

use salvo::Router;

mod admin;
mod healthcheck;

#[must_use]
pub fn routes() -> Router {
    Router::new()
        .push(admin::routes())
        .push(healthcheck::routes())
}
