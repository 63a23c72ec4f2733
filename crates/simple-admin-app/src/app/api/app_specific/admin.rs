use salvo::{Depot, Response, Router, handler, http::StatusCode, writing::{Json, Text}};
use serde::Serialize;
use tracing::error;

use simple_admin_core::constants::ADMIN_ROUTE_COMPONENT;
use simple_admin_db::db::query::user::all_users;

use crate::db_handler::get_db_from_depot;
use crate::views_handler::get_views_from_depot;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// GET /api/admin - Renders the admin page listing all users in store order.
///
/// ## Errors
/// Returns HTTP 503 if no database connection is available
/// Returns HTTP 500 if the user query or template rendering fails
#[handler]
async fn admin_page(depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing admin page request");

    let provider = match get_db_from_depot(depot) {
        Ok(p) => p,
        Err(e) => {
            error!(error = ?e, "Failed to get database provider");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let mut conn = match provider.get_connection().await {
        Ok(c) => c,
        Err(e) => {
            error!(error = ?e, "Failed to get database connection");
            res.status_code(StatusCode::SERVICE_UNAVAILABLE);
            res.render(Json(ErrorResponse {
                error: "Database unavailable".to_string(),
            }));
            return;
        }
    };

    let users = match all_users(&mut conn).await {
        Ok(users) => users,
        Err(e) => {
            error!(error = ?e, "Failed to load users");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    let views = match get_views_from_depot(depot) {
        Ok(v) => v,
        Err(e) => {
            error!(error = ?e, "Failed to get view registry");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Internal server error".to_string(),
            }));
            return;
        }
    };

    match views.render_admin(&users) {
        Ok(html) => {
            res.render(Text::Html(html));
        }
        Err(e) => {
            error!(error = ?e, "Failed to render admin page");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
            res.render(Json(ErrorResponse {
                error: "Failed to render admin page".to_string(),
            }));
        }
    }
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path(ADMIN_ROUTE_COMPONENT).get(admin_page)
}
