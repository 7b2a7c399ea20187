use axum::routing::get;
use axum::Router;

use super::{handlers, AppState};

/// Page and download routes
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::home))
        .route(
            "/add",
            get(handlers::add_expense_form).post(handlers::add_expense),
        )
        .route("/expenses", get(handlers::list_expenses))
        .route("/dashboard", get(handlers::dashboard))
        .route("/export", get(handlers::export_csv))
}
