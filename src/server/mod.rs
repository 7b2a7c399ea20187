//! HTTP surface
//!
//! An axum router serving the add form, the expense list, the dashboard and
//! the CSV download. The store handle is built once at startup and shared
//! through `AppState`.

pub mod error;
pub mod handlers;
pub mod pages;
mod routes;

pub use error::{ApiError, ApiResult};

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::config::settings::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<Storage>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(storage: Storage, settings: Settings) -> Self {
        Self {
            storage: Arc::new(storage),
            settings: Arc::new(settings),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(routes::page_routes())
        .with_state(state)
}

/// Bind to `addr` and serve until Ctrl-C
pub async fn run_server(state: AppState, addr: &str) -> ExpenseResult<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ExpenseError::Server(format!("Failed to bind {}: {}", addr, e)))?;
    let local_addr = listener.local_addr()?;

    tracing::info!(target: "expense_tracker", addr = %local_addr, "server_listening");
    println!("Server listening on http://{}", local_addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ExpenseError::Server(e.to_string()))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(target: "expense_tracker", error = %err, "shutdown_signal_failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ExpensePaths;
    use crate::models::{parse_date, Money, NewExpense};
    use crate::storage::ExpenseStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_state() -> (TempDir, AppState) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(paths).unwrap();
        (temp_dir, AppState::new(storage, Settings::default()))
    }

    fn seed(state: &AppState) {
        for (date, category, cents, description) in [
            ("2024-01-10", "Food", 1000, "groceries"),
            ("2024-01-20", "Food", 500, ""),
            ("2024-02-01", "Transport", 2000, "train"),
        ] {
            state
                .storage
                .insert(
                    NewExpense::new(Money::from_cents(cents), category, parse_date(date).unwrap())
                        .with_description(description),
                )
                .unwrap();
        }
    }

    async fn get(state: &AppState, uri: &str) -> (StatusCode, String) {
        let response = create_router(state.clone())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (_temp_dir, state) = test_state();
        let (status, body) = get(&state, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_home_links_every_page() {
        let (_temp_dir, state) = test_state();
        let (status, body) = get(&state, "/").await;
        assert_eq!(status, StatusCode::OK);
        for href in ["/add", "/expenses", "/dashboard", "/export"] {
            assert!(body.contains(&format!("href=\"{}\"", href)));
        }
    }

    #[tokio::test]
    async fn test_post_add_redirects_and_persists() {
        let (_temp_dir, state) = test_state();
        let response = create_router(state.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/add")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "amount=12.50&category=Food&description=lunch&date=2024-01-15",
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/expenses");

        let stored = state.storage.expenses.get_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].amount, Money::from_cents(1250));
        assert_eq!(stored[0].description.as_deref(), Some("lunch"));
    }

    #[tokio::test]
    async fn test_post_add_rejects_bad_input() {
        let (_temp_dir, state) = test_state();
        let response = create_router(state.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/add")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("amount=abc&category=Food&date=2024-01-15"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.storage.expenses.count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_expense_list_filters_by_category() {
        let (_temp_dir, state) = test_state();
        seed(&state);

        let (status, body) = get(&state, "/expenses?category=Food").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("groceries"));
        assert!(!body.contains("train"));
        assert!(body.contains("Total: $15.00"));
        assert!(body.contains(r#"<option value="Transport">Transport</option>"#));
        assert!(body.contains(r#"<option value="Food" selected>Food</option>"#));
    }

    #[tokio::test]
    async fn test_bad_query_date_is_bad_request() {
        let (_temp_dir, state) = test_state();
        let (status, body) = get(&state, "/expenses?start_date=01-01-2024").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid date"));
    }

    #[tokio::test]
    async fn test_dashboard_embeds_charts() {
        let (_temp_dir, state) = test_state();
        seed(&state);

        let (status, body) = get(&state, "/dashboard?category=All").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("data:image/svg+xml;base64,").count(), 2);
        assert!(body.contains("<td>2024-01</td>"));
        assert!(body.contains("$35.00"));
    }

    #[tokio::test]
    async fn test_empty_dashboard_shows_notice() {
        let (_temp_dir, state) = test_state();
        let (status, body) = get(&state, "/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No data available"));
        assert!(!body.contains("<img"));
    }

    #[tokio::test]
    async fn test_export_is_csv_attachment() {
        let (_temp_dir, state) = test_state();
        seed(&state);

        let response = create_router(state.clone())
            .oneshot(Request::builder().uri("/export").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=expenses.csv"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert_eq!(
            text,
            "Date,Category,Amount,Description\n\
             2024-01-10,Food,10.0,groceries\n\
             2024-01-20,Food,5.0,\n\
             2024-02-01,Transport,20.0,train\n"
        );
    }
}
