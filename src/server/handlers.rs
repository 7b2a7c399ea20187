//! Request handlers

use axum::extract::{Form, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect};
use chrono::Local;
use serde::Deserialize;

use crate::export::export_filtered_csv;
use crate::models::ExpenseFilter;
use crate::reports::{build_dashboard, build_expense_list_view};
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::ExpenseStore;

use super::error::ApiResult;
use super::pages;
use super::AppState;

/// Query string shared by the list, dashboard and export routes
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl FilterQuery {
    fn to_filter(&self) -> ApiResult<ExpenseFilter> {
        Ok(ExpenseFilter::from_params(
            self.category.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )?)
    }
}

/// Fields posted by the add-expense form
#[derive(Debug, Default, Deserialize)]
pub struct AddExpenseForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub category: String,
    pub description: Option<String>,
    pub date: Option<String>,
}

impl From<AddExpenseForm> for CreateExpenseInput {
    fn from(form: AddExpenseForm) -> Self {
        Self {
            amount: form.amount,
            category: form.category,
            description: form.description,
            date: form.date,
        }
    }
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn home() -> Html<String> {
    Html(pages::home_page())
}

pub async fn add_expense_form() -> Html<String> {
    Html(pages::add_expense_page(Local::now().date_naive()))
}

pub async fn add_expense(
    State(state): State<AppState>,
    Form(form): Form<AddExpenseForm>,
) -> ApiResult<Redirect> {
    let service = ExpenseService::new(state.storage.as_ref());
    service.create(&CreateExpenseInput::from(form))?;
    Ok(Redirect::to("/expenses"))
}

pub async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Html<String>> {
    let view = build_expense_list_view(state.storage.as_ref(), &query.to_filter()?)?;
    Ok(Html(pages::expense_list_page(
        &view,
        &state.settings.currency_symbol,
    )))
}

pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<Html<String>> {
    let filter = query.to_filter()?;
    let store = state.storage.as_ref();

    let view = build_dashboard(store, &filter, &state.settings.charts)?;
    let categories: Vec<String> = store.distinct_categories()?.into_iter().collect();

    Ok(Html(pages::dashboard_page(
        &view,
        &categories,
        &state.settings.currency_symbol,
    )))
}

pub async fn export_csv(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> ApiResult<impl IntoResponse> {
    let filter = query.to_filter()?;

    let mut body = Vec::new();
    export_filtered_csv(state.storage.as_ref(), &filter, &mut body)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=expenses.csv",
            ),
        ],
        body,
    ))
}
