use crate::presentation::http::pages;
use axum::{
    extract::Query,
    response::Html,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FormQuery {
    /// Notice carried back from a bounced ticket-page visit.
    notice: Option<String>,
}

pub async fn show_form(Query(query): Query<FormQuery>) -> Html<String> {
    Html(pages::form_page(query.notice.as_deref()))
}
