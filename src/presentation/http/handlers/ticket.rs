use crate::{
    application::render_ticket::use_case::{RenderError, RenderOutcome, RenderTicketUseCase},
    presentation::http::{errors::AppError, pages, state::AppState},
};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};

/// Where an empty or corrupt slot sends the visitor. The notice survives the
/// round trip as a query parameter and lands in the form's notice block.
const FORM_BOUNCE: &str = "/?notice=Please+fill+in+your+details+first.";

pub async fn show_ticket(State(state): State<AppState>) -> Result<Response, AppError> {
    let use_case = RenderTicketUseCase::new(state.store.clone());
    match use_case.execute().await {
        Ok(RenderOutcome::Ticket(view)) => Ok(Html(pages::ticket_page(&view)).into_response()),
        Ok(RenderOutcome::Missing(reason)) => {
            tracing::debug!(?reason, "no renderable submission, bouncing to form");
            Ok(Redirect::to(FORM_BOUNCE).into_response())
        }
        Err(RenderError::Store(e)) => Err(AppError::Storage(e.to_string())),
    }
}
