//! The submission endpoint: multipart form in, redirect or notice out.
//!
//! This is the thin adapter between the HTTP surface and the pure pipeline:
//! multipart fields are gathered, the avatar part is funneled through the
//! collector entry point the client used, and the validated whole is handed
//! to the submit use case. Rejections never become error responses; they
//! re-render the form with the notice block filled in.

use crate::{
    application::collect_avatar::{
        dto::AvatarCandidate,
        use_case::{AvatarCollector, encode},
    },
    application::submit_form::{
        dto::SubmitFormRequest,
        use_case::{SubmitError, SubmitFormUseCase},
    },
    presentation::http::{errors::AppError, pages, state::AppState},
};
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::{DateTime, TimeZone, Utc};

pub async fn submit_form(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut request = SubmitFormRequest::default();
    let mut candidate: Option<AvatarCandidate> = None;
    let mut source = String::new();
    let mut last_modified: Option<DateTime<Utc>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| AppError::BadRequest("Field error".into()))?
    {
        match field.name().unwrap_or("") {
            "name" => request.full_name = field.text().await.unwrap_or_default(),
            "email" => request.email = field.text().await.unwrap_or_default(),
            "github" => request.github_username = field.text().await.unwrap_or_default(),
            "avatar_source" => source = field.text().await.unwrap_or_default(),
            "avatar_last_modified" => {
                last_modified = field
                    .text()
                    .await
                    .ok()
                    .and_then(|t| t.trim().parse::<i64>().ok())
                    .and_then(|ms| Utc.timestamp_millis_opt(ms).single());
            }
            "avatar" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let mime_type = field.content_type().unwrap_or("").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::BadRequest("Byte error".into()))?;
                // a file input left empty still submits a blank part
                if !file_name.is_empty() || !bytes.is_empty() {
                    candidate = Some(AvatarCandidate {
                        file_name,
                        mime_type,
                        last_modified: None,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }
    if let Some(candidate) = candidate.as_mut() {
        candidate.last_modified = last_modified;
    }

    let mut collector = AvatarCollector::new();
    if let Some(candidate) = candidate {
        let selected = match source.as_str() {
            "drop" => collector.select_from_drop(candidate),
            _ => collector.select_from_picker(candidate),
        };
        match selected {
            Ok(job) => {
                let encoded = encode(job).await?;
                collector.apply_encoded(encoded);
            }
            Err(rejection) => {
                // file rejection is its own blocking notice, shown alone
                return Ok(notice_response(&rejection.to_string()));
            }
        }
    }

    let use_case = SubmitFormUseCase::new(state.store.clone());
    match use_case.execute(request, &collector).await {
        Ok(handoff) => Ok(Redirect::to(handoff.redirect_to).into_response()),
        Err(SubmitError::Rejected(messages)) => {
            let notice = format!(
                "Please fix the following errors:\n\n{}",
                messages.join("\n")
            );
            Ok(notice_response(&notice))
        }
        Err(SubmitError::Store(e)) => Err(AppError::Storage(e.to_string())),
    }
}

fn notice_response(notice: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Html(pages::form_page(Some(notice))),
    )
        .into_response()
}
