use super::helpers::{expect_status, read_text, send, spawn_app, submit_request, tiny_png_bytes};
use axum::http::StatusCode;
use base64::Engine as _;

#[tokio::test]
async fn valid_submission_persists_and_redirects_to_ticket() {
    let app = spawn_app();
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        submit_request(
            "Ada Lovelace",
            "ada@x.com",
            "@ada",
            Some(("ada.png", "image/png", &png)),
            None,
        ),
    )
    .await;
    let res = expect_status(res, StatusCode::SEE_OTHER).await;
    assert_eq!(res.headers()["location"], "/ticket");

    let slot = app.slot_json().expect("slot should be written");
    assert_eq!(slot["fullName"], "Ada Lovelace");
    assert_eq!(slot["email"], "ada@x.com");
    assert_eq!(slot["githubUsername"], "ada", "leading @ must be stripped");
    assert_eq!(slot["avatar"]["name"], "ada.png");
    assert_eq!(slot["avatar"]["mimeType"], "image/png");
    assert_eq!(slot["avatar"]["size"].as_u64(), Some(png.len() as u64));

    // the embedded data URL decodes back to the uploaded bytes
    let image_data = slot["avatar"]["imageData"].as_str().unwrap();
    let payload = image_data
        .strip_prefix("data:image/png;base64,")
        .expect("data URL prefix");
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .unwrap();
    assert_eq!(decoded, png);
}

#[tokio::test]
async fn drop_entry_point_is_accepted_like_the_picker() {
    let app = spawn_app();
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        submit_request(
            "Grace Hopper",
            "grace@navy.mil",
            "grace",
            Some(("grace.png", "image/png", &png)),
            Some("drop"),
        ),
    )
    .await;
    expect_status(res, StatusCode::SEE_OTHER).await;
    assert!(app.slot_json().is_some());
}

#[tokio::test]
async fn aggregate_rejection_lists_every_violation_and_writes_nothing() {
    let app = spawn_app();

    let res = send(&app.app, submit_request("Bo", "bad-email", "", None, None)).await;
    let res = expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await;
    let body = read_text(res).await;

    for message in [
        "Full name must be at least 5 characters",
        "Please enter a valid email address",
        "GitHub username is required",
        "Please upload an avatar image",
    ] {
        assert!(body.contains(message), "missing {message:?} in: {body}");
    }
    assert!(
        app.slot_json().is_none(),
        "rejected submission must not be persisted"
    );
}

#[tokio::test]
async fn wrong_image_type_is_rejected_with_the_file_notice() {
    let app = spawn_app();

    let res = send(
        &app.app,
        submit_request(
            "Ada Lovelace",
            "ada@x.com",
            "ada",
            Some(("anim.gif", "image/gif", b"GIF89a....")),
            None,
        ),
    )
    .await;
    let res = expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await;
    let body = read_text(res).await;
    assert!(body.contains("Please select a JPG or PNG image file."));
    assert!(app.slot_json().is_none());
}

#[tokio::test]
async fn oversize_image_is_rejected_with_the_size_notice() {
    let app = spawn_app();
    let oversize = vec![0u8; 500 * 1024 + 1];

    let res = send(
        &app.app,
        submit_request(
            "Ada Lovelace",
            "ada@x.com",
            "ada",
            Some(("huge.png", "image/png", &oversize)),
            None,
        ),
    )
    .await;
    let res = expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await;
    let body = read_text(res).await;
    assert!(body.contains("File size must be less than 500KB."));
    assert!(app.slot_json().is_none());
}

#[tokio::test]
async fn uppercase_mime_type_is_accepted() {
    let app = spawn_app();
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        submit_request(
            "Ada Lovelace",
            "ada@x.com",
            "ada",
            Some(("ADA.PNG", "IMAGE/PNG", &png)),
            None,
        ),
    )
    .await;
    expect_status(res, StatusCode::SEE_OTHER).await;
    let slot = app.slot_json().unwrap();
    assert_eq!(slot["avatar"]["mimeType"], "image/png");
}

#[tokio::test]
async fn new_submission_overwrites_the_previous_record_wholesale() {
    let app = spawn_app();
    let png = tiny_png_bytes();

    let res = send(
        &app.app,
        submit_request(
            "Ada Lovelace",
            "ada@x.com",
            "ada",
            Some(("ada.png", "image/png", &png)),
            None,
        ),
    )
    .await;
    expect_status(res, StatusCode::SEE_OTHER).await;

    let res = send(
        &app.app,
        submit_request(
            "Grace Hopper",
            "grace@navy.mil",
            "@grace",
            Some(("grace.png", "image/png", &png)),
            None,
        ),
    )
    .await;
    expect_status(res, StatusCode::SEE_OTHER).await;

    let slot = app.slot_json().unwrap();
    assert_eq!(slot["fullName"], "Grace Hopper");
    assert_eq!(slot["githubUsername"], "grace");
}

#[tokio::test]
async fn valid_fields_without_an_avatar_still_block_the_handoff() {
    let app = spawn_app();

    let res = send(
        &app.app,
        submit_request("Ada Lovelace", "ada@x.com", "ada", None, None),
    )
    .await;
    let res = expect_status(res, StatusCode::UNPROCESSABLE_ENTITY).await;
    let body = read_text(res).await;
    assert!(body.contains("Please upload an avatar image"));
    // only the avatar rule fired
    assert!(!body.contains("Full name"));
    assert!(app.slot_json().is_none());
}
