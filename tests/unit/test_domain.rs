use ticket_desk::domain::submission::{
    entity::{AvatarFile, UserSubmission, is_accepted_avatar_type},
    validation::{
        strip_github_at, validate_email, validate_full_name, validate_github_username,
        validate_submission,
    },
};

#[test]
fn full_name_requires_five_characters_after_trimming() {
    assert!(validate_full_name("Ada Lovelace").is_none());
    assert!(validate_full_name("  Bo  ").is_some());
    assert!(validate_full_name("").is_some());
    assert_eq!(
        validate_full_name("    ").as_deref(),
        Some("Full name is required")
    );
    // exactly five characters passes
    assert!(validate_full_name(" Aisha ").is_none());
}

#[test]
fn email_must_match_local_at_domain_dot_tld() {
    assert!(validate_email("ada@x.com").is_none());
    assert!(validate_email("  ada@x.com  ").is_none());
    assert_eq!(validate_email("").as_deref(), Some("Email is required"));
    for bad in ["bad-email", "a@b", "a b@c.d", "a@b@c.d", "@x.com", "ada@.com "] {
        assert!(
            validate_email(bad).is_some(),
            "expected {bad:?} to be rejected"
        );
    }
}

#[test]
fn github_username_strips_one_leading_at() {
    assert_eq!(strip_github_at("@ada"), "ada");
    assert_eq!(strip_github_at("ada"), "ada");
    assert_eq!(strip_github_at("@@ada"), "@ada");

    assert!(validate_github_username("@ada").is_none());
    assert_eq!(
        validate_github_username("").as_deref(),
        Some("GitHub username is required")
    );
    assert_eq!(
        validate_github_username("@").as_deref(),
        Some("Please enter a valid GitHub username")
    );
}

#[test]
fn avatar_type_allow_list_is_case_insensitive() {
    assert!(is_accepted_avatar_type("image/png"));
    assert!(is_accepted_avatar_type("IMAGE/JPEG"));
    assert!(is_accepted_avatar_type("image/jpg"));
    assert!(!is_accepted_avatar_type("image/gif"));
    assert!(!is_accepted_avatar_type("application/pdf"));
    assert!(!is_accepted_avatar_type(""));
}

#[test]
fn aggregation_reports_every_violation_in_display_order() {
    let messages = validate_submission("Bo", "bad-email", "", false);
    assert_eq!(
        messages,
        vec![
            "Full name must be at least 5 characters",
            "Please enter a valid email address",
            "GitHub username is required",
            "Please upload an avatar image",
        ]
    );
}

#[test]
fn aggregation_is_empty_for_an_acceptable_submission() {
    assert!(validate_submission("Ada Lovelace", "ada@x.com", "@ada", true).is_empty());
}

#[test]
fn aggregation_does_not_short_circuit_on_the_first_failure() {
    // only the email and avatar rules are violated; both must be present
    let messages = validate_submission("Ada Lovelace", "nope", "ada", false);
    assert_eq!(
        messages,
        vec![
            "Please enter a valid email address",
            "Please upload an avatar image",
        ]
    );
}

#[test]
fn submission_json_round_trips_exactly() {
    let submission = UserSubmission {
        full_name: "Ada Lovelace".to_string(),
        email: "ada@x.com".to_string(),
        github_username: "ada".to_string(),
        avatar: AvatarFile {
            name: "portrait.png".to_string(),
            size: 10_240,
            mime_type: "image/png".to_string(),
            last_modified: chrono::DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
            image_data: "data:image/png;base64,aGVsbG8=".to_string(),
        },
    };

    let wire = serde_json::to_string(&submission).unwrap();
    let back: UserSubmission = serde_json::from_str(&wire).unwrap();
    assert_eq!(back, submission);
}
