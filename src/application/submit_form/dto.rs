/// Raw field values as they arrived from the form, untrimmed.
#[derive(Debug, Clone, Default)]
pub struct SubmitFormRequest {
    pub full_name: String,
    pub email: String,
    pub github_username: String,
}

/// Where the browser is sent after a successful handoff.
#[derive(Debug)]
pub struct Handoff {
    pub redirect_to: &'static str,
}
