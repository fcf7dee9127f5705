use serde::Serialize;

/// Everything the ticket page displays. Derived per render, never persisted;
/// a reload produces a fresh `display_id` over the same submission.
#[derive(Debug, Clone, Serialize)]
pub struct TicketView {
    /// Random display identifier in [0, 100000), shown with a `#` prefix.
    pub display_id: u32,
    pub full_name: String,
    pub email: String,
    pub github_username: String,
    /// Data URL of the avatar, usable directly as an image source.
    pub avatar_data_url: String,
}

impl TicketView {
    /// The identifier as printed on the ticket.
    pub fn display_id_tag(&self) -> String {
        format!("#{}", self.display_id)
    }
}
