//! Server-rendered pages for the two-step flow.
//!
//! Kept deliberately plain: two HTML documents built with `format!`, with
//! every interpolated value escaped. The notice block is the blocking error
//! channel: one or more messages, newline-separated inside a `<pre>`.

use crate::application::render_ticket::dto::TicketView;

/// Escapes text for interpolation into HTML body or attribute positions.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The submission page: the form plus an optional blocking notice.
pub fn form_page(notice: Option<&str>) -> String {
    let notice_block = match notice {
        Some(text) => format!(
            r#"<pre class="notice" role="alert">{}</pre>"#,
            escape_html(text)
        ),
        None => String::new(),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Your Ticket - Register</title>
</head>
<body>
  <h1>Generate your conference ticket</h1>
  {notice_block}
  <form id="ticket-form" method="post" action="/submit" enctype="multipart/form-data">
    <label for="avatar">Upload Avatar (JPG or PNG, max 500KB)</label>
    <div class="drop-zone">
      <input type="file" id="avatar" name="avatar" accept="image/jpeg,image/png">
      <input type="hidden" name="avatar_source" value="picker">
      <input type="hidden" name="avatar_last_modified" value="">
    </div>
    <label for="name">Full Name</label>
    <input type="text" id="name" name="name">
    <label for="email">Email Address</label>
    <input type="email" id="email" name="email">
    <label for="github">GitHub Username</label>
    <input type="text" id="github" name="github">
    <button id="generate-button" type="submit">Generate My Ticket</button>
  </form>
</body>
</html>
"#
    )
}

/// The ticket page, populated from the persisted submission.
pub fn ticket_page(view: &TicketView) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Your Ticket</title>
</head>
<body>
  <h1>Congrats, <span class="ticket-user-fullname">{full_name}</span>! Your ticket is ready.</h1>
  <article class="ticket">
    <img id="ticket-avatar" src="{avatar}" alt="avatar">
    <p id="fullname">{full_name}</p>
    <p class="ticket-github-username">@{github}</p>
    <p id="email">{email}</p>
    <p class="ticket-id">{display_id}</p>
  </article>
</body>
</html>
"#,
        full_name = escape_html(&view.full_name),
        github = escape_html(&view.github_username),
        email = escape_html(&view.email),
        avatar = escape_html(&view.avatar_data_url),
        display_id = escape_html(&view.display_id_tag()),
    )
}
