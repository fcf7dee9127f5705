pub mod collect_avatar;
pub mod render_ticket;
pub mod submit_form;
