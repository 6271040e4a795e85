//! Loading, error and empty-state fragments.

use super::esc;

pub const NO_RESULTS: &str = "No results to display.";

pub fn render_error(message: &str) -> String {
    format!(
        "<div class=\"error-message\">\n<h4>❌ Error</h4>\n<p>{}</p>\n</div>\n",
        esc(message)
    )
}

pub fn render_loading(message: &str) -> String {
    format!(
        "<div class=\"loading\">\n<div class=\"spinner\"></div>\n<p>{}</p>\n</div>\n",
        esc(message)
    )
}

pub fn render_no_results() -> String {
    format!("<p class=\"no-results\">{NO_RESULTS}</p>\n")
}

/// Inline stand-in for a blocking alert when there is no dialog to show.
pub fn render_validation_alert(message: &str) -> String {
    format!(
        "<div class=\"error-message\" role=\"alert\">\n<h4>⚠️ Check your input</h4>\n<p>{}</p>\n</div>\n",
        esc(message)
    )
}
