//! Embedded HTML views for the login and main pages.
//!
//! Two static pages with a single substitution point for the login error
//! banner. No template engine; the views are thin glue around the JSON
//! API.

static LOGIN_HTML: &str = include_str!("../assets/login.html");
static INDEX_HTML: &str = include_str!("../assets/index.html");

/// Marker in `login.html` replaced by the error banner.
const ERROR_SLOT: &str = "<!-- ERROR -->";

/// Renders the login page, with an error banner when `error` is set.
#[must_use]
pub fn login_page(error: Option<&str>) -> String {
    let banner = error.map_or_else(String::new, |e| format!("<p class=\"error\">{e}</p>"));
    LOGIN_HTML.replace(ERROR_SLOT, &banner)
}

/// Renders the main page.
#[must_use]
pub const fn index_page() -> &'static str {
    INDEX_HTML
}
