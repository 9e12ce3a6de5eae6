//! Status titles for the response status line.
//!
//! The table is intentionally partial. A response whose status code is not
//! listed here cannot be serialized.

const STATUS_TITLES: &[(u16, &str)] = &[
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (304, "Not Modified"),
    (400, "Bad Request"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (500, "Internal Server Error"),
];

/// Returns the title for a status code, if it has one.
///
/// # Example
///
/// ```
/// # use wireline::http::status::title;
/// assert_eq!(title(200), Some("OK"));
/// assert_eq!(title(418), None);
/// ```
pub fn title(status: u16) -> Option<&'static str> {
    STATUS_TITLES
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, title)| *title)
}
