//! Persistent-connection decision.
//!
//! HTTP/1.0 keeps a connection open only when the client opts in with
//! `Connection: keep-alive`; HTTP/1.1 keeps it open unless the client opts
//! out with `Connection: close`. Whenever the client states a preference the
//! server honors, the header is echoed back as confirmation. Unrecognized
//! protocol versions are closed after one exchange.

use crate::http::request::Version;

/// Outcome of the keep-alive decision for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepAlive {
    /// Read another request from the same connection after responding
    pub keep_alive: bool,
    /// Copy the request's `Connection` header into the response
    pub echo: bool,
}

impl KeepAlive {
    const CLOSE: Self = Self {
        keep_alive: false,
        echo: false,
    };
}

/// Decides from the protocol version and the request's `Connection` header
/// value (compared case-insensitively).
pub fn decide(version: &Version, connection: Option<&str>) -> KeepAlive {
    let connection = connection.unwrap_or("");

    match version {
        Version::Http10 if connection.eq_ignore_ascii_case("keep-alive") => KeepAlive {
            keep_alive: true,
            echo: true,
        },
        Version::Http10 => KeepAlive::CLOSE,
        Version::Http11 if connection.eq_ignore_ascii_case("close") => KeepAlive {
            keep_alive: false,
            echo: true,
        },
        Version::Http11 => KeepAlive {
            keep_alive: true,
            echo: false,
        },
        Version::Other(_) => KeepAlive::CLOSE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http10_needs_explicit_keep_alive() {
        assert_eq!(decide(&Version::Http10, None), KeepAlive::CLOSE);
        assert_eq!(
            decide(&Version::Http10, Some("Keep-Alive")),
            KeepAlive {
                keep_alive: true,
                echo: true
            }
        );
        assert_eq!(decide(&Version::Http10, Some("close")), KeepAlive::CLOSE);
    }

    #[test]
    fn http11_keeps_alive_unless_closed() {
        assert_eq!(
            decide(&Version::Http11, None),
            KeepAlive {
                keep_alive: true,
                echo: false
            }
        );
        assert_eq!(
            decide(&Version::Http11, Some("CLOSE")),
            KeepAlive {
                keep_alive: false,
                echo: true
            }
        );
        assert_eq!(
            decide(&Version::Http11, Some("keep-alive")),
            KeepAlive {
                keep_alive: true,
                echo: false
            }
        );
    }

    #[test]
    fn unknown_version_closes() {
        let version = Version::Other("HTTP/0.9".to_string());

        assert_eq!(decide(&version, Some("keep-alive")), KeepAlive::CLOSE);
        assert_eq!(decide(&version, None), KeepAlive::CLOSE);
    }
}
