// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The response body was `null` or not JSON at all.
    InvalidDocument { url: String },

    /// The server answered with something other than `200 OK`.
    Http { status: u16, status_text: String },

    /// The request never produced a response (DNS, refused connection, TLS...).
    /// `status` is only known when the transport got far enough to read one.
    Transport {
        status: Option<u16>,
        status_text: String,
    },

    Io(String),
    Config(String),
}

impl Error {
    /// Builds an [`Error::Http`], falling back to the canonical reason phrase
    /// when the server sent none.
    pub fn http(status: u16, status_text: &str) -> Self {
        let status_text = if status_text.is_empty() {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|code| code.canonical_reason())
                .unwrap_or_default()
                .to_string()
        } else {
            status_text.to_string()
        };
        Error::Http {
            status,
            status_text,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDocument { url } => write!(f, "Invalid JSON document. url: {}", url),
            Error::Http {
                status,
                status_text,
            } => write!(f, "{} {}", status, status_text),
            Error::Transport {
                status,
                status_text,
            } => match status {
                Some(code) => write!(f, "{} {}", code, status_text),
                None => write!(f, "Transport Error: {}", status_text),
            },
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
