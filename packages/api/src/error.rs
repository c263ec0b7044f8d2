//! Gateway error taxonomy.
//!
//! Two failure classes exist and both are recoverable at the UI level:
//! [`GatewayError::Transport`] when no response reached the server, and
//! [`GatewayError::Rejection`] when the server answered 4xx/5xx, usually
//! with an RFC-7807 problem body. No request is ever retried; a single
//! failure is surfaced to the store as-is.

use serde::Deserialize;
use store::ErrorMessage;

/// RFC-7807 style error body the API returns on rejections.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Problem {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub detail: Option<String>,
    pub status: Option<u16>,
}

impl Problem {
    /// Best human-readable message the body offers.
    pub fn message(&self) -> Option<&str> {
        self.detail.as_deref().or(self.title.as_deref())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a 4xx/5xx status.
    #[error("server rejected the request with status {status}")]
    Rejection {
        status: u16,
        problem: Option<Problem>,
    },

    /// An update was attempted on an entity that was never persisted.
    #[error("entity has no identifier")]
    MissingId,
}

impl GatewayError {
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Rejection { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Convert into the store-level representation views render.
    pub fn into_message(self) -> ErrorMessage {
        match self {
            GatewayError::Transport(err) => ErrorMessage::transport(err.to_string()),
            GatewayError::Rejection { status, problem } => {
                let message = problem
                    .as_ref()
                    .and_then(Problem::message)
                    .unwrap_or("The server rejected the request")
                    .to_string();
                ErrorMessage::rejection(status, message)
            }
            GatewayError::MissingId => ErrorMessage::transport("entity has no identifier"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_prefers_detail() {
        let problem: Problem = serde_json::from_str(
            r#"{"type":"https://www.jhipster.tech/problem/problem-with-message",
                "title":"Not Found","detail":"Ride 999 not found","status":404}"#,
        )
        .unwrap();
        assert_eq!(problem.message(), Some("Ride 999 not found"));

        let err = GatewayError::Rejection {
            status: 404,
            problem: Some(problem),
        };
        assert!(err.is_not_found());
        let msg = err.into_message();
        assert_eq!(msg.status, Some(404));
        assert_eq!(msg.message, "Ride 999 not found");
    }

    #[test]
    fn rejection_without_body_has_generic_message() {
        let err = GatewayError::Rejection {
            status: 500,
            problem: None,
        };
        let msg = err.into_message();
        assert_eq!(msg.status, Some(500));
        assert_eq!(msg.message, "The server rejected the request");
    }
}
