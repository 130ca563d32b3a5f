//! Session gate state machine.
//!
//! The page opens in `Checking`, then lands on either the login form or
//! the app proper depending on what the stored session and the remote
//! endpoint say.

use pazucal_core::HeartbeatResponse;

use crate::api::ApiError;

pub const MSG_EXPIRED: &str = "Your session has expired. Please log in again.";
pub const MSG_OFFLINE: &str = "Network error. The server may be offline.";
pub const MSG_LOGIN_FAILED: &str = "Login failed.";
pub const MSG_MISSING_FIELDS: &str = "Enter both an ID and a password.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Stored credentials are being verified against the endpoint.
    Checking,
    /// Show the login form, optionally with a context message.
    Login { message: Option<String> },
    /// Session verified; show the app.
    Ready,
}

impl Gate {
    #[must_use]
    pub fn login_with(message: &str) -> Self {
        Self::Login {
            message: Some(message.to_owned()),
        }
    }

    #[must_use]
    pub fn login() -> Self {
        Self::Login { message: None }
    }
}

/// Map a heartbeat result onto the next gate.
///
/// A live session shows the app; a rejected one asks for a fresh login; a
/// transport failure routes to the login screen with the generic offline
/// message rather than blocking the page.
#[must_use]
pub fn gate_after_heartbeat(result: &Result<HeartbeatResponse, ApiError>) -> Gate {
    match result {
        Ok(resp) if resp.is_ok() => Gate::Ready,
        Ok(_) => Gate::login_with(MSG_EXPIRED),
        Err(_) => Gate::login_with(MSG_OFFLINE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heartbeat(status: &str) -> HeartbeatResponse {
        serde_json::from_str(&format!(r#"{{"status":"{status}"}}"#)).expect("parses")
    }

    #[test]
    fn live_heartbeat_opens_the_app() {
        assert_eq!(gate_after_heartbeat(&Ok(heartbeat("ok"))), Gate::Ready);
    }

    #[test]
    fn rejected_heartbeat_asks_for_relogin() {
        let gate = gate_after_heartbeat(&Ok(heartbeat("expired")));
        assert_eq!(gate, Gate::login_with(MSG_EXPIRED));
    }

    #[test]
    fn transport_failure_shows_the_offline_message() {
        let result = Err(ApiError::Network(String::from("unreachable")));
        assert_eq!(gate_after_heartbeat(&result), Gate::login_with(MSG_OFFLINE));
    }

    #[test]
    fn malformed_body_degrades_like_a_network_failure() {
        let result = Err(ApiError::Decode(String::from("eof")));
        assert_eq!(gate_after_heartbeat(&result), Gate::login_with(MSG_OFFLINE));
    }
}
