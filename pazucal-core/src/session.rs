//! Wire types for the remote session endpoint.
//!
//! Every call is a POST whose JSON body carries an `action` discriminator;
//! the endpoint answers with a small per-action record.

use serde::{Deserialize, Serialize};

/// Locally persisted session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub user_id: String,
    pub token: String,
}

/// Request body for the session endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ApiRequest<'a> {
    Login { id: &'a str, pass: &'a str },
    Heartbeat { id: &'a str, token: &'a str },
    Logout { id: &'a str, token: &'a str },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct HeartbeatResponse {
    #[serde(default)]
    pub status: String,
}

impl HeartbeatResponse {
    /// Whether the stored session is still live.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_carry_the_action_tag() {
        let body = serde_json::to_value(ApiRequest::Login {
            id: "user",
            pass: "secret",
        })
        .expect("login serializes");
        assert_eq!(body["action"], "login");
        assert_eq!(body["id"], "user");
        assert_eq!(body["pass"], "secret");

        let body = serde_json::to_value(ApiRequest::Heartbeat {
            id: "user",
            token: "tok",
        })
        .expect("heartbeat serializes");
        assert_eq!(body["action"], "heartbeat");
        assert_eq!(body["token"], "tok");

        let body = serde_json::to_value(ApiRequest::Logout {
            id: "user",
            token: "tok",
        })
        .expect("logout serializes");
        assert_eq!(body["action"], "logout");
    }

    #[test]
    fn login_response_tolerates_missing_fields() {
        let ok: LoginResponse =
            serde_json::from_str(r#"{"success":true,"token":"abc"}"#).expect("parses");
        assert!(ok.success);
        assert_eq!(ok.token.as_deref(), Some("abc"));
        assert!(ok.message.is_none());

        let rejected: LoginResponse =
            serde_json::from_str(r#"{"success":false,"message":"bad password"}"#).expect("parses");
        assert!(!rejected.success);
        assert_eq!(rejected.message.as_deref(), Some("bad password"));
    }

    #[test]
    fn heartbeat_status_gates_on_ok() {
        let live: HeartbeatResponse = serde_json::from_str(r#"{"status":"ok"}"#).expect("parses");
        assert!(live.is_ok());

        let expired: HeartbeatResponse =
            serde_json::from_str(r#"{"status":"expired"}"#).expect("parses");
        assert!(!expired.is_ok());

        let empty: HeartbeatResponse = serde_json::from_str("{}").expect("parses");
        assert!(!empty.is_ok());
    }
}
