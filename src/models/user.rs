use std::fmt;

use serde::{Deserialize, Serialize};

/// Login request body sent to `ws/rest/auth`.
/// Transient - built from the current form fields for one request and dropped.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Profile record returned by the auth endpoint on a successful login.
///
/// Every field is required: the decode is strict, so a response missing any
/// of them is rejected as invalid rather than filled with defaults. The API
/// echoes the password back and includes the bearer token; both are redacted
/// from `Debug` output and must never appear in rendered views.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub terms_conditions: bool,
    pub register_user: String,
    pub active: bool,
    pub message_control: String,
    pub access_module: String,
    pub person_full_name: String,
    pub person_id: i64,
    /// Registration timestamp as reported by the server, kept verbatim.
    pub register: String,
    pub profile_name: String,
    pub email: String,
    pub id: i64,
    pub username: String,
    pub password: String,
    /// Role names in server order; duplicates allowed, empty means no roles.
    pub roles: Vec<String>,
    /// Opaque bearer token for subsequent authenticated requests.
    pub bearer: String,
}

impl fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProfile")
            .field("terms_conditions", &self.terms_conditions)
            .field("register_user", &self.register_user)
            .field("active", &self.active)
            .field("message_control", &self.message_control)
            .field("access_module", &self.access_module)
            .field("person_full_name", &self.person_full_name)
            .field("person_id", &self.person_id)
            .field("register", &self.register)
            .field("profile_name", &self.profile_name)
            .field("email", &self.email)
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("roles", &self.roles)
            .field("bearer", &"<redacted>")
            .finish()
    }
}
