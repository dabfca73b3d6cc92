use serde::Deserialize;

/// Opaque bearer credential returned by the token-acquiring operations.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct JwtToken {
    pub token: String,
}

impl std::fmt::Debug for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtToken").field("token", &"***").finish()
    }
}
