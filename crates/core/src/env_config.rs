//! Environment-driven configuration for the gateway origin.

/// Environment variable selecting the backend origin.
pub const GATEWAY_URL_VAR: &str = "OUTREACH_GATEWAY_URL";

/// Fallback origin for local development.
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8080/api";

/// Resolve the gateway base URL from the environment.
///
/// - Unset variable: returns the default silently (expected case).
/// - Set but blank: logs a warning and returns the default.
/// - Trailing slashes are stripped so paths can be appended verbatim.
#[must_use]
pub fn gateway_base_url() -> String {
    base_url_from(GATEWAY_URL_VAR)
}

fn base_url_from(var: &str) -> String {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => value.trim().trim_end_matches('/').to_owned(),
        Ok(_) => {
            tracing::warn!(var, "blank gateway URL, using default");
            DEFAULT_GATEWAY_URL.to_owned()
        },
        Err(_) => DEFAULT_GATEWAY_URL.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_uses_default() {
        let var = "OUTREACH_TEST_URL_MISSING_41981";
        unsafe { std::env::remove_var(var) };
        assert_eq!(base_url_from(var), DEFAULT_GATEWAY_URL);
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let var = "OUTREACH_TEST_URL_SLASH_41982";
        unsafe { std::env::set_var(var, "https://gateway.example/api/") };
        assert_eq!(base_url_from(var), "https://gateway.example/api");
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_blank_var_uses_default() {
        let var = "OUTREACH_TEST_URL_BLANK_41983";
        unsafe { std::env::set_var(var, "   ") };
        assert_eq!(base_url_from(var), DEFAULT_GATEWAY_URL);
        unsafe { std::env::remove_var(var) };
    }
}
