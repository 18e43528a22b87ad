//! API Endpoint Configuration

/// Backend used when no override is baked in at build time.
const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Base URL of the backend, resolved once at compile time from
/// `PLACECARD_API_URL`. The only environment-derived behavior in the app.
pub fn api_base_url() -> &'static str {
    option_env!("PLACECARD_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
        assert!(api_base_url().starts_with("http"));
    }
}
