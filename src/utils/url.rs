//! Endpoint URL helpers.

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Join a base URL and an endpoint path without doubling or dropping slashes.
///
/// ```
/// use workbench::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://api.example.com/v1/", "/chat/completions"),
///     "https://api.example.com/v1/chat/completions"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Pick the API base URL: configured value, then `OPENAI_BASE_URL`, then the
/// public OpenAI endpoint. Blank values are skipped.
pub fn resolve_base_url(configured: Option<&str>, env_value: Option<&str>) -> String {
    [configured, env_value]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_regardless_of_slashes() {
        for (base, endpoint) in [
            ("https://api.example.com/v1", "models"),
            ("https://api.example.com/v1/", "models"),
            ("https://api.example.com/v1///", "///models"),
        ] {
            assert_eq!(
                construct_api_url(base, endpoint),
                "https://api.example.com/v1/models"
            );
        }
    }

    #[test]
    fn base_url_precedence() {
        assert_eq!(
            resolve_base_url(Some("http://localhost:8080/v1"), Some("http://env/v1")),
            "http://localhost:8080/v1"
        );
        assert_eq!(resolve_base_url(Some("  "), Some("http://env/v1")), "http://env/v1");
        assert_eq!(resolve_base_url(None, None), DEFAULT_BASE_URL);
    }
}
