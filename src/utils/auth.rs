//! Authentication headers for API requests.

/// Attach the bearer token used by OpenAI-compatible endpoints.
pub fn add_auth_headers(request: reqwest::RequestBuilder, api_key: &str) -> reqwest::RequestBuilder {
    request.bearer_auth(api_key)
}
