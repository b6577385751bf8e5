use crate::api::ModelsResponse;
use crate::utils::auth::add_auth_headers;
use crate::utils::url::construct_api_url;

pub async fn fetch_models(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
) -> Result<ModelsResponse, Box<dyn std::error::Error>> {
    let models_url = construct_api_url(base_url, "models");
    let request = client
        .get(models_url)
        .header("Content-Type", "application/json");
    let request = add_auth_headers(request, api_key);

    let response = request.send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("API request failed with status {status}: {error_text}").into());
    }

    let models_response = response.json::<ModelsResponse>().await?;
    Ok(models_response)
}

/// Pair each selectable model with whether the endpoint reported it.
pub fn mark_accessible<'a>(
    selectable: &'a [String],
    remote: &ModelsResponse,
) -> Vec<(&'a str, bool)> {
    selectable
        .iter()
        .map(|model| {
            let found = remote.data.iter().any(|info| info.id == *model);
            (model.as_str(), found)
        })
        .collect()
}
