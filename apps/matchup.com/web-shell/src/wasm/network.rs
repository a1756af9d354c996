use super::*;

use gloo_net::http::Request;

pub(super) struct RawInteractionResponse {
    pub(super) status: u16,
    pub(super) body: String,
}

/// POST to the action URL a like/pass control carries. The server expects
/// the CSRF token and the AJAX marker as headers and no request body; it
/// answers JSON either way, but a non-2xx status is terminal before the
/// body is ever interpreted.
pub(super) async fn post_interaction(
    action_url: &str,
    csrf_token: &str,
) -> Result<RawInteractionResponse, InteractionError> {
    let response = Request::post(action_url)
        .header(CSRF_HEADER, csrf_token)
        .header(AJAX_MARKER_HEADER, AJAX_MARKER_VALUE)
        .send()
        .await
        .map_err(|error| InteractionError::Network(error.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|error| InteractionError::Network(error.to_string()))?;

    Ok(RawInteractionResponse { status, body })
}
