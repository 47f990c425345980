use std::collections::BTreeMap;

use base64::Engine as _;

use crate::{
    foundation::{
        config::{WheelConfig, validate_items},
        error::{WheelError, WheelResult},
    },
    render::pipeline::{RenderOpts, render_gif},
};

/// Query parameter holding the comma separated item list.
pub const ITEMS_PARAM: &str = "items";

/// Incoming request in the API-gateway proxy shape; only the query string is read.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GifRequest {
    #[serde(default)]
    pub query_string_parameters: Option<BTreeMap<String, String>>,
}

impl GifRequest {
    pub fn with_items(csv: impl Into<String>) -> Self {
        let mut params = BTreeMap::new();
        params.insert(ITEMS_PARAM.to_string(), csv.into());
        Self {
            query_string_parameters: Some(params),
        }
    }

    fn param(&self, key: &str) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|p| p.get(key))
            .map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GifResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// Standard base64 of the GIF stream.
    pub body: String,
    pub is_base64_encoded: bool,
}

/// Splits on every comma; empty entries are kept as empty labels.
pub fn parse_items(csv: &str) -> Vec<String> {
    csv.split(',').map(str::to_string).collect()
}

/// Renders the wheel for `?items=a,b,c` with the default configuration.
pub fn handle_request(req: &GifRequest) -> WheelResult<GifResponse> {
    handle_request_with(req, &WheelConfig::default(), &RenderOpts::default())
}

#[tracing::instrument(skip(req, opts))]
pub fn handle_request_with(
    req: &GifRequest,
    cfg: &WheelConfig,
    opts: &RenderOpts<'_>,
) -> WheelResult<GifResponse> {
    let csv = req.param(ITEMS_PARAM).unwrap_or_default();
    if csv.is_empty() {
        return Err(WheelError::invalid_input(
            "missing item query parameter, please specify the url with \
             ?items=csv,separated,string,of,items",
        ));
    }

    let items = parse_items(csv);
    validate_items(&items)?;

    let gif = render_gif(&items, cfg, opts)?;
    let body = base64::engine::general_purpose::STANDARD.encode(&gif);

    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "image/gif".to_string());
    headers.insert("Content-Length".to_string(), body.len().to_string());

    tracing::debug!(items = items.len(), body_len = body.len(), "handled gif request");
    Ok(GifResponse {
        status_code: 200,
        headers,
        body,
        is_base64_encoded: true,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/service/handler.rs"]
mod tests;
