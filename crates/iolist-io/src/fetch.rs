//! Upload transport over the browser `fetch` API.
//!
//! The request carries the `FormData` unchanged and sets no headers, so
//! the browser chooses the multipart boundary and content type.

use iolist_client::{HttpReply, UploadError, UploadTransport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// [`UploadTransport`] that POSTs `FormData` with `window.fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[allow(clippy::needless_pass_by_value)]
fn transport_error(value: JsValue) -> UploadError {
    UploadError::Transport(format!("{value:?}"))
}

impl UploadTransport for FetchTransport {
    type Payload = web_sys::FormData;

    #[allow(clippy::future_not_send)] // WASM is single-threaded; FormData is !Send
    async fn post(
        &self,
        endpoint: &str,
        payload: web_sys::FormData,
    ) -> Result<HttpReply, UploadError> {
        let window =
            web_sys::window().ok_or_else(|| UploadError::Transport("no global window".into()))?;

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_body(&payload);

        // First suspension point: wait for the response headers.
        let response = JsFuture::from(window.fetch_with_str_and_init(endpoint, &init))
            .await
            .map_err(transport_error)?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|e| UploadError::Transport(format!("fetch did not return a Response: {e:?}")))?;
        let status = response.status();

        // Second suspension point: read the body.
        let text = JsFuture::from(response.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;
        let body = text
            .as_string()
            .ok_or_else(|| UploadError::Transport("response body is not text".into()))?;

        Ok(HttpReply { status, body })
    }
}
