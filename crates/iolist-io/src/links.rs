//! Persistent download links placed in the page after an upload.

use iolist_client::{DownloadLink, LinkPresenter, PresentError};
use wasm_bindgen::{JsCast, JsValue};

/// [`LinkPresenter`] that appends `<a download>` elements to a container
/// element looked up by id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomLinkPresenter;

#[allow(clippy::needless_pass_by_value)]
fn js_error(value: JsValue) -> PresentError {
    PresentError::JsError(format!("{value:?}"))
}

impl LinkPresenter for DomLinkPresenter {
    fn present(&self, container_id: &str, link: &DownloadLink) -> Result<(), PresentError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| PresentError::JsError("no document".into()))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| PresentError::MissingContainer(container_id.to_owned()))?;

        let anchor: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into()
            .map_err(|e| PresentError::JsError(format!("failed to cast element: {e:?}")))?;

        // `href` is kept relative, so it resolves against the page origin.
        anchor.set_href(&link.href);
        // An empty `download` attribute asks for a download and leaves the
        // filename to the server's response.
        anchor.set_download("");
        anchor.set_text_content(Some(&link.label));

        container.append_child(&anchor).map_err(js_error)?;
        Ok(())
    }
}
