//! Form submission events as seen by the upload submitter.
//!
//! Two sources are supported: Dioxus `onsubmit` handlers, which only
//! expose the event, and raw DOM `submit` events, whose target is the
//! form itself.

use dioxus::prelude::FormEvent;
use iolist_client::{FormSubmission, PayloadError};
use wasm_bindgen::JsCast;

fn form_data(form: &web_sys::HtmlFormElement) -> Result<web_sys::FormData, PayloadError> {
    web_sys::FormData::new_with_form(form).map_err(|e| PayloadError::JsError(format!("{e:?}")))
}

/// A Dioxus submit event for the form with a known element id.
pub struct DioxusSubmission<'a> {
    event: &'a FormEvent,
    form_id: &'a str,
}

impl<'a> DioxusSubmission<'a> {
    /// Wrap `event`, which was fired by the form with id `form_id`.
    #[must_use]
    pub const fn new(event: &'a FormEvent, form_id: &'a str) -> Self {
        Self { event, form_id }
    }
}

impl FormSubmission for DioxusSubmission<'_> {
    type Payload = web_sys::FormData;

    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn payload(&self) -> Result<web_sys::FormData, PayloadError> {
        let form = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(self.form_id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlFormElement>().ok())
            .ok_or(PayloadError::NoForm)?;
        form_data(&form)
    }
}

/// A DOM `submit` event whose target is the submitted form.
pub struct DomSubmission<'a> {
    event: &'a web_sys::Event,
}

impl<'a> DomSubmission<'a> {
    /// Wrap a raw DOM event.
    #[must_use]
    pub const fn new(event: &'a web_sys::Event) -> Self {
        Self { event }
    }
}

impl FormSubmission for DomSubmission<'_> {
    type Payload = web_sys::FormData;

    fn prevent_default(&self) {
        self.event.prevent_default();
    }

    fn payload(&self) -> Result<web_sys::FormData, PayloadError> {
        let form = self
            .event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok())
            .ok_or(PayloadError::NoForm)?;
        form_data(&form)
    }
}
