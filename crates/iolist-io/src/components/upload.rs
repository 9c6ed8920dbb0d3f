//! Upload form for CAEX files, plus the container that collects the
//! download links of finished conversions.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::form::DioxusSubmission;
use crate::submitter::BrowserSubmitter;

/// Element id of the upload `<form>`.
pub const UPLOAD_FORM_ID: &str = "upload-form";

/// Props for the [`UploadForm`] component.
#[derive(Props, Clone)]
pub struct UploadFormProps {
    /// The page's submitter. Shared so redirects outlive re-renders.
    submitter: Rc<BrowserSubmitter>,
}

impl PartialEq for UploadFormProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.submitter, &other.submitter)
    }
}

/// A form with a file picker and an output-name field, posted to the
/// converter without leaving the page.
///
/// Field names (`file`, `custom_name`) are what the converter expects;
/// they are sent exactly as the browser collects them. Download links
/// for finished conversions are appended below the form and are not
/// managed by Dioxus.
#[component]
pub fn UploadForm(props: UploadFormProps) -> Element {
    let container_id = props.submitter.config().container_id.clone();

    let handle_submit = move |evt: FormEvent| {
        // Synchronous: navigation must be cancelled before this handler
        // returns to the browser.
        let prepared = props
            .submitter
            .begin(&DioxusSubmission::new(&evt, UPLOAD_FORM_ID));
        let submitter = Rc::clone(&props.submitter);
        spawn(async move {
            submitter.complete(prepared).await;
        });
    };

    rsx! {
        div { class: "space-y-4",
            form {
                id: UPLOAD_FORM_ID,
                class: "space-y-3 border rounded-lg p-6",
                onsubmit: handle_submit,

                div {
                    label { r#for: "upload-file", class: "block font-medium mb-1",
                        "CAEX file"
                    }
                    input {
                        id: "upload-file",
                        r#type: "file",
                        name: "file",
                    }
                }

                div {
                    label { r#for: "upload-name", class: "block font-medium mb-1",
                        "Output name"
                    }
                    input {
                        id: "upload-name",
                        r#type: "text",
                        name: "custom_name",
                        placeholder: "io-list",
                        class: "border rounded px-2 py-1",
                    }
                }

                button {
                    r#type: "submit",
                    class: "px-4 py-2 rounded font-medium cursor-pointer",
                    "Upload and convert"
                }
            }

            div { id: "{container_id}", class: "flex flex-col gap-2" }
        }
    }
}
