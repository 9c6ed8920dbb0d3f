//! Panel for downloading a converted file by its server path.

use dioxus::prelude::*;
use iolist_client::ClientConfig;

use crate::download;

/// Props for the [`DownloadPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DownloadPanelProps {
    /// Supplies the origin paths are resolved against.
    config: ClientConfig,
}

/// A path field and a button that starts a browser download of
/// `<download_origin><path>`.
#[component]
pub fn DownloadPanel(props: DownloadPanelProps) -> Element {
    let mut path = use_signal(String::new);
    let mut download_error = use_signal(|| Option::<String>::None);

    let origin = props.config.download_origin.clone();
    let download_click = move |_| {
        let output_file = path();
        if let Err(e) = download::trigger_download(&props.config, &output_file) {
            download_error.set(Some(format!("Download failed: {e}")));
        } else {
            download_error.set(None);
        }
    };

    rsx! {
        div { class: "space-y-3",
            h3 { class: "text-lg font-semibold", "Download a converted file" }

            if let Some(ref err) = download_error() {
                p { class: "text-sm text-red-600", "{err}" }
            }

            div { class: "flex flex-wrap items-center gap-2",
                span { class: "text-sm", "{origin}" }
                input {
                    r#type: "text",
                    value: "{path}",
                    placeholder: "/files/io-list.xlsx",
                    class: "border rounded px-2 py-1",
                    oninput: move |e| path.set(e.value()),
                }
                button {
                    class: "px-4 py-2 rounded font-medium cursor-pointer",
                    disabled: path().is_empty(),
                    onclick: download_click,
                    "Download"
                }
            }
        }
    }
}
