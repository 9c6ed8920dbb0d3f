use std::rc::Rc;

use dioxus::prelude::*;
use iolist_io::{DownloadPanel, UploadForm};

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(app);
}

/// Root application component.
///
/// Loads the page configuration once, owns the upload submitter for the
/// lifetime of the page, and lays out the upload form and the download
/// panel.
fn app() -> Element {
    let config = use_hook(iolist_io::config::load);
    let submitter = use_hook(|| Rc::new(iolist_io::browser_submitter(config.clone())));

    rsx! {
        div { class: "min-h-screen flex flex-col",
            header { class: "px-6 py-4 border-b",
                h1 { class: "text-2xl", "Automation IO List" }
                p { class: "text-sm",
                    "Convert an AutomationML CAEX file into an Excel IO list"
                }
            }

            div { class: "flex-1 flex flex-col lg:flex-row gap-6 p-6",
                div { class: "flex-1",
                    UploadForm { submitter: submitter }
                }
                div { class: "lg:w-96 flex-shrink-0",
                    DownloadPanel { config: config }
                }
            }
        }
    }
}
