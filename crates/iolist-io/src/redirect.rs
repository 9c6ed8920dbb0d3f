//! Delayed navigation after a successful upload.

use gloo_timers::callback::Timeout;
use iolist_client::RedirectScheduler;

/// [`RedirectScheduler`] backed by `setTimeout`.
///
/// The returned [`Timeout`] clears the browser timer when dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutRedirects;

impl RedirectScheduler for TimeoutRedirects {
    type Handle = Timeout;

    fn schedule(&self, target: &str, delay_ms: u32) -> Timeout {
        let target = target.to_owned();
        Timeout::new(delay_ms, move || navigate(&target))
    }
}

fn navigate(target: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(target) {
        web_sys::console::warn_1(&format!("redirect to {target} failed: {e:?}").into());
    }
}
