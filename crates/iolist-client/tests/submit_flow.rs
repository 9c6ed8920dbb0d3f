//! Integration tests: drive whole submissions through recording fakes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use iolist_client::reply::{FALLBACK_ERROR, GENERIC_FAILURE};
use iolist_client::submit::UPLOAD_FAILED_CONTEXT;
use iolist_client::{
    ClientConfig, DownloadLink, FormSubmission, HttpReply, LinkPresenter, Notifier, PayloadError,
    PresentError, RedirectScheduler, SubmitReport, UploadError, UploadSubmitter, UploadTransport,
};

type Fields = Vec<(String, String)>;

/// Everything the fakes observed, shared with the test body.
#[derive(Default)]
struct Recorder {
    prevented: Cell<bool>,
    prevented_before_post: Cell<Option<bool>>,
    posts: RefCell<Vec<(String, Fields)>>,
    alerts: RefCell<Vec<String>>,
    logs: RefCell<Vec<(String, String)>>,
    links: RefCell<Vec<(String, DownloadLink)>>,
    scheduled: RefCell<Vec<(String, u32)>>,
    cancelled: Cell<usize>,
}

struct FakeEvent {
    rec: Rc<Recorder>,
    fields: Option<Fields>,
}

impl FormSubmission for FakeEvent {
    type Payload = Fields;

    fn prevent_default(&self) {
        self.rec.prevented.set(true);
    }

    fn payload(&self) -> Result<Fields, PayloadError> {
        self.fields.clone().ok_or(PayloadError::NoForm)
    }
}

struct FakeTransport {
    rec: Rc<Recorder>,
    reply: Result<HttpReply, String>,
}

impl UploadTransport for FakeTransport {
    type Payload = Fields;

    async fn post(&self, endpoint: &str, payload: Fields) -> Result<HttpReply, UploadError> {
        self.rec
            .prevented_before_post
            .set(Some(self.rec.prevented.get()));
        self.rec
            .posts
            .borrow_mut()
            .push((endpoint.to_owned(), payload));
        self.reply.clone().map_err(UploadError::Transport)
    }
}

struct FakeNotifier(Rc<Recorder>);

impl Notifier for FakeNotifier {
    fn alert(&self, message: &str) {
        self.0.alerts.borrow_mut().push(message.to_owned());
    }

    fn log_error(&self, context: &str, detail: &str) {
        self.0
            .logs
            .borrow_mut()
            .push((context.to_owned(), detail.to_owned()));
    }
}

struct FakePresenter {
    rec: Rc<Recorder>,
    container_exists: bool,
}

impl LinkPresenter for FakePresenter {
    fn present(&self, container_id: &str, link: &DownloadLink) -> Result<(), PresentError> {
        if !self.container_exists {
            return Err(PresentError::MissingContainer(container_id.to_owned()));
        }
        self.rec
            .links
            .borrow_mut()
            .push((container_id.to_owned(), link.clone()));
        Ok(())
    }
}

struct FakeScheduler(Rc<Recorder>);

struct FakeHandle(Rc<Recorder>);

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.0.cancelled.set(self.0.cancelled.get() + 1);
    }
}

impl RedirectScheduler for FakeScheduler {
    type Handle = FakeHandle;

    fn schedule(&self, target: &str, delay_ms: u32) -> FakeHandle {
        self.0
            .scheduled
            .borrow_mut()
            .push((target.to_owned(), delay_ms));
        FakeHandle(Rc::clone(&self.0))
    }
}

type Submitter = UploadSubmitter<FakeTransport, FakeNotifier, FakePresenter, FakeScheduler>;

fn submitter(
    rec: &Rc<Recorder>,
    reply: Result<HttpReply, String>,
    container_exists: bool,
) -> Submitter {
    UploadSubmitter::new(
        ClientConfig::default(),
        FakeTransport {
            rec: Rc::clone(rec),
            reply,
        },
        FakeNotifier(Rc::clone(rec)),
        FakePresenter {
            rec: Rc::clone(rec),
            container_exists,
        },
        FakeScheduler(Rc::clone(rec)),
    )
}

fn form_fields() -> Fields {
    vec![
        ("file".to_owned(), "plant.aml".to_owned()),
        ("custom_name".to_owned(), "plant-io".to_owned()),
    ]
}

fn event(rec: &Rc<Recorder>) -> FakeEvent {
    FakeEvent {
        rec: Rc::clone(rec),
        fields: Some(form_fields()),
    }
}

fn run(submitter: &Submitter, event: &FakeEvent) -> SubmitReport {
    let prepared = submitter.begin(event);
    pollster::block_on(submitter.complete(prepared))
}

#[test]
fn success_alerts_presents_link_and_schedules_redirect() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(
        &rec,
        Ok(HttpReply::new(
            200,
            r#"{"message": "Done", "output_file": "/files/out.csv"}"#,
        )),
        true,
    );

    let report = run(&s, &event(&rec));

    assert!(matches!(
        report,
        SubmitReport::Uploaded { output_file: Some(ref f) } if f == "/files/out.csv"
    ));
    assert_eq!(*rec.alerts.borrow(), vec!["Success: Done".to_owned()]);
    assert_eq!(
        *rec.links.borrow(),
        vec![(
            "download-container".to_owned(),
            DownloadLink {
                href: "/files/out.csv".to_owned(),
                label: "Click here to download the file".to_owned(),
            }
        )]
    );
    assert_eq!(*rec.scheduled.borrow(), vec![("/".to_owned(), 5000)]);
    assert_eq!(s.pending_redirects(), 1);
    assert!(rec.logs.borrow().is_empty());
}

#[test]
fn form_fields_are_posted_verbatim_to_endpoint() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(&rec, Ok(HttpReply::new(200, "{}")), true);

    run(&s, &event(&rec));

    assert_eq!(
        *rec.posts.borrow(),
        vec![("/upload/".to_owned(), form_fields())]
    );
}

#[test]
fn rejection_with_reason() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(
        &rec,
        Ok(HttpReply::new(400, r#"{"error": "Bad file"}"#)),
        true,
    );

    let report = run(&s, &event(&rec));

    assert!(matches!(report, SubmitReport::Rejected { ref error } if error == "Bad file"));
    assert_eq!(*rec.alerts.borrow(), vec!["Error: Bad file".to_owned()]);
    assert!(rec.links.borrow().is_empty());
    assert!(rec.scheduled.borrow().is_empty());
    assert_eq!(s.pending_redirects(), 0);
}

#[test]
fn rejection_without_reason_uses_fallback() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(&rec, Ok(HttpReply::new(400, "{}")), true);

    run(&s, &event(&rec));

    let alerts = rec.alerts.borrow();
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].contains(FALLBACK_ERROR));
    assert!(rec.links.borrow().is_empty());
}

#[test]
fn network_failure_logs_and_shows_generic_message() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(&rec, Err("connection refused".to_owned()), true);

    let report = run(&s, &event(&rec));

    assert!(matches!(report, SubmitReport::Failed(UploadError::Transport(_))));
    assert_eq!(*rec.alerts.borrow(), vec![GENERIC_FAILURE.to_owned()]);
    assert_eq!(
        GENERIC_FAILURE,
        "An error occurred while uploading the file."
    );
    let logs = rec.logs.borrow();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].0, UPLOAD_FAILED_CONTEXT);
    assert!(logs[0].1.contains("connection refused"));
    assert!(rec.links.borrow().is_empty());
    assert!(rec.scheduled.borrow().is_empty());
}

#[test]
fn undecodable_error_body_takes_exception_path() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(
        &rec,
        Ok(HttpReply::new(502, "<html>Bad Gateway</html>")),
        true,
    );

    let report = run(&s, &event(&rec));

    assert!(matches!(report, SubmitReport::Failed(UploadError::Decode(_))));
    assert_eq!(*rec.alerts.borrow(), vec![GENERIC_FAILURE.to_owned()]);
    assert_eq!(rec.logs.borrow().len(), 1);
}

#[test]
fn navigation_prevented_before_any_request() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(&rec, Ok(HttpReply::new(200, "{}")), true);
    let ev = event(&rec);

    let prepared = s.begin(&ev);
    // Set synchronously, before the future is even created.
    assert!(rec.prevented.get());
    assert_eq!(rec.prevented_before_post.get(), None);

    pollster::block_on(s.complete(prepared));
    assert_eq!(rec.prevented_before_post.get(), Some(true));
}

#[test]
fn navigation_prevented_even_when_payload_fails() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(&rec, Ok(HttpReply::new(200, "{}")), true);
    let ev = FakeEvent {
        rec: Rc::clone(&rec),
        fields: None,
    };

    let report = run(&s, &ev);

    assert!(rec.prevented.get());
    assert!(matches!(report, SubmitReport::Aborted(PayloadError::NoForm)));
    assert!(rec.posts.borrow().is_empty());
    assert!(rec.alerts.borrow().is_empty());
    assert_eq!(rec.logs.borrow().len(), 1);
}

#[test]
fn missing_container_after_success_reports_generic_failure() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(
        &rec,
        Ok(HttpReply::new(
            200,
            r#"{"message": "Done", "output_file": "/files/out.csv"}"#,
        )),
        false,
    );

    let report = run(&s, &event(&rec));

    assert!(matches!(
        report,
        SubmitReport::Failed(UploadError::Present(PresentError::MissingContainer(_)))
    ));
    assert_eq!(
        *rec.alerts.borrow(),
        vec!["Success: Done".to_owned(), GENERIC_FAILURE.to_owned()]
    );
    assert!(rec.scheduled.borrow().is_empty());
}

#[test]
fn success_without_output_file_still_redirects() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(
        &rec,
        Ok(HttpReply::new(200, r#"{"message": "Done"}"#)),
        true,
    );

    let report = run(&s, &event(&rec));

    assert!(matches!(report, SubmitReport::Uploaded { output_file: None }));
    assert!(rec.links.borrow().is_empty());
    assert_eq!(rec.scheduled.borrow().len(), 1);
}

#[test]
fn overlapping_uploads_each_append_a_link() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(
        &rec,
        Ok(HttpReply::new(
            200,
            r#"{"message": "Done", "output_file": "/files/out.csv"}"#,
        )),
        true,
    );

    // Both submissions start before either completes.
    let first = s.begin(&event(&rec));
    let second = s.begin(&event(&rec));
    pollster::block_on(async {
        s.complete(first).await;
        s.complete(second).await;
    });

    assert_eq!(rec.links.borrow().len(), 2);
    assert_eq!(s.pending_redirects(), 2);
}

#[test]
fn cancel_pending_redirects_drops_handles() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(&rec, Ok(HttpReply::new(200, "{}")), true);

    run(&s, &event(&rec));
    run(&s, &event(&rec));
    assert_eq!(rec.cancelled.get(), 0);

    s.cancel_pending_redirects();
    assert_eq!(rec.cancelled.get(), 2);
    assert_eq!(s.pending_redirects(), 0);
}

#[test]
fn dropping_submitter_cancels_redirects() {
    let rec = Rc::new(Recorder::default());
    let s = submitter(&rec, Ok(HttpReply::new(200, "{}")), true);

    run(&s, &event(&rec));
    drop(s);

    assert_eq!(rec.cancelled.get(), 1);
}

#[test]
fn configured_values_are_used() {
    let rec = Rc::new(Recorder::default());
    let config = ClientConfig {
        upload_endpoint: "/api/convert".to_owned(),
        container_id: "results".to_owned(),
        download_link_label: "Get workbook".to_owned(),
        redirect_target: "/done".to_owned(),
        redirect_delay_ms: 250,
        ..ClientConfig::default()
    };
    let s = UploadSubmitter::new(
        config,
        FakeTransport {
            rec: Rc::clone(&rec),
            reply: Ok(HttpReply::new(
                201,
                r#"{"message": "ok", "output_file": "/files/x.xlsx"}"#,
            )),
        },
        FakeNotifier(Rc::clone(&rec)),
        FakePresenter {
            rec: Rc::clone(&rec),
            container_exists: true,
        },
        FakeScheduler(Rc::clone(&rec)),
    );

    run(&s, &event(&rec));

    assert_eq!(rec.posts.borrow()[0].0, "/api/convert");
    let links = rec.links.borrow();
    assert_eq!(links[0].0, "results");
    assert_eq!(links[0].1.label, "Get workbook");
    assert_eq!(*rec.scheduled.borrow(), vec![("/done".to_owned(), 250)]);
}
