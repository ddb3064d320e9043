use std::cell::RefCell;

use folio_core::{
    config::EmailCfg, Config, ContactDraft, ContactError, ContactField, ContactForm,
    EmailRequest, EmailTransport, MemoryStorage, NotificationLevel, Site, SiteEvent,
};
use futures::executor::block_on;

/// Transport that records requests and answers with a fixed outcome.
struct MockTransport {
    fail: bool,
    sent: RefCell<Vec<EmailRequest>>,
}

impl MockTransport {
    fn ok() -> Self {
        Self {
            fail: false,
            sent: RefCell::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl EmailTransport for MockTransport {
    async fn send(&self, request: &EmailRequest) -> Result<(), ContactError> {
        self.sent.borrow_mut().push(request.clone());
        if self.fail {
            Err(ContactError::delivery("provider returned 500"))
        } else {
            Ok(())
        }
    }
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new(EmailCfg::default());
    form.set(ContactField::Name, "Ada Lovelace");
    form.set(ContactField::Email, "ada@example.com");
    form.set(ContactField::Subject, "Collaboration");
    form.set(ContactField::Message, "Let's build an engine.");
    form
}

#[test]
fn success_clears_draft_and_notifies() {
    let mut form = filled_form();
    let transport = MockTransport::ok();
    let note = block_on(form.submit(&transport)).expect("valid draft");

    assert_eq!(note.level, NotificationLevel::Success);
    assert_eq!(note.title, "Message Sent!");
    assert_eq!(form.draft(), &ContactDraft::default());
    assert!(!form.is_submitting());

    let sent = transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].template_params.name, "Ada Lovelace");
    assert_eq!(sent[0].endpoint, EmailCfg::default().endpoint);
}

#[test]
fn failure_keeps_draft_and_reports_error() {
    let mut form = filled_form();
    let before = form.draft().clone();
    let note = block_on(form.submit(&MockTransport::failing())).expect("valid draft");

    assert_eq!(note.level, NotificationLevel::Error);
    assert!(note.description.contains("email me directly"));
    assert_eq!(form.draft(), &before);
    assert!(!form.is_submitting());

    // Explicit resubmission goes out again; nothing was queued.
    let transport = MockTransport::ok();
    let note = block_on(form.submit(&transport)).unwrap();
    assert_eq!(note.level, NotificationLevel::Success);
    assert_eq!(transport.sent.borrow().len(), 1);
}

#[test]
fn missing_field_never_reaches_transport() {
    let mut form = filled_form();
    form.set(ContactField::Message, "");
    let transport = MockTransport::ok();
    let err = block_on(form.submit(&transport)).unwrap_err();
    assert_eq!(err, ContactError::MissingField(ContactField::Message));
    assert!(transport.sent.borrow().is_empty());
    assert!(!form.is_submitting());
}

#[test]
fn second_submit_while_in_flight_is_rejected() {
    let mut form = filled_form();
    let _request = form.begin_submit().unwrap();
    assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
    form.finish(Ok(())).unwrap();
    assert_eq!(form.finish(Ok(())), Err(ContactError::NotSubmitting));
}

#[test]
fn site_queues_the_notification() {
    let mut site = Site::new(Config::default(), Box::new(MemoryStorage::new()));
    for field in ContactField::ALL {
        site.contact_set(field, format!("value for {field}"));
    }
    let note = block_on(site.submit_contact(&MockTransport::failing())).unwrap();
    assert_eq!(
        site.drain_events(),
        vec![SiteEvent::Notified { notification: note }]
    );
    assert_eq!(site.contact_draft().subject, "value for subject");
}
