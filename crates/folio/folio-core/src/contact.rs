//! Contact form draft and submission to the EmailJS REST API.
//!
//! Submission is split in two halves so hosts never hold the form borrowed across
//! the network await: [`ContactForm::begin_submit`] validates and snapshots the
//! draft, [`ContactForm::finish`] applies the provider outcome. There is no retry;
//! a failed attempt leaves the draft intact for the visitor to resubmit.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::EmailCfg;
use crate::error::ContactError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Form input `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContactField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown contact field `{s}`"))
    }
}

/// The in-progress, uncommitted form state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Required-field check only; the email format is validated by the browser input.
    pub fn validate(&self) -> Result<(), ContactError> {
        match ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            Some(missing) => Err(ContactError::MissingField(missing)),
            None => Ok(()),
        }
    }
}

/// JSON body of `POST /api/v1.0/email/send`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmailRequest {
    #[serde(skip)]
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    /// EmailJS calls the public key `user_id`.
    pub user_id: String,
    pub template_params: ContactDraft,
}

impl EmailRequest {
    pub fn new(cfg: &EmailCfg, draft: ContactDraft) -> Self {
        Self {
            endpoint: cfg.endpoint.clone(),
            service_id: cfg.service_id.clone(),
            template_id: cfg.template_id.clone(),
            user_id: cfg.public_key.clone(),
            template_params: draft,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Outbound delivery. The response body is never consumed; only success matters.
pub trait EmailTransport {
    fn send(&self, request: &EmailRequest) -> impl Future<Output = Result<(), ContactError>>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// User-facing toast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn sent() -> Self {
        Self {
            level: NotificationLevel::Success,
            title: "Message Sent!".into(),
            description: "Thanks for reaching out! I'll get back to you soon.".into(),
        }
    }

    pub fn failed(fallback_address: &str) -> Self {
        let description = if fallback_address.is_empty() {
            "Please try again or email me directly.".to_string()
        } else {
            format!("Please try again or email me directly at {fallback_address}.")
        };
        Self {
            level: NotificationLevel::Error,
            title: "Failed to send message".into(),
            description,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    cfg: EmailCfg,
    draft: ContactDraft,
    submitting: bool,
}

impl ContactForm {
    pub fn new(cfg: EmailCfg) -> Self {
        Self {
            cfg,
            draft: ContactDraft::default(),
            submitting: false,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and snapshot the draft. The form stays in the submitting state
    /// until [`ContactForm::finish`].
    pub fn begin_submit(&mut self) -> Result<EmailRequest, ContactError> {
        if self.submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        self.draft.validate()?;
        self.submitting = true;
        Ok(EmailRequest::new(&self.cfg, self.draft.clone()))
    }

    /// Apply the provider outcome. Success clears the draft; failure keeps it.
    pub fn finish(
        &mut self,
        outcome: Result<(), ContactError>,
    ) -> Result<Notification, ContactError> {
        if !self.submitting {
            return Err(ContactError::NotSubmitting);
        }
        self.submitting = false;
        match outcome {
            Ok(()) => {
                log::info!("contact message delivered");
                self.draft = ContactDraft::default();
                Ok(Notification::sent())
            }
            Err(e) => {
                log::warn!("contact message not delivered: {e}");
                Ok(Notification::failed(&self.cfg.fallback_address))
            }
        }
    }

    /// `begin_submit`, await the transport, `finish`. Validation errors are
    /// returned as `Err`; delivery failures become an error notification.
    pub async fn submit<T: EmailTransport>(
        &mut self,
        transport: &T,
    ) -> Result<Notification, ContactError> {
        let request = self.begin_submit()?;
        let outcome = transport.send(&request).await;
        self.finish(outcome)
    }
}
