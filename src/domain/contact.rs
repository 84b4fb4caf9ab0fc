// src/domain/contact.rs

use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

pub const MIN_PHONE_DIGITS: usize = 10;
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Comments,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Comments,
    ];

    /// Form input name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "fullName",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Comments => "comments",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub comments: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Comments => &self.comments,
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Comments => &mut self.comments,
        }
    }
}

/// Per-field validation messages. `None` means the field is clean.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub comments: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
            ContactField::Comments => self.comments.as_deref(),
        }
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut Option<String> {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Comments => &mut self.comments,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    pub fn count(&self) -> usize {
        ContactField::ALL
            .iter()
            .filter(|f| self.get(**f).is_some())
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    /// Validation failed.
    Error,
    /// The submission capability reported a failure.
    Failed(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[cfg(test)]
    #[error("contact service unavailable: {0}")]
    Unavailable(String),
}

/// Delivers a validated contact request.
pub trait ContactSubmitter {
    fn submit(&self, draft: &ContactDraft) -> Result<(), SubmitError>;
}

/// Stand-in for a real backend: waits a fixed delay, then accepts.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl ContactSubmitter for SimulatedSubmitter {
    fn submit(&self, draft: &ContactDraft) -> Result<(), SubmitError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        tracing::info!(email = %draft.email, "contact request accepted");
        Ok(())
    }
}

/// Contact form: draft, per-field errors and submission status.
#[derive(Debug, Clone)]
pub struct ContactForm {
    draft: ContactDraft,
    errors: FieldErrors,
    status: SubmitStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            draft: ContactDraft::default(),
            errors: FieldErrors::default(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Applies one field edit. The phone field keeps digits only. The edited
    /// field's error is cleared; a settled status goes back to `Idle`.
    pub fn edit(&mut self, field: ContactField, value: &str) {
        let value = match field {
            ContactField::Phone => digits_only(value),
            _ => value.to_string(),
        };
        *self.draft.slot_mut(field) = value;
        *self.errors.slot_mut(field) = None;

        if self.status != SubmitStatus::Idle {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Validates every field. Returns `true` when the draft is clean.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_draft(&self.draft);
        self.errors.is_empty()
    }

    /// Validates and, when clean, hands the draft to `submitter`.
    pub fn submit(&mut self, submitter: &dyn ContactSubmitter) -> &SubmitStatus {
        if self.begin_submit() {
            let outcome = submitter.submit(&self.draft);
            self.finish_submit(outcome);
        }
        &self.status
    }

    /// Validates the draft and moves to `Submitting` when it is clean,
    /// otherwise to `Error`. Returns whether the draft may be sent.
    pub fn begin_submit(&mut self) -> bool {
        if !self.validate() {
            self.status = SubmitStatus::Error;
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Settles a `Submitting` form with the submitter's outcome.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        self.status = match outcome {
            Ok(()) => SubmitStatus::Success,
            Err(e) => {
                tracing::warn!(error = %e, "contact submission failed");
                SubmitStatus::Failed(e.to_string())
            }
        };
    }
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
    })
}

pub fn validate_draft(draft: &ContactDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.name = Some("Full name is required".into());
    }

    if draft.email.trim().is_empty() {
        errors.email = Some("Email is required".into());
    } else if !email_pattern().is_match(&draft.email) {
        errors.email = Some("Invalid email address".into());
    }

    let phone_digits = digits_only(&draft.phone);
    if phone_digits.is_empty() {
        errors.phone = Some("Phone number is required".into());
    } else if phone_digits.len() < MIN_PHONE_DIGITS {
        errors.phone = Some("Phone number should be at least 10 digits".into());
    }

    if draft.comments.trim().is_empty() {
        errors.comments = Some("Please enter your message".into());
    }

    errors
}
