//! Lead and contact forms, and the service that accepts them.
//!
//! Only a mock submitter exists: it validates, logs and acknowledges after a
//! short delay. A real backend would implement [`FormSubmitter`].

use std::fmt;
use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum FormSubmission {
    Registration {
        full_name: String,
        email: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        phone: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        referral_source: Option<String>,
    },
    EmailCapture {
        first_name: String,
        email: String,
    },
    Contact {
        name: String,
        email: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        subject: Option<String>,
        message: String,
    },
    Newsletter {
        email: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Invalid form: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Invalid(Vec<FieldError>),

    #[error("Submission failed: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgment {
    pub success: bool,
    pub message: String,
}

impl FormSubmission {
    pub fn name(&self) -> &'static str {
        match self {
            FormSubmission::Registration { .. } => "registration",
            FormSubmission::EmailCapture { .. } => "email_capture",
            FormSubmission::Contact { .. } => "contact",
            FormSubmission::Newsletter { .. } => "newsletter",
        }
    }

    /// Check required fields and email shape, reporting every failing field.
    pub fn validate(&self) -> Result<(), FormError> {
        let mut errors = Vec::new();

        match self {
            FormSubmission::Registration {
                full_name, email, ..
            } => {
                require(&mut errors, "full_name", full_name, "Please enter your name");
                check_email(&mut errors, email);
            }
            FormSubmission::EmailCapture { first_name, email } => {
                require(&mut errors, "first_name", first_name, "Please enter your name");
                check_email(&mut errors, email);
            }
            FormSubmission::Contact {
                name,
                email,
                message,
                ..
            } => {
                require(&mut errors, "name", name, "Please enter your name");
                check_email(&mut errors, email);
                require(&mut errors, "message", message, "This field is required");
            }
            FormSubmission::Newsletter { email } => check_email(&mut errors, email),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormError::Invalid(errors))
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            FormSubmission::Registration { .. } => {
                "Registration successful! Check your email for next steps."
            }
            FormSubmission::EmailCapture { .. } => {
                "You're in! Check your inbox for your first wellness tip."
            }
            FormSubmission::Contact { .. } => {
                "Message sent! We typically respond within 24 hours."
            }
            FormSubmission::Newsletter { .. } => "You're in! Check your inbox.",
        }
    }
}

fn require(errors: &mut Vec<FieldError>, field: &'static str, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.push(FieldError { field, message });
    }
}

fn check_email(errors: &mut Vec<FieldError>, email: &str) {
    if email.trim().is_empty() {
        errors.push(FieldError {
            field: "email",
            message: "Please enter your email address",
        });
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.push(FieldError {
            field: "email",
            message: "Please enter a valid email address",
        });
    }
}

/// Accepts a form and resolves with an acknowledgment or fails.
pub trait FormSubmitter {
    fn submit(
        &self,
        form: &FormSubmission,
    ) -> impl Future<Output = Result<Acknowledgment, FormError>> + Send;
}

/// Stand-in backend: logs the payload and acknowledges after `delay`.
#[derive(Debug, Clone)]
pub struct MockSubmitter {
    delay: Duration,
}

impl Default for MockSubmitter {
    fn default() -> Self {
        MockSubmitter {
            delay: Duration::from_secs(1),
        }
    }
}

impl MockSubmitter {
    pub fn with_delay(delay: Duration) -> Self {
        MockSubmitter { delay }
    }
}

impl FormSubmitter for MockSubmitter {
    async fn submit(&self, form: &FormSubmission) -> Result<Acknowledgment, FormError> {
        if let Err(e) = form.validate() {
            warn!(form = form.name(), error = %e, "rejected form submission");
            return Err(e);
        }

        let payload = serde_json::to_string(form)
            .map_err(|e| FormError::Rejected(e.to_string()))?;
        info!(form = form.name(), %payload, "form submitted");

        tokio::time::sleep(self.delay).await;

        Ok(Acknowledgment {
            success: true,
            message: form.success_message().to_string(),
        })
    }
}
