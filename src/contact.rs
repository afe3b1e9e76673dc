//! Contact form validation and (simulated) submission.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

#[cfg(feature = "async")]
use rand::Rng;
#[cfg(feature = "async")]
use std::time::Duration;

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again later.";

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid regex"));

static PHONE_SEPARATORS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-()]").expect("valid regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accepts `+1 (555) 123-4567` style input: separators are stripped first.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(&PHONE_SEPARATORS_RE.replace_all(phone, ""))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Company,
    Service,
    Message,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Service => "service",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Company => "Company",
            Field::Service => "Service Interest",
            Field::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            Field::FirstName | Field::LastName | Field::Email | Field::Message
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inline error for one field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    /// Validates every field, collecting at most one error per field.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let errors: Vec<FieldError> = [
            Field::FirstName,
            Field::LastName,
            Field::Email,
            Field::Phone,
            Field::Company,
            Field::Service,
            Field::Message,
        ]
        .into_iter()
        .filter_map(|field| validate_field(field, self.value(field)).err())
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Checks one value; the first failing rule wins.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    let fail = |message: String| Err(FieldError { field, message });

    if value.is_empty() {
        if field.is_required() {
            return fail(format!("{} is required.", field.label()));
        }
        return Ok(());
    }

    match field {
        Field::Email if !is_valid_email(value) => {
            fail("Please enter a valid email address.".to_string())
        }
        Field::Phone if !is_valid_phone(value) => {
            fail("Please enter a valid phone number.".to_string())
        }
        Field::FirstName | Field::LastName if value.chars().count() < MIN_NAME_LEN => {
            fail("Name must be at least 2 characters long.".to_string())
        }
        Field::Message if value.chars().count() < MIN_MESSAGE_LEN => {
            fail("Message must be at least 10 characters long.".to_string())
        }
        _ => Ok(()),
    }
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Form has {} invalid field(s)", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("Sorry, there was an error sending your message. Please try again later.")]
    Failed(String),
}

/// Confirmation shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub message: &'static str,
}

/// Delivers a validated form somewhere.
#[cfg(feature = "async")]
#[allow(async_fn_in_trait)]
pub trait Submitter {
    /// Returns a description of the transport failure on error.
    async fn submit(&self, form: &ContactForm) -> Result<(), String>;
}

/// Stand-in transport: waits, then fails at random.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    pub delay: Duration,
    /// Probability in `[0, 1]` that a submission fails. Values outside the
    /// range are clamped; a non-finite rate never fails.
    pub failure_rate: f64,
}

#[cfg(feature = "async")]
impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
            failure_rate: 0.1,
        }
    }
}

#[cfg(feature = "async")]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, _form: &ContactForm) -> Result<(), String> {
        tokio::time::sleep(self.delay).await;
        let rate = if self.failure_rate.is_finite() {
            self.failure_rate.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let failed = rand::thread_rng().gen_bool(rate);
        if failed {
            Err("Network error".to_string())
        } else {
            Ok(())
        }
    }
}

/// Validates then submits the form.
#[cfg(feature = "async")]
pub async fn submit_contact_form<T: Submitter>(
    form: &ContactForm,
    submitter: &T,
) -> Result<SubmitReceipt, SubmitError> {
    form.validate().map_err(SubmitError::Invalid)?;

    match submitter.submit(form).await {
        Ok(()) => Ok(SubmitReceipt {
            message: SUCCESS_MESSAGE,
        }),
        Err(reason) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Form submission error: {}", reason);
            Err(SubmitError::Failed(reason))
        }
    }
}
