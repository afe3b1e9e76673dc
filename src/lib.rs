//! Security tool logic for the Iron Fence Cyber Solutions website
//!
//! Small scoring and classification engines behind the site's tools,
//! kept free of any page so each can be tested on its own:
//!
//! - password strength rubric with actionable feedback, and a password generator
//! - likelihood x impact risk matrix
//! - security checklist with persisted progress and a JSON report
//! - IP geolocation lookup and a datacenter / VPN heuristic
//! - contact form validation
//!
//! # Features
//!
//! - `async` (default): debounced cancellable evaluation, simulated form submission
//! - `lookup` (default): ipapi.co client built on reqwest
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `IRONFENCE_COMMON_PASSWORDS_PATH`: extra common-password list, one per line
//! - `IRONFENCE_STORAGE_DIR`: directory used by [`FileStorage`] (default: `./.ironfence`)
//! - `IRONFENCE_IPAPI_URL`: lookup API base URL (default: `https://ipapi.co`)
//!
//! # Example
//!
//! ```rust,no_run
//! use ironfence_tools::{assess_risk, evaluate_password_strength, RiskLevel};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password_strength(&password);
//! println!("Score: {} ({})", evaluation.score, evaluation.strength);
//! for tip in &evaluation.feedback {
//!     println!("- {}", tip);
//! }
//!
//! assert_eq!(assess_risk(5, 5).level, RiskLevel::Critical);
//! ```

mod blacklist;
mod checklist;
mod contact;
mod evaluator;
mod generator;
mod ip;
#[cfg(feature = "lookup")]
mod lookup;
mod report;
mod risk;
mod sections;
mod storage;
mod strength;
pub mod view;

// Password strength
pub use blacklist::{
    common_passwords_path, Blacklist, BlacklistError, BUILTIN_COMMON_PASSWORDS,
    COMMON_PASSWORDS_PATH_ENV,
};
pub use evaluator::{evaluate_password_strength, PasswordEvaluator, PASSWORD_TIPS};
pub use generator::{generate_secure_password, DEFAULT_GENERATED_LENGTH};
pub use strength::{PasswordScore, PasswordStrength, MAX_FEEDBACK};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_strength_cancellable, evaluate_password_strength_tx, DEBOUNCE};

// Risk matrix
pub use risk::{assess_risk, RiskAssessment, RiskLevel, MAX_RISK_VALUE, SEVERITY_RANGE};

// Checklist
pub use checklist::{
    completion_percent, ChecklistError, ChecklistItem, ChecklistTracker, ProgressTier,
    ADVANCED_ITEMS, BASELINE_ITEMS, PROGRESS_KEY,
};
pub use report::SecurityReport;
pub use storage::{storage_dir, FileStorage, MemoryStorage, Storage, StorageError, STORAGE_DIR_ENV};

// IP lookup
pub use ip::{classify_org, is_valid_ip, IpClass, IpRecord, LookupError, LookupPanel, UNKNOWN};

#[cfg(feature = "async")]
pub use ip::IpLookup;

#[cfg(feature = "lookup")]
pub use lookup::{ipapi_url, IpApiClient, DEFAULT_IPAPI_URL, IPAPI_URL_ENV};

// Contact form
pub use contact::{
    is_valid_email, is_valid_phone, validate_field, ContactForm, Field, FieldError, SubmitError,
    SubmitReceipt, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};

#[cfg(feature = "async")]
pub use contact::{submit_contact_form, SimulatedSubmitter, Submitter};
