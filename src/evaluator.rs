//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blacklist::Blacklist;
use crate::sections::{
    blacklist_section, character_variety_section, length_section, pattern_analysis_section,
    SectionResult,
};
use crate::strength::PasswordScore;

/// Delay between the last keystroke and the evaluation it triggers.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Tips shown when the password field gains focus.
pub const PASSWORD_TIPS: &[&str] = &[
    "Use at least 12 characters",
    "Mix uppercase and lowercase letters",
    "Include numbers and special characters",
    "Avoid personal information",
    "Don't reuse passwords across sites",
    "Consider using a password manager",
];

/// Scores passwords against the rubric using its own common password list.
#[derive(Debug, Clone, Default)]
pub struct PasswordEvaluator {
    blacklist: Blacklist,
}

impl PasswordEvaluator {
    pub fn new(blacklist: Blacklist) -> Self {
        Self { blacklist }
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    pub fn evaluate(&self, password: &SecretString) -> PasswordScore {
        run_sections(password.expose_secret(), &self.blacklist, || false)
            .unwrap_or_else(|| PasswordScore::new(0, Vec::new()))
    }
}

/// Evaluates a password with the built-in common password list.
///
/// Total and deterministic: any string, including an empty one, yields a score.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordScore {
    PasswordEvaluator::default().evaluate(password)
}

/// Orchestrator: runs the sections in rubric order, stopping early when
/// `cancelled` reports true before a section.
fn run_sections(
    pwd: &str,
    blacklist: &Blacklist,
    cancelled: impl Fn() -> bool,
) -> Option<PasswordScore> {
    let sections: [(&str, &dyn Fn(&str) -> SectionResult); 4] = [
        ("length", &length_section),
        ("variety", &character_variety_section),
        ("pattern", &pattern_analysis_section),
        ("blacklist", &|p| blacklist_section(p, blacklist)),
    ];

    let mut score: u8 = 0;
    let mut feedback = Vec::new();

    for (_section_name, section_fn) in sections {
        if cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before section: {}", _section_name);
            return None;
        }

        let result = section_fn(pwd);
        score = score.saturating_add(result.points);
        feedback.extend(result.feedback.into_iter().map(str::to_string));
    }

    Some(PasswordScore::new(score.min(100), feedback))
}

/// Evaluates with an optional cancellation token, checked before each section.
///
/// Returns `None` if the token was cancelled.
#[cfg(feature = "async")]
pub fn evaluate_password_strength_cancellable(
    password: &SecretString,
    blacklist: &Blacklist,
    token: Option<&CancellationToken>,
) -> Option<PasswordScore> {
    run_sections(password.expose_secret(), blacklist, || {
        token.is_some_and(|t| t.is_cancelled())
    })
}

/// Debounced version that sends the evaluation result via channel.
///
/// Waits [`DEBOUNCE`] first; the caller cancels `token` when a newer
/// keystroke supersedes this one, in which case nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    blacklist: &Blacklist,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordScore>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => return,
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let Some(evaluation) = evaluate_password_strength_cancellable(password, blacklist, Some(&token))
    else {
        return;
    };

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_evaluate_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let evaluation = evaluate_password_strength_cancellable(
            &secret("SomePassword123!"),
            &Blacklist::builtin(),
            Some(&token),
        );
        assert!(evaluation.is_none());
    }

    #[test]
    fn test_evaluate_without_cancellation() {
        let token = CancellationToken::new();
        let evaluation = evaluate_password_strength_cancellable(
            &secret("TestPass123!"),
            &Blacklist::builtin(),
            Some(&token),
        );
        assert_eq!(
            evaluation,
            Some(evaluate_password_strength(&secret("TestPass123!")))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_strength_tx(&secret("TestPass123!"), &Blacklist::builtin(), token, tx)
            .await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(evaluation.score > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx_superseded() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let stale = token.clone();

        let pending = tokio::spawn(async move {
            evaluate_password_strength_tx(&secret("Test"), &Blacklist::builtin(), stale, tx).await;
        });
        // a newer keystroke arrives inside the debounce window
        token.cancel();
        pending.await.expect("task should finish");

        assert!(rx.recv().await.is_none());
    }
}
