// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Best-effort collaborators: worker notifications and description drafting.
//!
//! Failures here are logged and swallowed. They never change lifecycle state.

use care_shifts_domain::{Shift, Worker};
use thiserror::Error;

/// Text returned when the generator succeeds but produces nothing.
pub const EMPTY_DESCRIPTION_FALLBACK: &str = "Could not generate description.";

/// Text returned when the generator fails.
pub const GENERIC_DESCRIPTION_FALLBACK: &str =
    "Experienced care worker needed for this shift. Please ensure all certifications are up to date.";

/// Requirements assumed when the caller supplies none.
pub const DEFAULT_REQUIREMENTS: &str = "Reliable, kind, certified.";

/// Notification dispatch errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotificationError {
    /// The worker has neither an email address nor a mobile number.
    #[error("Worker '{worker_id}' has no email address or mobile number")]
    NoChannel { worker_id: String },

    /// The message could not be delivered.
    #[error("Failed to deliver {channel} notification: {reason}")]
    Delivery { channel: String, reason: String },
}

/// Description generation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// Nothing to describe.
    #[error("Cannot describe a shift without a title")]
    EmptyTitle,

    /// The generation backend is unreachable or refused the request.
    #[error("Description service unavailable: {0}")]
    Unavailable(String),
}

/// Sends messages to workers.
pub trait NotificationDispatcher: Send + Sync {
    /// Tells a worker they have been offered a shift.
    ///
    /// # Errors
    ///
    /// Returns an error if no message could be sent.
    fn notify(&self, worker: &Worker, shift: &Shift) -> Result<(), NotificationError>;

    /// Welcomes a newly registered worker.
    ///
    /// # Errors
    ///
    /// Returns an error if no message could be sent.
    fn welcome(&self, worker: &Worker) -> Result<(), NotificationError>;
}

/// Drafts role descriptions for new shifts.
pub trait DescriptionGenerator: Send + Sync {
    /// Drafts a description from a title and key requirements.
    ///
    /// # Errors
    ///
    /// Returns an error if no description could be produced.
    fn generate(&self, title: &str, requirements: &str) -> Result<String, GenerationError>;
}

/// A dispatcher that writes each message to the log instead of sending it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl NotificationDispatcher for LogNotifier {
    fn notify(&self, worker: &Worker, shift: &Shift) -> Result<(), NotificationError> {
        let profile = worker.profile();
        if profile.email.is_none() && profile.mobile_number.is_none() {
            return Err(NotificationError::NoChannel {
                worker_id: worker.id().to_string(),
            });
        }

        if let Some(email) = &profile.email {
            tracing::info!(
                to = %email,
                subject = %format!("New Shift Request at {}", shift.facility_name()),
                "Hello {}, you have been selected for the shift \"{}\" on {}. Please log in to accept or reject.",
                profile.name,
                shift.details().title,
                shift.date()
            );
        }

        if let Some(mobile) = &profile.mobile_number {
            tracing::info!(
                to = %mobile,
                "CareShifts Alert: You have a new shift request from {} for {}. Check app for details.",
                shift.facility_name(),
                shift.date()
            );
        }

        Ok(())
    }

    fn welcome(&self, worker: &Worker) -> Result<(), NotificationError> {
        let profile = worker.profile();
        let Some(email) = &profile.email else {
            return Err(NotificationError::NoChannel {
                worker_id: worker.id().to_string(),
            });
        };

        tracing::info!(
            to = %email,
            subject = "Welcome to CareShifts - Verify your account",
            "Hi {}, welcome to CareShifts! Please click the link below to verify your email address.",
            profile.name
        );
        Ok(())
    }
}

/// An offline generator that fills a fixed template.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateDescriptionGenerator;

impl DescriptionGenerator for TemplateDescriptionGenerator {
    fn generate(&self, title: &str, requirements: &str) -> Result<String, GenerationError> {
        let title: &str = title.trim();
        if title.is_empty() {
            return Err(GenerationError::EmptyTitle);
        }

        let requirements: &str = requirements.trim().trim_end_matches('.');
        Ok(format!(
            "We are looking for a dedicated care professional to cover our {title}. \
             You will support residents with personal care, mobility and daily routines, \
             working alongside a friendly team to keep everyone safe and comfortable. \
             Key requirements: {requirements}."
        ))
    }
}

/// Drafts a description, falling back to fixed text when the generator
/// produces nothing or fails.
#[must_use]
pub fn describe_shift(
    generator: &dyn DescriptionGenerator,
    title: &str,
    requirements: Option<&str>,
) -> String {
    let requirements: &str = requirements
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(DEFAULT_REQUIREMENTS);

    match generator.generate(title, requirements) {
        Ok(text) if text.trim().is_empty() => {
            tracing::warn!(title, "Description generator returned no text");
            String::from(EMPTY_DESCRIPTION_FALLBACK)
        }
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(title, error = %e, "Description generation failed");
            String::from(GENERIC_DESCRIPTION_FALLBACK)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    struct FixedGenerator(Result<String, GenerationError>);

    impl DescriptionGenerator for FixedGenerator {
        fn generate(&self, _title: &str, _requirements: &str) -> Result<String, GenerationError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(GenerationError::EmptyTitle) => Err(GenerationError::EmptyTitle),
                Err(GenerationError::Unavailable(msg)) => {
                    Err(GenerationError::Unavailable(msg.clone()))
                }
            }
        }
    }

    struct EchoRequirements;

    impl DescriptionGenerator for EchoRequirements {
        fn generate(&self, _title: &str, requirements: &str) -> Result<String, GenerationError> {
            Ok(requirements.to_string())
        }
    }

    #[test]
    fn test_generated_text_is_returned() {
        let generator = FixedGenerator(Ok(String::from("Great shift.")));
        assert_eq!(describe_shift(&generator, "Night", None), "Great shift.");
    }

    #[test]
    fn test_empty_result_uses_empty_fallback() {
        let generator = FixedGenerator(Ok(String::from("   ")));
        assert_eq!(
            describe_shift(&generator, "Night", None),
            EMPTY_DESCRIPTION_FALLBACK
        );
    }

    #[test]
    fn test_failure_uses_generic_fallback() {
        let generator = FixedGenerator(Err(GenerationError::Unavailable(String::from(
            "timeout",
        ))));
        assert_eq!(
            describe_shift(&generator, "Night", Some("Manual handling")),
            GENERIC_DESCRIPTION_FALLBACK
        );
    }

    #[test]
    fn test_missing_requirements_use_default() {
        assert_eq!(
            describe_shift(&EchoRequirements, "Night", Some("  ")),
            DEFAULT_REQUIREMENTS
        );
        assert_eq!(
            describe_shift(&EchoRequirements, "Night", Some("PMVA trained")),
            "PMVA trained"
        );
    }

    #[test]
    fn test_template_generator_mentions_title_and_requirements() {
        let text: String = TemplateDescriptionGenerator
            .generate("Weekend Night Shift", "Dementia care experience.")
            .unwrap();
        assert!(text.contains("Weekend Night Shift"));
        assert!(text.ends_with("Key requirements: Dementia care experience."));
    }

    #[test]
    fn test_template_generator_rejects_blank_title() {
        assert_eq!(
            TemplateDescriptionGenerator.generate("  ", DEFAULT_REQUIREMENTS),
            Err(GenerationError::EmptyTitle)
        );
        assert_eq!(
            describe_shift(&TemplateDescriptionGenerator, "", None),
            GENERIC_DESCRIPTION_FALLBACK
        );
    }
}
