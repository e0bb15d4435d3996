// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use care_shifts::CoreError;
use care_shifts_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The facility or worker is not permitted to take part yet.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// A human-readable description of why it was refused.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Rule names carried by `ApiError::DomainRuleViolation`.
pub mod rules {
    /// The shift is not in the status the operation requires.
    pub const INVALID_TRANSITION: &str = "invalid_transition";
    /// The worker already holds a confirmed shift on the date.
    pub const WORKER_UNAVAILABLE: &str = "worker_unavailable";
    /// The shift's start window has not opened.
    pub const NOT_YET_STARTABLE: &str = "not_yet_startable";
    /// The worker has already rated the facility for this shift.
    pub const ALREADY_RATED: &str = "single_facility_rating";
    /// The registration was already approved.
    pub const ALREADY_APPROVED: &str = "pending_registration";
    /// A record with the identifier already exists.
    pub const UNIQUE_ID: &str = "unique_id";
    /// Each document is verified once.
    pub const ALREADY_VERIFIED: &str = "single_document_verification";
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { action, message } => {
                write!(f, "Unauthorized to {action}: {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::ShiftNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Shift"),
            message,
        },
        DomainError::WorkerNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Worker"),
            message,
        },
        DomainError::FacilityNotFound(_) => ApiError::ResourceNotFound {
            resource_type: String::from("Facility"),
            message,
        },
        DomainError::DocumentNotFound { .. } => ApiError::ResourceNotFound {
            resource_type: String::from("Document"),
            message,
        },
        DomainError::DocumentAlreadyVerified { .. } => ApiError::DomainRuleViolation {
            rule: String::from(rules::ALREADY_VERIFIED),
            message,
        },
        DomainError::InvalidTransition { .. } => ApiError::DomainRuleViolation {
            rule: String::from(rules::INVALID_TRANSITION),
            message,
        },
        DomainError::FacilityAlreadyRated(_) => ApiError::DomainRuleViolation {
            rule: String::from(rules::ALREADY_RATED),
            message,
        },
        DomainError::RegistrationAlreadyApproved { .. } => ApiError::DomainRuleViolation {
            rule: String::from(rules::ALREADY_APPROVED),
            message,
        },
        DomainError::DuplicateId { .. } => ApiError::DomainRuleViolation {
            rule: String::from(rules::UNIQUE_ID),
            message,
        },
        DomainError::WorkerUnavailable { .. } => ApiError::DomainRuleViolation {
            rule: String::from(rules::WORKER_UNAVAILABLE),
            message,
        },
        DomainError::NotYetStartable { .. } => ApiError::DomainRuleViolation {
            rule: String::from(rules::NOT_YET_STARTABLE),
            message,
        },
        DomainError::FacilityNotApproved(_) => ApiError::Unauthorized {
            action: String::from("post shifts"),
            message,
        },
        DomainError::WorkerNotApproved(_) => ApiError::Unauthorized {
            action: String::from("receive shift offers"),
            message,
        },
        DomainError::InvalidRating { .. } => invalid("rating", message),
        DomainError::InvalidTitle(_) => invalid("title", message),
        DomainError::InvalidDuration { .. } => invalid("duration_hours", message),
        DomainError::InvalidHourlyRate(_) => invalid("hourly_rate", message),
        DomainError::InvalidName(_) => invalid("name", message),
        DomainError::InvalidCity(_) => invalid("city", message),
        DomainError::InvalidTimezone(_) => invalid("timezone", message),
        DomainError::InvalidShiftStatus(_) => invalid("status", message),
        DomainError::InvalidStatusGroup(_) => invalid("group", message),
        DomainError::InvalidDocumentKind(_) => invalid("document_kind", message),
        DomainError::NonexistentStartTime { .. } => invalid("start_time", message),
        DomainError::DateArithmeticOverflow { .. } => invalid("date", message),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Internal(msg) => ApiError::Internal { message: msg },
    }
}

pub(crate) fn invalid(field: &str, message: impl Into<String>) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: message.into(),
    }
}
