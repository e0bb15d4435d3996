// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shift status tracking and transition logic.
//!
//! This module defines the states a posted shift moves through and the
//! table of permitted transitions between them.
//!
//! ```text
//!   Open ──offer──▶ PendingAcceptance ──accept──▶ Booked ──start──▶ InProgress
//!    ▲                     │                                           │
//!    └──────reject─────────┘                                      complete
//!                                                                      ▼
//!                      Closed ◀──approve & pay── CompletedPendingApproval
//! ```
//!
//! `Closed` is terminal. Closed shifts are retained for history.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The lifecycle state of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
    /// Posted by a facility, no worker assigned.
    Open,
    /// Offered to a worker, awaiting their answer.
    PendingAcceptance,
    /// Accepted by the worker; a confirmed commitment.
    Booked,
    /// The worker has started the shift.
    InProgress,
    /// The worker has finished; the facility has not yet signed off.
    CompletedPendingApproval,
    /// Approved and paid. Terminal.
    Closed,
}

impl ShiftStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::Open,
        Self::PendingAcceptance,
        Self::Booked,
        Self::InProgress,
        Self::CompletedPendingApproval,
        Self::Closed,
    ];

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::PendingAcceptance => "PENDING_ACCEPTANCE",
            Self::Booked => "BOOKED",
            Self::InProgress => "IN_PROGRESS",
            Self::CompletedPendingApproval => "COMPLETED_PENDING_APPROVAL",
            Self::Closed => "CLOSED",
        }
    }

    /// Returns true if no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns true if a worker must be assigned while in this status.
    #[must_use]
    pub const fn requires_worker(&self) -> bool {
        !matches!(self, Self::Open)
    }

    /// Returns true if this status counts as a confirmed commitment
    /// for the purposes of double-booking checks.
    ///
    /// Offers that have not been accepted are not commitments.
    #[must_use]
    pub const fn is_commitment(&self) -> bool {
        matches!(
            self,
            Self::Booked | Self::InProgress | Self::CompletedPendingApproval | Self::Closed
        )
    }

    /// Checks whether the transition table permits moving to `target`.
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Open, Self::PendingAcceptance)
                | (Self::PendingAcceptance, Self::Booked | Self::Open)
                | (Self::Booked, Self::InProgress)
                | (Self::InProgress, Self::CompletedPendingApproval)
                | (Self::CompletedPendingApproval, Self::Closed)
        )
    }
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShiftStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OPEN" => Ok(Self::Open),
            "PENDING_ACCEPTANCE" => Ok(Self::PendingAcceptance),
            "BOOKED" => Ok(Self::Booked),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "COMPLETED_PENDING_APPROVAL" => Ok(Self::CompletedPendingApproval),
            "CLOSED" => Ok(Self::Closed),
            _ => Err(DomainError::InvalidShiftStatus(s.to_string())),
        }
    }
}

/// Named buckets of statuses used by the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusGroup {
    /// `Open`.
    Open,
    /// `PendingAcceptance`.
    Pending,
    /// `Booked`.
    Upcoming,
    /// `PendingAcceptance`, `Booked` or `InProgress`.
    Active,
    /// `InProgress`.
    InProgress,
    /// `CompletedPendingApproval`.
    AwaitingApproval,
    /// `CompletedPendingApproval` or `Closed`.
    Completed,
    /// `Closed`.
    History,
}

impl StatusGroup {
    /// Returns true if `status` belongs to this group.
    #[must_use]
    pub const fn contains(&self, status: ShiftStatus) -> bool {
        match self {
            Self::Open => matches!(status, ShiftStatus::Open),
            Self::Pending => matches!(status, ShiftStatus::PendingAcceptance),
            Self::Upcoming => matches!(status, ShiftStatus::Booked),
            Self::Active => matches!(
                status,
                ShiftStatus::PendingAcceptance | ShiftStatus::Booked | ShiftStatus::InProgress
            ),
            Self::InProgress => matches!(status, ShiftStatus::InProgress),
            Self::AwaitingApproval => matches!(status, ShiftStatus::CompletedPendingApproval),
            Self::Completed => matches!(
                status,
                ShiftStatus::CompletedPendingApproval | ShiftStatus::Closed
            ),
            Self::History => matches!(status, ShiftStatus::Closed),
        }
    }

    /// Returns the string representation of the group.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Upcoming => "upcoming",
            Self::Active => "active",
            Self::InProgress => "in_progress",
            Self::AwaitingApproval => "awaiting_approval",
            Self::Completed => "completed",
            Self::History => "history",
        }
    }
}

impl FromStr for StatusGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "pending" => Ok(Self::Pending),
            "upcoming" => Ok(Self::Upcoming),
            "active" => Ok(Self::Active),
            "in_progress" => Ok(Self::InProgress),
            "awaiting_approval" => Ok(Self::AwaitingApproval),
            "completed" => Ok(Self::Completed),
            "history" => Ok(Self::History),
            _ => Err(DomainError::InvalidStatusGroup(s.to_string())),
        }
    }
}
