// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use time::OffsetDateTime;

/// Represents the entity performing an action.
///
/// An actor is a facility, a worker, an administrator or the system itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "facility", "worker", "admin", "system").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }

    /// The actor used for seeded data and internal housekeeping.
    #[must_use]
    pub fn system() -> Self {
        Self::new(String::from("system"), String::from("system"))
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`OfferToWorker`", "`ApproveAndPay`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A short textual capture of a record before or after a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the record.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event representing one successful state change.
///
/// Every successful command produces exactly one audit event. The
/// `subject` names the record the command changed, formatted as
/// `"<kind>:<id>"` (for example `"shift:s_3"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The record that changed.
    pub subject: String,
    /// The record before the transition.
    pub before: StateSnapshot,
    /// The record after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `subject` - The record that changed
    /// * `before` - The record before the transition
    /// * `after` - The record after the transition
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        subject: String,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            subject,
            before,
            after,
        }
    }
}

/// An audit event as stored in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    /// Position in the log, starting at 1.
    pub event_id: u64,
    /// When the event was appended.
    pub recorded_at: OffsetDateTime,
    /// The event itself.
    pub event: AuditEvent,
}

/// Append-only, in-memory audit log.
///
/// Event ids increase strictly in append order and are never reused.
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    events: Vec<RecordedEvent>,
}

impl AuditLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event and returns its id.
    pub fn append(&mut self, event: AuditEvent, recorded_at: OffsetDateTime) -> u64 {
        let event_id: u64 = self.events.last().map_or(1, |last| last.event_id + 1);
        self.events.push(RecordedEvent {
            event_id,
            recorded_at,
            event,
        });
        event_id
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in append order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Events in append order, optionally restricted to one subject.
    #[must_use]
    pub fn timeline(&self, subject: Option<&str>) -> Vec<&RecordedEvent> {
        self.events
            .iter()
            .filter(|recorded| subject.is_none_or(|s| recorded.event.subject == s))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn create_event(action: &str, subject: &str) -> AuditEvent {
        AuditEvent::new(
            Actor::new(String::from("f_1"), String::from("facility")),
            Cause::new(String::from("req-1"), String::from("HTTP request")),
            Action::new(String::from(action), None),
            String::from(subject),
            StateSnapshot::new(String::from("status=OPEN")),
            StateSnapshot::new(String::from("status=PENDING_ACCEPTANCE")),
        )
    }

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = Actor::new(String::from("w_1"), String::from("worker"));

        assert_eq!(actor.id, "w_1");
        assert_eq!(actor.actor_type, "worker");
    }

    #[test]
    fn test_system_actor() {
        let actor: Actor = Actor::system();
        assert_eq!(actor.id, "system");
        assert_eq!(actor.actor_type, "system");
    }

    #[test]
    fn test_action_creation_with_details() {
        let action: Action = Action::new(
            String::from("ApproveAndPay"),
            Some(String::from("rating=5")),
        );

        assert_eq!(action.name, "ApproveAndPay");
        assert_eq!(action.details, Some(String::from("rating=5")));
    }

    #[test]
    fn test_audit_event_keeps_subject_and_snapshots() {
        let event: AuditEvent = create_event("OfferToWorker", "shift:s_1");

        assert_eq!(event.subject, "shift:s_1");
        assert_eq!(event.before.data, "status=OPEN");
        assert_eq!(event.after.data, "status=PENDING_ACCEPTANCE");
    }

    #[test]
    fn test_log_assigns_increasing_ids() {
        let mut log: AuditLog = AuditLog::new();
        assert!(log.is_empty());

        let first: u64 = log.append(
            create_event("CreateShift", "shift:s_1"),
            datetime!(2024-06-01 09:00 UTC),
        );
        let second: u64 = log.append(
            create_event("OfferToWorker", "shift:s_1"),
            datetime!(2024-06-01 09:05 UTC),
        );

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_timeline_filters_by_subject_in_append_order() {
        let mut log: AuditLog = AuditLog::new();
        let at = datetime!(2024-06-01 09:00 UTC);
        log.append(create_event("CreateShift", "shift:s_1"), at);
        log.append(create_event("ApproveWorker", "worker:w_1"), at);
        log.append(create_event("OfferToWorker", "shift:s_1"), at);

        let shift_events: Vec<&RecordedEvent> = log.timeline(Some("shift:s_1"));
        assert_eq!(shift_events.len(), 2);
        assert_eq!(shift_events[0].event.action.name, "CreateShift");
        assert_eq!(shift_events[1].event.action.name, "OfferToWorker");
        assert_eq!(shift_events[1].event_id, 3);

        assert_eq!(log.timeline(None).len(), 3);
        assert!(log.timeline(Some("facility:f_9")).is_empty());
    }
}
