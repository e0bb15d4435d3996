// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::shift_status::ShiftStatus;
use serde::{Deserialize, Serialize};
use time::{Date, Time};

/// Identifies a posted shift.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftId(String);

impl ShiftId {
    /// Creates a new `ShiftId`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShiftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a care worker.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(String);

impl WorkerId {
    /// Creates a new `WorkerId`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a care facility.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(String);

impl FacilityId {
    /// Creates a new `FacilityId`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FacilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of record an identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// A facility registration.
    Facility,
    /// A worker registration.
    Worker,
    /// A posted shift.
    Shift,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Facility => write!(f, "Facility"),
            Self::Worker => write!(f, "Worker"),
            Self::Shift => write!(f, "Shift"),
        }
    }
}

/// A feedback score between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted score.
    pub const MIN: u8 = 1;
    /// Highest accepted score.
    pub const MAX: u8 = 5;

    /// Creates a new `Rating`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRating` if `score` is outside 1..=5.
    pub fn new(score: u8) -> Result<Self, DomainError> {
        if score < Self::MIN || score > Self::MAX {
            return Err(DomainError::InvalidRating {
                score: i64::from(score),
            });
        }
        Ok(Self(score))
    }

    /// Creates a `Rating` from an untrusted integer score.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRating` if `score` is outside 1..=5.
    pub fn from_score(score: i64) -> Result<Self, DomainError> {
        u8::try_from(score)
            .map_err(|_| DomainError::InvalidRating { score })
            .and_then(Self::new)
    }

    /// Returns the score.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(score: u8) -> Result<Self, Self::Error> {
        Self::new(score)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// A running mean of every rating ever received.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    average: f64,
    count: u32,
}

impl RatingSummary {
    /// Creates a summary from an existing average and contribution count.
    #[must_use]
    pub const fn new(average: f64, count: u32) -> Self {
        Self { average, count }
    }

    /// The current average.
    #[must_use]
    pub const fn average(&self) -> f64 {
        self.average
    }

    /// How many ratings contributed to the average.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Folds one more rating into the mean.
    ///
    /// `new = (old * n + score) / (n + 1)`
    #[must_use]
    pub fn record(self, rating: Rating) -> Self {
        let count: u32 = self.count.saturating_add(1);
        let average: f64 = self
            .average
            .mul_add(f64::from(self.count), f64::from(rating.value()))
            / f64::from(count);
        Self { average, count }
    }
}

/// The kinds of compliance document a worker can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    /// Disclosure and Barring Service certificate.
    Dbs,
    /// Identity document or passport.
    Id,
    /// Care qualification certificate.
    Certificate,
}

impl DocumentKind {
    /// Returns the string representation of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dbs => "DBS",
            Self::Id => "ID",
            Self::Certificate => "CERTIFICATE",
        }
    }

    /// The display name given to a newly declared document.
    #[must_use]
    pub const fn default_name(&self) -> &'static str {
        match self {
            Self::Dbs => "DBS Certificate",
            Self::Id => "ID / Passport",
            Self::Certificate => "Care Certificate",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DBS" => Ok(Self::Dbs),
            "ID" => Ok(Self::Id),
            "CERTIFICATE" => Ok(Self::Certificate),
            _ => Err(DomainError::InvalidDocumentKind(s.to_string())),
        }
    }
}

/// A compliance document declared by a worker.
///
/// Only an administrator can mark a document verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceDocument {
    /// What the document proves.
    pub kind: DocumentKind,
    /// Display name.
    pub name: String,
    /// Whether an administrator has checked it.
    pub verified: bool,
}

impl ComplianceDocument {
    /// Creates an unverified document of `kind`.
    #[must_use]
    pub fn declared(kind: DocumentKind) -> Self {
        Self {
            kind,
            name: String::from(kind.default_name()),
            verified: false,
        }
    }
}

/// Replaces an optional field when the update supplies a value.
///
/// A blank supplied value clears the field.
fn merge_optional(update: Option<&str>, current: Option<&str>) -> Option<String> {
    match update {
        Some(value) if value.trim().is_empty() => None,
        Some(value) => Some(value.to_string()),
        None => current.map(String::from),
    }
}

/// Caller-editable worker fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfile {
    /// Display name.
    pub name: String,
    /// Contact email, used for notifications.
    pub email: Option<String>,
    /// Mobile number, used for SMS notifications.
    pub mobile_number: Option<String>,
    /// Home city, used for local matching.
    pub city: String,
    /// Post code.
    pub post_code: Option<String>,
    /// Free-text biography.
    pub bio: String,
    /// Expected hourly rate.
    pub hourly_rate: f64,
    /// Declared skills.
    pub skills: Vec<String>,
    /// Driving licence number, if the worker drives.
    #[serde(default)]
    pub driving_licence_number: Option<String>,
    /// Right-to-work status, e.g. `No Visa Needed`.
    #[serde(default)]
    pub visa_status: Option<String>,
}

/// A partial update to a worker's profile.
///
/// Only profile fields are reachable here; ratings, counters, document
/// verification and the approval flag are owned by the engine. Supplying
/// a blank string for an optional text field clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkerProfileUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New mobile number.
    pub mobile_number: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New post code.
    pub post_code: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// New hourly rate.
    pub hourly_rate: Option<f64>,
    /// Replacement skill list.
    pub skills: Option<Vec<String>>,
    /// New driving licence number.
    pub driving_licence_number: Option<String>,
    /// New right-to-work status.
    pub visa_status: Option<String>,
}

impl WorkerProfileUpdate {
    /// Returns the profile with every supplied field replaced.
    #[must_use]
    pub fn merged_into(&self, profile: &WorkerProfile) -> WorkerProfile {
        WorkerProfile {
            name: self.name.clone().unwrap_or_else(|| profile.name.clone()),
            email: merge_optional(self.email.as_deref(), profile.email.as_deref()),
            mobile_number: merge_optional(
                self.mobile_number.as_deref(),
                profile.mobile_number.as_deref(),
            ),
            city: self.city.clone().unwrap_or_else(|| profile.city.clone()),
            post_code: merge_optional(self.post_code.as_deref(), profile.post_code.as_deref()),
            bio: self.bio.clone().unwrap_or_else(|| profile.bio.clone()),
            hourly_rate: self.hourly_rate.unwrap_or(profile.hourly_rate),
            skills: self.skills.clone().unwrap_or_else(|| profile.skills.clone()),
            driving_licence_number: merge_optional(
                self.driving_licence_number.as_deref(),
                profile.driving_licence_number.as_deref(),
            ),
            visa_status: merge_optional(
                self.visa_status.as_deref(),
                profile.visa_status.as_deref(),
            ),
        }
    }

    /// Returns the names of the fields this update touches.
    #[must_use]
    pub fn touched_fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> = Vec::new();
        if self.name.is_some() {
            fields.push("name");
        }
        if self.email.is_some() {
            fields.push("email");
        }
        if self.mobile_number.is_some() {
            fields.push("mobile_number");
        }
        if self.city.is_some() {
            fields.push("city");
        }
        if self.post_code.is_some() {
            fields.push("post_code");
        }
        if self.bio.is_some() {
            fields.push("bio");
        }
        if self.hourly_rate.is_some() {
            fields.push("hourly_rate");
        }
        if self.skills.is_some() {
            fields.push("skills");
        }
        if self.driving_licence_number.is_some() {
            fields.push("driving_licence_number");
        }
        if self.visa_status.is_some() {
            fields.push("visa_status");
        }
        fields
    }
}

/// Engine-owned worker statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkerStats {
    /// Running mean of facility ratings.
    pub rating: RatingSummary,
    /// Number of shifts that reached `Closed` with this worker.
    pub shifts_completed: u32,
}

impl Default for WorkerStats {
    /// New workers start at 5.0 with no contributions.
    fn default() -> Self {
        Self {
            rating: RatingSummary::new(5.0, 0),
            shifts_completed: 0,
        }
    }
}

/// A care professional who accepts and performs shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    id: WorkerId,
    profile: WorkerProfile,
    approved: bool,
    stats: WorkerStats,
    documents: Vec<ComplianceDocument>,
}

impl Worker {
    /// Creates a newly registered, unapproved worker.
    #[must_use]
    pub fn new(id: WorkerId, profile: WorkerProfile) -> Self {
        Self {
            id,
            profile,
            approved: false,
            stats: WorkerStats::default(),
            documents: Vec::new(),
        }
    }

    /// Recreates a worker with existing history.
    #[must_use]
    pub const fn with_stats(
        id: WorkerId,
        profile: WorkerProfile,
        approved: bool,
        stats: WorkerStats,
    ) -> Self {
        Self {
            id,
            profile,
            approved,
            stats,
            documents: Vec::new(),
        }
    }

    /// The worker identifier.
    #[must_use]
    pub const fn id(&self) -> &WorkerId {
        &self.id
    }

    /// The editable profile.
    #[must_use]
    pub const fn profile(&self) -> &WorkerProfile {
        &self.profile
    }

    /// Whether an administrator has approved the registration.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        self.approved
    }

    /// Engine-owned statistics.
    #[must_use]
    pub const fn stats(&self) -> &WorkerStats {
        &self.stats
    }

    /// Declared compliance documents.
    #[must_use]
    pub fn documents(&self) -> &[ComplianceDocument] {
        &self.documents
    }

    /// How many documents have been verified.
    #[must_use]
    pub fn verified_document_count(&self) -> usize {
        self.documents.iter().filter(|d| d.verified).count()
    }

    /// Whether a verified document of `kind` is on file.
    #[must_use]
    pub fn has_verified(&self, kind: DocumentKind) -> bool {
        self.documents.iter().any(|d| d.kind == kind && d.verified)
    }

    /// Adds an unverified document for each kind not already on file.
    pub fn declare_documents(&mut self, kinds: &[DocumentKind]) {
        for kind in kinds {
            if !self.documents.iter().any(|d| d.kind == *kind) {
                self.documents.push(ComplianceDocument::declared(*kind));
            }
        }
    }

    /// Marks the document of `kind` verified.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker never declared that document or it
    /// is already verified.
    pub fn verify_document(&mut self, kind: DocumentKind) -> Result<(), DomainError> {
        let Some(document) = self.documents.iter_mut().find(|d| d.kind == kind) else {
            return Err(DomainError::DocumentNotFound {
                worker_id: self.id.clone(),
                kind,
            });
        };
        if document.verified {
            return Err(DomainError::DocumentAlreadyVerified {
                worker_id: self.id.clone(),
                kind,
            });
        }
        document.verified = true;
        Ok(())
    }

    /// Marks the registration approved.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker is already approved.
    pub fn approve(&mut self) -> Result<(), DomainError> {
        if self.approved {
            return Err(DomainError::RegistrationAlreadyApproved {
                record: RecordKind::Worker,
                id: self.id.to_string(),
            });
        }
        self.approved = true;
        Ok(())
    }

    /// Replaces the editable profile.
    pub fn replace_profile(&mut self, profile: WorkerProfile) {
        self.profile = profile;
    }

    /// Records a closed shift rated by the facility.
    pub fn record_completed_shift(&mut self, rating: Rating) {
        self.stats.rating = self.stats.rating.record(rating);
        self.stats.shifts_completed = self.stats.shifts_completed.saturating_add(1);
    }
}

/// Caller-editable facility fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityProfile {
    /// Display name.
    pub name: String,
    /// City, used for local matching.
    pub city: String,
    /// Post code.
    pub post_code: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// Named contact.
    pub contact_person: Option<String>,
    /// Landline.
    pub phone_number: Option<String>,
    /// Kind of care provided.
    pub care_type: Option<String>,
    /// Whether on-site parking is available.
    pub has_parking: bool,
    /// Free-text description.
    pub description: Option<String>,
}

/// A partial update to a facility's profile.
///
/// Supplying a blank string for an optional text field clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityProfileUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New post code.
    pub post_code: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New contact.
    pub contact_person: Option<String>,
    /// New landline.
    pub phone_number: Option<String>,
    /// New care type.
    pub care_type: Option<String>,
    /// New parking flag.
    pub has_parking: Option<bool>,
    /// New description.
    pub description: Option<String>,
}

impl FacilityProfileUpdate {
    /// Returns the profile with every supplied field replaced.
    #[must_use]
    pub fn merged_into(&self, profile: &FacilityProfile) -> FacilityProfile {
        FacilityProfile {
            name: self.name.clone().unwrap_or_else(|| profile.name.clone()),
            city: self.city.clone().unwrap_or_else(|| profile.city.clone()),
            post_code: merge_optional(self.post_code.as_deref(), profile.post_code.as_deref()),
            address: merge_optional(self.address.as_deref(), profile.address.as_deref()),
            contact_person: merge_optional(
                self.contact_person.as_deref(),
                profile.contact_person.as_deref(),
            ),
            phone_number: merge_optional(
                self.phone_number.as_deref(),
                profile.phone_number.as_deref(),
            ),
            care_type: merge_optional(self.care_type.as_deref(), profile.care_type.as_deref()),
            has_parking: self.has_parking.unwrap_or(profile.has_parking),
            description: merge_optional(
                self.description.as_deref(),
                profile.description.as_deref(),
            ),
        }
    }
}

/// A care home posting shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    id: FacilityId,
    profile: FacilityProfile,
    approved: bool,
    rating: RatingSummary,
}

impl Facility {
    /// Creates a newly registered, unapproved facility.
    #[must_use]
    pub const fn new(id: FacilityId, profile: FacilityProfile) -> Self {
        Self {
            id,
            profile,
            approved: false,
            rating: RatingSummary::new(0.0, 0),
        }
    }

    /// Recreates a facility with existing history.
    #[must_use]
    pub const fn with_rating(
        id: FacilityId,
        profile: FacilityProfile,
        approved: bool,
        rating: RatingSummary,
    ) -> Self {
        Self {
            id,
            profile,
            approved,
            rating,
        }
    }

    /// The facility identifier.
    #[must_use]
    pub const fn id(&self) -> &FacilityId {
        &self.id
    }

    /// The editable profile.
    #[must_use]
    pub const fn profile(&self) -> &FacilityProfile {
        &self.profile
    }

    /// Whether an administrator has approved the registration.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        self.approved
    }

    /// Running mean of worker ratings.
    #[must_use]
    pub const fn rating(&self) -> &RatingSummary {
        &self.rating
    }

    /// Marks the registration approved.
    ///
    /// # Errors
    ///
    /// Returns an error if the facility is already approved.
    pub fn approve(&mut self) -> Result<(), DomainError> {
        if self.approved {
            return Err(DomainError::RegistrationAlreadyApproved {
                record: RecordKind::Facility,
                id: self.id.to_string(),
            });
        }
        self.approved = true;
        Ok(())
    }

    /// Replaces the editable profile.
    pub fn replace_profile(&mut self, profile: FacilityProfile) {
        self.profile = profile;
    }

    /// Folds a worker's rating into the facility average.
    pub fn record_rating(&mut self, rating: Rating) {
        self.rating = self.rating.record(rating);
    }
}

/// The fields a facility supplies when posting a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftDetails {
    /// Short title.
    pub title: String,
    /// Role description.
    pub description: String,
    /// Calendar date in the marketplace timezone.
    pub date: Date,
    /// Wall-clock start time.
    pub start_time: Time,
    /// Length in whole hours.
    pub duration_hours: u8,
    /// Pay per hour.
    pub hourly_rate: f64,
    /// Display location.
    pub location: String,
}

/// Ratings and comments exchanged once a shift is done.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Facility's rating of the worker; set exactly when the shift is closed.
    pub facility_to_worker: Option<Rating>,
    /// Facility's optional comment.
    pub facility_to_worker_comment: Option<String>,
    /// Worker's rating of the facility.
    pub worker_to_facility: Option<Rating>,
    /// Worker's optional comment.
    pub worker_to_facility_comment: Option<String>,
}

/// A single bookable work assignment posted by a facility.
///
/// Status changes go through the transition methods, which keep the
/// assigned worker and the closing feedback consistent with the status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    id: ShiftId,
    facility_id: FacilityId,
    facility_name: String,
    worker_id: Option<WorkerId>,
    details: ShiftDetails,
    status: ShiftStatus,
    feedback: Feedback,
}

impl Shift {
    /// Creates an `Open` shift posted by `facility`.
    #[must_use]
    pub fn open(id: ShiftId, facility: &Facility, details: ShiftDetails) -> Self {
        Self {
            id,
            facility_id: facility.id().clone(),
            facility_name: facility.profile().name.clone(),
            worker_id: None,
            details,
            status: ShiftStatus::Open,
            feedback: Feedback::default(),
        }
    }

    /// The shift identifier.
    #[must_use]
    pub const fn id(&self) -> &ShiftId {
        &self.id
    }

    /// The posting facility.
    #[must_use]
    pub const fn facility_id(&self) -> &FacilityId {
        &self.facility_id
    }

    /// The posting facility's name at the time of posting.
    #[must_use]
    pub fn facility_name(&self) -> &str {
        &self.facility_name
    }

    /// The assigned worker, if any.
    #[must_use]
    pub const fn worker_id(&self) -> Option<&WorkerId> {
        self.worker_id.as_ref()
    }

    /// The posted details.
    #[must_use]
    pub const fn details(&self) -> &ShiftDetails {
        &self.details
    }

    /// The shift date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.details.date
    }

    /// The current status.
    #[must_use]
    pub const fn status(&self) -> ShiftStatus {
        self.status
    }

    /// Exchanged feedback.
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Hourly rate multiplied by duration.
    #[must_use]
    pub fn total_pay(&self) -> f64 {
        self.details.hourly_rate * f64::from(self.details.duration_hours)
    }

    /// Checks that the shift may move to `to` from its current status.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTransition` naming both statuses.
    pub fn ensure_can_transition_to(&self, to: ShiftStatus) -> Result<(), DomainError> {
        if self.status.can_transition_to(to) {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                shift_id: self.id.clone(),
                from: self.status,
                to,
            })
        }
    }

    fn transition(&mut self, to: ShiftStatus) -> Result<(), DomainError> {
        self.ensure_can_transition_to(to)?;
        self.status = to;
        Ok(())
    }

    /// `Open` → `PendingAcceptance`, assigning the worker.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift is not open.
    pub fn offer_to(&mut self, worker_id: WorkerId) -> Result<(), DomainError> {
        self.transition(ShiftStatus::PendingAcceptance)?;
        self.worker_id = Some(worker_id);
        Ok(())
    }

    /// `PendingAcceptance` → `Booked`.
    ///
    /// Availability must have been checked by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift is not pending acceptance.
    pub fn accept(&mut self) -> Result<(), DomainError> {
        self.transition(ShiftStatus::Booked)
    }

    /// `PendingAcceptance` → `Open`, clearing the worker.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift is not pending acceptance.
    pub fn decline(&mut self) -> Result<(), DomainError> {
        self.transition(ShiftStatus::Open)?;
        self.worker_id = None;
        Ok(())
    }

    /// `Booked` → `InProgress`.
    ///
    /// The start window must have been checked by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift is not booked.
    pub fn start(&mut self) -> Result<(), DomainError> {
        self.transition(ShiftStatus::InProgress)
    }

    /// `InProgress` → `CompletedPendingApproval`.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift is not in progress.
    pub fn complete(&mut self) -> Result<(), DomainError> {
        self.transition(ShiftStatus::CompletedPendingApproval)
    }

    /// `CompletedPendingApproval` → `Closed`, recording the facility's rating.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift is not awaiting approval.
    pub fn close(&mut self, rating: Rating, comment: Option<String>) -> Result<(), DomainError> {
        self.transition(ShiftStatus::Closed)?;
        self.feedback.facility_to_worker = Some(rating);
        self.feedback.facility_to_worker_comment = comment;
        Ok(())
    }

    /// Records the worker's rating of the facility on a closed shift.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift is not closed or has already been rated.
    pub fn rate_facility(
        &mut self,
        rating: Rating,
        comment: Option<String>,
    ) -> Result<(), DomainError> {
        if self.status != ShiftStatus::Closed {
            return Err(DomainError::InvalidTransition {
                shift_id: self.id.clone(),
                from: self.status,
                to: ShiftStatus::Closed,
            });
        }
        if self.feedback.worker_to_facility.is_some() {
            return Err(DomainError::FacilityAlreadyRated(self.id.clone()));
        }
        self.feedback.worker_to_facility = Some(rating);
        self.feedback.worker_to_facility_comment = comment;
        Ok(())
    }
}
