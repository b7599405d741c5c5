use chrono::Utc;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{
    ClaimType, Event, NewEvent, ParticipationRecord, ParticipationStatus, Student, Submission,
    SubmissionStatus,
};
use crate::seed::Seed;

/// Outcome of approving a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approval {
    pub submission: Submission,
    /// Points actually added to the student's total; zero when the event or
    /// the student no longer resolves, less than the event value if the total saturates
    pub points_credited: u32,
    pub records_updated: usize,
}

/// In-memory domain store owning students, events, participation records and submissions.
///
/// Every failing operation leaves all four collections untouched.
#[derive(Debug, Clone, Default)]
pub struct Store {
    students: Vec<Student>,
    events: Vec<Event>,
    participations: Vec<ParticipationRecord>,
    submissions: Vec<Submission>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: Seed) -> Self {
        Self {
            students: seed.students,
            events: seed.events,
            participations: seed.participations,
            submissions: seed.submissions,
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn participations(&self) -> &[ParticipationRecord] {
        &self.participations
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn submission(&self, id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == id)
    }

    /// Register a student for an event.
    ///
    /// Neither id is checked and repeated calls append repeated records.
    pub fn register_participation(
        &mut self,
        student_id: &str,
        event_id: &str,
    ) -> ParticipationRecord {
        let record = ParticipationRecord {
            student_id: student_id.to_string(),
            event_id: event_id.to_string(),
            status: ParticipationStatus::Participated,
            points_collected: false,
        };
        self.participations.push(record.clone());

        tracing::debug!(student_id, event_id, "Participation registered");
        record
    }

    /// Submit proof for an event; the claim is not checked against the participation record.
    pub fn submit_proof(
        &mut self,
        student_id: &str,
        event_id: &str,
        claim_type: ClaimType,
        proof_file: impl Into<String>,
    ) -> Result<Submission> {
        let student = self
            .student(student_id)
            .ok_or_else(|| StorageError::not_found("Student", student_id))?;
        let event = self
            .event(event_id)
            .ok_or_else(|| StorageError::not_found("Event", event_id))?;

        let submission = Submission {
            id: format!("sub-{}", Uuid::new_v4()),
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            event_id: event.id.clone(),
            event_name: event.name.clone(),
            claim_type,
            proof_file: proof_file.into(),
            status: SubmissionStatus::Pending,
            submitted_at: Utc::now(),
        };
        self.submissions.push(submission.clone());

        tracing::debug!(submission_id = %submission.id, student_id, event_id, "Proof submitted");
        Ok(submission)
    }

    pub fn create_announcement(&mut self, new_event: NewEvent) -> Event {
        let event = Event {
            id: self.next_event_id(),
            name: new_event.name,
            description: new_event.description,
            participation_points: new_event.participation_points,
            winning_points: new_event.winning_points,
            category: new_event.category,
        };
        self.events.push(event.clone());

        tracing::debug!(event_id = %event.id, "Announcement created");
        event
    }

    /// Approve a pending submission, credit the student and mark matching
    /// participation records as collected.
    ///
    /// If the event is gone the submission is still approved but nothing is credited.
    pub fn approve_submission(&mut self, submission_id: &str) -> Result<Approval> {
        let index = self.pending_submission_index(submission_id)?;
        self.submissions[index].status = SubmissionStatus::Approved;

        let submission = self.submissions[index].clone();
        let status = ParticipationStatus::from(submission.claim_type);

        let credit = self.event(&submission.event_id).map(|e| e.points_for(status));
        let mut points_credited = 0;
        match credit {
            Some(points) => {
                match self
                    .students
                    .iter_mut()
                    .find(|s| s.id == submission.student_id)
                {
                    Some(student) => {
                        let before = student.total_points;
                        student.total_points = before.saturating_add(points);
                        points_credited = student.total_points - before;
                        if points_credited < points {
                            tracing::warn!(
                                submission_id,
                                student_id = %student.id,
                                points,
                                points_credited,
                                "Student total saturated, credit truncated"
                            );
                        }
                    }
                    None => tracing::warn!(
                        submission_id,
                        student_id = %submission.student_id,
                        "Approved submission for unknown student, no points credited"
                    ),
                }
            }
            None => tracing::warn!(
                submission_id,
                event_id = %submission.event_id,
                "Approved submission for missing event, no points credited"
            ),
        }

        let mut records_updated = 0;
        for record in self
            .participations
            .iter_mut()
            .filter(|r| r.matches(&submission.student_id, &submission.event_id))
        {
            record.points_collected = true;
            record.status = status;
            records_updated += 1;
        }

        tracing::debug!(submission_id, points_credited, records_updated, "Submission approved");
        Ok(Approval {
            submission,
            points_credited,
            records_updated,
        })
    }

    pub fn reject_submission(&mut self, submission_id: &str) -> Result<Submission> {
        let index = self.pending_submission_index(submission_id)?;
        self.submissions[index].status = SubmissionStatus::Rejected;

        tracing::debug!(submission_id, "Submission rejected");
        Ok(self.submissions[index].clone())
    }

    fn pending_submission_index(&self, submission_id: &str) -> Result<usize> {
        let index = self
            .submissions
            .iter()
            .position(|s| s.id == submission_id)
            .ok_or_else(|| StorageError::not_found("Submission", submission_id))?;

        let submission = &self.submissions[index];
        if !submission.is_pending() {
            return Err(StorageError::AlreadyReviewed {
                id: submission.id.clone(),
                status: submission.status,
            });
        }

        Ok(index)
    }

    /// `e<N>` starting after the current event count, skipping ids already taken
    fn next_event_id(&self) -> String {
        let mut n = self.events.len() + 1;
        loop {
            let id = format!("e{n}");
            if self.event(&id).is_none() {
                return id;
            }
            n += 1;
        }
    }
}
