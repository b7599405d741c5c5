mod event;
mod participation;
mod student;
mod submission;

pub use event::{Event, EventCategory, NewEvent};
pub use participation::{ParticipationRecord, ParticipationStatus};
pub use student::Student;
pub use submission::{ClaimType, Submission, SubmissionStatus};
