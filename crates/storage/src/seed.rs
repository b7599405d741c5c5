use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SeedError;
use crate::models::{
    Event, EventCategory, ParticipationRecord, ParticipationStatus, Student, Submission,
};

/// Initial contents of a [`Store`](crate::Store).
///
/// The JSON form uses the same camelCase field names as the API, and any
/// collection left out of the document starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seed {
    pub students: Vec<Student>,
    pub events: Vec<Event>,
    pub participations: Vec<ParticipationRecord>,
    pub submissions: Vec<Submission>,
}

impl Seed {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Read a JSON seed document from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&raw).map_err(|source| SeedError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The built-in campus dataset loaded when no seed file is configured
    pub fn campus() -> Self {
        Self {
            students: vec![
                student("s1", "Ananya Iyer", "ananya.iyer@college.edu", "3rd Year", 450),
                student("s2", "Rohan Mehta", "rohan.mehta@college.edu", "2nd Year", 380),
                student("s3", "Kavya Nair", "kavya.nair@college.edu", "4th Year", 520),
                student("s4", "Arjun Verma", "arjun.verma@college.edu", "1st Year", 290),
                student("s5", "Meera Pillai", "meera.pillai@college.edu", "3rd Year", 410),
                student("s6", "Vikram Rao", "vikram.rao@college.edu", "2nd Year", 340),
                student("s7", "Ishita Bose", "ishita.bose@college.edu", "4th Year", 480),
                student("s8", "Nikhil Das", "nikhil.das@college.edu", "3rd Year", 360),
            ],
            events: vec![
                event(
                    "e1",
                    "Spring Hackathon 2026",
                    "48-hour coding marathon building solutions for real-world problems.",
                    (50, 150),
                    EventCategory::Hackathon,
                ),
                event(
                    "e2",
                    "Data Science Competition",
                    "Analyze datasets and present insights with modern analytics.",
                    (40, 120),
                    EventCategory::Competition,
                ),
                event(
                    "e3",
                    "Inter-College Basketball Tournament",
                    "Represent the college in the annual basketball championship.",
                    (30, 100),
                    EventCategory::Sports,
                ),
                event(
                    "e4",
                    "Annual Cultural Fest",
                    "Music, dance, drama and visual arts on the main stage.",
                    (25, 80),
                    EventCategory::Cultural,
                ),
                event(
                    "e5",
                    "Innovation Challenge",
                    "Pitch ideas that solve campus-wide challenges.",
                    (45, 130),
                    EventCategory::Competition,
                ),
                event(
                    "e6",
                    "Debate Championship",
                    "Debate contemporary issues against other departments.",
                    (35, 110),
                    EventCategory::Competition,
                ),
            ],
            participations: vec![
                record("s1", "e1", ParticipationStatus::Participated, true),
                record("s1", "e2", ParticipationStatus::Won, true),
                record("s1", "e3", ParticipationStatus::Participated, false),
                record("s2", "e4", ParticipationStatus::Participated, true),
                record("s3", "e1", ParticipationStatus::Won, true),
            ],
            submissions: Vec::new(),
        }
    }
}

fn student(id: &str, name: &str, email: &str, year: &str, total_points: u32) -> Student {
    Student {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        year: year.to_string(),
        total_points,
    }
}

fn event(
    id: &str,
    name: &str,
    description: &str,
    (participation_points, winning_points): (u32, u32),
    category: EventCategory,
) -> Event {
    Event {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        participation_points,
        winning_points,
        category,
    }
}

fn record(
    student_id: &str,
    event_id: &str,
    status: ParticipationStatus,
    points_collected: bool,
) -> ParticipationRecord {
    ParticipationRecord {
        student_id: student_id.to_string(),
        event_id: event_id.to_string(),
        status,
        points_collected,
    }
}
