//! Read-only projections over a [`Store`].

use crate::Store;
use crate::dto::leaderboard::LeaderboardEntry;
use crate::dto::student::{HistoryEntry, StudentStanding};
use crate::models::{Student, Submission};

fn ranked(store: &Store) -> Vec<&Student> {
    let mut students: Vec<&Student> = store.students().iter().collect();
    // stable: ties keep their stored order
    students.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    students
}

/// All students by descending points, ranked by position
pub fn leaderboard(store: &Store) -> Vec<LeaderboardEntry> {
    ranked(store)
        .into_iter()
        .enumerate()
        .map(|(index, student)| LeaderboardEntry {
            rank: index + 1,
            student: student.clone(),
        })
        .collect()
}

pub fn rank_of(store: &Store, student_id: &str) -> Option<usize> {
    ranked(store)
        .iter()
        .position(|s| s.id == student_id)
        .map(|index| index + 1)
}

/// Pending submissions in the order they were submitted
pub fn pending_submissions(store: &Store) -> Vec<&Submission> {
    store
        .submissions()
        .iter()
        .filter(|s| s.is_pending())
        .collect()
}

/// A student's participation records joined with their events.
///
/// Records pointing at an event that does not exist are left out.
pub fn student_history(store: &Store, student_id: &str) -> Vec<HistoryEntry> {
    store
        .participations()
        .iter()
        .filter(|record| record.student_id == student_id)
        .filter_map(|record| {
            let event = store.event(&record.event_id)?;
            Some(HistoryEntry {
                event_id: event.id.clone(),
                event_name: event.name.clone(),
                category: event.category,
                status: record.status,
                points_collected: record.points_collected,
                points: event.points_for(record.status),
            })
        })
        .collect()
}

pub fn student_standing(store: &Store, student_id: &str) -> Option<StudentStanding> {
    let student = store.student(student_id)?;
    let rank = rank_of(store, student_id)?;

    let events_joined = store
        .participations()
        .iter()
        .filter(|r| r.student_id == student_id)
        .count();
    let pending_submissions = store
        .submissions()
        .iter()
        .filter(|s| s.student_id == student_id && s.is_pending())
        .count();

    Some(StudentStanding {
        student: student.clone(),
        rank,
        events_joined,
        pending_submissions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Seed;
    use crate::models::{ClaimType, ParticipationStatus};

    fn student(id: &str, total_points: u32) -> Student {
        Student {
            id: id.to_string(),
            name: format!("Student {id}"),
            email: format!("{id}@college.edu"),
            year: "1st Year".to_string(),
            total_points,
        }
    }

    fn store_with(students: Vec<Student>) -> Store {
        Store::from_seed(Seed {
            students,
            ..Seed::default()
        })
    }

    #[test]
    fn test_leaderboard_orders_campus_seed() {
        let store = Store::from_seed(Seed::campus());
        let board = leaderboard(&store);
        let ids: Vec<&str> = board.iter().map(|e| e.student.id.as_str()).collect();
        assert_eq!(ids, ["s3", "s7", "s1", "s5", "s2", "s8", "s6", "s4"]);
    }

    #[test]
    fn test_leaderboard_ties_keep_stored_order() {
        let store = store_with(vec![
            student("a", 100),
            student("b", 300),
            student("c", 100),
            student("d", 300),
            student("e", 50),
        ]);

        let board = leaderboard(&store);
        let order: Vec<(usize, &str)> = board
            .iter()
            .map(|e| (e.rank, e.student.id.as_str()))
            .collect();

        assert_eq!(order, [(1, "b"), (2, "d"), (3, "a"), (4, "c"), (5, "e")]);
    }

    #[test]
    fn test_leaderboard_pairwise_order() {
        let store = store_with(vec![
            student("a", 10),
            student("b", 30),
            student("c", 10),
            student("d", 0),
            student("e", 30),
            student("f", 10),
        ]);
        let stored: Vec<&str> = store.students().iter().map(|s| s.id.as_str()).collect();
        let board = leaderboard(&store);

        for (i, first) in board.iter().enumerate() {
            for second in &board[i + 1..] {
                let (a, b) = (&first.student, &second.student);
                let stored_before = stored.iter().position(|id| *id == a.id)
                    < stored.iter().position(|id| *id == b.id);
                assert!(
                    a.total_points > b.total_points
                        || (a.total_points == b.total_points && stored_before)
                );
            }
        }
    }

    #[test]
    fn test_rank_of_tied_students_is_distinct() {
        let store = store_with(vec![student("x", 200), student("y", 200)]);
        assert_eq!(rank_of(&store, "x"), Some(1));
        assert_eq!(rank_of(&store, "y"), Some(2));
        assert_eq!(rank_of(&store, "z"), None);
    }

    #[test]
    fn test_rank_follows_approvals() {
        let mut store = Store::from_seed(Seed::campus());
        assert_eq!(rank_of(&store, "s1"), Some(3));

        let id = store
            .submit_proof("s1", "e1", ClaimType::Won, "podium.jpg")
            .unwrap()
            .id;
        store.approve_submission(&id).unwrap();

        assert_eq!(rank_of(&store, "s1"), Some(1));
    }

    #[test]
    fn test_pending_submissions_in_insertion_order() {
        let mut store = Store::from_seed(Seed::campus());
        let first = store
            .submit_proof("s1", "e3", ClaimType::Participated, "a.png")
            .unwrap()
            .id;
        let second = store
            .submit_proof("s2", "e4", ClaimType::Won, "b.png")
            .unwrap()
            .id;
        let third = store
            .submit_proof("s3", "e1", ClaimType::Won, "c.png")
            .unwrap()
            .id;
        store.reject_submission(&second).unwrap();

        let pending: Vec<&str> = pending_submissions(&store)
            .iter()
            .map(|s| s.id.as_str())
            .collect();

        assert_eq!(pending, [first.as_str(), third.as_str()]);
    }

    #[test]
    fn test_student_history_joins_event_points() {
        let store = Store::from_seed(Seed::campus());

        let history = student_history(&store, "s1");

        let summary: Vec<(&str, ParticipationStatus, bool, u32)> = history
            .iter()
            .map(|h| (h.event_id.as_str(), h.status, h.points_collected, h.points))
            .collect();
        assert_eq!(
            summary,
            [
                ("e1", ParticipationStatus::Participated, true, 50),
                ("e2", ParticipationStatus::Won, true, 120),
                ("e3", ParticipationStatus::Participated, false, 30),
            ]
        );
        assert!(student_history(&store, "s4").is_empty());
    }

    #[test]
    fn test_student_history_shows_duplicates_and_skips_missing_events() {
        let mut store = Store::from_seed(Seed::campus());
        store.register_participation("s4", "e2");
        store.register_participation("s4", "e2");
        store.register_participation("s4", "e404");

        let history = student_history(&store, "s4");

        assert_eq!(history.len(), 2);
        assert!(history.iter().all(|h| h.event_id == "e2" && h.points == 40));
    }

    #[test]
    fn test_student_standing() {
        let mut store = Store::from_seed(Seed::campus());
        store.register_participation("s1", "e4");
        store
            .submit_proof("s1", "e4", ClaimType::Participated, "fest.jpg")
            .unwrap();

        let standing = student_standing(&store, "s1").unwrap();

        assert_eq!(standing.student.total_points, 450);
        assert_eq!(standing.rank, 3);
        assert_eq!(standing.events_joined, 4);
        assert_eq!(standing.pending_submissions, 1);
        assert!(student_standing(&store, "s99").is_none());
    }
}
