use storage::{Store, models::ParticipationRecord};

/// Register a student for an event. Unknown ids and repeat registrations are accepted as-is.
pub fn register(store: &mut Store, student_id: &str, event_id: &str) -> ParticipationRecord {
    store.register_participation(student_id, event_id)
}
