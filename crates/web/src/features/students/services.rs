use storage::{
    Store,
    dto::student::{HistoryEntry, StudentStanding},
    error::{Result, StorageError},
    models::Student,
    views,
};

/// List all students in stored order
pub fn list_students(store: &Store) -> Vec<Student> {
    store.students().to_vec()
}

/// Points, rank and activity counts for one student
pub fn get_standing(store: &Store, student_id: &str) -> Result<StudentStanding> {
    views::student_standing(store, student_id)
        .ok_or_else(|| StorageError::not_found("Student", student_id))
}

pub fn get_history(store: &Store, student_id: &str) -> Result<Vec<HistoryEntry>> {
    if store.student(student_id).is_none() {
        return Err(StorageError::not_found("Student", student_id));
    }

    Ok(views::student_history(store, student_id))
}
