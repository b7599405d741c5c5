use storage::{
    Approval, Store,
    dto::submission::SubmitProofRequest,
    error::{Result, StorageError},
    models::Submission,
    views,
};

/// Record proof for an event; fails if the student or the event is unknown
pub fn submit_proof(
    store: &mut Store,
    student_id: &str,
    request: SubmitProofRequest,
) -> Result<Submission> {
    store.submit_proof(
        student_id,
        &request.event_id,
        request.claim_type,
        request.proof_file,
    )
}

/// Submissions waiting for review, oldest first
pub fn list_pending(store: &Store) -> Vec<Submission> {
    views::pending_submissions(store)
        .into_iter()
        .cloned()
        .collect()
}

pub fn get_submission(store: &Store, id: &str) -> Result<Submission> {
    store
        .submission(id)
        .cloned()
        .ok_or_else(|| StorageError::not_found("Submission", id))
}

pub fn approve(store: &mut Store, id: &str) -> Result<Approval> {
    store.approve_submission(id)
}

pub fn reject(store: &mut Store, id: &str) -> Result<Submission> {
    store.reject_submission(id)
}
