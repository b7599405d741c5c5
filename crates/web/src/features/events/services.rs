use storage::{
    Store,
    dto::event::CreateEventRequest,
    error::{Result, StorageError},
    models::Event,
};

/// List all announced events in creation order
pub fn list_events(store: &Store) -> Vec<Event> {
    store.events().to_vec()
}

pub fn get_event(store: &Store, id: &str) -> Result<Event> {
    store
        .event(id)
        .cloned()
        .ok_or_else(|| StorageError::not_found("Event", id))
}

/// Announce a new event
pub fn create_event(store: &mut Store, request: CreateEventRequest) -> Event {
    store.create_announcement(request.into())
}
