pub mod events;
pub mod leaderboard;
pub mod participations;
pub mod students;
pub mod submissions;
