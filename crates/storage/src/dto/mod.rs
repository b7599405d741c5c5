pub mod common;
pub mod event;
pub mod leaderboard;
pub mod participation;
pub mod student;
pub mod submission;
