use storage::{Store, dto::leaderboard::LeaderboardEntry, views};

/// Ranked leaderboard over every student
pub fn get_leaderboard(store: &Store) -> Vec<LeaderboardEntry> {
    views::leaderboard(store)
}
