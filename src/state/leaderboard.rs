use super::AppState;
use crate::protocol::LeaderboardRow;
use crate::types::MysteryEntry;

/// Rank a snapshot by votes, descending. The sort is stable, so entries
/// with equal votes keep their snapshot order and the board does not
/// flicker between reads. Positions are 1-based and consecutive; ties do
/// not share a position.
pub fn rank(snapshot: &[MysteryEntry]) -> Vec<(usize, MysteryEntry)> {
    let mut ranked = snapshot.to_vec();
    ranked.sort_by(|a, b| b.votes.cmp(&a.votes));
    ranked
        .into_iter()
        .enumerate()
        .map(|(i, entry)| (i + 1, entry))
        .collect()
}

impl AppState {
    /// Recomputed in full from a fresh snapshot on every call
    pub async fn leaderboard(&self) -> Vec<LeaderboardRow> {
        let snapshot = self.snapshot().await;
        rank(&snapshot)
            .into_iter()
            .map(|(position, entry)| LeaderboardRow {
                position,
                id: entry.id,
                title: entry.title,
                votes: entry.votes,
            })
            .collect()
    }
}
