use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Raw leaderboard row as supplied by the host view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub member_id: String,
    pub name: String,
    pub points: u32,
    pub check_ins: u32,
}

/// Leaderboard row with its competition rank (1, 1, 3, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: LeaderboardEntry,
}

impl RankedEntry {
    pub fn medal(&self) -> Option<&'static str> {
        match self.rank {
            1 => Some("🥇"),
            2 => Some("🥈"),
            3 => Some("🥉"),
            _ => None,
        }
    }

    pub fn is_podium(&self) -> bool {
        self.medal().is_some()
    }
}

fn score_order(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.check_ins.cmp(&a.check_ins))
}

/// Sort entries best-first and assign ranks.
///
/// Ordering is points, then check-ins (both descending), then name. Entries
/// tied on points and check-ins share a rank and the following rank is skipped.
pub fn rank_entries(entries: &[LeaderboardEntry]) -> Vec<RankedEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| score_order(a, b).then_with(|| a.name.cmp(&b.name)));

    let mut ranked: Vec<RankedEntry> = Vec::with_capacity(sorted.len());
    for (index, entry) in sorted.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(previous) if score_order(&previous.entry, &entry) == Ordering::Equal => previous.rank,
            _ => index + 1,
        };
        ranked.push(RankedEntry { rank, entry });
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, points: u32, check_ins: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            member_id: format!("member::{}", name.to_lowercase()),
            name: name.to_string(),
            points,
            check_ins,
        }
    }

    #[test]
    fn test_rank_entries_sorts_by_points() {
        let ranked = rank_entries(&[entry("Avery", 120, 10), entry("Blake", 300, 4), entry("Casey", 200, 8)]);

        let names: Vec<&str> = ranked.iter().map(|r| r.entry.name.as_str()).collect();
        assert_eq!(names, vec!["Blake", "Casey", "Avery"]);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_rank_entries_ties_share_rank_and_skip() {
        let ranked = rank_entries(&[
            entry("Drew", 150, 6),
            entry("Blake", 200, 5),
            entry("Avery", 200, 5),
            entry("Casey", 150, 9),
        ]);

        let summary: Vec<(usize, &str)> = ranked.iter().map(|r| (r.rank, r.entry.name.as_str())).collect();
        assert_eq!(summary, vec![(1, "Avery"), (1, "Blake"), (3, "Casey"), (4, "Drew")]);
    }

    #[test]
    fn test_medals_for_podium_only() {
        let ranked = rank_entries(&[
            entry("Avery", 40, 1),
            entry("Blake", 30, 1),
            entry("Casey", 20, 1),
            entry("Drew", 10, 1),
        ]);

        let medals: Vec<Option<&str>> = ranked.iter().map(|r| r.medal()).collect();
        assert_eq!(medals, vec![Some("🥇"), Some("🥈"), Some("🥉"), None]);
        assert!(!ranked[3].is_podium());
    }

    #[test]
    fn test_rank_entries_empty() {
        assert!(rank_entries(&[]).is_empty());
    }
}
