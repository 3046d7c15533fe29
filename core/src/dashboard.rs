use crate::journal::JournalStore;
use crate::notes::NotesStore;
use crate::stats::StatsRegistry;
use chrono::{DateTime, Datelike, NaiveDate, Utc};

const RECENT_LIMIT: usize = 5;

const DAILY_TIPS: [&str; 7] = [
    "Keep building, keep learning, keep experimenting.",
    "A short note now beats a perfect note never.",
    "Five minutes of journaling clears an hour of worry.",
    "Puzzles before coffee sharpen the whole morning.",
    "Review yesterday's notes before starting today's.",
    "Small consistent sessions beat rare marathons.",
    "Write down the thing you keep re-deriving.",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ActivityItem {
    pub title: String,
    pub date: NaiveDate,
}

/// Everything the dashboard page shows. Pure aggregation over the stores;
/// holds no storage of its own.
#[derive(Clone, Debug)]
pub struct DashboardSummary {
    pub note_count: usize,
    pub journal_count: usize,
    pub games_played: u32,
    pub recent_activity: Vec<ActivityItem>,
    pub daily_tip: &'static str,
}

impl DashboardSummary {
    pub fn build(
        notes: &NotesStore,
        journal: &JournalStore,
        stats: &StatsRegistry,
        today: DateTime<Utc>,
    ) -> Self {
        Self {
            note_count: notes.count(),
            journal_count: journal.count(),
            games_played: stats.total_games_played(),
            recent_activity: recent_activity(notes, journal),
            daily_tip: daily_tip(today),
        }
    }
}

/// Notes and journal entries merged, newest first, capped at five.
fn recent_activity(notes: &NotesStore, journal: &JournalStore) -> Vec<ActivityItem> {
    let mut items: Vec<ActivityItem> = notes
        .notes()
        .iter()
        .map(|note| ActivityItem {
            title: note.title.clone(),
            date: note.created_at.date_naive(),
        })
        .chain(journal.entries().iter().map(|entry| ActivityItem {
            title: entry.title.clone(),
            date: entry.date,
        }))
        .collect();

    items.sort_by(|a, b| b.date.cmp(&a.date));
    items.truncate(RECENT_LIMIT);
    items
}

/// Rotates through the tip list by day of year, so the tip changes daily but
/// stays stable within a day.
fn daily_tip(today: DateTime<Utc>) -> &'static str {
    let index = today.ordinal() as usize % DAILY_TIPS.len();
    DAILY_TIPS[index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::GameId;
    use crate::storage::MemoryKeyValueStore;
    use chrono::TimeZone;

    fn stores() -> (NotesStore, JournalStore, StatsRegistry) {
        (
            NotesStore::load(Box::new(MemoryKeyValueStore::new())),
            JournalStore::load(Box::new(MemoryKeyValueStore::new())),
            StatsRegistry::new(Box::new(MemoryKeyValueStore::new())),
        )
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_counts_reflect_stores() {
        let (mut notes, mut journal, stats) = stores();
        notes.add("n1", "", Utc::now());
        journal
            .add("j1", "entry", NaiveDate::from_ymd_opt(2026, 8, 24).unwrap())
            .unwrap();
        stats.record_completion(GameId::SlidingPuzzle);
        stats.record_completion(GameId::SpeedMath);

        let summary = DashboardSummary::build(&notes, &journal, &stats, Utc::now());
        assert_eq!(summary.note_count, 1);
        assert_eq!(summary.journal_count, 1);
        assert_eq!(summary.games_played, 2);
    }

    #[test]
    fn test_recent_activity_is_merged_newest_first_and_capped() {
        let (mut notes, mut journal, stats) = stores();
        notes.add("old note", "", at(2026, 8, 1));
        notes.add("new note", "", at(2026, 8, 23));
        for day in 10..=14 {
            journal
                .add(
                    &format!("day {}", day),
                    "entry",
                    NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
                )
                .unwrap();
        }

        let summary = DashboardSummary::build(&notes, &journal, &stats, Utc::now());
        assert_eq!(summary.recent_activity.len(), RECENT_LIMIT);
        assert_eq!(summary.recent_activity[0].title, "new note");
        assert!(summary
            .recent_activity
            .iter()
            .all(|item| item.title != "old note"));
        for window in summary.recent_activity.windows(2) {
            assert!(window[0].date >= window[1].date);
        }
    }

    #[test]
    fn test_daily_tip_is_stable_within_a_day() {
        assert_eq!(daily_tip(at(2026, 8, 24)), daily_tip(at(2026, 8, 24)));
    }

    #[test]
    fn test_daily_tip_rotates_across_days() {
        // Seven consecutive days cover the whole tip list exactly once.
        let tips: std::collections::HashSet<&str> =
            (1..=7).map(|d| daily_tip(at(2026, 8, d))).collect();
        assert_eq!(tips.len(), DAILY_TIPS.len());
    }
}
