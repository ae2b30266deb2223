use super::*;
use crate::track::TrackKind;

fn t(id: &str) -> Track {
    Track {
        id: id.into(),
        title: id.to_uppercase(),
        artist: None,
        kind: TrackKind::Video,
        thumbnail: None,
        file_url: format!("https://media.test/{id}.mp4"),
        duration: Some(60.0),
    }
}

fn ids(history: &History) -> Vec<&str> {
    history.entries().iter().map(|e| e.track.id.as_str()).collect()
}

#[test]
fn record_keeps_most_recent_first() {
    let mut history = History::new();
    history.record_at(&t("a"), 10);
    history.record_at(&t("b"), 20);
    history.record_at(&t("c"), 30);

    assert_eq!(ids(&history), ["c", "b", "a"]);
}

#[test]
fn record_deduplicates_by_id_and_moves_to_front() {
    let mut history = History::new();
    history.record_at(&t("a"), 10);
    history.record_at(&t("b"), 20);
    history.record_at(&t("a"), 30);

    assert_eq!(ids(&history), ["a", "b"]);
    assert_eq!(history.entries()[0].played_at, 30);
    assert_eq!(history.len(), 2);
}

#[test]
fn replaying_one_track_never_grows_the_log() {
    let mut history = History::new();
    for i in 0..5 {
        history.record_at(&t("a"), i);
    }

    assert_eq!(history.len(), 1);
    assert_eq!(history.entries()[0].played_at, 4);
}

#[test]
fn cap_drops_the_oldest_entries() {
    let mut history = History::new();
    for i in 0..150 {
        history.record_at(&t(&format!("t{i}")), i);
    }

    assert_eq!(history.len(), History::DEFAULT_CAPACITY);
    assert_eq!(history.entries()[0].track.id, "t149");
    assert_eq!(history.entries().last().map(|e| e.track.id.as_str()), Some("t50"));
    assert!(!history.contains("t49"));
    assert!(history.contains("t50"));
}

#[test]
fn with_capacity_floors_at_one() {
    let mut history = History::with_capacity(0);
    history.record_at(&t("a"), 1);
    history.record_at(&t("b"), 2);

    assert_eq!(ids(&history), ["b"]);
}

#[test]
fn from_entries_preserves_order_and_reapplies_rules() {
    let stored = vec![
        HistoryEntry { played_at: 30, track: t("c") },
        HistoryEntry { played_at: 20, track: t("b") },
        HistoryEntry { played_at: 10, track: t("a") },
        // A stale duplicate further down the file loses to the fresher one.
        HistoryEntry { played_at: 5, track: t("c") },
    ];

    let history = History::from_entries(stored, 2);

    assert_eq!(ids(&history), ["c", "b"]);
    assert_eq!(history.entries()[0].played_at, 30);
}

#[test]
fn clear_empties_the_log() {
    let mut history = History::new();
    history.record_at(&t("a"), 1);
    history.clear();

    assert!(history.is_empty());
}
