//! Play events and date partitioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One playback occurrence.
///
/// The provider's track metadata is carried through untouched in `payload`;
/// only `played_at` is relied upon structurally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayEvent {
    pub played_at: String,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl PlayEvent {
    /// Calendar date of the play: the `played_at` substring before `T`.
    pub fn date(&self) -> &str {
        match self.played_at.split_once('T') {
            Some((date, _)) => date,
            None => &self.played_at,
        }
    }

    fn played_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.played_at)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// Sort events ascending by `played_at`. The provider returns pages in
/// descending recency order.
///
/// Stable, so events sharing a timestamp keep their input order. Falls back
/// to lexicographic order for timestamps that do not parse.
pub fn sort_chronological(events: &mut [PlayEvent]) {
    events.sort_by(|a, b| match (a.played_at_utc(), b.played_at_utc()) {
        (Some(ta), Some(tb)) => ta.cmp(&tb),
        _ => a.played_at.cmp(&b.played_at),
    });
}

/// Group events by calendar date in a single pass.
///
/// Group order is the order of first occurrence of each date; the relative
/// order of events within a group matches the input sequence.
pub fn group_by_date(events: Vec<PlayEvent>) -> Vec<(String, Vec<PlayEvent>)> {
    let mut groups: Vec<(String, Vec<PlayEvent>)> = Vec::new();

    for event in events {
        let date = event.date().to_string();
        match groups.iter_mut().find(|(key, _)| *key == date) {
            Some((_, bucket)) => bucket.push(event),
            None => groups.push((date, vec![event])),
        }
    }

    groups
}
