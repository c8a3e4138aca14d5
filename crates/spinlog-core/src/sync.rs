//! One full fetch-and-partition run.

use tracing::info;

use crate::api::{self, RecentlyPlayedPage};
use crate::auth;
use crate::config::Credentials;
use crate::cursor::CursorStore;
use crate::error::Result;
use crate::history;
use crate::storage::PartitionStore;

/// Summary of a completed run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Events returned by the provider.
    pub fetched: usize,
    /// Events appended across all partitions.
    pub appended: usize,
    /// Dates written, in write order.
    pub dates: Vec<String>,
    /// Whether the provider reported a new cursor frontier.
    pub cursor_advanced: bool,
}

/// Run one sync: exchange credentials, fetch a page of plays after the
/// stored cursor, partition it by date, and advance the cursor.
pub fn run(
    credentials: &Credentials,
    cursor_store: &CursorStore,
    partitions: &PartitionStore,
) -> Result<SyncReport> {
    let agent = api::build_agent();
    let access_token = auth::exchange_refresh_token(&agent, credentials)?;

    let cursor = cursor_store.load()?;
    let page =
        api::fetch_recently_played(&agent, &access_token, api::PAGE_LIMIT, cursor.as_deref())?;

    apply_page(page, cursor, cursor_store, partitions)
}

/// Partition a fetched page and advance the cursor.
///
/// An empty page ends the run without touching either store: the provider
/// reported no new frontier, so the old cursor stays authoritative. After a
/// non-empty page the cursor is written unconditionally, and always after
/// the partition writes.
pub fn apply_page(
    page: RecentlyPlayedPage,
    previous_cursor: Option<String>,
    cursor_store: &CursorStore,
    partitions: &PartitionStore,
) -> Result<SyncReport> {
    let RecentlyPlayedPage { mut items, cursors } = page;

    if items.is_empty() {
        info!("No new tracks found");
        return Ok(SyncReport::default());
    }

    let new_after = cursors.and_then(|c| c.after);
    info!(
        "Previous cursor: {}, new cursor: {}",
        previous_cursor.as_deref().unwrap_or("<none>"),
        new_after.as_deref().unwrap_or("<none>"),
    );

    let fetched = items.len();
    history::sort_chronological(&mut items);

    let mut report = SyncReport {
        fetched,
        ..Default::default()
    };
    for (date, events) in history::group_by_date(items) {
        report.appended += partitions.append(&date, events)?;
        report.dates.push(date);
    }

    report.cursor_advanced = new_after.is_some();
    let next = new_after.or(previous_cursor);
    cursor_store.save(next.as_deref())?;

    Ok(report)
}
