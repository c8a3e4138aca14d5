//! Recently-played history fetch against the Spotify Web API.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::history::PlayEvent;

const RECENTLY_PLAYED_URL: &str = "https://api.spotify.com/v1/me/player/recently-played";

/// Page size for every history request. One page per run, no pagination
/// loop; anything beyond a page is picked up by the next scheduled run.
pub const PAGE_LIMIT: u32 = 50;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One page of play history as returned by the provider.
///
/// `items` arrive in descending recency order and may be empty; an empty
/// page is a normal outcome, not an error.
#[derive(Debug, Default, Deserialize)]
pub struct RecentlyPlayedPage {
    #[serde(default)]
    pub items: Vec<PlayEvent>,
    #[serde(default)]
    pub cursors: Option<PageCursors>,
}

/// Pagination frontier reported alongside a non-empty page.
#[derive(Debug, Deserialize)]
pub struct PageCursors {
    #[serde(default)]
    pub after: Option<String>,
}

/// Build the HTTP agent shared by all requests of one run.
pub fn build_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build();
    config.into()
}

fn request_url(limit: u32, after: Option<&str>) -> String {
    let mut url = format!("{}?limit={}", RECENTLY_PLAYED_URL, limit);
    if let Some(after) = after {
        url.push_str("&after=");
        url.push_str(&urlencoding::encode(after));
    }
    url
}

/// Fetch one page of recently played tracks, constrained to plays after
/// `after` when a cursor is given.
pub fn fetch_recently_played(
    agent: &ureq::Agent,
    access_token: &str,
    limit: u32,
    after: Option<&str>,
) -> Result<RecentlyPlayedPage> {
    let url = request_url(limit, after);

    let mut response = agent
        .get(&url)
        .header("Authorization", &format!("Bearer {}", access_token))
        .call()
        .map_err(|e| Error::HistoryFetch(e.to_string()))?;

    response
        .body_mut()
        .read_json()
        .map_err(|e| Error::HistoryFetch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_without_cursor() {
        assert_eq!(
            request_url(50, None),
            "https://api.spotify.com/v1/me/player/recently-played?limit=50"
        );
    }

    #[test]
    fn test_request_url_with_cursor() {
        assert_eq!(
            request_url(50, Some("1700000000000")),
            "https://api.spotify.com/v1/me/player/recently-played?limit=50&after=1700000000000"
        );
    }

    #[test]
    fn test_page_tolerates_missing_fields() {
        let page: RecentlyPlayedPage = serde_json::from_str("{}").unwrap();
        assert!(page.items.is_empty());
        assert!(page.cursors.is_none());
    }

    #[test]
    fn test_page_parses_items_and_cursor() {
        let page: RecentlyPlayedPage = serde_json::from_str(
            r#"{
                "items": [{"played_at": "2024-01-01T08:00:00Z", "track": {"name": "a"}}],
                "cursors": {"after": "1704096000000"}
            }"#,
        )
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(
            page.cursors.and_then(|c| c.after).as_deref(),
            Some("1704096000000")
        );
    }
}
