//! # spinlog-core
//!
//! Core library for the Spinlog play-history archiver.
//!
//! This crate provides:
//! - Credential configuration and refresh-token exchange
//! - One-page history fetch against the Spotify Web API
//! - Date partitioning of play events
//! - Durable cursor and per-date partition stores
//! - The orchestrated sync run tying them together
//!
//! Everything is blocking and single-threaded: each invocation is one full,
//! isolated run, and the only state that survives between runs is what the
//! stores persist to disk.

pub mod api;
pub mod auth;
pub mod config;
pub mod cursor;
pub mod error;
pub mod history;
pub mod storage;
pub mod sync;

pub use api::{PAGE_LIMIT, PageCursors, RecentlyPlayedPage, build_agent, fetch_recently_played};
pub use auth::exchange_refresh_token;
pub use config::Credentials;
pub use cursor::CursorStore;
pub use error::{Error, Result};
pub use history::{PlayEvent, group_by_date, sort_chronological};
pub use storage::{Partition, PartitionStore};
pub use sync::SyncReport;
