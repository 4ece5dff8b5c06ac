//! Pure projections over an already-fetched entry snapshot. Nothing here
//! touches the database or fails.

pub mod date_format;
pub mod feed;
pub mod leaderboard;
pub mod scoring;

pub use date_format::DateFormatter;
pub use feed::{project_feed, render_entry};
pub use leaderboard::aggregate_leaderboard;
pub use scoring::{entry_score, score};
