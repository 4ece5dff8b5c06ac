pub mod criterion;
pub mod entry;
pub mod feed;
pub mod leaderboard;
pub mod user;
