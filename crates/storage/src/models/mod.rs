mod avatar;
mod criterion;
mod entry;
mod user;

pub use avatar::{Avatar, initials};
pub use criterion::Criterion;
pub use entry::{CriteriaFlags, DailyEntry, EntryUser};
pub use user::User;
