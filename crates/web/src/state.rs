use storage::{Database, services::DateFormatter};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub dates: DateFormatter,
}
