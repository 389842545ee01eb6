pub mod assignments;
pub mod common;
pub mod courses;
pub mod lecturers;
pub mod publications;
pub mod students;

pub use common::action::{Action, ActionForm, ActionJson, ActionRequest};
pub use common::response::ApiResponse;

// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
