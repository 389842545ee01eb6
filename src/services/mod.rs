pub mod auth;
pub mod courses;
pub mod lecturers;

pub use auth::AuthService;
pub use courses::CourseService;
pub use lecturers::LecturerService;
