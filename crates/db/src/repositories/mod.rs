//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod attendance_repo;
pub mod class_repo;
pub mod roster_repo;
pub mod session_repo;
pub mod student_repo;

pub use attendance_repo::AttendanceRepo;
pub use class_repo::ClassRepo;
pub use roster_repo::RosterRepo;
pub use session_repo::SessionRepo;
pub use student_repo::StudentRepo;
