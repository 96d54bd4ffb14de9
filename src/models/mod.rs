pub mod assignments;
pub mod common;
pub mod github;
pub mod grades;
pub mod roster;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;
