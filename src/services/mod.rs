pub mod assignments;
pub mod github;
pub mod grades;
pub mod roster;

pub use assignments::{AssignmentGrader, AssignmentService};
pub use github::{GitHubService, ReqwestTransport};
pub use grades::{GradeLedger, GradeService};
pub use roster::{Roster, RosterService};
