//! 预导入模块，方便使用

pub use super::assignment_grades::{
    ActiveModel as AssignmentGradeActiveModel, Entity as AssignmentGrades,
    Model as AssignmentGradeModel,
};
pub use super::grades::{ActiveModel as GradeActiveModel, Entity as Grades, Model as GradeModel};
pub use super::repositories::{
    ActiveModel as RepositoryActiveModel, Entity as Repositories, Model as RepositoryModel,
};
pub use super::teams::{ActiveModel as TeamActiveModel, Entity as Teams, Model as TeamModel};
