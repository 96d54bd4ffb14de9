//! 作业评分细则实体
//!
//! `payload` 为完整评分细则的 JSON 文本，按 (student_id, assignment_id) 唯一。

use sea_orm::entity::prelude::*;

use crate::models::assignments::entities::AssignmentGrade;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignment_grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: String,
    pub assignment_id: String,
    pub repository_id: String,
    #[sea_orm(column_type = "Text")]
    pub payload: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment_grade(self) -> crate::errors::Result<AssignmentGrade> {
        Ok(serde_json::from_str(&self.payload)?)
    }
}
