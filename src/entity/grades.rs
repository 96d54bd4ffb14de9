//! 成绩账本实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: String,
    pub assignment_id: String,
    pub score: f64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_grade(self) -> crate::models::grades::entities::Grade {
        crate::models::grades::entities::Grade {
            student_id: self.student_id,
            assignment_id: self.assignment_id,
            score: self.score,
        }
    }
}
