//! 团队实体

use sea_orm::entity::prelude::*;

use crate::models::roster::entities::Team;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    // 成员学生ID的 JSON 数组
    #[sea_orm(column_type = "Text")]
    pub members: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_team(self) -> crate::errors::Result<Team> {
        Ok(Team {
            name: self.name,
            members: serde_json::from_str(&self.members)?,
        })
    }
}
