//! 仓库实体

use sea_orm::entity::prelude::*;

use crate::models::roster::entities::Repository;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "repositories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    // 团队名称的 JSON 数组
    #[sea_orm(column_type = "Text")]
    pub teams: String,
    pub url: Option<String>,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_repository(self) -> crate::errors::Result<Repository> {
        Ok(Repository {
            name: self.name,
            teams: serde_json::from_str(&self.teams)?,
            url: self.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_repository() {
        let model = Model {
            id: 1,
            name: "repo2".to_string(),
            teams: r#"["team1"]"#.to_string(),
            url: None,
            updated_at: 0,
        };
        let repository = model.into_repository().unwrap();
        assert_eq!(repository.teams, vec!["team1"]);
        assert!(repository.url.is_none());
    }
}
