//! 团队与仓库存储操作

use super::SeaOrmStorage;
use crate::entity::repositories::{
    ActiveModel as RepositoryActiveModel, Column as RepositoryColumn, Entity as Repositories,
};
use crate::entity::teams::{ActiveModel as TeamActiveModel, Column as TeamColumn, Entity as Teams};
use crate::errors::{ClassyError, Result};
use crate::models::roster::{
    entities::{Repository, Team},
    requests::{CreateRepositoryRequest, CreateTeamRequest},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 创建或替换团队
    pub async fn upsert_team_impl(&self, req: CreateTeamRequest) -> Result<Team> {
        let now = chrono::Utc::now().timestamp();

        let model = TeamActiveModel {
            name: Set(req.name.clone()),
            members: Set(serde_json::to_string(&req.members)?),
            updated_at: Set(now),
            ..Default::default()
        };

        Teams::insert(model)
            .on_conflict(
                OnConflict::column(TeamColumn::Name)
                    .update_columns([TeamColumn::Members, TeamColumn::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ClassyError::database_operation(format!("写入团队失败: {e}")))?;

        Ok(Team {
            name: req.name,
            members: req.members,
        })
    }

    /// 通过名称获取团队
    pub async fn get_team_by_name_impl(&self, name: &str) -> Result<Option<Team>> {
        let result = Teams::find()
            .filter(TeamColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| ClassyError::database_operation(format!("查询团队失败: {e}")))?;

        result.map(|m| m.into_team()).transpose()
    }

    /// 创建或替换仓库
    pub async fn upsert_repository_impl(
        &self,
        req: CreateRepositoryRequest,
    ) -> Result<Repository> {
        let now = chrono::Utc::now().timestamp();

        let model = RepositoryActiveModel {
            name: Set(req.name.clone()),
            teams: Set(serde_json::to_string(&req.teams)?),
            url: Set(req.options.url.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        Repositories::insert(model)
            .on_conflict(
                OnConflict::column(RepositoryColumn::Name)
                    .update_columns([
                        RepositoryColumn::Teams,
                        RepositoryColumn::Url,
                        RepositoryColumn::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ClassyError::database_operation(format!("写入仓库失败: {e}")))?;

        Ok(Repository {
            name: req.name,
            teams: req.teams,
            url: req.options.url,
        })
    }

    /// 通过名称获取仓库
    pub async fn get_repository_by_name_impl(&self, name: &str) -> Result<Option<Repository>> {
        let result = Repositories::find()
            .filter(RepositoryColumn::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| ClassyError::database_operation(format!("查询仓库失败: {e}")))?;

        result.map(|m| m.into_repository()).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::memory_storage;
    use crate::models::roster::requests::{
        CreateRepositoryRequest, CreateTeamRequest, RepositoryOptions,
    };

    #[tokio::test]
    async fn test_team_and_repository_round_trip() {
        let storage = memory_storage().await;

        storage
            .upsert_team_impl(CreateTeamRequest {
                name: "team1".to_string(),
                members: vec!["user1".to_string(), "user2".to_string()],
            })
            .await
            .unwrap();
        let team = storage.get_team_by_name_impl("team1").await.unwrap().unwrap();
        assert_eq!(team.members, vec!["user1", "user2"]);

        storage
            .upsert_repository_impl(CreateRepositoryRequest {
                name: "repo2".to_string(),
                teams: vec!["team1".to_string()],
                options: RepositoryOptions::default(),
            })
            .await
            .unwrap();
        storage
            .upsert_repository_impl(CreateRepositoryRequest {
                name: "repo2".to_string(),
                teams: vec!["team1".to_string()],
                options: RepositoryOptions {
                    url: Some("https://github.com/org/repo2".to_string()),
                },
            })
            .await
            .unwrap();

        let repo = storage
            .get_repository_by_name_impl("repo2")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(repo.teams, vec!["team1"]);
        assert_eq!(repo.url.as_deref(), Some("https://github.com/org/repo2"));
        assert!(
            storage
                .get_repository_by_name_impl("missing")
                .await
                .unwrap()
                .is_none()
        );
    }
}
