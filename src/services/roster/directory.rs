//! 团队与仓库名册
//!
//! 仓库通过其团队映射到一名或多名学生，评分写入时据此确定受影响的学生。

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::{ClassyError, Result};
use crate::models::roster::{
    entities::{Repository, Team},
    requests::{CreateRepositoryRequest, CreateTeamRequest},
};
use crate::storage::Storage;
use crate::utils::validate::{validate_comment_url, validate_identifier};

#[derive(Clone)]
pub struct Roster {
    storage: Arc<dyn Storage>,
}

impl Roster {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 创建团队，同名团队的成员列表被替换；成员按首次出现顺序去重
    pub async fn create_team(&self, mut req: CreateTeamRequest) -> Result<Team> {
        validate_identifier(&req.name)
            .map_err(|e| ClassyError::validation(format!("team name: {e}")))?;
        for member in &req.members {
            validate_identifier(member)
                .map_err(|e| ClassyError::validation(format!("member '{member}': {e}")))?;
        }

        let mut seen = BTreeSet::new();
        req.members.retain(|member| seen.insert(member.clone()));

        let team = self.storage.upsert_team(req).await?;
        info!("Team saved: {} ({} members)", team.name, team.members.len());
        Ok(team)
    }

    pub async fn get_team(&self, name: &str) -> Result<Option<Team>> {
        self.storage.get_team_by_name(name).await
    }

    /// 创建仓库，所引用的团队必须已存在
    pub async fn create_repository(&self, req: CreateRepositoryRequest) -> Result<Repository> {
        validate_identifier(&req.name)
            .map_err(|e| ClassyError::validation(format!("repository name: {e}")))?;
        if let Some(url) = &req.options.url {
            validate_comment_url(url)
                .map_err(|e| ClassyError::validation(format!("repository url: {e}")))?;
        }
        for team in &req.teams {
            if self.storage.get_team_by_name(team).await?.is_none() {
                return Err(ClassyError::validation(format!("团队不存在: {team}")));
            }
        }

        let repository = self.storage.upsert_repository(req).await?;
        info!(
            "Repository saved: {} (teams: {})",
            repository.name,
            repository.teams.join(", ")
        );
        Ok(repository)
    }

    pub async fn get_repository(&self, name: &str) -> Result<Option<Repository>> {
        self.storage.get_repository_by_name(name).await
    }

    /// 解析仓库对应的学生（所有团队成员的并集，排序去重），仓库不存在时返回 `None`
    pub async fn list_repository_students(&self, name: &str) -> Result<Option<Vec<String>>> {
        let Some(repository) = self.storage.get_repository_by_name(name).await? else {
            return Ok(None);
        };

        let mut students = BTreeSet::new();
        for team_name in &repository.teams {
            match self.storage.get_team_by_name(team_name).await? {
                Some(team) => students.extend(team.members),
                None => warn!(
                    "Repository {} references missing team {}",
                    repository.name, team_name
                ),
            }
        }

        Ok(Some(students.into_iter().collect()))
    }
}
