use std::sync::Arc;

use tracing::warn;

use crate::config::DatabaseConfig;
use crate::models::{
    assignments::entities::AssignmentGrade,
    grades::entities::Grade,
    roster::{
        entities::{Repository, Team},
        requests::{CreateRepositoryRequest, CreateTeamRequest},
    },
};

use crate::errors::Result;

pub mod memory_storage;
pub mod sea_orm_storage;

/// 数据库 URL 为该值时使用进程内存储
pub const MEMORY_STORAGE_URL: &str = "memory";

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 成绩账本方法
    // 通过 (学生, 作业) 获取成绩
    async fn get_grade(&self, student_id: &str, assignment_id: &str) -> Result<Option<Grade>>;
    // 写入成绩：同一 (学生, 作业) 已存在时原地覆盖
    async fn upsert_grade(&self, grade: &Grade) -> Result<()>;
    // 列出全部成绩，按 (学生, 作业) 排序
    async fn list_all_grades(&self) -> Result<Vec<Grade>>;

    /// 作业评分细则方法
    // 通过 (学生, 作业) 获取评分细则
    async fn get_assignment_grade(
        &self,
        student_id: &str,
        assignment_id: &str,
    ) -> Result<Option<AssignmentGrade>>;
    // 写入评分细则：同一 (学生, 作业) 已存在时整体替换
    async fn upsert_assignment_grade(
        &self,
        student_id: &str,
        assignment_id: &str,
        repository_id: &str,
        record: &AssignmentGrade,
    ) -> Result<()>;
    // 列出某仓库某作业已记入评分细则的学生，按学生排序
    async fn list_assignment_students(
        &self,
        repository_id: &str,
        assignment_id: &str,
    ) -> Result<Vec<String>>;

    /// 团队与仓库方法
    // 创建或替换团队
    async fn upsert_team(&self, team: CreateTeamRequest) -> Result<Team>;
    // 通过名称获取团队
    async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>>;
    // 创建或替换仓库
    async fn upsert_repository(&self, repository: CreateRepositoryRequest) -> Result<Repository>;
    // 通过名称获取仓库
    async fn get_repository_by_name(&self, name: &str) -> Result<Option<Repository>>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    if config.url == MEMORY_STORAGE_URL {
        warn!("Using in-process memory storage, data will be lost on shutdown");
        return Ok(Arc::new(memory_storage::MemoryStorage::new()));
    }

    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
