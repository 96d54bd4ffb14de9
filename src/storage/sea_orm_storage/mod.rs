//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite 与 PostgreSQL。

mod assignment_grades;
mod grades;
mod roster;

use crate::config::DatabaseConfig;
use crate::errors::{ClassyError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassyError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassyError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassyError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// PostgreSQL 连接
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassyError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(url.to_string())
        } else {
            Err(ClassyError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::entities::AssignmentGrade,
    grades::entities::Grade,
    roster::{
        entities::{Repository, Team},
        requests::{CreateRepositoryRequest, CreateTeamRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 成绩账本模块
    async fn get_grade(&self, student_id: &str, assignment_id: &str) -> Result<Option<Grade>> {
        self.get_grade_impl(student_id, assignment_id).await
    }

    async fn upsert_grade(&self, grade: &Grade) -> Result<()> {
        self.upsert_grade_impl(grade).await
    }

    async fn list_all_grades(&self) -> Result<Vec<Grade>> {
        self.list_all_grades_impl().await
    }

    // 评分细则模块
    async fn get_assignment_grade(
        &self,
        student_id: &str,
        assignment_id: &str,
    ) -> Result<Option<AssignmentGrade>> {
        self.get_assignment_grade_impl(student_id, assignment_id)
            .await
    }

    async fn upsert_assignment_grade(
        &self,
        student_id: &str,
        assignment_id: &str,
        repository_id: &str,
        record: &AssignmentGrade,
    ) -> Result<()> {
        self.upsert_assignment_grade_impl(student_id, assignment_id, repository_id, record)
            .await
    }

    async fn list_assignment_students(
        &self,
        repository_id: &str,
        assignment_id: &str,
    ) -> Result<Vec<String>> {
        self.list_assignment_students_impl(repository_id, assignment_id)
            .await
    }

    // 团队与仓库模块
    async fn upsert_team(&self, team: CreateTeamRequest) -> Result<Team> {
        self.upsert_team_impl(team).await
    }

    async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        self.get_team_by_name_impl(name).await
    }

    async fn upsert_repository(&self, repository: CreateRepositoryRequest) -> Result<Repository> {
        self.upsert_repository_impl(repository).await
    }

    async fn get_repository_by_name(&self, name: &str) -> Result<Option<Repository>> {
        self.get_repository_by_name_impl(name).await
    }
}
