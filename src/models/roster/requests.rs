use serde::Deserialize;
use ts_rs::TS;

/// 创建团队请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct CreateTeamRequest {
    pub name: String,
    pub members: Vec<String>,
}

/// 仓库创建选项
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct RepositoryOptions {
    pub url: Option<String>,
}

/// 创建仓库请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct CreateRepositoryRequest {
    pub name: String,
    pub teams: Vec<String>,
    #[serde(default)]
    pub options: RepositoryOptions,
}
