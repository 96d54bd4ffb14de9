use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct Team {
    // 团队名称
    pub name: String,
    // 成员学生ID
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/roster.ts")]
pub struct Repository {
    // 仓库名称
    pub name: String,
    // 关联团队名称
    pub teams: Vec<String>,
    // 仓库地址
    pub url: Option<String>,
}
