use serde::Serialize;
use ts_rs::TS;

use super::entities::Grade;

/// 成绩列表响应（全量快照）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeListResponse {
    pub items: Vec<Grade>,
    pub total: i64,
}

impl From<Vec<Grade>> for GradeListResponse {
    fn from(items: Vec<Grade>) -> Self {
        Self {
            total: items.len() as i64,
            items,
        }
    }
}
