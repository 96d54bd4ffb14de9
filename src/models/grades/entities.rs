use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 成绩账本记录
///
/// 每个 (student_id, assignment_id) 至多一条，重复提交时原地覆盖。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct Grade {
    #[serde(rename = "studentID")]
    pub student_id: String,
    #[serde(rename = "assignmentID")]
    pub assignment_id: String,
    pub score: f64,
}

impl Grade {
    pub fn new(
        student_id: impl Into<String>,
        assignment_id: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            assignment_id: assignment_id.into(),
            score,
        }
    }

    /// 账本主键
    pub fn key(&self) -> (&str, &str) {
        (&self.student_id, &self.assignment_id)
    }
}
