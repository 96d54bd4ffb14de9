//! 成绩账本
//!
//! 每个 (学生, 作业) 至多一条成绩记录：首次写入新增，之后原地覆盖。

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::{ClassyError, Result};
use crate::models::grades::entities::Grade;
use crate::storage::Storage;
use crate::utils::validate::validate_identifier;

#[derive(Clone)]
pub struct GradeLedger {
    storage: Arc<dyn Storage>,
}

impl GradeLedger {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 获取成绩，不存在时返回 `None`
    pub async fn get_grade(&self, student_id: &str, assignment_id: &str) -> Result<Option<Grade>> {
        let grade = self.storage.get_grade(student_id, assignment_id).await?;
        debug!(
            "Grade lookup {}/{}: {}",
            student_id,
            assignment_id,
            if grade.is_some() { "found" } else { "absent" }
        );
        Ok(grade)
    }

    /// 写入成绩（upsert），成功返回 `true`
    pub async fn set_grade(&self, grade: Grade) -> Result<bool> {
        validate_identifier(&grade.student_id)
            .map_err(|e| ClassyError::validation(format!("studentID: {e}")))?;
        validate_identifier(&grade.assignment_id)
            .map_err(|e| ClassyError::validation(format!("assignmentID: {e}")))?;
        if !grade.score.is_finite() || grade.score < 0.0 {
            return Err(ClassyError::validation(format!(
                "score 必须是非负数，实际为 {}",
                grade.score
            )));
        }

        self.storage.upsert_grade(&grade).await?;
        info!(
            "Grade recorded: student={} assignment={} score={}",
            grade.student_id, grade.assignment_id, grade.score
        );
        Ok(true)
    }

    /// 全量成绩快照
    pub async fn get_all_grades(&self) -> Result<Vec<Grade>> {
        self.storage.list_all_grades().await
    }
}
