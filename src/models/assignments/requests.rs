//! 评分细则提交载荷的结构校验

use serde_json::Value;

use super::entities::AssignmentGrade;
use crate::errors::{ClassyError, Result};
use crate::utils::validate::validate_identifier;

impl AssignmentGrade {
    /// 将未经类型化的提交载荷校验为 `AssignmentGrade`
    ///
    /// 必需字段：`assignmentID`、`studentID`、`questions`，每道题的 `questionName`、
    /// `subQuestion`，每个小节的 `sectionName`、`grade`。`commentName` 与 `feedback`
    /// 缺省为空串。`grade` 缺失、非数字、负数或非有限值都会被拒绝，不会按 0 处理。
    pub fn from_payload(payload: &Value) -> Result<Self> {
        if !payload.is_object() {
            return Err(ClassyError::validation("评分载荷必须是 JSON 对象"));
        }

        let grade: AssignmentGrade = serde_json::from_value(payload.clone())
            .map_err(|e| ClassyError::validation(format!("评分载荷结构错误: {e}")))?;

        grade.validate()?;
        Ok(grade)
    }

    /// 校验已类型化的评分细则
    ///
    /// `studentID` 会成为账本键，按标识符规则校验；`assignmentID` 只原样保存，
    /// 仅要求非空。
    pub fn validate(&self) -> Result<()> {
        validate_identifier(&self.student_id)
            .map_err(|e| ClassyError::validation(format!("studentID: {e}")))?;
        if self.assignment_id.trim().is_empty() {
            return Err(ClassyError::validation("assignmentID must not be empty"));
        }

        for (qi, question) in self.questions.iter().enumerate() {
            for (si, section) in question.sub_question.iter().enumerate() {
                if !section.grade.is_finite() || section.grade < 0.0 {
                    return Err(ClassyError::validation(format!(
                        "questions[{qi}].subQuestion[{si}].grade 必须是非负数，实际为 {}",
                        section.grade
                    )));
                }
            }
        }

        Ok(())
    }
}
