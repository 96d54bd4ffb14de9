use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 一名学生某次作业的完整评分细则
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentGrade {
    #[serde(rename = "assignmentID")]
    pub assignment_id: String,
    #[serde(rename = "studentID")]
    pub student_id: String,
    pub questions: Vec<Question>,
}

/// 评分细则中的一道题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Question {
    pub question_name: String,
    #[serde(default)]
    pub comment_name: String,
    pub sub_question: Vec<SubQuestion>,
}

/// 题目下的评分小节
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubQuestion {
    pub section_name: String,
    // 非负
    pub grade: f64,
    #[serde(default)]
    pub feedback: String,
}
