//! 评分细则汇总

use super::entities::{AssignmentGrade, Question};

/// 计算评分细则总分：所有题目下所有小节 `grade` 之和
///
/// 不加权、不取整；空题目列表或空小节列表计 0 分。
pub fn compute_score(questions: &[Question]) -> f64 {
    questions
        .iter()
        .flat_map(|question| question.sub_question.iter())
        .map(|section| section.grade)
        .sum()
}

impl AssignmentGrade {
    pub fn total_score(&self) -> f64 {
        compute_score(&self.questions)
    }
}
