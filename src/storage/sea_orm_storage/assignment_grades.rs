//! 作业评分细则存储操作

use super::SeaOrmStorage;
use crate::entity::assignment_grades::{ActiveModel, Column, Entity as AssignmentGrades};
use crate::errors::{ClassyError, Result};
use crate::models::assignments::entities::AssignmentGrade;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 通过 (学生, 作业) 获取评分细则
    pub async fn get_assignment_grade_impl(
        &self,
        student_id: &str,
        assignment_id: &str,
    ) -> Result<Option<AssignmentGrade>> {
        let result = AssignmentGrades::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::AssignmentId.eq(assignment_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassyError::database_operation(format!("查询评分细则失败: {e}")))?;

        result.map(|m| m.into_assignment_grade()).transpose()
    }

    /// 写入评分细则，已存在时整体替换
    pub async fn upsert_assignment_grade_impl(
        &self,
        student_id: &str,
        assignment_id: &str,
        repository_id: &str,
        record: &AssignmentGrade,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let payload = serde_json::to_string(record)?;

        let model = ActiveModel {
            student_id: Set(student_id.to_string()),
            assignment_id: Set(assignment_id.to_string()),
            repository_id: Set(repository_id.to_string()),
            payload: Set(payload),
            updated_at: Set(now),
            ..Default::default()
        };

        AssignmentGrades::insert(model)
            .on_conflict(
                OnConflict::columns([Column::StudentId, Column::AssignmentId])
                    .update_columns([Column::RepositoryId, Column::Payload, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ClassyError::database_operation(format!("写入评分细则失败: {e}")))?;

        Ok(())
    }

    /// 列出某仓库某作业已记入的学生
    pub async fn list_assignment_students_impl(
        &self,
        repository_id: &str,
        assignment_id: &str,
    ) -> Result<Vec<String>> {
        let rows = AssignmentGrades::find()
            .filter(Column::RepositoryId.eq(repository_id))
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| ClassyError::database_operation(format!("查询评分学生失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.student_id).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::memory_storage;
    use crate::models::assignments::entities::{AssignmentGrade, Question, SubQuestion};

    fn record(grades: &[f64]) -> AssignmentGrade {
        AssignmentGrade {
            assignment_id: "a2".to_string(),
            student_id: "student0".to_string(),
            questions: vec![Question {
                question_name: "Question 1".to_string(),
                comment_name: String::new(),
                sub_question: grades
                    .iter()
                    .map(|grade| SubQuestion {
                        section_name: "code".to_string(),
                        grade: *grade,
                        feedback: "Nice job".to_string(),
                    })
                    .collect(),
            }],
        }
    }

    #[tokio::test]
    async fn test_round_trip_and_replace() {
        let storage = memory_storage().await;
        assert!(
            storage
                .get_assignment_grade_impl("user1", "A2")
                .await
                .unwrap()
                .is_none()
        );

        let first = record(&[4.0, 5.0]);
        storage
            .upsert_assignment_grade_impl("user1", "A2", "repo2", &first)
            .await
            .unwrap();
        assert_eq!(
            storage
                .get_assignment_grade_impl("user1", "A2")
                .await
                .unwrap(),
            Some(first)
        );

        let second = record(&[3.0]);
        storage
            .upsert_assignment_grade_impl("user1", "A2", "repo2", &second)
            .await
            .unwrap();
        assert_eq!(
            storage
                .get_assignment_grade_impl("user1", "A2")
                .await
                .unwrap(),
            Some(second)
        );
    }

    #[tokio::test]
    async fn test_list_assignment_students_by_repository() {
        let storage = memory_storage().await;
        let rubric = record(&[1.0]);
        for (student, repo) in [("user2", "repo2"), ("user1", "repo2"), ("user3", "repo3")] {
            storage
                .upsert_assignment_grade_impl(student, "A2", repo, &rubric)
                .await
                .unwrap();
        }

        assert_eq!(
            storage
                .list_assignment_students_impl("repo2", "A2")
                .await
                .unwrap(),
            vec!["user1".to_string(), "user2".to_string()]
        );
        assert!(
            storage
                .list_assignment_students_impl("repo2", "A1")
                .await
                .unwrap()
                .is_empty()
        );
    }
}
