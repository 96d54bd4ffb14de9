//! 成绩账本存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{ClassyError, Result};
use crate::models::grades::entities::Grade;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 通过 (学生, 作业) 获取成绩
    pub async fn get_grade_impl(
        &self,
        student_id: &str,
        assignment_id: &str,
    ) -> Result<Option<Grade>> {
        let result = Grades::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::AssignmentId.eq(assignment_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassyError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 写入成绩
    ///
    /// 依赖 (student_id, assignment_id) 唯一索引做原子 upsert，重复写入只更新分数。
    pub async fn upsert_grade_impl(&self, grade: &Grade) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(grade.student_id.clone()),
            assignment_id: Set(grade.assignment_id.clone()),
            score: Set(grade.score),
            updated_at: Set(now),
            ..Default::default()
        };

        Grades::insert(model)
            .on_conflict(
                OnConflict::columns([Column::StudentId, Column::AssignmentId])
                    .update_columns([Column::Score, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ClassyError::database_operation(format!("写入成绩失败: {e}")))?;

        Ok(())
    }

    /// 列出全部成绩
    pub async fn list_all_grades_impl(&self) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .order_by_asc(Column::StudentId)
            .order_by_asc(Column::AssignmentId)
            .all(&self.db)
            .await
            .map_err(|e| ClassyError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::memory_storage;
    use crate::models::grades::entities::Grade;

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let storage = memory_storage().await;

        storage
            .upsert_grade_impl(&Grade::new("user1", "A2", 11.0))
            .await
            .unwrap();
        storage
            .upsert_grade_impl(&Grade::new("user2", "A2", 7.0))
            .await
            .unwrap();
        assert_eq!(storage.list_all_grades_impl().await.unwrap().len(), 2);

        storage
            .upsert_grade_impl(&Grade::new("user1", "A2", 8.0))
            .await
            .unwrap();

        let grades = storage.list_all_grades_impl().await.unwrap();
        assert_eq!(grades.len(), 2);
        assert_eq!(grades[0], Grade::new("user1", "A2", 8.0));
        assert_eq!(grades[1], Grade::new("user2", "A2", 7.0));
    }

    #[tokio::test]
    async fn test_get_grade_by_key() {
        let storage = memory_storage().await;
        assert!(storage.get_grade_impl("user1", "A2").await.unwrap().is_none());

        storage
            .upsert_grade_impl(&Grade::new("user1", "A2", 31.0))
            .await
            .unwrap();

        let grade = storage.get_grade_impl("user1", "A2").await.unwrap();
        assert_eq!(grade.map(|g| g.score), Some(31.0));
        assert!(storage.get_grade_impl("user1", "A3").await.unwrap().is_none());
    }
}
