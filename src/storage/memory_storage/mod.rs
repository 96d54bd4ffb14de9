//! 进程内存储实现
//!
//! 基于 DashMap 的分片锁映射，单键写入原子完成，用于测试与沙箱环境。

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use crate::errors::Result;
use crate::models::{
    assignments::entities::AssignmentGrade,
    grades::entities::Grade,
    roster::{
        entities::{Repository, Team},
        requests::{CreateRepositoryRequest, CreateTeamRequest},
    },
};
use crate::storage::Storage;

type RecordKey = (String, String);

fn record_key(student_id: &str, assignment_id: &str) -> RecordKey {
    (student_id.to_string(), assignment_id.to_string())
}

struct StoredRubric {
    repository_id: String,
    record: AssignmentGrade,
}

#[derive(Default)]
pub struct MemoryStorage {
    grades: DashMap<RecordKey, Grade>,
    assignment_grades: DashMap<RecordKey, StoredRubric>,
    teams: DashMap<String, Team>,
    repositories: DashMap<String, Repository>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_grade(&self, student_id: &str, assignment_id: &str) -> Result<Option<Grade>> {
        Ok(self
            .grades
            .get(&record_key(student_id, assignment_id))
            .map(|entry| entry.value().clone()))
    }

    async fn upsert_grade(&self, grade: &Grade) -> Result<()> {
        let key = record_key(&grade.student_id, &grade.assignment_id);
        if self.grades.insert(key, grade.clone()).is_some() {
            debug!(
                "Replaced grade for {}/{}",
                grade.student_id, grade.assignment_id
            );
        }
        Ok(())
    }

    async fn list_all_grades(&self) -> Result<Vec<Grade>> {
        let mut grades: Vec<Grade> = self
            .grades
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        grades.sort_by(|a, b| a.key().cmp(&b.key()));
        Ok(grades)
    }

    async fn get_assignment_grade(
        &self,
        student_id: &str,
        assignment_id: &str,
    ) -> Result<Option<AssignmentGrade>> {
        Ok(self
            .assignment_grades
            .get(&record_key(student_id, assignment_id))
            .map(|entry| entry.value().record.clone()))
    }

    async fn upsert_assignment_grade(
        &self,
        student_id: &str,
        assignment_id: &str,
        repository_id: &str,
        record: &AssignmentGrade,
    ) -> Result<()> {
        self.assignment_grades.insert(
            record_key(student_id, assignment_id),
            StoredRubric {
                repository_id: repository_id.to_string(),
                record: record.clone(),
            },
        );
        Ok(())
    }

    async fn list_assignment_students(
        &self,
        repository_id: &str,
        assignment_id: &str,
    ) -> Result<Vec<String>> {
        let mut students: Vec<String> = self
            .assignment_grades
            .iter()
            .filter(|entry| {
                entry.key().1 == assignment_id && entry.value().repository_id == repository_id
            })
            .map(|entry| entry.key().0.clone())
            .collect();
        students.sort();
        Ok(students)
    }

    async fn upsert_team(&self, team: CreateTeamRequest) -> Result<Team> {
        let team = Team {
            name: team.name,
            members: team.members,
        };
        self.teams.insert(team.name.clone(), team.clone());
        Ok(team)
    }

    async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        Ok(self.teams.get(name).map(|entry| entry.value().clone()))
    }

    async fn upsert_repository(&self, repository: CreateRepositoryRequest) -> Result<Repository> {
        let repository = Repository {
            name: repository.name,
            teams: repository.teams,
            url: repository.options.url,
        };
        self.repositories
            .insert(repository.name.clone(), repository.clone());
        Ok(repository)
    }

    async fn get_repository_by_name(&self, name: &str) -> Result<Option<Repository>> {
        Ok(self
            .repositories
            .get(name)
            .map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upsert_grade_does_not_duplicate() {
        let storage = MemoryStorage::new();
        storage
            .upsert_grade(&Grade::new("student0", "A2", 11.0))
            .await
            .unwrap();
        storage
            .upsert_grade(&Grade::new("student0", "A2", 8.0))
            .await
            .unwrap();

        let grades = storage.list_all_grades().await.unwrap();
        assert_eq!(grades.len(), 1);
        assert_eq!(grades[0].score, 8.0);
    }

    #[tokio::test]
    async fn test_list_all_grades_is_sorted() {
        let storage = MemoryStorage::new();
        for (student, assignment) in [("b", "A1"), ("a", "A2"), ("a", "A1")] {
            storage
                .upsert_grade(&Grade::new(student, assignment, 1.0))
                .await
                .unwrap();
        }

        let keys: Vec<(String, String)> = storage
            .list_all_grades()
            .await
            .unwrap()
            .into_iter()
            .map(|g| (g.student_id, g.assignment_id))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("a".to_string(), "A1".to_string()),
                ("a".to_string(), "A2".to_string()),
                ("b".to_string(), "A1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_records_are_none() {
        let storage = MemoryStorage::new();
        assert!(storage.get_grade("student1", "a1").await.unwrap().is_none());
        assert!(
            storage
                .get_assignment_grade("student1", "a1")
                .await
                .unwrap()
                .is_none()
        );
        assert!(storage.get_team_by_name("team").await.unwrap().is_none());
        assert!(storage.get_repository_by_name("repo").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_assignment_students_by_repository() {
        let storage = MemoryStorage::new();
        let record = AssignmentGrade {
            assignment_id: "a2".to_string(),
            student_id: "student0".to_string(),
            questions: vec![],
        };
        for (student, repo) in [("user2", "repo2"), ("user1", "repo2"), ("user3", "repo3")] {
            storage
                .upsert_assignment_grade(student, "A2", repo, &record)
                .await
                .unwrap();
        }

        assert_eq!(
            storage.list_assignment_students("repo2", "A2").await.unwrap(),
            vec!["user1".to_string(), "user2".to_string()]
        );
        assert!(
            storage
                .list_assignment_students("repo3", "A1")
                .await
                .unwrap()
                .is_empty()
        );
    }
}
