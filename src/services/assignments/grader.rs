//! 作业评分编排
//!
//! 提交流程按顺序执行：结构校验 -> 解析仓库学生 -> 汇总分数 -> 写入成绩账本
//! -> 保存评分细则。任一步失败立即返回，校验或解析失败时不发生任何写入。
//! 同一 (学生, 作业) 的并发提交不加锁，后写者覆盖。

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::errors::{ClassyError, Result};
use crate::models::assignments::{entities::AssignmentGrade, rubric::compute_score};
use crate::models::grades::entities::Grade;
use crate::services::grades::GradeLedger;
use crate::services::roster::Roster;
use crate::storage::Storage;
use crate::utils::validate::validate_identifier;

#[derive(Clone)]
pub struct AssignmentGrader {
    storage: Arc<dyn Storage>,
    ledger: GradeLedger,
    roster: Roster,
}

impl AssignmentGrader {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            ledger: GradeLedger::new(storage.clone()),
            roster: Roster::new(storage.clone()),
            storage,
        }
    }

    /// 获取学生某作业最近一次提交的评分细则，未提交时返回 `None`
    pub async fn get_assignment_grade(
        &self,
        student_id: &str,
        assignment_id: &str,
    ) -> Result<Option<AssignmentGrade>> {
        let record = self
            .storage
            .get_assignment_grade(student_id, assignment_id)
            .await?;
        debug!(
            "Assignment grade lookup {}/{}: {}",
            student_id,
            assignment_id,
            if record.is_some() { "found" } else { "absent" }
        );
        Ok(record)
    }

    /// 提交仓库某作业的评分细则
    ///
    /// 仓库所有团队成员与载荷中的 `studentID` 都会获得同一份成绩与细则，
    /// 此前记入的学生同样被覆盖，
    /// 存储键使用参数中的 `assignment_id`，细则内容按载荷原样保存。
    /// 重复提交整体替换细则与账本分数，账本记录数不变。
    pub async fn set_assignment_grade(
        &self,
        repository_id: &str,
        assignment_id: &str,
        payload: &Value,
    ) -> Result<bool> {
        // 1. 校验
        validate_identifier(repository_id)
            .map_err(|e| ClassyError::validation(format!("repository: {e}")))?;
        validate_identifier(assignment_id)
            .map_err(|e| ClassyError::validation(format!("assignment: {e}")))?;
        let record = AssignmentGrade::from_payload(payload)?;

        // 2. 解析仓库对应的学生
        let students = self
            .credited_students(repository_id, assignment_id, &record)
            .await?;

        // 3. 汇总
        let score = compute_score(&record.questions);

        // 4. 写入成绩账本
        for student_id in &students {
            self.ledger
                .set_grade(Grade::new(student_id.as_str(), assignment_id, score))
                .await?;
        }

        // 5. 保存评分细则
        for student_id in &students {
            self.storage
                .upsert_assignment_grade(student_id, assignment_id, repository_id, &record)
                .await?;
        }

        info!(
            "Assignment grade recorded: repository={} assignment={} score={} students={}",
            repository_id,
            assignment_id,
            score,
            students.join(",")
        );
        Ok(true)
    }

    /// 受影响的学生：仓库团队成员与此前已记入该 (仓库, 作业) 的学生
    ///
    /// 载荷中的 `studentID` 只在首次提交时可以是团队之外的学生，之后必须在
    /// 已记入的集合中，保证重复提交只替换、不新增账本记录。
    async fn credited_students(
        &self,
        repository_id: &str,
        assignment_id: &str,
        record: &AssignmentGrade,
    ) -> Result<Vec<String>> {
        let members = self
            .roster
            .list_repository_students(repository_id)
            .await?
            .ok_or_else(|| ClassyError::not_found(format!("仓库不存在: {repository_id}")))?;
        let previous = self
            .storage
            .list_assignment_students(repository_id, assignment_id)
            .await?;
        let submitted_before = !previous.is_empty();

        let mut students: BTreeSet<String> = members.into_iter().chain(previous).collect();
        if !students.contains(&record.student_id) {
            if submitted_before {
                return Err(ClassyError::validation(format!(
                    "studentID '{}' is not credited for {repository_id}/{assignment_id}",
                    record.student_id
                )));
            }
            students.insert(record.student_id.clone());
        }
        Ok(students.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::roster::requests::{
        CreateRepositoryRequest, CreateTeamRequest, RepositoryOptions,
    };
    use crate::storage::memory_storage::MemoryStorage;
    use serde_json::json;

    const REPO: &str = "A2_REPO_STUDENT0";
    const ASSN: &str = "A2";

    /// 仓库 A2_REPO_STUDENT0 <- team1 <- [user1]
    async fn setup() -> (AssignmentGrader, GradeLedger) {
        seed(Arc::new(MemoryStorage::new())).await
    }

    async fn seed(storage: Arc<dyn Storage>) -> (AssignmentGrader, GradeLedger) {
        let roster = Roster::new(storage.clone());
        roster
            .create_team(CreateTeamRequest {
                name: "team1".to_string(),
                members: vec!["user1".to_string()],
            })
            .await
            .unwrap();
        roster
            .create_repository(CreateRepositoryRequest {
                name: REPO.to_string(),
                teams: vec!["team1".to_string()],
                options: RepositoryOptions::default(),
            })
            .await
            .unwrap();

        (
            AssignmentGrader::new(storage.clone()),
            GradeLedger::new(storage),
        )
    }

    fn payload(student: &str, questions: &[&[f64]]) -> Value {
        let questions: Vec<Value> = questions
            .iter()
            .enumerate()
            .map(|(qi, grades)| {
                let sections: Vec<Value> = grades
                    .iter()
                    .enumerate()
                    .map(|(si, grade)| {
                        json!({
                            "sectionName": format!("section{si}"),
                            "grade": grade,
                            "feedback": if si == 0 { "Nice job" } else { "" }
                        })
                    })
                    .collect();
                json!({
                    "questionName": format!("Question {}", qi + 1),
                    "commentName": "",
                    "subQuestion": sections
                })
            })
            .collect();

        json!({
            "assignmentID": "a2",
            "studentID": student,
            "questions": questions
        })
    }

    #[tokio::test]
    async fn test_get_never_submitted_is_none() {
        let (grader, _) = setup().await;
        assert!(
            grader
                .get_assignment_grade("student1", "a1")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_create_assignment_grade() {
        let (grader, ledger) = setup().await;
        assert!(
            grader
                .get_assignment_grade("student0", "a2")
                .await
                .unwrap()
                .is_none()
        );

        let body = payload("student0", &[&[4.0, 5.0], &[2.0]]);
        assert!(grader.set_assignment_grade(REPO, ASSN, &body).await.unwrap());

        let record = grader
            .get_assignment_grade("user1", ASSN)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.assignment_id, "a2");
        assert_eq!(record.student_id, "student0");
        assert_eq!(record.questions.len(), 2);

        let grade = ledger.get_grade("user1", ASSN).await.unwrap().unwrap();
        assert_eq!(grade.score, 11.0);
    }

    #[tokio::test]
    async fn test_round_trip_for_payload_student() {
        let (grader, ledger) = setup().await;
        let body = payload("student0", &[&[4.0, 5.0], &[2.0]]);
        grader.set_assignment_grade(REPO, ASSN, &body).await.unwrap();

        let expected = AssignmentGrade::from_payload(&body).unwrap();
        let record = grader
            .get_assignment_grade("student0", ASSN)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.questions, expected.questions);
        assert_eq!(record.questions[0].sub_question[0].feedback, "Nice job");

        let grade = ledger.get_grade("student0", ASSN).await.unwrap().unwrap();
        assert_eq!(grade.score, 11.0);
    }

    #[tokio::test]
    async fn test_update_replaces_without_new_records() {
        let (grader, ledger) = setup().await;
        grader
            .set_assignment_grade(REPO, ASSN, &payload("student0", &[&[4.0, 5.0], &[2.0]]))
            .await
            .unwrap();
        let before = ledger.get_all_grades().await.unwrap();
        // user1 与 student0
        assert_eq!(before.len(), 2);

        grader
            .set_assignment_grade(REPO, ASSN, &payload("student0", &[&[3.0], &[5.0]]))
            .await
            .unwrap();
        let after = ledger.get_all_grades().await.unwrap();
        assert_eq!(before.len(), after.len());

        let grade = ledger.get_grade("user1", ASSN).await.unwrap().unwrap();
        assert_eq!(grade.score, 8.0);

        let record = grader
            .get_assignment_grade("user1", ASSN)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.questions[0].sub_question.len(), 1);
        assert_eq!(record.questions[0].sub_question[0].grade, 3.0);
    }

    #[tokio::test]
    async fn test_arbitrary_subquestion_sizes() {
        let (grader, ledger) = setup().await;
        let body = payload("student0", &[&[3.0, 1.0, 10.0, 6.0, 6.0], &[5.0]]);
        assert!(grader.set_assignment_grade(REPO, ASSN, &body).await.unwrap());

        let grade = ledger.get_grade("user1", ASSN).await.unwrap().unwrap();
        assert_eq!(grade.score, 31.0);

        let record = grader
            .get_assignment_grade("user1", ASSN)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.student_id, "student0");
        assert_eq!(record.assignment_id, "a2");
    }

    #[tokio::test]
    async fn test_empty_rubric_scores_zero() {
        let (grader, ledger) = setup().await;
        grader
            .set_assignment_grade(REPO, ASSN, &payload("user1", &[]))
            .await
            .unwrap();

        // payload 学生就是团队成员，只产生一条记录
        let grades = ledger.get_all_grades().await.unwrap();
        assert_eq!(grades, vec![Grade::new("user1", ASSN, 0.0)]);
    }

    #[tokio::test]
    async fn test_invalid_payload_writes_nothing() {
        let (grader, ledger) = setup().await;
        let mut body = payload("student0", &[&[4.0]]);
        body.as_object_mut().unwrap().remove("questions");

        let err = grader
            .set_assignment_grade(REPO, ASSN, &body)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassyError::Validation(_)));
        assert!(ledger.get_all_grades().await.unwrap().is_empty());
        assert!(
            grader
                .get_assignment_grade("user1", ASSN)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_unknown_repository_writes_nothing() {
        let (grader, ledger) = setup().await;
        let err = grader
            .set_assignment_grade("missing_repo", ASSN, &payload("student0", &[&[1.0]]))
            .await
            .unwrap_err();
        assert!(matches!(err, ClassyError::NotFound(_)));
        assert!(ledger.get_all_grades().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_resubmission_with_other_student_is_rejected() {
        let (grader, ledger) = setup().await;
        grader
            .set_assignment_grade(REPO, ASSN, &payload("student0", &[&[4.0, 5.0], &[2.0]]))
            .await
            .unwrap();
        let before = ledger.get_all_grades().await.unwrap();
        assert_eq!(
            before,
            vec![
                Grade::new("student0", ASSN, 11.0),
                Grade::new("user1", ASSN, 11.0)
            ]
        );

        let err = grader
            .set_assignment_grade(REPO, ASSN, &payload("student9", &[&[3.0], &[5.0]]))
            .await
            .unwrap_err();
        assert!(matches!(err, ClassyError::Validation(_)));
        assert_eq!(ledger.get_all_grades().await.unwrap(), before);
        assert!(
            grader
                .get_assignment_grade("student9", ASSN)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_resubmission_by_member_updates_every_credited_student() {
        let (grader, ledger) = setup().await;
        grader
            .set_assignment_grade(REPO, ASSN, &payload("student0", &[&[4.0, 5.0], &[2.0]]))
            .await
            .unwrap();
        grader
            .set_assignment_grade(REPO, ASSN, &payload("user1", &[&[3.0], &[5.0]]))
            .await
            .unwrap();

        // student0 不会保留旧分数
        assert_eq!(
            ledger.get_all_grades().await.unwrap(),
            vec![
                Grade::new("student0", ASSN, 8.0),
                Grade::new("user1", ASSN, 8.0)
            ]
        );
        let record = grader
            .get_assignment_grade("student0", ASSN)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.student_id, "user1");
    }

    #[tokio::test]
    async fn test_scenarios_on_sqlite_backend() {
        let storage = crate::storage::sea_orm_storage::tests::memory_storage().await;
        let (grader, ledger) = seed(Arc::new(storage)).await;

        // 4 + 5 + 2
        grader
            .set_assignment_grade(REPO, ASSN, &payload("student0", &[&[4.0, 5.0], &[2.0]]))
            .await
            .unwrap();
        assert_eq!(ledger.get_grade("user1", ASSN).await.unwrap().unwrap().score, 11.0);
        let count = ledger.get_all_grades().await.unwrap().len();
        assert_eq!(count, 2);

        // 3 + 5，记录数不变
        grader
            .set_assignment_grade(REPO, ASSN, &payload("student0", &[&[3.0], &[5.0]]))
            .await
            .unwrap();
        assert_eq!(ledger.get_grade("user1", ASSN).await.unwrap().unwrap().score, 8.0);
        assert_eq!(ledger.get_all_grades().await.unwrap().len(), count);

        // 3 + 1 + 10 + 6 + 6 + 5
        grader
            .set_assignment_grade(
                REPO,
                ASSN,
                &payload("student0", &[&[3.0, 1.0, 10.0, 6.0, 6.0], &[5.0]]),
            )
            .await
            .unwrap();
        assert_eq!(
            ledger.get_grade("student0", ASSN).await.unwrap().unwrap().score,
            31.0
        );
        let record = grader
            .get_assignment_grade("student0", ASSN)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record.questions[0].sub_question.len(), 5);

        let other = payload("user1", &[&[1.0]]);
        let again = payload("user1", &[&[2.0]]);
        let (a, b) = tokio::join!(
            grader.set_assignment_grade(REPO, ASSN, &other),
            grader.set_assignment_grade(REPO, ASSN, &again),
        );
        assert!(a.unwrap() && b.unwrap());
        assert_eq!(ledger.get_all_grades().await.unwrap().len(), count);
    }
}
