use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建成绩账本表
        manager
            .create_table(
                Table::create()
                    .table(Grades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Grades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Grades::StudentId).string().not_null())
                    .col(ColumnDef::new(Grades::AssignmentId).string().not_null())
                    .col(ColumnDef::new(Grades::Score).double().not_null())
                    .col(ColumnDef::new(Grades::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建作业评分细则表
        manager
            .create_table(
                Table::create()
                    .table(AssignmentGrades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignmentGrades::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignmentGrades::StudentId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentGrades::AssignmentId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssignmentGrades::RepositoryId)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssignmentGrades::Payload).text().not_null())
                    .col(
                        ColumnDef::new(AssignmentGrades::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建团队表
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Teams::Name).string().not_null().unique_key())
                    .col(ColumnDef::new(Teams::Members).text().not_null())
                    .col(ColumnDef::new(Teams::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建仓库表
        manager
            .create_table(
                Table::create()
                    .table(Repositories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Repositories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Repositories::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Repositories::Teams).text().not_null())
                    .col(ColumnDef::new(Repositories::Url).string().null())
                    .col(
                        ColumnDef::new(Repositories::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 成绩账本：每个 (学生, 作业) 只允许一条记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_grades_student_assignment")
                    .table(Grades::Table)
                    .col(Grades::StudentId)
                    .col(Grades::AssignmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignment_grades_student_assignment")
                    .table(AssignmentGrades::Table)
                    .col(AssignmentGrades::StudentId)
                    .col(AssignmentGrades::AssignmentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignment_grades_repository_id")
                    .table(AssignmentGrades::Table)
                    .col(AssignmentGrades::RepositoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Repositories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignmentGrades::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Grades::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Grades {
    #[sea_orm(iden = "grades")]
    Table,
    Id,
    StudentId,
    AssignmentId,
    Score,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AssignmentGrades {
    #[sea_orm(iden = "assignment_grades")]
    Table,
    Id,
    StudentId,
    AssignmentId,
    RepositoryId,
    Payload,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Teams {
    #[sea_orm(iden = "teams")]
    Table,
    Id,
    Name,
    Members,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Repositories {
    #[sea_orm(iden = "repositories")]
    Table,
    Id,
    Name,
    Teams,
    Url,
    UpdatedAt,
}
