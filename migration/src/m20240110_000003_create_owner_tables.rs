use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collaborators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Collaborators::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Collaborators::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Collaborators::CvId).uuid().null())
                    // FK → users
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collaborators_user_id")
                            .from(Collaborators::Table, Collaborators::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A Cv is claimed by at most one collaborator
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_collaborators_cv_id
                ON collaborators (cv_id)
                WHERE cv_id IS NOT NULL;
                "#,
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(HumanResources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HumanResources::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HumanResources::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_human_resources_user_id")
                            .from(HumanResources::Table, HumanResources::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HumanResources::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_collaborators_cv_id")
            .await?;

        manager
            .drop_table(Table::drop().table(Collaborators::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Collaborators {
    Table,
    Id,
    UserId,
    CvId,
}

#[derive(DeriveIden)]
enum HumanResources {
    Table,
    Id,
    UserId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
