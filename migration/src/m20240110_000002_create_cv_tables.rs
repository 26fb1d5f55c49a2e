use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Leaf tables
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Skills::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Skills::Name).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Languages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Languages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Languages::Name).string().null())
                    .col(ColumnDef::new(Languages::Level).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiences::StartDate).date().null())
                    .col(ColumnDef::new(Experiences::EndDate).date().null())
                    .col(ColumnDef::new(Experiences::Company).string().null())
                    .col(ColumnDef::new(Experiences::Position).string().null())
                    .col(ColumnDef::new(Experiences::Description).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Studies::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Studies::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Studies::Title).string().null())
                    .col(ColumnDef::new(Studies::Location).string().null())
                    .col(ColumnDef::new(Studies::Establishment).string().null())
                    .col(ColumnDef::new(Studies::StartDate).date().null())
                    .col(ColumnDef::new(Studies::EndDate).date().null())
                    .col(ColumnDef::new(Studies::Description).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FileEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FileEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FileEntries::Data).binary().not_null())
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Cv
        // =====================================================
        // Reference lists are JSONB arrays of ids; no FK so leaf deletes never cascade.
        manager
            .create_table(
                Table::create()
                    .table(Cvs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cvs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cvs::Title).string().null())
                    .col(ColumnDef::new(Cvs::Address).string().null())
                    .col(ColumnDef::new(Cvs::PhoneNumber).big_integer().null())
                    .col(ColumnDef::new(Cvs::PostalCode).integer().null())
                    .col(ColumnDef::new(Cvs::Email).string().null())
                    .col(
                        ColumnDef::new(Cvs::SkillIds)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Cvs::ExperienceIds)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Cvs::StudyIds)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Cvs::ImageId).uuid().null())
                    .col(ColumnDef::new(Cvs::CollaboratorId).uuid().null())
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_cvs_collaborator_id
                ON cvs (collaborator_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_cvs_collaborator_id")
            .await?;

        for table in [
            Cvs::Table.into_iden(),
            FileEntries::Table.into_iden(),
            Studies::Table.into_iden(),
            Experiences::Table.into_iden(),
            Languages::Table.into_iden(),
            Skills::Table.into_iden(),
        ] {
            manager
                .drop_table(Table::drop().table(table).if_exists().to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Cvs {
    Table,
    Id,
    Title,
    Address,
    PhoneNumber,
    PostalCode,
    Email,
    SkillIds,
    ExperienceIds,
    StudyIds,
    ImageId,
    CollaboratorId,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Languages {
    Table,
    Id,
    Name,
    Level,
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    StartDate,
    EndDate,
    Company,
    Position,
    Description,
}

#[derive(DeriveIden)]
enum Studies {
    Table,
    Id,
    Title,
    Location,
    Establishment,
    StartDate,
    EndDate,
    Description,
}

#[derive(DeriveIden)]
enum FileEntries {
    Table,
    Id,
    Data,
}
