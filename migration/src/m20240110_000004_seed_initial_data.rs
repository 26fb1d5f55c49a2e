use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const SEED_BCRYPT_COST: u32 = 10;

struct SeedAccount {
    login: &'static str,
    password: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    authorities: &'static str,
}

const ACCOUNTS: [SeedAccount; 4] = [
    SeedAccount {
        login: "user",
        password: "user",
        first_name: "User",
        last_name: "User",
        authorities: r#"["ROLE_USER"]"#,
    },
    SeedAccount {
        login: "admin@cvmaker.com",
        password: "admin",
        first_name: "Administrator",
        last_name: "Administrator",
        authorities: r#"["ROLE_ADMIN","ROLE_USER"]"#,
    },
    SeedAccount {
        login: "collaborator@gmail.com",
        password: "collaborator",
        first_name: "Collaborator",
        last_name: "Collaborator",
        authorities: r#"["ROLE_USER"]"#,
    },
    SeedAccount {
        login: "humanresource@gmail.com",
        password: "humanresources",
        first_name: "Human",
        last_name: "Resources",
        authorities: r#"["ROLE_USER"]"#,
    },
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            INSERT INTO authorities (name)
            VALUES ('ROLE_ADMIN'), ('ROLE_USER')
            ON CONFLICT DO NOTHING;
            "#,
        )
        .await?;

        for account in ACCOUNTS.iter() {
            let hash = bcrypt::hash(account.password, SEED_BCRYPT_COST)
                .map_err(|e| DbErr::Custom(format!("Failed to hash seed password: {e}")))?;

            let insert = Query::insert()
                .into_table(Users::Table)
                .columns([
                    Users::Id,
                    Users::Login,
                    Users::PasswordHash,
                    Users::FirstName,
                    Users::LastName,
                    Users::Email,
                    Users::Activated,
                    Users::LangKey,
                    Users::Authorities,
                    Users::CreatedBy,
                ])
                .values_panic([
                    Expr::cust("gen_random_uuid()"),
                    account.login.into(),
                    hash.into(),
                    account.first_name.into(),
                    account.last_name.into(),
                    account.login.contains('@').then_some(account.login).into(),
                    true.into(),
                    "en".into(),
                    Expr::cust(format!("'{}'::jsonb", account.authorities)),
                    "system".into(),
                ])
                .on_conflict(OnConflict::column(Users::Login).do_nothing().to_owned())
                .to_owned();

            manager.exec_stmt(insert).await?;
        }

        db.execute_unprepared(
            r#"
            INSERT INTO collaborators (id, user_id)
            SELECT gen_random_uuid(), id FROM users WHERE login = 'collaborator@gmail.com'
            ON CONFLICT DO NOTHING;
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO human_resources (id, user_id)
            SELECT gen_random_uuid(), id FROM users WHERE login = 'humanresource@gmail.com'
            ON CONFLICT DO NOTHING;
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            DELETE FROM human_resources
            WHERE user_id IN (SELECT id FROM users WHERE login = 'humanresource@gmail.com');
            DELETE FROM collaborators
            WHERE user_id IN (SELECT id FROM users WHERE login = 'collaborator@gmail.com');
            DELETE FROM users
            WHERE login IN ('user', 'admin@cvmaker.com', 'collaborator@gmail.com', 'humanresource@gmail.com');
            DELETE FROM authorities WHERE name IN ('ROLE_ADMIN', 'ROLE_USER');
            "#,
        )
        .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Login,
    PasswordHash,
    FirstName,
    LastName,
    Email,
    Activated,
    LangKey,
    Authorities,
    CreatedBy,
}
