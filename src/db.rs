use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbErr, Statement, TransactionTrait,
};

/// One step of the schema history.
///
/// Steps form a linear chain: each step's only predecessor is the entry
/// before it in [`MIGRATIONS`], so replaying the table from an empty store
/// is deterministic. Entries are append-only; a released step is never
/// edited.
struct Migration {
    version: u32,
    name: &'static str,
    statements: &'static [&'static str],
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_genre_and_book",
        statements: &[
            r#"
            CREATE TABLE IF NOT EXISTS genre (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS book (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                summary TEXT NOT NULL,
                isbn TEXT NOT NULL,
                genre_id INTEGER REFERENCES genre(id) ON DELETE SET NULL
            )
            "#,
        ],
    },
    Migration {
        version: 2,
        name: "genre_name_case_insensitive",
        statements: &[
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_genre_name_nocase ON genre (name COLLATE NOCASE)",
        ],
    },
    Migration {
        version: 3,
        name: "create_author_and_bookinstance",
        statements: &[
            r#"
            CREATE TABLE IF NOT EXISTS author (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS bookinstance (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                book_id INTEGER REFERENCES book(id) ON DELETE RESTRICT,
                imprint TEXT NOT NULL,
                due_back TEXT
            )
            "#,
        ],
    },
    Migration {
        version: 4,
        name: "create_language_and_book_language",
        statements: &[
            r#"
            CREATE TABLE IF NOT EXISTS language (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )
            "#,
            "ALTER TABLE book ADD COLUMN language_id INTEGER REFERENCES language(id) ON DELETE SET NULL",
        ],
    },
];

/// Latest schema version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    run_migrations(&db).await?;

    Ok(db)
}

/// Applies all pending migrations.
///
/// The store's current version is mirrored in `PRAGMA user_version`; a store
/// already at head is left untouched, and a store stamped newer than this
/// binary's chain is refused.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let current = schema_version(db).await?;
    let latest = latest_version();

    if current > latest {
        return Err(DbErr::Custom(format!(
            "database schema version {current} is newer than this binary supports ({latest})"
        )));
    }

    if current == latest {
        return Ok(());
    }

    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        let txn = db.begin().await?;

        for sql in migration.statements {
            txn.execute(Statement::from_string(
                txn.get_database_backend(),
                (*sql).to_owned(),
            ))
            .await?;
        }

        txn.execute(Statement::from_string(
            txn.get_database_backend(),
            format!("PRAGMA user_version = {}", migration.version),
        ))
        .await?;

        txn.commit().await?;

        tracing::debug!(
            version = migration.version,
            name = migration.name,
            "applied migration"
        );
    }

    Ok(())
}

/// Reads the store's current schema version from `PRAGMA user_version`.
pub async fn schema_version(db: &DatabaseConnection) -> Result<u32, DbErr> {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA user_version".to_owned(),
        ))
        .await?
        .ok_or_else(|| DbErr::Custom("PRAGMA user_version returned no row".to_owned()))?;

    let version: i32 = row.try_get("", "user_version")?;
    Ok(version as u32)
}
