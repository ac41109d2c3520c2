use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::info;

/// Opens the SQLite database behind `db_url`, creating it if missing, and
/// applies the bundled schema. Panics on failure: a server without its
/// store is useless.
pub async fn init_db(db_url: &str) -> Pool<Sqlite> {
    info!("🔌 Opening SQLite store at {}", db_url);

    let opts = match SqliteConnectOptions::from_str(db_url) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("❌ FATAL: Invalid database URL '{}': {}", db_url, e);
            panic!("invalid database url");
        }
    };

    match connect(opts).await {
        Ok(pool) => {
            info!("✅ Database opened and schema applied.");
            pool
        }
        Err(e) => {
            eprintln!("❌ FATAL: Database initialization failed: {}", e);
            panic!("database initialization failed");
        }
    }
}

/// Pool construction plus schema migration. Tests call this directly with
/// hand-built connect options pointing at a temp file.
pub async fn connect(opts: SqliteConnectOptions) -> Result<Pool<Sqlite>, sqlx::Error> {
    // Foreign keys are per-connection in SQLite; the option applies the
    // pragma to every pooled connection, which the cascades rely on.
    let opts = opts.create_if_missing(true).foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;

    apply_schema(&pool, include_str!("../schema.sql")).await?;
    Ok(pool)
}

async fn apply_schema(pool: &Pool<Sqlite>, schema: &str) -> Result<(), sqlx::Error> {
    let statements = split_sql(schema);

    // One transaction: either the whole schema lands or none of it.
    let mut tx = pool.begin().await?;

    for (i, sql) in statements.iter().enumerate() {
        if sql.trim().is_empty() {
            continue;
        }

        if let Err(e) = sqlx::query(sql).execute(&mut *tx).await {
            tracing::error!("🚨 Schema error in statement #{}:\n{}", i + 1, sql);
            return Err(e);
        }
    }

    tx.commit().await?;
    Ok(())
}

/// Splits the schema into statements, ignoring `--` comment tails when
/// looking for terminating semicolons.
fn split_sql(raw: &str) -> Vec<String> {
    let mut cmds = Vec::new();
    let mut current = String::new();

    for line in raw.lines() {
        let effective = match line.find("--") {
            Some(idx) => &line[..idx],
            None => line,
        };

        current.push_str(line);
        current.push('\n');

        let trimmed = effective.trim();
        if !trimmed.is_empty() && trimmed.ends_with(';') {
            cmds.push(current.trim().to_string());
            current = String::new();
        }
    }

    if !current.trim().is_empty() {
        cmds.push(current.trim().to_string());
    }
    cmds
}
