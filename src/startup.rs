use sea_orm::DatabaseConnection;

use crate::{config::Config, error::AppError};

/// File name of the announcement store inside the state directory.
pub const DATABASE_FILE_NAME: &str = "last-sent-authors-v1.db";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Opens the Sqlite announcement store and runs pending migrations.
///
/// Creates the state directory if needed, then opens (or creates)
/// `<state directory>/last-sent-authors-v1.db` and brings its schema up to date.
///
/// # Arguments
/// - `config` - Application configuration containing the state directory
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::IoErr)` - The state directory could not be created
/// - `Err(AppError::DbErr)` - Failed to open the database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    std::fs::create_dir_all(&config.state_directory)?;

    let path = config.state_directory.join(DATABASE_FILE_NAME);
    let mut opt = ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
