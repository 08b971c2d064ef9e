use sea_orm::DatabaseConnection;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{config::Config, error::AppError, service::user::UserService};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is current before
/// any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    // Registration and join transactions rely on running one at a time.
    opt.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by a table in the application database.
///
/// Sessions expire after seven days without activity.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let store = SqliteStore::new(pool);
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(7))))
}

/// Seeds permission groups and, when configured, the bootstrap staff account.
///
/// Safe to run on every start: existing groups and users are left untouched.
pub async fn seed(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let service = UserService::new(db);

    service.seed_groups().await?;

    match (&config.admin_username, &config.admin_password) {
        (Some(username), Some(password)) => {
            if service.ensure_staff_user(username, password).await? {
                tracing::info!("Created staff account {}", username);
            }
        }
        (Some(_), None) | (None, Some(_)) => {
            tracing::warn!("ADMIN_USERNAME and ADMIN_PASSWORD must both be set; skipping staff account");
        }
        (None, None) => {}
    }

    Ok(())
}
