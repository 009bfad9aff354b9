//! Module for database connection setup and common utilities.
//!
//! This module is responsible for opening the SQLite connection pool and
//! creating the catalog and user tables from their entity definitions.

pub mod models;
pub mod queries;
pub mod seed;

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema,
};
use tracing::info;

use models::prelude::{CarMake, CarModel, User};

/// Opens the database and makes sure every table exists.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    // a single connection keeps `sqlite::memory:` databases shared across requests
    options
        .max_connections(1)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    if db.get_database_backend() == DbBackend::Sqlite {
        // car models cascade with their make
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    }
    create_tables(&db).await?;

    info!("Database ready at {database_url}");
    Ok(db)
}

pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = [
        schema.create_table_from_entity(CarMake),
        schema.create_table_from_entity(CarModel),
        schema.create_table_from_entity(User),
    ];

    for mut statement in statements {
        statement.if_not_exists();
        db.execute(backend.build(&statement)).await?;
    }

    Ok(())
}
