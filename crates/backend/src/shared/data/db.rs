use std::path::Path;

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};

use crate::domain::{
    a001_asset, a002_vendor, a003_customer, a004_air_agent, a005_gds_record, a006_investment,
    a007_sar_rate, a008_markup_rule, a009_expense_category, a010_air_refund, a011_air_reissue,
    a012_hotel_contract, a013_employee,
};

/// `sqlite://` URL of a database file; the parent directory is created
pub fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    if let Some(parent) = db_file.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

/// Open the database file and make sure every table exists
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database {}", db_url);
    let conn = Database::connect(&db_url).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

async fn create_table<E: EntityTrait>(conn: &DatabaseConnection, entity: E) -> anyhow::Result<()> {
    let backend = conn.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();
    conn.execute(backend.build(&statement)).await?;
    Ok(())
}

/// `CREATE TABLE IF NOT EXISTS` for every aggregate table
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    create_table(conn, a001_asset::repository::Entity).await?;
    create_table(conn, a002_vendor::repository::Entity).await?;
    create_table(conn, a003_customer::repository::Entity).await?;
    create_table(conn, a004_air_agent::repository::Entity).await?;
    create_table(conn, a005_gds_record::repository::Entity).await?;
    create_table(conn, a006_investment::repository::Entity).await?;
    create_table(conn, a007_sar_rate::repository::Entity).await?;
    create_table(conn, a008_markup_rule::repository::Entity).await?;
    create_table(conn, a009_expense_category::repository::Entity).await?;
    create_table(conn, a010_air_refund::repository::Entity).await?;
    create_table(conn, a011_air_reissue::repository::Entity).await?;
    create_table(conn, a012_hotel_contract::repository::Entity).await?;
    create_table(conn, a013_employee::repository::Entity).await?;
    tracing::info!("Database schema is up to date");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_absolute_path() {
        let dir = std::env::temp_dir().join("travel-erp-url-test");
        let url = sqlite_url(&dir.join("app.db")).unwrap();
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("app.db?mode=rwc"));
        assert!(dir.exists());
    }
}
