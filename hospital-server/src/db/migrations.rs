//! Startup schema for the paciente table

use sqlx::PgPool;

/// Create the paciente table if it does not exist.
///
/// Runs once at startup. The columns are the wire contract; the id is
/// server-generated and `activo` defaults to true for new rows.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS paciente (
            id BIGSERIAL PRIMARY KEY,
            nombre TEXT NOT NULL,
            correo TEXT NOT NULL,
            edad INTEGER NOT NULL,
            direccion TEXT NOT NULL,
            cedula TEXT NOT NULL,
            activo BOOLEAN NOT NULL DEFAULT TRUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_paciente_cedula ON paciente(cedula)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        run(&pool).await.expect("first run failed");
        run(&pool).await.expect("second run failed");
    }
}
