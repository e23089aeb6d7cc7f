use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Abre la base SQLite y asegura el esquema mínimo.
/// `db_path` se toma de config.toml; si es None se usa la ruta por defecto.
pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/ferredesk.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normaliza separadores y asegura la forma de URL correcta en Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    ensure_tables(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Database connection already initialized"))?;

    tracing::info!("Database initialized: {}", db_url);
    Ok(())
}

/// Esquema mínimo: una tabla por agregado. Los índices UNIQUE de codvta y de
/// (proveedor_id, codigo_proveedor) son la base de la detección de colisiones
/// de la carga inicial.
async fn ensure_tables(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS a001_proveedor (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            razon TEXT NOT NULL,
            sigla TEXT NOT NULL,
            acti TEXT NOT NULL DEFAULT 'S',
            cuit TEXT,
            domicilio TEXT,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a002_alicuota_iva (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            deno TEXT NOT NULL,
            porce REAL NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a003_producto (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            codvta TEXT NOT NULL,
            deno TEXT NOT NULL,
            margen REAL NOT NULL DEFAULT 0,
            precio_venta REAL NOT NULL DEFAULT 0,
            idaliiva_id TEXT NOT NULL,
            unidad TEXT,
            cantmin INTEGER,
            acti TEXT NOT NULL DEFAULT 'S',
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_a003_producto_codvta
            ON a003_producto (codvta) WHERE is_deleted = 0;
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS a004_producto_proveedor (
            id TEXT PRIMARY KEY NOT NULL,
            code TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL,
            comment TEXT,
            producto_id TEXT NOT NULL,
            proveedor_id TEXT NOT NULL,
            codigo_proveedor TEXT NOT NULL,
            costo REAL NOT NULL DEFAULT 0,
            is_deleted INTEGER NOT NULL DEFAULT 0,
            created_at TEXT,
            updated_at TEXT,
            version INTEGER NOT NULL DEFAULT 0
        );
        "#,
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_a004_proveedor_codigo
            ON a004_producto_proveedor (proveedor_id, codigo_proveedor)
            WHERE is_deleted = 0;
        "#,
    ];

    for sql in statements {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection not initialized. Call initialize_database() first")
}
