use axum::http::StatusCode;
use thiserror::Error;

/// Errores de la carga inicial. El texto de `Display` es lo que viaja al
/// cliente en el campo `detail` de la respuesta.
#[derive(Debug, Error)]
pub enum CargaInicialError {
    #[error("Falta el campo obligatorio `{0}`")]
    ParametroFaltante(&'static str),

    #[error("Parámetro inválido: {0}")]
    ParametroInvalido(String),

    #[error("Proveedor inexistente o inactivo")]
    ProveedorInvalido,

    #[error("Alícuota de IVA inexistente")]
    AlicuotaInvalida,

    #[error("No se pudo leer el archivo: {0}")]
    Archivo(String),

    #[error("El archivo tiene {total} filas y la fila de inicio es {fila_inicio}")]
    FilaInicioFueraDeRango { fila_inicio: u32, total: usize },

    #[error("No se detectaron datos a partir de la fila indicada")]
    SinDatos,

    #[error("No hay filas válidas para importar")]
    SinFilasValidas,

    #[error(transparent)]
    Interno(#[from] anyhow::Error),
}

impl CargaInicialError {
    /// Código HTTP con el que se responde este error
    pub fn status(&self) -> StatusCode {
        match self {
            CargaInicialError::Interno(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
