use serde::{Deserialize, Serialize};

use super::response::FilaPrevisualizada;

/// Parámetros del lote de carga inicial. El cliente los manda como campos del
/// formulario multipart en la previsualización; el servidor los devuelve como
/// eco en `parametros_lote` y el cliente los reenvía tal cual al importar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParametrosLote {
    /// ID del proveedor destino (lo completa el servidor desde la ruta)
    #[serde(default)]
    pub proveedor_id: String,

    /// Nombre del archivo subido (lo completa el servidor desde el multipart)
    #[serde(default)]
    pub nombre_archivo: String,

    /// Letra de la columna con el código del proveedor
    pub col_codigo: String,

    /// Letra de la columna con el costo
    pub col_costo: String,

    /// Letra de la columna con la denominación
    pub col_denominacion: String,

    /// Primera fila con datos, 1-based
    pub fila_inicio: u32,

    /// Estrategia de generación del codvta propuesto
    #[serde(default)]
    pub codvta_estrategia: CodvtaEstrategia,

    /// ID de la alícuota de IVA para los productos creados
    pub idaliiva_id: String,

    /// Margen de ganancia en porcentaje
    pub margen: f64,

    /// Unidad de venta opcional
    #[serde(default)]
    pub unidad: Option<String>,

    /// Cantidad mínima opcional
    #[serde(default)]
    pub cantmin: Option<i32>,
}

/// Estrategia con la que se propone el codvta de cada fila
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CodvtaEstrategia {
    /// Usar el código del proveedor tal cual
    #[default]
    CodigoProveedor,

    /// Sigla del proveedor + "-" + código del proveedor
    SiglaMasCodigo,

    /// Sigla del proveedor + número correlativo en el orden del archivo
    Correlativo,
}

impl std::str::FromStr for CodvtaEstrategia {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "codigo_proveedor" => Ok(Self::CodigoProveedor),
            "sigla_mas_codigo" => Ok(Self::SiglaMasCodigo),
            "correlativo" => Ok(Self::Correlativo),
            otro => Err(format!("Estrategia de codvta desconocida: {otro}")),
        }
    }
}

/// Cuerpo JSON del POST de importación definitiva
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolicitudImportacion {
    pub nombre_archivo: String,
    pub parametros_lote: ParametrosLote,
    /// Filas elegidas por el cliente. El servidor las vuelve a validar contra
    /// el estado actual de la base antes de escribir.
    pub filas: Vec<FilaPrevisualizada>,
}
