use serde::{Deserialize, Serialize};

use super::request::ParametrosLote;

/// Valor crudo de la celda de costo en la muestra local: número si la celda
/// era numérica o parseable, texto recortado si no, string vacío si la celda
/// no estaba definida.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CeldaCosto {
    Numero(f64),
    Texto(String),
}

impl CeldaCosto {
    pub fn vacia() -> Self {
        Self::Texto(String::new())
    }
}

/// Fila de la muestra local: lectura directa de la planilla, sin validar.
/// Aproximación de mejor esfuerzo; la previsualización del servidor es la
/// autoridad sobre validez y colisiones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilaLocal {
    pub codigo: String,
    pub costo: CeldaCosto,
    pub denominacion: String,
}

/// Fila de la previsualización del servidor, con veredicto de validez
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilaPrevisualizada {
    pub codigo_proveedor: String,
    pub denominacion: String,
    pub costo: f64,
    pub codvta_propuesto: String,
    pub valido: bool,
    pub colision_codvta: bool,
    pub conflicto_codigo_proveedor: bool,
    pub motivos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalesPrevisualizacion {
    pub validas: usize,
    pub invalidas: usize,
    /// Cantidad de códigos de proveedor distintos detectados en el archivo
    pub filas_unicas: usize,
}

/// Respuesta de POST /api/proveedores/{id}/carga-inicial/previsualizar/
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespuestaPrevisualizacion {
    /// Primeras filas tal como se leyeron (tope 10), para mostrar al toque
    pub muestra: Vec<FilaLocal>,
    pub preview: Vec<FilaPrevisualizada>,
    pub totales: TotalesPrevisualizacion,
    /// Eco de los parámetros del lote, a reenviar en la importación
    pub parametros_lote: ParametrosLote,
}

/// Respuesta de POST /api/proveedores/{id}/carga-inicial/importar/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumenImportacion {
    pub creados: usize,
    pub saltados: usize,
}
