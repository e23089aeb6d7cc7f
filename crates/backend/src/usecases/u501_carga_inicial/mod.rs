//! UseCase de carga inicial: importación masiva de la lista de precios de un
//! proveedor desde una planilla (.xlsx/.xls/.ods/.csv).
//!
//! Flujo: el cliente sube el archivo con los parámetros del lote →
//! `previsualizar` decodifica la planilla, propone un codvta por fila y marca
//! colisiones contra la base → el cliente elige las filas → `importar` vuelve
//! a validar contra el estado actual y persiste los productos (a003) con su
//! registro de compra por proveedor (a004).

pub mod columnas;
pub mod error;
pub mod importacion;
pub mod parametros;
pub mod planilla;
pub mod previsualizacion;

mod executor;

pub use error::CargaInicialError;
pub use executor::{importar, previsualizar};
