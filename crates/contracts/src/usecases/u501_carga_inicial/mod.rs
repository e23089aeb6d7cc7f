pub mod request;
pub mod response;

pub use request::{CodvtaEstrategia, ParametrosLote, SolicitudImportacion};
pub use response::{
    CeldaCosto, FilaLocal, FilaPrevisualizada, RespuestaPrevisualizacion, ResumenImportacion,
    TotalesPrevisualizacion,
};

use crate::usecases::common::UseCaseMetadata;

pub struct CargaInicial;

impl UseCaseMetadata for CargaInicial {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "carga_inicial"
    }

    fn display_name() -> &'static str {
        "Carga inicial de proveedor"
    }

    fn description() -> &'static str {
        "Importación masiva de la lista de precios de un proveedor desde una planilla"
    }
}
