pub mod common;
pub mod u501_carga_inicial;
