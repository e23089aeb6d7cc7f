pub mod common;

pub mod a001_proveedor;
pub mod a002_alicuota_iva;
pub mod a003_producto;
pub mod a004_producto_proveedor;
