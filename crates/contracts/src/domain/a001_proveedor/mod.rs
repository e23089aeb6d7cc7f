pub mod aggregate;

pub use aggregate::{Proveedor, ProveedorDto, ProveedorId};
