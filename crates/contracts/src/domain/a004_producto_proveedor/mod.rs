pub mod aggregate;

pub use aggregate::{ProductoProveedor, ProductoProveedorId};
