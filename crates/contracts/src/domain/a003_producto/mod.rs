pub mod aggregate;

pub use aggregate::{Producto, ProductoDto, ProductoId};
