pub mod aggregate;

pub use aggregate::{AlicuotaIva, AlicuotaIvaDto, AlicuotaIvaId};
