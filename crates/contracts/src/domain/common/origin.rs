use serde::{Deserialize, Serialize};

/// Origen de los datos de un agregado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// Cargado a mano desde la UI
    Manual,
    /// Creado por la carga inicial de lista de precios de proveedor
    CargaInicial,
}

impl Origin {
    pub fn as_str(&self) -> &'static str {
        match self {
            Origin::Manual => "manual",
            Origin::CargaInicial => "carga_inicial",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
