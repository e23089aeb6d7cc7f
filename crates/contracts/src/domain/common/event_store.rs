use serde::{Deserialize, Serialize};

/// Almacén de eventos de dominio (para una futura implementación de Event Sourcing)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EventStore {
    // Por ahora una estructura vacía, se ampliará más adelante
    _placeholder: (),
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }
}
