use super::{EntityMetadata, EventStore};
use serde::{Deserialize, Serialize};

/// Agregado base con los campos obligatorios de todos los agregados
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    /// Identificador único del registro
    pub id: Id,
    /// Código de negocio del registro (por ejemplo, "PRV-00017", "HER-12345")
    pub code: String,
    /// Descripción/nombre del registro
    pub description: String,
    /// Comentario
    pub comment: Option<String>,
    /// Metadatos de ciclo de vida
    pub metadata: EntityMetadata,
    /// Almacén de eventos
    pub events: EventStore,
}

impl<Id> BaseAggregate<Id> {
    /// Crear un agregado nuevo
    pub fn new(id: Id, code: String, description: String) -> Self {
        Self {
            id,
            code,
            description,
            comment: None,
            metadata: EntityMetadata::new(),
            events: EventStore::new(),
        }
    }

    /// Crear un agregado con metadatos existentes (para cargar desde la base)
    pub fn with_metadata(
        id: Id,
        code: String,
        description: String,
        comment: Option<String>,
        metadata: EntityMetadata,
    ) -> Self {
        Self {
            id,
            code,
            description,
            comment,
            metadata,
            events: EventStore::new(),
        }
    }

    /// Actualizar el timestamp
    pub fn touch(&mut self) {
        self.metadata.touch();
    }

    /// Establecer el comentario
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }
}
