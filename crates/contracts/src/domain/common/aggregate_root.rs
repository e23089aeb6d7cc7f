use super::{EntityMetadata, EventStore, Origin};

/// Trait para la raíz de un agregado
///
/// Define los métodos y metadatos obligatorios de todos los agregados del sistema
pub trait AggregateRoot {
    /// Tipo del identificador del agregado
    type Id;

    // ============================================================================
    // Métodos de instancia (datos de un registro concreto)
    // ============================================================================

    /// Obtener el ID del registro
    fn id(&self) -> Self::Id;

    /// Obtener el código de negocio del registro (por ejemplo, "PRV-00017")
    fn code(&self) -> &str;

    /// Obtener la descripción/nombre del registro
    fn description(&self) -> &str;

    /// Obtener los metadatos de ciclo de vida
    fn metadata(&self) -> &EntityMetadata;

    /// Obtener los metadatos mutables
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Obtener el almacén de eventos
    fn events(&self) -> &EventStore;

    /// Obtener el almacén de eventos mutable
    fn events_mut(&mut self) -> &mut EventStore;

    // ============================================================================
    // Metadatos de la clase de agregado (datos estáticos)
    // ============================================================================

    /// Índice del agregado en el sistema (por ejemplo, "a001")
    fn aggregate_index() -> &'static str;

    /// Nombre de la colección en la base (por ejemplo, "proveedor")
    fn collection_name() -> &'static str;

    /// Nombre del elemento para UI (singular, por ejemplo, "Proveedor")
    fn element_name() -> &'static str;

    /// Nombre de la lista para UI (plural, por ejemplo, "Proveedores")
    fn list_name() -> &'static str;

    /// Origen de los datos del agregado
    fn origin() -> Origin;

    // ============================================================================
    // Métodos con implementación por defecto
    // ============================================================================

    /// Nombre completo del agregado (por ejemplo, "a001_proveedor")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
