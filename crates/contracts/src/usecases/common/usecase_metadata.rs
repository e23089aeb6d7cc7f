/// Metadatos de un UseCase para identificación y documentación
pub trait UseCaseMetadata {
    /// Índice del UseCase (por ejemplo, "u501")
    fn usecase_index() -> &'static str;

    /// Nombre técnico (por ejemplo, "carga_inicial")
    fn usecase_name() -> &'static str;

    /// Nombre visible para UI (por ejemplo, "Carga inicial de proveedor")
    fn display_name() -> &'static str;

    /// Descripción del UseCase
    fn description() -> &'static str {
        ""
    }

    /// Nombre completo del tipo "u501_carga_inicial"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
