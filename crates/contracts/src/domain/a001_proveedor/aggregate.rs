use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProveedorId(pub Uuid);

impl ProveedorId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProveedorId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProveedorId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Proveedor de la ferretería. `sigla` es el prefijo corto que usan las
/// estrategias de generación de codvta en la carga inicial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proveedor {
    #[serde(flatten)]
    pub base: BaseAggregate<ProveedorId>,

    /// Razón social
    pub razon: String,

    /// Sigla corta del proveedor (por ejemplo, "ACI")
    pub sigla: String,

    /// Activo: "S" / "N"
    #[serde(default = "default_acti")]
    pub acti: String,

    #[serde(default)]
    pub cuit: Option<String>,

    #[serde(default)]
    pub domicilio: Option<String>,
}

fn default_acti() -> String {
    "S".to_string()
}

impl Proveedor {
    pub fn new_for_insert(
        code: String,
        razon: String,
        sigla: String,
        acti: String,
        cuit: Option<String>,
        domicilio: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ProveedorId::new_v4(), code, razon.clone());
        base.comment = comment;

        Self {
            base,
            razon,
            sigla,
            acti,
            cuit,
            domicilio,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn es_activo(&self) -> bool {
        self.acti == "S"
    }

    pub fn update(&mut self, dto: &ProveedorDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.razon.clone();
        self.base.comment = dto.comment.clone();
        self.razon = dto.razon.clone();
        self.sigla = dto.sigla.clone().unwrap_or_default();
        self.acti = dto.acti.clone().unwrap_or_else(default_acti);
        self.cuit = dto.cuit.clone();
        self.domicilio = dto.domicilio.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.razon.trim().is_empty() {
            return Err("La razón social no puede estar vacía".into());
        }
        if self.sigla.trim().is_empty() {
            return Err("La sigla no puede estar vacía".into());
        }
        if self.acti != "S" && self.acti != "N" {
            return Err("El campo acti debe ser \"S\" o \"N\"".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Proveedor {
    type Id = ProveedorId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "proveedor"
    }

    fn element_name() -> &'static str {
        "Proveedor"
    }

    fn list_name() -> &'static str {
        "Proveedores"
    }

    fn origin() -> Origin {
        Origin::Manual
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProveedorDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub razon: String,
    pub sigla: Option<String>,
    pub acti: Option<String>,
    pub cuit: Option<String>,
    pub domicilio: Option<String>,
    pub comment: Option<String>,
}
