use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlicuotaIvaId(pub Uuid);

impl AlicuotaIvaId {
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

impl AggregateId for AlicuotaIvaId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AlicuotaIvaId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Alícuota de IVA aplicable a los productos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlicuotaIva {
    #[serde(flatten)]
    pub base: BaseAggregate<AlicuotaIvaId>,

    /// Denominación (por ejemplo, "IVA 21%")
    pub deno: String,

    /// Porcentaje (por ejemplo, 21.0)
    pub porce: f64,
}

impl AlicuotaIva {
    pub fn new_for_insert(code: String, deno: String, porce: f64) -> Self {
        let base = BaseAggregate::new(AlicuotaIvaId::new_v4(), code, deno.clone());

        Self { base, deno, porce }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn update(&mut self, dto: &AlicuotaIvaDto) {
        self.base.code = dto.code.clone().unwrap_or_default();
        self.base.description = dto.deno.clone();
        self.deno = dto.deno.clone();
        self.porce = dto.porce;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.deno.trim().is_empty() {
            return Err("La denominación no puede estar vacía".into());
        }
        if self.porce < 0.0 {
            return Err("El porcentaje no puede ser negativo".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for AlicuotaIva {
    type Id = AlicuotaIvaId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "alicuota_iva"
    }

    fn element_name() -> &'static str {
        "Alícuota IVA"
    }

    fn list_name() -> &'static str {
        "Alícuotas IVA"
    }

    fn origin() -> Origin {
        Origin::Manual
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AlicuotaIvaDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub deno: String,
    #[serde(default)]
    pub porce: f64,
}
