use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductoId(pub Uuid);

impl ProductoId {
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

impl AggregateId for ProductoId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductoId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Producto del catálogo. `codvta` es el código de venta interno y es único
/// en todo el sistema; la detección de colisiones de la carga inicial se
/// apoya en esa unicidad. `base.code` duplica el codvta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producto {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductoId>,

    /// Código de venta interno, único
    pub codvta: String,

    /// Denominación del producto
    pub deno: String,

    /// Margen de ganancia en porcentaje
    #[serde(default)]
    pub margen: f64,

    /// Precio de venta calculado (costo * (1 + margen/100))
    #[serde(default)]
    pub precio_venta: f64,

    /// ID de la alícuota de IVA aplicable
    pub idaliiva_id: String,

    /// Unidad de venta (por ejemplo, "UN", "KG")
    #[serde(default)]
    pub unidad: Option<String>,

    /// Cantidad mínima de venta
    #[serde(default)]
    pub cantmin: Option<i32>,

    /// Activo: "S" / "N"
    #[serde(default = "default_acti")]
    pub acti: String,
}

fn default_acti() -> String {
    "S".to_string()
}

impl Producto {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        codvta: String,
        deno: String,
        margen: f64,
        precio_venta: f64,
        idaliiva_id: String,
        unidad: Option<String>,
        cantmin: Option<i32>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ProductoId::new_v4(), codvta.clone(), deno.clone());
        base.comment = comment;

        Self {
            base,
            codvta,
            deno,
            margen,
            precio_venta,
            idaliiva_id,
            unidad,
            cantmin,
            acti: default_acti(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn update(&mut self, dto: &ProductoDto) {
        self.base.code = dto.codvta.clone();
        self.base.description = dto.deno.clone();
        self.base.comment = dto.comment.clone();
        self.codvta = dto.codvta.clone();
        self.deno = dto.deno.clone();
        self.margen = dto.margen;
        self.precio_venta = dto.precio_venta;
        self.idaliiva_id = dto.idaliiva_id.clone();
        self.unidad = dto.unidad.clone();
        self.cantmin = dto.cantmin;
        self.acti = dto.acti.clone().unwrap_or_else(default_acti);
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.codvta.trim().is_empty() {
            return Err("El codvta no puede estar vacío".into());
        }
        if self.deno.trim().is_empty() {
            return Err("La denominación no puede estar vacía".into());
        }
        if self.margen < 0.0 {
            return Err("El margen no puede ser negativo".into());
        }
        if self.idaliiva_id.trim().is_empty() {
            return Err("Falta la alícuota de IVA".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Producto {
    type Id = ProductoId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "producto"
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Productos"
    }

    fn origin() -> Origin {
        Origin::Manual
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductoDto {
    pub id: Option<String>,
    pub codvta: String,
    pub deno: String,
    #[serde(default)]
    pub margen: f64,
    #[serde(default)]
    pub precio_venta: f64,
    pub idaliiva_id: String,
    pub unidad: Option<String>,
    pub cantmin: Option<i32>,
    pub acti: Option<String>,
    pub comment: Option<String>,
}
