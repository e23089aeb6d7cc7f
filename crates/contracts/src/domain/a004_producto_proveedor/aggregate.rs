use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductoProveedorId(pub Uuid);

impl ProductoProveedorId {
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

impl AggregateId for ProductoProveedorId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductoProveedorId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Registro de compra por proveedor: vincula un producto con el código que
/// ese proveedor usa en su lista de precios y el último costo conocido.
/// El par (proveedor_id, codigo_proveedor) es único; los conflictos de
/// código de proveedor de la carga inicial se apoyan en esa unicidad.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductoProveedor {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductoProveedorId>,

    /// ID del producto (a003)
    pub producto_id: String,

    /// ID del proveedor (a001)
    pub proveedor_id: String,

    /// Código del artículo según el proveedor
    pub codigo_proveedor: String,

    /// Último costo informado por el proveedor
    pub costo: f64,
}

impl ProductoProveedor {
    pub fn new_for_insert(
        producto_id: String,
        proveedor_id: String,
        codigo_proveedor: String,
        denominacion: String,
        costo: f64,
    ) -> Self {
        let base = BaseAggregate::new(
            ProductoProveedorId::new_v4(),
            codigo_proveedor.clone(),
            denominacion,
        );

        Self {
            base,
            producto_id,
            proveedor_id,
            codigo_proveedor,
            costo,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.codigo_proveedor.trim().is_empty() {
            return Err("El código de proveedor no puede estar vacío".into());
        }
        if self.producto_id.trim().is_empty() || self.proveedor_id.trim().is_empty() {
            return Err("Faltan las referencias a producto o proveedor".into());
        }
        if self.costo < 0.0 {
            return Err("El costo no puede ser negativo".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for ProductoProveedor {
    type Id = ProductoProveedorId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "producto_proveedor"
    }

    fn element_name() -> &'static str {
        "Producto por proveedor"
    }

    fn list_name() -> &'static str {
        "Productos por proveedor"
    }

    fn origin() -> Origin {
        Origin::CargaInicial
    }
}
