use chrono::Utc;
use contracts::domain::a004_producto_proveedor::aggregate::{
    ProductoProveedor, ProductoProveedorId,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_producto_proveedor")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub producto_id: String,
    pub proveedor_id: String,
    pub codigo_proveedor: String,
    pub costo: f64,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ProductoProveedor {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        ProductoProveedor {
            base: BaseAggregate::with_metadata(
                ProductoProveedorId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            producto_id: m.producto_id,
            proveedor_id: m.proveedor_id,
            codigo_proveedor: m.codigo_proveedor,
            costo: m.costo,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn get_by_codigo_proveedor(
    proveedor_id: &str,
    codigo_proveedor: &str,
) -> anyhow::Result<Option<ProductoProveedor>> {
    let result = Entity::find()
        .filter(Column::ProveedorId.eq(proveedor_id))
        .filter(Column::CodigoProveedor.eq(codigo_proveedor))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// Todos los códigos de proveedor vivos de un proveedor, para el contexto de
/// conflictos de la carga inicial con una sola consulta.
pub async fn list_codigos_de_proveedor(proveedor_id: &str) -> anyhow::Result<Vec<String>> {
    let rows: Vec<String> = Entity::find()
        .select_only()
        .column(Column::CodigoProveedor)
        .filter(Column::ProveedorId.eq(proveedor_id))
        .filter(Column::IsDeleted.eq(false))
        .into_tuple()
        .all(conn())
        .await?;
    Ok(rows)
}

pub async fn insert(aggregate: &ProductoProveedor) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        producto_id: Set(aggregate.producto_id.clone()),
        proveedor_id: Set(aggregate.proveedor_id.clone()),
        codigo_proveedor: Set(aggregate.codigo_proveedor.clone()),
        costo: Set(aggregate.costo),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}
