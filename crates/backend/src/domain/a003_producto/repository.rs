use chrono::Utc;
use contracts::domain::a003_producto::aggregate::{Producto, ProductoId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_producto")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub codvta: String,
    pub deno: String,
    pub margen: f64,
    pub precio_venta: f64,
    pub idaliiva_id: String,
    pub unidad: Option<String>,
    pub cantmin: Option<i32>,
    pub acti: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Producto {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Producto {
            base: BaseAggregate::with_metadata(
                ProductoId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            codvta: m.codvta,
            deno: m.deno,
            margen: m.margen,
            precio_venta: m.precio_venta,
            idaliiva_id: m.idaliiva_id,
            unidad: m.unidad,
            cantmin: m.cantmin,
            acti: m.acti,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Producto>> {
    let mut items: Vec<Producto> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.codvta.to_lowercase().cmp(&b.codvta.to_lowercase()));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Producto>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn get_by_codvta(codvta: &str) -> anyhow::Result<Option<Producto>> {
    let result = Entity::find()
        .filter(Column::Codvta.eq(codvta))
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

/// Todos los codvta vivos, para armar el contexto de colisiones de la carga
/// inicial con una sola consulta.
pub async fn list_codvtas() -> anyhow::Result<Vec<String>> {
    let rows: Vec<String> = Entity::find()
        .select_only()
        .column(Column::Codvta)
        .filter(Column::IsDeleted.eq(false))
        .into_tuple()
        .all(conn())
        .await?;
    Ok(rows)
}

pub async fn insert(aggregate: &Producto) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        codvta: Set(aggregate.codvta.clone()),
        deno: Set(aggregate.deno.clone()),
        margen: Set(aggregate.margen),
        precio_venta: Set(aggregate.precio_venta),
        idaliiva_id: Set(aggregate.idaliiva_id.clone()),
        unidad: Set(aggregate.unidad.clone()),
        cantmin: Set(aggregate.cantmin),
        acti: Set(aggregate.acti.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Producto) -> anyhow::Result<()> {
    let id = aggregate.base.id.value().to_string();
    let active = ActiveModel {
        id: Set(id),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        codvta: Set(aggregate.codvta.clone()),
        deno: Set(aggregate.deno.clone()),
        margen: Set(aggregate.margen),
        precio_venta: Set(aggregate.precio_venta),
        idaliiva_id: Set(aggregate.idaliiva_id.clone()),
        unidad: Set(aggregate.unidad.clone()),
        cantmin: Set(aggregate.cantmin),
        acti: Set(aggregate.acti.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

/// Borrado físico. Solo para deshacer un alta a medias cuando falla la
/// escritura del registro de compra asociado.
pub async fn delete_hard(id: Uuid) -> anyhow::Result<()> {
    Entity::delete_by_id(id.to_string()).exec(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
