use super::repository;
use contracts::domain::a003_producto::aggregate::{Producto, ProductoDto};
use uuid::Uuid;

pub async fn create(dto: ProductoDto) -> anyhow::Result<Uuid> {
    // El codvta tiene que ser único entre los productos vivos
    if repository::get_by_codvta(dto.codvta.trim()).await?.is_some() {
        anyhow::bail!("Ya existe un producto con codvta {}", dto.codvta);
    }

    let mut aggregate = Producto::new_for_insert(
        dto.codvta.trim().to_string(),
        dto.deno,
        dto.margen,
        dto.precio_venta,
        dto.idaliiva_id,
        dto.unidad,
        dto.cantmin,
        dto.comment,
    );

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: ProductoDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    // Si cambia el codvta, verificar que el nuevo no choque con otro producto
    if aggregate.codvta != dto.codvta {
        if let Some(otro) = repository::get_by_codvta(dto.codvta.trim()).await? {
            if otro.base.id != aggregate.base.id {
                anyhow::bail!("Ya existe un producto con codvta {}", dto.codvta);
            }
        }
    }

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Producto>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Producto>> {
    repository::list_all().await
}
