use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::a001_proveedor;

#[derive(Deserialize)]
pub struct ProveedorListParams {
    pub acti: Option<String>,
}

/// Renglón del combo de proveedores de la carga inicial
#[derive(Serialize)]
pub struct ProveedorResumen {
    pub id: String,
    pub razon: String,
    pub sigla: String,
}

/// GET /api/productos/proveedores/?acti=S
pub async fn list_resumen(
    Query(params): Query<ProveedorListParams>,
) -> Result<Json<Vec<ProveedorResumen>>, axum::http::StatusCode> {
    let resultado = match params.acti.as_deref() {
        Some("S") => a001_proveedor::service::list_active().await,
        _ => a001_proveedor::service::list_all().await,
    };

    match resultado {
        Ok(v) => Ok(Json(
            v.into_iter()
                .map(|p| ProveedorResumen {
                    id: p.to_string_id(),
                    razon: p.razon,
                    sigla: p.sigla,
                })
                .collect(),
        )),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/proveedores
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a001_proveedor::aggregate::Proveedor>>,
    axum::http::StatusCode,
> {
    match a001_proveedor::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/proveedores/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a001_proveedor::aggregate::Proveedor>, axum::http::StatusCode>
{
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_proveedor::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/proveedores
pub async fn upsert(
    Json(dto): Json<contracts::domain::a001_proveedor::aggregate::ProveedorDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a001_proveedor::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a001_proveedor::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/proveedores/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a001_proveedor::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
