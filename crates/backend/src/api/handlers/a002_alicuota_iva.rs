use axum::{extract::Path, Json};
use serde::Serialize;
use serde_json::json;

use crate::domain::a002_alicuota_iva;

/// Renglón del combo de alícuotas de la carga inicial
#[derive(Serialize)]
pub struct AlicuotaResumen {
    pub id: String,
    pub deno: String,
    pub porce: f64,
}

/// GET /api/productos/alicuotasiva/
pub async fn list_resumen() -> Result<Json<Vec<AlicuotaResumen>>, axum::http::StatusCode> {
    match a002_alicuota_iva::service::list_all().await {
        Ok(v) => Ok(Json(
            v.into_iter()
                .map(|a| AlicuotaResumen {
                    id: a.to_string_id(),
                    deno: a.deno,
                    porce: a.porce,
                })
                .collect(),
        )),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/alicuotasiva
pub async fn list_all() -> Result<
    Json<Vec<contracts::domain::a002_alicuota_iva::aggregate::AlicuotaIva>>,
    axum::http::StatusCode,
> {
    match a002_alicuota_iva::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/alicuotasiva/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a002_alicuota_iva::aggregate::AlicuotaIva>, axum::http::StatusCode>
{
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a002_alicuota_iva::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/alicuotasiva
pub async fn upsert(
    Json(dto): Json<contracts::domain::a002_alicuota_iva::aggregate::AlicuotaIvaDto>,
) -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    let result = if dto.id.is_some() {
        a002_alicuota_iva::service::update(dto)
            .await
            .map(|_| uuid::Uuid::nil().to_string())
    } else {
        a002_alicuota_iva::service::create(dto)
            .await
            .map(|id| id.to_string())
    };
    match result {
        Ok(id) => Ok(Json(json!({"id": id}))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// DELETE /api/alicuotasiva/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a002_alicuota_iva::service::delete(uuid).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
