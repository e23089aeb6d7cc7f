use std::collections::HashMap;

use axum::{
    extract::{Multipart, Path},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use contracts::usecases::u501_carga_inicial::{
    RespuestaPrevisualizacion, ResumenImportacion, SolicitudImportacion,
};

use crate::usecases::u501_carga_inicial::{self, CargaInicialError};

/// Los errores de la carga inicial viajan como `{"detail": "..."}`, que es lo
/// que la pantalla le muestra al usuario.
fn respuesta_error(e: CargaInicialError) -> (StatusCode, Json<Value>) {
    if e.status() == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Carga inicial falló: {:#}", e);
    }
    (e.status(), Json(json!({ "detail": e.to_string() })))
}

/// POST /api/proveedores/:id/carga-inicial/previsualizar/
///
/// Multipart: `archivo` + los campos del lote (col_codigo, col_costo,
/// col_denominacion, fila_inicio, codvta_estrategia, idaliiva_id, margen,
/// unidad?, cantmin?).
pub async fn previsualizar(
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<RespuestaPrevisualizacion>, (StatusCode, Json<Value>)> {
    let proveedor_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| respuesta_error(CargaInicialError::ProveedorInvalido))?;

    let mut nombre_archivo: Option<String> = None;
    let mut datos: Option<Vec<u8>> = None;
    let mut campos: HashMap<String, String> = HashMap::new();

    loop {
        let campo = match multipart.next_field().await {
            Ok(Some(campo)) => campo,
            Ok(None) => break,
            Err(e) => {
                return Err(respuesta_error(CargaInicialError::ParametroInvalido(
                    format!("multipart inválido: {e}"),
                )))
            }
        };

        let nombre = campo.name().unwrap_or_default().to_string();
        if nombre == "archivo" {
            nombre_archivo = campo.file_name().map(|s| s.to_string());
            let bytes = campo.bytes().await.map_err(|e| {
                respuesta_error(CargaInicialError::Archivo(e.to_string()))
            })?;
            datos = Some(bytes.to_vec());
        } else {
            let texto = campo.text().await.map_err(|e| {
                respuesta_error(CargaInicialError::ParametroInvalido(e.to_string()))
            })?;
            campos.insert(nombre, texto);
        }
    }

    let datos = datos.ok_or_else(|| {
        respuesta_error(CargaInicialError::ParametroFaltante("archivo"))
    })?;
    let nombre_archivo = nombre_archivo.unwrap_or_else(|| "archivo".to_string());

    match u501_carga_inicial::previsualizar(proveedor_id, nombre_archivo, &datos, &campos).await {
        Ok(respuesta) => Ok(Json(respuesta)),
        Err(e) => Err(respuesta_error(e)),
    }
}

/// POST /api/proveedores/:id/carga-inicial/importar/
pub async fn importar(
    Path(id): Path<String>,
    Json(solicitud): Json<SolicitudImportacion>,
) -> Result<Json<ResumenImportacion>, (StatusCode, Json<Value>)> {
    let proveedor_id = uuid::Uuid::parse_str(&id)
        .map_err(|_| respuesta_error(CargaInicialError::ProveedorInvalido))?;

    match u501_carga_inicial::importar(proveedor_id, solicitud).await {
        Ok(resumen) => Ok(Json(resumen)),
        Err(e) => Err(respuesta_error(e)),
    }
}
