//! Orquestación del UseCase: carga de los agregados involucrados, armado del
//! contexto de validación y delegación en las funciones puras del pipeline.

use std::collections::HashMap;

use contracts::domain::a001_proveedor::aggregate::Proveedor;
use contracts::usecases::u501_carga_inicial::{
    RespuestaPrevisualizacion, ResumenImportacion, SolicitudImportacion,
};
use uuid::Uuid;

use crate::domain::{a001_proveedor, a002_alicuota_iva, a003_producto, a004_producto_proveedor};

use super::error::CargaInicialError;
use super::importacion::importar_filas;
use super::parametros::armar_parametros;
use super::planilla::leer_planilla;
use super::previsualizacion::{previsualizacion_local, validar_filas, ContextoValidacion};

/// Previsualización del servidor: decodifica el archivo completo, valida cada
/// fila contra la base y devuelve el veredicto junto con la muestra local.
pub async fn previsualizar(
    proveedor_id: Uuid,
    nombre_archivo: String,
    datos: &[u8],
    campos: &HashMap<String, String>,
) -> Result<RespuestaPrevisualizacion, CargaInicialError> {
    let proveedor = cargar_proveedor_activo(proveedor_id).await?;

    let lote = armar_parametros(proveedor.to_string_id(), nombre_archivo, campos)?;
    verificar_alicuota(&lote.idaliiva_id).await?;

    tracing::info!(
        "Previsualización de carga inicial: proveedor={}, archivo={}",
        proveedor.razon,
        lote.nombre_archivo
    );

    let planilla = leer_planilla(&lote.nombre_archivo, datos)?;
    let muestra = previsualizacion_local(&planilla, &lote)?;

    let contexto = ContextoValidacion {
        codvtas_existentes: a003_producto::repository::list_codvtas()
            .await?
            .into_iter()
            .collect(),
        codigos_existentes: a004_producto_proveedor::repository::list_codigos_de_proveedor(
            &proveedor.to_string_id(),
        )
        .await?
        .into_iter()
        .collect(),
        sigla: proveedor.sigla.clone(),
    };

    let (preview, totales) = validar_filas(&planilla, &lote, &contexto)?;

    tracing::info!(
        "Previsualización lista: {} válidas, {} inválidas, {} únicas",
        totales.validas,
        totales.invalidas,
        totales.filas_unicas
    );

    Ok(RespuestaPrevisualizacion {
        muestra,
        preview,
        totales,
        parametros_lote: lote,
    })
}

/// Importación definitiva de las filas elegidas por el cliente
pub async fn importar(
    proveedor_id: Uuid,
    solicitud: SolicitudImportacion,
) -> Result<ResumenImportacion, CargaInicialError> {
    if solicitud.filas.is_empty() {
        return Err(CargaInicialError::SinFilasValidas);
    }

    let proveedor = cargar_proveedor_activo(proveedor_id).await?;

    // El lote tiene que ser del mismo proveedor que la ruta
    if solicitud.parametros_lote.proveedor_id != proveedor.to_string_id() {
        return Err(CargaInicialError::ParametroInvalido(
            "El lote pertenece a otro proveedor".to_string(),
        ));
    }

    verificar_alicuota(&solicitud.parametros_lote.idaliiva_id).await?;

    tracing::info!(
        "Importación de carga inicial: proveedor={}, archivo={}, filas={}",
        proveedor.razon,
        solicitud.nombre_archivo,
        solicitud.filas.len()
    );

    let resumen = importar_filas(&proveedor, &solicitud).await?;

    tracing::info!(
        "Importación terminada: creados={}, saltados={}",
        resumen.creados,
        resumen.saltados
    );

    Ok(resumen)
}

async fn cargar_proveedor_activo(proveedor_id: Uuid) -> Result<Proveedor, CargaInicialError> {
    let proveedor = a001_proveedor::repository::get_by_id(proveedor_id)
        .await?
        .ok_or(CargaInicialError::ProveedorInvalido)?;

    if proveedor.base.metadata.is_deleted || !proveedor.es_activo() {
        return Err(CargaInicialError::ProveedorInvalido);
    }

    Ok(proveedor)
}

async fn verificar_alicuota(idaliiva_id: &str) -> Result<(), CargaInicialError> {
    let id = Uuid::parse_str(idaliiva_id).map_err(|_| CargaInicialError::AlicuotaInvalida)?;
    a002_alicuota_iva::repository::get_by_id(id)
        .await?
        .ok_or(CargaInicialError::AlicuotaInvalida)?;
    Ok(())
}
