//! Persistencia de la carga inicial: creación de productos (a003) y de sus
//! registros de compra por proveedor (a004) a partir de las filas aceptadas.

use std::collections::HashSet;

use contracts::domain::a001_proveedor::aggregate::Proveedor;
use contracts::domain::a003_producto::aggregate::Producto;
use contracts::domain::a004_producto_proveedor::aggregate::ProductoProveedor;
use contracts::usecases::u501_carga_inicial::{ResumenImportacion, SolicitudImportacion};

use crate::domain::{a003_producto, a004_producto_proveedor};

use super::error::CargaInicialError;

/// Precio de venta a partir del costo y el margen porcentual, redondeado a
/// dos decimales.
pub fn precio_venta(costo: f64, margen: f64) -> f64 {
    let bruto = costo * (1.0 + margen / 100.0);
    (bruto * 100.0).round() / 100.0
}

/// Importa las filas de la solicitud. Cada fila se vuelve a verificar contra
/// el estado actual de la base: si el codvta ya existe o el código de
/// proveedor ya está registrado, la fila se saltea; nunca se pisa un registro
/// existente. El flag `valido` que manda el cliente no se toma como verdad.
pub async fn importar_filas(
    proveedor: &Proveedor,
    solicitud: &SolicitudImportacion,
) -> Result<ResumenImportacion, CargaInicialError> {
    let lote = &solicitud.parametros_lote;
    let proveedor_id = proveedor.to_string_id();

    let mut creados = 0usize;
    let mut saltados = 0usize;
    // Guardia contra codvta repetidos dentro de la misma solicitud
    let mut codvtas_del_lote: HashSet<String> = HashSet::new();

    for fila in &solicitud.filas {
        let codigo = fila.codigo_proveedor.trim();
        let codvta = fila.codvta_propuesto.trim();

        if codigo.is_empty() || codvta.is_empty() || fila.costo < 0.0 {
            saltados += 1;
            continue;
        }

        if !codvtas_del_lote.insert(codvta.to_string()) {
            saltados += 1;
            continue;
        }

        // Estado actual de la base, no la previsualización que vio el cliente
        if a003_producto::repository::get_by_codvta(codvta).await?.is_some() {
            saltados += 1;
            continue;
        }
        if a004_producto_proveedor::repository::get_by_codigo_proveedor(&proveedor_id, codigo)
            .await?
            .is_some()
        {
            saltados += 1;
            continue;
        }

        let producto = Producto::new_for_insert(
            codvta.to_string(),
            fila.denominacion.clone(),
            lote.margen,
            precio_venta(fila.costo, lote.margen),
            lote.idaliiva_id.clone(),
            lote.unidad.clone(),
            lote.cantmin,
            Some(format!("Carga inicial: {}", solicitud.nombre_archivo)),
        );

        if let Err(e) = producto
            .validate()
            .map_err(|m| anyhow::anyhow!("Fila {codigo} inválida: {m}"))
        {
            tracing::warn!("Fila salteada en la importación: {}", e);
            saltados += 1;
            continue;
        }

        let mut producto = producto;
        producto.before_write();

        let mut registro = ProductoProveedor::new_for_insert(
            producto.to_string_id(),
            proveedor_id.clone(),
            codigo.to_string(),
            fila.denominacion.clone(),
            fila.costo,
        );
        registro.before_write();

        if insertar_par(&producto, &registro).await? {
            creados += 1;
        } else {
            saltados += 1;
        }
    }

    Ok(ResumenImportacion { creados, saltados })
}

/// Inserta el producto (a003) y su registro de compra (a004). Si el registro
/// choca con el índice único de (proveedor_id, codigo_proveedor) — otra
/// importación ganó la carrera entre la verificación y la escritura — se
/// borra el producto recién creado para no dejar filas a medias.
async fn insertar_par(
    producto: &Producto,
    registro: &ProductoProveedor,
) -> anyhow::Result<bool> {
    let producto_id = a003_producto::repository::insert(producto).await?;

    if let Err(e) = a004_producto_proveedor::repository::insert(registro).await {
        a003_producto::repository::delete_hard(producto_id).await?;
        tracing::warn!("Registro de proveedor duplicado, fila salteada: {e}");
        return Ok(false);
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precio_venta_redondea_a_dos_decimales() {
        assert_eq!(precio_venta(100.0, 35.0), 135.0);
        assert_eq!(precio_venta(10.0, 0.0), 10.0);
        // 33.33 * 1.21 = 40.3293
        assert_eq!(precio_venta(33.33, 21.0), 40.33);
    }

    #[test]
    fn test_precio_venta_margen_cero() {
        assert_eq!(precio_venta(12.5, 0.0), 12.5);
    }

    #[tokio::test]
    async fn test_choque_de_indice_no_deja_producto_huerfano() {
        let dir = std::env::temp_dir().join(format!("ferredesk-test-{}", uuid::Uuid::new_v4()));
        crate::shared::data::db::initialize_database(dir.join("test.db").to_str())
            .await
            .unwrap();

        // Registro preexistente que ya ocupa el par (proveedor, código)
        let mut existente = ProductoProveedor::new_for_insert(
            uuid::Uuid::new_v4().to_string(),
            "prov-x".to_string(),
            "COD-REP".to_string(),
            "Ya cargado".to_string(),
            9.0,
        );
        existente.before_write();
        a004_producto_proveedor::repository::insert(&existente)
            .await
            .unwrap();

        let mut producto = Producto::new_for_insert(
            "VTA-REP".to_string(),
            "Martillo".to_string(),
            0.0,
            10.0,
            "iva-21".to_string(),
            None,
            None,
            None,
        );
        producto.before_write();

        let mut registro = ProductoProveedor::new_for_insert(
            producto.to_string_id(),
            "prov-x".to_string(),
            "COD-REP".to_string(),
            "Martillo".to_string(),
            10.0,
        );
        registro.before_write();

        let creado = insertar_par(&producto, &registro).await.unwrap();
        assert!(!creado);
        // El alta a medias se deshizo
        assert!(a003_producto::repository::get_by_codvta("VTA-REP")
            .await
            .unwrap()
            .is_none());
    }
}
