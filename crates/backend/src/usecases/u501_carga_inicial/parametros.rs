//! Armado y validación de los parámetros del lote a partir de los campos del
//! formulario multipart.

use std::collections::HashMap;

use contracts::usecases::u501_carga_inicial::{CodvtaEstrategia, ParametrosLote};

use super::error::CargaInicialError;

/// Construye los parámetros del lote desde los campos de texto del multipart.
/// `proveedor_id` viene de la ruta y `nombre_archivo` del propio archivo.
///
/// Campos obligatorios: `idaliiva_id` (la alícuota). Las columnas y la fila
/// de inicio tienen los mismos defaults que la pantalla original (A/B/C, 2).
pub fn armar_parametros(
    proveedor_id: String,
    nombre_archivo: String,
    campos: &HashMap<String, String>,
) -> Result<ParametrosLote, CargaInicialError> {
    let idaliiva_id = campos
        .get("idaliiva_id")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or(CargaInicialError::ParametroFaltante("idaliiva_id"))?;

    let fila_inicio = match campos.get("fila_inicio").map(|s| s.trim()) {
        None | Some("") => 2,
        Some(v) => v.parse::<u32>().map_err(|_| {
            CargaInicialError::ParametroInvalido(format!("fila_inicio no es un entero: {v}"))
        })?,
    };
    if fila_inicio < 1 {
        return Err(CargaInicialError::ParametroInvalido(
            "fila_inicio debe ser mayor o igual a 1".to_string(),
        ));
    }

    let margen = match campos.get("margen").map(|s| s.trim()) {
        None | Some("") => 0.0,
        Some(v) => v.parse::<f64>().map_err(|_| {
            CargaInicialError::ParametroInvalido(format!("margen no es un número: {v}"))
        })?,
    };
    if margen < 0.0 {
        return Err(CargaInicialError::ParametroInvalido(
            "el margen no puede ser negativo".to_string(),
        ));
    }

    let codvta_estrategia = match campos.get("codvta_estrategia").map(|s| s.trim()) {
        None | Some("") => CodvtaEstrategia::default(),
        Some(v) => v
            .parse::<CodvtaEstrategia>()
            .map_err(CargaInicialError::ParametroInvalido)?,
    };

    let columna = |nombre: &str, defecto: &str| -> String {
        campos
            .get(nombre)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| defecto.to_string())
    };

    let cantmin = match campos.get("cantmin").map(|s| s.trim()) {
        None | Some("") => None,
        Some(v) => Some(v.parse::<i32>().map_err(|_| {
            CargaInicialError::ParametroInvalido(format!("cantmin no es un entero: {v}"))
        })?),
    };

    Ok(ParametrosLote {
        proveedor_id,
        nombre_archivo,
        col_codigo: columna("col_codigo", "A"),
        col_costo: columna("col_costo", "B"),
        col_denominacion: columna("col_denominacion", "C"),
        fila_inicio,
        codvta_estrategia,
        idaliiva_id,
        margen,
        unidad: campos
            .get("unidad")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        cantmin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campos_base() -> HashMap<String, String> {
        let mut campos = HashMap::new();
        campos.insert("idaliiva_id".to_string(), "iva-21".to_string());
        campos.insert("col_codigo".to_string(), "A".to_string());
        campos.insert("col_costo".to_string(), "B".to_string());
        campos.insert("col_denominacion".to_string(), "C".to_string());
        campos.insert("fila_inicio".to_string(), "2".to_string());
        campos.insert("margen".to_string(), "35".to_string());
        campos
    }

    #[test]
    fn test_parametros_completos() {
        let lote = armar_parametros(
            "prov-1".to_string(),
            "lista.xlsx".to_string(),
            &campos_base(),
        )
        .unwrap();

        assert_eq!(lote.proveedor_id, "prov-1");
        assert_eq!(lote.nombre_archivo, "lista.xlsx");
        assert_eq!(lote.fila_inicio, 2);
        assert_eq!(lote.margen, 35.0);
        assert_eq!(lote.codvta_estrategia, CodvtaEstrategia::CodigoProveedor);
    }

    #[test]
    fn test_falta_alicuota_bloquea() {
        let mut campos = campos_base();
        campos.remove("idaliiva_id");
        let resultado = armar_parametros("prov-1".to_string(), "l.csv".to_string(), &campos);
        assert!(matches!(
            resultado,
            Err(CargaInicialError::ParametroFaltante("idaliiva_id"))
        ));
    }

    #[test]
    fn test_defaults_de_columnas() {
        let mut campos = HashMap::new();
        campos.insert("idaliiva_id".to_string(), "iva-21".to_string());
        let lote = armar_parametros("p".to_string(), "l.csv".to_string(), &campos).unwrap();

        assert_eq!(lote.col_codigo, "A");
        assert_eq!(lote.col_costo, "B");
        assert_eq!(lote.col_denominacion, "C");
        assert_eq!(lote.fila_inicio, 2);
        assert_eq!(lote.margen, 0.0);
    }

    #[test]
    fn test_margen_invalido() {
        let mut campos = campos_base();
        campos.insert("margen".to_string(), "treinta".to_string());
        let resultado = armar_parametros("p".to_string(), "l.csv".to_string(), &campos);
        assert!(matches!(
            resultado,
            Err(CargaInicialError::ParametroInvalido(_))
        ));

        campos.insert("margen".to_string(), "-5".to_string());
        let resultado = armar_parametros("p".to_string(), "l.csv".to_string(), &campos);
        assert!(matches!(
            resultado,
            Err(CargaInicialError::ParametroInvalido(_))
        ));
    }

    #[test]
    fn test_estrategia_desde_formulario() {
        let mut campos = campos_base();
        campos.insert(
            "codvta_estrategia".to_string(),
            "sigla_mas_codigo".to_string(),
        );
        let lote = armar_parametros("p".to_string(), "l.csv".to_string(), &campos).unwrap();
        assert_eq!(lote.codvta_estrategia, CodvtaEstrategia::SiglaMasCodigo);

        campos.insert("codvta_estrategia".to_string(), "inventada".to_string());
        let resultado = armar_parametros("p".to_string(), "l.csv".to_string(), &campos);
        assert!(resultado.is_err());
    }
}
