//! Previsualización de la carga inicial: la muestra local (lectura cruda de
//! las primeras filas) y la validación completa con propuesta de codvta y
//! detección de colisiones.

use std::collections::HashSet;

use contracts::usecases::u501_carga_inicial::{
    CeldaCosto, CodvtaEstrategia, FilaLocal, FilaPrevisualizada, ParametrosLote,
    TotalesPrevisualizacion,
};

use super::columnas::indice_columna;
use super::error::CargaInicialError;
use super::planilla::{Celda, Planilla};

/// Tope de filas de la muestra local
pub const LIMITE_MUESTRA: usize = 10;

/// Muestra local: lectura directa de hasta [`LIMITE_MUESTRA`] filas desde
/// `fila_inicio`, sin validar nada. Las filas cuyo código no está definido se
/// saltean. Una lista vacía no es error; el que llama decide el mensaje.
pub fn previsualizacion_local(
    planilla: &Planilla,
    lote: &ParametrosLote,
) -> Result<Vec<FilaLocal>, CargaInicialError> {
    let total = planilla.cantidad_filas();
    if total < lote.fila_inicio as usize {
        return Err(CargaInicialError::FilaInicioFueraDeRango {
            fila_inicio: lote.fila_inicio,
            total,
        });
    }

    let col_codigo = indice_columna(&lote.col_codigo);
    let col_costo = indice_columna(&lote.col_costo);
    let col_denominacion = indice_columna(&lote.col_denominacion);

    let mut filas = Vec::new();
    for numero in (lote.fila_inicio as usize - 1)..total {
        if filas.len() >= LIMITE_MUESTRA {
            break;
        }

        let codigo = planilla.celda(numero, col_codigo);
        if !codigo.es_definida() {
            continue;
        }

        filas.push(FilaLocal {
            codigo: codigo.como_texto(),
            costo: costo_local(planilla.celda(numero, col_costo)),
            denominacion: planilla.celda(numero, col_denominacion).como_texto(),
        });
    }

    Ok(filas)
}

/// Coerción del costo para la muestra: número si se puede, texto recortado si
/// no, string vacío si la celda no está definida.
fn costo_local(celda: &Celda) -> CeldaCosto {
    match celda.como_numero() {
        Some(n) => CeldaCosto::Numero(n),
        None => match celda {
            Celda::Vacia => CeldaCosto::vacia(),
            otro => CeldaCosto::Texto(otro.como_texto()),
        },
    }
}

/// Estado de la base contra el que se validan las filas. Se arma con dos
/// consultas antes de recorrer el archivo para no ir a la base por fila.
#[derive(Debug, Clone, Default)]
pub struct ContextoValidacion {
    /// codvta de todos los productos vivos (a003)
    pub codvtas_existentes: HashSet<String>,
    /// Códigos de proveedor ya registrados para este proveedor (a004)
    pub codigos_existentes: HashSet<String>,
    /// Sigla del proveedor, insumo de las estrategias de codvta
    pub sigla: String,
}

/// Validación completa del archivo: recorre todas las filas desde
/// `fila_inicio`, propone un codvta por estrategia y marca colisiones y
/// conflictos. Devuelve las filas con su veredicto más los totales.
pub fn validar_filas(
    planilla: &Planilla,
    lote: &ParametrosLote,
    contexto: &ContextoValidacion,
) -> Result<(Vec<FilaPrevisualizada>, TotalesPrevisualizacion), CargaInicialError> {
    let total = planilla.cantidad_filas();
    if total < lote.fila_inicio as usize {
        return Err(CargaInicialError::FilaInicioFueraDeRango {
            fila_inicio: lote.fila_inicio,
            total,
        });
    }

    let col_codigo = indice_columna(&lote.col_codigo);
    let col_costo = indice_columna(&lote.col_costo);
    let col_denominacion = indice_columna(&lote.col_denominacion);

    let mut filas = Vec::new();
    let mut codigos_vistos: HashSet<String> = HashSet::new();
    let mut codvtas_propuestos: HashSet<String> = HashSet::new();
    let mut correlativo: u32 = 0;

    for numero in (lote.fila_inicio as usize - 1)..total {
        let celda_codigo = planilla.celda(numero, col_codigo);
        if !celda_codigo.es_definida() {
            continue;
        }

        let codigo = celda_codigo.como_texto();
        let denominacion = planilla.celda(numero, col_denominacion).como_texto();
        let celda_costo = planilla.celda(numero, col_costo);

        let mut motivos: Vec<String> = Vec::new();

        let costo = match celda_costo.como_numero() {
            Some(n) if n >= 0.0 => n,
            Some(_) => {
                motivos.push("El costo no puede ser negativo".to_string());
                0.0
            }
            None => {
                motivos.push("El costo no es un número".to_string());
                0.0
            }
        };

        if denominacion.is_empty() {
            motivos.push("La denominación está vacía".to_string());
        }

        // Primera aparición gana; las repeticiones quedan marcadas
        let repetido = !codigos_vistos.insert(codigo.clone());
        if repetido {
            motivos.push("Código de proveedor repetido en el archivo".to_string());
        }

        correlativo += 1;
        let codvta_propuesto = proponer_codvta(lote.codvta_estrategia, &contexto.sigla, &codigo, correlativo);

        let colision_codvta = contexto.codvtas_existentes.contains(&codvta_propuesto)
            || !codvtas_propuestos.insert(codvta_propuesto.clone());
        if colision_codvta {
            motivos.push(format!("El codvta {codvta_propuesto} ya está en uso"));
        }

        let conflicto_codigo_proveedor = contexto.codigos_existentes.contains(&codigo);
        if conflicto_codigo_proveedor {
            motivos.push(format!(
                "El proveedor ya tiene registrado el código {codigo}"
            ));
        }

        let valido = motivos.is_empty();
        filas.push(FilaPrevisualizada {
            codigo_proveedor: codigo,
            denominacion,
            costo,
            codvta_propuesto,
            valido,
            colision_codvta,
            conflicto_codigo_proveedor,
            motivos,
        });
    }

    if filas.is_empty() {
        return Err(CargaInicialError::SinDatos);
    }

    let validas = filas.iter().filter(|f| f.valido).count();
    let totales = TotalesPrevisualizacion {
        validas,
        invalidas: filas.len() - validas,
        filas_unicas: codigos_vistos.len(),
    };

    Ok((filas, totales))
}

/// Codvta propuesto para una fila según la estrategia del lote
pub fn proponer_codvta(
    estrategia: CodvtaEstrategia,
    sigla: &str,
    codigo: &str,
    correlativo: u32,
) -> String {
    match estrategia {
        CodvtaEstrategia::CodigoProveedor => codigo.to_string(),
        CodvtaEstrategia::SiglaMasCodigo => format!("{sigla}-{codigo}"),
        CodvtaEstrategia::Correlativo => format!("{sigla}-{correlativo:05}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila(codigo: &str, costo: Celda, deno: &str) -> Vec<Celda> {
        vec![
            if codigo.is_empty() {
                Celda::Vacia
            } else {
                Celda::Texto(codigo.to_string())
            },
            costo,
            if deno.is_empty() {
                Celda::Vacia
            } else {
                Celda::Texto(deno.to_string())
            },
        ]
    }

    fn lote_base() -> ParametrosLote {
        ParametrosLote {
            proveedor_id: "prov-1".to_string(),
            nombre_archivo: "lista.csv".to_string(),
            col_codigo: "A".to_string(),
            col_costo: "B".to_string(),
            col_denominacion: "C".to_string(),
            fila_inicio: 2,
            codvta_estrategia: CodvtaEstrategia::CodigoProveedor,
            idaliiva_id: "iva-21".to_string(),
            margen: 35.0,
            unidad: None,
            cantmin: None,
        }
    }

    fn planilla_con_encabezado(filas_datos: Vec<Vec<Celda>>) -> Planilla {
        let mut filas = vec![fila("Codigo", Celda::Texto("Costo".into()), "Denominacion")];
        filas.extend(filas_datos);
        Planilla { filas }
    }

    #[test]
    fn test_grilla_corta_devuelve_error() {
        let planilla = Planilla {
            filas: vec![fila("COD1", Celda::Numero(1.0), "Algo")],
        };
        let resultado = previsualizacion_local(&planilla, &lote_base());
        assert!(matches!(
            resultado,
            Err(CargaInicialError::FilaInicioFueraDeRango { fila_inicio: 2, total: 1 })
        ));
    }

    #[test]
    fn test_muestra_respeta_el_tope_y_el_orden() {
        let datos: Vec<Vec<Celda>> = (1..=15)
            .map(|i| fila(&format!("COD{i}"), Celda::Numero(i as f64), "Art"))
            .collect();
        let planilla = planilla_con_encabezado(datos);

        let muestra = previsualizacion_local(&planilla, &lote_base()).unwrap();
        assert_eq!(muestra.len(), LIMITE_MUESTRA);
        assert_eq!(muestra[0].codigo, "COD1");
        assert_eq!(muestra[9].codigo, "COD10");
    }

    #[test]
    fn test_muestra_saltea_filas_sin_codigo() {
        let planilla = planilla_con_encabezado(vec![
            fila("COD1", Celda::Numero(1.0), "Uno"),
            fila("", Celda::Numero(2.0), "Sin código"),
            fila("COD3", Celda::Numero(3.0), "Tres"),
        ]);

        let muestra = previsualizacion_local(&planilla, &lote_base()).unwrap();
        assert_eq!(muestra.len(), 2);
        assert_eq!(muestra[1].codigo, "COD3");
    }

    #[test]
    fn test_coercion_del_costo() {
        let planilla = planilla_con_encabezado(vec![
            fila("C1", Celda::Texto("12.50".to_string()), "A"),
            fila("C2", Celda::Texto("abc".to_string()), "B"),
            fila("C3", Celda::Vacia, "C"),
        ]);

        let muestra = previsualizacion_local(&planilla, &lote_base()).unwrap();
        assert_eq!(muestra[0].costo, CeldaCosto::Numero(12.5));
        assert_eq!(muestra[1].costo, CeldaCosto::Texto("abc".to_string()));
        assert_eq!(muestra[2].costo, CeldaCosto::Texto(String::new()));
    }

    #[test]
    fn test_validacion_marca_costo_invalido() {
        let planilla = planilla_con_encabezado(vec![
            fila("C1", Celda::Numero(10.0), "Bueno"),
            fila("C2", Celda::Texto("abc".to_string()), "Costo malo"),
            fila("C3", Celda::Numero(-1.0), "Negativo"),
        ]);

        let (filas, totales) =
            validar_filas(&planilla, &lote_base(), &ContextoValidacion::default()).unwrap();

        assert!(filas[0].valido);
        assert!(!filas[1].valido);
        assert!(!filas[2].valido);
        assert_eq!(totales.validas, 1);
        assert_eq!(totales.invalidas, 2);
        assert_eq!(totales.filas_unicas, 3);
    }

    #[test]
    fn test_codigo_repetido_gana_la_primera_aparicion() {
        let planilla = planilla_con_encabezado(vec![
            fila("C1", Celda::Numero(10.0), "Primero"),
            fila("C1", Celda::Numero(12.0), "Repetido"),
        ]);

        let (filas, totales) =
            validar_filas(&planilla, &lote_base(), &ContextoValidacion::default()).unwrap();

        assert!(filas[0].valido);
        assert!(!filas[1].valido);
        assert!(filas[1]
            .motivos
            .iter()
            .any(|m| m.contains("repetido")));
        assert_eq!(totales.filas_unicas, 1);
    }

    #[test]
    fn test_colision_contra_productos_existentes() {
        let planilla = planilla_con_encabezado(vec![fila("C1", Celda::Numero(10.0), "Choca")]);
        let contexto = ContextoValidacion {
            codvtas_existentes: ["C1".to_string()].into_iter().collect(),
            ..Default::default()
        };

        let (filas, _) = validar_filas(&planilla, &lote_base(), &contexto).unwrap();
        assert!(filas[0].colision_codvta);
        assert!(!filas[0].valido);
    }

    #[test]
    fn test_conflicto_de_codigo_de_proveedor() {
        let planilla = planilla_con_encabezado(vec![fila("C1", Celda::Numero(10.0), "Ya cargado")]);
        let contexto = ContextoValidacion {
            codigos_existentes: ["C1".to_string()].into_iter().collect(),
            ..Default::default()
        };

        let (filas, _) = validar_filas(&planilla, &lote_base(), &contexto).unwrap();
        assert!(filas[0].conflicto_codigo_proveedor);
        assert!(!filas[0].valido);
    }

    #[test]
    fn test_sin_datos_desde_fila_inicio() {
        // Hay filas pero ninguna con código definido
        let planilla = planilla_con_encabezado(vec![
            fila("", Celda::Numero(1.0), "a"),
            fila("", Celda::Numero(2.0), "b"),
        ]);
        let resultado = validar_filas(&planilla, &lote_base(), &ContextoValidacion::default());
        assert!(matches!(resultado, Err(CargaInicialError::SinDatos)));
    }

    #[test]
    fn test_estrategias_de_codvta() {
        assert_eq!(
            proponer_codvta(CodvtaEstrategia::CodigoProveedor, "ACI", "X9", 3),
            "X9"
        );
        assert_eq!(
            proponer_codvta(CodvtaEstrategia::SiglaMasCodigo, "ACI", "X9", 3),
            "ACI-X9"
        );
        assert_eq!(
            proponer_codvta(CodvtaEstrategia::Correlativo, "ACI", "X9", 3),
            "ACI-00003"
        );
    }

    #[test]
    fn test_estrategia_correlativo_en_orden_del_archivo() {
        let mut lote = lote_base();
        lote.codvta_estrategia = CodvtaEstrategia::Correlativo;
        let planilla = planilla_con_encabezado(vec![
            fila("C1", Celda::Numero(1.0), "Uno"),
            fila("C2", Celda::Numero(2.0), "Dos"),
        ]);
        let contexto = ContextoValidacion {
            sigla: "ACI".to_string(),
            ..Default::default()
        };

        let (filas, _) = validar_filas(&planilla, &lote, &contexto).unwrap();
        assert_eq!(filas[0].codvta_propuesto, "ACI-00001");
        assert_eq!(filas[1].codvta_propuesto, "ACI-00002");
    }
}
