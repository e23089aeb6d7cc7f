//! Decodificación del archivo subido a una grilla de filas.
//!
//! Soporta .xlsx/.xls/.ods vía calamine (solo la primera hoja) y .csv con el
//! crate csv. La grilla es el insumo común de la muestra local y de la
//! previsualización del servidor.

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

use super::error::CargaInicialError;

/// Celda cruda de la planilla
#[derive(Debug, Clone, PartialEq)]
pub enum Celda {
    Vacia,
    Numero(f64),
    Texto(String),
}

impl Celda {
    /// Una celda cuenta como "definida" si no está vacía ni es solo espacios
    pub fn es_definida(&self) -> bool {
        match self {
            Celda::Vacia => false,
            Celda::Numero(_) => true,
            Celda::Texto(s) => !s.trim().is_empty(),
        }
    }

    /// Representación de texto recortada; los números sin ceros de más
    pub fn como_texto(&self) -> String {
        match self {
            Celda::Vacia => String::new(),
            Celda::Numero(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Celda::Texto(s) => s.trim().to_string(),
        }
    }

    /// Valor numérico si la celda es un número o un texto parseable
    pub fn como_numero(&self) -> Option<f64> {
        match self {
            Celda::Vacia => None,
            Celda::Numero(n) => Some(*n),
            Celda::Texto(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Grilla de filas de la primera hoja del archivo
#[derive(Debug, Clone, Default)]
pub struct Planilla {
    pub filas: Vec<Vec<Celda>>,
}

impl Planilla {
    /// Celda en (fila, columna), 0-based; fuera de rango cuenta como vacía
    pub fn celda(&self, fila: usize, columna: usize) -> &Celda {
        self.filas
            .get(fila)
            .and_then(|f| f.get(columna))
            .unwrap_or(&Celda::Vacia)
    }

    pub fn cantidad_filas(&self) -> usize {
        self.filas.len()
    }
}

/// Decodifica los bytes subidos según la extensión del nombre de archivo
pub fn leer_planilla(nombre_archivo: &str, datos: &[u8]) -> Result<Planilla, CargaInicialError> {
    if nombre_archivo.to_lowercase().ends_with(".csv") {
        leer_csv(datos)
    } else {
        leer_libro(datos)
    }
}

fn leer_csv(datos: &[u8]) -> Result<Planilla, CargaInicialError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(datos);

    let mut filas = Vec::new();
    for registro in reader.records() {
        let registro = registro.map_err(|e| CargaInicialError::Archivo(e.to_string()))?;
        let fila = registro
            .iter()
            .map(|campo| {
                if campo.trim().is_empty() {
                    Celda::Vacia
                } else if let Ok(n) = campo.trim().parse::<f64>() {
                    Celda::Numero(n)
                } else {
                    Celda::Texto(campo.to_string())
                }
            })
            .collect();
        filas.push(fila);
    }

    Ok(Planilla { filas })
}

fn leer_libro(datos: &[u8]) -> Result<Planilla, CargaInicialError> {
    let cursor = Cursor::new(datos.to_vec());
    let mut libro = open_workbook_auto_from_rs(cursor)
        .map_err(|e| CargaInicialError::Archivo(e.to_string()))?;

    // Solo la primera hoja, igual que la pantalla original
    let rango = libro
        .worksheet_range_at(0)
        .ok_or_else(|| CargaInicialError::Archivo("el libro no tiene hojas".to_string()))?
        .map_err(|e| CargaInicialError::Archivo(e.to_string()))?;

    let filas = rango
        .rows()
        .map(|fila| fila.iter().map(celda_desde_dato).collect())
        .collect();

    Ok(Planilla { filas })
}

fn celda_desde_dato(dato: &Data) -> Celda {
    match dato {
        Data::Empty => Celda::Vacia,
        Data::String(s) => Celda::Texto(s.clone()),
        Data::Float(f) => Celda::Numero(*f),
        Data::Int(i) => Celda::Numero(*i as f64),
        Data::Bool(b) => Celda::Texto(b.to_string()),
        Data::DateTime(dt) => Celda::Numero(dt.as_f64()),
        Data::DateTimeIso(s) => Celda::Texto(s.clone()),
        Data::DurationIso(s) => Celda::Texto(s.clone()),
        // Celdas con error de fórmula se tratan como vacías
        Data::Error(_) => Celda::Vacia,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_basico() {
        let datos = b"COD1,10.5,Martillo\nCOD2,abc,Destornillador\n";
        let planilla = leer_planilla("lista.csv", datos).unwrap();

        assert_eq!(planilla.cantidad_filas(), 2);
        assert_eq!(planilla.celda(0, 0), &Celda::Texto("COD1".to_string()));
        assert_eq!(planilla.celda(0, 1), &Celda::Numero(10.5));
        assert_eq!(planilla.celda(1, 1), &Celda::Texto("abc".to_string()));
    }

    #[test]
    fn test_csv_celdas_vacias_y_fuera_de_rango() {
        let datos = b"COD1,,Martillo\n";
        let planilla = leer_planilla("lista.csv", datos).unwrap();

        assert_eq!(planilla.celda(0, 1), &Celda::Vacia);
        // Fuera de rango cuenta como vacía
        assert_eq!(planilla.celda(0, 9), &Celda::Vacia);
        assert_eq!(planilla.celda(5, 0), &Celda::Vacia);
    }

    #[test]
    fn test_csv_filas_desparejas() {
        let datos = b"COD1,10,Martillo\nCOD2\n";
        let planilla = leer_planilla("lista.csv", datos).unwrap();
        assert_eq!(planilla.cantidad_filas(), 2);
        assert_eq!(planilla.celda(1, 0), &Celda::Texto("COD2".to_string()));
    }

    #[test]
    fn test_libro_corrupto_no_panickea() {
        let datos = b"esto no es un xlsx";
        let resultado = leer_planilla("lista.xlsx", datos);
        assert!(matches!(resultado, Err(CargaInicialError::Archivo(_))));
    }

    #[test]
    fn test_celda_como_texto() {
        assert_eq!(Celda::Numero(12.0).como_texto(), "12");
        assert_eq!(Celda::Numero(12.5).como_texto(), "12.5");
        assert_eq!(Celda::Texto("  hola  ".to_string()).como_texto(), "hola");
        assert_eq!(Celda::Vacia.como_texto(), "");
    }

    #[test]
    fn test_celda_como_numero() {
        assert_eq!(Celda::Texto("12.50".to_string()).como_numero(), Some(12.5));
        assert_eq!(Celda::Texto("abc".to_string()).como_numero(), None);
        assert_eq!(Celda::Vacia.como_numero(), None);
    }
}
