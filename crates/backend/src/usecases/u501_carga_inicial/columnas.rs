//! Conversión de letras de columna de planilla a índices 0-based.

/// Convierte una letra de columna ("A", "B", ..., "AA") a su índice 0-based
/// con aritmética posicional en base 26: 'A'→0, 'Z'→25, 'AA'→26.
///
/// Entrada vacía devuelve 0. No hay chequeo de rango: una entrada con
/// caracteres raros produce un resultado aritmético, no un error, igual que
/// hacía la pantalla original.
pub fn indice_columna(letra: &str) -> usize {
    let recortada = letra.trim();
    if recortada.is_empty() {
        return 0;
    }

    // Saturante: una entrada absurdamente larga da un índice gigante (que la
    // planilla resuelve como celda vacía), nunca un desborde
    let mut valor: i64 = 0;
    for c in recortada.chars() {
        let mayuscula = c.to_ascii_uppercase();
        valor = valor
            .saturating_mul(26)
            .saturating_add(mayuscula as i64 - 'A' as i64 + 1);
    }

    (valor - 1).max(0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letras_simples() {
        assert_eq!(indice_columna("A"), 0);
        assert_eq!(indice_columna("B"), 1);
        assert_eq!(indice_columna("Z"), 25);
    }

    #[test]
    fn test_letras_dobles() {
        assert_eq!(indice_columna("AA"), 26);
        assert_eq!(indice_columna("AB"), 27);
        assert_eq!(indice_columna("AZ"), 51);
        assert_eq!(indice_columna("BA"), 52);
    }

    #[test]
    fn test_vacia_devuelve_cero() {
        assert_eq!(indice_columna(""), 0);
        assert_eq!(indice_columna("   "), 0);
    }

    #[test]
    fn test_entrada_larga_no_desborda() {
        // 15 letras ya exceden i64 con aritmética ingenua
        let idx = indice_columna("AAAAAAAAAAAAAAA");
        assert!(idx > indice_columna("ZZZZ"));
        assert_eq!(indice_columna("ZZZZZZZZZZZZZZZZZZZZ"), (i64::MAX - 1) as usize);
    }

    #[test]
    fn test_minusculas() {
        assert_eq!(indice_columna("a"), 0);
        assert_eq!(indice_columna("aa"), 26);
    }
}
