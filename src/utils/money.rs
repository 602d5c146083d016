// ============================================================================
// MONEY - Precios en centavos enteros
// ============================================================================
// El backend manda precios como strings decimales ("25.00"); internamente
// todo se maneja en centavos para que los totales derivados sean exactos.
// ============================================================================

/// Parsear un precio decimal del wire ("25.00", "3", "2.5") a centavos
pub fn parse_price_cents(raw: &str) -> Result<u32, String> {
    let value = raw.trim();
    let value = value.strip_prefix('$').unwrap_or(value);
    if value.is_empty() {
        return Err(format!("Precio vacío: {:?}", raw));
    }

    let (whole, frac) = match value.split_once('.') {
        Some((w, f)) => (w, f),
        None => (value, ""),
    };

    if frac.len() > 2 {
        return Err(format!("Precio con más de dos decimales: {:?}", raw));
    }

    let whole: u32 = whole
        .parse()
        .map_err(|_| format!("Precio inválido: {:?}", raw))?;

    let frac_cents: u32 = match frac.len() {
        0 => 0,
        len => {
            let digits: u32 = frac
                .parse()
                .map_err(|_| format!("Precio inválido: {:?}", raw))?;
            if len == 1 {
                digits * 10
            } else {
                digits
            }
        }
    };

    whole
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(frac_cents))
        .ok_or_else(|| format!("Precio fuera de rango: {:?}", raw))
}

/// Formatear centavos para mostrar en pantalla: 1599 → "$15.99"
pub fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsea_precios_del_wire() {
        assert_eq!(parse_price_cents("25.00"), Ok(2500));
        assert_eq!(parse_price_cents("12.50"), Ok(1250));
        assert_eq!(parse_price_cents("3"), Ok(300));
        assert_eq!(parse_price_cents("2.5"), Ok(250));
        assert_eq!(parse_price_cents("$2.99"), Ok(299));
        assert_eq!(parse_price_cents(" 0.05 "), Ok(5));
    }

    #[test]
    fn rechaza_precios_invalidos() {
        assert!(parse_price_cents("").is_err());
        assert!(parse_price_cents("abc").is_err());
        assert!(parse_price_cents("1.234").is_err());
        assert!(parse_price_cents("-1.00").is_err());
        assert!(parse_price_cents(".99").is_err());
    }

    #[test]
    fn formatea_centavos() {
        assert_eq!(format_cents(1599), "$15.99");
        assert_eq!(format_cents(299), "$2.99");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(0), "$0.00");
    }
}
