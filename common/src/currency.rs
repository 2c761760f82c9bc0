/// All storefront prices are in euros; the ordering service fixes the
/// currency, so display formatting is a fixed symbol and two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("€{amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_display() {
        assert_eq!(format_amount(19.5), "€19.50");
        assert_eq!(format_amount(0.0), "€0.00");
        assert_eq!(format_amount(120.0), "€120.00");
    }

    #[test]
    fn test_fractional_cents_round() {
        assert_eq!(format_amount(4.999), "€5.00");
        assert_eq!(format_amount(3.141), "€3.14");
    }
}
