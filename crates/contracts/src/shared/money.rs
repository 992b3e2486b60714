//! Money arithmetic used by the pricing screens

/// Rounds to cents, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sale price for a provider price `provider_price` and a profit percentage
/// `profit_percent`: `round2(p * (1 + x / 100))`.
pub fn sale_price(provider_price: f64, profit_percent: f64) -> f64 {
    round2(provider_price * (1.0 + profit_percent / 100.0))
}

/// Profit percentage implied by a sale price, `None` for a free provider price.
pub fn margin_percent(provider_price: f64, sale_price: f64) -> Option<f64> {
    if provider_price <= 0.0 {
        return None;
    }
    Some(round2((sale_price / provider_price - 1.0) * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_price() {
        assert_eq!(sale_price(1.00, 10.0), 1.10);
        assert_eq!(sale_price(0.40, 25.0), 0.50);
        assert_eq!(sale_price(12.0, 0.0), 12.0);
        assert_eq!(sale_price(2.5, 100.0), 5.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.005_1), 1.01);
        assert_eq!(round2(-2.346), -2.35);
    }

    #[test]
    fn test_margin_percent() {
        assert_eq!(margin_percent(2.0, 2.5), Some(25.0));
        assert_eq!(margin_percent(0.0, 1.0), None);
    }
}
