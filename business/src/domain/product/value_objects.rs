use bigdecimal::BigDecimal;

/// Significant digits a stored price may carry (IEEE 754 decimal128).
pub const MAX_PRICE_DIGITS: u64 = 34;
const MIN_PRICE_SCALE: i64 = -6111;
const MAX_PRICE_SCALE: i64 = 6176;

/// Whether a price can be stored and compared exactly by the product store.
pub fn is_representable_price(price: &BigDecimal) -> bool {
    let (_, scale) = price.as_bigint_and_exponent();
    price.digits() <= MAX_PRICE_DIGITS && (MIN_PRICE_SCALE..=MAX_PRICE_SCALE).contains(&scale)
}

/// Canonical text of a price. Positive-exponent values keep scientific
/// notation (`1E+3`, `1.2E+4`) so they are not widened to plain integers.
pub fn format_price(price: &BigDecimal) -> String {
    let (unscaled, scale) = price.as_bigint_and_exponent();
    if scale >= 0 {
        return price.to_string();
    }

    let text = unscaled.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", text.as_str()),
    };
    let exponent = (digits.len() as i64 - 1) - scale;
    let (lead, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{sign}{lead}E+{exponent}")
    } else {
        format!("{sign}{lead}.{rest}E+{exponent}")
    }
}

/// Open (exclusive) price interval used to filter product listings.
///
/// A missing bound leaves that side unbounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<BigDecimal>,
    pub max: Option<BigDecimal>,
}

impl PriceRange {
    pub fn new(min: Option<BigDecimal>, max: Option<BigDecimal>) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, price: &BigDecimal) -> bool {
        let above_min = self.min.as_ref().is_none_or(|min| price > min);
        let below_max = self.max.as_ref().is_none_or(|max| price < max);
        above_min && below_max
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.min, &self.max) {
            (Some(min), Some(max)) => write!(f, "({min}, {max})"),
            (Some(min), None) => write!(f, "({min}, +inf)"),
            (None, Some(max)) => write!(f, "(-inf, {max})"),
            (None, None) => write!(f, "(-inf, +inf)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn catalog_prices() -> Vec<BigDecimal> {
        ["4500", "6500", "9000", "3000", "7000"]
            .iter()
            .map(|p| dec(p))
            .collect()
    }

    #[test]
    fn should_format_prices_without_losing_notation() {
        assert_eq!(format_price(&dec("8.500")), "8.500");
        assert_eq!(format_price(&dec("4500")), "4500");
        assert_eq!(format_price(&dec("1E+3")), "1E+3");
        assert_eq!(format_price(&dec("12E+3")), "1.2E+4");
        assert_eq!(format_price(&dec("-5E+2")), "-5E+2");
        assert_eq!(dec(&format_price(&dec("12E+3"))), dec("12E+3"));
    }

    #[test]
    fn should_bound_price_precision() {
        assert!(is_representable_price(&dec("8.500")));
        assert!(is_representable_price(&dec("1234567890123456789012345678901234")));
        assert!(!is_representable_price(&dec("12345678901234567890123456789012345678")));
        assert!(!is_representable_price(&dec("1E-7000")));
    }

    fn matching(range: &PriceRange) -> Vec<String> {
        catalog_prices()
            .into_iter()
            .filter(|p| range.contains(p))
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn should_filter_both_bounds_exclusively() {
        let range = PriceRange::new(Some(dec("5000")), Some(dec("8000")));
        assert_eq!(matching(&range), vec!["6500", "7000"]);
    }

    #[test]
    fn should_filter_min_only() {
        let range = PriceRange::new(Some(dec("8000")), None);
        assert_eq!(matching(&range), vec!["9000"]);
    }

    #[test]
    fn should_filter_max_only() {
        let range = PriceRange::new(None, Some(dec("5000")));
        assert_eq!(matching(&range), vec!["4500", "3000"]);
    }

    #[test]
    fn should_match_everything_when_unbounded() {
        let range = PriceRange::unbounded();
        assert!(range.is_unbounded());
        assert_eq!(matching(&range).len(), 5);
    }

    #[test]
    fn should_exclude_bounds_themselves() {
        let range = PriceRange::new(Some(dec("8.500")), Some(dec("9.00")));
        assert!(!range.contains(&dec("8.5")));
        assert!(!range.contains(&dec("9")));
        assert!(range.contains(&dec("8.501")));
    }

    #[test]
    fn should_compare_exact_decimals() {
        // 0.1 + 0.2 is exactly 0.3 in decimal arithmetic
        let sum = dec("0.1") + dec("0.2");
        let range = PriceRange::new(Some(dec("0.3")), None);
        assert!(!range.contains(&sum));
    }

    proptest! {
        #[test]
        fn bounds_are_never_contained(min in -100_000i64..100_000, width in 1i64..10_000) {
            let min = BigDecimal::from(min);
            let max = &min + BigDecimal::from(width);
            let range = PriceRange::new(Some(min.clone()), Some(max.clone()));
            prop_assert!(!range.contains(&min));
            prop_assert!(!range.contains(&max));
        }
    }
}
