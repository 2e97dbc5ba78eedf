#![cfg_attr(not(all(feature = "csr", target_arch = "wasm32")), allow(dead_code))]

use thiserror::Error;

use crate::config::CalculatorConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum QuoteError {
    #[error("unknown renovation rate `{0}`")]
    UnknownRate(String),
    #[error("unknown property condition `{0}`")]
    UnknownCondition(String),
}

/// Reads the digits of a free-form area value (`"45м"` -> 45). No digits reads as 0.
pub(crate) fn parse_area(raw: &str) -> u32 {
    raw.chars()
        .filter_map(|ch| ch.to_digit(10))
        .fold(0u32, |area, digit| area.saturating_mul(10).saturating_add(digit))
}

pub(crate) fn clamp_area(area: u32, config: &CalculatorConfig) -> u32 {
    area.clamp(config.min_area, config.max_area)
}

pub(crate) fn area_for_step(step: u32, config: &CalculatorConfig) -> u32 {
    step.saturating_add(config.min_area)
}

pub(crate) fn step_for_area(area: u32, config: &CalculatorConfig) -> i64 {
    i64::from(area) - i64::from(config.min_area)
}

pub(crate) fn format_area(area: u32, config: &CalculatorConfig) -> String {
    format!("{area}{}", config.area_suffix)
}

pub(crate) fn quote_price(
    config: &CalculatorConfig,
    rate: &str,
    condition: &str,
    area: u32,
) -> Result<f64, QuoteError> {
    let rate_value = config
        .rates
        .get(rate)
        .ok_or_else(|| QuoteError::UnknownRate(rate.to_string()))?;
    let coefficient = config
        .conditions
        .get(condition)
        .ok_or_else(|| QuoteError::UnknownCondition(condition.to_string()))?;
    Ok(rate_value * f64::from(area) / coefficient)
}

pub(crate) fn format_price(value: f64, config: &CalculatorConfig) -> String {
    format!("{} {}", format_grouped_ru(value), config.currency_suffix)
}

/// Russian-locale number rendering: no-break space thousands groups, comma decimals, at most
/// three fraction digits.
pub(crate) fn format_grouped_ru(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let magnitude = rounded.abs();
    let integer = magnitude.trunc() as u64;
    let fraction = ((magnitude - magnitude.trunc()) * 1000.0).round() as u64;

    let digits = integer.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }

    if fraction > 0 {
        let fraction = format!("{fraction:03}");
        grouped.push(',');
        grouped.push_str(fraction.trim_end_matches('0'));
    }
    if rounded < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::WidgetsConfig;

    fn config() -> CalculatorConfig {
        WidgetsConfig::load().expect("config").calculator
    }

    #[test]
    fn area_parsing_keeps_digits_only() {
        assert_eq!(parse_area("45м"), 45);
        assert_eq!(parse_area(" 1 0 0 "), 100);
        assert_eq!(parse_area("м"), 0);
        assert_eq!(parse_area("99999999999999"), u32::MAX);
    }

    #[test]
    fn area_and_step_are_offset_by_min_area() {
        let config = config();
        assert_eq!(area_for_step(0, &config), 30);
        assert_eq!(area_for_step(70, &config), 100);
        assert_eq!(step_for_area(45, &config), 15);
        assert_eq!(step_for_area(5, &config), -25);
        assert_eq!(clamp_area(5, &config), 30);
        assert_eq!(clamp_area(250, &config), 100);
        assert_eq!(format_area(42, &config), "42м");
    }

    #[test]
    fn price_uses_rate_and_condition_tables() {
        let config = config();
        assert_eq!(quote_price(&config, "partial", "new", 30), Ok(45_000.0));
        assert_eq!(quote_price(&config, "capital", "private", 100), Ok(225_000.0));
        assert_eq!(
            quote_price(&config, "luxury", "new", 30),
            Err(QuoteError::UnknownRate("luxury".to_string()))
        );
        assert_eq!(
            quote_price(&config, "full", "", 30),
            Err(QuoteError::UnknownCondition(String::new()))
        );
    }

    #[test]
    fn prices_render_with_russian_grouping() {
        let config = config();
        assert_eq!(format_grouped_ru(0.0), "0");
        assert_eq!(format_grouped_ru(4500.0), "4\u{a0}500");
        assert_eq!(format_grouped_ru(1_234_567.5), "1\u{a0}234\u{a0}567,5");
        assert_eq!(format_grouped_ru(2500.0 * 31.0 / 1.5), "51\u{a0}666,667");
        assert_eq!(
            format_price(45_000.0, &config),
            "45\u{a0}000 руб."
        );
    }
}
