use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Reads an order quantity the way the quote form does: leading whitespace is
/// skipped, the leading run of digits is taken and anything after it ignored.
/// Input with no digits, a negative sign, or a value beyond `u64` becomes `0`.
pub fn parse_quantity(input: &str) -> u64 {
    let trimmed = input.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    let digits = &unsigned[..digits_len];

    if digits.is_empty() {
        if !input.trim().is_empty() {
            warn!("Could not read quantity {input:?}, using 0");
        }
        return 0;
    }

    if negative {
        warn!("Negative quantity {input:?}, using 0");
        return 0;
    }

    digits.parse::<u64>().unwrap_or_else(|_| {
        warn!("Quantity {input:?} out of range, using 0");
        0
    })
}

/// Serde adapter for order quantities. Numbers are truncated toward zero, strings
/// go through [`parse_quantity`], and negatives, `null` or anything else become `0`.
pub fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;

    let quantity = match &value {
        Value::Number(number) => match (number.as_u64(), number.as_f64()) {
            (Some(quantity), _) => quantity,
            (None, Some(float)) if (0.0..u64::MAX as f64).contains(&float) => float.trunc() as u64,
            _ => {
                warn!("Quantity {number} is not a valid count, using 0");
                0
            }
        },
        Value::String(text) => parse_quantity(text),
        other => {
            warn!("Could not read quantity {other}, using 0");
            0
        }
    };

    Ok(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1000", 1000)]
    #[case("  42", 42)]
    #[case("+7", 7)]
    #[case("12abc", 12)]
    #[case("3.9", 3)]
    #[case("0", 0)]
    #[case("", 0)]
    #[case("abc", 0)]
    #[case("-5", 0)]
    #[case("-0", 0)]
    #[case("-", 0)]
    #[case("99999999999999999999999", 0)]
    fn coerces_quantity_input(#[case] input: &str, #[case] expected: u64) {
        assert_eq!(parse_quantity(input), expected);
    }

    #[derive(Deserialize)]
    struct Quantity {
        #[serde(deserialize_with = "deserialize_quantity")]
        quantity: u64,
    }

    #[rstest]
    #[case(r#"{"quantity": 2500}"#, 2500)]
    #[case(r#"{"quantity": -5}"#, 0)]
    #[case(r#"{"quantity": 12.7}"#, 12)]
    #[case(r#"{"quantity": -0.5}"#, 0)]
    #[case(r#"{"quantity": 1e30}"#, 0)]
    #[case(r#"{"quantity": "2500"}"#, 2500)]
    #[case(r#"{"quantity": "40 labels"}"#, 40)]
    #[case(r#"{"quantity": "lots"}"#, 0)]
    #[case(r#"{"quantity": null}"#, 0)]
    #[case(r#"{"quantity": true}"#, 0)]
    #[case(r#"{"quantity": [1]}"#, 0)]
    fn coerces_json_quantity(#[case] input: &str, #[case] expected: u64) {
        let parsed: Quantity = serde_json::from_str(input).unwrap();
        assert_eq!(parsed.quantity, expected);
    }
}
