use std::io::{Cursor, Write};

use labelquote::{
    config::{Settings, SettingsError},
    handlers::quote::handle_quote_stream,
    models::price_breakdown::QuoteResult,
    utils::{
        price::{PricingRates, PricingRatesError},
        tier::TierError,
    },
};
use tempfile::NamedTempFile;

fn settings_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn settings_override_rates() {
    let file = settings_file(
        r#"
[rates]
base_unit_price = 0.75
platform_fee = 1000.0

[[rates.uid_tiers]]
up_to = 5000
rate = 0.3

[[rates.uid_tiers]]
rate = 0.05

[output]
json = true
"#,
    );

    let settings = Settings::load(&Some(file.path().to_string_lossy().into_owned())).unwrap();

    assert_eq!(settings.rates.base_unit_price, 0.75);
    assert_eq!(settings.rates.platform_fee, 1000.0);
    assert_eq!(settings.rates.domain_binding_fee, 155.0);
    assert_eq!(settings.rates.uid_tiers.len(), 2);
    assert_eq!(settings.rates.uid_tiers[0].up_to, Some(5000));
    assert_eq!(settings.rates.uid_tiers[1].up_to, None);
    assert!(settings.output.json);
}

#[test]
fn settings_reject_tier_table_without_open_tier() {
    let file = settings_file(
        r#"
[[rates.uid_tiers]]
up_to = 5000
rate = 0.3
"#,
    );

    let result = Settings::load(&Some(file.path().to_string_lossy().into_owned()));

    assert!(matches!(
        result,
        Err(SettingsError::Invalid(PricingRatesError::Tier(
            TierError::MissingOpenEnded
        )))
    ));
}

#[test]
fn stream_quotes_each_line_and_skips_bad_input() {
    let input = concat!(
        r#"{"quantity": 10000, "digital_service": {"enabled": true}}"#,
        "\n",
        "\n",
        "not json\n",
        r#"{"quantity": 1000, "certification": true}"#,
        "\n",
    );
    let mut output = Vec::new();

    let count =
        handle_quote_stream(Cursor::new(input), &mut output, &PricingRates::default()).unwrap();

    assert_eq!(count, 2);

    let results: Vec<QuoteResult> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(results[0].order.quantity, 10_000);
    assert!((results[0].price.digital_service_price - 2000.0).abs() < 1e-6);
    assert_eq!(results[0].price.certification_price, 0.0);

    assert_eq!(results[1].price.base_price, 500.0);
    assert!((results[1].price.certification_price - 320.0).abs() < 1e-6);
    assert_eq!(results[1].price.digital_service_price, 0.0);
}

#[test]
fn stream_coerces_malformed_quantities_to_a_quote() {
    let input = concat!(
        r#"{"quantity": -5}"#,
        "\n",
        r#"{"quantity": "2500"}"#,
        "\n",
        r#"{"quantity": 12.7}"#,
        "\n",
        r#"{"quantity": null}"#,
        "\n",
    );
    let mut output = Vec::new();

    let count =
        handle_quote_stream(Cursor::new(input), &mut output, &PricingRates::default()).unwrap();

    assert_eq!(count, 4);

    let quantities: Vec<(u64, f64)> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str::<QuoteResult>(line).unwrap())
        .map(|result| (result.order.quantity, result.price.base_price))
        .collect();

    assert_eq!(
        quantities,
        vec![(0, 0.0), (2500, 1250.0), (12, 6.0), (0, 0.0)]
    );
}
