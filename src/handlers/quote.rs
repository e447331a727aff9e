use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    models::{
        order_configuration::OrderConfiguration,
        price_breakdown::{PriceBreakdown, QuoteResult},
    },
    utils::price::{PricingRates, compute_price},
};

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Failed to read or write quote stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize quote: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub fn handle_quote(order: OrderConfiguration, rates: &PricingRates) -> QuoteResult {
    for option in order.unmet_digital_requirements() {
        warn!("{} selected without the digital service", option.label());
    }

    let price: PriceBreakdown = compute_price(&order, rates);

    info!(
        "quote for {} labels: total {:.2}",
        order.quantity, price.total
    );

    QuoteResult { order, price }
}

pub fn render_quote(result: &QuoteResult, json: bool) -> Result<String, QuoteError> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.price.to_string())
    }
}

/// Quotes one JSON order per input line and writes one JSON result per line.
/// Lines that do not parse are logged and skipped. Returns the number of quotes written.
pub fn handle_quote_stream<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    rates: &PricingRates,
) -> Result<usize, QuoteError> {
    let mut written = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let order: OrderConfiguration = match serde_json::from_str(&line) {
            Ok(order) => order,
            Err(e) => {
                error!("Skipping line {}: {e}", index + 1);
                continue;
            }
        };

        let result = handle_quote(order, rates);
        serde_json::to_writer(&mut writer, &result)?;
        writeln!(writer)?;
        writer.flush()?;
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order_configuration::DigitalService;

    #[test]
    fn text_render_matches_breakdown_display() {
        let result = handle_quote(OrderConfiguration::default(), &PricingRates::default());
        let text = render_quote(&result, false).unwrap();
        assert!(text.starts_with("Total Price: $500.00"));
    }

    #[test]
    fn json_render_carries_order_and_price() {
        let order = OrderConfiguration {
            quantity: 2000,
            digital_service: DigitalService {
                enabled: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let result = handle_quote(order, &PricingRates::default());
        let value: serde_json::Value =
            serde_json::from_str(&render_quote(&result, true).unwrap()).unwrap();

        assert_eq!(value["order"]["quantity"], 2000);
        assert_eq!(value["price"]["base_price"], 1000.0);
    }
}
