use serde::{Deserialize, Serialize};
use std::fmt;

use super::order_configuration::OrderConfiguration;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub digital_service_price: f64,
    pub certification_price: f64,
    pub total: f64,
}

impl PriceBreakdown {
    pub fn new(base_price: f64, digital_service_price: f64, certification_price: f64) -> Self {
        Self {
            base_price,
            digital_service_price,
            certification_price,
            total: base_price + digital_service_price + certification_price,
        }
    }
}

impl fmt::Display for PriceBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Price: ${:.2}", self.total)?;
        writeln!(f, "Base Price: ${:.2}", self.base_price)?;
        writeln!(f, "Digital Services: ${:.2}", self.digital_service_price)?;
        write!(f, "Certification: ${:.2}", self.certification_price)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct QuoteResult {
    pub order: OrderConfiguration,
    pub price: PriceBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_sum_of_parts() {
        let breakdown = PriceBreakdown::new(500.0, 1675.0, 320.0);
        assert_eq!(breakdown.total, 2495.0);
    }

    #[test]
    fn display_uses_two_decimals() {
        let breakdown = PriceBreakdown::new(500.0, 200.0, 0.0);
        assert_eq!(
            breakdown.to_string(),
            "Total Price: $700.00\nBase Price: $500.00\nDigital Services: $200.00\nCertification: $0.00"
        );
    }
}
