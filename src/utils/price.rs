use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::tier::{TierError, UidTier, default_uid_tiers, uid_code_rate, validate_uid_tiers};
use crate::models::{
    order_configuration::{DigitalService, OrderConfiguration},
    price_breakdown::PriceBreakdown,
};

#[derive(Debug, Error, PartialEq)]
pub enum PricingRatesError {
    #[error("Invalid amount for {0}: {1}")]
    InvalidAmount(&'static str, f64),

    #[error(transparent)]
    Tier(#[from] TierError),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PricingRates {
    pub base_unit_price: f64,
    pub platform_fee: f64,
    /// Annual volume at or above which the platform fee is waived.
    pub platform_fee_waiver_quantity: u64,
    pub domain_binding_fee: f64,
    pub certification_unit_price: f64,
    pub uid_tiers: Vec<UidTier>,
}

impl PricingRates {
    pub fn validate(&self) -> Result<(), PricingRatesError> {
        let amounts = [
            ("base_unit_price", self.base_unit_price),
            ("platform_fee", self.platform_fee),
            ("domain_binding_fee", self.domain_binding_fee),
            ("certification_unit_price", self.certification_unit_price),
        ];

        for (name, amount) in amounts {
            if !amount.is_finite() || amount < 0.0 {
                return Err(PricingRatesError::InvalidAmount(name, amount));
            }
        }

        validate_uid_tiers(&self.uid_tiers)?;

        Ok(())
    }
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            base_unit_price: 0.5,
            platform_fee: 1520.0,
            platform_fee_waiver_quantity: 50_000,
            domain_binding_fee: 155.0,
            certification_unit_price: 0.32,
            uid_tiers: default_uid_tiers(),
        }
    }
}

pub fn calculate_base_price(quantity: u64, rates: &PricingRates) -> f64 {
    quantity as f64 * rates.base_unit_price
}

pub fn calculate_digital_service_price(
    quantity: u64,
    service: &DigitalService,
    rates: &PricingRates,
) -> f64 {
    if !service.enabled {
        return 0.0;
    }

    let code_rate = uid_code_rate(&rates.uid_tiers, quantity);
    let mut price = 0.0;

    if service.platform_fee && quantity < rates.platform_fee_waiver_quantity {
        price += rates.platform_fee;
    }
    if service.domain_binding {
        price += rates.domain_binding_fee;
    }

    price + quantity as f64 * code_rate
}

pub fn calculate_certification_price(
    quantity: u64,
    certification: bool,
    rates: &PricingRates,
) -> f64 {
    if certification {
        quantity as f64 * rates.certification_unit_price
    } else {
        0.0
    }
}

pub fn compute_price(config: &OrderConfiguration, rates: &PricingRates) -> PriceBreakdown {
    let quantity = config.quantity;

    let breakdown = PriceBreakdown::new(
        calculate_base_price(quantity, rates),
        calculate_digital_service_price(quantity, &config.digital_service, rates),
        calculate_certification_price(quantity, config.certification, rates),
    );

    debug!("computed price for quantity {quantity}: {:?}", breakdown);

    breakdown
}
