pub mod order_configuration;
pub mod price_breakdown;
