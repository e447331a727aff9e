pub mod price;
pub mod quantity;
pub mod tier;
