use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TierError {
    #[error("UID tier table is empty")]
    Empty,

    #[error("UID tier bounds must be strictly ascending, found {0} after {1}")]
    Unordered(u64, u64),

    #[error("Only the last UID tier may be open-ended")]
    OpenEndedNotLast,

    #[error("Last UID tier must be open-ended")]
    MissingOpenEnded,

    #[error("Invalid UID code rate: {0}")]
    InvalidRate(f64),
}

/// Per-unit UID code rate applying to quantities up to and including `up_to`.
/// `None` marks the tier that covers everything above the previous bound.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct UidTier {
    pub up_to: Option<u64>,
    pub rate: f64,
}

impl UidTier {
    pub fn bounded(up_to: u64, rate: f64) -> Self {
        Self {
            up_to: Some(up_to),
            rate,
        }
    }

    pub fn open(rate: f64) -> Self {
        Self { up_to: None, rate }
    }

    pub fn covers(&self, quantity: u64) -> bool {
        self.up_to.is_none_or(|bound| quantity <= bound)
    }
}

pub fn default_uid_tiers() -> Vec<UidTier> {
    vec![
        UidTier::bounded(10_000, 0.2),
        UidTier::bounded(50_000, 0.16),
        UidTier::bounded(100_000, 0.1),
        UidTier::open(0.06),
    ]
}

pub fn uid_code_rate(tiers: &[UidTier], quantity: u64) -> f64 {
    tiers
        .iter()
        .find(|tier| tier.covers(quantity))
        .map_or(0.0, |tier| tier.rate)
}

pub fn validate_uid_tiers(tiers: &[UidTier]) -> Result<(), TierError> {
    let (last, bounded) = tiers.split_last().ok_or(TierError::Empty)?;

    if last.up_to.is_some() {
        return Err(TierError::MissingOpenEnded);
    }

    let mut previous: Option<u64> = None;
    for tier in bounded {
        let bound = tier.up_to.ok_or(TierError::OpenEndedNotLast)?;
        if let Some(prev) = previous {
            if bound <= prev {
                return Err(TierError::Unordered(bound, prev));
            }
        }
        previous = Some(bound);
    }

    if let Some(tier) = tiers
        .iter()
        .find(|tier| !tier.rate.is_finite() || tier.rate < 0.0)
    {
        return Err(TierError::InvalidRate(tier.rate));
    }

    Ok(())
}
