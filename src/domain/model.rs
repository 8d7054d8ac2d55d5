use crate::utils::error::{CourierError, Result};
use crate::utils::validation;
use std::fmt;
use std::str::FromStr;

/// Service tiers are a closed set; each carries its own cost rate.
/// A new tier is added as a new variant with its rate, not by
/// touching the existing arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTier {
    Standard,
    Express,
}

impl ServiceTier {
    pub fn rate_per_kg(&self) -> f64 {
        match self {
            ServiceTier::Standard => 2.5,
            ServiceTier::Express => 4.0,
        }
    }
}

impl FromStr for ServiceTier {
    type Err = CourierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(ServiceTier::Standard),
            "express" => Ok(ServiceTier::Express),
            _ => Err(CourierError::UnknownTier {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceTier::Standard => write!(f, "Standard"),
            ServiceTier::Express => write!(f, "Express"),
        }
    }
}

/// One registered shipment. Fields are validated at construction and
/// never change afterwards; a `Package` cannot exist in an invalid state.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    tracking_id: String,
    destination: String,
    weight: f64,
    tier: ServiceTier,
}

impl Package {
    /// Builds a package, validating every field. Fails atomically: an
    /// error means no record was produced at all.
    pub fn new(
        tracking_id: impl Into<String>,
        destination: impl Into<String>,
        weight: f64,
        tier: ServiceTier,
    ) -> Result<Self> {
        let tracking_id = tracking_id.into();
        let destination = destination.into();

        validation::validate_tracking_id(&tracking_id)?;
        validation::validate_destination(&destination)?;
        validation::validate_weight(weight)?;

        Ok(Self {
            tracking_id,
            destination,
            weight,
            tier,
        })
    }

    pub fn tracking_id(&self) -> &str {
        &self.tracking_id
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn tier(&self) -> ServiceTier {
        self.tier
    }

    /// Pure function of weight and tier.
    pub fn shipping_cost(&self) -> f64 {
        self.weight * self.tier.rate_per_kg()
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tracking ID: {} | Destination: {} | Weight: {} | Tier: {} | Cost: ${:.2}",
            self.tracking_id,
            self.destination,
            self.weight,
            self.tier,
            self.shipping_cost()
        )
    }
}
