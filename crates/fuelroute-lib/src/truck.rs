//! Truck value records and validation.

use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Static parameters of a truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truck {
    /// Tank capacity in volume units.
    pub capacity: Decimal,
    /// Reserve volume that is never spendable.
    pub min_volume: Decimal,
    /// Distance covered per volume unit of fuel.
    pub mpg: Decimal,
}

impl Truck {
    /// Validate the truck parameters.
    pub fn validate(&self) -> Result<()> {
        if self.min_volume < Decimal::ZERO {
            return Err(Error::TruckValidation {
                message: format!("min_volume must be non-negative, got {}", self.min_volume),
            });
        }
        if self.capacity <= self.min_volume {
            return Err(Error::TruckValidation {
                message: format!(
                    "capacity ({}) must exceed min_volume ({})",
                    self.capacity, self.min_volume
                ),
            });
        }
        if self.mpg <= Decimal::ZERO {
            return Err(Error::TruckValidation {
                message: format!("mpg must be positive, got {}", self.mpg),
            });
        }
        Ok(())
    }
}

/// A truck together with its current fuel volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruckState {
    pub truck: Truck,
    /// Fuel volume currently in the tank, reserve included.
    pub volume: Decimal,
}

impl TruckState {
    /// Validate the truck and the current volume against it.
    pub fn validate(&self) -> Result<()> {
        self.truck.validate()?;
        if self.volume < self.truck.min_volume {
            return Err(Error::TruckValidation {
                message: format!(
                    "volume ({}) must not fall below the reserve ({})",
                    self.volume, self.truck.min_volume
                ),
            });
        }
        if self.volume > self.truck.capacity {
            return Err(Error::TruckValidation {
                message: format!(
                    "volume ({}) must not exceed capacity ({})",
                    self.volume, self.truck.capacity
                ),
            });
        }
        Ok(())
    }

    /// Fuel volume available for spending above the reserve.
    pub fn usable_volume(&self) -> Decimal {
        self.volume - self.truck.min_volume
    }
}
