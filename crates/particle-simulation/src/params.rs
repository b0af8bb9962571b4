//! Simulation parameters for runtime tuning

use std::path::Path;

use particle_physics::NEUTRON_LIFETIME;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Simulated seconds per real second
    pub time_scale: f64,
    /// Age (s) past which a free neutron decays
    pub neutron_lifetime_s: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            neutron_lifetime_s: NEUTRON_LIFETIME,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<()> {
        validate_time_scale(self.time_scale)?;
        if !self.neutron_lifetime_s.is_finite() || self.neutron_lifetime_s < 0.0 {
            return Err(Error::InvalidParam(
                "neutron_lifetime_s must be finite and >= 0".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate parameters from JSON; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

pub(crate) fn validate_time_scale(time_scale: f64) -> Result<()> {
    if !time_scale.is_finite() || time_scale < 0.0 {
        return Err(Error::InvalidParam(
            "time_scale must be finite and >= 0".into(),
        ));
    }
    Ok(())
}
