use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::helpers::format_sexagesimal;

pub const F: f64 = 1. / 298.257223563;
pub const A: f64 = 6378.137; //km

/// TEME state vector. Position in km, velocity in km/s.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Eci {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

impl Eci {
    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
    pub fn speed(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy + self.vz * self.vz).sqrt()
    }
}

/// Point on the WGS-84 ellipsoid directly beneath a satellite.
/// Degrees for lat/long, km for alt.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubPoint {
    pub lat: f64,
    pub long: f64,
    pub alt: f64,
}

impl Display for SubPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            format_sexagesimal(self.long),
            format_sexagesimal(self.lat)
        )
    }
}
