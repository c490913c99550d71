//! Sub-satellite point and position of Earth satellites from two-line
//! element sets, plus a helper to fetch TLE files from Celestrak.
//!
//! Propagation itself is done by the [sgp4] crate. This crate rotates the
//! propagated TEME state into an Earth-fixed frame and solves for the
//! geodetic point under the satellite.

pub use catalog::{find_by_norad_id, load_catalog, load_omm_catalog, parse_omm_catalog};
pub use config::Config;
pub use download::{GALILEO_TLE_URL, download_tle, fetch_tle_text, save_tle_text};
pub use ground_track::{get_orbit_track, get_track};
pub use satellite::Satellite;
pub use types::Eci;
pub use types::SubPoint;

use thiserror::Error;

mod catalog;
mod config;
mod download;
mod ground_track;
mod helpers;
mod satellite;
mod types;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("invalid two-line element set: {0}")]
    Tle(String),
    #[error("propagation failed: {0}")]
    Propagation(String),
    #[error("invalid track request: {0}")]
    InvalidTrack(String),
    #[error("config parsing error: {0}")]
    ConfigParsing(#[from] serde_json::Error),
    #[error("invalid config value for {key}: {value}")]
    InvalidConfig { key: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
