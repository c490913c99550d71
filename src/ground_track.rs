use chrono::{DateTime, Utc};
use log::debug;

use crate::{Error, Result, Satellite, SubPoint};

/// Sub-points from `start` every `step` seconds, for `duration` seconds
/// (end excluded).
pub fn get_track(
    satellite: &Satellite,
    start: &DateTime<Utc>,
    duration: f64,
    step: f64,
) -> Result<Vec<SubPoint>> {
    if !(step.is_finite() && step > 0.) {
        return Err(Error::InvalidTrack(format!("step must be positive, got {}", step)));
    }
    if !(duration.is_finite() && duration >= 0.) {
        return Err(Error::InvalidTrack(format!(
            "duration must be non-negative, got {}",
            duration
        )));
    }
    let start_offset = satellite.seconds_since_epoch(start);
    let count = (duration / step).ceil() as usize;
    debug!(
        "{} track: {} points from {}",
        satellite.get_name(),
        count,
        start
    );
    let mut points = Vec::with_capacity(count);
    for i in 0..count {
        points.push(satellite.get_sub_point(start_offset + i as f64 * step)?);
    }
    Ok(points)
}

/// One full revolution starting at `start`, sampled at `samples` points.
pub fn get_orbit_track(
    satellite: &Satellite,
    start: &DateTime<Utc>,
    samples: usize,
) -> Result<Vec<SubPoint>> {
    if samples == 0 {
        return Err(Error::InvalidTrack("at least one sample is needed".to_string()));
    }
    let period = satellite.get_orbital_period();
    get_track(satellite, start, period, period / samples as f64)
}
