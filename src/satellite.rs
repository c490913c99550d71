use std::f64::consts::PI;

use crate::{
    Error, Result,
    helpers::modulus,
    types::{A, Eci, F, SubPoint},
};
use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike, Utc};
use log::debug;
use sgp4::{Constants, Elements};

const MAX_LATITUDE_ITERATIONS: usize = 50;

#[derive(Clone)]
pub struct Satellite {
    constants: Constants,
    name: String,
    norad_id: u64,
    orbital_period: f64,
    epoch: NaiveDateTime, //Epoch of the structs TLE
}

impl Satellite {
    /// Builds a satellite from a TLE block: either name + two element lines,
    /// or the two element lines alone. Surrounding whitespace is ignored.
    pub fn from_tle(tle: &str) -> Result<Satellite> {
        let lines: Vec<&str> = tle
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        match lines.as_slice() {
            [first_line, second_line] => Self::from_parts(None, first_line, second_line),
            [name, first_line, second_line] => {
                Self::from_parts(Some(*name), first_line, second_line)
            }
            _ => Err(Error::Tle(format!(
                "expected 2 or 3 lines, found {}",
                lines.len()
            ))),
        }
    }

    pub fn from_lines(name: &str, first_line: &str, second_line: &str) -> Result<Satellite> {
        Self::from_parts(Some(name.trim()), first_line.trim(), second_line.trim())
    }

    fn from_parts(name: Option<&str>, first_line: &str, second_line: &str) -> Result<Satellite> {
        let elem = Elements::from_tle(
            name.map(str::to_string),
            first_line.as_bytes(),
            second_line.as_bytes(),
        )
        .map_err(|e| Error::Tle(format!("{:?}", e)))?;
        Self::from_elements(elem)
    }

    pub fn from_elements(elem: Elements) -> Result<Satellite> {
        let constants =
            Constants::from_elements(&elem).map_err(|e| Error::Tle(format!("{:?}", e)))?;
        let name = elem
            .object_name
            .clone()
            .unwrap_or_else(|| elem.norad_id.to_string());
        debug!(
            "loaded {} (norad {}), epoch {}",
            name, elem.norad_id, elem.datetime
        );
        Ok(Satellite {
            constants,
            name,
            norad_id: elem.norad_id,
            orbital_period: 1. / elem.mean_motion * 86400.,
            epoch: elem.datetime,
        })
    }

    pub fn get_name(&self) -> String {
        self.name.to_string()
    }
    pub fn get_norad_id(&self) -> u64 {
        self.norad_id
    }
    /// Orbital period in seconds.
    pub fn get_orbital_period(&self) -> f64 {
        self.orbital_period
    }
    pub fn get_epoch(&self) -> DateTime<Utc> {
        self.epoch.and_utc()
    }

    pub fn seconds_since_epoch(&self, other: &DateTime<Utc>) -> f64 {
        let delta = other.signed_duration_since(self.get_epoch());
        match delta.num_nanoseconds() {
            Some(nanos) => nanos as f64 / 1e9,
            None => delta.num_milliseconds() as f64 / 1000.,
        }
    }

    /// Instant `offset` seconds after the TLE epoch.
    pub fn offset_to_datetime(&self, offset: f64) -> Result<DateTime<Utc>> {
        let nanos = (offset * 1e9).round();
        // i64 nanoseconds cover roughly +-292 years around the epoch
        if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
            return Err(Error::Propagation(format!(
                "{} at {}s: offset out of range",
                self.name, offset
            )));
        }
        self.get_epoch()
            .checked_add_signed(Duration::nanoseconds(nanos as i64))
            .ok_or_else(|| {
                Error::Propagation(format!("{} at {}s: offset out of range", self.name, offset))
            })
    }

    ///propagate to a time since epoch in seconds.
    pub fn get_point_eci(&self, offset: f64) -> Result<Eci> {
        let prop = self
            .constants
            .propagate(offset / 60.)
            .map_err(|e| Error::Propagation(format!("{} at {}s: {:?}", self.name, offset, e)))?;
        Ok(Eci {
            x: prop.position[0],
            y: prop.position[1],
            z: prop.position[2],
            vx: prop.velocity[0],
            vy: prop.velocity[1],
            vz: prop.velocity[2],
        })
    }

    pub fn get_point_eci_at(&self, time: &DateTime<Utc>) -> Result<Eci> {
        self.get_point_eci(self.seconds_since_epoch(time))
    }

    pub fn get_speed(&self, offset: f64) -> Result<f64> {
        Ok(self.get_point_eci(offset)?.speed())
    }

    ///compute the sub_point at a given time since epoch in seconds.
    pub fn get_sub_point(&self, offset: f64) -> Result<SubPoint> {
        let time = self.offset_to_datetime(offset)?;
        let eci_point = self.get_point_eci(offset)?;
        Ok(Self::sub_point_direct(&eci_point, &time))
    }

    pub fn get_sub_point_at(&self, time: &DateTime<Utc>) -> Result<SubPoint> {
        let eci_point = self.get_point_eci_at(time)?;
        Ok(Self::sub_point_direct(&eci_point, time))
    }

    pub fn get_sub_point_now(&self) -> Result<SubPoint> {
        self.get_sub_point_at(&Utc::now())
    }

    fn sub_point_direct(satellite: &Eci, time: &DateTime<Utc>) -> SubPoint {
        fn get_lat_and_alt(satellite: &Eci) -> [f64; 2] {
            let r = (satellite.x.powf(2.) + satellite.y.powf(2.)).sqrt();
            let e2 = 2. * F - F * F;
            let mut guess = satellite.z.atan2(r);
            let mut last_guess: f64 = 0.;
            let mut c = 1. / (1. - e2 * guess.sin().powf(2.)).sqrt();
            let mut iterations = 0;
            while (guess.to_degrees() - last_guess.to_degrees()).abs() > 0.00001
                && iterations < MAX_LATITUDE_ITERATIONS
            {
                last_guess = guess;
                c = 1. / (1. - e2 * last_guess.sin().powf(2.)).sqrt();
                guess = (satellite.z + A * c * e2 * last_guess.sin()).atan2(r);
                iterations += 1;
            }
            // r / cos(lat) degenerates close to the poles
            let alt = if guess.abs() > PI / 4. {
                satellite.z / guess.sin() - A * c * (1. - e2)
            } else {
                r / guess.cos() - A * c
            };
            [guess.to_degrees(), alt]
        }
        fn get_long(satellite: &Eci, sidereal_angle: f64) -> f64 {
            let angle = (satellite.y.atan2(satellite.x) - sidereal_angle).to_degrees() + 180.;
            modulus(angle, 360.) - 180.
        }
        let sidereal_angle = Self::sidereal_angle(time);
        let lat_alt = get_lat_and_alt(satellite);
        SubPoint {
            lat: lat_alt[0],
            long: get_long(satellite, sidereal_angle),
            alt: lat_alt[1],
        }
    }

    /// Greenwich mean sidereal time in radians.
    pub fn sidereal_angle(time: &DateTime<Utc>) -> f64 {
        //Meeus' approach from celestrak https://celestrak.org/columns/v02n02/
        let years = time.year() as f64 - 1.;
        let a = (years / 100.).trunc();
        let b = 2. - a + (a / 4.).trunc();
        let julian_year = (365.25 * years).trunc() + (30.6001_f64 * 14.).trunc() + 1720994.5 + b;
        let julian_day = julian_year + time.ordinal() as f64;
        let j2000_day = julian_day - 2451545.0;
        let offset_time =
            time.num_seconds_from_midnight() as f64 + time.nanosecond() as f64 * 1e-9;
        //From https://celestrak.org/publications/AIAA/2006-6753/AIAA-2006-6753-Rev2.pdf
        let offset = offset_time / 86400.;
        let t = j2000_day / 36525.0;
        let theta_0 =
            24110.54841 + 8640184.812866 * t + 0.093104 * t * t - t * t * t * 6.2 * 10_f64.powf(-6.);
        let side_time = modulus(theta_0 + 1.00273790934 * offset * 86400., 86400.);
        2. * PI * side_time / 86400.
    }
}
