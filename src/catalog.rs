use std::fs;
use std::path::Path;

use log::{debug, warn};
use sgp4::Elements;

use crate::{Error, Result, Satellite};

/// Reads a file of 3-line TLE records, as served by Celestrak, into satellites.
/// Records whose elements cannot initialise the propagator are skipped.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Satellite>> {
    let text = fs::read_to_string(path.as_ref())?;
    let elements =
        sgp4::parse_3les(&text).map_err(|e| Error::Tle(format!("{:?}", e)))?;
    debug!(
        "{} records in {}",
        elements.len(),
        path.as_ref().display()
    );
    Ok(build_catalog(elements))
}

/// Reads a JSON array of OMM records (Celestrak `FORMAT=json`).
pub fn load_omm_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<Satellite>> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_omm_catalog(&text)
}

pub fn parse_omm_catalog(json: &str) -> Result<Vec<Satellite>> {
    let elements: Vec<Elements> =
        serde_json::from_str(json).map_err(|e| Error::Tle(format!("OMM: {}", e)))?;
    debug!("{} OMM records", elements.len());
    Ok(build_catalog(elements))
}

fn build_catalog(elements: Vec<Elements>) -> Vec<Satellite> {
    let mut satellites = Vec::with_capacity(elements.len());
    for elem in elements {
        let norad_id = elem.norad_id;
        match Satellite::from_elements(elem) {
            Ok(sat) => satellites.push(sat),
            Err(e) => warn!("skipping norad {}: {}", norad_id, e),
        }
    }
    satellites
}

pub fn find_by_norad_id(satellites: &[Satellite], norad_id: u64) -> Option<&Satellite> {
    satellites.iter().find(|sat| sat.get_norad_id() == norad_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "ISS (ZARYA)
1 25544U 98067A   12304.22916904  .00016548  00000-0  28330-3 0  5509
2 25544  51.6482 170.5822 0016684 224.8813 236.0409 15.51231918798998
GSAT0101 (GALILEO-PFM)
1 37846U 11060A   24247.73900373 -.00000105  00000+0  00000+0 0  9992
2 37846  57.1274 359.4123 0001042  74.3951 285.6259  1.70476006 80016
";

    const OMM: &str = r#"[
    {
        "OBJECT_NAME": "ISS (ZARYA)",
        "OBJECT_ID": "1998-067A",
        "EPOCH": "2020-07-12T01:19:07.402656",
        "MEAN_MOTION": 15.49560532,
        "ECCENTRICITY": 0.0001771,
        "INCLINATION": 51.6435,
        "RA_OF_ASC_NODE": 225.4004,
        "ARG_OF_PERICENTER": 44.9625,
        "MEAN_ANOMALY": 5.1087,
        "EPHEMERIS_TYPE": 0,
        "CLASSIFICATION_TYPE": "U",
        "NORAD_CAT_ID": 25544,
        "ELEMENT_SET_NO": 999,
        "REV_AT_EPOCH": 23587,
        "BSTAR": 0.0049645,
        "MEAN_MOTION_DOT": 0.00289036,
        "MEAN_MOTION_DDOT": 0
    },
    {
        "OBJECT_NAME": "BROKEN",
        "OBJECT_ID": "2000-001A",
        "EPOCH": "2020-07-12T00:00:00.000000",
        "MEAN_MOTION": -15.0,
        "ECCENTRICITY": 1.5,
        "INCLINATION": 51.6435,
        "RA_OF_ASC_NODE": 225.4004,
        "ARG_OF_PERICENTER": 44.9625,
        "MEAN_ANOMALY": 5.1087,
        "EPHEMERIS_TYPE": 0,
        "CLASSIFICATION_TYPE": "U",
        "NORAD_CAT_ID": 99999,
        "ELEMENT_SET_NO": 999,
        "REV_AT_EPOCH": 1,
        "BSTAR": 0.0,
        "MEAN_MOTION_DOT": 0.0,
        "MEAN_MOTION_DDOT": 0
    }
]"#;

    #[test]
    fn test_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.txt");
        fs::write(&path, CATALOG).unwrap();
        let satellites = load_catalog(&path).unwrap();
        assert_eq!(satellites.len(), 2);
        let galileo = find_by_norad_id(&satellites, 37846).unwrap();
        assert_eq!(galileo.get_name(), "GSAT0101 (GALILEO-PFM)");
        assert!(find_by_norad_id(&satellites, 1).is_none());
    }

    #[test]
    fn test_load_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_catalog(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_omm_catalog_skips_unusable_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("norad.json");
        fs::write(&path, OMM).unwrap();
        let satellites = load_omm_catalog(&path).unwrap();
        assert_eq!(satellites.len(), 1);
        let iss = find_by_norad_id(&satellites, 25544).unwrap();
        assert_eq!(iss.get_name(), "ISS (ZARYA)");
        assert!(find_by_norad_id(&satellites, 99999).is_none());
        let point = iss.get_sub_point(0.).unwrap();
        assert!(point.lat.abs() <= 52.1);
    }

    #[test]
    fn test_bad_omm_json() {
        assert!(matches!(
            parse_omm_catalog(r#"[{"OBJECT_NAME": "ISS"}]"#),
            Err(Error::Tle(_))
        ));
    }
}
