pub fn modulus(a: f64, b: f64) -> f64 {
    ((a % b) + b) % b
}

/// Formats decimal degrees as `d:mm:ss.s`, the way ephemeris tools print angles.
pub fn format_sexagesimal(degrees: f64) -> String {
    let sign = if degrees < 0. { "-" } else { "" };
    // tenths of an arcsecond, rounded once so carries propagate upward
    let tenths = (degrees.abs() * 36000.).round() as u64;
    let deg = tenths / 36000;
    let min = (tenths % 36000) / 600;
    let sec = (tenths % 600) as f64 / 10.;
    format!("{}{}:{:02}:{:04.1}", sign, deg, min, sec)
}

#[cfg(test)]
pub fn assert_almost_eq(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() <= tolerance,
        "{} and {} differ by more than {}",
        a,
        b,
        tolerance
    );
}
