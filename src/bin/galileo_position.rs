//! Prints the current sub-satellite point and TEME position (km) of GSAT0101.

use chrono::Utc;
use env_logger::{Builder, Env};
use log::info;
use sky_ephem::Satellite;

const NAME: &str = "GSAT0101 (GALILEO-PFM)";
const LINE1: &str = "1 37846U 11060A   24247.73900373 -.00000105  00000+0  00000+0 0  9992";
const LINE2: &str = "2 37846  57.1274 359.4123 0001042  74.3951 285.6259  1.70476006 80016";

fn main() -> Result<(), sky_ephem::Error> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let sat = Satellite::from_lines(NAME, LINE1, LINE2)?;
    let now = Utc::now();
    info!(
        "{} propagated {:.1} days past its epoch",
        sat.get_name(),
        sat.seconds_since_epoch(&now) / 86400.
    );
    let sub_point = sat.get_sub_point_at(&now)?;
    let position = sat.get_point_eci_at(&now)?;
    println!("{}", sub_point);
    println!("{:.3} {:.3} {:.3}", position.x, position.y, position.z);
    Ok(())
}
