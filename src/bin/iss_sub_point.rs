//! Prints the current sub-satellite longitude and latitude of the ISS.

use env_logger::{Builder, Env};
use sky_ephem::Satellite;

const NAME: &str = "ISS (ZARYA)";
const LINE1: &str = "1 25544U 98067A   12304.22916904  .00016548  00000-0  28330-3 0  5509";
const LINE2: &str = "2 25544  51.6482 170.5822 0016684 224.8813 236.0409 15.51231918798998";

fn main() -> Result<(), sky_ephem::Error> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let sat = Satellite::from_lines(NAME, LINE1, LINE2)?;
    let sub_point = sat.get_sub_point_now()?;
    println!("{}", sub_point);
    Ok(())
}
