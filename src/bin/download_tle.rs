//! Downloads a TLE file (Celestrak Galileo group by default) and stores it as-is.
//! Settings come from `SKY_EPHEM_CONFIG` and the `SKY_EPHEM_*` overrides.

use env_logger::{Builder, Env};
use sky_ephem::{Config, download_tle};

fn main() -> Result<(), sky_ephem::Error> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::load()?;
    download_tle(&config.tle_url, &config.output_path, config.timeout())?;
    Ok(())
}
