//! Demo configuration file.
//!
//! Every section is optional; a missing file or `{}` runs the reference
//! promenade.
//!
//! ```json
//! {
//!   "sim":        { "seed": 7, "total_ticks": 2000 },
//!   "population": { "singles": { "count": 30 } },
//!   "geometry":   { "lane_scale": 40.0 },
//!   "output_dir": "output/promenade",
//!   "live_ms":    1500
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use pm_agent::PopulationConfig;
use pm_core::{PathGeometry, SimConfig};

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub sim:        SimConfig,
    pub population: PopulationConfig,
    pub geometry:   PathGeometry,
    /// Where the batch run writes its CSV files.
    pub output_dir: PathBuf,
    /// Wall-clock length of the paced run; 0 skips it.
    pub live_ms:    u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:        SimConfig::default(),
            population: PopulationConfig::default(),
            geometry:   PathGeometry::REFERENCE,
            output_dir: PathBuf::from("output/promenade"),
            live_ms:    1_000,
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let config = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }
}
