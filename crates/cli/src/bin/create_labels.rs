use anyhow::Result;
use fmcourses_cli::{create_labels, init_logging, Config};

fn main() -> Result<()> {
    init_logging()?;
    let config = Config::load()?;

    create_labels(&config)
}
