use anyhow::Result;
use fmcourses_cli::{init_logging, update_courses, Config};

fn main() -> Result<()> {
    init_logging()?;
    let config = Config::load()?;

    update_courses(&config)
}
