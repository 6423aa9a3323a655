use std::{
    env,
    fs::File,
    io::{self, BufReader, Write},
};

use anyhow::{Context, Result};
use fmcourses::{
    build_courses,
    export::export_to_file,
    labels::{load_countries, missing_labels, random_color},
    Catalogue,
};
use fmcourses_client::Client;
use log::info;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

pub mod config;

pub use config::Config;

/// Set this to get debug logs, including raw API responses
pub const DEBUG_VAR: &str = "FMCOURSES_DEBUG";

/// Log to stderr, so stdout stays free for printed emails
pub fn init_logging() -> Result<()> {
    let level = if env::var_os(DEBUG_VAR).is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    Ok(())
}

fn connect(config: &Config) -> Result<Client> {
    Client::new(config.token()?, &config.repository)
        .with_context(|| format!("error setting up client for {}", config.repository))
}

/// Rebuild the courses script from the open issues
pub fn update_courses(config: &Config) -> Result<()> {
    let client = connect(config)?;

    info!("fetching open issues from {}", client.repository());
    let issues = client.get_issues().context("error fetching issues")?;
    let courses = build_courses(&issues);

    if config.print_emails {
        let mut stdout = io::stdout().lock();
        for email in &courses.emails {
            writeln!(stdout, "{}", email)?;
        }
    }

    let catalogue = Catalogue::new(courses.records);
    export_to_file(&catalogue, &config.output)
        .with_context(|| format!("error writing {}", config.output))?;

    Ok(())
}

/// Make sure every country in the reference list exists as a label
pub fn create_labels(config: &Config) -> Result<()> {
    let file = File::open(&config.countries)
        .with_context(|| format!("error opening {}", config.countries))?;
    let countries = load_countries(BufReader::new(file))
        .with_context(|| format!("error reading {}", config.countries))?;

    let client = connect(config)?;
    let existing = client.get_labels().context("error fetching labels")?;
    let missing = missing_labels(&existing, &countries);
    info!(
        "{} countries, {} labels already exist, {} to create",
        countries.len(),
        existing.len(),
        missing.len()
    );

    for name in missing {
        let color = random_color();
        info!("creating label {} ({})", name, color);
        client
            .create_label(&name, &color)
            .with_context(|| format!("error creating label {}", name))?;
    }

    Ok(())
}
