use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::info;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer};

use crate::{aggregate, CourseRecord, Result};

/// Everything the courses page needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    pub courses: Vec<CourseRecord>,
    pub concepts: Vec<String>,
    pub tools: Vec<String>,
    pub countries: Vec<String>,
}

impl Catalogue {
    pub fn new(courses: Vec<CourseRecord>) -> Self {
        Catalogue {
            concepts: aggregate::concepts(&courses),
            tools: aggregate::tools(&courses),
            countries: aggregate::countries(&courses),
            courses,
        }
    }
}

/// Write the catalogue as a script declaring `courses`, `concepts`, `tools` and `countries`.
pub fn write_catalogue<W: Write>(catalogue: &Catalogue, mut w: W) -> Result<()> {
    w.write_all(b"var courses = \n")?;
    write_json(&catalogue.courses, &mut w)?;
    w.write_all(b"\nvar concepts = \n")?;
    write_json(&catalogue.concepts, &mut w)?;
    w.write_all(b"\nvar tools = \n")?;
    write_json(&catalogue.tools, &mut w)?;
    w.write_all(b"\nvar countries = \n")?;
    write_json(&catalogue.countries, &mut w)?;
    w.flush()?;

    Ok(())
}

/// Write the catalogue to `path`, replacing whatever was there
pub fn export_to_file(catalogue: &Catalogue, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_catalogue(catalogue, BufWriter::new(file))?;
    info!(
        "wrote {} courses, {} concepts, {} tools, {} countries to {}",
        catalogue.courses.len(),
        catalogue.concepts.len(),
        catalogue.tools.len(),
        catalogue.countries.len(),
        path.display()
    );

    Ok(())
}

fn write_json<T: Serialize, W: Write>(value: &T, w: &mut W) -> Result<()> {
    let mut ser = Serializer::with_formatter(w, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;

    Ok(())
}
