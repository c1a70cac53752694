//! Rendering of created objects.
//!
//! The printer is chosen from `-o/--output` before anything talks to the
//! server, so an unsupported format never leaves a half-reported create.

use crate::api::DynamicObject;
use crate::error::RenderError;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format for created objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `kind.group/name created`
    #[default]
    Created,
    /// `kind.group/name`
    Name,
    /// Pretty-printed JSON of the stored object
    Json,
    /// YAML of the stored object
    Yaml,
}

impl OutputFormat {
    /// Values accepted by `-o/--output`.
    pub const ALLOWED: &'static [&'static str] = &["name", "json", "yaml"];
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" => Ok(OutputFormat::Created),
            "name" => Ok(OutputFormat::Name),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(RenderError::UnsupportedFormat {
                format: s.to_string(),
                allowed: OutputFormat::ALLOWED.join(", "),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Created => write!(f, "created"),
            OutputFormat::Name => write!(f, "name"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Build a printer from the raw `--output` value, if any.
    pub fn from_flag(flag: Option<&str>) -> Result<Self, RenderError> {
        let format = match flag {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };
        Ok(Self::new(format))
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn render(&self, object: &DynamicObject, out: &mut dyn Write) -> Result<(), RenderError> {
        match self.format {
            OutputFormat::Created => {
                writeln!(out, "{} created", qualified_name(object)?)?;
            }
            OutputFormat::Name => {
                writeln!(out, "{}", qualified_name(object)?)?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, object)?;
                writeln!(out)?;
            }
            OutputFormat::Yaml => {
                out.write_all(serde_yaml::to_string(object)?.as_bytes())?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn qualified_name(object: &DynamicObject) -> Result<String, RenderError> {
    if object.kind().is_none() {
        return Err(RenderError::MissingField("kind"));
    }
    object
        .qualified_name()
        .ok_or(RenderError::MissingField("metadata.name"))
}
