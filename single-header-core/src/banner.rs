use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::classify::INCLUDE_GUARD;

/// Header written once at the top of the artifact: the license as a comment
/// block, a generation note and the single top-level include guard.
#[derive(Debug, Clone)]
pub struct Banner<'a> {
    license: Option<&'a str>,
    generated_at: DateTime<Utc>,
}

impl<'a> Banner<'a> {
    pub fn new(license: Option<&'a str>, generated_at: DateTime<Utc>) -> Self {
        Self {
            license,
            generated_at,
        }
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        if let Some(license) = self.license {
            for line in license.lines() {
                writeln!(out, "// {line}")?;
            }
            writeln!(out)?;
        }
        writeln!(out, "// This file was generated with a script.")?;
        writeln!(out, "// Generated {} UTC", self.timestamp())?;
        writeln!(out, "{INCLUDE_GUARD}")?;
        writeln!(out)
    }

    /// Microseconds are only printed when non-zero.
    fn timestamp(&self) -> String {
        if self.generated_at.timestamp_subsec_micros() == 0 {
            self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
        } else {
            self.generated_at.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
        }
    }
}
