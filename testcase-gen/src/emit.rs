//! Serialization of accepted instances.
//!
//! Text layout, one line each:
//!
//! ```text
//! g<id> <width> <height>
//! pins g<id> <x1> <y1> ... <xk> <yk>
//! wire g<id1>.p<seq1> g<id2>.p<seq2>
//! ```
//!
//! All gate blocks come first, then the wires in matcher order.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use tracing::error;

use crate::config::GeneratorConfig;
use crate::model::{Gate, Instance, PinRef, Summary, Wire};

impl fmt::Display for PinRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}.p{}", self.gate, self.pin)
    }
}

impl fmt::Display for Wire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wire {} {}", self.from, self.to)
    }
}

impl fmt::Display for Gate {
    /// Header and pin lines, without the final newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "g{} {} {}", self.id, self.width, self.height)?;
        write!(f, "pins g{}", self.id)?;
        for p in &self.pins {
            write!(f, " {} {}", p.x, p.y)?;
        }
        Ok(())
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gate in &self.gates {
            writeln!(f, "{}", gate)?;
        }
        for wire in &self.wires {
            writeln!(f, "{}", wire)?;
        }
        Ok(())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of Gates: {}", self.gates)?;
        writeln!(f, "Number of Pins: {}", self.pins)?;
        writeln!(f, "Number of Wires: {}", self.wires)
    }
}

pub fn write_text<W: Write>(out: &mut W, instance: &Instance) -> io::Result<()> {
    write!(out, "{}", instance)?;
    out.flush()
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    config: &'a GeneratorConfig,
    seed: Option<u64>,
    gates: &'a [Gate],
    wires: &'a [Wire],
    summary: Summary,
}

pub fn to_json(
    instance: &Instance,
    config: &GeneratorConfig,
    seed: Option<u64>,
) -> serde_json::Result<String> {
    let doc = JsonDocument {
        config,
        seed,
        gates: &instance.gates,
        wires: &instance.wires,
        summary: instance.summary(),
    };
    serde_json::to_string_pretty(&doc)
}

pub fn write_summary_file(path: &Path, summary: &Summary) -> io::Result<()> {
    fs::write(path, summary.to_string())
}

/// Writes the summary side file, logging instead of failing when it cannot
/// be written. Returns whether the file was written.
pub fn write_summary_or_log(path: &Path, summary: &Summary) -> bool {
    match write_summary_file(path, summary) {
        Ok(()) => true,
        Err(e) => {
            error!("Unable to open file {}: {}", path.display(), e);
            false
        }
    }
}
