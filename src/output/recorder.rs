//! CSV trajectory output
//!
//! One row per body per recorded step. Rows are serde-serialized so the
//! header is derived from the field names.

use std::path::Path;

use serde::Serialize;

use crate::simulation::states::System;

#[derive(Debug, Serialize)]
struct SnapshotRow {
    step: usize,
    t: f64,
    body: usize,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    kinetic: f64,
}

/// Writes system snapshots to a CSV file
pub struct Recorder {
    writer: csv::Writer<std::fs::File>,
}

impl Recorder {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, csv::Error> {
        let writer = csv::Writer::from_path(path)?;
        Ok(Self { writer })
    }

    /// Append one row per body for the current system state
    pub fn record(&mut self, step: usize, sys: &System) -> Result<(), csv::Error> {
        for (i, b) in sys.bodies.iter().enumerate() {
            self.writer.serialize(SnapshotRow {
                step,
                t: sys.t,
                body: i,
                x: b.x.x,
                y: b.x.y,
                vx: b.v.x,
                vy: b.v.y,
                kinetic: b.kinetic_energy(),
            })?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
