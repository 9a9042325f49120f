// Snapshot persistence: the whole catalog and ledger serialized as one JSON
// blob at a fixed path. Every save rewrites the full snapshot; every load
// reads it back in one go. The file is opened and released per call, never
// held across operations.
//
// Loads fail softly: a missing, unreadable or schema-incompatible file
// yields an empty snapshot (logged), and the file on disk is left untouched
// until the next save overwrites it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::{Catalog, Room};
use crate::ledger::{Ledger, Reservation};

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// The full persisted state. Both fields default to empty so a snapshot with
// missing sections still loads.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Read the snapshot, degrading to empty when there is nothing usable.
    pub fn load(&self) -> Snapshot {
        if !self.path.exists() {
            return Snapshot::default();
        }
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read snapshot, starting empty");
                return Snapshot::default();
            }
        };
        match serde_json::from_str::<Snapshot>(&text) {
            Ok(snapshot) => {
                info!(
                    path = %self.path.display(),
                    rooms = snapshot.rooms.len(),
                    reservations = snapshot.reservations.len(),
                    "snapshot loaded"
                );
                snapshot
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "snapshot is corrupt or incompatible, starting empty");
                Snapshot::default()
            }
        }
    }

    // Serialize the full state and overwrite whatever snapshot was there.
    pub fn save(&self, catalog: &Catalog, ledger: &Ledger) -> Result<(), PersistenceError> {
        let snapshot = Snapshot {
            rooms: catalog.rooms().to_vec(),
            reservations: ledger.reservations().to_vec(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
