//! Persisted point store.
//!
//! Owns the three points shared between the input and display surfaces.
//! Loading is forgiving: a missing or unreadable file falls back to the
//! default points so a first run (or a corrupted save) still shows a
//! triangle. Saving happens on every change and surfaces failures as
//! [`StoreError`].

use std::fs;
use std::path::{Path, PathBuf};

use glam::DVec2;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Vertex;

/// Points shown before the user has saved anything.
pub const DEFAULT_POINTS: [DVec2; 3] = [
    DVec2::new(200.0, 200.0),
    DVec2::new(600.0, 250.0),
    DVec2::new(350.0, 600.0),
];

/// Fixed identifier the point list is stored under in the JSON file.
pub const STORE_KEY: &str = "triangle_points";

/// Errors raised while persisting the point list.
#[derive(Error, Diagnostic, Debug)]
pub enum StoreError {
    #[error("failed to write point store at {path}")]
    #[diagnostic(code(trigon::store::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode point store")]
    #[diagnostic(code(trigon::store::encode))]
    Encode(#[from] serde_json::Error),
}

/// On-disk shape: `{"triangle_points": [[x,y],[x,y],[x,y]]}`.
#[derive(Serialize, Deserialize)]
struct StoreFile {
    triangle_points: [DVec2; 3],
}

/// Durable store for the three triangle points.
#[derive(Debug, Clone)]
pub struct PointStore {
    path: PathBuf,
    points: [DVec2; 3],
}

impl PointStore {
    /// Load saved points from `path`, falling back to [`DEFAULT_POINTS`]
    /// when the file is missing or unreadable.
    pub fn load(path: impl Into<PathBuf>) -> PointStore {
        let path = path.into();
        let points = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<StoreFile>(&raw) {
                Ok(file) => file.triangle_points,
                Err(err) => {
                    tracing::debug!(%err, path = %path.display(), "unreadable point store, using defaults");
                    DEFAULT_POINTS
                }
            },
            Err(err) => {
                tracing::debug!(%err, path = %path.display(), "no saved points, using defaults");
                DEFAULT_POINTS
            }
        };
        PointStore { path, points }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current points, in A-B-C order.
    pub fn points(&self) -> [DVec2; 3] {
        self.points
    }

    /// Replace one vertex and persist immediately.
    pub fn set_point(&mut self, vertex: Vertex, p: DVec2) -> Result<(), StoreError> {
        self.points[vertex.index()] = p;
        self.save()
    }

    /// Replace all three points and persist immediately.
    pub fn set_points(&mut self, points: [DVec2; 3]) -> Result<(), StoreError> {
        self.points = points;
        self.save()
    }

    fn save(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&StoreFile {
            triangle_points: self.points,
        })?;
        fs::write(&self.path, raw).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
