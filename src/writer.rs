//! Writes a validated content set into a project's `music/` directory
//!
//! The pass is linear: check the project root, ensure `music/`, write the four
//! files in order, then report their sizes. Nothing is rolled back if a later
//! write fails.

use serde::{Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::content::{ContentField, ContentSet};
use crate::error::{ContentError, Result};
use crate::paths::{self, DEFAULT_PROJECTS_DIR};

/// One file produced by a write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub field: ContentField,
    #[serde(serialize_with = "serialize_path_lossy")]
    pub path: PathBuf,
    /// Size on disk after the write
    pub bytes: u64,
}

/// Result of a successful write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    pub project: String,
    pub files: Vec<WrittenFile>,
}

// Lossy: a report for a non-UTF-8 path still encodes
fn serialize_path_lossy<S: Serializer>(
    path: &Path,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

#[derive(Debug, Clone)]
pub struct ContentWriter {
    projects_dir: PathBuf,
}

impl Default for ContentWriter {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECTS_DIR)
    }
}

impl ContentWriter {
    pub fn new(projects_dir: impl Into<PathBuf>) -> Self {
        Self {
            projects_dir: projects_dir.into(),
        }
    }

    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    /// Write all four files for `project`.
    ///
    /// The project root must already exist; its `music/` subdirectory is
    /// created on demand. Existing files are overwritten.
    #[instrument(skip(self, content), fields(projects_dir = %self.projects_dir.display()))]
    pub fn write(&self, project: &str, content: &ContentSet) -> Result<WriteReport> {
        let root = paths::project_root(&self.projects_dir, project);
        if !root.exists() {
            return Err(ContentError::ProjectNotFound {
                project: project.to_string(),
                path: root,
            });
        }

        let music_dir = paths::music_dir(&self.projects_dir, project);
        if !music_dir.exists() {
            debug!(path = %music_dir.display(), "creating music directory");
        }
        fs::create_dir_all(&music_dir).map_err(|e| ContentError::io(&music_dir, e))?;

        let mut files = Vec::with_capacity(ContentField::ALL.len());
        for (field, value) in content.iter() {
            let path = paths::content_file(&self.projects_dir, project, field);
            fs::write(&path, format!("{value}\n")).map_err(|e| ContentError::io(&path, e))?;
            let bytes = fs::metadata(&path)
                .map_err(|e| ContentError::io(&path, e))?
                .len();
            debug!(%field, path = %path.display(), bytes, "wrote content file");
            files.push(WrittenFile { field, path, bytes });
        }

        info!(project, files = files.len(), "saved Step 1 content");
        Ok(WriteReport {
            project: project.to_string(),
            files,
        })
    }
}
