//! aimv-step1 - Step 1 creative-direction content for AIMV projects
//!
//! Persists the four early-stage text files a project's downstream workflow
//! reads: concept, inspiration, mood, and genre.
//!
//! # Layout
//!
//! | File | Content |
//! |------|---------|
//! | `projects/<id>/music/concept.txt` | Project concept |
//! | `projects/<id>/music/inspiration.txt` | Visual inspiration |
//! | `projects/<id>/music/mood.txt` | Mood and tone |
//! | `projects/<id>/music/genre.txt` | Genre and visual style |
//!
//! Each file holds the trimmed value followed by a single newline.
//!
//! # Quick Start
//!
//! ```no_run
//! use aimv_step1::{ContentSet, ContentWriter};
//!
//! let content = ContentSet::new(
//!     "A cozy village sim",
//!     "Studio Ghibli, pastel palettes",
//!     "warm, nostalgic",
//!     "cozy pixel art",
//! ).unwrap();
//!
//! let report = ContentWriter::default().write("demo", &content).unwrap();
//! for file in &report.files {
//!     println!("{} ({} bytes)", file.path.display(), file.bytes);
//! }
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod paths;
pub mod writer;

pub use config::{Config, ConfigError, DEFAULT_PROJECT};
pub use content::{ContentField, ContentSet};
pub use error::{ContentError, Result};
pub use writer::{ContentWriter, WriteReport, WrittenFile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        // Verify core types are re-exported from crate root
        assert_eq!(ContentField::ALL.len(), 4);
        assert_eq!(DEFAULT_PROJECT, "default");
    }
}
