//! Filesystem layout of a project

use std::path::{Path, PathBuf};

use crate::content::ContentField;

/// Default directory holding all projects, relative to the working directory
pub const DEFAULT_PROJECTS_DIR: &str = "projects";

/// Subdirectory of a project that receives the Step 1 files
pub const MUSIC_SUBDIR: &str = "music";

/// `<projects>/<id>/`
pub fn project_root(projects_dir: &Path, project: &str) -> PathBuf {
    projects_dir.join(project)
}

/// `<projects>/<id>/music/`
pub fn music_dir(projects_dir: &Path, project: &str) -> PathBuf {
    project_root(projects_dir, project).join(MUSIC_SUBDIR)
}

/// `<projects>/<id>/music/<field>.txt`
pub fn content_file(projects_dir: &Path, project: &str, field: ContentField) -> PathBuf {
    music_dir(projects_dir, project).join(field.file_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_file_layout() {
        let path = content_file(Path::new(DEFAULT_PROJECTS_DIR), "demo", ContentField::Inspiration);
        assert_eq!(path, Path::new("projects/demo/music/inspiration.txt"));
    }

    #[test]
    fn test_music_dir_sits_under_root() {
        let root = project_root(Path::new("/tmp/p"), "demo");
        assert_eq!(music_dir(Path::new("/tmp/p"), "demo").parent(), Some(root.as_path()));
    }
}
