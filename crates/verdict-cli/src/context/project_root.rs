use std::path::{Path, PathBuf};

/// Markers that identify a project root, in priority order.
const ROOT_MARKERS: [&str; 2] = [".verdict", ".git"];

/// Walk upwards from `start` until a directory carrying a root marker is found.
///
/// A `.verdict` directory anywhere on the path wins over a closer `.git`.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    ROOT_MARKERS.iter().find_map(|marker| {
        start
            .ancestors()
            .find(|dir| dir.join(marker).exists())
            .map(Path::to_path_buf)
    })
}
