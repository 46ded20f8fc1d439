//! Output-path helpers shared by the blocking and async fetch forms.
//!
//! Bodies are streamed into a hidden `.part` file next to the target and
//! renamed over it once complete. Concurrent downloads that share a filename
//! therefore leave exactly one complete body behind, never an interleaving.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static PART_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Characters of the target name kept in the part name. Bounds the part name
/// well under the 255-byte component limit whatever the target's length.
const PART_NAME_PREFIX_CHARS: usize = 32;

/// Returns a temporary path in the same directory as `target`, unique within
/// this process.
pub(crate) fn part_path(target: &Path) -> PathBuf {
    let n = PART_COUNTER.fetch_add(1, Ordering::Relaxed);
    let name: String = target.file_name().map_or_else(
        || "download".to_string(),
        |n| n.to_string_lossy().chars().take(PART_NAME_PREFIX_CHARS).collect(),
    );
    let part_name = format!(".{name}.{}-{n}.part", std::process::id());
    target.with_file_name(part_name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_part_path_stays_in_target_directory() {
        let target = Path::new("/tmp/images/a.jpg");
        let part = part_path(target);
        assert_eq!(part.parent(), target.parent());
        let name = part.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(".a.jpg."), "unexpected part name: {name}");
        assert!(name.ends_with(".part"), "unexpected part name: {name}");
    }

    #[test]
    fn test_part_path_for_long_target_name_is_creatable() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join(format!("{}.jpg", "a".repeat(246)));
        std::fs::write(&target, b"target fits").unwrap();

        let part = part_path(&target);
        let part_name_len = part.file_name().unwrap().len();
        assert!(part_name_len < 100, "part name too long: {part_name_len}");
        std::fs::write(&part, b"part fits").unwrap();
        std::fs::rename(&part, &target).unwrap();
        assert_eq!(std::fs::read(&target).unwrap(), b"part fits");
    }

    #[test]
    fn test_part_path_is_unique_per_call() {
        let target = Path::new("/tmp/images/a.jpg");
        assert_ne!(part_path(target), part_path(target));
    }
}
