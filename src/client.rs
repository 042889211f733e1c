use log::warn;
use std::fs;
use std::path::Path;

/// The filesystem capability consumed by path-handling tools.
///
/// Failures (not found, permission denied, non-empty directory without the
/// recursive flag) surface as false with the cause logged; the caller maps
/// false to the process exit status.
pub trait FsClient {
    fn remove(&self, path: &str, recursive: bool) -> bool;
}

/// Client backed by the local disk via std::fs.
pub struct LocalClient;

impl FsClient for LocalClient {
    fn remove(&self, path: &str, recursive: bool) -> bool {
        let target = Path::new(path);

        let result = match fs::symlink_metadata(target) {
            Ok(meta) if meta.is_dir() => {
                if recursive {
                    fs::remove_dir_all(target)
                } else {
                    fs::remove_dir(target)
                }
            }
            Ok(_) => fs::remove_file(target),
            Err(err) => {
                warn!("Cannot stat '{}': {}", path, err);
                return false;
            }
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                warn!("Cannot remove '{}': {}", path, err);
                false
            }
        }
    }
}
