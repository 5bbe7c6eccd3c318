// src/watch/hash.rs

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blake3::Hasher;
use tracing::debug;

/// Compute a deterministic hash over the contents of the given files.
///
/// Order of `paths` does not matter; they are sorted before hashing. Each
/// path is mixed into the hash too, so moving content between files counts
/// as a change. Missing files hash as empty.
pub fn compute_hash_for_paths<I, P>(paths: I) -> Result<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut hasher = Hasher::new();

    let mut paths_vec: Vec<PathBuf> = paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
    paths_vec.sort();
    paths_vec.dedup();

    for path in paths_vec {
        hasher.update(path.to_string_lossy().as_bytes());
        hasher.update(&[0]);

        if path.is_file() {
            debug!("hashing file {:?}", path);
            let mut file = File::open(&path)
                .with_context(|| format!("opening file for hashing: {:?}", path))?;
            let mut buf = [0u8; 8192];
            loop {
                let n = file.read(&mut buf)?;
                if n == 0 {
                    break;
                }
                hasher.update(&buf[..n]);
            }
        }
        hasher.update(&[0]);
    }

    let hash = hasher.finalize().to_hex().to_string();
    debug!(hash = %hash, "computed aggregate hash");
    Ok(hash)
}

/// Remembers the last content hash of a set of input files.
///
/// Editors often emit several events for one save, and some touch a file
/// without changing it; only real content changes should trigger a new
/// schedule.
#[derive(Debug, Clone)]
pub struct InputFingerprint {
    paths: Vec<PathBuf>,
    last: Option<String>,
}

impl InputFingerprint {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths, last: None }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Re-hash the inputs; returns `true` if the content differs from the
    /// previous call (always `true` on the first call).
    pub fn refresh(&mut self) -> Result<bool> {
        let hash = compute_hash_for_paths(&self.paths)?;
        let changed = self.last.as_deref() != Some(hash.as_str());
        self.last = Some(hash);
        Ok(changed)
    }
}
