use std::{
    fs::{self, Metadata, read_dir},
    path::Path,
    time::SystemTime,
};

use chrono::{DateTime, Utc};
use log::{debug, trace};

use crate::{error::WalkError, record::FileRecord, window::TimeWindow};

/// Depth-first walk collecting every non-directory entry below `root`.
///
/// Symbolic links are not followed; a link is reported with its own metadata.
/// Entries of a directory are visited in file-name order. When `window` is
/// given, records outside of it are dropped as they are found.
///
/// The first I/O error aborts the walk and everything collected so far is
/// thrown away.
pub fn walk(root: &Path, window: Option<&TimeWindow>) -> Result<Vec<FileRecord>, WalkError> {
    debug!("[walk] scanning {:?} (window: {:?})", root, window);

    let metadata = fs::symlink_metadata(root).map_err(|e| WalkError::new(root, e))?;

    let mut records = Vec::new();
    if metadata.is_dir() {
        walk_dir(root, window, &mut records)?;
    } else if let Some(rec) = inspect_entry(root, &metadata, window) {
        records.push(rec);
    }

    debug!("[walk] {:?}: {} files collected", root, records.len());
    Ok(records)
}

fn walk_dir(
    dir: &Path,
    window: Option<&TimeWindow>,
    out: &mut Vec<FileRecord>,
) -> Result<(), WalkError> {
    trace!("[walk] entering {:?}", dir);

    let mut entries = read_dir(dir)
        .and_then(|rd| rd.collect::<Result<Vec<_>, _>>())
        .map_err(|e| WalkError::new(dir, e))?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        let metadata = fs::symlink_metadata(&path).map_err(|e| WalkError::new(&path, e))?;

        if metadata.is_dir() {
            walk_dir(&path, window, out)?;
        } else if let Some(rec) = inspect_entry(&path, &metadata, window) {
            out.push(rec);
        }
    }

    Ok(())
}

fn inspect_entry(
    path: &Path,
    metadata: &Metadata,
    window: Option<&TimeWindow>,
) -> Option<FileRecord> {
    let modified = to_utc(metadata.modified().ok());

    if let Some(w) = window
        && !w.contains(modified)
    {
        trace!("[walk] {:?} outside window, skipped", path);
        return None;
    }

    let name = path
        .file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned();

    Some(FileRecord {
        full_path: path.to_path_buf(),
        name,
        size: metadata.len(),
        modified,
    })
}

/// Platforms without a modification time report the Unix epoch.
fn to_utc(t: Option<SystemTime>) -> DateTime<Utc> {
    t.map(DateTime::<Utc>::from).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
