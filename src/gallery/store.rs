use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context;

use crate::{
    encode::png::EncodedComposite,
    foundation::error::{BoothError, BoothResult},
};

/// Metadata record of an archived composite.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPhoto {
    /// Stable identifier; also the file stem on disk.
    pub id: String,
    /// Save time in milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Filesystem-backed archive of exported composites.
///
/// Each entry is a `<id>.png` with a sibling `<id>.json` holding its [`SavedPhoto`] record.
#[derive(Clone, Debug)]
pub struct GalleryStore {
    dir: PathBuf,
}

impl GalleryStore {
    /// Open (creating if needed) the archive at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> BoothResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create gallery dir '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Archive root.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Archive `encoded` stamped with the current time.
    pub fn save(&self, encoded: &EncodedComposite) -> BoothResult<SavedPhoto> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| BoothError::storage(format!("system clock before epoch: {e}")))?;
        self.save_at(encoded, now.as_millis() as u64)
    }

    /// Archive `encoded` with an explicit timestamp (ms since the epoch).
    ///
    /// The id is the timestamp; if that id is taken a `-N` suffix is appended.
    #[tracing::instrument(skip(self, encoded), fields(dir = %self.dir.display()))]
    pub fn save_at(&self, encoded: &EncodedComposite, timestamp: u64) -> BoothResult<SavedPhoto> {
        let base = timestamp.to_string();
        let mut id = base.clone();
        let mut n = 1u32;
        while self.png_path(&id).exists() || self.meta_path(&id).exists() {
            id = format!("{base}-{n}");
            n += 1;
        }

        let record = SavedPhoto { id, timestamp };
        let json = serde_json::to_vec_pretty(&record)
            .map_err(|e| BoothError::storage(format!("serialize record: {e}")))?;

        // The record is the commit marker: it only lands once the PNG is fully in place.
        let png_path = self.png_path(&record.id);
        write_atomic(&png_path, encoded.png_bytes())
            .map_err(|e| BoothError::storage(format!("write png for '{}': {e}", record.id)))?;
        if let Err(e) = write_atomic(&self.meta_path(&record.id), &json) {
            let _ = std::fs::remove_file(&png_path);
            return Err(BoothError::storage(format!(
                "write record for '{}': {e}",
                record.id
            )));
        }

        tracing::info!(id = %record.id, bytes = encoded.png_bytes().len(), "saved to gallery");
        Ok(record)
    }

    /// All entries, newest first.
    pub fn list(&self) -> BoothResult<Vec<SavedPhoto>> {
        let entries = std::fs::read_dir(&self.dir)
            .with_context(|| format!("read gallery dir '{}'", self.dir.display()))?;

        let mut out = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("read gallery dir '{}'", self.dir.display()))?
                .path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let record = std::fs::read(&path)
                .ok()
                .and_then(|bytes| serde_json::from_slice::<SavedPhoto>(&bytes).ok());
            match record {
                Some(r) if validate_id(&r.id).is_ok() && self.png_path(&r.id).is_file() => {
                    out.push(r)
                }
                _ => tracing::warn!(path = %path.display(), "skipping unreadable gallery entry"),
            }
        }

        out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| b.id.cmp(&a.id)));
        Ok(out)
    }

    /// PNG bytes of entry `id`.
    pub fn load_png(&self, id: &str) -> BoothResult<Vec<u8>> {
        validate_id(id)?;
        std::fs::read(self.png_path(id))
            .map_err(|e| BoothError::storage(format!("read gallery entry '{id}': {e}")))
    }

    /// Remove entry `id` and return the remaining entries, newest first.
    #[tracing::instrument(skip(self))]
    pub fn delete(&self, id: &str) -> BoothResult<Vec<SavedPhoto>> {
        validate_id(id)?;
        if !self.png_path(id).exists() && !self.meta_path(id).exists() {
            return Err(BoothError::storage(format!("no gallery entry '{id}'")));
        }
        self.delete_files(id)?;
        tracing::info!(id, "deleted from gallery");
        self.list()
    }

    /// Remove every entry, including orphaned images, unreadable records and interrupted
    /// writes. Files whose names are not gallery ids are left alone.
    pub fn clear(&self) -> BoothResult<()> {
        let entries = std::fs::read_dir(&self.dir)
            .with_context(|| format!("read gallery dir '{}'", self.dir.display()))?;

        let mut removed = 0usize;
        for entry in entries {
            let path = entry
                .with_context(|| format!("read gallery dir '{}'", self.dir.display()))?
                .path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !path.is_file() || entry_id(name).is_none() {
                continue;
            }
            std::fs::remove_file(&path)
                .map_err(|e| BoothError::storage(format!("remove '{}': {e}", path.display())))?;
            removed += 1;
        }
        tracing::info!(removed, "cleared gallery");
        Ok(())
    }

    fn delete_files(&self, id: &str) -> BoothResult<()> {
        for path in [self.png_path(id), self.meta_path(id)] {
            if path.exists() {
                std::fs::remove_file(&path)
                    .map_err(|e| BoothError::storage(format!("remove '{}': {e}", path.display())))?;
            }
        }
        Ok(())
    }

    fn png_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.png"))
    }

    fn meta_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

/// Id owning a gallery file name: `<id>.png`, `<id>.json`, or a leftover `<id>.<ext>.tmp`.
fn entry_id(name: &str) -> Option<&str> {
    let name = name.strip_suffix(".tmp").unwrap_or(name);
    let id = name
        .strip_suffix(".png")
        .or_else(|| name.strip_suffix(".json"))?;
    validate_id(id).ok().map(|()| id)
}

/// Write via a sibling temp file and rename, so readers never see a partial file.
fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    let result = std::fs::write(&tmp, bytes).and_then(|()| std::fs::rename(&tmp, path));
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    result
}

/// Ids name files directly, so only `[A-Za-z0-9_-]` is accepted.
fn validate_id(id: &str) -> BoothResult<()> {
    if id.is_empty() {
        return Err(BoothError::validation("gallery id must be non-empty"));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(BoothError::validation(format!(
            "gallery id '{id}' may only contain ASCII letters, digits, '-' and '_'"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/store.rs"]
mod tests;
