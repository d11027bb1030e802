use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use greenside_core::course::Course;
use greenside_core::error::StoreError;
use greenside_core::game::Game;
use greenside_core::store::RecordStore;

const COURSES_FILE: &str = "courses.json";
const GAMES_FILE: &str = "games.json";

/// Record store keeping each collection as a JSON array in its own file.
///
/// Writes go to a sibling temp file that is then renamed over the target, so
/// a crash mid-write leaves the previous collection intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| StoreError::Io(format!("create {}: {e}", dir.display())))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, StoreError> {
        let path = self.dir.join(name);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(format!("read {}: {e}", path.display()))),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display())))
    }

    fn write<T: Serialize + ?Sized>(&self, name: &str, records: &T) -> Result<(), StoreError> {
        let path = self.dir.join(name);
        let tmp = self.dir.join(format!("{name}.tmp"));
        let bytes = serde_json::to_vec_pretty(records)
            .map_err(|e| StoreError::Corrupt(format!("encode {name}: {e}")))?;
        fs::write(&tmp, bytes)
            .map_err(|e| StoreError::Io(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StoreError::Io(format!("rename to {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Saved records");
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn load_courses(&self) -> Result<Option<Vec<Course>>, StoreError> {
        self.read(COURSES_FILE)
    }

    fn save_courses(&mut self, courses: &[Course]) -> Result<(), StoreError> {
        self.write(COURSES_FILE, courses)
    }

    fn load_games(&self) -> Result<Vec<Game>, StoreError> {
        Ok(self.read(GAMES_FILE)?.unwrap_or_default())
    }

    fn save_games(&mut self, games: &[Game]) -> Result<(), StoreError> {
        self.write(GAMES_FILE, games)
    }
}
