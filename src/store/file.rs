use super::*;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A store backed by a single JSON object on disk.
///
/// The whole file is read once when opened and rewritten after every
/// mutation. Two processes sharing a file simply overwrite each other.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens (but does not create) the store at `path`.
    ///
    /// A missing file is an empty store; a file that is not a JSON object of
    /// strings is an error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        let map = match fs::read_to_string(&path) {
            Ok(ref data) if data.trim().is_empty() => BTreeMap::new(),
            Ok(data) => serde_json::from_str(&data).map_err(Error::Decode)?,
            Err(ref err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no store at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(err) => return Err(Error::Io(err)),
        };

        debug!("opened store at {} ({} keys)", path.display(), map.len());
        Ok(Self { path, map })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(Error::Io)?;
            }
        }

        let data = serde_json::to_string_pretty(&self.map).map_err(Error::Encode)?;
        fs::write(&self.path, data).map_err(Error::Io)
    }
}

impl Store for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        trace!("set {} = {}", key, value);
        let prev = self.map.insert(key.to_string(), value.to_string());
        self.flush().map_err(|err| {
            match prev {
                Some(prev) => self.map.insert(key.to_string(), prev),
                None => self.map.remove(key),
            };
            err
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        let prev = match self.map.remove(key) {
            Some(prev) => prev,
            None => return Ok(()),
        };
        trace!("remove {}", key);
        self.flush().map_err(|err| {
            self.map.insert(key.to_string(), prev);
            err
        })
    }
}
