//! String-keyed persistent storage.
//!
//! Everything the front end remembers between runs goes through a [`Store`]:
//! the history log as a JSON array, and every ui setting as its own scalar
//! value. Keys are independent; nothing here is transactional.

use std::{fmt, io};

mod file;
mod memory;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;

/// Keys used by the front end
pub mod keys {
    pub const HISTORY: &str = "mathHistory";

    pub const THEME: &str = "theme";
    pub const HIGH_CONTRAST: &str = "highContrast";
    pub const SIDEBAR_COLLAPSED: &str = "sidebarCollapsed";
    pub const ZOOM: &str = "zoomLevel";

    pub const BRAILLE_NOTATION: &str = "brailleNotation";
    pub const SPEECH_STYLE: &str = "speechStyle";
    pub const NAVIGATION_MODE: &str = "navigationMode";
}

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Encode(serde_json::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "cannot access the store: {}", err),
            Error::Encode(err) => write!(f, "cannot encode the store: {}", err),
            Error::Decode(err) => write!(f, "cannot decode the store: {}", err),
        }
    }
}

impl std::error::Error for Error {}

/// Synchronous string storage, modelled after browser local storage.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;
    /// Removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), Error>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        (**self).remove(key)
    }
}
