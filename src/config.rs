use super::ui::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Error as IoError;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{fmt, fs, io};

pub const CONFIG_FILE: &str = "mathreader.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// where settings and history are kept
    pub store: PathBuf,
    /// where exported files go
    pub downloads: PathBuf,

    pub announce_delay_ms: u64,
    pub politeness: Politeness,

    /// used until the user picks something else
    pub theme: Theme,
    pub braille: BrailleNotation,
    pub speech: SpeechStyle,
    pub navigation: NavigationMode,

    /// action name -> key
    pub keybinds: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = Settings::default();
        Self {
            store: PathBuf::from("mathreader-store.json"),
            downloads: PathBuf::from("downloads"),

            announce_delay_ms: announcer::DEFAULT_DELAY.as_millis() as u64,
            politeness: Politeness::Polite,

            theme: defaults.theme,
            braille: defaults.braille,
            speech: defaults.speech,
            navigation: defaults.navigation,

            keybinds: Keybinds::default()
                .iter()
                .map(|(req, key)| (req.to_string(), key.to_string()))
                .collect(),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    CannotRead(IoError),
    CannotParse(serde_json::Error),
    CannotWrite(IoError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::CannotRead(err) => write!(f, "cannot read the config file: {}", err),
            Error::CannotParse(err) => write!(f, "cannot parse the config file: {}", err),
            Error::CannotWrite(err) => write!(f, "cannot write the config file: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let data = fs::read_to_string(path.as_ref()).map_err(Error::CannotRead)?;
        let config = serde_json::from_str(&data).map_err(Error::CannotParse)?;
        debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn dump(&self, w: &mut impl io::Write) -> io::Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        writeln!(w, "{}", data)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let mut file = fs::File::create(path.as_ref()).map_err(Error::CannotWrite)?;
        self.dump(&mut file).map_err(Error::CannotWrite)
    }

    /// Applies `AMR_SPEECH_STYLE`, `AMR_BRAILLE_NOTATION` and
    /// `AMR_NAVIGATION_MODE` from the environment
    pub fn with_env(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    pub fn with_vars<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        macro_rules! apply {
            ($key:expr, $field:ident) => {
                if let Some(value) = var($key) {
                    match value.parse() {
                        Ok(parsed) => self.$field = parsed,
                        Err(err) => warn!("ignoring {}: {}", $key, err),
                    }
                }
            };
        }

        apply!("AMR_SPEECH_STYLE", speech);
        apply!("AMR_BRAILLE_NOTATION", braille);
        apply!("AMR_NAVIGATION_MODE", navigation);
        self
    }

    /// The default keybinds with any overrides from the config applied.
    ///
    /// When two actions name the same key, one that moved away from its
    /// default wins over one that kept it.
    pub fn keybinds(&self) -> Keybinds {
        let defaults = Keybinds::default();
        let mut keybinds = defaults.clone();
        let mut changed = vec![];

        for (action, key) in &self.keybinds {
            let req = match KeyRequest::parse(action) {
                Some(req) => req,
                None => {
                    warn!("unknown keybind action: {}", action);
                    continue;
                }
            };

            let parsed = KeyType::from(key.as_str());
            if parsed.is_unbound() && !key.trim().is_empty() {
                warn!("invalid key for {}: {}", action, key);
            }

            if defaults.lookup(req) == Some(&parsed) {
                keybinds.insert(parsed, req);
            } else {
                changed.push((parsed, req));
            }
        }

        for (key, req) in changed {
            keybinds.insert(key, req);
        }
        keybinds
    }

    /// Binds `key` to `req`, taking it away from any other action
    pub fn bind(&mut self, req: KeyRequest, key: &KeyType) {
        let current = self.keybinds();
        for (other, bound) in current.iter() {
            if *other != req && bound == key {
                debug!("unbinding {} from {}", key, other);
                self.keybinds.insert(other.to_string(), String::new());
            }
        }
        self.keybinds.insert(req.to_string(), key.to_string());
    }

    /// The settings used when the store has nothing for them
    pub fn settings(&self) -> Settings {
        Settings {
            theme: self.theme,
            braille: self.braille,
            speech: self.speech,
            navigation: self.navigation,
            ..Settings::default()
        }
    }

    pub fn announce_delay(&self) -> Duration {
        Duration::from_millis(self.announce_delay_ms)
    }
}
