#[macro_use]
extern crate log;
extern crate chrono;
extern crate crossbeam_channel;
extern crate serde;
extern crate serde_json;

pub mod store;
pub use self::store::{FileStore, MemoryStore, Store};

pub mod ui;
pub use self::ui::App;

pub mod config;
pub use self::config::Config;
