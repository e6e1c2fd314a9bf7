use crate::store;

use std::{fmt, io};

/// Implements `ALL`, `as_str`, `Display` and `FromStr` for a fieldless enum
/// from a list of `Variant => "name"` pairs
macro_rules! named {
    ($ty:ident { $($variant:ident => $name:literal),* $(,)* }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $name,)*
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::ui::UnknownValue;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name => Ok($ty::$variant),)*
                    _ => Err($crate::ui::UnknownValue(s.to_string())),
                }
            }
        }
    };
}

pub mod boundedset;
pub use self::boundedset::*;
pub mod messagequeue;
pub use self::messagequeue::*;

pub mod announcer;
pub use self::announcer::{Announcer, Politeness};
pub mod clipboard;
pub use self::clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub mod export;
pub use self::export::Export;
pub mod history;
pub use self::history::{History, Loaded, Recall, HISTORY_CAPACITY};
pub mod keybinds;
pub use self::keybinds::*;
pub mod page;
pub use self::page::{Dialog, Page, Tab};
pub mod request;
pub use self::request::*;
pub mod samples;
pub mod settings;
pub use self::settings::*;
pub mod view;
pub use self::view::HistoryItem;

pub mod state;
pub use self::state::*;
pub mod events;
pub use self::events::*;
pub mod commands;
pub use self::commands::*;

pub mod app;
pub use self::app::App;

/// A name that doesn't match any variant
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownValue(pub String);

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown value: {}", self.0)
    }
}

#[derive(Debug)]
pub enum Error {
    EmptyInput,
    UnknownCommand(String),
    InvalidArgument(String),

    Store(store::Error),
    Export(io::Error),

    ForceExit, // not really an error, but it unwinds the loop
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "nothing to do"),
            Error::UnknownCommand(cmd) => write!(f, "unknown command: {}", cmd),
            Error::InvalidArgument(msg) => write!(f, "{}", msg),
            Error::Store(err) => write!(f, "{}", err),
            Error::Export(err) => write!(f, "cannot export: {}", err),
            Error::ForceExit => write!(f, "exiting"),
        }
    }
}

impl std::error::Error for Error {}

impl From<store::Error> for Error {
    fn from(err: store::Error) -> Self {
        Error::Store(err)
    }
}
