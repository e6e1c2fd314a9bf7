use super::export::Export;
use super::page::{Dialog, Tab};
use super::request::Request;

use std::convert::TryFrom;
use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum Mod {
    Ctrl,
    Alt,
    Shift,
    None,
}

/// A single key press, e.g. `C-Enter` or `A-t`
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct Key {
    pub modifier: Mod,
    pub name: String,
}

impl Key {
    /// Parses `C-x`, `A-x`, `S-x` or a bare key name.
    ///
    /// Named keys are case-insensitive (`escape`, `ESC` and `Escape` are the
    /// same key); single characters are kept as they are.
    pub fn parse(s: impl AsRef<str>) -> Option<Self> {
        let s = s.as_ref().trim();
        let (modifier, rest) = match s.get(..2) {
            Some("C-") if s.len() > 2 => (Mod::Ctrl, &s[2..]),
            Some("A-") if s.len() > 2 => (Mod::Alt, &s[2..]),
            Some("S-") if s.len() > 2 => (Mod::Shift, &s[2..]),
            _ => (Mod::None, s),
        };

        let name = normalize(rest)?;
        Some(Key { modifier, name })
    }
}

fn normalize(name: &str) -> Option<String> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (None, _) => return None,
        (Some(ch), None) => return Some(ch.to_string()),
        _ => {}
    }

    let lower = name.to_ascii_lowercase();
    let named = match lower.as_str() {
        "esc" | "escape" => "Escape",
        "enter" | "return" => "Enter",
        "tab" => "Tab",
        "space" => "Space",
        "backspace" => "Backspace",
        "left" => "Left",
        "right" => "Right",
        "up" => "Up",
        "down" => "Down",
        "home" => "Home",
        "end" => "End",
        f if f.starts_with('f') && f[1..].parse::<u8>().map(|n| n >= 1 && n <= 12) == Ok(true) => {
            return Some(f.to_ascii_uppercase())
        }
        _ => return None,
    };
    Some(named.to_string())
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.modifier {
            Mod::Ctrl => write!(f, "C-")?,
            Mod::Alt => write!(f, "A-")?,
            Mod::Shift => write!(f, "S-")?,
            Mod::None => {}
        };
        write!(f, "{}", self.name)
    }
}

/// The canonical text form of a key. Empty means unbound.
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub struct KeyType(String);

impl KeyType {
    pub fn unbound() -> Self {
        KeyType(String::new())
    }

    pub fn is_unbound(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Key> for KeyType {
    fn from(k: Key) -> Self {
        KeyType(k.to_string())
    }
}

impl<'a> From<&'a Key> for KeyType {
    fn from(k: &'a Key) -> Self {
        KeyType(k.to_string())
    }
}

impl<'a> From<&'a str> for KeyType {
    fn from(s: &'a str) -> Self {
        Key::parse(s).map(KeyType::from).unwrap_or_else(KeyType::unbound)
    }
}

impl From<String> for KeyType {
    fn from(s: String) -> Self {
        KeyType::from(s.as_str())
    }
}

// fully enumerated so they can show up in the config easier
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum KeyRequest {
    Submit,

    ToggleTheme,
    ToggleContrast,
    ToggleSidebar,

    ZoomIn,
    ZoomOut,
    ZoomReset,

    RecallBackward,
    RecallForward,
    ClearHistory,

    NextTab,
    PrevTab,
    FirstTab,
    LastTab,

    Help,
    CloseDialog,

    ExportText,
    ExportBraille,
    CopySpeech,
    CopyBraille,
}

impl KeyRequest {
    pub const ALL: &'static [KeyRequest] = &[
        KeyRequest::Submit,
        KeyRequest::ToggleTheme,
        KeyRequest::ToggleContrast,
        KeyRequest::ToggleSidebar,
        KeyRequest::ZoomIn,
        KeyRequest::ZoomOut,
        KeyRequest::ZoomReset,
        KeyRequest::RecallBackward,
        KeyRequest::RecallForward,
        KeyRequest::ClearHistory,
        KeyRequest::NextTab,
        KeyRequest::PrevTab,
        KeyRequest::FirstTab,
        KeyRequest::LastTab,
        KeyRequest::Help,
        KeyRequest::CloseDialog,
        KeyRequest::ExportText,
        KeyRequest::ExportBraille,
        KeyRequest::CopySpeech,
        KeyRequest::CopyBraille,
    ];

    pub fn parse(s: impl AsRef<str>) -> Option<Self> {
        KeyRequest::try_from(s.as_ref()).ok()
    }
}

impl fmt::Display for KeyRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = format!("{:?}", self);
        let mut buf = String::new();

        for (i, ch) in s.chars().enumerate() {
            if i > 0 && ch.is_uppercase() {
                buf.push('_');
            }
            buf.push(ch.to_ascii_lowercase());
        }

        write!(f, "{}", buf)
    }
}

impl<'a> TryFrom<&'a str> for KeyRequest {
    type Error = ();
    fn try_from(s: &'a str) -> Result<Self, Self::Error> {
        let s = s.trim();
        KeyRequest::ALL
            .iter()
            .find(|req| req.to_string() == s)
            .cloned()
            .ok_or(())
    }
}

impl From<KeyRequest> for Request {
    fn from(kr: KeyRequest) -> Request {
        use self::KeyRequest::*;

        match kr {
            Submit => Request::Submit,

            ToggleTheme => Request::ToggleTheme,
            ToggleContrast => Request::ToggleContrast,
            ToggleSidebar => Request::ToggleSidebar,

            ZoomIn => Request::ZoomIn,
            ZoomOut => Request::ZoomOut,
            ZoomReset => Request::ZoomReset,

            RecallBackward => Request::RecallBackward,
            RecallForward => Request::RecallForward,
            ClearHistory => Request::ClearHistory,

            NextTab => Request::NextTab,
            PrevTab => Request::PrevTab,
            FirstTab => Request::FirstTab,
            LastTab => Request::LastTab,

            Help => Request::OpenDialog(Dialog::Help),
            CloseDialog => Request::CloseDialog,

            ExportText => Request::Export(Export::Text),
            ExportBraille => Request::Export(Export::Braille),
            CopySpeech => Request::Copy(Tab::Speech),
            CopyBraille => Request::Copy(Tab::Braille),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Keybinds(Vec<(KeyRequest, KeyType)>);

impl Keybinds {
    pub fn get(&self, key: &KeyType) -> Option<KeyRequest> {
        if key.is_unbound() {
            return None;
        }

        self.0.iter().find(|(_, k)| k == key).map(|(v, _)| *v)
    }

    /// Binds `key` to `req`. Anything else on that key is unbound.
    pub fn insert(&mut self, key: impl Into<KeyType>, req: KeyRequest) {
        let key = key.into();
        for (v, k) in &mut self.0 {
            if *v == req {
                *k = key.clone()
            } else if !key.is_unbound() && *k == key {
                debug!("{} is no longer bound to {}", key, v);
                *k = KeyType::unbound()
            }
        }
    }

    pub fn lookup(&self, req: KeyRequest) -> Option<&KeyType> {
        self.0
            .iter()
            .find(|(r, k)| *r == req && !k.is_unbound())
            .map(|(_, k)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(KeyRequest, KeyType)> {
        self.0.iter()
    }
}

impl Default for Keybinds {
    fn default() -> Self {
        let map = vec![
            (KeyRequest::Submit, "C-Enter".into()),
            //
            (KeyRequest::ToggleTheme, "A-t".into()),
            (KeyRequest::ToggleContrast, "A-c".into()),
            (KeyRequest::ToggleSidebar, "A-s".into()),
            //
            (KeyRequest::ZoomIn, "C-=".into()),
            (KeyRequest::ZoomOut, "C--".into()),
            (KeyRequest::ZoomReset, "C-0".into()),
            //
            (KeyRequest::RecallBackward, "A-p".into()),
            (KeyRequest::RecallForward, "A-n".into()),
            (KeyRequest::ClearHistory, "A-x".into()),
            //
            (KeyRequest::NextTab, "A-Right".into()),
            (KeyRequest::PrevTab, "A-Left".into()),
            (KeyRequest::FirstTab, "A-Home".into()),
            (KeyRequest::LastTab, "A-End".into()),
            //
            (KeyRequest::Help, "F1".into()),
            (KeyRequest::CloseDialog, "Escape".into()),
            //
            (KeyRequest::ExportText, "C-s".into()),
            (KeyRequest::ExportBraille, "C-b".into()),
            (KeyRequest::CopySpeech, "A-1".into()),
            (KeyRequest::CopyBraille, "A-2".into()),
        ];
        Keybinds(map)
    }
}
