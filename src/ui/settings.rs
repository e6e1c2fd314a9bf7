use crate::store::{self, keys, Store};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

named!(Theme {
    Light => "light",
    Dark => "dark",
});

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Braille code used for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrailleNotation {
    /// Nemeth code, common in the US
    Nemeth,
    /// Unified English Braille
    Ueb,
}

named!(BrailleNotation {
    Nemeth => "nemeth",
    Ueb => "ueb",
});

/// How much the speech output says
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechStyle {
    /// "the fraction a over b end fraction"
    Verbose,
    /// "a over b"
    Concise,
    /// "a b fraction"
    Superbrief,
}

named!(SpeechStyle {
    Verbose => "verbose",
    Concise => "concise",
    Superbrief => "superbrief",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// jump between major terms
    Browse,
    /// drill down through the expression tree
    Explore,
    /// exploring, with extra hints
    Verbose,
}

named!(NavigationMode {
    Browse => "browse",
    Explore => "explore",
    Verbose => "verbose",
});

/// Page zoom in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Zoom(u16);

impl Zoom {
    pub const MIN: u16 = 50;
    pub const MAX: u16 = 200;
    pub const STEP: u16 = 10;
    pub const DEFAULT: u16 = 100;

    /// Clamps `percent` into the allowed range
    pub fn new(percent: u16) -> Self {
        Zoom(percent.max(Self::MIN).min(Self::MAX))
    }

    pub fn percent(self) -> u16 {
        self.0
    }

    pub fn zoomed_in(self) -> Self {
        Self::new(self.0.saturating_add(Self::STEP))
    }

    pub fn zoomed_out(self) -> Self {
        Self::new(self.0.saturating_sub(Self::STEP))
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Zoom(Self::DEFAULT)
    }
}

impl fmt::Display for Zoom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One persisted setting, and the key it lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Theme,
    HighContrast,
    SidebarCollapsed,
    Zoom,
    BrailleNotation,
    SpeechStyle,
    NavigationMode,
}

impl Setting {
    pub const ALL: &'static [Setting] = &[
        Setting::Theme,
        Setting::HighContrast,
        Setting::SidebarCollapsed,
        Setting::Zoom,
        Setting::BrailleNotation,
        Setting::SpeechStyle,
        Setting::NavigationMode,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Setting::Theme => keys::THEME,
            Setting::HighContrast => keys::HIGH_CONTRAST,
            Setting::SidebarCollapsed => keys::SIDEBAR_COLLAPSED,
            Setting::Zoom => keys::ZOOM,
            Setting::BrailleNotation => keys::BRAILLE_NOTATION,
            Setting::SpeechStyle => keys::SPEECH_STYLE,
            Setting::NavigationMode => keys::NAVIGATION_MODE,
        }
    }
}

/// Everything about the page the user can change that outlives a session
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub theme: Theme,
    pub high_contrast: bool,
    pub sidebar_collapsed: bool,
    pub zoom: Zoom,

    pub braille: BrailleNotation,
    pub speech: SpeechStyle,
    pub navigation: NavigationMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            high_contrast: false,
            sidebar_collapsed: false,
            zoom: Zoom::default(),

            braille: BrailleNotation::Nemeth,
            speech: SpeechStyle::Verbose,
            navigation: NavigationMode::Explore,
        }
    }
}

impl Settings {
    /// Reads every setting from the store. Missing or unreadable values keep
    /// what `defaults` has.
    pub fn restore<S: Store + ?Sized>(store: &S, defaults: &Settings) -> Self {
        fn read<S, T>(store: &S, setting: Setting, default: T) -> T
        where
            S: Store + ?Sized,
            T: FromStr,
        {
            let data = match store.get(setting.key()) {
                Some(data) => data,
                None => return default,
            };
            data.parse().unwrap_or_else(|_| {
                warn!("ignoring stored {}: {:?}", setting.key(), data);
                default
            })
        }

        Self {
            theme: read(store, Setting::Theme, defaults.theme),
            high_contrast: read(store, Setting::HighContrast, defaults.high_contrast),
            sidebar_collapsed: read(store, Setting::SidebarCollapsed, defaults.sidebar_collapsed),
            zoom: Zoom::new(read(store, Setting::Zoom, defaults.zoom.percent())),

            braille: read(store, Setting::BrailleNotation, defaults.braille),
            speech: read(store, Setting::SpeechStyle, defaults.speech),
            navigation: read(store, Setting::NavigationMode, defaults.navigation),
        }
    }

    /// The stored form of a setting
    pub fn value(&self, setting: Setting) -> String {
        match setting {
            Setting::Theme => self.theme.to_string(),
            Setting::HighContrast => self.high_contrast.to_string(),
            Setting::SidebarCollapsed => self.sidebar_collapsed.to_string(),
            Setting::Zoom => self.zoom.percent().to_string(),
            Setting::BrailleNotation => self.braille.to_string(),
            Setting::SpeechStyle => self.speech.to_string(),
            Setting::NavigationMode => self.navigation.to_string(),
        }
    }

    /// Writes just `setting` back to the store
    pub fn persist<S: Store + ?Sized>(
        &self,
        store: &mut S,
        setting: Setting,
    ) -> Result<(), store::Error> {
        store.set(setting.key(), &self.value(setting))
    }
}
