use super::export::Export;
use super::page::{Dialog, Tab};
use super::settings::{BrailleNotation, NavigationMode, SpeechStyle, Theme};

/// Everything a user can do to the page
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// submit the form with whatever is in the input
    Submit,
    SetInput(String),
    InsertSample(usize),

    SelectHistory(usize),
    RecallBackward,
    RecallForward,
    ClearHistory,

    ToggleTheme,
    SetTheme(Theme),
    ToggleContrast,
    ToggleSidebar,

    SwitchTab(Tab),
    NextTab,
    PrevTab,
    FirstTab,
    LastTab,

    ZoomIn,
    ZoomOut,
    ZoomReset,

    OpenDialog(Dialog),
    CloseDialog,

    SetBrailleNotation(BrailleNotation),
    SetSpeechStyle(SpeechStyle),
    SetNavigationMode(NavigationMode),

    /// put conversion output into one of the tabs
    Render(Tab, String),
    Copy(Tab),
    Export(Export),
}
