use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardError {
    Unavailable,
    Rejected(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "clipboard is not available"),
            ClipboardError::Rejected(reason) => write!(f, "clipboard rejected the write: {}", reason),
        }
    }
}

/// Somewhere text can be copied to
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Which mechanism ended up doing the copy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Copied {
    Primary,
    Fallback,
}

/// Copies `text` with `primary`, falling back to `legacy` when the primary
/// clipboard is missing or refuses
pub fn copy_text(
    primary: Option<&mut dyn Clipboard>,
    legacy: &mut dyn Clipboard,
    text: &str,
) -> Result<Copied, ClipboardError> {
    if let Some(primary) = primary {
        match primary.write_text(text) {
            Ok(()) => return Ok(Copied::Primary),
            Err(err) => debug!("primary clipboard failed: {}, falling back", err),
        }
    }

    legacy.write_text(text).map(|_| Copied::Fallback)
}

/// Keeps the last copied text in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_ref().map(String::as_str)
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Rejected("denied".into()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}
