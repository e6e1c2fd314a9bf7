use super::page::{Page, Tab};

use chrono::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Export {
    /// speech and Braille together, as plain text
    Text,
    /// Braille only, as a Braille Ready File
    Braille,
}

named!(Export {
    Text => "txt",
    Braille => "brf",
});

impl Export {
    pub fn extension(self) -> &'static str {
        self.as_str()
    }

    fn prefix(self) -> &'static str {
        match self {
            Export::Text => "math-output",
            Export::Braille => "braille-output",
        }
    }

    pub fn file_name(self, now: DateTime<Local>) -> String {
        format!(
            "{}-{}.{}",
            self.prefix(),
            now.format("%Y%m%d-%H%M%S"),
            self.extension()
        )
    }

    /// What would be written, read from the page as it is rendered now.
    ///
    /// `None` when there's nothing to export.
    pub fn contents(self, page: &Page) -> Option<String> {
        fn non_empty(s: Option<&str>) -> Option<&str> {
            s.map(str::trim).filter(|s| !s.is_empty())
        }

        let braille = non_empty(page.region(Tab::Braille));
        match self {
            Export::Braille => braille.map(|s| format!("{}\n", s)),
            Export::Text => {
                let speech = non_empty(page.region(Tab::Speech));
                let mut buf = String::new();
                if let Some(speech) = speech {
                    buf.push_str("Speech:\n");
                    buf.push_str(speech);
                    buf.push('\n');
                }
                if let Some(braille) = braille {
                    if !buf.is_empty() {
                        buf.push('\n');
                    }
                    buf.push_str("Braille:\n");
                    buf.push_str(braille);
                    buf.push('\n');
                }
                if buf.is_empty() {
                    None
                } else {
                    Some(buf)
                }
            }
        }
    }

    /// Writes the export into `dir`. Returns the new file, or `None` if the
    /// page had nothing to export.
    pub fn write(
        self,
        page: &Page,
        dir: impl AsRef<Path>,
        now: DateTime<Local>,
    ) -> io::Result<Option<PathBuf>> {
        let data = match self.contents(page) {
            Some(data) => data,
            None => {
                debug!("nothing to export as .{}", self.extension());
                return Ok(None);
            }
        };

        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name(now));
        fs::write(&path, data)?;

        info!("exported {}", path.display());
        Ok(Some(path))
    }
}
