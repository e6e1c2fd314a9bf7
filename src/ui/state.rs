use super::clipboard::{copy_text, Copied};
use super::*;
use crate::store::Store;
use crate::Config;

use std::path::PathBuf;
use std::time::Instant;

/// Where submitted expressions go to be converted.
///
/// The conversion itself happens elsewhere; nothing here looks at the result.
pub trait FormTarget {
    fn submit(&mut self, expression: &str);
}

/// A target that only logs what it was given
#[derive(Debug, Default)]
pub struct LogTarget;

impl FormTarget for LogTarget {
    fn submit(&mut self, expression: &str) {
        info!("submitting: {}", expression);
    }
}

/// The ui controller: owns the store, the settings and the page, and is the
/// only thing that changes them.
pub struct State {
    store: Box<dyn Store>,
    history: History,
    recall: Recall,
    settings: Settings,

    page: Page,
    announcer: Announcer,

    clipboard: Option<Box<dyn Clipboard>>,
    legacy_clipboard: Box<dyn Clipboard>,
    target: Box<dyn FormTarget>,

    downloads: PathBuf,
    now: Instant,
}

impl State {
    /// Restores the settings and the history list from `store`
    pub fn new(store: Box<dyn Store>, config: &Config) -> Self {
        let settings = Settings::restore(&*store, &config.settings());
        debug!("restored settings: {:?}", settings);

        let mut this = Self {
            store,
            history: History::new(),
            recall: Recall::new(),
            settings,

            page: Page::new(),
            announcer: Announcer::new(config.announce_delay(), config.politeness),

            clipboard: None,
            legacy_clipboard: Box::new(MemoryClipboard::new()),
            target: Box::new(LogTarget),

            downloads: config.downloads.clone(),
            now: Instant::now(),
        };

        this.refresh_history();
        this
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = page;
        self.refresh_history();
        self
    }

    pub fn with_target(mut self, target: impl FormTarget + 'static) -> Self {
        self.target = Box::new(target);
        self
    }

    pub fn with_clipboard(
        mut self,
        primary: Option<Box<dyn Clipboard>>,
        legacy: Box<dyn Clipboard>,
    ) -> Self {
        self.clipboard = primary;
        self.legacy_clipboard = legacy;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    pub fn store(&self) -> &dyn Store {
        &*self.store
    }

    /// The history as it is stored right now
    pub fn history(&self) -> Vec<String> {
        self.history.load(&*self.store).into_entries()
    }

    /// Moves the clock forward, letting due announcements through
    pub fn tick(&mut self, now: Instant) -> Option<String> {
        self.now = now;
        self.announcer.poll(now).map(str::to_string)
    }

    pub fn announce(&mut self, text: impl Into<String>) {
        self.announcer.announce(text, self.now)
    }

    fn refresh_history(&mut self) {
        let entries = self.history();
        self.page.show_history(view::items(&entries));
    }

    fn show_history(&mut self, entries: &[String]) {
        self.page.show_history(view::items(entries));
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.page.set_input(text);
    }

    /// Records the input in the history and hands it to the form target
    pub fn submit(&mut self) -> Result<(), Error> {
        let input = match self.page.input() {
            Some(input) => input.trim().to_string(),
            None => return Ok(()),
        };

        let entries = self.history.add(&mut *self.store, &input)?;
        self.recall.reset();
        self.show_history(&entries);

        if input.is_empty() {
            self.announce("Please enter a math expression");
            return Ok(());
        }

        self.target.submit(&input);
        self.announce("Converting expression");
        Ok(())
    }

    pub fn insert_sample(&mut self, index: usize) {
        let sample = match samples::get(index) {
            Some(sample) => sample,
            None => {
                debug!("no sample at {}", index);
                return;
            }
        };

        if self.page.set_input(sample.latex) {
            self.announce(format!("Example inserted: {}", sample.name));
        }
    }

    pub fn select_history(&mut self, index: usize) {
        let entry = match self.history.get(&*self.store, index) {
            Some(entry) => entry,
            None => return,
        };

        if self.page.set_input(entry) {
            self.announce("Expression loaded from history");
        }
    }

    pub fn recall_backward(&mut self) {
        let entries = self.history();
        if let Some(pos) = self.recall.backward(entries.len()) {
            self.page.set_input(entries[pos].as_str());
        }
    }

    pub fn recall_forward(&mut self) {
        let entries = self.history();
        if let Some(pos) = self.recall.forward(entries.len()) {
            self.page.set_input(entries[pos].as_str());
        }
    }

    pub fn clear_history(&mut self) -> Result<(), Error> {
        self.history.clear(&mut *self.store)?;
        self.recall.reset();
        self.show_history(&[]);
        self.announce("History cleared");
        Ok(())
    }

    /// Applies `change` only once the new value of `setting` is stored
    fn update<F>(&mut self, setting: Setting, change: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Settings),
    {
        let mut next = self.settings.clone();
        change(&mut next);
        next.persist(&mut *self.store, setting)?;
        self.settings = next;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), Error> {
        self.update(Setting::Theme, |s| s.theme = theme)?;
        self.announce(format!("{} theme enabled", capitalize(theme.as_str())));
        Ok(())
    }

    pub fn toggle_theme(&mut self) -> Result<(), Error> {
        let theme = self.settings.theme.toggled();
        self.set_theme(theme)
    }

    pub fn toggle_contrast(&mut self) -> Result<(), Error> {
        self.update(Setting::HighContrast, |s| s.high_contrast = !s.high_contrast)?;
        let state = if self.settings.high_contrast {
            "enabled"
        } else {
            "disabled"
        };
        self.announce(format!("High contrast {}", state));
        Ok(())
    }

    pub fn toggle_sidebar(&mut self) -> Result<(), Error> {
        self.update(Setting::SidebarCollapsed, |s| {
            s.sidebar_collapsed = !s.sidebar_collapsed
        })?;
        let state = if self.settings.sidebar_collapsed {
            "collapsed"
        } else {
            "expanded"
        };
        self.announce(format!("Sidebar {}", state));
        Ok(())
    }

    pub fn set_zoom(&mut self, zoom: Zoom) -> Result<(), Error> {
        if zoom == self.settings.zoom {
            trace!("zoom already at {}", zoom);
            return Ok(());
        }

        self.update(Setting::Zoom, |s| s.zoom = zoom)?;
        self.announce(format!("Zoom {}", zoom));
        Ok(())
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if self.page.active_tab == tab {
            return;
        }
        self.page.active_tab = tab;
        self.announce(format!("{} tab selected", capitalize(tab.as_str())));
    }

    pub fn open_dialog(&mut self, dialog: Dialog) {
        let title = dialog.title().to_string();
        if let Some(prev) = self.page.open_dialog(dialog) {
            trace!("replaced dialog: {:?}", prev);
        }
        self.announce(format!("{} dialog opened", title));
    }

    pub fn close_dialog(&mut self) {
        if self.page.close_dialog().is_some() {
            self.announce("Dialog closed");
        }
    }

    pub fn set_braille_notation(&mut self, notation: BrailleNotation) -> Result<(), Error> {
        self.update(Setting::BrailleNotation, |s| s.braille = notation)?;
        self.announce(format!("Braille notation set to {}", notation));
        Ok(())
    }

    pub fn set_speech_style(&mut self, style: SpeechStyle) -> Result<(), Error> {
        self.update(Setting::SpeechStyle, |s| s.speech = style)?;
        self.announce(format!("Speech style set to {}", style));
        Ok(())
    }

    pub fn set_navigation_mode(&mut self, mode: NavigationMode) -> Result<(), Error> {
        self.update(Setting::NavigationMode, |s| s.navigation = mode)?;
        self.announce(format!("Navigation mode set to {}", mode));
        Ok(())
    }

    pub fn render(&mut self, tab: Tab, text: impl Into<String>) {
        self.page.render(tab, text);
    }

    pub fn copy(&mut self, tab: Tab) {
        let text = match self.page.region(tab) {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => {
                debug!("nothing to copy from {}", tab);
                return;
            }
        };

        let primary = self.clipboard.as_mut().map(|c| &mut **c as &mut dyn Clipboard);
        match copy_text(primary, &mut *self.legacy_clipboard, &text) {
            Ok(copied) => {
                if copied == Copied::Fallback {
                    debug!("copied {} with the fallback", tab);
                }
                self.announce(format!("{} copied to clipboard", capitalize(tab.as_str())))
            }
            Err(err) => {
                warn!("cannot copy {}: {}", tab, err);
                self.announce("Unable to copy to clipboard")
            }
        }
    }

    /// Writes an export into the downloads directory, if the page has
    /// anything to export
    pub fn export(&mut self, export: Export) -> Result<Option<PathBuf>, Error> {
        let now = chrono::Local::now();
        let path = export
            .write(&self.page, &self.downloads, now)
            .map_err(Error::Export)?;

        if let Some(path) = &path {
            let name = path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default();
            self.announce(format!("Saved {}", name));
        }
        Ok(path)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(ch) => ch.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
