use super::view::HistoryItem;

/// The output tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Speech,
    Braille,
    Markup,
}

named!(Tab {
    Speech => "speech",
    Braille => "braille",
    Markup => "markup",
});

impl Default for Tab {
    fn default() -> Self {
        Tab::Speech
    }
}

impl Tab {
    fn index(self) -> usize {
        Self::ALL.iter().position(|&t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    pub fn first() -> Self {
        Self::ALL[0]
    }

    pub fn last() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }
}

/// A modal dialog. Only one is ever open.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Help,
    Settings,
    About,
    /// A blocking notice, used for features that aren't available
    Notice(String),
}

impl Dialog {
    pub fn title(&self) -> &str {
        match self {
            Dialog::Help => "Keyboard shortcuts",
            Dialog::Settings => "Settings",
            Dialog::About => "About",
            Dialog::Notice(..) => "Notice",
        }
    }
}

/// The elements of the page this layer touches.
///
/// Any element may be missing; operations on a missing element do nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// the expression input
    pub input: Option<String>,

    /// rendered conversion output, by tab
    pub speech: Option<String>,
    pub braille: Option<String>,
    pub markup: Option<String>,

    /// the rendered history list
    pub history: Option<Vec<HistoryItem>>,

    pub active_tab: Tab,
    pub dialog: Option<Dialog>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            input: Some(String::new()),
            speech: Some(String::new()),
            braille: Some(String::new()),
            markup: Some(String::new()),
            history: Some(vec![]),
            active_tab: Tab::default(),
            dialog: None,
        }
    }
}

impl Page {
    /// A page with every element present and empty
    pub fn new() -> Self {
        Self::default()
    }

    /// A page with no elements at all
    pub fn bare() -> Self {
        Self {
            input: None,
            speech: None,
            braille: None,
            markup: None,
            history: None,
            active_tab: Tab::default(),
            dialog: None,
        }
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_ref().map(String::as_str)
    }

    /// Replaces the input text. Returns false if there is no input.
    pub fn set_input(&mut self, text: impl Into<String>) -> bool {
        match self.input.as_mut() {
            Some(input) => {
                *input = text.into();
                true
            }
            None => {
                trace!("no input element");
                false
            }
        }
    }

    /// The text currently rendered for `tab`, if that region exists
    pub fn region(&self, tab: Tab) -> Option<&str> {
        let region = match tab {
            Tab::Speech => &self.speech,
            Tab::Braille => &self.braille,
            Tab::Markup => &self.markup,
        };
        region.as_ref().map(String::as_str)
    }

    /// Puts `text` into the output region for `tab`
    pub fn render(&mut self, tab: Tab, text: impl Into<String>) -> bool {
        let region = match tab {
            Tab::Speech => &mut self.speech,
            Tab::Braille => &mut self.braille,
            Tab::Markup => &mut self.markup,
        };
        match region.as_mut() {
            Some(region) => {
                *region = text.into();
                true
            }
            None => {
                trace!("no {} region", tab);
                false
            }
        }
    }

    /// Rebuilds the history list. Returns false if there is no list.
    pub fn show_history(&mut self, items: Vec<HistoryItem>) -> bool {
        match self.history.as_mut() {
            Some(list) => {
                *list = items;
                true
            }
            None => {
                trace!("no history list");
                false
            }
        }
    }

    /// Opens `dialog`, returning the one it replaced
    pub fn open_dialog(&mut self, dialog: Dialog) -> Option<Dialog> {
        self.dialog.replace(dialog)
    }

    pub fn close_dialog(&mut self) -> Option<Dialog> {
        self.dialog.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_cycle() {
        assert_eq!(Tab::Speech.next(), Tab::Braille);
        assert_eq!(Tab::Braille.next(), Tab::Markup);
        assert_eq!(Tab::Markup.next(), Tab::Speech);

        assert_eq!(Tab::Speech.prev(), Tab::Markup);
        assert_eq!(Tab::Markup.prev(), Tab::Braille);

        assert_eq!(Tab::first(), Tab::Speech);
        assert_eq!(Tab::last(), Tab::Markup);
        assert_eq!("braille".parse::<Tab>(), Ok(Tab::Braille));
    }

    #[test]
    fn one_dialog_at_a_time() {
        let mut page = Page::new();
        assert_eq!(page.close_dialog(), None);

        assert_eq!(page.open_dialog(Dialog::Help), None);
        assert_eq!(page.open_dialog(Dialog::Settings), Some(Dialog::Help));
        assert_eq!(page.dialog, Some(Dialog::Settings));

        assert_eq!(page.close_dialog(), Some(Dialog::Settings));
        assert_eq!(page.dialog, None);
    }

    #[test]
    fn missing_elements() {
        let mut page = Page::bare();
        assert!(!page.set_input("x"));
        assert!(!page.render(Tab::Braille, "x"));
        assert!(!page.show_history(vec![]));
        assert_eq!(page.input(), None);
        assert_eq!(page.region(Tab::Speech), None);
    }

    #[test]
    fn regions() {
        let mut page = Page::new();
        assert!(page.set_input(r"\sqrt{2}"));
        assert_eq!(page.input(), Some(r"\sqrt{2}"));

        assert!(page.render(Tab::Speech, "the square root of 2"));
        assert_eq!(page.region(Tab::Speech), Some("the square root of 2"));
        assert_eq!(page.region(Tab::Braille), Some(""));
    }
}
