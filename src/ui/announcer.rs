use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// How assertive the live region is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Politeness {
    Off,
    Polite,
    Assertive,
}

named!(Politeness {
    Off => "off",
    Polite => "polite",
    Assertive => "assertive",
});

pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// The live region shared by everything that talks to a screen reader.
///
/// An announcement first empties the region, then sets the text once the
/// delay has passed, so repeating the same message is still read out.
#[derive(Debug)]
pub struct Announcer {
    region: Option<String>,
    pending: Option<(Instant, String)>,
    delay: Duration,
    politeness: Politeness,
}

impl Announcer {
    pub fn new(delay: Duration, politeness: Politeness) -> Self {
        Self {
            region: Some(String::new()),
            pending: None,
            delay,
            politeness,
        }
    }

    /// An announcer with no live region on the page
    pub fn detached() -> Self {
        Self {
            region: None,
            ..Self::new(DEFAULT_DELAY, Politeness::Polite)
        }
    }

    pub fn politeness(&self) -> Politeness {
        self.politeness
    }

    /// The text currently in the live region
    pub fn text(&self) -> Option<&str> {
        self.region.as_ref().map(String::as_str)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn announce(&mut self, text: impl Into<String>, now: Instant) {
        if self.politeness == Politeness::Off {
            return;
        }

        let region = match self.region.as_mut() {
            Some(region) => region,
            None => {
                trace!("no live region");
                return;
            }
        };

        let text = text.into();
        debug!("announce: {}", text);
        region.clear();
        self.pending = Some((now + self.delay, text));
    }

    /// Applies a pending announcement if it's due. Returns the text that was
    /// set, if any.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        match self.pending {
            Some((due, _)) if now >= due => {}
            _ => return None,
        }

        let (_, text) = self.pending.take()?;
        let region = self.region.as_mut()?;
        *region = text;
        Some(region.as_str())
    }

    /// Applies a pending announcement regardless of the delay
    pub fn flush(&mut self) -> Option<&str> {
        let (_, text) = self.pending.take()?;
        let region = self.region.as_mut()?;
        *region = text;
        Some(region.as_str())
    }
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, Politeness::Polite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_the_delay() {
        let start = Instant::now();
        let mut announcer = Announcer::default();

        announcer.announce("Theme set to dark", start);
        assert_eq!(announcer.text(), Some(""));
        assert!(announcer.is_pending());

        assert_eq!(announcer.poll(start + Duration::from_millis(50)), None);
        assert_eq!(announcer.text(), Some(""));

        assert_eq!(
            announcer.poll(start + DEFAULT_DELAY),
            Some("Theme set to dark")
        );
        assert_eq!(announcer.text(), Some("Theme set to dark"));
        assert!(!announcer.is_pending());
        assert_eq!(announcer.poll(start + DEFAULT_DELAY * 2), None);
    }

    #[test]
    fn repeat_clears_first() {
        let start = Instant::now();
        let mut announcer = Announcer::default();
        announcer.announce("Copied", start);
        announcer.poll(start + DEFAULT_DELAY);

        let later = start + DEFAULT_DELAY * 2;
        announcer.announce("Copied", later);
        assert_eq!(announcer.text(), Some(""));
        assert_eq!(announcer.poll(later + DEFAULT_DELAY), Some("Copied"));
    }

    #[test]
    fn newer_replaces_pending() {
        let start = Instant::now();
        let mut announcer = Announcer::default();
        announcer.announce("first", start);
        announcer.announce("second", start);
        assert_eq!(announcer.flush(), Some("second"));
        assert_eq!(announcer.flush(), None);
    }

    #[test]
    fn silent_without_a_region() {
        let start = Instant::now();
        let mut announcer = Announcer::detached();
        announcer.announce("hello", start);
        assert!(!announcer.is_pending());
        assert_eq!(announcer.poll(start + DEFAULT_DELAY), None);
        assert_eq!(announcer.text(), None);
    }

    #[test]
    fn off_says_nothing() {
        let start = Instant::now();
        let mut announcer = Announcer::new(DEFAULT_DELAY, Politeness::Off);
        announcer.announce("hello", start);
        assert!(!announcer.is_pending());
        assert_eq!(announcer.text(), Some(""));
    }
}
