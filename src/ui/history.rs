use super::*;
use crate::store::{self, keys, Store};

/// How many expressions are remembered
pub const HISTORY_CAPACITY: usize = 10;

/// What was found under the history key
#[derive(Debug)]
pub enum Loaded {
    Entries(Vec<String>),
    /// the stored value wasn't a JSON array of strings. callers treat this as
    /// an empty history
    Corrupt(serde_json::Error),
}

impl Loaded {
    pub fn entries(&self) -> &[String] {
        match self {
            Loaded::Entries(entries) => entries,
            Loaded::Corrupt(..) => &[],
        }
    }

    pub fn into_entries(self) -> Vec<String> {
        match self {
            Loaded::Entries(entries) => entries,
            Loaded::Corrupt(..) => vec![],
        }
    }

    pub fn is_corrupt(&self) -> bool {
        match self {
            Loaded::Corrupt(..) => true,
            _ => false,
        }
    }
}

/// The log of recently submitted expressions.
///
/// Holds no entries itself: every operation reads the current value from the
/// store, and every mutation writes the whole sequence back.
#[derive(Debug, Clone)]
pub struct History {
    key: &'static str,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            key: keys::HISTORY,
            capacity: HISTORY_CAPACITY,
        }
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: Store + ?Sized>(&self, store: &S) -> Loaded {
        let data = match store.get(self.key) {
            Some(data) => data,
            None => return Loaded::Entries(vec![]),
        };

        match serde_json::from_str::<Vec<String>>(&data) {
            Ok(entries) => Loaded::Entries(entries),
            Err(err) => {
                warn!("stored history is corrupt: {}", err);
                Loaded::Corrupt(err)
            }
        }
    }

    /// Records `expression` as the most recent entry and returns the new log.
    ///
    /// Blank expressions leave the log (and the store) untouched.
    pub fn add<S: Store + ?Sized>(
        &self,
        store: &mut S,
        expression: &str,
    ) -> Result<Vec<String>, store::Error> {
        let current = self.load(store);
        if expression.trim().is_empty() {
            trace!("ignoring a blank expression");
            return Ok(current.into_entries());
        }

        let mut set = BoundedSet::from_recent(self.capacity, current.into_entries());
        if let Some(evicted) = set.insert(expression.to_string()) {
            trace!("evicted from history: {}", evicted);
        }

        let entries = set.into_vec();
        let data = serde_json::to_string(&entries).map_err(store::Error::Encode)?;
        store.set(self.key, &data)?;

        debug!("history now has {} entries", entries.len());
        Ok(entries)
    }

    /// Forgets everything. The key is removed, not set to an empty array.
    pub fn clear<S: Store + ?Sized>(&self, store: &mut S) -> Result<(), store::Error> {
        debug!("clearing history");
        store.remove(self.key)
    }

    pub fn get<S: Store + ?Sized>(&self, store: &S, index: usize) -> Option<String> {
        self.load(store).into_entries().into_iter().nth(index)
    }
}

/// Cursor for stepping through the history from the input.
///
/// Nothing is selected until the first step backward, which selects the most
/// recent entry.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Recall {
    pos: Option<usize>,
}

impl Recall {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.pos = None;
    }

    pub fn position(&self) -> Option<usize> {
        self.pos
    }

    /// Steps toward older entries, stopping at the oldest
    pub fn backward(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            self.pos = None;
            return None;
        }

        let next = match self.pos {
            None => 0,
            Some(pos) => (pos + 1).min(len - 1),
        };
        self.pos = Some(next);
        self.pos
    }

    /// Steps toward newer entries. Stepping past the newest deselects.
    pub fn forward(&mut self, len: usize) -> Option<usize> {
        self.pos = match self.pos {
            Some(pos) if pos > 0 && len > 0 => Some((pos - 1).min(len - 1)),
            _ => None,
        };
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn add_all(history: &History, store: &mut MemoryStore, list: &[&str]) -> Vec<String> {
        let mut out = vec![];
        for item in list {
            out = history.add(store, item).unwrap();
        }
        out
    }

    #[test]
    fn worked_example() {
        let history = History::new();
        let mut store = MemoryStore::new();

        assert_eq!(history.add(&mut store, "a").unwrap(), vec!["a"]);
        assert_eq!(history.add(&mut store, "b").unwrap(), vec!["b", "a"]);
        assert_eq!(history.add(&mut store, "a").unwrap(), vec!["a", "b"]);

        let list = add_all(
            &history,
            &mut store,
            &["c", "d", "e", "f", "g", "h", "i", "j", "k"],
        );
        assert_eq!(
            list,
            vec!["k", "j", "i", "h", "g", "f", "e", "d", "c", "a"]
        );
    }

    #[test]
    fn dedup() {
        let history = History::new();
        let mut store = MemoryStore::new();

        let list = add_all(&history, &mut store, &["x", "y", "x", "z", "y", "x"]);
        assert_eq!(list, vec!["x", "y", "z"]);

        let mut sorted = list.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), list.len());
    }

    #[test]
    fn most_recent_is_first() {
        let history = History::new();
        let mut store = MemoryStore::new();
        add_all(&history, &mut store, &["a", "b", "c"]);

        for item in &["b", "c", "new", "a"] {
            history.add(&mut store, item).unwrap();
            assert_eq!(history.get(&store, 0), Some(item.to_string()));
        }
    }

    #[test]
    fn capacity() {
        let history = History::new();
        let mut store = MemoryStore::new();

        let inputs = (0..25).map(|n| format!("x^{}", n)).collect::<Vec<_>>();
        for (n, input) in inputs.iter().enumerate() {
            let list = history.add(&mut store, input).unwrap();
            assert!(list.len() <= HISTORY_CAPACITY);
            assert_eq!(list.len(), (n + 1).min(HISTORY_CAPACITY));
        }

        let expected = inputs.iter().rev().take(10).cloned().collect::<Vec<_>>();
        assert_eq!(history.load(&store).into_entries(), expected);
    }

    #[test]
    fn readd_is_idempotent() {
        let history = History::new();
        let mut store = MemoryStore::new();
        add_all(&history, &mut store, &["a", "b"]);

        let once = history.add(&mut store, "c").unwrap();
        let twice = history.add(&mut store, "c").unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice, vec!["c", "b", "a"]);
    }

    #[test]
    fn blank_is_a_noop() {
        let history = History::new();
        let mut store = MemoryStore::new();

        assert!(history.add(&mut store, "").unwrap().is_empty());
        assert!(history.add(&mut store, "   ").unwrap().is_empty());
        assert!(history.add(&mut store, "\t\n").unwrap().is_empty());
        assert!(!store.contains(keys::HISTORY));

        history.add(&mut store, "a").unwrap();
        let before = store.get(keys::HISTORY);
        assert_eq!(history.add(&mut store, " ").unwrap(), vec!["a"]);
        assert_eq!(store.get(keys::HISTORY), before);
    }

    #[test]
    fn no_normalization() {
        let history = History::new();
        let mut store = MemoryStore::new();

        let list = add_all(&history, &mut store, &["x+1", "x +1", "X+1", " x+1"]);
        assert_eq!(list, vec![" x+1", "X+1", "x +1", "x+1"]);
    }

    #[test]
    fn round_trip() {
        let history = History::new();
        let mut store = MemoryStore::new();

        let list = add_all(&history, &mut store, &[r"\frac{a}{b}", "x^2+1"]);
        assert_eq!(history.load(&store).into_entries(), list);
        assert_eq!(
            store.get(keys::HISTORY),
            Some(r#"["x^2+1","\\frac{a}{b}"]"#.to_string())
        );

        history.clear(&mut store).unwrap();
        let list = add_all(&history, &mut store, &["y"]);
        assert_eq!(history.load(&store).into_entries(), list);
    }

    #[test]
    fn clear_removes_key() {
        let history = History::new();
        let mut store = MemoryStore::new();
        add_all(&history, &mut store, &["a", "b"]);

        history.clear(&mut store).unwrap();
        assert!(!store.contains(keys::HISTORY));
        assert!(history.load(&store).entries().is_empty());
        assert_eq!(history.get(&store, 0), None);

        // clearing twice is fine
        history.clear(&mut store).unwrap();
    }

    #[test]
    fn get_out_of_range() {
        let history = History::new();
        let mut store = MemoryStore::new();
        add_all(&history, &mut store, &["a", "b"]);

        assert_eq!(history.get(&store, 1), Some("a".to_string()));
        assert_eq!(history.get(&store, 2), None);
        assert_eq!(history.get(&store, 100), None);
    }

    #[test]
    fn corrupt_data() {
        let history = History::new();
        let mut store = MemoryStore::new();

        for bad in &["{not json", r#"{"a": 1}"#, "[1, 2, 3]", "\"x\""] {
            store.set(keys::HISTORY, bad).unwrap();
            let loaded = history.load(&store);
            assert!(loaded.is_corrupt(), "{}", bad);
            assert!(loaded.entries().is_empty());
            assert_eq!(history.get(&store, 0), None);
        }

        // the next add starts over
        assert_eq!(history.add(&mut store, "a").unwrap(), vec!["a"]);
        assert!(!history.load(&store).is_corrupt());
    }

    #[test]
    fn store_is_the_source_of_truth() {
        let history = History::new();
        let mut store = MemoryStore::new();
        add_all(&history, &mut store, &["a"]);

        // someone else wrote the key
        store.set(keys::HISTORY, r#"["z","y"]"#).unwrap();
        assert_eq!(history.add(&mut store, "a").unwrap(), vec!["a", "z", "y"]);
    }

    #[test]
    fn recall() {
        let mut recall = Recall::new();
        assert_eq!(recall.backward(0), None);
        assert_eq!(recall.forward(3), None);

        assert_eq!(recall.backward(3), Some(0));
        assert_eq!(recall.backward(3), Some(1));
        assert_eq!(recall.backward(3), Some(2));
        assert_eq!(recall.backward(3), Some(2));

        assert_eq!(recall.forward(3), Some(1));
        assert_eq!(recall.forward(3), Some(0));
        assert_eq!(recall.forward(3), None);
        assert_eq!(recall.position(), None);

        recall.backward(3);
        recall.reset();
        assert_eq!(recall.position(), None);
    }
}
