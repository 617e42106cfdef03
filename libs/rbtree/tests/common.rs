#![allow(unused, reason = "not used by all tests")]

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Counts the clones and drops of all [`Spy`]s sharing it.
#[derive(Debug, Default)]
pub struct Counts {
    clones: Cell<usize>,
    drops: Cell<usize>,
    poisoned: Cell<Option<u32>>,
}

impl Counts {
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn clones(&self) -> usize {
        self.clones.get()
    }

    pub fn drops(&self) -> usize {
        self.drops.get()
    }

    /// Makes cloning a [`Spy`] with the given key panic.
    pub fn poison(&self, key: u32) {
        self.poisoned.set(Some(key));
    }

    fn check_poison(&self, key: u32) {
        assert_ne!(self.poisoned.get(), Some(key), "cloning poisoned key {key}");
    }
}

/// A value that reports how often it has been cloned and dropped.
///
/// Ordering and equality only look at `key`, the shared counters are ignored.
#[derive(Debug)]
pub struct Spy {
    pub key: u32,
    counts: Rc<Counts>,
}

impl Spy {
    pub fn new(key: u32, counts: &Rc<Counts>) -> Self {
        Self {
            key,
            counts: counts.clone(),
        }
    }
}

impl Clone for Spy {
    fn clone(&self) -> Self {
        self.counts.check_poison(self.key);
        self.counts.clones.set(self.counts.clones() + 1);
        Self::new(self.key, &self.counts)
    }

    fn clone_from(&mut self, source: &Self) {
        source.counts.check_poison(source.key);
        self.key = source.key;
    }
}

impl Drop for Spy {
    fn drop(&mut self) {
        self.counts.drops.set(self.counts.drops() + 1);
    }
}

impl PartialEq for Spy {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Spy {}

impl PartialOrd for Spy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Spy {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
