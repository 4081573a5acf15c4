//! Open/closed state for expandable nodes.
//!
//! Shared by [`Collapse`](super::Collapse), [`TreeView`](super::TreeView)
//! branches and the submenus of [`Menu`](super::Menu) and
//! [`MenuBar`](super::MenuBar). Each node is independent: changing one never
//! touches its siblings, parent or children.

use std::collections::HashMap;
use std::hash::Hash;

use aerodom::Key;

/// Keyboard request to open or close a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureIntent {
    Expand,
    Collapse,
}

impl DisclosureIntent {
    /// Enter and ArrowRight expand; Escape and ArrowLeft collapse.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Enter | Key::Right => Some(Self::Expand),
            Key::Escape | Key::Left => Some(Self::Collapse),
            _ => None,
        }
    }
}

/// Per-node open flags keyed by node identity.
#[derive(Debug, Clone)]
pub struct Disclosure<K: Eq + Hash> {
    open: HashMap<K, bool>,
}

impl<K: Eq + Hash> Default for Disclosure<K> {
    fn default() -> Self {
        Self {
            open: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Disclosure<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the initial state of a node the first time it is seen.
    ///
    /// Later calls for the same node do nothing, so a default never
    /// overrides what the user did.
    pub fn register(&mut self, node: K, default_open: bool) {
        self.open.entry(node).or_insert(default_open);
    }

    /// Whether the node is registered.
    pub fn contains(&self, node: &K) -> bool {
        self.open.contains_key(node)
    }

    /// Whether the node is open. Unknown nodes are closed.
    pub fn is_open(&self, node: &K) -> bool {
        self.open.get(node).copied().unwrap_or(false)
    }

    /// Flip the node. Returns the new state.
    pub fn toggle(&mut self, node: K) -> bool {
        let slot = self.open.entry(node).or_insert(false);
        *slot = !*slot;
        *slot
    }

    pub fn open(&mut self, node: K) {
        self.open.insert(node, true);
    }

    pub fn close(&mut self, node: K) {
        self.open.insert(node, false);
    }

    /// Pointer entered the node's trigger.
    pub fn pointer_enter(&mut self, node: K) {
        self.open(node);
    }

    /// Pointer left the node's trigger.
    pub fn pointer_leave(&mut self, node: K) {
        self.close(node);
    }

    /// Apply a keyboard intent. Returns the new state.
    pub fn apply_intent(&mut self, node: K, intent: DisclosureIntent) -> bool {
        match intent {
            DisclosureIntent::Expand => self.open(node),
            DisclosureIntent::Collapse => self.close(node),
        }
        intent == DisclosureIntent::Expand
    }

    /// Number of open nodes.
    pub fn open_count(&self) -> usize {
        self.open.values().filter(|open| **open).count()
    }
}
