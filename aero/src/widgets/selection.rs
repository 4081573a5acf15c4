//! Shared selection types for list-like widgets.
//!
//! Used by [`ListBox`](super::ListBox), [`ListView`](super::ListView) and the
//! radio groups of [`Menu`](super::Menu).

use aerodom::Modifiers;

/// Selection mode for list-like widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one key is selected.
    #[default]
    Single,
    /// Any number of keys, with toggle and range modifiers.
    Multi,
}

/// How a pointer selection combines with the existing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectModifier {
    /// Replace the selection with the target.
    #[default]
    None,
    /// Add the target when absent, remove it when present (Ctrl-click).
    Toggle,
    /// Extend from the anchor to the target (Shift-click).
    Range,
}

impl SelectModifier {
    /// Map held keyboard modifiers to a selection modifier.
    ///
    /// Ctrl and Meta toggle, Shift extends. Toggle wins when both are held.
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.ctrl || modifiers.meta {
            Self::Toggle
        } else if modifiers.shift {
            Self::Range
        } else {
            Self::None
        }
    }
}

/// Notification payload describing the selection after a change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange<K> {
    /// Single mode: the one selected key.
    Single(K),
    /// Multi mode: the whole ordered selection.
    Multiple(Vec<K>),
}

impl<K: Clone> SelectionChange<K> {
    /// The selected keys, in selection order.
    pub fn keys(&self) -> Vec<K> {
        match self {
            Self::Single(key) => vec![key.clone()],
            Self::Multiple(keys) => keys.clone(),
        }
    }
}

/// Tracks selected keys in the order they were selected.
///
/// The last key is the range anchor. Disabled keys never enter the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<K: Clone + PartialEq> {
    mode: SelectionMode,
    selected: Vec<K>,
}

impl<K: Clone + PartialEq> Default for Selection<K> {
    fn default() -> Self {
        Self::new(SelectionMode::Single)
    }
}

impl<K: Clone + PartialEq> Selection<K> {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: Vec::new(),
        }
    }

    /// Create single-selection mode.
    pub fn single() -> Self {
        Self::new(SelectionMode::Single)
    }

    /// Create multi-selection mode.
    pub fn multi() -> Self {
        Self::new(SelectionMode::Multi)
    }

    /// Builder form of [`Selection::set_selected`].
    pub fn with_selected(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.set_selected(keys);
        self
    }

    /// Replace the selection.
    ///
    /// Duplicates are dropped (first occurrence wins); single mode keeps only
    /// the first key.
    pub fn set_selected(&mut self, keys: impl IntoIterator<Item = K>) {
        self.selected.clear();
        for key in keys {
            if self.mode == SelectionMode::Single && !self.selected.is_empty() {
                break;
            }
            if !self.selected.contains(&key) {
                self.selected.push(key);
            }
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    /// All selected keys, in selection order.
    pub fn selected(&self) -> &[K] {
        &self.selected
    }

    /// The most recently selected key.
    pub fn anchor(&self) -> Option<&K> {
        self.selected.last()
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Apply a pointer selection of `key`.
    ///
    /// `order` is the caller's item order (used for ranges) and `is_disabled`
    /// reports keys that must never be selected. Returns the resulting
    /// selection, or `None` when the target is disabled and nothing changed.
    pub fn select<F>(
        &mut self,
        key: K,
        modifier: SelectModifier,
        order: &[K],
        is_disabled: F,
    ) -> Option<SelectionChange<K>>
    where
        F: Fn(&K) -> bool,
    {
        if is_disabled(&key) {
            return None;
        }

        match (self.mode, modifier) {
            (SelectionMode::Single, _) | (SelectionMode::Multi, SelectModifier::None) => {
                self.selected = vec![key];
            }
            (SelectionMode::Multi, SelectModifier::Toggle) => {
                if let Some(pos) = self.selected.iter().position(|k| *k == key) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(key);
                }
            }
            (SelectionMode::Multi, SelectModifier::Range) => {
                self.extend_range(key, order, &is_disabled);
            }
        }

        Some(self.change())
    }

    /// Union the run between the anchor and `key` into the selection.
    ///
    /// Falls back to a plain select when there is no anchor or either end is
    /// missing from `order`.
    fn extend_range<F>(&mut self, key: K, order: &[K], is_disabled: &F)
    where
        F: Fn(&K) -> bool,
    {
        let anchor_index = self
            .anchor()
            .and_then(|anchor| order.iter().position(|k| k == anchor));
        let target_index = order.iter().position(|k| *k == key);

        let (Some(anchor_index), Some(target_index)) = (anchor_index, target_index) else {
            self.selected = vec![key];
            return;
        };

        let start = anchor_index.min(target_index);
        let end = anchor_index.max(target_index);
        for k in &order[start..=end] {
            if !is_disabled(k) && !self.selected.contains(k) {
                self.selected.push(k.clone());
            }
        }
    }

    /// Describe the current selection as a change notification.
    pub fn change(&self) -> SelectionChange<K> {
        match self.mode {
            SelectionMode::Single => match self.selected.first() {
                Some(key) => SelectionChange::Single(key.clone()),
                None => SelectionChange::Multiple(Vec::new()),
            },
            SelectionMode::Multi => SelectionChange::Multiple(self.selected.clone()),
        }
    }
}
