//! Column sort state for [`ListView`](super::ListView).

use std::cmp::Ordering;
use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Short name (`asc` / `desc`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Header indicator class.
    pub(crate) fn indicator_class(self) -> &'static str {
        match self {
            Self::Ascending => "up",
            Self::Descending => "down",
        }
    }
}

/// The active sort column and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDescriptor<K> {
    pub key: K,
    pub direction: SortDirection,
}

/// Tracks which column a table is ordered by.
///
/// No descriptor means input order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorting<K> {
    descriptor: Option<SortDescriptor<K>>,
}

impl<K> Default for Sorting<K> {
    fn default() -> Self {
        Self { descriptor: None }
    }
}

impl<K: Clone + PartialEq> Sorting<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start sorted by `key`.
    pub fn with_sort(mut self, key: K, direction: SortDirection) -> Self {
        self.descriptor = Some(SortDescriptor { key, direction });
        self
    }

    pub fn descriptor(&self) -> Option<&SortDescriptor<K>> {
        self.descriptor.as_ref()
    }

    pub fn key(&self) -> Option<&K> {
        self.descriptor.as_ref().map(|d| &d.key)
    }

    /// Direction of the active sort (ascending when unsorted).
    pub fn direction(&self) -> SortDirection {
        self.descriptor
            .as_ref()
            .map(|d| d.direction)
            .unwrap_or_default()
    }

    /// Whether `key` is the active sort column.
    pub fn is_sorted_by(&self, key: &K) -> bool {
        self.key() == Some(key)
    }

    pub fn clear(&mut self) {
        self.descriptor = None;
    }

    /// Header activation on `column`.
    ///
    /// A new column becomes active ascending; the active column flips
    /// direction. Non-sortable columns leave the state untouched and return
    /// `None`.
    pub fn sort_by(&mut self, column: K, sortable: bool) -> Option<SortDescriptor<K>> {
        if !sortable {
            return None;
        }

        let direction = match &self.descriptor {
            Some(current) if current.key == column => current.direction.flip(),
            _ => SortDirection::Ascending,
        };
        let descriptor = SortDescriptor {
            key: column,
            direction,
        };
        self.descriptor = Some(descriptor.clone());
        Some(descriptor)
    }

    /// Ordered view of `items` under the current descriptor.
    ///
    /// `extract` reads the sort value of an item for a column. The sort is
    /// stable, values that are neither less nor greater compare equal, and
    /// descending reverses the comparison. `items` itself is never reordered.
    pub fn sorted<'a, T, V, F>(&self, items: &'a [T], extract: F) -> Vec<&'a T>
    where
        V: PartialOrd,
        F: Fn(&T, &K) -> V,
    {
        let mut view: Vec<&T> = items.iter().collect();
        let Some(descriptor) = &self.descriptor else {
            return view;
        };

        view.sort_by(|a, b| {
            let ord = compare(&extract(a, &descriptor.key), &extract(b, &descriptor.key));
            match descriptor.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
        view
    }
}

/// Three-way comparison through `<` and `>` only.
fn compare<V: PartialOrd>(a: &V, b: &V) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

// =============================================================================
// CellValue
// =============================================================================

/// A table cell value.
///
/// Numbers compare numerically with each other, text compares by code
/// point. Empty cells order before every present value, so missing cells
/// never break the order of the rest of a column. Other unrelated kinds are
/// unordered and keep their relative input order when sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.partial_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => a.partial_cmp(b),
            (Self::Empty, Self::Empty) => Some(Ordering::Equal),
            (Self::Empty, _) => Some(Ordering::Less),
            (_, Self::Empty) => Some(Ordering::Greater),
            _ => match (self.as_f64(), other.as_f64()) {
                (Some(a), Some(b)) => a.partial_cmp(&b),
                _ => None,
            },
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
