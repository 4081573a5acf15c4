//! Controlled/uncontrolled value bridge.
//!
//! A stateful component either owns its value (uncontrolled) or mirrors a
//! value supplied by the caller on every build (controlled). `Controlled<T>`
//! holds the component-local copy and decides which one is shown.

/// Local copy of a component value plus the last external value seen.
///
/// - The rendered value is the external value when one is supplied, the local
///   one otherwise.
/// - A change always updates the local copy; the component then notifies the
///   caller whichever side owns the value.
/// - When the external value differs from the one seen on the previous build,
///   the local copy is overwritten to match (external to local only).
/// - When the external value goes away, the local copy is kept as is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Controlled<T> {
    internal: T,
    last_external: Option<T>,
    seeded: bool,
}

impl<T: Clone + PartialEq> Controlled<T> {
    /// Create a bridge seeded from the external value, or `default` when the
    /// caller supplies none.
    pub fn new(external: Option<T>, default: T) -> Self {
        let internal = external.clone().unwrap_or(default);
        Self {
            internal,
            last_external: external,
            seeded: true,
        }
    }

    /// Whether the initial value has been decided yet.
    ///
    /// A bridge created through `Default` is unseeded until its first build.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Seed an unseeded bridge. Does nothing once seeded.
    pub fn seed(&mut self, external: Option<&T>, default: T) {
        if !self.seeded {
            *self = Self::new(external.cloned(), default);
        }
    }

    /// Mirror a changed external value into the local copy.
    ///
    /// Returns true when the local copy was overwritten.
    pub fn sync(&mut self, external: Option<&T>) -> bool {
        match external {
            Some(value) if self.last_external.as_ref() != Some(value) => {
                self.internal = value.clone();
                self.last_external = Some(value.clone());
                true
            }
            Some(_) => false,
            None => {
                self.last_external = None;
                false
            }
        }
    }

    /// Whether `sync` (or `seed`) would change anything for this external value.
    pub fn needs_sync(&self, external: Option<&T>) -> bool {
        if !self.seeded {
            return true;
        }
        match external {
            Some(value) => self.last_external.as_ref() != Some(value),
            None => self.last_external.is_some(),
        }
    }

    /// The value to render for this build.
    pub fn value<'a>(&'a self, external: Option<&'a T>) -> &'a T {
        external.unwrap_or(&self.internal)
    }

    /// The component-local copy.
    pub fn internal(&self) -> &T {
        &self.internal
    }

    /// Record a change made by the user. Always updates the local copy.
    pub fn change(&mut self, value: T) {
        self.internal = value;
    }
}
