//! Record fields that remember whether they were given or defaulted.

use std::fmt;
use std::ops::Deref;

/// A field value, tagged with where it came from.
///
/// Both variants carry a usable value: a defaulted field holds its
/// keyword-specific default (`-1e20` for "no limit", `"OPEN"`, ...), so code
/// that only needs the number reads through [`Deref`]. The writer uses the
/// tag to emit `1*` for defaulted fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Defaulted<T> {
    /// Written explicitly in the deck.
    Given(T),
    /// Left to its default by `*`, `k*` or an early `/`.
    Default(T),
}

impl<T> Defaulted<T> {
    pub fn value(&self) -> &T {
        match self {
            Defaulted::Given(v) | Defaulted::Default(v) => v,
        }
    }

    pub fn value_mut(&mut self) -> &mut T {
        match self {
            Defaulted::Given(v) | Defaulted::Default(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Defaulted::Given(v) | Defaulted::Default(v) => v,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Defaulted::Default(_))
    }

    pub fn is_given(&self) -> bool {
        matches!(self, Defaulted::Given(_))
    }

    /// Replace the value, keeping the tag.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Defaulted<U> {
        match self {
            Defaulted::Given(v) => Defaulted::Given(f(v)),
            Defaulted::Default(v) => Defaulted::Default(f(v)),
        }
    }
}

impl Defaulted<f64> {
    /// Multiply in place; defaulted values are scaled too.
    pub fn scale(&mut self, factor: f64) {
        *self.value_mut() *= factor;
    }
}

impl Defaulted<String> {
    pub fn as_str(&self) -> &str {
        self.value().as_str()
    }
}

impl<T> Deref for Defaulted<T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value()
    }
}

impl<T: Default> Default for Defaulted<T> {
    fn default() -> Self {
        Defaulted::Default(T::default())
    }
}

impl PartialEq<f64> for Defaulted<f64> {
    fn eq(&self, other: &f64) -> bool {
        self.value() == other
    }
}

impl PartialEq<i32> for Defaulted<i32> {
    fn eq(&self, other: &i32) -> bool {
        self.value() == other
    }
}

impl PartialEq<&str> for Defaulted<String> {
    fn eq(&self, other: &&str) -> bool {
        self.value() == other
    }
}

impl<T: fmt::Display> fmt::Display for Defaulted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value().fmt(f)
    }
}
