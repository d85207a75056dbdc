//! The accumulator receiving parsed options and arguments.

use std::collections::BTreeMap;

/// Receives everything the [`Tokenizer`](crate::Tokenizer) classifies,
/// in input order.
///
/// A `value` of `None` marks an option given without a value (`--flag`),
/// which is distinct from an explicit empty value (`--flag=`).
pub trait Event {
    /// Records option `name`.
    fn set_option(&mut self, name: &str, value: Option<&str>);

    /// Records the positional argument with ordinal `index`.
    fn set_argument(&mut self, index: usize, value: &str);
}

impl<E> Event for &mut E
where
    E: Event + ?Sized,
{
    fn set_option(&mut self, name: &str, value: Option<&str>) {
        (**self).set_option(name, value);
    }

    fn set_argument(&mut self, index: usize, value: &str) {
        (**self).set_argument(index, value);
    }
}

/// In-memory [`Event`]. Repeated option names and indexes
/// overwrite, so the last write wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Captured {
    options: BTreeMap<String, Option<String>>,
    arguments: BTreeMap<usize, String>,
}

impl Captured {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up an option.
    ///
    /// The outer `Option` tells whether the option was seen at all,
    /// the inner one whether it carried a value.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<Option<&str>> {
        self.options.get(name).map(Option::as_deref)
    }

    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    #[must_use]
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(&index).map(String::as_str)
    }

    /// Options sorted by name.
    pub fn options(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.options
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    /// Positional arguments in ordinal order.
    pub fn arguments(&self) -> impl Iterator<Item = (usize, &str)> {
        self.arguments
            .iter()
            .map(|(index, value)| (*index, value.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.arguments.is_empty()
    }
}

impl Event for Captured {
    fn set_option(&mut self, name: &str, value: Option<&str>) {
        self.options
            .insert(name.to_owned(), value.map(str::to_owned));
    }

    fn set_argument(&mut self, index: usize, value: &str) {
        self.arguments.insert(index, value.to_owned());
    }
}
