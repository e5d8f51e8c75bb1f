#![forbid(unsafe_code)]

//! Inline style declarations applied to overlay nodes.

/// An ordered list of inline CSS declarations.
///
/// Hosts apply them in order with `style.setProperty(name, value)`; a later
/// declaration of the same property wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<(&'static str, String)>,
}

impl Declarations {
    /// Create an empty declaration list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration.
    #[must_use]
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.push(property, value);
        self
    }

    /// Append a declaration in place.
    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.entries.push((property, value.into()));
    }

    /// Iterate declarations in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Last value set for `property`, if any.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| *k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Number of declarations.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no declarations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a `style` attribute value.
    pub fn to_css_text(&self) -> String {
        self.iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Extend<(&'static str, String)> for Declarations {
    fn extend<T: IntoIterator<Item = (&'static str, String)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}
