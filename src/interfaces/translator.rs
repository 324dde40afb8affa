// ============================================================================
// Translator Interface
// Defines the contract for resolving localized unit words
// ============================================================================

use std::borrow::Cow;
use std::collections::HashMap;

/// Host i18n lookup used for the word-style unit table.
///
/// The formatter treats the returned strings as opaque.
pub trait Translator: Send + Sync {
    /// Resolve `msgid` (e.g. "million") to the display string
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str>;
}

/// Returns message ids unchanged
pub struct NoTranslation;

impl Translator for NoTranslation {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(msgid)
    }
}

/// In-memory message catalog. Missing ids fall through unchanged.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Add one translation
    pub fn with(mut self, msgid: impl Into<String>, text: impl Into<String>) -> Self {
        self.messages.insert(msgid.into(), text.into());
        self
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Russian magnitude abbreviations
    pub fn russian_units() -> Self {
        Self::new()
            .with("thousand", "тыс.")
            .with("million", "млн.")
            .with("billion", "млрд.")
            .with("trillion", "трлн.")
            .with("quadrillion", "квдрлн.")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Translator for Catalog {
    fn translate<'a>(&'a self, msgid: &'a str) -> Cow<'a, str> {
        match self.messages.get(msgid) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => {
                tracing::debug!("No translation for {:?}", msgid);
                Cow::Borrowed(msgid)
            },
        }
    }
}
