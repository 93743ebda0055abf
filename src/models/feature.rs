use std::borrow::Cow;

use super::{Icon, RichText};

/// One advertised capability shown as a card on the home page.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FeatureRecord {
    pub title: &'static str,
    pub icon: Icon,
    pub description: RichText,
}

impl FeatureRecord {
    pub const fn new(title: &'static str, icon: Icon, description: RichText) -> Self {
        Self {
            title,
            icon,
            description,
        }
    }
}

/// Ordered, read-only list of features handed to the section renderer.
///
/// Position is the only identity a record has; the list is never
/// reordered or edited after construction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FeatureList(Cow<'static, [FeatureRecord]>);

impl FeatureList {
    pub const fn empty() -> Self {
        Self(Cow::Borrowed(&[]))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FeatureList {
    fn default() -> Self {
        Self::from(crate::content::POUCH_FEATURES)
    }
}

impl From<&'static [FeatureRecord]> for FeatureList {
    fn from(records: &'static [FeatureRecord]) -> Self {
        Self(Cow::Borrowed(records))
    }
}

impl From<Vec<FeatureRecord>> for FeatureList {
    fn from(records: Vec<FeatureRecord>) -> Self {
        Self(Cow::Owned(records))
    }
}

impl FromIterator<FeatureRecord> for FeatureList {
    fn from_iter<I: IntoIterator<Item = FeatureRecord>>(iter: I) -> Self {
        Self(Cow::Owned(iter.into_iter().collect()))
    }
}

impl<'a> IntoIterator for &'a FeatureList {
    type Item = &'a FeatureRecord;
    type IntoIter = std::slice::Iter<'a, FeatureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
