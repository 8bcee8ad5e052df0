use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Section identifiers (UI side)
// ============================================================================

/// One of the seven top-level content groupings of the checklist.
///
/// The string form matches the `id` of the section container in the markup.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    #[default]
    Introduction,
    CrossContamination,
    Cleaning,
    Chilling,
    Cooking,
    Management,
    Diary,
}

impl SectionId {
    /// All sections in navigation order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Introduction,
        SectionId::CrossContamination,
        SectionId::Cleaning,
        SectionId::Chilling,
        SectionId::Cooking,
        SectionId::Management,
        SectionId::Diary,
    ];

    /// Identifier used for the section container and `data-section` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Introduction => "introduction",
            SectionId::CrossContamination => "cross-contamination",
            SectionId::Cleaning => "cleaning",
            SectionId::Chilling => "chilling",
            SectionId::Cooking => "cooking",
            SectionId::Management => "management",
            SectionId::Diary => "diary",
        }
    }

    /// Human readable title, used in navigation and tooltips.
    pub fn display_name(&self) -> &'static str {
        match self {
            SectionId::Introduction => "Introduction",
            SectionId::CrossContamination => "Cross-contamination",
            SectionId::Cleaning => "Cleaning",
            SectionId::Chilling => "Chilling",
            SectionId::Cooking => "Cooking",
            SectionId::Management => "Management",
            SectionId::Diary => "Diary",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        SectionId::ALL.into_iter().find(|s| s.as_str() == id)
    }

    /// Storage key for this section's form data.
    pub fn key(&self) -> SectionKey {
        match self {
            SectionId::Introduction => SectionKey::BusinessInfo,
            SectionId::CrossContamination => SectionKey::CrossContamination,
            SectionId::Cleaning => SectionKey::Cleaning,
            SectionId::Chilling => SectionKey::Chilling,
            SectionId::Cooking => SectionKey::Cooking,
            SectionId::Management => SectionKey::Management,
            SectionId::Diary => SectionKey::Diary,
        }
    }

    /// Section bound to the digit `n` (1-based) for the quick-jump shortcut.
    pub fn for_shortcut(n: u32) -> Option<Self> {
        let index = usize::try_from(n.checked_sub(1)?).ok()?;
        SectionId::ALL.get(index).copied()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Section keys (storage side)
// ============================================================================

/// Key under which a section's fields live in the persisted `formData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKey {
    BusinessInfo,
    CrossContamination,
    Cleaning,
    Chilling,
    Cooking,
    Management,
    Diary,
    /// Anything not in the translation table.
    Other,
}

impl SectionKey {
    /// The seven keys backed by a real section.
    pub const SECTIONS: [SectionKey; 7] = [
        SectionKey::BusinessInfo,
        SectionKey::CrossContamination,
        SectionKey::Cleaning,
        SectionKey::Chilling,
        SectionKey::Cooking,
        SectionKey::Management,
        SectionKey::Diary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::BusinessInfo => "businessInfo",
            SectionKey::CrossContamination => "crossContamination",
            SectionKey::Cleaning => "cleaning",
            SectionKey::Chilling => "chilling",
            SectionKey::Cooking => "cooking",
            SectionKey::Management => "management",
            SectionKey::Diary => "diary",
            SectionKey::Other => "other",
        }
    }

    /// Parses a storage key. Section identifiers are accepted too, since older
    /// records listed completed sections by their UI id.
    pub fn parse(raw: &str) -> Self {
        SectionKey::SECTIONS
            .into_iter()
            .find(|k| k.as_str() == raw)
            .or_else(|| SectionId::from_id(raw).map(|id| id.key()))
            .unwrap_or(SectionKey::Other)
    }

    /// The section this key belongs to, if any.
    pub fn section(&self) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|id| id.key() == *self)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SectionKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(SectionKey::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_table() {
        assert_eq!(SectionId::Introduction.key(), SectionKey::BusinessInfo);
        assert_eq!(
            SectionId::from_id("cross-contamination").map(|s| s.key()),
            Some(SectionKey::CrossContamination)
        );
        assert_eq!(SectionId::from_id("allergens"), None);
    }

    #[test]
    fn test_key_parse_accepts_section_ids() {
        assert_eq!(SectionKey::parse("businessInfo"), SectionKey::BusinessInfo);
        assert_eq!(SectionKey::parse("introduction"), SectionKey::BusinessInfo);
        assert_eq!(SectionKey::parse("cross-contamination"), SectionKey::CrossContamination);
        assert_eq!(SectionKey::parse("whatever"), SectionKey::Other);
    }

    #[test]
    fn test_default_section_is_introduction() {
        assert_eq!(SectionId::default(), SectionId::Introduction);
    }

    #[test]
    fn test_shortcut_digits() {
        assert_eq!(SectionId::for_shortcut(1), Some(SectionId::Introduction));
        assert_eq!(SectionId::for_shortcut(7), Some(SectionId::Diary));
        assert_eq!(SectionId::for_shortcut(0), None);
        assert_eq!(SectionId::for_shortcut(8), None);
    }

    #[test]
    fn test_key_section_roundtrip() {
        for id in SectionId::ALL {
            assert_eq!(id.key().section(), Some(id));
        }
        assert_eq!(SectionKey::Other.section(), None);
    }
}
