//! Section registry.
//!
//! The page has five fixed sections. Their declaration order is the scroll
//! priority used by the tracker and the order of the menu.

use std::fmt;
use std::str::FromStr;

use crate::error::SiteError;

/// Identifier of a navigable page section.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Projects,
    Transparency,
    Contact,
}

/// All sections in display (and scroll priority) order.
pub const SECTIONS: [SectionId; 5] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Projects,
    SectionId::Transparency,
    SectionId::Contact,
];

impl SectionId {
    /// DOM id of the section element, used as the in-page anchor.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "quem-somos",
            SectionId::Projects => "projetos",
            SectionId::Transparency => "transparencia",
            SectionId::Contact => "contato",
        }
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "Quem Somos",
            SectionId::Projects => "Projetos",
            SectionId::Transparency => "Transparência",
            SectionId::Contact => "Contato",
        }
    }

    /// Position in the registry.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a section by its DOM anchor.
    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        SECTIONS.iter().copied().find(|s| s.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::from_anchor(s).ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

/// A registry entry: what the menu renders for one section.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RegistryEntry {
    pub id: SectionId,
    pub label: &'static str,
}

/// The static section registry, in display order.
pub fn registry() -> [RegistryEntry; 5] {
    SECTIONS.map(|id| RegistryEntry {
        id,
        label: id.label(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order() {
        let ids: Vec<_> = registry().iter().map(|e| e.id).collect();
        assert_eq!(ids, SECTIONS.to_vec());
        for (i, id) in SECTIONS.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_anchor_roundtrip() {
        for id in SECTIONS {
            assert_eq!(id.anchor().parse::<SectionId>().unwrap(), id);
        }
    }

    #[test]
    fn test_unknown_anchor() {
        let err = "galeria".parse::<SectionId>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownSection(ref s) if s == "galeria"));
        assert_eq!(SectionId::from_anchor("About"), None);
    }

    #[test]
    fn test_default_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }

    #[test]
    fn test_labels_unique() {
        let mut labels: Vec<_> = SECTIONS.iter().map(|s| s.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 5);
    }
}
