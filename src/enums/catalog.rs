//! The versioned catalog of allowed enumeration codes.
//!
//! Validation checks membership against a catalog instance passed in per
//! call rather than against ambient global state, so the validator stays pure
//! and testable against arbitrary catalog versions.

use std::collections::HashSet;

use strum::IntoEnumIterator;

use super::types::{
    DetailLocation, LocationReference, RaidLocationCategory, SourceOfInfo, Tactic, WasSuccessful,
};

/// Storage keys for each enumeration set, as used in the `enum_catalog` table.
pub mod set_names {
    /// Key for the tactic set.
    pub const TACTICS: &str = "tactics";
    /// Key for the raid location category set.
    pub const RAID_LOCATION_CATEGORY: &str = "raid_location_category";
    /// Key for the detail location set.
    pub const DETAIL_LOCATION: &str = "detail_location";
    /// Key for the outcome set.
    pub const WAS_SUCCESSFUL: &str = "was_successful";
    /// Key for the location reference set.
    pub const LOCATION_REFERENCE: &str = "location_reference";
    /// Key for the source-of-info set.
    pub const SOURCE_OF_INFO: &str = "source_of_info";
}

/// One version of the six closed enumeration sets.
///
/// Values are the wire codes. A catalog built from storage may lag or lead
/// the compiled-in enums during a rollout; validation treats catalog
/// membership as the authority and the typed enums as the representation, so
/// a code present in only one of the two is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCatalog {
    /// Allowed tactic codes.
    pub tactics: HashSet<String>,
    /// Allowed raid location category codes.
    pub raid_location_categories: HashSet<String>,
    /// Allowed detail location codes.
    pub detail_locations: HashSet<String>,
    /// Allowed outcome codes.
    pub was_successful: HashSet<String>,
    /// Allowed location reference codes.
    pub location_references: HashSet<String>,
    /// Allowed source-of-info codes.
    pub sources_of_info: HashSet<String>,
}

impl EnumCatalog {
    /// The catalog matching the compiled-in enumerations.
    pub fn builtin() -> Self {
        EnumCatalog {
            tactics: Tactic::iter().map(|v| v.to_string()).collect(),
            raid_location_categories: RaidLocationCategory::iter()
                .map(|v| v.to_string())
                .collect(),
            detail_locations: DetailLocation::iter().map(|v| v.to_string()).collect(),
            was_successful: WasSuccessful::iter().map(|v| v.to_string()).collect(),
            location_references: LocationReference::iter().map(|v| v.to_string()).collect(),
            sources_of_info: SourceOfInfo::iter().map(|v| v.to_string()).collect(),
        }
    }

    /// An empty catalog, ready to be filled from storage rows.
    pub fn empty() -> Self {
        EnumCatalog {
            tactics: HashSet::new(),
            raid_location_categories: HashSet::new(),
            detail_locations: HashSet::new(),
            was_successful: HashSet::new(),
            location_references: HashSet::new(),
            sources_of_info: HashSet::new(),
        }
    }

    /// Adds a code to the named set. Returns false for an unknown set name.
    pub fn insert(&mut self, set_name: &str, code: String) -> bool {
        let set = match set_name {
            set_names::TACTICS => &mut self.tactics,
            set_names::RAID_LOCATION_CATEGORY => &mut self.raid_location_categories,
            set_names::DETAIL_LOCATION => &mut self.detail_locations,
            set_names::WAS_SUCCESSFUL => &mut self.was_successful,
            set_names::LOCATION_REFERENCE => &mut self.location_references,
            set_names::SOURCE_OF_INFO => &mut self.sources_of_info,
            _ => return false,
        };
        set.insert(code);
        true
    }

    /// Whether every set has at least one code.
    ///
    /// A catalog loaded from storage with an empty set would reject every
    /// report touching that field; callers fall back to the builtin catalog
    /// instead of serving one.
    pub fn is_complete(&self) -> bool {
        !self.tactics.is_empty()
            && !self.raid_location_categories.is_empty()
            && !self.detail_locations.is_empty()
            && !self.was_successful.is_empty()
            && !self.location_references.is_empty()
            && !self.sources_of_info.is_empty()
    }

    /// Iterates `(set_name, code)` pairs across every set, for seeding.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut rows = Vec::new();
        let sets: [(&'static str, &HashSet<String>); 6] = [
            (set_names::TACTICS, &self.tactics),
            (
                set_names::RAID_LOCATION_CATEGORY,
                &self.raid_location_categories,
            ),
            (set_names::DETAIL_LOCATION, &self.detail_locations),
            (set_names::WAS_SUCCESSFUL, &self.was_successful),
            (set_names::LOCATION_REFERENCE, &self.location_references),
            (set_names::SOURCE_OF_INFO, &self.sources_of_info),
        ];
        for (name, set) in sets {
            for code in set {
                rows.push((name, code.as_str()));
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_complete() {
        let catalog = EnumCatalog::builtin();
        assert!(catalog.is_complete());
        assert_eq!(catalog.tactics.len(), 8);
        assert_eq!(catalog.raid_location_categories.len(), 7);
        assert_eq!(catalog.detail_locations.len(), 12);
        assert_eq!(catalog.was_successful.len(), 3);
        assert_eq!(catalog.location_references.len(), 6);
        assert_eq!(catalog.sources_of_info.len(), 4);
    }

    #[test]
    fn test_builtin_contains_expected_codes() {
        let catalog = EnumCatalog::builtin();
        assert!(catalog.tactics.contains("SURVEILLANCE"));
        assert!(catalog.tactics.contains("KNOCK_AND_TALK"));
        assert!(catalog.detail_locations.contains("IMMIGRATION_CENTER"));
        assert!(catalog.location_references.contains("NONE"));
        assert!(!catalog.tactics.contains("NOT_A_REAL_TACTIC"));
    }

    #[test]
    fn test_insert_routes_to_named_set() {
        let mut catalog = EnumCatalog::empty();
        assert!(catalog.insert(set_names::TACTICS, "SURVEILLANCE".into()));
        assert!(catalog.insert(set_names::WAS_SUCCESSFUL, "YES".into()));
        assert!(!catalog.insert("no_such_set", "CODE".into()));
        assert!(catalog.tactics.contains("SURVEILLANCE"));
        assert!(catalog.was_successful.contains("YES"));
    }

    #[test]
    fn test_empty_catalog_is_incomplete() {
        assert!(!EnumCatalog::empty().is_complete());

        let mut partial = EnumCatalog::builtin();
        partial.sources_of_info.clear();
        assert!(!partial.is_complete());
    }

    #[test]
    fn test_entries_round_trip() {
        let catalog = EnumCatalog::builtin();
        let mut rebuilt = EnumCatalog::empty();
        for (set_name, code) in catalog.entries() {
            assert!(rebuilt.insert(set_name, code.to_string()));
        }
        assert_eq!(rebuilt, catalog);
    }
}
