//! Object properties readable by value expressions, grouped by result type.

use std::sync::OnceLock;

use astra_ir::{Keyword, MeterType};

use crate::PropertyTable;

macro_rules! property_table {
    ($(#[$meta:meta])* $name:ident => [$($property:literal),* $(,)?]) => {
        $(#[$meta])*
        pub fn $name() -> &'static PropertyTable {
            static TABLE: OnceLock<PropertyTable> = OnceLock::new();
            TABLE.get_or_init(|| PropertyTable::new([$($property),*]))
        }
    };
}

property_table! {
    /// Integer-valued object properties.
    int_properties => [
        "owner", "id", "creationturn", "age", "producedbyempireid", "designid",
        "fleetid", "planetid", "systemid", "finaldestinationid", "nextsystemid",
        "previoussystemid", "numships",
    ]
}

property_table! {
    /// Integer values read from game state rather than from an object.
    int_non_object_properties => ["currentturn"]
}

/// Double-valued object properties: every meter plus position and speed.
pub fn double_properties() -> &'static PropertyTable {
    static TABLE: OnceLock<PropertyTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        PropertyTable::new(
            MeterType::ALL
                .iter()
                .map(|meter| meter.keyword())
                .chain(["x", "y", "speed"]),
        )
    })
}

property_table! {
    double_non_object_properties => ["universecentrex", "universecentrey"]
}

property_table! {
    string_properties => ["name", "species", "buildingtype", "focus"]
}

property_table! {
    planet_type_properties => ["planettype", "originaltype", "nextbetterplanettype"]
}

property_table! {
    planet_size_properties => ["planetsize", "nextlargerplanetsize", "nextsmallerplanetsize"]
}

property_table! {
    planet_environment_properties => ["planetenvironment"]
}

property_table! {
    object_type_properties => ["objecttype"]
}

property_table! {
    star_type_properties => ["startype", "nextolderstartype", "nextyoungerstartype"]
}

property_table! {
    /// Types without non-object properties share this empty table.
    no_properties => []
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeywordCase;

    #[test]
    fn test_double_properties_include_meters() {
        let table = double_properties();
        assert_eq!(table.len(), MeterType::ALL.len() + 3);
        assert_eq!(
            table.lookup("Population", KeywordCase::Insensitive),
            Some("population")
        );
        assert_eq!(table.lookup("owner", KeywordCase::Insensitive), None);
    }

    #[test]
    fn test_property_tables_are_disjoint_where_it_matters() {
        for name in ["owner", "id", "age"] {
            assert!(int_properties().contains(name));
            assert!(!double_properties().contains(name));
            assert!(!string_properties().contains(name));
        }
        assert!(no_properties().is_empty());
        assert!(int_non_object_properties().contains("currentturn"));
    }
}
