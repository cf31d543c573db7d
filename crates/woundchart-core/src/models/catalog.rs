//! Fixed option lists behind the select fields.

use std::sync::LazyLock;

use crate::fields::{Catalog, SelectOption};

fn build(field: &str, placeholder: &str, items: &[(&str, &str)]) -> Catalog {
    let options = items
        .iter()
        .map(|(value, label)| SelectOption::new(value, label))
        .collect();
    Catalog::new(field, placeholder, options)
}

pub fn patients() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        build(
            "patient",
            "Search patients...",
            &[
                ("pt-001", "John Smith (DOB: 03/15/1958)"),
                ("pt-002", "Mary Johnson (DOB: 07/22/1965)"),
                ("pt-003", "Robert Williams (DOB: 11/30/1972)"),
                ("pt-004", "Patricia Brown (DOB: 05/18/1980)"),
                ("pt-005", "James Davis (DOB: 09/04/1955)"),
            ],
        )
    });
    &CATALOG
}

pub fn encounters() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        build(
            "encounter",
            "Search encounters...",
            &[
                ("enc-001", "Wound Care Follow-up - 01/15/2025"),
                ("enc-002", "Initial Wound Assessment - 01/10/2025"),
                ("enc-003", "Graft Application - 01/08/2025"),
                ("enc-004", "Post-Op Evaluation - 01/05/2025"),
                ("enc-005", "Debridement Procedure - 01/02/2025"),
            ],
        )
    });
    &CATALOG
}

pub fn procedures() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        build(
            "procedure",
            "Select procedure",
            &[
                ("cellular-graft", "Cellular Skin Graft Application"),
                ("debridement", "Wound Debridement"),
                ("compression", "Compression Therapy"),
                ("negative-pressure", "Negative Pressure Wound Therapy"),
            ],
        )
    });
    &CATALOG
}

pub fn offloading_methods() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        build(
            "offloading",
            "Search offloading methods...",
            &[
                ("tcc", "Total Contact Cast (TCC)"),
                ("cam", "CAM Walker Boot"),
                ("dh", "DH Offloading Shoe"),
                ("custom", "Custom Orthotic Boot"),
                ("felted", "Felted Foam Dressing"),
                ("crutches", "Crutches/Walker"),
            ],
        )
    });
    &CATALOG
}

pub fn states() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        build(
            "state",
            "Choose your state...",
            &[
                ("TX", "Texas"),
                ("CA", "California"),
                ("FL", "Florida"),
                ("NY", "New York"),
                ("PA", "Pennsylvania"),
            ],
        )
    });
    &CATALOG
}

pub fn wastage_trends() -> &'static Catalog {
    static CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
        build(
            "wastage_trend",
            "Select trend...",
            &[
                ("increasing", "Increasing"),
                ("stable", "Stable"),
                ("decreasing", "Decreasing"),
            ],
        )
    });
    &CATALOG
}

/// Look up a catalogue by its field name.
pub fn by_field(field: &str) -> Option<&'static Catalog> {
    [
        patients(),
        encounters(),
        procedures(),
        offloading_methods(),
        states(),
        wastage_trends(),
    ]
    .into_iter()
    .find(|c| c.field == field)
}
