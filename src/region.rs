//! Static table of regional PV specific yields.
//!
//! Yields are annual kWh produced per installed kWp. The table is ordered
//! the way regions are offered to the user; the first entry is the default.

/// One row of the region table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Region name, used as the lookup key.
    pub name: &'static str,
    /// Annual specific yield (kWh per kWp per year).
    pub yield_kwh_per_kwp: f64,
}

const fn region(name: &'static str, yield_kwh_per_kwp: f64) -> Region {
    Region {
        name,
        yield_kwh_per_kwp,
    }
}

/// All supported regions.
pub const REGIONS: [Region; 19] = [
    region("Andalucía", 1750.0),
    region("Aragón", 1650.0),
    region("Asturias", 1350.0),
    region("Baleares", 1600.0),
    region("Canarias", 1800.0),
    region("Cantabria", 1350.0),
    region("Castilla-La Mancha", 1700.0),
    region("Castilla y León", 1550.0),
    region("Cataluña", 1550.0),
    region("Comunidad de Madrid", 1600.0),
    region("Comunidad Valenciana", 1650.0),
    region("Extremadura", 1750.0),
    region("Galicia", 1350.0),
    region("La Rioja", 1600.0),
    region("Murcia", 1700.0),
    region("Navarra", 1600.0),
    region("País Vasco", 1400.0),
    region("Ceuta", 1700.0),
    region("Melilla", 1700.0),
];

/// Returns the default region name (first table entry).
pub fn default_region() -> &'static str {
    REGIONS[0].name
}

/// Looks up the specific yield for `name` (exact match).
pub fn specific_yield(name: &str) -> Option<f64> {
    REGIONS
        .iter()
        .find(|r| r.name == name)
        .map(|r| r.yield_kwh_per_kwp)
}

/// Returns `true` when `name` is a key of the table.
pub fn contains(name: &str) -> bool {
    specific_yield(name).is_some()
}

/// Iterates region names in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGIONS.iter().map(|r| r.name)
}

/// Index of `name` in the table, if present.
pub fn position(name: &str) -> Option<usize> {
    REGIONS.iter().position(|r| r.name == name)
}
