//! Default precision and catalog constants

/// Decimal digits kept for every generated or transformed coordinate.
pub const COORD_DIGITS: u32 = 2;

/// Path returned when a marker is suppressed with a missing angle.
pub const EMPTY_PATH: &str = "M0,0Z";

/// Number of base symbols in the catalog.
pub const SYMBOL_COUNT: usize = 55;

/// Code offset of the outline-only variant of a base symbol.
pub const OPEN_OFFSET: u32 = 100;

/// Code offset of the dot-centered variant of a base symbol.
pub const DOT_OFFSET: u32 = 200;
