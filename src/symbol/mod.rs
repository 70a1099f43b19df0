//! Marker symbols
//!
//! - `shapes`: one unit type per symbol and its outline geometry
//! - `catalog`: the static table of names, codes, flags and backoff
//!
//! Symbols are looked up by name (`"triangle-up"`) or by code (`5`). Codes
//! beyond the catalog, including the open/dot ranges, are reported as unknown.

pub mod catalog;
pub mod shapes;

pub use catalog::{CATALOG, Descriptor, SymbolFlags};
pub use shapes::{Catalogued, Outline, Symbol};

use std::str::FromStr;

use crate::align::Aligner;
use crate::defaults::EMPTY_PATH;
use crate::errors::UnknownSymbolError;
use crate::log::warn;

/// A symbol reference as callers write it: a name or a numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolId<'a> {
    Name(&'a str),
    Code(u32),
}

impl<'a> From<&'a str> for SymbolId<'a> {
    fn from(name: &'a str) -> Self {
        SymbolId::Name(name)
    }
}

impl<'a> From<&'a String> for SymbolId<'a> {
    fn from(name: &'a String) -> Self {
        SymbolId::Name(name.as_str())
    }
}

impl From<u32> for SymbolId<'_> {
    fn from(code: u32) -> Self {
        SymbolId::Code(code)
    }
}

impl Symbol {
    pub fn resolve<'a>(id: impl Into<SymbolId<'a>>) -> Result<Symbol, UnknownSymbolError> {
        match id.into() {
            SymbolId::Name(name) => Symbol::from_name(name),
            SymbolId::Code(code) => Symbol::from_code(code),
        }
    }

    pub fn from_name(name: &str) -> Result<Symbol, UnknownSymbolError> {
        CATALOG
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.symbol)
            .ok_or_else(|| UnknownSymbolError::for_name(name))
    }

    pub fn from_code(code: u32) -> Result<Symbol, UnknownSymbolError> {
        CATALOG
            .get(code as usize)
            .map(|d| d.symbol)
            .ok_or_else(|| UnknownSymbolError::for_code(code))
    }

    pub fn descriptor(&self) -> &'static Descriptor {
        // Every variant has an entry at its code; the catalog tests pin this
        &CATALOG[self.code() as usize]
    }

    pub fn name(&self) -> &'static str {
        self.descriptor().name
    }

    pub fn flags(&self) -> SymbolFlags {
        self.descriptor().flags
    }

    pub fn backoff(&self) -> Option<f64> {
        self.descriptor().backoff
    }

    /// Outline for `radius`, oriented by `angle` degrees and pushed `standoff`
    /// along the rotated +y axis.
    ///
    /// A missing angle means the point is not drawn and yields `M0,0Z`. An
    /// angle that is not finite is treated the same way, with a warning.
    pub fn generate(
        &self,
        aligner: &mut Aligner,
        radius: f64,
        angle: Option<f64>,
        standoff: Option<f64>,
    ) -> String {
        let Some(degrees) = angle else {
            return EMPTY_PATH.to_string();
        };
        if !degrees.is_finite() {
            warn!(symbol = self.name(), angle = degrees, "non-finite marker angle, not drawn");
            return EMPTY_PATH.to_string();
        }
        if !radius.is_finite() || radius < 0.0 {
            warn!(symbol = self.name(), radius, "degenerate marker radius");
        }

        let outline = self.outline(radius);
        if self.is_rotationally_symmetric() && standoff.unwrap_or(0.0) == 0.0 {
            return outline.to_string();
        }
        aligner.align_path(&outline, angle, standoff)
    }
}

impl FromStr for Symbol {
    type Err = UnknownSymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::from_name(s)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog names in code order
pub fn symbol_names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|d| d.name)
}
