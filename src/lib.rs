//! Marker symbol geometry
//!
//! A catalog of 55 parametric marker shapes and the transform that orients
//! them around a data point. Every shape is generated as SVG path text for a
//! given radius, then optionally rotated by an angle in degrees and pushed
//! away from its anchor by a standoff.
//!
//! ```
//! let path = plotmark::generate("square", 5.0, Some(90.0), None).unwrap();
//! assert_eq!(path, "M-5,5L-5,-5L5,-5L5,5Z");
//!
//! // No angle means the point is not drawn
//! assert_eq!(plotmark::generate("star", 5.0, None, None).unwrap(), "M0,0Z");
//! ```
//!
//! The free functions use an [`Aligner`] private to the calling thread. Batch
//! renderers that want their own cache or precision hold an `Aligner` directly.

use std::cell::RefCell;

use pest_derive::Parser;

pub mod align;
pub mod defaults;
pub mod errors;
pub mod format;
pub mod log;
pub mod parse;
pub mod path;
pub mod symbol;
pub mod types;

pub use align::{AlignOptions, Aligner, CacheStats};
pub use errors::{Error, ParseError, UnknownSymbolError};
pub use path::{Command, Path, PathBuilder};
pub use symbol::{Descriptor, Symbol, SymbolFlags, SymbolId, symbol_names};
pub use types::Angle;

#[derive(Parser)]
#[grammar = "path.pest"]
pub struct PathParser;

thread_local! {
    static ALIGNER: RefCell<Aligner> = RefCell::new(Aligner::new());
}

/// Path text for a catalog symbol.
///
/// `id` is a name such as `"triangle-up"` or a code such as `5`.
pub fn generate<'a>(
    id: impl Into<SymbolId<'a>>,
    radius: f64,
    angle: Option<f64>,
    standoff: Option<f64>,
) -> Result<String, UnknownSymbolError> {
    let symbol = Symbol::resolve(id)?;
    Ok(ALIGNER.with_borrow_mut(|aligner| symbol.generate(aligner, radius, angle, standoff)))
}

/// Rotate and offset arbitrary path text.
pub fn transform(text: &str, angle: Option<f64>, standoff: Option<f64>) -> Result<String, ParseError> {
    ALIGNER.with_borrow_mut(|aligner| aligner.transform(text, angle, standoff))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn grammar_accepts_generator_output() {
        for input in [
            "M10,0A10,10 0 1,1 0,-10A10,10 0 0,1 10,0Z",
            "M-7.6,0l-3.8,-6.6h7.6Z",
            "M5,10V-10M-5,-10V10",
            "M0,0L-6.18,19.02L6.18,19.02Z",
        ] {
            let result = PathParser::parse(Rule::path, input);
            assert!(result.is_ok(), "Failed to parse {input:?}: {:?}", result.err());
        }
    }

    #[test]
    fn grammar_rejects_trailing_garbage() {
        assert!(PathParser::parse(Rule::path, "M0,0;").is_err());
    }

    #[test]
    fn free_functions_share_a_thread_cache() {
        let a = transform("M5,5H-5V-5H5Z", Some(17.0), Some(1.5)).unwrap();
        let b = transform("M5,5H-5V-5H5Z", Some(17.0), Some(1.5)).unwrap();
        assert_eq!(a, b);
        assert!(ALIGNER.with_borrow(|aligner| aligner.cache_stats().hits) >= 1);
    }

    #[test]
    fn generate_by_code_matches_name() {
        assert_eq!(
            generate(18u32, 10.0, Some(0.0), None).unwrap(),
            generate("hexagram", 10.0, Some(0.0), None).unwrap()
        );
    }
}
