//! Orienting marker paths around their anchor
//!
//! - `rotate`: the geometric transform on structured paths
//! - `cache`: the single-slot memo consulted before transforming
//!
//! The [`Aligner`] owns its cache, so every engine instance has independent
//! state. The crate-level `generate`/`transform` functions use one aligner
//! per thread.

pub mod cache;
pub mod rotate;

pub use cache::{AlignCache, CacheStats};
pub use rotate::{Rotation, orient};

use crate::defaults::COORD_DIGITS;
use crate::errors::{ParseError, UnknownSymbolError};
use crate::log::{debug, warn};
use crate::path::Path;
use crate::symbol::{Symbol, SymbolId};
use crate::types::Angle;

/// Aligner configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignOptions {
    /// Consult and fill the single-slot cache
    pub cache: bool,
    /// Decimal places kept on transformed coordinates
    pub digits: u32,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            cache: true,
            digits: COORD_DIGITS,
        }
    }
}

impl AlignOptions {
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }
}

fn warn_non_finite(angle: Option<f64>, standoff: Option<f64>) {
    if angle.is_some_and(|a| !a.is_finite()) || standoff.is_some_and(|s| !s.is_finite()) {
        warn!(?angle, ?standoff, "non-finite alignment, output will not parse back");
    }
}

/// True when the request would leave the path unchanged
fn is_identity(angle: Option<f64>, standoff: Option<f64>) -> bool {
    let unrotated = angle.is_none_or(|a| Angle::degrees(a).is_full_turn());
    unrotated && standoff.unwrap_or(0.0) == 0.0
}

/// Rotation/standoff engine with its own memo
#[derive(Debug, Default)]
pub struct Aligner {
    options: AlignOptions,
    cache: AlignCache,
}

impl Aligner {
    pub fn new() -> Self {
        Self::default()
    }

    /// An aligner that never caches
    pub fn uncached() -> Self {
        Self::with_options(AlignOptions::default().with_cache(false))
    }

    pub fn with_options(options: AlignOptions) -> Self {
        Self {
            options,
            cache: AlignCache::new(),
        }
    }

    pub fn options(&self) -> AlignOptions {
        self.options
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Rotate path text by `angle` degrees after a `standoff` along +y.
    ///
    /// Requests that change nothing return `text` as is without parsing it.
    /// Anything else comes back in compact form, `H`/`V` rewritten as lines.
    pub fn transform(
        &mut self,
        text: &str,
        angle: Option<f64>,
        standoff: Option<f64>,
    ) -> Result<String, ParseError> {
        warn_non_finite(angle, standoff);
        if is_identity(angle, standoff) {
            return Ok(text.to_string());
        }
        if let Some(hit) = self.lookup(text, angle, standoff) {
            return Ok(hit);
        }

        let path = match crate::parse::parse(text) {
            Ok(path) => path,
            Err(e) => {
                debug!(error = %e, "cannot align path");
                return Err(e);
            }
        };
        Ok(self.orient_and_store(text, &path, angle, standoff))
    }

    /// Same as [`Aligner::transform`] for a path that is already structured.
    ///
    /// The cache key is the path's source text, so structured and textual
    /// requests for the same outline share the slot.
    pub fn align_path(&mut self, path: &Path, angle: Option<f64>, standoff: Option<f64>) -> String {
        let text = path.to_string();
        warn_non_finite(angle, standoff);
        if is_identity(angle, standoff) {
            return text;
        }
        if let Some(hit) = self.lookup(&text, angle, standoff) {
            return hit;
        }
        self.orient_and_store(&text, path, angle, standoff)
    }

    /// Outline of a catalog symbol, oriented. See [`Symbol::generate`].
    pub fn generate<'a>(
        &mut self,
        id: impl Into<SymbolId<'a>>,
        radius: f64,
        angle: Option<f64>,
        standoff: Option<f64>,
    ) -> Result<String, UnknownSymbolError> {
        let symbol = Symbol::resolve(id)?;
        Ok(symbol.generate(self, radius, angle, standoff))
    }

    fn lookup(&mut self, text: &str, angle: Option<f64>, standoff: Option<f64>) -> Option<String> {
        if !self.options.cache {
            return None;
        }
        let hit = self.cache.get(text, angle, standoff).map(str::to_string);
        if hit.is_some() {
            debug!(path = text, ?angle, ?standoff, "align cache hit");
        } else {
            debug!(path = text, ?angle, ?standoff, "align cache miss");
        }
        hit
    }

    fn orient_and_store(
        &mut self,
        text: &str,
        path: &Path,
        angle: Option<f64>,
        standoff: Option<f64>,
    ) -> String {
        let angle_deg = Angle::degrees(angle.unwrap_or(0.0));
        let output = orient(path, angle_deg, standoff.unwrap_or(0.0), self.options.digits).to_compact_string();
        if self.options.cache {
            self.cache.put(text, angle, standoff, &output);
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "M5,5H-5V-5H5Z";

    #[test]
    fn identity_requests_skip_parsing() {
        let mut aligner = Aligner::new();
        // Not valid path text, but nothing needs to read it
        assert_eq!(aligner.transform("not a path", None, None).unwrap(), "not a path");
        assert_eq!(aligner.transform("not a path", Some(0.0), Some(0.0)).unwrap(), "not a path");
        assert_eq!(aligner.transform(SQUARE, Some(360.0), None).unwrap(), SQUARE);
        assert_eq!(aligner.transform(SQUARE, Some(-720.0), None).unwrap(), SQUARE);
        assert_eq!(aligner.cache_stats(), CacheStats::default());
    }

    #[test]
    fn quarter_turn_square() {
        let mut aligner = Aligner::new();
        assert_eq!(aligner.transform(SQUARE, Some(90.0), None).unwrap(), "M-5,5L-5,-5L5,-5L5,5Z");
    }

    #[test]
    fn standoff_alone_shifts_along_y() {
        let mut aligner = Aligner::new();
        assert_eq!(aligner.transform(SQUARE, None, Some(3.0)).unwrap(), "M5,8L-5,8L-5,-2L5,-2Z");
    }

    #[test]
    fn repeated_requests_hit_the_cache() {
        let mut aligner = Aligner::new();
        let first = aligner.transform(SQUARE, Some(45.0), Some(1.0)).unwrap();
        let second = aligner.transform(SQUARE, Some(45.0), Some(1.0)).unwrap();
        assert_eq!(first, second);
        assert_eq!(aligner.cache_stats(), CacheStats { hits: 1, misses: 1 });

        aligner.transform(SQUARE, Some(30.0), Some(1.0)).unwrap();
        aligner.transform(SQUARE, Some(45.0), Some(1.0)).unwrap();
        assert_eq!(aligner.cache_stats(), CacheStats { hits: 1, misses: 3 });
    }

    #[test]
    fn structured_and_text_requests_share_the_slot() {
        let mut aligner = Aligner::new();
        let path: Path = SQUARE.parse().unwrap();
        let structured = aligner.align_path(&path, Some(90.0), None);
        let text = aligner.transform(SQUARE, Some(90.0), None).unwrap();
        assert_eq!(structured, text);
        assert_eq!(aligner.cache_stats().hits, 1);
    }

    #[test]
    fn uncached_aligner_never_counts() {
        let mut aligner = Aligner::uncached();
        aligner.transform(SQUARE, Some(90.0), None).unwrap();
        aligner.transform(SQUARE, Some(90.0), None).unwrap();
        assert_eq!(aligner.cache_stats(), CacheStats::default());
        assert!(!aligner.options().cache);
    }

    #[test]
    fn parse_errors_surface() {
        let mut aligner = Aligner::new();
        let err = aligner.transform("M0,0C1,1", Some(90.0), None).unwrap_err();
        assert!(matches!(err, ParseError::UnknownCommand { letter: 'C', .. }));
    }

    #[test]
    fn digits_option_controls_precision() {
        let mut aligner = Aligner::with_options(AlignOptions::default().with_digits(0));
        assert_eq!(aligner.transform("M10,0", Some(30.0), None).unwrap(), "M9,5");
    }

    #[test]
    fn generates_by_name_or_code() {
        let mut aligner = Aligner::new();
        let by_name = aligner.generate("square", 5.0, Some(90.0), None).unwrap();
        let by_code = aligner.generate(1u32, 5.0, Some(90.0), None).unwrap();
        assert_eq!(by_name, "M-5,5L-5,-5L5,-5L5,5Z");
        assert_eq!(by_name, by_code);
        assert!(aligner.generate("pentagram", 5.0, Some(0.0), None).is_err());
    }
}
