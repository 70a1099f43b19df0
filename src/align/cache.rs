//! Single-slot memo for the aligner
//!
//! A rendering loop draws every point of a trace with the same symbol, size
//! and orientation, so consecutive requests are usually identical. One slot
//! holding the last (input, angle, standoff) and its output covers that.

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    path: String,
    angle: f64,
    standoff: f64,
    output: String,
}

/// Hit and miss counters since the cache was created or cleared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
pub struct AlignCache {
    slot: Option<Slot>,
    stats: CacheStats,
}

impl AlignCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output stored for exactly this request, if it is in the slot.
    ///
    /// Absent angle and standoff compare equal to zero.
    pub fn get(&mut self, path: &str, angle: Option<f64>, standoff: Option<f64>) -> Option<&str> {
        let angle = angle.unwrap_or(0.0);
        let standoff = standoff.unwrap_or(0.0);
        let hit = self
            .slot
            .as_ref()
            .is_some_and(|s| s.path == path && s.angle == angle && s.standoff == standoff);
        if hit {
            self.stats.hits += 1;
            self.slot.as_ref().map(|s| s.output.as_str())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Replace the slot with a new entry
    pub fn put(&mut self, path: &str, angle: Option<f64>, standoff: Option<f64>, output: &str) {
        self.slot = Some(Slot {
            path: path.to_string(),
            angle: angle.unwrap_or(0.0),
            standoff: standoff.unwrap_or(0.0),
            output: output.to_string(),
        });
    }

    pub fn clear(&mut self) {
        self.slot = None;
        self.stats = CacheStats::default();
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
