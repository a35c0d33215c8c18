//! Shimmering "magic text" for obfuscated runs.
//!
//! The host keeps a registry of the obfuscated text it currently shows and
//! owns the repeating timer. On each timer callback it asks the animator how
//! many ticks are due and, if any, calls [`ObfuscationAnimator::tick`] with
//! the registry to get fresh visible text. The true text stays with the
//! host (hidden, for layout and accessibility); only the visible copy is
//! replaced.
//!
//! Every replacement character comes from the original character's width
//! bucket, so the line never reflows. Whitespace is kept as is.

use std::time::Duration;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::glyph::{GlyphWidthModel, char_width};

/// Default time between frames.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(20);

/// Host-assigned identifier of a mounted obfuscated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u64);

/// A mounted obfuscated node: its id, true text, and per-character widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObfuscationTarget {
    /// Host identifier.
    pub id: TargetId,
    original: String,
    buckets: Vec<u8>,
}

impl ObfuscationTarget {
    /// Register `original` under `id`, recording each character's bucket.
    #[must_use]
    pub fn new(id: TargetId, original: impl Into<String>) -> Self {
        let original = original.into();
        let buckets = original.chars().map(char_width).collect();
        Self {
            id,
            original,
            buckets,
        }
    }

    /// The true text.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Declared width bucket of each character.
    #[must_use]
    pub fn buckets(&self) -> &[u8] {
        &self.buckets
    }

    /// Total pixel width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.buckets.iter().map(|&w| usize::from(w)).sum()
    }
}

/// Visible text for one target in one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObfuscationFrame {
    /// Which target.
    pub id: TargetId,
    /// Replacement text to display.
    pub text: String,
}

/// Produce one frame of replacement text for `target`.
///
/// Pure apart from the random draws.
pub fn scramble<R: Rng + ?Sized>(
    target: &ObfuscationTarget,
    model: &GlyphWidthModel,
    rng: &mut R,
) -> String {
    target
        .original
        .chars()
        .zip(target.buckets.iter().copied())
        .map(|(c, width)| {
            if c.is_whitespace() {
                c
            } else {
                model.sample_replacement(width, rng)
            }
        })
        .collect()
}

/// Fixed-interval driver for obfuscation frames.
///
/// Holds no per-target state: each tick reads only the registry it is
/// handed.
#[derive(Debug, Clone)]
pub struct ObfuscationAnimator {
    interval: Duration,
    elapsed: Duration,
    running: bool,
    rng: SmallRng,
    model: &'static GlyphWidthModel,
}

impl Default for ObfuscationAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl ObfuscationAnimator {
    /// Animator with the default interval and an OS-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Animator with a deterministic RNG.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            elapsed: Duration::ZERO,
            running: true,
            rng,
            model: GlyphWidthModel::shared(),
        }
    }

    /// Set the frame interval. A zero interval is clamped to one millisecond.
    #[must_use]
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Current frame interval.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        self.interval
    }

    /// Whether ticks are being produced.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop producing ticks (targets unmounted). Pending time is discarded.
    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!("obfuscation animator stopped");
        }
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Resume after [`stop`](Self::stop).
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Accumulate `dt` and return how many frames are due.
    ///
    /// A stopped animator never has frames due.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed += dt;
        let mut due = 0u32;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            due = due.saturating_add(1);
        }
        due
    }

    /// Produce one frame for every target.
    ///
    /// Returns nothing when stopped or when `targets` is empty.
    pub fn tick(&mut self, targets: &[ObfuscationTarget]) -> Vec<ObfuscationFrame> {
        if !self.running {
            return Vec::new();
        }
        targets
            .iter()
            .map(|target| ObfuscationFrame {
                id: target.id,
                text: scramble(target, self.model, &mut self.rng),
            })
            .collect()
    }
}
