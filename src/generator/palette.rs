use std::sync::atomic::{AtomicU64, Ordering};

/// Colours used by one generated slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// CSS gradient for the slide background.
    pub background: &'static str,
    /// Fill of the decorative accent circle.
    pub accent: &'static str,
    /// Title text colour.
    pub text: &'static str,
}

/// The palettes generated slides choose from.
pub static PALETTES: [Palette; 2] = [
    Palette {
        background: "linear-gradient(135deg, #020617, #0f172a 60%, #1d4ed8)",
        accent: "#38bdf8",
        text: "#f8fafc",
    },
    Palette {
        background: "linear-gradient(125deg, #1e1b4b, #7c3aed)",
        accent: "#f472b6",
        text: "#f3e8ff",
    },
];

/// Chooses a palette index for each generated slide.
pub trait PaletteSelector: Send + Sync {
    /// Return an index in `0..count`. `count` is never zero.
    fn pick(&self, count: usize) -> usize;
}

/// Uniform choice from uuid v4 entropy.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPalette;

impl PaletteSelector for RandomPalette {
    #[allow(clippy::cast_possible_truncation)]
    fn pick(&self, count: usize) -> usize {
        (uuid::Uuid::new_v4().as_u128() % count as u128) as usize
    }
}

/// Deterministic sequence from a seed, for reproducible output.
#[derive(Debug)]
pub struct SeededPalette {
    state: AtomicU64,
}

impl SeededPalette {
    /// Selector starting from `seed`.
    pub const fn new(seed: u64) -> Self {
        Self { state: AtomicU64::new(seed) }
    }

    // Knuth MMIX LCG; the high bits carry the most entropy.
    const fn step(state: u64) -> u64 {
        state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407)
    }
}

impl PaletteSelector for SeededPalette {
    #[allow(clippy::cast_possible_truncation)]
    fn pick(&self, count: usize) -> usize {
        let previous = self
            .state
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| Some(Self::step(s)))
            .unwrap_or_else(|s| s);
        let next = Self::step(previous);
        (((next >> 32) * count as u64) >> 32) as usize
    }
}

/// Always the same palette (clamped into range).
#[derive(Debug, Clone, Copy)]
pub struct FixedPalette(pub usize);

impl PaletteSelector for FixedPalette {
    fn pick(&self, count: usize) -> usize {
        self.0.min(count - 1)
    }
}
