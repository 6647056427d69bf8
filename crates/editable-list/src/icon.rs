//! Icon lookup: abstract icon references to renderable glyphs.

/// A glyph the render layer can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Icon-set name (Ionicons naming)
    pub name: &'static str,
    /// Text fallback drawn when no icon font is loaded
    pub symbol: &'static str,
}

pub const FALLBACK_GLYPH: Glyph = Glyph { name: "fitness-outline", symbol: "🏃" };

pub trait IconLookup {
    /// Never fails; unknown references map to a fallback glyph.
    fn glyph(&self, icon_ref: &str) -> Glyph;
}

/// Maps SF Symbol workout names onto Ionicons equivalents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolIcons;

const SYMBOLS: &[(&str, Glyph)] = &[
    ("figure.run", Glyph { name: "fitness-outline", symbol: "🏃" }),
    ("figure.outdoor.cycle", Glyph { name: "bicycle-outline", symbol: "🚴" }),
    ("figure.pool.swim", Glyph { name: "water-outline", symbol: "🏊" }),
    ("figure.mind.and.body", Glyph { name: "body-outline", symbol: "🧘" }),
    ("figure.strengthtraining.traditional", Glyph { name: "barbell-outline", symbol: "🏋" }),
    ("figure.highintensity.intervaltraining", Glyph { name: "stopwatch-outline", symbol: "⏱" }),
    ("figure.walk", Glyph { name: "walk-outline", symbol: "🚶" }),
    ("figure.dance", Glyph { name: "musical-notes-outline", symbol: "💃" }),
    ("figure.arms.open", Glyph { name: "body-outline", symbol: "🙆" }),
    ("figure.step.training", Glyph { name: "trending-up-outline", symbol: "📈" }),
    ("brain.head.profile", Glyph { name: "brain-outline", symbol: "🧠" }),
    ("figure.pilates", Glyph { name: "body-outline", symbol: "🤸" }),
    ("sailboat.fill", Glyph { name: "boat-outline", symbol: "⛵" }),
    ("figure.jumprope", Glyph { name: "pulse-outline", symbol: "🪢" }),
    ("figure.strengthtraining.functional", Glyph { name: "barbell-outline", symbol: "💪" }),
    ("mountain.2.fill", Glyph { name: "trending-up-outline", symbol: "⛰" }),
    ("figure.martial.arts", Glyph { name: "body-outline", symbol: "🥋" }),
    ("figure.barre", Glyph { name: "body-outline", symbol: "🩰" }),
    ("figure.play", Glyph { name: "play-outline", symbol: "▶" }),
];

impl IconLookup for SymbolIcons {
    fn glyph(&self, icon_ref: &str) -> Glyph {
        SYMBOLS
            .iter()
            .find(|(name, _)| *name == icon_ref)
            .map(|(_, glyph)| *glyph)
            .unwrap_or(FALLBACK_GLYPH)
    }
}
