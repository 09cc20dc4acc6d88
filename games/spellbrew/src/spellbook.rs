//! Spell catalogue: names, aspects, magic words and glyph layouts.

use glam::DVec2;
use serde::Deserialize;
use thiserror::Error;

use crate::config::CastConfig;
use crate::ingredient::{parse_aspects, Ingredient, IngredientError};
use crate::pattern::TracePattern;

use Ingredient::*;

#[derive(Debug, Error)]
pub enum SpellbookError {
    #[error("spellbook JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("spellbook has no spells")]
    Empty,
    #[error("spell `{0}` has no glyph nodes")]
    EmptyGlyph(String),
    #[error("spell `{name}`: {source}")]
    Aspects {
        name: String,
        #[source]
        source: IngredientError,
    },
}

/// Built-in spell definition.
#[derive(Debug, Clone, Copy)]
pub struct SpellDef {
    pub name: &'static str,
    pub aspects: &'static [(Ingredient, u32)],
    pub words: &'static [&'static str],
    /// Sprite name of the page illustration.
    pub glyph: &'static str,
    /// Node offsets from the screen center, in grid units, in trace order.
    pub nodes: &'static [(i32, i32)],
}

/// All 15 built-in spells, in page order.
pub const SPELLS: [SpellDef; 15] = [
    // Angular folded zigzag
    SpellDef {
        name: "Honeywisp",
        aspects: &[(Sweet, 2)],
        words: &["Bramaris", "Thornvox", "Cortegen"],
        glyph: "glyph_honeywisp",
        nodes: &[(-5, 5), (0, -8), (5, 5), (-6, -5), (6, -5), (-3, 3)],
    },
    // Crossing star
    SpellDef {
        name: "Sugar Sigil",
        aspects: &[(Sweet, 1)],
        words: &["Astralis", "Penthera", "Lumistar"],
        glyph: "glyph_sugar_sigil",
        nodes: &[(-7, -5), (0, 5), (7, -5), (7, 5), (0, -5), (-7, 5)],
    },
    // Split ring
    SpellDef {
        name: "Citrus Pulse",
        aspects: &[(Citrus, 2)],
        words: &["Gyrevex", "Spiraflux", "Helixor"],
        glyph: "glyph_citrus_pulse",
        nodes: &[
            (6, -3), (3, -5), (0, -6), (-3, -5), (-6, -3), (-6, 0),
            (6, 0), (6, 3), (3, 5), (0, 6), (-3, 5), (-6, 3),
        ],
    },
    // Dense hatch
    SpellDef {
        name: "Lemonflare",
        aspects: &[(Citrus, 1), (Sweet, 1)],
        words: &["Ragamorg", "Ravelis", "Skratcha"],
        glyph: "glyph_lemonflare",
        nodes: &[(-8, 0), (-4, 6), (4, 6), (8, 0), (2, 2), (0, -9), (-2, 2), (-6, 1)],
    },
    // Long S-curve
    SpellDef {
        name: "Tealeaf Rite",
        aspects: &[(Tea, 2)],
        words: &["Seraphae", "Sinuara", "Silvena"],
        glyph: "glyph_tealeaf_rite",
        nodes: &[
            (-5, 7), (-9, -4), (-3, -7), (-7, 1), (3, -2), (0, 7),
            (-3, -2), (7, 1), (3, -7), (9, -4), (5, 7),
        ],
    },
    // Lightning slash with a tail
    SpellDef {
        name: "Earl Echo",
        aspects: &[(Tea, 1), (Citrus, 1)],
        words: &["Voltaris", "Zapkern", "Thundrix"],
        glyph: "glyph_earl_echo",
        nodes: &[(-7, -10), (7, -10), (-7, -5), (7, -5), (-7, 0), (7, 0), (0, 7), (0, -14)],
    },
    // Loop with a diagonal tick
    SpellDef {
        name: "Chai Ember",
        aspects: &[(Spice, 2), (Tea, 1)],
        words: &["Loopent", "Crovis", "Torsha"],
        glyph: "glyph_chai_ember",
        nodes: &[(0, -10), (-6, -4), (4, -4), (9, 3), (-6, 3), (9, -4), (0, 7), (0, -7), (9, -7)],
    },
    SpellDef {
        name: "Cinnamon",
        aspects: &[(Spice, 1)],
        words: &["Rectalus", "Plaxion", "Vaulten"],
        glyph: "glyph_cinnamon",
        nodes: &[(0, -10), (-2, -4), (-8, -10), (-4, -2), (0, 6), (4, -2), (8, -10), (2, -4)],
    },
    // Double-peaked diamond
    SpellDef {
        name: "Herb Bloom",
        aspects: &[(Herbal, 2)],
        words: &["Diacrit", "Zemmar", "Crestor"],
        glyph: "glyph_herb_bloom",
        nodes: &[(0, -8), (6, 0), (0, 8), (-6, 0), (3, -3), (-3, -3), (3, 3), (-3, 3)],
    },
    // U-turn with a hook
    SpellDef {
        name: "Ley Garden",
        aspects: &[(Herbal, 1), (Tea, 1)],
        words: &["Hookrun", "Trogla", "Pendrix"],
        glyph: "glyph_ley_garden",
        nodes: &[(-8, 6), (-4, -10), (-1, -4), (1, -4), (4, -10), (8, 6), (0, -2), (0, 4)],
    },
    SpellDef {
        name: "Mintwhirl",
        aspects: &[(Mint, 2)],
        words: &["Spiralux", "Orien", "Gyralon"],
        glyph: "glyph_mintwhirl",
        nodes: &[(6, -2), (4, -6), (0, -8), (-4, -6), (-6, -2), (-4, 4), (0, 6), (4, 4), (6, 0)],
    },
    // Cross rays and an inner diamond
    SpellDef {
        name: "Frost Snap",
        aspects: &[(Mint, 1), (Citrus, 1)],
        words: &["Clavix", "Tremor", "Rendrix"],
        glyph: "glyph_frost_snap",
        nodes: &[(0, -8), (0, 8), (-8, 0), (8, 0), (-4, -4), (4, -4), (4, 4), (-4, 4)],
    },
    // Cup outline
    SpellDef {
        name: "Creamweave",
        aspects: &[(Creamy, 2)],
        words: &["Caffara", "Urbina", "Lacton"],
        glyph: "glyph_creamweave",
        nodes: &[
            (-10, 0), (-8, -4), (-4, -7), (0, -8), (4, -7), (8, -4),
            (10, 0), (6, 2), (3, 4), (0, 6), (-3, 4), (-6, 2),
        ],
    },
    // Sail spikes
    SpellDef {
        name: "Velvetfoam",
        aspects: &[(Creamy, 1), (Sweet, 1)],
        words: &["Keelion", "Trianta", "Sailorix"],
        glyph: "glyph_velvetfoam",
        nodes: &[(-10, -8), (-6, -4), (-2, 0), (2, -4), (6, -8), (0, 2), (0, 6)],
    },
    SpellDef {
        name: "Dark Surge",
        aspects: &[(Bitter, 2)],
        words: &["Cordalis", "Orbheart", "Amorix", "Bittera"],
        glyph: "glyph_dark_surge",
        nodes: &[
            (0, -16), (-4, -10), (-2, -5), (0, -1), (2, -5),
            (4, -10), (0, -12), (0, -6), (0, 4), (0, 10),
        ],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Spell {
    pub name: String,
    pub aspects: Vec<(Ingredient, u32)>,
    pub words: Vec<String>,
    pub glyph: String,
    pub nodes: Vec<(i32, i32)>,
}

impl From<&SpellDef> for Spell {
    fn from(def: &SpellDef) -> Self {
        Self {
            name: def.name.to_string(),
            aspects: def.aspects.to_vec(),
            words: def.words.iter().map(|w| w.to_string()).collect(),
            glyph: def.glyph.to_string(),
            nodes: def.nodes.to_vec(),
        }
    }
}

impl Spell {
    /// Lay the glyph out around `center` as a traceable pattern.
    pub fn pattern(&self, center: DVec2, config: &CastConfig) -> TracePattern {
        let centers: Vec<DVec2> = self
            .nodes
            .iter()
            .map(|&(dx, dy)| center + DVec2::new(dx as f64, dy as f64) * config.grid_unit)
            .collect();
        TracePattern::new(self.name.clone(), &centers, config.node_radius)
    }

    /// Page caption, e.g. `"Aspects: Spice +2, Tea +1"`.
    pub fn aspects_label(&self) -> String {
        let parts: Vec<String> = self
            .aspects
            .iter()
            .map(|(ingredient, amount)| format!("{ingredient} +{amount}"))
            .collect();
        format!("Aspects: {}", parts.join(", "))
    }
}

#[derive(Deserialize)]
struct SpellRecord {
    name: String,
    aspects: String,
    #[serde(default)]
    words: Vec<String>,
    #[serde(default)]
    glyph: String,
    nodes: Vec<(i32, i32)>,
}

#[derive(Deserialize)]
struct SpellbookFile {
    spells: Vec<SpellRecord>,
}

/// The pages of the book, never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellBook {
    spells: Vec<Spell>,
}

impl SpellBook {
    pub fn builtin() -> Self {
        Self {
            spells: SPELLS.iter().map(Spell::from).collect(),
        }
    }

    /// Load a custom book, rejecting empty books, empty glyphs and unknown aspects.
    pub fn from_json(json: &str) -> Result<Self, SpellbookError> {
        let file: SpellbookFile = serde_json::from_str(json)?;
        if file.spells.is_empty() {
            return Err(SpellbookError::Empty);
        }
        let spells = file
            .spells
            .into_iter()
            .map(|record| {
                if record.nodes.is_empty() {
                    return Err(SpellbookError::EmptyGlyph(record.name));
                }
                let aspects = match parse_aspects(&record.aspects) {
                    Ok(aspects) => aspects,
                    Err(source) => return Err(SpellbookError::Aspects { name: record.name, source }),
                };
                Ok(Spell {
                    name: record.name,
                    aspects,
                    words: record.words,
                    glyph: record.glyph,
                    nodes: record.nodes,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { spells })
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn get(&self, page: usize) -> Option<&Spell> {
        self.spells.get(page)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spell> {
        self.spells.iter()
    }
}

impl Default for SpellBook {
    fn default() -> Self {
        Self::builtin()
    }
}
