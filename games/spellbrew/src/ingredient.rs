//! Tea ingredient tags and the running tally of a brew.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngredientError {
    #[error("unknown ingredient tag `{0}`")]
    UnknownTag(String),
    #[error("malformed aspect `{0}`, expected `<Tag> +<amount>`")]
    MalformedAspect(String),
}

/// The closed set of flavours a spell can contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ingredient {
    Sweet,
    Citrus,
    Tea,
    Spice,
    Herbal,
    Mint,
    Creamy,
    Bitter,
}

impl Ingredient {
    pub const ALL: [Ingredient; 8] = [
        Self::Sweet,
        Self::Citrus,
        Self::Tea,
        Self::Spice,
        Self::Herbal,
        Self::Mint,
        Self::Creamy,
        Self::Bitter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Sweet => "Sweet",
            Self::Citrus => "Citrus",
            Self::Tea => "Tea",
            Self::Spice => "Spice",
            Self::Herbal => "Herbal",
            Self::Mint => "Mint",
            Self::Creamy => "Creamy",
            Self::Bitter => "Bitter",
        }
    }

    /// Stable numeric code used on the host event channel.
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ingredient {
    type Err = IngredientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|i| i.name() == s)
            .ok_or_else(|| IngredientError::UnknownTag(s.to_string()))
    }
}

/// Parse an aspect list such as `"Spice +2, Tea +1"`.
/// A leading `"Aspects:"` label is accepted and ignored.
pub fn parse_aspects(text: &str) -> Result<Vec<(Ingredient, u32)>, IngredientError> {
    let body = text.trim().strip_prefix("Aspects:").unwrap_or(text).trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }
    body.split(',')
        .map(|part| {
            let part = part.trim();
            let malformed = || IngredientError::MalformedAspect(part.to_string());
            let (tag, amount) = part.split_once(' ').ok_or_else(malformed)?;
            let amount = amount
                .trim()
                .strip_prefix('+')
                .and_then(|n| n.parse::<u32>().ok())
                .ok_or_else(malformed)?;
            Ok((tag.parse::<Ingredient>()?, amount))
        })
        .collect()
}

/// Ingredient → amount accumulated over a round of casts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formulation {
    amounts: BTreeMap<Ingredient, u32>,
}

impl Formulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, ingredient: Ingredient, amount: u32) {
        *self.amounts.entry(ingredient).or_insert(0) += amount;
    }

    /// Add every aspect of a successfully cast spell.
    pub fn absorb(&mut self, aspects: &[(Ingredient, u32)]) {
        for &(ingredient, amount) in aspects {
            self.add(ingredient, amount);
        }
    }

    /// Amount of `ingredient`, or `None` if it was never added.
    pub fn get(&self, ingredient: Ingredient) -> Option<u32> {
        self.amounts.get(&ingredient).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ingredient, u32)> + '_ {
        self.amounts.iter().map(|(&i, &n)| (i, n))
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn clear(&mut self) {
        self.amounts.clear();
    }
}
