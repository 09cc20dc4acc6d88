use std::collections::BTreeMap;

use crate::ingredient::{Formulation, Ingredient};

/// How well a brew matches what the customer asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    /// Every wanted ingredient at or above its amount.
    Perfect,
    /// Every wanted ingredient present, some short.
    Good,
    /// A wanted ingredient is missing.
    Bad,
}

impl Grade {
    pub fn code(self) -> f32 {
        match self {
            Grade::Perfect => 2.0,
            Grade::Good => 1.0,
            Grade::Bad => 0.0,
        }
    }
}

/// A customer's target amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    wants: BTreeMap<Ingredient, u32>,
}

impl Order {
    pub fn new(wants: impl IntoIterator<Item = (Ingredient, u32)>) -> Self {
        Self {
            wants: wants.into_iter().collect(),
        }
    }

    /// Set (or replace) the wanted amount of one ingredient.
    pub fn want(&mut self, ingredient: Ingredient, amount: u32) {
        self.wants.insert(ingredient, amount);
    }

    pub fn clear(&mut self) {
        self.wants.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.wants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ingredient, u32)> + '_ {
        self.wants.iter().map(|(&i, &n)| (i, n))
    }

    pub fn grade(&self, brew: &Formulation) -> Grade {
        let mut short = false;
        for (&ingredient, &target) in &self.wants {
            match brew.get(ingredient) {
                None => return Grade::Bad,
                Some(amount) if amount < target => short = true,
                Some(_) => {}
            }
        }
        if short { Grade::Good } else { Grade::Perfect }
    }
}
