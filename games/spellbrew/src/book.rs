//! The spellbook menu: paging, cast budget, result banner and the brew tally.

use crate::ingredient::Formulation;
use crate::spellbook::{Spell, SpellBook};

/// Message shown for a while after each cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub success: bool,
    pub ticks_left: u32,
}

impl Banner {
    pub fn message(&self) -> &'static str {
        if self.success {
            "Spell Cast Successfully!"
        } else {
            "Spell Cast Failed."
        }
    }
}

#[derive(Debug, Clone)]
pub struct Book {
    spells: SpellBook,
    page: usize,
    casts_remaining: u32,
    formulation: Formulation,
    banner: Option<Banner>,
    banner_ticks: u32,
    finished: bool,
}

impl Book {
    pub fn new(spells: SpellBook, casts: u32, banner_ticks: u32) -> Self {
        Self {
            spells,
            page: 0,
            casts_remaining: casts,
            formulation: Formulation::new(),
            banner: None,
            banner_ticks,
            finished: false,
        }
    }

    /// Start a fresh round on the current page.
    pub fn restart(&mut self, casts: u32) {
        self.casts_remaining = casts;
        self.formulation.clear();
        self.banner = None;
        self.finished = false;
    }

    fn accepts_input(&self) -> bool {
        !self.finished && self.banner.is_none()
    }

    /// Turn back one page, wrapping to the last. Returns false if ignored.
    pub fn prev_page(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.page = (self.page + self.spells.len() - 1) % self.spells.len();
        true
    }

    pub fn next_page(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.page = (self.page + 1) % self.spells.len();
        true
    }

    pub fn can_cast(&self) -> bool {
        self.accepts_input() && self.casts_remaining > 0
    }

    /// Spend a cast on the current page and show the result banner.
    pub fn record_cast(&mut self, success: bool) {
        self.casts_remaining = self.casts_remaining.saturating_sub(1);
        if success {
            if let Some(spell) = self.spells.get(self.page) {
                self.formulation.absorb(&spell.aspects);
            }
        }
        self.banner = Some(Banner {
            success,
            ticks_left: self.banner_ticks,
        });
    }

    /// Count down the banner. Returns true on the tick the book finishes.
    pub fn tick(&mut self) -> bool {
        let Some(banner) = &mut self.banner else {
            return false;
        };
        banner.ticks_left = banner.ticks_left.saturating_sub(1);
        if banner.ticks_left > 0 {
            return false;
        }
        self.banner = None;
        if self.casts_remaining == 0 && !self.finished {
            self.finished = true;
            return true;
        }
        false
    }

    /// Close the book early, keeping whatever has been brewed.
    /// Returns false if it was already finished.
    pub fn close(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.banner = None;
        self.finished = true;
        true
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn spells(&self) -> &SpellBook {
        &self.spells
    }

    pub fn spell(&self) -> Option<&Spell> {
        self.spells.get(self.page)
    }

    pub fn casts_remaining(&self) -> u32 {
        self.casts_remaining
    }

    pub fn formulation(&self) -> &Formulation {
        &self.formulation
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
