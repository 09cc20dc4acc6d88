use wasm_bindgen::prelude::*;

pub mod animator;
pub mod book;
pub mod cast;
pub mod config;
pub mod game;
pub mod ingredient;
pub mod order;
pub mod pattern;
pub mod region;
pub mod render;
pub mod session;
pub mod spellbook;

use game::SpellBrew;

brew_web::export_game!(SpellBrew, "spellbrew");
