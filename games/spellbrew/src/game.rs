//! Spellbrew: a tea-shop spellbook where each spell is cast by tracing its glyph.

use brew_engine::{keys, EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue, PointerState, SoundEvent};
use glam::DVec2;

use crate::book::Book;
use crate::cast::{CastController, CastRun, CastStep};
use crate::config::CastConfig;
use crate::ingredient::Ingredient;
use crate::order::Order;
use crate::render;
use crate::session::{Cue, FrameInput};
use crate::spellbook::SpellBook;

const WORLD_W: f32 = 1280.0;
const WORLD_H: f32 = 720.0;

/// Custom event kinds from the host UI
pub mod events {
    pub const PREV_PAGE: u32 = 1;
    pub const NEXT_PAGE: u32 = 2;
    pub const CAST: u32 = 3;
    /// Forget the current order.
    pub const ORDER_CLEAR: u32 = 4;
    /// a = ingredient code, b = wanted amount.
    pub const ORDER_WANT: u32 = 5;
    /// Reopen the book for a new order.
    pub const NEW_ROUND: u32 = 6;
    pub const QUIT: u32 = 7;
}

/// Game event kinds to the host UI
pub mod game_events {
    /// a = page index.
    pub const PAGE: f32 = 1.0;
    pub const CASTS_REMAINING: f32 = 2.0;
    /// a = 1.0 on success, 0.0 on failure.
    pub const CAST_RESULT: f32 = 3.0;
    /// a = ingredient code, b = amount. One per ingredient, sent when the book closes.
    pub const FORMULATION: f32 = 4.0;
    /// a = grade code (2 perfect, 1 good, 0 bad).
    pub const GRADE: f32 = 5.0;
    /// a = 1.0 while a cast is on screen.
    pub const CASTING: f32 = 6.0;
    pub const QUIT: f32 = 7.0;
}

pub mod sounds {
    pub const CONFIRM: u32 = 1;
    pub const ERROR: u32 = 2;
    pub const PAGE_FLIP: u32 = 3;
}

fn cue_sound(cue: Cue) -> SoundEvent {
    match cue {
        Cue::Confirm => SoundEvent(sounds::CONFIRM),
        Cue::Error => SoundEvent(sounds::ERROR),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Book,
    Casting,
    /// The book closed; waiting for a new round.
    Served,
    Quit,
}

pub struct SpellBrew {
    config: CastConfig,
    book: Book,
    controller: CastController,
    cast: Option<CastRun>,
    pointer: PointerState,
    order: Order,
    phase: Phase,
    center: DVec2,
    /// Send the opening page and cast count on the next update.
    announce: bool,
}

impl SpellBrew {
    pub fn new() -> Self {
        Self::with_config(CastConfig::default(), SpellBook::builtin())
    }

    pub fn with_config(config: CastConfig, spells: SpellBook) -> Self {
        let center = world().world_center().as_dvec2();
        Self {
            book: Book::new(spells, config.casts_per_order, config.result_banner_ticks),
            controller: CastController::new(config.clone(), center),
            config,
            cast: None,
            pointer: PointerState::new(),
            order: Order::default(),
            phase: Phase::Book,
            center,
            announce: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    fn handle_order_events(&mut self, input: &InputQueue) {
        if input.has_custom(events::ORDER_CLEAR) {
            self.order.clear();
        }
        for [code, amount, _] in input.customs(events::ORDER_WANT) {
            match Ingredient::from_code(code as u32) {
                Some(ingredient) => self.order.want(ingredient, amount.max(0.0) as u32),
                None => log::warn!("order names unknown ingredient code {code}"),
            }
        }
    }

    fn start_cast(&mut self, ctx: &mut EngineContext) {
        let Some(spell) = self.book.spell() else {
            return;
        };
        log::info!("casting {}", spell.name);
        let pattern = spell.pattern(self.center, &self.config);
        let run = self.controller.begin(&pattern);
        render::draw_cast(ctx, run.view(), self.center, &self.config);
        self.cast = Some(run);
        self.phase = Phase::Casting;
        ctx.emit_event(GameEvent::new(game_events::CASTING, 1.0));
    }

    fn update_cast(&mut self, ctx: &mut EngineContext, frame: FrameInput) {
        let Some(run) = &mut self.cast else {
            self.phase = Phase::Book;
            return;
        };
        match self.controller.step(run, &frame) {
            CastStep::Running { cue } => {
                if let Some(cue) = cue {
                    ctx.emit_sound(cue_sound(cue));
                }
                render::draw_cast(ctx, run.view(), self.center, &self.config);
            }
            CastStep::Finished(success) => {
                log::info!("cast {}", if success { "succeeded" } else { "failed" });
                self.cast = None;
                self.phase = Phase::Book;
                self.book.record_cast(success);
                self.draw_page(ctx);
                ctx.emit_event(GameEvent::new(game_events::CASTING, 0.0));
                ctx.emit_event(GameEvent::new(game_events::CAST_RESULT, if success { 1.0 } else { 0.0 }));
                ctx.emit_event(GameEvent::new(
                    game_events::CASTS_REMAINING,
                    self.book.casts_remaining() as f32,
                ));
            }
            CastStep::Quit => self.quit(ctx),
        }
    }

    fn update_book(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if input.key_pressed(keys::ESCAPE) && self.book.close() {
            self.serve(ctx);
            return;
        }

        for event in input.iter() {
            let InputEvent::Custom { kind, .. } = *event else {
                continue;
            };
            let turned = match kind {
                events::PREV_PAGE => self.book.prev_page(),
                events::NEXT_PAGE => self.book.next_page(),
                events::CAST if self.book.can_cast() => {
                    self.start_cast(ctx);
                    return;
                }
                _ => false,
            };
            if turned {
                ctx.emit_sound(SoundEvent(sounds::PAGE_FLIP));
                ctx.emit_event(GameEvent::new(game_events::PAGE, self.book.page() as f32));
            }
        }

        if self.book.tick() {
            self.serve(ctx);
            return;
        }

        self.draw_page(ctx);
    }

    fn draw_page(&self, ctx: &mut EngineContext) {
        match self.book.spell() {
            Some(spell) => render::draw_book(ctx, spell, self.center),
            None => render::clear(ctx),
        }
    }

    /// The book closed: report the brew and its grade.
    fn serve(&mut self, ctx: &mut EngineContext) {
        let brew = self.book.formulation();
        for (ingredient, amount) in brew.iter() {
            ctx.emit_event(GameEvent::pair(
                game_events::FORMULATION,
                ingredient.code() as f32,
                amount as f32,
            ));
        }
        let grade = self.order.grade(brew);
        log::info!("brew served: {:?}", grade);
        ctx.emit_event(GameEvent::new(game_events::GRADE, grade.code()));
        self.phase = Phase::Served;
        render::clear(ctx);
    }

    fn quit(&mut self, ctx: &mut EngineContext) {
        log::info!("quit requested");
        self.cast = None;
        self.phase = Phase::Quit;
        ctx.emit_event(GameEvent::new(game_events::QUIT, 0.0));
        render::clear(ctx);
    }
}

fn world() -> GameConfig {
    GameConfig {
        world_width: WORLD_W,
        world_height: WORLD_H,
        ..GameConfig::default()
    }
}

impl Default for SpellBrew {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SpellBrew {
    fn config(&self) -> GameConfig {
        world()
    }

    fn required_sprites(&self) -> Vec<String> {
        [render::TEACUP, render::GOLD_STAR, render::RED_X]
            .into_iter()
            .map(String::from)
            .chain(self.book.spells().iter().map(|spell| spell.glyph.clone()))
            .collect()
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        log::info!("spellbook open with {} casts", self.book.casts_remaining());
        self.announce = true;
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if self.phase == Phase::Quit {
            return;
        }
        if self.announce {
            self.announce = false;
            ctx.emit_event(GameEvent::new(game_events::PAGE, self.book.page() as f32));
            ctx.emit_event(GameEvent::new(
                game_events::CASTS_REMAINING,
                self.book.casts_remaining() as f32,
            ));
        }
        self.pointer.apply(input);
        self.handle_order_events(input);

        let quit = input.has_custom(events::QUIT);

        match self.phase {
            Phase::Casting => {
                let frame = FrameInput {
                    pointer: self.pointer.position().map(|p| p.as_dvec2()),
                    cancel: input.key_pressed(keys::ESCAPE),
                    quit,
                };
                self.update_cast(ctx, frame);
            }
            _ if quit => self.quit(ctx),
            Phase::Book => self.update_book(ctx, input),
            Phase::Served => {
                if input.has_custom(events::NEW_ROUND) {
                    self.book.restart(self.config.casts_per_order);
                    self.phase = Phase::Book;
                    ctx.emit_event(GameEvent::new(
                        game_events::CASTS_REMAINING,
                        self.book.casts_remaining() as f32,
                    ));
                }
            }
            Phase::Quit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::Grade;
    use brew_engine::{AssetManifest, SpriteRegistry};
    use brew_web::GameRunner;

    /// Honeywisp nodes in trace order, laid out around the world center.
    const HONEYWISP: [(f32, f32); 6] = [
        (540.0, 460.0),
        (640.0, 200.0),
        (740.0, 460.0),
        (520.0, 260.0),
        (760.0, 260.0),
        (580.0, 420.0),
    ];

    struct Harness {
        game: SpellBrew,
        ctx: EngineContext,
        sounds: Vec<u32>,
        events: Vec<GameEvent>,
    }

    impl Harness {
        fn new() -> Self {
            let mut game = SpellBrew::new();
            let mut ctx = EngineContext::new();
            game.init(&mut ctx);
            let mut h = Self { game, ctx, sounds: Vec::new(), events: Vec::new() };
            h.frame(&[]);
            h.clear_log();
            h
        }

        /// A harness whose context can draw the teacup and the first glyph.
        fn with_sprites() -> Self {
            let json = r#"{
                "atlases": [{ "name": "shop", "cols": 8, "rows": 4, "path": "shop.png" }],
                "sprites": {
                    "teacup": { "atlas": 0, "col": 0, "row": 0, "span": 4 },
                    "glyph_honeywisp": { "atlas": 0, "col": 0, "row": 2, "span": 2 }
                }
            }"#;
            let mut h = Self::new();
            h.ctx.sprites = SpriteRegistry::from_manifest(&AssetManifest::from_json(json).unwrap());
            h.frame(&[]);
            h
        }

        fn shows(&self, sprite: &str) -> bool {
            let wanted = self.ctx.sprites.get(sprite);
            wanted.is_some() && self.ctx.scene.iter().any(|e| e.sprite.as_ref() == wanted)
        }

        fn frame(&mut self, input: &[InputEvent]) {
            self.ctx.clear_frame_data();
            let mut queue = InputQueue::new();
            for event in input {
                queue.push(*event);
            }
            self.game.update(&mut self.ctx, &queue);
            self.sounds.extend(self.ctx.sounds.iter().map(|s| s.0));
            self.events.extend(self.ctx.events.iter().copied());
        }

        fn custom(&mut self, kind: u32) {
            self.frame(&[InputEvent::Custom { kind, a: 0.0, b: 0.0, c: 0.0 }]);
        }

        fn point(&mut self, (x, y): (f32, f32)) {
            self.frame(&[InputEvent::PointerMove { x, y }]);
        }

        fn idle_until_book(&mut self) -> u32 {
            let mut frames = 0;
            while self.game.phase() == Phase::Casting {
                self.frame(&[]);
                frames += 1;
                assert!(frames <= 200, "cast never finished");
            }
            frames
        }

        fn wait_banner(&mut self) {
            while self.game.book().banner().is_some() {
                self.frame(&[]);
            }
        }

        /// Cast the current page; trace it fully or fail on the second node.
        fn cast_honeywisp(&mut self, trace: bool) {
            self.custom(events::CAST);
            assert_eq!(self.game.phase(), Phase::Casting);
            if trace {
                for node in HONEYWISP {
                    self.point(node);
                }
            } else {
                self.point(HONEYWISP[1]);
            }
            self.idle_until_book();
            self.wait_banner();
        }

        fn events_of(&self, kind: f32) -> Vec<GameEvent> {
            self.events.iter().copied().filter(|e| e.kind == kind).collect()
        }

        fn clear_log(&mut self) {
            self.sounds.clear();
            self.events.clear();
        }
    }

    #[test]
    fn first_update_announces_page_and_casts() {
        let mut game = SpellBrew::new();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx);
        assert!(ctx.events.is_empty());
        game.update(&mut ctx, &InputQueue::new());
        assert_eq!(ctx.events[0], GameEvent::new(game_events::PAGE, 0.0));
        assert_eq!(ctx.events[1], GameEvent::new(game_events::CASTS_REMAINING, 3.0));
    }

    #[test]
    fn page_buttons_flip_and_wrap() {
        let mut h = Harness::new();
        h.custom(events::PREV_PAGE);
        assert_eq!(h.game.book().page(), 14);
        assert_eq!(h.sounds, vec![sounds::PAGE_FLIP]);
        assert_eq!(h.events_of(game_events::PAGE)[0].a, 14.0);
        h.custom(events::NEXT_PAGE);
        assert_eq!(h.game.book().page(), 0);
    }

    #[test]
    fn traced_cast_confirms_each_node_and_tallies() {
        let mut h = Harness::new();
        h.custom(events::CAST);
        for node in HONEYWISP {
            h.point(node);
        }
        assert_eq!(h.sounds, vec![sounds::CONFIRM; 6]);
        assert_eq!(h.idle_until_book(), 120);

        assert_eq!(h.events_of(game_events::CAST_RESULT)[0].a, 1.0);
        assert_eq!(h.events_of(game_events::CASTS_REMAINING)[0].a, 2.0);
        assert_eq!(h.game.book().formulation().get(Ingredient::Sweet), Some(2));
    }

    #[test]
    fn wrong_node_fails_with_error_cue() {
        let mut h = Harness::new();
        h.custom(events::CAST);
        h.point(HONEYWISP[2]);
        assert_eq!(h.sounds, vec![sounds::ERROR]);
        assert_eq!(h.idle_until_book(), 120);
        assert_eq!(h.events_of(game_events::CAST_RESULT)[0].a, 0.0);
        assert!(h.game.book().formulation().is_empty());
    }

    #[test]
    fn escape_cancels_cast_but_plays_burst() {
        let mut h = Harness::new();
        h.custom(events::CAST);
        h.point(HONEYWISP[0]);
        h.frame(&[InputEvent::KeyDown { key_code: keys::ESCAPE }]);
        assert_eq!(h.sounds, vec![sounds::CONFIRM]);
        assert_eq!(h.idle_until_book(), 120);
        assert_eq!(h.events_of(game_events::CAST_RESULT)[0].a, 0.0);
        assert_eq!(h.game.book().casts_remaining(), 2);
        // Escape during a cast does not also close the book.
        assert_eq!(h.game.phase(), Phase::Book);
    }

    #[test]
    fn quit_during_cast_skips_result() {
        let mut h = Harness::new();
        h.custom(events::CAST);
        h.point(HONEYWISP[0]);
        h.custom(events::QUIT);
        assert_eq!(h.game.phase(), Phase::Quit);
        assert_eq!(h.events_of(game_events::QUIT).len(), 1);
        assert!(h.events_of(game_events::CAST_RESULT).is_empty());
        assert_eq!(h.game.book().casts_remaining(), 3);

        h.custom(events::CAST);
        assert_eq!(h.game.phase(), Phase::Quit);
    }

    #[test]
    fn three_casts_serve_a_graded_brew() {
        let mut h = Harness::new();
        h.frame(&[InputEvent::Custom {
            kind: events::ORDER_WANT,
            a: Ingredient::Sweet.code() as f32,
            b: 4.0,
            c: 0.0,
        }]);

        h.cast_honeywisp(true);
        h.cast_honeywisp(false);
        h.clear_log();
        h.cast_honeywisp(true);

        assert_eq!(h.game.phase(), Phase::Served);
        let brew = h.events_of(game_events::FORMULATION);
        assert_eq!(brew.len(), 1);
        assert_eq!((brew[0].a, brew[0].b), (Ingredient::Sweet.code() as f32, 4.0));
        assert_eq!(h.events_of(game_events::GRADE)[0].a, Grade::Perfect.code());
    }

    #[test]
    fn casting_is_blocked_while_banner_shows() {
        let mut h = Harness::new();
        h.cast_honeywisp(false);
        h.custom(events::CAST);
        assert_eq!(h.game.phase(), Phase::Casting);
        h.point(HONEYWISP[1]);
        h.idle_until_book();
        h.custom(events::CAST);
        assert_eq!(h.game.phase(), Phase::Book);
        h.custom(events::NEXT_PAGE);
        assert_eq!(h.game.book().page(), 0);
    }

    #[test]
    fn escape_on_book_serves_early() {
        let mut h = Harness::new();
        h.frame(&[InputEvent::Custom {
            kind: events::ORDER_WANT,
            a: Ingredient::Mint.code() as f32,
            b: 1.0,
            c: 0.0,
        }]);
        h.cast_honeywisp(true);
        h.frame(&[InputEvent::KeyDown { key_code: keys::ESCAPE }]);

        assert_eq!(h.game.phase(), Phase::Served);
        assert_eq!(h.events_of(game_events::GRADE)[0].a, Grade::Bad.code());

        h.custom(events::NEW_ROUND);
        assert_eq!(h.game.phase(), Phase::Book);
        assert_eq!(h.game.book().casts_remaining(), 3);
        assert!(h.game.book().formulation().is_empty());
        assert_eq!(h.game.order().grade(h.game.book().formulation()), Grade::Bad);
    }

    #[test]
    fn requires_cup_markers_and_every_glyph() {
        let sprites = SpellBrew::new().required_sprites();
        assert_eq!(sprites.len(), 3 + 15);
        assert!(sprites.iter().any(|s| s == "teacup"));
        assert!(sprites.iter().any(|s| s == "glyph_honeywisp"));
    }

    #[test]
    fn leaving_the_canvas_ends_hover() {
        let mut h = Harness::new();
        h.custom(events::CAST);
        h.point(HONEYWISP[0]);
        h.frame(&[InputEvent::PointerLeave]);
        h.point(HONEYWISP[0]);
        assert_eq!(h.sounds, vec![sounds::CONFIRM, sounds::ERROR]);
    }

    #[test]
    fn order_clear_and_want_in_one_frame() {
        let mut h = Harness::new();
        h.frame(&[InputEvent::Custom { kind: events::ORDER_WANT, a: 1.0, b: 2.0, c: 0.0 }]);
        h.frame(&[
            InputEvent::Custom { kind: events::ORDER_CLEAR, a: 0.0, b: 0.0, c: 0.0 },
            InputEvent::Custom { kind: events::ORDER_WANT, a: Ingredient::Tea.code() as f32, b: 1.0, c: 0.0 },
        ]);
        let wants: Vec<_> = h.game.order().iter().collect();
        assert_eq!(wants, vec![(Ingredient::Tea, 1)]);
    }

    #[test]
    fn unknown_order_ingredient_is_ignored() {
        let mut h = Harness::new();
        h.frame(&[InputEvent::Custom { kind: events::ORDER_WANT, a: 42.0, b: 1.0, c: 0.0 }]);
        assert!(h.game.order().is_empty());
    }

    #[test]
    fn cast_tick_swaps_glyph_for_nodes() {
        let mut h = Harness::with_sprites();
        assert!(h.shows("glyph_honeywisp"));
        h.custom(events::CAST);
        assert!(!h.shows("glyph_honeywisp"));
        // Six nodes and the emphasis ring.
        assert_eq!(h.ctx.scene.iter().filter(|e| e.shape.is_some()).count(), 7);
    }

    #[test]
    fn teacup_shows_for_the_burst_only() {
        let mut h = Harness::with_sprites();
        h.custom(events::CAST);
        let mut cup_frames = 0;
        for node in HONEYWISP {
            h.point(node);
            cup_frames += h.shows(render::TEACUP) as u32;
        }
        while h.game.phase() == Phase::Casting {
            h.frame(&[]);
            cup_frames += h.shows(render::TEACUP) as u32;
        }
        assert_eq!(cup_frames, 120);
        assert!(h.shows("glyph_honeywisp"));
    }

    #[test]
    fn page_turn_applies_once_in_a_multi_step_frame() {
        let mut runner = GameRunner::new(SpellBrew::new());
        runner.init();
        runner.push_input(InputEvent::Custom { kind: events::NEXT_PAGE, a: 0.0, b: 0.0, c: 0.0 });
        runner.tick(2.0 / 60.0);

        assert_eq!(runner.game().book().page(), 1);
        assert_eq!(runner.sound_events_len(), 1);
        let pages: Vec<f32> = runner
            .context()
            .events
            .iter()
            .filter(|e| e.kind == game_events::PAGE)
            .map(|e| e.a)
            .collect();
        assert_eq!(pages, vec![0.0, 1.0]);
    }

    #[test]
    fn runs_under_game_runner() {
        let dt = 1.0 / 60.0;
        let mut runner = GameRunner::new(SpellBrew::new());
        runner.init();
        runner.load_manifest(
            r#"{ "atlases": [{ "name": "shop", "cols": 8, "rows": 4, "path": "shop.png" }],
                 "sprites": { "teacup": { "atlas": 0, "col": 0, "row": 0, "span": 4 },
                              "gold_star": { "atlas": 0, "col": 4, "row": 0 } } }"#,
        );

        runner.push_input(InputEvent::Custom { kind: events::CAST, a: 0.0, b: 0.0, c: 0.0 });
        runner.tick(dt);
        assert_eq!(runner.game().phase(), Phase::Casting);

        runner.push_input(InputEvent::PointerMove { x: 0.0, y: 0.0 });
        runner.tick(dt);
        // Six nodes and the emphasis ring, joined by the guide line.
        assert_eq!(runner.shape_count(), 7);
        assert!(runner.effects_vertex_count() > 0);

        for (x, y) in HONEYWISP {
            runner.push_input(InputEvent::PointerMove { x, y });
            runner.tick(dt);
            assert_eq!(runner.sound_events_len(), 1);
        }

        runner.tick(dt);
        assert_eq!(runner.shape_count(), 0);
        assert!(runner.instance_count() >= 1);

        for _ in 0..120 {
            runner.tick(dt);
        }
        assert_eq!(runner.game().phase(), Phase::Book);
        assert_eq!(runner.game().book().casts_remaining(), 2);
    }
}
