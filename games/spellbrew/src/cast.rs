//! Runs one cast: the tracing session, then the resolution burst.

use brew_engine::Rng;
use glam::DVec2;
use thiserror::Error;

use crate::animator::ResolutionAnimator;
use crate::config::CastConfig;
use crate::pattern::TracePattern;
use crate::session::{Cue, EndReason, FrameInput, InteractionSession};

/// The player asked to leave the application mid-cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("quit requested during cast")]
pub struct QuitRequested;

/// Blocking host for [`CastController::run`].
pub trait CastHost {
    /// Sample this tick's input.
    fn poll(&mut self) -> FrameInput;
    fn play(&mut self, cue: Cue);
    /// Draw the current tick. Hosts without a display can ignore it.
    fn present(&mut self, _view: CastView<'_>) {}
}

/// Read-only state for rendering one tick of a cast.
#[derive(Debug, Clone, Copy)]
pub struct CastView<'a> {
    pub session: &'a InteractionSession,
    pub animator: Option<&'a ResolutionAnimator>,
}

/// An in-flight cast driven one tick at a time.
#[derive(Debug, Clone)]
pub struct CastRun {
    session: InteractionSession,
    animator: Option<ResolutionAnimator>,
}

impl CastRun {
    pub fn view(&self) -> CastView<'_> {
        CastView {
            session: &self.session,
            animator: self.animator.as_ref(),
        }
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    pub fn animator(&self) -> Option<&ResolutionAnimator> {
        self.animator.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastStep {
    Running { cue: Option<Cue> },
    /// The burst has played out; carries whether the glyph was traced.
    Finished(bool),
    Quit,
}

pub struct CastController {
    config: CastConfig,
    rng: Rng,
    anchor: DVec2,
}

impl CastController {
    /// `anchor` is where the resolution burst is centered.
    pub fn new(config: CastConfig, anchor: DVec2) -> Self {
        let rng = Rng::new(config.rng_seed);
        Self { config, rng, anchor }
    }

    pub fn config(&self) -> &CastConfig {
        &self.config
    }

    pub fn begin(&self, pattern: &TracePattern) -> CastRun {
        log::debug!("cast begins: {} ({} nodes)", pattern.name, pattern.len());
        CastRun {
            session: InteractionSession::new(pattern),
            animator: None,
        }
    }

    /// Advance a cast by one tick.
    ///
    /// The burst is generated on the tick the session resolves and then runs
    /// for `resolution_ticks` further steps; the last of those returns
    /// `Finished`. Quit ends the cast at once from either phase.
    pub fn step(&mut self, run: &mut CastRun, input: &FrameInput) -> CastStep {
        if let Some(animator) = &mut run.animator {
            if input.quit {
                return CastStep::Quit;
            }
            animator.tick();
            return if animator.is_finished() {
                CastStep::Finished(animator.success())
            } else {
                CastStep::Running { cue: None }
            };
        }

        let cue = run.session.step(input);
        if let Some(success) = run.session.result() {
            log::debug!("cast resolved: {:?}", run.session.end_reason());
            if run.session.end_reason() == Some(EndReason::Quit) {
                return CastStep::Quit;
            }
            run.animator = Some(ResolutionAnimator::new(success, self.anchor, &self.config, &mut self.rng));
        }
        CastStep::Running { cue }
    }

    /// Run a whole cast against a blocking host.
    /// Returns whether the glyph was traced, or `QuitRequested`.
    pub fn run(&mut self, pattern: &TracePattern, host: &mut impl CastHost) -> Result<bool, QuitRequested> {
        let mut run = self.begin(pattern);
        loop {
            let input = host.poll();
            match self.step(&mut run, &input) {
                CastStep::Running { cue } => {
                    if let Some(cue) = cue {
                        host.play(cue);
                    }
                    host.present(run.view());
                }
                CastStep::Finished(success) => return Ok(success),
                CastStep::Quit => return Err(QuitRequested),
            }
        }
    }
}
