//! Per-attempt tracing state machine.
//!
//! [`InteractionSession::step`] is a pure reducer over one tick of input. It
//! never polls, draws or plays audio; the caller forwards the returned
//! [`Cue`] and reads the session for rendering.

use glam::DVec2;

use crate::pattern::TracePattern;

/// One tick of input as seen by a cast.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position, or `None` when the pointer is off the play area.
    pub pointer: Option<DVec2>,
    /// Abandon this cast.
    pub cancel: bool,
    /// Abandon this cast and leave the application.
    pub quit: bool,
}

impl FrameInput {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            pointer: Some(DVec2::new(x, y)),
            ..Default::default()
        }
    }

    pub fn cancelled() -> Self {
        Self { cancel: true, ..Default::default() }
    }

    pub fn quitting() -> Self {
        Self { quit: true, ..Default::default() }
    }
}

/// Audio feedback requested by a hover-enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Confirm,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Succeeded,
    Failed,
}

/// How a session reached its terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Traced,
    WrongRegion,
    Retraced,
    Cancelled,
    Quit,
}

#[derive(Debug, Clone)]
pub struct InteractionSession {
    pattern: TracePattern,
    next_required: u32,
    previous_hovered: Option<u32>,
    state: SessionState,
    end_reason: Option<EndReason>,
}

impl InteractionSession {
    /// Start a session on a private, reset copy of `pattern`.
    pub fn new(pattern: &TracePattern) -> Self {
        let mut pattern = pattern.clone();
        pattern.reset();
        Self {
            pattern,
            next_required: 0,
            previous_hovered: None,
            state: SessionState::InProgress,
            end_reason: None,
        }
    }

    /// Advance one tick. Returns the cue to play, if any.
    /// Terminal sessions ignore all input.
    pub fn step(&mut self, input: &FrameInput) -> Option<Cue> {
        if self.state != SessionState::InProgress {
            return None;
        }

        if input.cancel || input.quit {
            let reason = if input.quit { EndReason::Quit } else { EndReason::Cancelled };
            self.finish(SessionState::Failed, reason);
            return None;
        }

        let hovered_now = input.pointer.and_then(|p| self.pattern.hovered(p));
        let mut cue = None;

        if let Some(index) = hovered_now {
            if hovered_now != self.previous_hovered {
                cue = Some(self.enter(index));
            }
        }

        self.previous_hovered = hovered_now;
        cue
    }

    fn enter(&mut self, index: u32) -> Cue {
        let next_required = self.next_required;
        let len = self.pattern.len();
        let Ok(region) = self.pattern.region_at_mut(index) else {
            return Cue::Error;
        };

        if region.traced {
            log::debug!("node {index} entered again after tracing");
            self.finish(SessionState::Failed, EndReason::Retraced);
            return Cue::Error;
        }
        if index != next_required {
            log::debug!("node {index} entered, expected {next_required}");
            self.finish(SessionState::Failed, EndReason::WrongRegion);
            return Cue::Error;
        }

        region.mark_traced();
        self.next_required += 1;
        log::debug!("node {index} traced ({}/{len})", self.next_required);
        if self.next_required == len {
            self.finish(SessionState::Succeeded, EndReason::Traced);
        }
        Cue::Confirm
    }

    fn finish(&mut self, state: SessionState, reason: EndReason) {
        self.state = state;
        self.end_reason = Some(reason);
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// `None` while in progress, then whether the glyph was traced.
    pub fn result(&self) -> Option<bool> {
        match self.state {
            SessionState::InProgress => None,
            SessionState::Succeeded => Some(true),
            SessionState::Failed => Some(false),
        }
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn is_terminal(&self) -> bool {
        self.state != SessionState::InProgress
    }

    pub fn next_required(&self) -> u32 {
        self.next_required
    }

    pub fn previous_hovered(&self) -> Option<u32> {
        self.previous_hovered
    }

    pub fn pattern(&self) -> &TracePattern {
        &self.pattern
    }
}
