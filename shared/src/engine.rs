//! Spin state machine.
//!
//! `Idle -> Spinning` on [`SpinEngine::request_spin`] (at least
//! `min_options` options and a positive total weight), `Spinning -> Spinning`
//! on every [`SpinEngine::advance`] before the duration has elapsed, and
//! `Spinning -> Idle` on the advance that completes the animation, which is
//! also the only place the winner is reported.
//!
//! The options and their segments are snapshotted when a spin starts, so
//! edits made to the caller's list while the wheel turns have no effect on
//! the spin in flight.

use std::borrow::Cow;
use std::mem;

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::angle::to_degrees;
use crate::animation::SpinAnimation;
use crate::config::SpinConfig;
use crate::error::Result;
use crate::rotation::{plan_rotation, RotationPlan};
use crate::segments::{compute_segments, Segment};
use crate::selection::pick_winner;
use crate::wheel_option::WheelOption;

/// Why a spin request was ignored. None of these are errors.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SpinRejection {
    AlreadySpinning,
    NotEnoughOptions { have: usize, need: usize },
    NoWeight,
}

/// What a started spin is going to do.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinPlan {
    pub winner_index: usize,
    pub winner: WheelOption,
    pub rotation: RotationPlan,
    pub duration_ms: u32,
}

/// Reported exactly once, when the animation completes.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinOutcome {
    pub winner_index: usize,
    pub winner: WheelOption,
    pub orientation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FrameUpdate {
    pub orientation: f64,
    pub finished: Option<SpinOutcome>,
}

#[derive(Debug, Clone)]
struct ActiveSpin {
    segments: Vec<Segment>,
    plan: SpinPlan,
    animation: SpinAnimation,
}

#[derive(Debug, Clone)]
enum SpinPhase {
    Idle,
    Spinning(ActiveSpin),
}

#[derive(Debug, Clone)]
pub struct SpinEngine {
    config: SpinConfig,
    /// Accumulated rotation in radians. Only `reset` brings it back to 0.
    orientation: f64,
    phase: SpinPhase,
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self {
            config: SpinConfig::default(),
            orientation: 0.0,
            phase: SpinPhase::Idle,
        }
    }
}

impl SpinEngine {
    pub fn new(config: SpinConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            orientation: 0.0,
            phase: SpinPhase::Idle,
        })
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    pub fn orientation(&self) -> f64 {
        self.orientation
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, SpinPhase::Spinning(_))
    }

    /// Segments to draw: the spin snapshot while spinning, otherwise freshly
    /// computed from `options`.
    pub fn segments_for<'a>(&'a self, options: &[WheelOption]) -> Cow<'a, [Segment]> {
        match &self.phase {
            SpinPhase::Spinning(active) => Cow::Borrowed(&active.segments),
            SpinPhase::Idle => Cow::Owned(compute_segments(options, self.config.start_angle)),
        }
    }

    /// Picks a winner and starts animating towards it.
    ///
    /// A rejected request leaves the engine untouched.
    pub fn request_spin<R: Rng + ?Sized>(
        &mut self,
        options: &[WheelOption],
        rng: &mut R,
        now_ms: f64,
    ) -> std::result::Result<SpinPlan, SpinRejection> {
        if self.is_spinning() {
            log::debug!("spin ignored: already spinning");
            return Err(SpinRejection::AlreadySpinning);
        }
        if options.len() < self.config.min_options {
            log::debug!("spin ignored: {} options", options.len());
            return Err(SpinRejection::NotEnoughOptions {
                have: options.len(),
                need: self.config.min_options,
            });
        }

        let segments = compute_segments(options, self.config.start_angle);
        let winner_index = pick_winner(&segments, rng).ok_or(SpinRejection::NoWeight)?;
        let winner_segment = &segments[winner_index];
        let rotation = plan_rotation(winner_segment, self.orientation, &self.config, rng);

        log::debug!(
            "spin: winner {} ({:?}), landing {:.2} deg, {} extra turns, target {:.2} deg",
            winner_index,
            winner_segment.option.label,
            to_degrees(rotation.landing_angle),
            rotation.extra_turns,
            to_degrees(rotation.target),
        );

        let plan = SpinPlan {
            winner_index,
            winner: winner_segment.option.clone(),
            rotation,
            duration_ms: self.config.duration_ms,
        };
        let animation = SpinAnimation::new(
            plan.rotation.start,
            plan.rotation.target,
            now_ms,
            self.config.duration_ms,
            self.config.easing,
        );
        self.phase = SpinPhase::Spinning(ActiveSpin {
            segments,
            plan: plan.clone(),
            animation,
        });
        Ok(plan)
    }

    /// Moves the animation to `now_ms`. Returns `None` while idle.
    pub fn advance(&mut self, now_ms: f64) -> Option<FrameUpdate> {
        let SpinPhase::Spinning(active) = &self.phase else {
            return None;
        };

        if !active.animation.is_finished(now_ms) {
            self.orientation = active.animation.orientation_at(now_ms);
            return Some(FrameUpdate {
                orientation: self.orientation,
                finished: None,
            });
        }

        let SpinPhase::Spinning(active) = mem::replace(&mut self.phase, SpinPhase::Idle) else {
            return None;
        };
        self.orientation = active.plan.rotation.target;
        log::debug!("spin finished on option {}", active.plan.winner_index);
        Some(FrameUpdate {
            orientation: self.orientation,
            finished: Some(SpinOutcome {
                winner_index: active.plan.winner_index,
                winner: active.plan.winner,
                orientation: self.orientation,
            }),
        })
    }

    /// Puts the wheel back at orientation 0. Refused while spinning.
    pub fn reset(&mut self) -> bool {
        if self.is_spinning() {
            log::warn!("reset ignored while spinning");
            return false;
        }
        self.orientation = 0.0;
        true
    }
}
