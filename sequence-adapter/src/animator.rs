use sequence::TransitionId;

use crate::{Easing, Tween};

/// One animation step produced by [`OffsetAnimator::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationFrame {
    /// The offset the holder should be displayed at.
    pub offset: u64,
    /// Set on the last frame of a transition; pass it to `Sequence::complete_transition`.
    pub finished: Option<TransitionId>,
}

/// Moves the displayed holder offset towards a target over time.
///
/// The animator never talks to the sequence. It only reports which transition finished, and the
/// owner decides whether that completion is still current.
pub trait OffsetAnimator {
    /// Starts animating from `from` to `to`, replacing any running animation.
    fn animate(&mut self, from: u64, to: u64, duration_ms: u64, now_ms: u64, id: TransitionId);

    /// Stops the running animation without finishing it. Returns the abandoned transition.
    fn cancel(&mut self) -> Option<TransitionId>;

    /// Advances the running animation. Returns `None` when idle.
    fn step(&mut self, now_ms: u64) -> Option<AnimationFrame>;

    fn is_animating(&self) -> bool;
}

/// The default animator: a single [`Tween`] with a configurable easing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TweenAnimator {
    easing: Easing,
    active: Option<(Tween, TransitionId)>,
}

impl TweenAnimator {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            active: None,
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.active.as_ref().map(|(tween, _)| tween)
    }
}

impl OffsetAnimator for TweenAnimator {
    fn animate(&mut self, from: u64, to: u64, duration_ms: u64, now_ms: u64, id: TransitionId) {
        self.active = Some((Tween::new(from, to, now_ms, duration_ms, self.easing), id));
    }

    fn cancel(&mut self) -> Option<TransitionId> {
        self.active.take().map(|(_, id)| id)
    }

    fn step(&mut self, now_ms: u64) -> Option<AnimationFrame> {
        let (tween, id) = self.active?;
        let offset = tween.sample(now_ms);
        let finished = if tween.is_done(now_ms) {
            self.active = None;
            Some(id)
        } else {
            None
        };
        Some(AnimationFrame { offset, finished })
    }

    fn is_animating(&self) -> bool {
        self.active.is_some()
    }
}
