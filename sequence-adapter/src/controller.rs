use sequence::{
    ConfigError, Direction, ItemMeasurer, Navigation, NavigationTrigger, Sequence,
    SequenceOptions, TimerId,
};

use crate::{OffsetAnimator, TweenAnimator, key_direction};

/// A framework-neutral controller that wraps a [`Sequence`] and owns the clock.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_button` / `on_key` / `on_click` / `on_pointer_enter` / `on_pointer_leave` when UI
///   events occur
/// - `tick(now_ms)` each frame/timer tick (for animated transitions and the autoscroll timer)
///
/// Use [`Controller::offset`] (or the value returned by `tick`) to position the real holder.
#[derive(Clone, Debug)]
pub struct Controller<A = TweenAnimator> {
    sequence: Sequence,
    animator: A,
    offset: u64,
    timer: Option<(TimerId, u64)>,
    hover_paused: bool,
}

impl Controller<TweenAnimator> {
    /// Builds the sequence and starts its autoscroll clock at `now_ms`.
    pub fn new(
        options: SequenceOptions,
        measurer: &impl ItemMeasurer,
        now_ms: u64,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_sequence(
            Sequence::new(options, measurer)?,
            TweenAnimator::default(),
            now_ms,
        ))
    }
}

impl<A: OffsetAnimator> Controller<A> {
    pub fn with_animator(
        options: SequenceOptions,
        measurer: &impl ItemMeasurer,
        animator: A,
        now_ms: u64,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_sequence(
            Sequence::new(options, measurer)?,
            animator,
            now_ms,
        ))
    }

    /// Wraps an existing sequence. Its committed scroll position becomes the displayed offset
    /// and its pending timer, if any, is scheduled from `now_ms`.
    pub fn from_sequence(sequence: Sequence, animator: A, now_ms: u64) -> Self {
        let timer = sequence
            .pending_timer()
            .map(|t| (t.id, now_ms.saturating_add(t.delay_ms)));
        Self {
            offset: sequence.scroll_position(),
            sequence,
            animator,
            timer,
            hover_paused: false,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Direct access to the engine. Navigations made through it must be passed to
    /// [`Controller::apply`] to take effect on the displayed offset and timer.
    pub fn sequence_mut(&mut self) -> &mut Sequence {
        &mut self.sequence
    }

    pub fn into_sequence(self) -> Sequence {
        self.sequence
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// The offset the holder is displayed at. Lags behind `sequence().scroll_position()`
    /// while a transition is animating.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// When the pending autoscroll step is due, in the clock of `tick`.
    pub fn timer_deadline(&self) -> Option<u64> {
        self.timer.map(|(_, deadline)| deadline)
    }

    /// `true` while autoscroll is paused because the pointer is over the container.
    pub fn is_hover_paused(&self) -> bool {
        self.hover_paused
    }

    pub fn go_to_item(
        &mut self,
        index: usize,
        center: bool,
        focus: bool,
        now_ms: u64,
    ) -> Option<Navigation> {
        let navigation = self.sequence.go_to_item(index, center, focus)?;
        self.apply(navigation, now_ms);
        Some(navigation)
    }

    pub fn navigate(&mut self, trigger: NavigationTrigger, now_ms: u64) -> Option<Navigation> {
        let navigation = self.sequence.navigate(trigger)?;
        self.apply(navigation, now_ms);
        Some(navigation)
    }

    /// A paging button was pressed. Disabled buttons do nothing.
    pub fn on_button(&mut self, direction: Direction, now_ms: u64) -> Option<Navigation> {
        if !self.sequence.buttons().is_enabled(direction) {
            atrace!(?direction, "paging button disabled");
            return None;
        }
        self.navigate(NavigationTrigger::paging(direction), now_ms)
    }

    /// A key was pressed. Only the arrow keys of the sequence's axis navigate.
    pub fn on_key(&mut self, key_code: u32, now_ms: u64) -> Option<Navigation> {
        let direction = key_direction(self.sequence.options().orientation, key_code)?;
        self.navigate(NavigationTrigger::keyboard(direction), now_ms)
    }

    /// An item was clicked. Returns whether the click should propagate.
    pub fn on_click(&mut self, index: usize, now_ms: u64) -> bool {
        let outcome = self.sequence.click(index);
        if let Some(navigation) = outcome.navigation {
            self.apply(navigation, now_ms);
        }
        outcome.propagate
    }

    /// The pointer entered the container. Pauses autoscroll when hover pause is configured.
    ///
    /// Enter events from moving between descendants of the container must be filtered out by
    /// the caller; repeated enters are ignored.
    pub fn on_pointer_enter(&mut self) {
        let options = self.sequence.options();
        if !(options.pause_on_hover && options.auto_scroll) || self.hover_paused {
            return;
        }
        adebug!("pointer entered, pausing");
        self.hover_paused = true;
        self.pause();
    }

    /// The pointer left the container. Resumes autoscroll paused by [`Self::on_pointer_enter`].
    pub fn on_pointer_leave(&mut self, now_ms: u64) {
        if !self.hover_paused {
            return;
        }
        adebug!("pointer left, resuming");
        self.hover_paused = false;
        self.unpause(now_ms);
    }

    /// Pauses the sequence. A running animation is allowed to finish.
    pub fn pause(&mut self) {
        self.sequence.pause();
        self.timer = None;
    }

    pub fn unpause(&mut self, now_ms: u64) {
        self.timer = self
            .sequence
            .unpause()
            .map(|t| (t.id, now_ms.saturating_add(t.delay_ms)));
    }

    /// Advances the animation and fires the autoscroll timer when it is due.
    ///
    /// Returns the new displayed offset when it changed during this tick.
    pub fn tick(&mut self, now_ms: u64) -> Option<u64> {
        let before = self.offset;

        if let Some(frame) = self.animator.step(now_ms) {
            self.offset = frame.offset;
            if let Some(id) = frame.finished {
                self.sequence.complete_transition(id);
            }
        }

        if let Some((id, deadline)) = self.timer {
            if now_ms >= deadline {
                self.timer = None;
                atrace!(now_ms, deadline, "autoscroll timer due");
                if let Some(navigation) = self.sequence.fire_autoscroll(id) {
                    self.apply(navigation, now_ms);
                }
            }
        }

        (self.offset != before).then_some(self.offset)
    }

    /// Applies a navigation decision: snaps or starts animating the displayed offset and
    /// reschedules the autoscroll timer.
    ///
    /// A running animation is cancelled first; its transition was superseded by `navigation`.
    pub fn apply(&mut self, navigation: Navigation, now_ms: u64) {
        if self.animator.cancel().is_some() {
            atrace!("animation superseded");
        }
        if navigation.animate && navigation.offset != self.offset {
            self.animator.animate(
                self.offset,
                navigation.offset,
                navigation.duration_ms,
                now_ms,
                navigation.transition,
            );
        } else {
            self.offset = navigation.offset;
            if navigation.animate {
                self.sequence.complete_transition(navigation.transition);
            }
        }
        self.timer = navigation
            .timer
            .map(|t| (t.id, now_ms.saturating_add(t.delay_ms)));
    }
}
