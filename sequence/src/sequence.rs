use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::item::{LoopFlags, build_items};
use crate::lookahead::{LookaheadNotifier, threshold_pixels};
use crate::{
    AutoScrollTimer, ClickOutcome, ConfigError, Direction, FinishAction, FocusCallback,
    Granularity, Item, ItemMeasurer, KeyScrollType, LinkSet, Navigation, NavigationKind,
    NavigationTrigger, OffsetModel, PagingButtons, SequenceOptions, TimerId, TransitionId,
};

/// A headless carousel engine.
///
/// The sequence owns the navigation state of one carousel: which item is current, where the
/// keyboard cursor is, which way autoscroll runs and where the holder is scrolled. Every
/// navigation entry point returns a [`Navigation`] decision (or `None` when nothing happens);
/// the UI layer applies it by snapping or animating its holder.
///
/// It does not own a clock or an animation loop:
/// - animated transitions are finished by calling [`Sequence::complete_transition`];
/// - the autoscroll timer is handed out as an [`AutoScrollTimer`] and fired with
///   [`Sequence::fire_autoscroll`].
///
/// Both carry generation ids, so a completion or timer that was superseded is ignored.
///
/// For a clock-driven wrapper with a tween animator, see the `sequence-adapter` crate.
#[derive(Clone)]
pub struct Sequence {
    options: SequenceOptions,
    items: Vec<Item>,
    container_extent: u32,
    holder_extent: u64,
    max_item_extent: u32,

    current_item: Option<usize>,
    key_scroll_item: Option<usize>,
    direction: Direction,
    scroll_position: u64,
    paused: bool,
    buttons: PagingButtons,

    transition_generation: u64,
    active_transition: Option<TransitionId>,
    timer_generation: u64,
    pending_timer: Option<AutoScrollTimer>,

    focus_callbacks: Vec<FocusCallback>,
    lookahead: LookaheadNotifier,
}

impl Sequence {
    /// Measures the items, validates the options and snaps to the first item.
    pub fn new(options: SequenceOptions, measurer: &impl ItemMeasurer) -> Result<Self, ConfigError> {
        options.validate()?;

        let orientation = options.orientation;
        if measurer.item_count() == 0 {
            return Err(ConfigError::EmptySequence);
        }
        let container_extent = measurer.container_extent(orientation);
        if container_extent == 0 {
            return Err(ConfigError::EmptyContainer);
        }

        let loops = LoopFlags {
            linear: options.auto_scroll_finish_action == FinishAction::Rewind,
            paging: options.paging_loop,
            key_scroll: options.key_scroll_loop,
        };
        let items = build_items(measurer, orientation, loops);
        let holder_extent = measurer.holder_extent(orientation);
        let max_item_extent = items.iter().map(|it| it.extent).max().unwrap_or(0);

        sdebug!(
            count = items.len(),
            container_extent,
            holder_extent,
            max_item_extent,
            "Sequence::new"
        );

        let lookahead = LookaheadNotifier::new(
            options.lazy_loader.clone(),
            threshold_pixels(
                options.lazy_load_type,
                options.lazy_load_threshold,
                container_extent,
                max_item_extent,
            ),
        );

        let mut sequence = Self {
            options,
            items,
            container_extent,
            holder_extent,
            max_item_extent,
            current_item: None,
            key_scroll_item: None,
            direction: Direction::Next,
            scroll_position: 0,
            paused: false,
            buttons: PagingButtons::default(),
            transition_generation: 0,
            active_transition: None,
            timer_generation: 0,
            pending_timer: None,
            focus_callbacks: Vec::new(),
            lookahead,
        };
        sequence.go_to(0, true, true, false);
        Ok(sequence)
    }

    pub fn options(&self) -> &SequenceOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// The focused item. Always `Some` once construction has completed.
    pub fn current_item(&self) -> Option<usize> {
        self.current_item
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.current_item == Some(index)
    }

    /// The keyboard cursor. It follows focus, but in per-item key scroll modes it can move
    /// ahead of the focused item.
    pub fn key_scroll_item(&self) -> Option<usize> {
        self.key_scroll_item
    }

    /// Current autoscroll direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The committed scroll offset. During an animation this is already the target.
    pub fn scroll_position(&self) -> u64 {
        self.scroll_position
    }

    pub fn container_extent(&self) -> u32 {
        self.container_extent
    }

    pub fn holder_extent(&self) -> u64 {
        self.holder_extent
    }

    pub fn max_item_extent(&self) -> u32 {
        self.max_item_extent
    }

    pub fn max_scroll(&self) -> u64 {
        self.offsets().max_scroll()
    }

    pub fn buttons(&self) -> PagingButtons {
        self.buttons
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pending_timer(&self) -> Option<AutoScrollTimer> {
        self.pending_timer
    }

    pub fn active_transition(&self) -> Option<TransitionId> {
        self.active_transition
    }

    /// The lookahead distance handed to the lazy loader, in pixels.
    pub fn lookahead_threshold(&self) -> u64 {
        self.lookahead.threshold()
    }

    /// The offset model over this sequence's geometry and centering options.
    pub fn offsets(&self) -> OffsetModel<'_> {
        OffsetModel::new(&self.items, self.container_extent, self.holder_extent)
            .with_centering(self.options.center_focus, self.options.scroll_snap)
    }

    /// Registers a callback invoked with the newly focused item.
    pub fn add_focus_callback(&mut self, f: impl Fn(&Item) + Send + Sync + 'static) {
        self.focus_callbacks.push(Arc::new(f));
    }

    /// Scrolls to `index`, optionally centering it and moving focus to it.
    ///
    /// Returns `None` (and changes nothing) when the index is out of range or the sequence is
    /// paused. Otherwise any in-flight transition and the pending timer are superseded.
    pub fn go_to_item(&mut self, index: usize, center: bool, focus: bool) -> Option<Navigation> {
        self.go_to(index, center, focus, self.options.smooth_scroll)
    }

    /// Dispatches a relative navigation request using the granularity configured for its kind.
    pub fn navigate(&mut self, trigger: NavigationTrigger) -> Option<Navigation> {
        if trigger.kind == NavigationKind::Keyboard && !self.options.use_key_scroll {
            strace!("key scroll disabled");
            return None;
        }
        let granularity = match trigger.kind {
            NavigationKind::Paging => self.options.paging_type,
            NavigationKind::Keyboard => self.options.key_scroll_type.granularity(),
            NavigationKind::AutoScroll => self.options.auto_scroll_type,
        };
        match granularity {
            Granularity::PerItem => self.advance(trigger.direction, trigger.kind),
            Granularity::PerPage => self.advance_page(trigger.direction, trigger.kind),
        }
    }

    /// Moves one item in `direction`, following the link set that belongs to `kind`.
    pub fn advance(&mut self, direction: Direction, kind: NavigationKind) -> Option<Navigation> {
        if self.paused {
            return None;
        }
        let current = self.current_item?;

        let key_scroll_type = self.options.key_scroll_type;
        if kind == NavigationKind::Keyboard && key_scroll_type != KeyScrollType::PerPage {
            let cursor = self.key_scroll_item.unwrap_or(current);
            let in_step = self.items[cursor].neighbor(LinkSet::KeyScroll, direction);
            let target = self.resolve_key_scroll_target(direction)?;
            let focus =
                key_scroll_type == KeyScrollType::PerItemAndFocus && in_step == Some(target);
            strace!(target, focus, "key scroll");
            return self.go_to_item(target, true, focus);
        }

        let set = match kind {
            NavigationKind::Paging => LinkSet::Paging,
            NavigationKind::Keyboard => LinkSet::KeyScroll,
            NavigationKind::AutoScroll => LinkSet::Linear,
        };
        let target = self.items[current].neighbor(set, direction)?;
        self.go_to_item(target, true, true)
    }

    /// Moves one container extent in `direction` and lands on the closest item.
    ///
    /// Paging and keyboard pages wrap around when their loop flag is on; autoscroll pages wrap
    /// forward when the finish action is `rewind`. Page moves never change focus.
    pub fn advance_page(&mut self, direction: Direction, kind: NavigationKind) -> Option<Navigation> {
        if self.paused {
            return None;
        }
        let looping = match kind {
            NavigationKind::Paging => self.options.paging_loop,
            NavigationKind::Keyboard => self.options.key_scroll_loop,
            NavigationKind::AutoScroll => {
                direction == Direction::Next
                    && self.options.auto_scroll_finish_action == FinishAction::Rewind
            }
        };

        let container = self.container_extent as i64;
        let holder = self.holder_extent.min(i64::MAX as u64) as i64;
        let mut position = self.scroll_position as i64;
        match direction {
            Direction::Next => {
                position += container;
                if looping && holder > 0 && position >= holder {
                    position %= holder;
                }
            }
            Direction::Previous => {
                if looping && position == 0 {
                    position = holder;
                }
                position -= container;
            }
        }

        let target = self.offsets().closest_item(position)?;
        strace!(position, target, looping, "page");
        self.go_to_item(target, false, false)
    }

    /// Resolves the next keyboard cursor position and stores it.
    ///
    /// Normally the cursor follows its own key-scroll link. At either end of the scroll range
    /// the target is re-derived from what is actually visible, so a cursor that has drifted
    /// off-screen does not cause a jump back.
    pub fn resolve_key_scroll_target(&mut self, direction: Direction) -> Option<usize> {
        let cursor = self.key_scroll_item.or(self.current_item)?;

        let offsets = self.offsets();
        let items = &self.items;
        let neighbor = |index: usize| items[index].neighbor(LinkSet::KeyScroll, direction);

        let key_loop = self.options.key_scroll_loop;
        let center = self.options.center_focus;
        let half = (self.container_extent / 2) as i64;
        let holder = self.holder_extent.min(i64::MAX as u64) as i64;
        let position = self.scroll_position as i64;

        let mut target = neighbor(cursor);

        if center && self.scroll_position == 0 {
            target = if key_loop && direction == Direction::Previous {
                offsets.closest_item(holder - half)
            } else {
                offsets.closest_item(position + half).and_then(neighbor)
            };
        }

        if self.scroll_position >= offsets.max_scroll() {
            target = if key_loop && direction == Direction::Next {
                if center {
                    offsets.closest_item(half)
                } else {
                    Some(0)
                }
            } else {
                let anchor = if center { position + half } else { position };
                offsets.closest_item(anchor).and_then(neighbor)
            };
        }

        if let Some(target) = target {
            self.key_scroll_item = Some(target);
        }
        self.key_scroll_item
    }

    /// Handles a click on an item.
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        let navigation = if self.options.focus_on_click {
            self.go_to_item(index, true, true)
        } else {
            None
        };
        ClickOutcome {
            navigation,
            propagate: self.options.enable_click_events,
        }
    }

    /// Runs the autoscroll step for a timer handed out earlier.
    ///
    /// A timer that was cancelled or superseded is ignored.
    pub fn fire_autoscroll(&mut self, id: TimerId) -> Option<Navigation> {
        match self.pending_timer {
            Some(timer) if timer.id == id => {}
            _ => {
                strace!("stale autoscroll timer ignored");
                return None;
            }
        }
        self.pending_timer = None;
        let direction = self.direction;
        self.navigate(NavigationTrigger::new(NavigationKind::AutoScroll, direction))
    }

    /// Marks an animated transition as finished.
    ///
    /// Returns `false` for a transition that was superseded; its completion must not be acted
    /// upon.
    pub fn complete_transition(&mut self, id: TransitionId) -> bool {
        if self.active_transition != Some(id) {
            strace!("stale transition completion ignored");
            return false;
        }
        self.active_transition = None;
        self.lookahead.settled();
        true
    }

    /// Stops autoscroll and suppresses all navigation until [`Self::unpause`].
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        sdebug!("pause");
        self.paused = true;
        self.pending_timer = None;
    }

    /// Resumes navigation and re-arms the autoscroll timer from the current item.
    pub fn unpause(&mut self) -> Option<AutoScrollTimer> {
        sdebug!("unpause");
        self.paused = false;
        let current = self.current_item?;
        self.arm_timer(current)
    }

    pub(crate) fn go_to(
        &mut self,
        index: usize,
        center: bool,
        focus: bool,
        animate: bool,
    ) -> Option<Navigation> {
        if self.paused {
            strace!(index, "navigation suppressed while paused");
            return None;
        }
        let offsets = self.offsets();
        let Some(target) = offsets.offset_for_item(index, center) else {
            swarn!(index, count = self.items.len(), "go_to_item: out-of-bounds index");
            return None;
        };
        let offset = offsets.clamp(target);

        self.transition_generation = self.transition_generation.wrapping_add(1);
        let transition = TransitionId(self.transition_generation);
        self.active_transition = animate.then_some(transition);

        self.scroll_position = offset;
        self.check_direction(index);
        if focus {
            self.current_item = Some(index);
            self.key_scroll_item = Some(index);
        }
        let timer = self.arm_timer(index);
        self.update_buttons(index);

        strace!(index, offset, animate, focus, "go_to_item");

        if focus {
            let item = self.items[index];
            for f in &self.focus_callbacks {
                f(&item);
            }
        }
        if !animate {
            self.lookahead.settled();
        }

        Some(Navigation {
            index,
            offset,
            transition,
            animate,
            duration_ms: if animate {
                self.options.scroll_duration_ms
            } else {
                0
            },
            focused: focus,
            timer,
        })
    }

    /// Flips the autoscroll direction at the ends of the sequence (finish action `reverse`).
    fn check_direction(&mut self, index: usize) {
        if !self.options.auto_scroll
            || self.options.auto_scroll_finish_action != FinishAction::Reverse
        {
            return;
        }
        let direction = self.direction;
        let at_end = match self.options.auto_scroll_type {
            Granularity::PerPage => match direction {
                Direction::Previous => self.scroll_position == 0,
                Direction::Next => self.scroll_position >= self.max_scroll(),
            },
            Granularity::PerItem => self.items[index]
                .neighbor(LinkSet::Linear, direction)
                .is_none(),
        };
        if at_end {
            self.direction = direction.reversed();
            sdebug!(index, "autoscroll direction reversed");
        }
    }

    /// Cancels the pending timer and arms a new one when autoscroll can continue from `index`.
    pub(crate) fn arm_timer(&mut self, index: usize) -> Option<AutoScrollTimer> {
        self.pending_timer = None;
        if !self.options.auto_scroll || self.paused {
            return None;
        }
        let can_continue = match self.options.auto_scroll_type {
            Granularity::PerPage => true,
            Granularity::PerItem => self
                .items
                .get(index)
                .and_then(|it| it.neighbor(LinkSet::Linear, self.direction))
                .is_some(),
        };
        if !can_continue {
            return None;
        }
        self.timer_generation = self.timer_generation.wrapping_add(1);
        let timer = AutoScrollTimer {
            id: TimerId(self.timer_generation),
            delay_ms: self.options.auto_scroll_delay_ms,
        };
        self.pending_timer = Some(timer);
        Some(timer)
    }

    pub(crate) fn update_buttons(&mut self, index: usize) {
        self.buttons = if self.options.paging_loop {
            let enabled = self.items.len() > 1;
            PagingButtons {
                previous: enabled,
                next: enabled,
            }
        } else {
            match self.options.paging_type {
                Granularity::PerItem => {
                    let links = self.items[index].paging;
                    PagingButtons {
                        previous: links.previous.is_some(),
                        next: links.next.is_some(),
                    }
                }
                Granularity::PerPage => PagingButtons {
                    previous: self.scroll_position > 0,
                    next: self.scroll_position < self.max_scroll(),
                },
            }
        };
    }

    pub(crate) fn restore_parts(
        &mut self,
        current_item: Option<usize>,
        key_scroll_item: Option<usize>,
        direction: Direction,
        scroll_position: u64,
        paused: bool,
    ) -> Option<AutoScrollTimer> {
        let len = self.items.len();
        let valid = |i: Option<usize>| i.filter(|&i| i < len);

        self.current_item = valid(current_item).or(self.current_item);
        self.key_scroll_item = valid(key_scroll_item).or(self.current_item);
        self.direction = direction;
        self.scroll_position = scroll_position.min(self.max_scroll());
        self.paused = paused;

        self.transition_generation = self.transition_generation.wrapping_add(1);
        self.active_transition = None;

        let current = self.current_item?;
        self.update_buttons(current);
        self.arm_timer(current)
    }
}

impl core::fmt::Debug for Sequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sequence")
            .field("options", &self.options)
            .field("len", &self.items.len())
            .field("container_extent", &self.container_extent)
            .field("holder_extent", &self.holder_extent)
            .field("current_item", &self.current_item)
            .field("key_scroll_item", &self.key_scroll_item)
            .field("direction", &self.direction)
            .field("scroll_position", &self.scroll_position)
            .field("paused", &self.paused)
            .field("buttons", &self.buttons)
            .field("active_transition", &self.active_transition)
            .field("pending_timer", &self.pending_timer)
            .field("focus_callbacks", &self.focus_callbacks.len())
            .field("lookahead", &self.lookahead)
            .finish()
    }
}
