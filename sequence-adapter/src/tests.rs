use crate::*;

use sequence::{
    Direction, FinishAction, Granularity, NavigationTrigger, Orientation, SequenceOptions,
    StripLayout, TransitionId,
};
use std::vec::Vec;

fn strip(count: usize, width: u32, container: u32) -> StripLayout {
    StripLayout::horizontal(container, core::iter::repeat_n(width, count))
}

#[test]
fn tween_reaches_target_in_both_directions() {
    for (from, to) in [(0u64, 1_000u64), (900, 100)] {
        let tween = Tween::new(from, to, 100, 400, Easing::SmoothStep);
        assert_eq!(tween.sample(0), from);
        assert_eq!(tween.sample(100), from);

        let mut last = from;
        for now_ms in [150u64, 200, 300, 400, 499] {
            let v = tween.sample(now_ms);
            if to > from {
                assert!(v >= last && v <= to);
            } else {
                assert!(v <= last && v >= to);
            }
            last = v;
            assert!(!tween.is_done(now_ms));
        }
        assert!(tween.is_done(500));
        assert_eq!(tween.sample(500), to);
        assert_eq!(tween.sample(10_000), to);
    }
}

#[test]
fn zero_duration_tween_is_done_immediately() {
    let tween = Tween::new(10, 90, 50, 0, Easing::Linear);
    assert!(tween.is_done(50));
    assert_eq!(tween.sample(50), 90);
    assert_eq!(tween.progress(0), 1.0);
}

#[test]
fn tween_retarget_continues_from_the_current_sample() {
    let mut tween = Tween::new(0, 100, 0, 100, Easing::Linear);
    tween.retarget(50, 0, 100);
    assert_eq!(tween.from, 50);
    assert_eq!(tween.to, 0);
    assert_eq!(tween.start_ms, 50);
    assert_eq!(tween.sample(150), 0);
}

#[test]
fn easings_keep_their_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseOutQuad,
    ] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert_eq!(easing.sample(-3.0), 0.0);
        assert_eq!(easing.sample(7.0), 1.0);
        let mid = easing.sample(0.5);
        assert!(mid > 0.0 && mid < 1.0, "{easing:?} mid={mid}");
    }
}

#[test]
fn arrow_keys_follow_the_sequence_axis() {
    assert_eq!(
        key_direction(Orientation::Horizontal, 37),
        Some(Direction::Previous)
    );
    assert_eq!(key_direction(Orientation::Horizontal, 39), Some(Direction::Next));
    assert_eq!(key_direction(Orientation::Horizontal, 38), None);
    assert_eq!(key_direction(Orientation::Vertical, 38), Some(Direction::Previous));
    assert_eq!(key_direction(Orientation::Vertical, 40), Some(Direction::Next));
    assert_eq!(key_direction(Orientation::Vertical, 39), None);
    assert_eq!(key_direction(Orientation::Horizontal, 13), None);

    for key in [ArrowKey::Left, ArrowKey::Up, ArrowKey::Right, ArrowKey::Down] {
        assert_eq!(ArrowKey::from_key_code(key.key_code()), Some(key));
    }
}

#[test]
fn controller_autoscroll_animates_after_the_delay() {
    let opts = SequenceOptions::default().with_auto_scroll(Granularity::PerItem, 5_000);
    let mut c = Controller::new(opts, &strip(5, 100, 100), 0).unwrap();
    assert_eq!(c.offset(), 0);
    assert_eq!(c.timer_deadline(), Some(5_000));

    assert_eq!(c.tick(4_999), None);
    assert_eq!(c.sequence().current_item(), Some(0));

    // The timer fires and starts a transition; nothing has moved yet.
    assert_eq!(c.tick(5_000), None);
    assert!(c.is_animating());
    assert_eq!(c.sequence().current_item(), Some(1));
    assert_eq!(c.sequence().scroll_position(), 100);
    assert_eq!(c.timer_deadline(), Some(10_000));

    let mid = c.tick(5_500).unwrap();
    assert!(mid > 0 && mid < 100);
    assert!(c.sequence().active_transition().is_some());

    assert_eq!(c.tick(6_000), Some(100));
    assert!(!c.is_animating());
    assert_eq!(c.sequence().active_transition(), None);
}

#[test]
fn controller_supersedes_a_running_animation() {
    let opts = SequenceOptions::default().without_auto_scroll();
    let mut c = Controller::new(opts, &strip(5, 100, 100), 0).unwrap();

    let first = c.go_to_item(3, true, true, 0).unwrap();
    let halfway = c.tick(500).unwrap();
    assert!(halfway > 0 && halfway < 300);

    let second = c.go_to_item(1, true, true, 500).unwrap();
    assert_ne!(first.transition, second.transition);
    assert_eq!(c.offset(), halfway);

    assert_eq!(c.tick(1_500), Some(100));
    assert!(!c.is_animating());
    assert_eq!(c.sequence().active_transition(), None);
    assert_eq!(c.sequence().current_item(), Some(1));
}

#[test]
fn controller_snaps_without_smooth_scroll() {
    let opts = SequenceOptions::default()
        .without_auto_scroll()
        .with_smooth_scroll(None);
    let mut c = Controller::new(opts, &strip(5, 100, 100), 0).unwrap();
    let nav = c.go_to_item(4, true, true, 10).unwrap();
    assert!(!nav.animate);
    assert_eq!(c.offset(), 400);
    assert!(!c.is_animating());
    assert_eq!(c.tick(20), None);
}

#[test]
fn controller_routes_keys_buttons_and_clicks() {
    let opts = SequenceOptions::default()
        .without_auto_scroll()
        .with_smooth_scroll(None)
        .with_paging(Granularity::PerItem, false)
        .with_click(true, true);
    let mut c = Controller::new(opts, &strip(5, 100, 100), 0).unwrap();

    assert!(c.on_button(Direction::Previous, 0).is_none());
    assert_eq!(c.on_button(Direction::Next, 0).map(|n| n.index), Some(1));
    assert_eq!(c.on_key(39, 0).map(|n| n.index), Some(2));
    assert!(c.on_key(40, 0).is_none());
    assert_eq!(c.on_key(37, 0).map(|n| n.index), Some(1));

    assert!(c.on_click(4, 0));
    assert_eq!(c.sequence().current_item(), Some(4));
    assert_eq!(c.offset(), 400);
    assert!(c.on_button(Direction::Next, 0).is_none());
}

#[test]
fn hover_pauses_and_resumes_autoscroll() {
    let opts = SequenceOptions::default()
        .with_smooth_scroll(None)
        .with_auto_scroll(Granularity::PerItem, 1_000)
        .with_pause_on_hover(true);
    let mut c = Controller::new(opts, &strip(5, 100, 100), 0).unwrap();

    c.on_pointer_enter();
    assert!(c.is_hover_paused());
    assert!(c.sequence().is_paused());
    assert_eq!(c.timer_deadline(), None);
    assert_eq!(c.tick(5_000), None);
    assert_eq!(c.sequence().current_item(), Some(0));

    // Repeated enters do not stack.
    c.on_pointer_enter();
    c.on_pointer_leave(6_000);
    assert!(!c.is_hover_paused());
    assert!(!c.sequence().is_paused());
    assert_eq!(c.timer_deadline(), Some(7_000));

    assert_eq!(c.tick(7_000), Some(100));
    assert_eq!(c.sequence().current_item(), Some(1));
}

#[test]
fn hover_is_ignored_unless_configured() {
    let opts = SequenceOptions::default().with_auto_scroll(Granularity::PerItem, 1_000);
    let mut c = Controller::new(opts, &strip(5, 100, 100), 0).unwrap();
    c.on_pointer_enter();
    assert!(!c.is_hover_paused());
    assert!(!c.sequence().is_paused());
    assert_eq!(c.timer_deadline(), Some(1_000));
}

#[test]
fn controller_rewinds_pages_on_autoscroll() {
    let opts = SequenceOptions::default()
        .with_smooth_scroll(None)
        .with_auto_scroll(Granularity::PerPage, 100)
        .with_finish_action(FinishAction::Rewind);
    let mut c = Controller::new(opts, &strip(10, 100, 300), 0).unwrap();

    let offsets: Vec<u64> = [100u64, 200, 300, 400]
        .into_iter()
        .filter_map(|now_ms| c.tick(now_ms))
        .collect();
    assert_eq!(offsets, [300, 600, 700, 0]);
}

#[test]
fn manual_navigation_is_applied_through_the_controller() {
    let opts = SequenceOptions::default().without_auto_scroll();
    let mut c = Controller::new(opts, &strip(5, 100, 100), 0).unwrap();
    let nav = c
        .sequence_mut()
        .navigate(NavigationTrigger::paging(Direction::Next))
        .unwrap();
    c.apply(nav, 0);
    assert!(c.is_animating());
    assert_eq!(c.tick(1_000), Some(100));
}

#[derive(Debug, Default)]
struct InstantAnimator {
    pending: Option<(u64, TransitionId)>,
}

impl OffsetAnimator for InstantAnimator {
    fn animate(&mut self, _from: u64, to: u64, _duration_ms: u64, _now_ms: u64, id: TransitionId) {
        self.pending = Some((to, id));
    }

    fn cancel(&mut self) -> Option<TransitionId> {
        self.pending.take().map(|(_, id)| id)
    }

    fn step(&mut self, _now_ms: u64) -> Option<AnimationFrame> {
        let (offset, id) = self.pending.take()?;
        Some(AnimationFrame {
            offset,
            finished: Some(id),
        })
    }

    fn is_animating(&self) -> bool {
        self.pending.is_some()
    }
}

#[test]
fn custom_animators_plug_into_the_controller() {
    let opts = SequenceOptions::default().without_auto_scroll();
    let mut c =
        Controller::with_animator(opts, &strip(5, 100, 100), InstantAnimator::default(), 0)
            .unwrap();
    c.go_to_item(2, true, true, 0).unwrap();
    assert!(c.sequence().active_transition().is_some());
    assert_eq!(c.tick(1), Some(200));
    assert_eq!(c.sequence().active_transition(), None);
}

#[test]
fn tween_animator_reports_completion_once() {
    let mut animator = TweenAnimator::new(Easing::Linear);
    let mut c = Controller::new(
        SequenceOptions::default().without_auto_scroll(),
        &strip(3, 100, 100),
        0,
    )
    .unwrap();
    let nav = c.sequence_mut().go_to_item(1, true, true).unwrap();

    animator.animate(0, 100, 10, 0, nav.transition);
    assert_eq!(animator.tween().map(|t| t.to), Some(100));
    assert_eq!(
        animator.step(5),
        Some(AnimationFrame {
            offset: 50,
            finished: None
        })
    );
    assert_eq!(
        animator.step(10),
        Some(AnimationFrame {
            offset: 100,
            finished: Some(nav.transition)
        })
    );
    assert_eq!(animator.step(11), None);
    assert_eq!(animator.cancel(), None);
}
