// Example: a per-item autoscrolling carousel that reverses at the ends.
use sequence::{FinishAction, Granularity, Sequence, SequenceOptions, StripLayout};

fn main() -> Result<(), sequence::ConfigError> {
    let layout = StripLayout::horizontal(300, [100, 100, 100, 100, 100]);
    let options = SequenceOptions::new()
        .with_smooth_scroll(None)
        .with_auto_scroll(Granularity::PerItem, 3_000)
        .with_finish_action(FinishAction::Reverse);

    let mut s = Sequence::new(options, &layout)?;
    s.add_focus_callback(|item| println!("  focus -> item {}", item.index));

    println!(
        "holder={} container={} max_scroll={}",
        s.holder_extent(),
        s.container_extent(),
        s.max_scroll()
    );

    // A UI would wait `delay_ms` on its own clock before firing.
    for _ in 0..8 {
        let Some(timer) = s.pending_timer() else {
            break;
        };
        if let Some(nav) = s.fire_autoscroll(timer.id) {
            println!(
                "after {}ms: item={} offset={} direction={:?} buttons={:?}",
                timer.delay_ms,
                nav.index,
                nav.offset,
                s.direction(),
                s.buttons()
            );
        }
    }
    Ok(())
}
