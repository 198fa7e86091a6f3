use sequence::{Granularity, SequenceOptions, StripLayout};
use sequence_adapter::Controller;

fn main() -> Result<(), sequence::ConfigError> {
    // Example: a controller driving tweened autoscroll without holding any UI objects.
    //
    // An adapter would:
    // - forward button/key/click/pointer events
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned offset to the real holder
    let options = SequenceOptions::new()
        .with_auto_scroll(Granularity::PerItem, 400)
        .with_smooth_scroll(Some(240));
    let layout = StripLayout::horizontal(200, [100, 100, 100, 100]);
    let mut c = Controller::new(options, &layout, 0)?;

    let mut now_ms = 0u64;
    while now_ms < 3_000 {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            if !c.is_animating() {
                println!(
                    "t={now_ms} settled at off={off} item={:?} next_step_at={:?}",
                    c.sequence().current_item(),
                    c.timer_deadline()
                );
            }
        }
    }
    Ok(())
}
