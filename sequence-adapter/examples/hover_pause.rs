use sequence::{Granularity, SequenceOptions, StripLayout};
use sequence_adapter::{ArrowKey, Controller};

fn main() -> Result<(), sequence::ConfigError> {
    // Example: pause-on-hover and arrow keys routed through the controller.
    let options = SequenceOptions::new()
        .with_auto_scroll(Granularity::PerItem, 1_000)
        .with_smooth_scroll(None)
        .with_pause_on_hover(true);
    let layout = StripLayout::horizontal(100, [100; 6]);
    let mut c = Controller::new(options, &layout, 0)?;

    c.tick(1_000);
    println!("t=1000 item={:?}", c.sequence().current_item());

    c.on_pointer_enter();
    c.tick(5_000);
    println!("t=5000 (hovering) item={:?} paused={}", c.sequence().current_item(), c.sequence().is_paused());

    c.on_pointer_leave(5_000);
    c.on_key(ArrowKey::Right.key_code(), 5_100);
    println!("t=5100 after right arrow item={:?}", c.sequence().current_item());

    c.tick(6_100);
    println!("t=6100 item={:?} next_step_at={:?}", c.sequence().current_item(), c.timer_deadline());
    Ok(())
}
