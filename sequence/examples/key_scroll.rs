// Example: keyboard cursor vs focus in the two per-item key scroll modes.
use sequence::{
    Direction, KeyScrollType, NavigationTrigger, Sequence, SequenceOptions, StripLayout,
};

fn run(key_scroll_type: KeyScrollType) -> Result<(), sequence::ConfigError> {
    let layout = StripLayout::horizontal(200, [100, 100, 100, 100, 100, 100]);
    let options = SequenceOptions::new()
        .without_auto_scroll()
        .with_smooth_scroll(None)
        .with_key_scroll(key_scroll_type, false);
    let mut s = Sequence::new(options, &layout)?;

    println!("{key_scroll_type:?}");
    for _ in 0..6 {
        if let Some(nav) = s.navigate(NavigationTrigger::keyboard(Direction::Next)) {
            println!(
                "  offset={} cursor={:?} focused={:?}",
                nav.offset,
                s.key_scroll_item(),
                s.current_item()
            );
        }
    }
    Ok(())
}

fn main() -> Result<(), sequence::ConfigError> {
    run(KeyScrollType::PerItem)?;
    run(KeyScrollType::PerItemAndFocus)
}
