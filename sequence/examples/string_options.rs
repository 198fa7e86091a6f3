// Example: building options from string attributes and snapshotting state.
use sequence::{Direction, NavigationTrigger, Sequence, SequenceOptions, StripLayout};

fn main() {
    let attrs = [
        ("pagingType", "per-page"),
        ("pagingLoop", "false"),
        ("autoScroll", "false"),
        ("smoothScroll", "false"),
    ];
    let options = match SequenceOptions::from_pairs(attrs) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("bad options: {err}");
            return;
        }
    };

    let layout = StripLayout::horizontal(250, [120, 80, 150, 90, 110, 60]).with_margin(10);
    let mut s = match Sequence::new(options, &layout) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("bad layout: {err}");
            return;
        }
    };

    while let Some(nav) = s.navigate(NavigationTrigger::paging(Direction::Next)) {
        println!("page -> item={} offset={} buttons={:?}", nav.index, nav.offset, s.buttons());
        if !s.buttons().next {
            break;
        }
    }
    println!("snapshot={:?}", s.snapshot());

    if let Err(err) = SequenceOptions::from_pairs([("keyScrollType", "per-row")]) {
        println!("rejected: {err}");
    }
}
