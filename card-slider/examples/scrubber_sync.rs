// Example: an adapter driving the scrubber from scroll events and from a handle drag.
use card_slider::{ScrollMetrics, SliderOptions};

fn main() {
    let opts = SliderOptions::default();
    let mut scrubber = opts.scrubber();

    // 12 cards of 300px in a 900px viewport; the handle can travel 160px.
    let (scroll_width, client_width, max_offset) = (3600.0, 900.0, 160.0);
    let mut scroll = 0.0;

    // Native scroll events: a burst of events produces a single frame of work.
    for _ in 0..5 {
        scroll += 120.0;
        if scrubber.on_scroll() {
            println!("scroll={scroll}: frame scheduled");
        }
    }
    let metrics = ScrollMetrics::new(scroll, scroll_width, client_width);
    if let Some(t) = scrubber.on_frame(metrics, max_offset) {
        println!("frame: handle {}", t.to_css());
    }

    // The user grabs the handle and drags it to the right.
    scrubber.begin_drag(500.0);
    for x in [520.0, 560.0, 640.0, 900.0] {
        let metrics = ScrollMetrics::new(scroll, scroll_width, client_width);
        if let Some(update) = scrubber.drag_to(x, metrics, max_offset) {
            scroll = update.scroll_offset;
            println!(
                "drag x={x}: scroll={:.1} handle {}",
                scroll,
                update.transform.to_css()
            );
        }
        // The scroll the drag caused must not move the handle again.
        assert!(!scrubber.on_scroll());
    }
    scrubber.end_drag();
    println!("released at offset {}", scrubber.handle_offset());
}
