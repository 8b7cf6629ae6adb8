// Example: chip navigation, active-card detection and card click handling.
use card_slider::{CategoryNav, Point, Release, SliderOptions, Span, center_scroll_target};

fn main() {
    let categories = ["web", "web", "brand", "print", "brand"];
    let mut nav = CategoryNav::new(
        categories.iter().map(|c| Some(c.to_string())),
        ["web", "brand", "print"].iter().map(|c| Some(c.to_string())),
    );

    // Cards are 280px wide with a 20px gap; the viewport shows 600px.
    let card_span = |i: usize, scroll: f64| Span::new(i as f64 * 300.0 - scroll, 280.0);
    let viewport = Span::new(0.0, 600.0);
    let mut scroll = 0.0;

    // Clicking the "print" chip centers the first print card.
    if let Some(card) = nav.chip_clicked(2) {
        scroll = center_scroll_target(card_span(card, scroll), viewport, scroll);
        println!("chip 'print' -> card {card}, scroll to {scroll}");
    }

    // Later, a drag scrolls back; detection picks the card nearest the center.
    scroll -= 320.0;
    if nav.on_scroll() {
        let centers: Vec<f64> = (0..categories.len())
            .map(|i| card_span(i, scroll).center())
            .collect();
        if nav.on_frame(centers, viewport.center()) {
            println!("active chip is now {:?}", nav.chips().active());
        }
    }

    // A press that barely moves is a click; a longer one is a drag.
    let mut tracker = SliderOptions::default().click_tracker();
    tracker.press(Point::new(100.0, 40.0));
    assert_eq!(tracker.release(Point::new(103.0, 42.0)), Release::Click);
    tracker.press(Point::new(100.0, 40.0));
    assert_eq!(tracker.release(Point::new(180.0, 40.0)), Release::Drag);
    println!("click/drag classification ok");
}
