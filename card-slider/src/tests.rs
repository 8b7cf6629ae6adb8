use crate::*;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn gen_range_f64(&mut self, start: f64, end: f64) -> f64 {
        start + (end - start) * self.gen_unit()
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    let diff = a - b;
    let diff = if diff < 0.0 { -diff } else { diff };
    diff <= 1e-9
}

fn cats(list: &[&str]) -> Vec<Option<String>> {
    list.iter()
        .map(|c| if c.is_empty() { None } else { Some(c.to_string()) })
        .collect()
}

#[test]
fn drag_scroll_moves_against_pointer_with_sensitivity() {
    let mut d = DragScroll::default();
    assert!(!d.is_dragging());
    assert_eq!(d.drag_to(10.0), None);

    d.begin(100.0, 50.0);
    assert!(d.is_dragging());

    let off = d.drag_to(80.0).unwrap();
    assert!(approx_eq(off, 50.0 + 20.0 * 1.1));

    let off = d.drag_to(200.0).unwrap();
    assert!(approx_eq(off, 50.0 - 100.0 * 1.1));

    assert_eq!(d.drag_to(100.0), Some(50.0));
}

#[test]
fn drag_scroll_any_end_condition_clears_dragging() {
    // pointer-up, pointer-leave, touch-end and window-blur all funnel into `end`.
    for ends in 1..=4 {
        let mut d = DragScroll::new(1.0);
        d.begin(0.0, 0.0);
        for _ in 0..ends {
            d.end();
        }
        assert!(!d.is_dragging());
        assert_eq!(d.drag_to(10.0), None);
    }

    let mut d = DragScroll::default();
    assert!(!d.end(), "ending an idle drag reports nothing");
    d.begin(0.0, 0.0);
    assert!(d.end());
}

#[test]
fn drag_scroll_mouse_move_without_buttons_ends_drag() {
    let mut d = DragScroll::new(1.0);
    assert_eq!(d.pointer_moved(5.0, true), None);

    d.begin(10.0, 100.0);
    assert_eq!(d.pointer_moved(20.0, true), Some(90.0));
    assert_eq!(d.pointer_moved(30.0, false), None);
    assert!(!d.is_dragging());
    assert_eq!(d.pointer_moved(40.0, true), None);
}

#[test]
fn frame_gate_coalesces_until_completed() {
    let mut g = FrameGate::new();
    assert!(g.request());
    assert!(!g.request());
    assert!(!g.request());
    assert!(g.is_pending());

    assert!(g.complete());
    assert!(!g.complete());
    assert!(g.request());

    g.cancel();
    assert!(!g.is_pending());
    assert!(g.request());
}

#[test]
fn closest_card_wins_and_ties_keep_document_order() {
    assert_eq!(closest_to_center([10.0, 50.0, 90.0], 52.0), Some(1));
    assert_eq!(closest_to_center([10.0, 30.0, 50.0], 20.0), Some(0));
    assert_eq!(closest_to_center([f64::NAN, 40.0], 0.0), Some(1));
    assert_eq!(closest_to_center(core::iter::empty::<f64>(), 0.0), None);
}

#[test]
fn center_target_aligns_card_center_with_viewport_center() {
    let viewport = Span::new(100.0, 400.0);
    let card = Span::new(700.0, 200.0);
    let target = center_scroll_target(card, viewport, 250.0);
    // card center 800, viewport center 300: scroll right by 500.
    assert_eq!(target, 750.0);

    let card = Span::new(150.0, 100.0);
    assert_eq!(center_scroll_target(card, viewport, 250.0), 150.0);
}

#[test]
fn chip_set_keeps_at_most_one_active() {
    let mut chips = ChipSet::new(cats(&["web", "brand", "web", ""]));
    assert_eq!(chips.active(), None);

    assert!(chips.activate_category("web"));
    assert_eq!(chips.active(), Some(0));
    assert!(!chips.activate_category("web"));

    assert!(chips.activate_chip(2));
    let active: Vec<usize> = (0..chips.len()).filter(|&i| chips.is_active(i)).collect();
    assert_eq!(active, [2]);

    assert!(!chips.activate_chip(99));
    assert_eq!(chips.active(), Some(2));

    assert!(chips.activate_category("print"));
    assert_eq!(chips.active(), None);
    assert!(!chips.clear());
}

#[test]
fn chip_click_centers_first_matching_card() {
    let mut nav = CategoryNav::new(
        cats(&["web", "brand", "brand", "web"]),
        cats(&["web", "brand"]),
    );
    assert_eq!(nav.chip_clicked(1), Some(1));
    assert_eq!(nav.chips().active(), Some(1));

    assert_eq!(nav.chip_clicked(0), Some(0));
    assert_eq!(nav.chips().active(), Some(0));
}

#[test]
fn chip_click_without_matching_card_changes_nothing() {
    let mut nav = CategoryNav::new(cats(&["web", "brand"]), cats(&["web", "print", ""]));
    assert_eq!(nav.chip_clicked(0), Some(0));
    assert_eq!(nav.chips().active(), Some(0));

    assert_eq!(nav.chip_clicked(1), None);
    assert_eq!(nav.chips().active(), Some(0));

    assert_eq!(nav.chip_clicked(2), None);
    assert_eq!(nav.chip_clicked(7), None);
    assert_eq!(nav.chips().active(), Some(0));
}

#[test]
fn active_detection_follows_the_centered_card() {
    let mut nav = CategoryNav::new(cats(&["web", "brand", "print"]), cats(&["print", "brand", "web"]));

    assert!(nav.on_scroll());
    assert!(!nav.on_scroll(), "scroll events coalesce into one frame");
    assert!(nav.on_frame([10.0, 50.0, 90.0], 52.0));
    assert_eq!(nav.chips().active(), Some(1));

    assert!(nav.on_scroll());
    assert!(!nav.on_frame([10.0, 50.0, 90.0], 48.0));
    assert!(nav.on_frame([10.0, 50.0, 90.0], 85.0));
    assert_eq!(nav.chips().active(), Some(0));
}

#[test]
fn active_detection_ignores_unlabelled_cards() {
    let mut nav = CategoryNav::new(cats(&["web", ""]), cats(&["web"]));
    nav.on_scroll();
    assert!(nav.on_frame([0.0, 100.0], 0.0));
    nav.on_scroll();
    assert!(!nav.on_frame([0.0, 100.0], 100.0));
    assert_eq!(nav.chips().active(), Some(0));
}

#[test]
fn category_nav_without_chips_is_inert() {
    let mut nav = CategoryNav::new(cats(&["web", "brand"]), Vec::new());
    assert!(!nav.is_enabled());
    assert!(!nav.on_scroll());
    assert!(!nav.on_frame([0.0, 10.0], 0.0));
    assert_eq!(nav.chip_clicked(0), None);
    assert_eq!(nav.first_card_in("brand"), Some(1));
}

#[test]
fn scroll_driven_handle_is_exact_for_exact_fractions() {
    let max_offset = 240.0;
    for k in 0..=16u32 {
        let p = k as f64 / 16.0;
        let metrics = ScrollMetrics::new(100.0 * k as f64, 2000.0, 400.0);
        let mut s = Scrubber::default();
        let t = s.sync_to_scroll(metrics, max_offset);
        assert_eq!(t.offset, p * max_offset);
        assert_eq!(t.rotation_deg, p * 360.0);
        assert_eq!(s.handle_offset(), t.offset);
    }
}

#[test]
fn scroll_driven_handle_degenerates_without_overflow() {
    let mut s = Scrubber::default();
    for offset in [0.0, 50.0, 500.0] {
        let t = s.sync_to_scroll(ScrollMetrics::new(offset, 400.0, 400.0), 200.0);
        assert_eq!(t, HandleTransform::ZERO);
        let t = s.sync_to_scroll(ScrollMetrics::new(offset, 300.0, 400.0), 200.0);
        assert_eq!(t, HandleTransform::ZERO);
    }

    // No free travel on the track.
    let t = s.sync_to_scroll(ScrollMetrics::new(300.0, 1000.0, 400.0), 0.0);
    assert_eq!(t, HandleTransform::ZERO);
    let t = s.sync_to_scroll(ScrollMetrics::new(300.0, 1000.0, 400.0), -8.0);
    assert_eq!(t, HandleTransform::ZERO);
    assert_eq!(s.handle_offset(), 0.0);
}

#[test]
fn scroll_fraction_round_trips_through_handle() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..500 {
        let client = rng.gen_range_f64(100.0, 1200.0);
        let scroll_width = client + rng.gen_range_f64(1.0, 8000.0);
        let max_offset = rng.gen_range_f64(1.0, 600.0);
        let p = rng.gen_unit();
        let metrics = ScrollMetrics::new(p * (scroll_width - client), scroll_width, client);

        let mut s = Scrubber::default();
        let t = s.sync_to_scroll(metrics, max_offset);
        assert!(approx_eq(t.progress(max_offset), p), "p={p}");
        assert!(approx_eq(t.rotation_deg / 360.0, p));
    }
}

#[test]
fn handle_drag_clamps_and_drives_scroll() {
    let metrics = ScrollMetrics::new(0.0, 1400.0, 400.0);
    let mut s = Scrubber::default();
    s.sync_to_scroll(metrics, 200.0);
    assert_eq!(s.drag_to(10.0, metrics, 200.0), None);

    s.begin_drag(30.0);
    assert_eq!(s.mode(), ScrubberMode::DragDriven);

    let u = s.drag_to(80.0, metrics, 200.0).unwrap();
    assert_eq!(u.transform.offset, 50.0);
    assert_eq!(u.transform.rotation_deg, 90.0);
    assert_eq!(u.scroll_offset, 250.0);

    let u = s.drag_to(1000.0, metrics, 200.0).unwrap();
    assert_eq!(u.transform.offset, 200.0);
    assert_eq!(u.scroll_offset, 1000.0);
    assert_eq!(u.transform.rotation_deg, 360.0);

    let u = s.drag_to(-500.0, metrics, 200.0).unwrap();
    assert_eq!(u.transform, HandleTransform::ZERO);
    assert_eq!(u.scroll_offset, 0.0);

    let u = s.drag_to(0.0, metrics, 0.0).unwrap();
    assert_eq!(u.transform, HandleTransform::ZERO);
    assert_eq!(u.scroll_offset, 0.0);
}

#[test]
fn handle_drag_resumes_from_current_offset() {
    let metrics = ScrollMetrics::new(500.0, 1400.0, 400.0);
    let mut s = Scrubber::default();
    s.sync_to_scroll(metrics, 200.0);
    assert_eq!(s.handle_offset(), 100.0);

    s.begin_drag(0.0);
    let u = s.drag_to(20.0, metrics, 200.0).unwrap();
    assert_eq!(u.transform.offset, 120.0);
    assert_eq!(u.scroll_offset, 600.0);
    assert_eq!(s.transform(200.0), u.transform);
}

#[test]
fn drag_takes_priority_over_scroll_events() {
    let metrics = ScrollMetrics::new(0.0, 1400.0, 400.0);
    let mut s = Scrubber::default();

    s.begin_drag(0.0);
    let u = s.drag_to(100.0, metrics, 200.0).unwrap();
    let scrolled = ScrollMetrics::new(u.scroll_offset, 1400.0, 400.0);

    // The scroll caused by the drag must not feed back into the handle.
    assert!(!s.on_scroll());
    assert_eq!(s.on_resize(scrolled, 200.0), None);
    assert_eq!(s.handle_offset(), 100.0);

    assert!(s.end_drag());
    assert!(!s.end_drag());
    assert_eq!(s.mode(), ScrubberMode::ScrollDriven);
    // Until a scroll event fires, the handle keeps its drag position.
    assert_eq!(s.handle_offset(), 100.0);

    assert!(s.on_scroll());
    assert!(!s.on_scroll());
    let t = s.on_frame(scrolled, 200.0).unwrap();
    assert_eq!(t.offset, 100.0);
    assert_eq!(t.rotation_deg, 180.0);
}

#[test]
fn frame_scheduled_before_drag_is_skipped() {
    let metrics = ScrollMetrics::new(1000.0, 1400.0, 400.0);
    let mut s = Scrubber::default();
    assert!(s.on_scroll());
    s.begin_drag(0.0);
    assert_eq!(s.on_frame(metrics, 200.0), None);
    assert_eq!(s.handle_offset(), 0.0);

    s.end_drag();
    assert!(s.on_scroll());
}

#[test]
fn resize_resyncs_when_idle() {
    let mut s = Scrubber::default();
    s.sync_to_scroll(ScrollMetrics::new(500.0, 1400.0, 400.0), 200.0);
    let t = s
        .on_resize(ScrollMetrics::new(500.0, 1400.0, 400.0), 100.0)
        .unwrap();
    assert_eq!(t.offset, 50.0);
    assert_eq!(t.rotation_deg, 180.0);
}

#[test]
fn scroll_progress_is_clamped() {
    let m = ScrollMetrics::new(-20.0, 1000.0, 500.0);
    assert_eq!(scroll_progress(m, 10.0), 0.0);
    let m = ScrollMetrics::new(900.0, 1000.0, 500.0);
    assert_eq!(scroll_progress(m, 10.0), 1.0);
    assert_eq!(scroll_progress(m, 0.0), 0.0);
}

#[test]
fn handle_transform_css() {
    let t = HandleTransform::from_progress(0.25, 200.0, 360.0);
    assert_eq!(t.to_css(), "translateX(50px) rotate(90deg)");
    assert_eq!(HandleTransform::ZERO.to_css(), "translateX(0px) rotate(0deg)");
}

#[test]
fn click_threshold_boundary_is_exclusive() {
    let origin = Point::new(0.0, 0.0);
    assert!(is_click(origin, Point::new(3.0, 4.0), 6.0));
    assert!(is_click(origin, Point::new(5.99, 0.0), 6.0));
    assert!(!is_click(origin, Point::new(6.0, 0.0), 6.0));
    assert!(!is_click(origin, Point::new(0.0, -6.0), 6.0));
    assert!(!is_click(origin, Point::new(30.0, 40.0), 6.0));
}

#[test]
fn click_tracker_requires_a_press() {
    let mut t = ClickTracker::default();
    assert_eq!(t.release(Point::new(1.0, 1.0)), Release::Ignored);

    t.press(Point::new(10.0, 10.0));
    assert!(t.is_pressed());
    assert_eq!(t.release(Point::new(12.0, 11.0)), Release::Click);
    assert!(!t.is_pressed());
    assert_eq!(t.release(Point::new(12.0, 11.0)), Release::Ignored);

    t.press(Point::new(10.0, 10.0));
    assert_eq!(t.release(Point::new(16.0, 10.0)), Release::Drag);
}

#[test]
fn click_tracker_random_pairs_match_euclidean_rule() {
    let mut rng = Lcg::new(42);
    for _ in 0..1000 {
        let down = Point::new(rng.gen_range_f64(-50.0, 50.0), rng.gen_range_f64(-50.0, 50.0));
        let up = Point::new(
            down.x + rng.gen_range_f64(-10.0, 10.0),
            down.y + rng.gen_range_f64(-10.0, 10.0),
        );
        let d = down.distance_squared(up).sqrt();
        let mut t = ClickTracker::new(6.0);
        t.press(down);
        let expected = if d < 6.0 { Release::Click } else { Release::Drag };
        assert_eq!(t.release(up), expected);
    }
}

#[test]
fn options_build_configured_behaviors() {
    let opts = SliderOptions::default();
    assert_eq!(opts.drag_sensitivity, 1.1);
    assert_eq!(opts.click_threshold, 6.0);
    assert_eq!(opts.full_turn_deg, 360.0);

    let opts = SliderOptions::new()
        .with_drag_sensitivity(2.0)
        .with_click_threshold(10.0)
        .with_full_turn_deg(180.0);
    assert_eq!(opts.drag_scroll().sensitivity(), 2.0);
    assert_eq!(opts.click_tracker().threshold(), 10.0);

    let mut s = opts.scrubber();
    let t = s.sync_to_scroll(ScrollMetrics::new(1000.0, 1400.0, 400.0), 100.0);
    assert_eq!(t.rotation_deg, 180.0);
}

#[test]
fn click_tracker_cancel_drops_the_press() {
    let mut t = ClickTracker::default();
    t.press(Point::new(0.0, 0.0));
    t.cancel();
    assert_eq!(t.release(Point::new(0.0, 0.0)), Release::Ignored);
}
