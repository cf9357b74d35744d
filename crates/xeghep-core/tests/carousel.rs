// crates/xeghep-core/tests/carousel.rs
// Carousel controller behaviour against an in-memory view and ticker

mod common;

use common::{DESKTOP, ITEM_WIDTH, MOBILE, carousel, carousel_with, started};
use xeghep_core::CarouselConfig;

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_desktop_layout_five_items() {
    let (carousel, _) = started(5, DESKTOP);
    let layout = carousel.layout();
    assert_eq!(layout.items_per_view, 2);
    assert_eq!(layout.max_index, 3);
    assert_eq!(layout.total_dots, 4);
    assert_eq!(carousel.view().visible_dots(), 4);
    assert_eq!(carousel.view().active_dots(), vec![0]);
}

#[test]
fn test_mobile_layout_five_items() {
    let (carousel, _) = started(5, MOBILE);
    let layout = carousel.layout();
    assert_eq!(layout.items_per_view, 1);
    assert_eq!(layout.max_index, 4);
    assert_eq!(layout.total_dots, 5);
    assert_eq!(carousel.view().visible_dots(), 5);
}

#[test]
fn test_track_offset_follows_index() {
    let (mut carousel, _) = started(5, DESKTOP);
    assert_eq!(carousel.view().offset, 0.0);

    carousel.next();
    carousel.next();
    assert_eq!(carousel.view().offset, 2.0 * (ITEM_WIDTH + 30.0));
}

#[test]
fn test_custom_gap() {
    let config = CarouselConfig {
        gap_px: 10.0,
        ..CarouselConfig::default()
    };
    let (mut carousel, _) = carousel_with(4, config);
    carousel.start(DESKTOP);
    carousel.go_to(1);
    assert_eq!(carousel.view().offset, ITEM_WIDTH + 10.0);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_next_wraps_on_desktop() {
    let (mut carousel, _) = started(5, DESKTOP);
    let mut seen = vec![carousel.current_index()];
    for _ in 0..4 {
        carousel.next();
        seen.push(carousel.current_index());
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 0]);
}

#[test]
fn test_next_returns_to_zero_after_full_cycle() {
    for (items, width) in [(5, DESKTOP), (5, MOBILE), (2, DESKTOP), (1, MOBILE), (7, DESKTOP)] {
        let (mut carousel, _) = started(items, width);
        let cycle = carousel.layout().max_index + 1;
        for _ in 0..cycle {
            carousel.next();
        }
        assert_eq!(carousel.current_index(), 0, "{} items at {}px", items, width);
    }
}

#[test]
fn test_go_to_valid_index() {
    let (mut carousel, _) = started(5, DESKTOP);
    assert!(carousel.go_to(3));
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.view().active_dots(), vec![3]);
}

#[test]
fn test_go_to_out_of_range_is_ignored() {
    let (mut carousel, ticker) = started(5, DESKTOP);
    let starts = ticker.started();

    assert!(!carousel.go_to(10));
    assert_eq!(carousel.current_index(), 0);

    carousel.go_to(2);
    assert!(!carousel.go_to(4));
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(ticker.started(), starts + 1);
}

#[test]
fn test_dot_click_moves_and_resets_timer() {
    let (mut carousel, ticker) = started(5, DESKTOP);
    let starts = ticker.started();

    carousel.dot_clicked(Some(2));
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(ticker.started(), starts + 1);
    assert_eq!(ticker.live(), 1);
}

#[test]
fn test_dot_without_index_still_resets_timer() {
    let (mut carousel, ticker) = started(5, DESKTOP);
    carousel.go_to(1);
    let starts = ticker.started();

    carousel.dot_clicked(None);
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(ticker.started(), starts + 1);

    carousel.dot_clicked(Some(9));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(ticker.started(), starts + 2);
}

// ============================================================================
// Auto-advance timer
// ============================================================================

#[test]
fn test_start_runs_one_timer() {
    let (carousel, ticker) = started(5, DESKTOP);
    assert_eq!(ticker.live(), 1);
    assert_eq!(ticker.last_period(), 4000);
    assert!(carousel.is_auto_advancing());
}

#[test]
fn test_no_timer_before_start() {
    let (mut carousel, ticker) = carousel(5);
    carousel.set_visible(true);
    carousel.hover_leave();
    carousel.resize(DESKTOP);
    assert_eq!(ticker.live(), 0);
}

#[test]
fn test_configured_interval_reaches_ticker() {
    let config = CarouselConfig::from_json(r#"{"interval_ms": 2500}"#).unwrap();
    let (mut carousel, ticker) = carousel_with(3, config);
    carousel.start(DESKTOP);
    assert_eq!(ticker.last_period(), 2500);
}

#[test]
fn test_hover_pauses_and_resumes() {
    let (mut carousel, ticker) = started(5, DESKTOP);

    carousel.hover_enter();
    assert_eq!(ticker.live(), 0);
    assert!(carousel.is_hovering());

    carousel.hover_leave();
    assert_eq!(ticker.live(), 1);
}

#[test]
fn test_tick_while_hovering_is_noop() {
    let (mut carousel, _) = started(5, DESKTOP);
    carousel.go_to(2);

    carousel.hover_enter();
    carousel.tick();
    assert_eq!(carousel.current_index(), 2);

    carousel.hover_leave();
    carousel.tick();
    assert_eq!(carousel.current_index(), 3);
}

#[test]
fn test_go_to_while_hovering_keeps_timer_stopped() {
    let (mut carousel, ticker) = started(5, DESKTOP);
    carousel.hover_enter();

    assert!(carousel.go_to(1));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(ticker.live(), 0);
}

#[test]
fn test_hidden_page_stops_timer() {
    let (mut carousel, ticker) = started(5, DESKTOP);

    carousel.set_visible(false);
    assert_eq!(ticker.live(), 0);

    carousel.set_visible(true);
    assert_eq!(ticker.live(), 1);
}

#[test]
fn test_visible_again_while_hovering_stays_paused() {
    let (mut carousel, ticker) = started(5, DESKTOP);
    carousel.hover_enter();
    carousel.set_visible(false);
    carousel.set_visible(true);
    assert_eq!(ticker.live(), 0);

    carousel.hover_leave();
    assert_eq!(ticker.live(), 1);
}

#[test]
fn test_start_while_hidden_waits_for_visibility() {
    let (mut carousel, ticker) = carousel(5);
    carousel.set_visible(false);
    carousel.start(DESKTOP);
    assert_eq!(ticker.live(), 0);
    assert!(!carousel.is_auto_advancing());

    carousel.set_visible(true);
    assert_eq!(ticker.live(), 1);
}

#[test]
fn test_repeated_visible_keeps_running_timer() {
    let (mut carousel, ticker) = started(5, DESKTOP);
    let starts = ticker.started();

    carousel.set_visible(true);
    carousel.set_visible(true);
    assert_eq!(ticker.started(), starts);
    assert_eq!(ticker.live(), 1);

    carousel.set_visible(false);
    carousel.set_visible(false);
    assert_eq!(ticker.live(), 0);
}

#[test]
fn test_hover_leave_while_hidden_stays_paused() {
    let (mut carousel, ticker) = started(5, DESKTOP);
    carousel.set_visible(false);
    carousel.hover_enter();
    carousel.hover_leave();
    assert_eq!(ticker.live(), 0);
}

#[test]
fn test_repeated_restarts_never_stack_timers() {
    let (mut carousel, ticker) = started(5, DESKTOP);
    for i in 0..10 {
        carousel.resize(if i % 2 == 0 { MOBILE } else { DESKTOP });
        carousel.dot_clicked(Some(1));
        carousel.set_visible(true);
        assert_eq!(ticker.live(), 1);
    }
}

#[test]
fn test_empty_carousel_never_activates() {
    let (mut carousel, ticker) = carousel(0);
    carousel.start(DESKTOP);
    carousel.next();
    assert_eq!(ticker.live(), 0);
    assert_eq!(carousel.current_index(), 0);
    assert!(!carousel.go_to(1));
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_growing_viewport_clamps_index() {
    let (mut carousel, _) = started(5, MOBILE);
    carousel.go_to(4);

    carousel.resize(DESKTOP);
    assert_eq!(carousel.items_per_view(), 2);
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.view().active_dots(), vec![3]);
    assert_eq!(carousel.view().visible_dots(), 4);
    assert_eq!(carousel.view().offset, 3.0 * (ITEM_WIDTH + 30.0));
}

#[test]
fn test_shrinking_viewport_keeps_index() {
    let (mut carousel, _) = started(5, DESKTOP);
    carousel.go_to(3);

    carousel.resize(MOBILE);
    assert_eq!(carousel.items_per_view(), 1);
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.view().visible_dots(), 5);
}

#[test]
fn test_recompute_layout_is_idempotent() {
    let (mut carousel, ticker) = started(5, DESKTOP);
    carousel.go_to(2);
    let starts = ticker.started();
    let before = carousel.layout();

    carousel.recompute_layout(DESKTOP);
    carousel.recompute_layout(DESKTOP);
    assert_eq!(carousel.layout(), before);
    assert_eq!(ticker.started(), starts);
}

#[test]
fn test_resize_restarts_timer() {
    let (mut carousel, ticker) = started(5, DESKTOP);
    let starts = ticker.started();
    carousel.resize(MOBILE);
    assert_eq!(ticker.started(), starts + 1);
    assert_eq!(ticker.live(), 1);
}

// ============================================================================
// Invariants over mixed event sequences
// ============================================================================

#[test]
fn test_invariants_hold_for_event_sequences() {
    let widths = [320.0, 768.0, 769.0, 1440.0];
    let mut seed: u64 = 0x2545_f491;

    for items in 0..=7 {
        let (mut carousel, ticker) = carousel(items);
        carousel.start(DESKTOP);

        for _ in 0..200 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let roll = (seed >> 33) as usize;
            match roll % 8 {
                0 | 1 => carousel.next(),
                2 => {
                    carousel.go_to(roll % 10);
                }
                3 => carousel.dot_clicked(Some(roll % 6)),
                4 => carousel.resize(widths[roll % widths.len()]),
                5 => carousel.hover_enter(),
                6 => carousel.hover_leave(),
                _ => carousel.set_visible(roll % 3 != 0),
            }

            let layout = carousel.layout();
            let expected_dots = (items + 1).saturating_sub(layout.items_per_view);
            assert!(layout.current_index <= layout.max_index);
            assert_eq!(layout.max_index, items.saturating_sub(layout.items_per_view));

            if items > 0 {
                assert_eq!(carousel.view().visible_dots(), expected_dots);
                let active = carousel.view().active_dots();
                if expected_dots > 0 {
                    assert_eq!(active, vec![layout.current_index]);
                } else {
                    assert!(active.is_empty());
                }
                assert_eq!(ticker.live(), usize::from(carousel.should_run()));
            } else {
                assert_eq!(ticker.live(), 0);
            }
        }
    }
}
