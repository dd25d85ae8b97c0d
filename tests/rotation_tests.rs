// SPDX-License-Identifier: MPL-2.0

//! Integration tests for the rotation controller driven by a manual clock

use carousel::app::indicators::indicator_states;
use carousel::app::slides::{SlidePresenter, Visibility};
use carousel::partners::Partner;
use carousel::rotation::{Clock, ManualClock, TimerQueue};
use carousel::{RotationController, RotationInterval, TickPolicy};

const PERIOD_MS: u64 = 5000;

fn interval() -> RotationInterval {
    RotationInterval::from_millis(PERIOD_MS as i64)
}

fn mount(len: usize, policy: TickPolicy, queue: &TimerQueue, clock: &ManualClock) -> RotationController {
    RotationController::mount(len, interval(), policy, queue, clock.now())
}

fn partners(count: usize) -> Vec<Partner> {
    (0..count)
        .map(|i| Partner {
            name: format!("Partner {}", i),
            ..Default::default()
        })
        .collect()
}

#[test]
fn test_ticks_are_cyclic() {
    for len in 1..=5 {
        let queue = TimerQueue::new();
        let clock = ManualClock::new();
        let mut rotation = mount(len, TickPolicy::default(), &queue, &clock);

        for k in 1..=12u64 {
            clock.set_millis(k * PERIOD_MS);
            assert_eq!(rotation.poll(clock.now()), 1);
            assert_eq!(
                rotation.current_index(),
                Some(k as usize % len),
                "len {} after {} ticks",
                len,
                k
            );
        }
    }
}

#[test]
fn test_late_poll_catches_up() {
    let queue = TimerQueue::new();
    let clock = ManualClock::new();
    let mut rotation = mount(4, TickPolicy::default(), &queue, &clock);

    // Seven periods elapse before the loop wakes up
    clock.set_millis(7 * PERIOD_MS + 10);
    assert_eq!(rotation.poll(clock.now()), 7);
    assert_eq!(rotation.current_index(), Some(3));

    // Next tick stays on the original schedule
    clock.set_millis(8 * PERIOD_MS - 1);
    assert_eq!(rotation.poll(clock.now()), 0);
    clock.set_millis(8 * PERIOD_MS);
    assert_eq!(rotation.poll(clock.now()), 1);
    assert_eq!(rotation.current_index(), Some(0));
}

#[test]
fn test_empty_and_single_item_never_move() {
    let queue = TimerQueue::new();
    let clock = ManualClock::new();
    let mut empty = mount(0, TickPolicy::default(), &queue, &clock);
    let mut single = mount(1, TickPolicy::default(), &queue, &clock);

    // Only the single-item controller holds a timer
    assert_eq!(queue.active_count(), 1);

    for k in 1..=5u64 {
        clock.set_millis(k * PERIOD_MS);
        assert_eq!(empty.poll(clock.now()), 0);
        single.poll(clock.now());
        assert_eq!(empty.current_index(), None);
        assert_eq!(single.current_index(), Some(0));
    }
}

#[test]
fn test_manual_selection_is_immediate() {
    let queue = TimerQueue::new();
    let clock = ManualClock::new();
    let mut rotation = mount(5, TickPolicy::default(), &queue, &clock);
    let deadline = rotation.next_deadline();

    for (at, index) in [(1, 3), (2499, 1), (4999, 4)] {
        clock.set_millis(at);
        assert!(rotation.select(index));
        assert_eq!(rotation.current_index(), Some(index));
    }

    // Out of range leaves everything as it was
    assert!(!rotation.select(5));
    assert_eq!(rotation.current_index(), Some(4));
    assert_eq!(rotation.next_deadline(), deadline);
}

#[test]
fn test_exactly_one_active_frame() {
    let queue = TimerQueue::new();
    let clock = ManualClock::new();
    let presenter = SlidePresenter::new(partners(4), Vec::new());
    let mut rotation = mount(presenter.len(), TickPolicy::default(), &queue, &clock);

    let check = |rotation: &RotationController| {
        let current = rotation.current_index();
        let active: Vec<usize> = presenter
            .layers(current)
            .iter()
            .filter(|layer| layer.visibility == Visibility::Active)
            .map(|layer| layer.index)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(Some(active[0]), current);

        let dots = indicator_states(presenter.len(), current);
        assert_eq!(dots.iter().filter(|d| d.is_active()).count(), 1);
        assert!(dots[active[0]].is_active());
    };

    check(&rotation);
    for k in 1..=6u64 {
        clock.set_millis(k * PERIOD_MS);
        rotation.poll(clock.now());
        check(&rotation);
        rotation.select((k as usize * 3) % 4);
        check(&rotation);
    }
}

#[test]
fn test_no_advance_after_unmount() {
    let queue = TimerQueue::new();
    let clock = ManualClock::new();
    let rotation = mount(3, TickPolicy::default(), &queue, &clock);
    assert_eq!(queue.active_count(), 1);

    rotation.unmount();
    assert_eq!(queue.active_count(), 0);
    assert_eq!(queue.next_deadline(), None);

    clock.set_millis(10 * PERIOD_MS);
    assert_eq!(queue.next_deadline(), None);
}

#[test]
fn test_drop_cancels_timer() {
    let queue = TimerQueue::new();
    let clock = ManualClock::new();
    {
        let _rotation = mount(3, TickPolicy::default(), &queue, &clock);
        assert_eq!(queue.active_count(), 1);
    }
    assert_eq!(queue.active_count(), 0);
}

#[test]
fn test_reconfigure_keeps_index_in_range() {
    let queue = TimerQueue::new();
    let clock = ManualClock::new();
    let mut rotation = mount(6, TickPolicy::default(), &queue, &clock);
    rotation.select(5);

    for len in [4, 2, 7, 1, 0, 3] {
        let old_timer = rotation.timer_id();
        clock.advance(std::time::Duration::from_millis(1200));
        assert!(rotation.reconfigure(len, interval(), clock.now()));

        // Never more than one live timer, and never the old one
        assert!(queue.active_count() <= 1);
        if let Some(old) = old_timer {
            assert!(!queue.is_active(old));
        }
        match rotation.current_index() {
            Some(index) => assert!(index < len),
            None => assert_eq!(len, 0),
        }
    }
    assert_eq!(rotation.current_index(), Some(0));
}

#[test]
fn test_reconfigure_interval_rearms_from_now() {
    let queue = TimerQueue::new();
    let clock = ManualClock::new();
    let mut rotation = mount(3, TickPolicy::default(), &queue, &clock);

    clock.set_millis(4000);
    assert!(rotation.reconfigure(3, RotationInterval::from_millis(2000), clock.now()));

    // The advance scheduled for t=5000 was cancelled
    clock.set_millis(5000);
    assert_eq!(rotation.poll(clock.now()), 0);
    assert_eq!(rotation.current_index(), Some(0));

    clock.set_millis(6000);
    assert_eq!(rotation.poll(clock.now()), 1);
    assert_eq!(rotation.current_index(), Some(1));
}

/// Three items at 5s, indicator 2 clicked at t=7000
fn click_scenario(policy: TickPolicy) -> RotationController {
    let queue = TimerQueue::new();
    let clock = ManualClock::new();
    let mut rotation = mount(3, policy, &queue, &clock);
    assert_eq!(rotation.current_index(), Some(0));

    clock.set_millis(5000);
    rotation.poll(clock.now());
    assert_eq!(rotation.current_index(), Some(1));

    clock.set_millis(7000);
    assert!(rotation.select(2));
    assert_eq!(rotation.current_index(), Some(2));

    clock.set_millis(10000);
    assert_eq!(rotation.poll(clock.now()), 1);
    rotation
}

#[test]
fn test_scenario_tick_from_observed_index() {
    let rotation = click_scenario(TickPolicy::FromObserved);
    assert_eq!(rotation.current_index(), Some(0));
}

#[test]
fn test_scenario_tick_from_last_tick() {
    let rotation = click_scenario(TickPolicy::FromLastTick);
    assert_eq!(rotation.current_index(), Some(2));
}

#[test]
fn test_default_policy_follows_manual_selection() {
    assert_eq!(TickPolicy::default(), TickPolicy::FromObserved);
}
