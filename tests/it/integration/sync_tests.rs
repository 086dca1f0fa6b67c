//! Non-pointer position sources: resize resynchronization, external
//! position targets, nudging, and initial-position application.

use crate::helpers::TestEngineBuilder;
use slidewipe::{ContainerRect, Orientation, PointerTarget};

// ============================================================================
// Mount + resync
// ============================================================================

#[test]
fn resync_applies_the_initial_position() {
    let (mut engine, probe) = TestEngineBuilder::new().with_initial(25.0).build();

    engine.resync();

    assert_eq!(engine.position(), 25.0);
    assert_eq!(probe.surface.last_clip(), Some(75.0));
    assert_eq!(probe.notified(), vec![25.0]);
}

#[test]
fn degenerate_geometry_defers_positioning_until_layout_exists() {
    let (mut engine, probe) = TestEngineBuilder::new()
        .with_rect(ContainerRect::unscaled(0.0, 0.0, 0.0, 0.0))
        .build();

    // Nothing downstream of the resolver may run against a zero-size
    // container, but the interaction state machine still advances.
    assert!(engine.handle_pointer_down(75.0, 10.0, PointerTarget::Container));
    assert!(engine.is_dragging());
    assert_eq!(engine.position(), 50.0);
    assert_eq!(probe.notify_count(), 0);
    assert_eq!(probe.surface.write_count(), 0);
    engine.handle_pointer_up();

    // Once the container gains real geometry, a resync applies normally.
    probe
        .surface
        .set_rect(ContainerRect::unscaled(0.0, 0.0, 300.0, 100.0));
    engine.resync();
    assert_eq!(probe.surface.last_clip(), Some(150.0));
    assert_eq!(probe.notified(), vec![50.0]);
}

// ============================================================================
// Resize resynchronization
// ============================================================================

#[test]
fn resize_preserves_the_percentage_not_the_pixel() {
    let (mut engine, probe) = TestEngineBuilder::new()
        .with_rect(ContainerRect::unscaled(0.0, 0.0, 200.0, 100.0))
        .build();
    engine.resync();
    assert_eq!(probe.surface.last_clip(), Some(100.0));

    probe
        .surface
        .set_rect(ContainerRect::unscaled(0.0, 0.0, 400.0, 100.0));
    engine.handle_resize(400.0, 100.0);

    // 50% of the new width, not the old 100px carried over (which would
    // have read as 25%).
    assert_eq!(engine.position(), 50.0);
    assert_eq!(probe.surface.last_clip(), Some(200.0));
}

#[test]
fn resize_reapplies_outputs_even_when_pinned_at_an_extremity() {
    let (mut engine, probe) = TestEngineBuilder::new()
        .with_rect(ContainerRect::unscaled(0.0, 0.0, 200.0, 100.0))
        .with_initial(100.0)
        .build();
    engine.resync();
    assert_eq!(probe.surface.last_clip(), Some(200.0));
    let writes = probe.surface.write_count();

    probe
        .surface
        .set_rect(ContainerRect::unscaled(0.0, 0.0, 400.0, 100.0));
    engine.handle_resize(400.0, 100.0);

    // The percentage is unchanged and sits at an extremity, but the pass
    // must not be suppressed: the new geometry needs fresh pixel outputs.
    assert_eq!(engine.position(), 100.0);
    assert_eq!(probe.surface.write_count(), writes + 1);
    assert_eq!(probe.surface.last_clip(), Some(400.0));
}

// ============================================================================
// External position targets
// ============================================================================

#[test]
fn set_position_translates_a_percentage_through_the_pipeline() {
    let (mut engine, probe) = TestEngineBuilder::new().build();

    engine.set_position(30.0);

    assert_eq!(engine.position(), 30.0);
    assert_eq!(probe.surface.last_clip(), Some(90.0));
    assert_eq!(probe.notified(), vec![30.0]);
}

#[test]
fn set_position_ignores_a_repeated_target() {
    let (mut engine, probe) = TestEngineBuilder::new().build();

    engine.set_position(30.0);
    engine.set_position(30.0);
    assert_eq!(probe.notify_count(), 1);

    // A drag in between does not make the unchanged request new.
    engine.handle_pointer_down(150.0, 10.0, PointerTarget::Container);
    engine.handle_pointer_up();
    assert_eq!(engine.position(), 50.0);

    engine.set_position(30.0);
    assert_eq!(engine.position(), 50.0);

    // A genuinely new target applies.
    engine.set_position(40.0);
    assert_eq!(engine.position(), 40.0);
}

#[test]
fn scenario_b_vertical_padding_clamps_the_outputs_only() {
    // Vertical container of height 200 with 10px bounds padding: a 0%
    // target projects to the padding floor while the percentage stays 0.
    let (mut engine, probe) = TestEngineBuilder::new()
        .with_rect(ContainerRect::unscaled(0.0, 0.0, 300.0, 200.0))
        .with_orientation(Orientation::Vertical)
        .with_padding(10.0)
        .build();

    engine.set_position(0.0);

    assert_eq!(engine.position(), 0.0);
    assert_eq!(probe.surface.last_clip(), Some(10.0));
    assert_eq!(probe.surface.last_offset(), Some(10.0));
    assert_eq!(probe.notified(), vec![0.0]);
}

// ============================================================================
// Nudging
// ============================================================================

#[test]
fn nudge_steps_through_the_normal_pipeline() {
    let (mut engine, probe) = TestEngineBuilder::new().build();

    engine.nudge(30.0);
    assert_eq!(engine.position(), 80.0);
    assert_eq!(probe.surface.last_clip(), Some(240.0));

    engine.nudge(-10.0);
    assert_eq!(engine.position(), 70.0);
    assert_eq!(probe.notified(), vec![80.0, 70.0]);
}

#[test]
fn nudge_clamps_at_the_range_bounds() {
    let (mut engine, probe) = TestEngineBuilder::new().build();

    engine.nudge(75.0);
    assert_eq!(engine.position(), 100.0);

    // Already pinned at 100%: the clamped re-application is redundant and
    // suppressed like any other extremity repeat.
    engine.nudge(10.0);
    assert_eq!(engine.position(), 100.0);
    assert_eq!(probe.notified(), vec![100.0]);

    engine.nudge(-250.0);
    assert_eq!(engine.position(), 0.0);
}

// ============================================================================
// Zoom-scale correction
// ============================================================================

#[test]
fn scaled_containers_resolve_against_layout_pixels() {
    // True width 300 but layout width 150: the container is rendered at
    // 2x. A pointer at the visual midpoint must read as 50%, and outputs
    // are written in layout-space pixels.
    let (mut engine, probe) = TestEngineBuilder::new()
        .with_rect(ContainerRect {
            top: 0.0,
            left: 0.0,
            width: 300.0,
            height: 100.0,
            offset_width: 150.0,
            offset_height: 100.0,
        })
        .build();

    engine.handle_pointer_down(150.0, 10.0, PointerTarget::Container);

    assert_eq!(engine.position(), 50.0);
    assert_eq!(probe.surface.last_clip(), Some(75.0));
}

// ============================================================================
// Padding invariant
// ============================================================================

#[test]
fn outputs_stay_within_the_padded_band_across_a_full_drag() {
    let (mut engine, probe) = TestEngineBuilder::new().with_padding(20.0).build();

    engine.handle_pointer_down(-100.0, 10.0, PointerTarget::Container);
    assert_eq!(engine.position(), 0.0);
    assert_eq!(probe.surface.last_clip(), Some(20.0));

    engine.handle_pointer_move(500.0, 10.0);
    assert_eq!(engine.position(), 100.0);
    assert_eq!(probe.surface.last_clip(), Some(280.0));

    for (clip, _) in probe.surface.writes() {
        assert!((20.0..=280.0).contains(&clip));
    }
}

#[test]
fn oversized_padding_degrades_to_the_container_midpoint() {
    let (mut engine, probe) = TestEngineBuilder::new().with_padding(400.0).build();

    engine.set_position(0.0);
    assert_eq!(probe.surface.last_clip(), Some(150.0));

    engine.set_position(100.0);
    assert_eq!(probe.surface.last_clip(), Some(150.0));

    // The underlying percentage is unaffected by the malformed padding.
    assert_eq!(engine.position(), 100.0);
}
