//! Integration tests for the motion pipeline
//!
//! These tests verify the full world-motion sync works correctly:
//! 1. Scrollers advance and entities linked to them follow
//! 2. The wrap-around resets the whole group at once
//! 3. The hopper launches, flies a full arc, and lands cleanly
//! 4. Entity transforms re-derive from anchors every frame

use outback_core::{
    Entity, Hopper, JumpConfig, JumpSimulator, JumpTimer, Mesh, ParallaxScroller, Transform, Vec3,
    World,
};

// ==================== Scroll Sync Tests ====================

/// Test that an entity linked to a scroller drifts left each frame
#[test]
fn test_scrolled_entity_drifts_left() {
    let mut world = World::new();
    let key = world
        .motion_mut()
        .add_scroller(ParallaxScroller::new(5.0, 40.0));

    world.add_entity(
        Entity::new(Mesh::Sphere { radius: 1.0 })
            .with_transform(Transform::from_position(Vec3::new(10.0, 2.0, -20.0)))
            .with_name("hill")
            .with_scroller(key),
    );

    let mut last_x = world.get_by_name("hill").unwrap().1.transform.position.x;
    for _ in 0..30 {
        world.update(1.0 / 30.0);
        let x = world.get_by_name("hill").unwrap().1.transform.position.x;
        assert!(x < last_x, "Entity should drift left every frame. x={}", x);
        last_x = x;
    }

    // 1 second at 5 units/s
    assert!(
        (last_x - 5.0).abs() < 0.01,
        "After 1s the entity should be ~5 units left of its anchor. x={}",
        last_x
    );
}

/// The wrap scenario: speed 5, threshold 40, 30 fps
///
/// The offset crosses -40 strictly after 8 seconds of scrolling, so the
/// first reset lands on tick 241 (tick 240 reaches the threshold without
/// crossing it, modulo float accumulation).
#[test]
fn test_scroll_wrap_resets_group_once() {
    let mut world = World::new();
    let key = world
        .motion_mut()
        .add_scroller(ParallaxScroller::new(5.0, 40.0));

    world.add_entity(
        Entity::new(Mesh::Sphere { radius: 1.0 })
            .with_transform(Transform::from_position(Vec3::new(0.0, 0.0, -20.0)))
            .with_name("hill")
            .with_scroller(key),
    );

    let dt = 1.0 / 30.0;
    let mut resets = Vec::new();
    let mut last_x = 0.0_f32;

    for tick in 1..=250 {
        world.update(dt);
        let x = world.get_by_name("hill").unwrap().1.transform.position.x;
        if x > last_x {
            resets.push(tick);
        }
        last_x = x;
    }

    assert_eq!(resets.len(), 1, "Exactly one reset in 250 ticks: {:?}", resets);
    let tick = resets[0];
    assert!(
        (240..=242).contains(&tick),
        "First reset should land right after 8s of scrolling, got tick {}",
        tick
    );

    // After the reset the entity is back near its anchor
    assert!(
        last_x.abs() < 0.5,
        "Entity should snap back near its anchor after the wrap. x={}",
        last_x
    );
}

/// Test that two entities on the same scroller keep their spacing through a wrap
#[test]
fn test_group_wraps_rigidly() {
    let mut world = World::new();
    let key = world
        .motion_mut()
        .add_scroller(ParallaxScroller::new(10.0, 20.0));

    let a = world.add_entity(
        Entity::new(Mesh::Sphere { radius: 1.0 })
            .with_transform(Transform::from_position(Vec3::new(0.0, 0.0, -10.0)))
            .with_scroller(key),
    );
    let b = world.add_entity(
        Entity::new(Mesh::Sphere { radius: 1.0 })
            .with_transform(Transform::from_position(Vec3::new(6.0, 0.0, -10.0)))
            .with_scroller(key),
    );

    // Long enough to wrap several times
    for _ in 0..600 {
        world.update(1.0 / 60.0);
        let ax = world.get_entity(a).unwrap().transform.position.x;
        let bx = world.get_entity(b).unwrap().transform.position.x;
        assert!(
            (bx - ax - 6.0).abs() < 1e-4,
            "Spacing must survive wraps. ax={}, bx={}",
            ax,
            bx
        );
    }
}

// ==================== Jump Arc Tests ====================

/// The jump scenario: gravity -15, force 8, 60 fps
///
/// Launch at tick 0 and watch the full arc: the hopper rises, falls, and
/// lands after roughly 2 * 8 / 15 seconds, never dipping below ground.
#[test]
fn test_full_jump_arc_through_world() {
    let mut world = World::new();
    let entity = Entity::new(Mesh::Empty)
        .with_transform(Transform::from_position(Vec3::new(0.0, 0.0, 2.0)))
        .with_name("kangaroo");
    let key = world.add_entity(entity);

    // Long interval so the timer never interferes with the measured arc
    world.set_hopper(
        key,
        Hopper::new(
            JumpSimulator::new(JumpConfig::new(-15.0, 8.0)),
            JumpTimer::new(1000.0),
        ),
    );
    world
        .motion_mut()
        .hopper_mut()
        .expect("hopper was installed")
        .sim
        .trigger();

    let dt = 1.0 / 60.0;
    let mut peak = 0.0_f32;
    let mut landing_tick = None;

    for tick in 1..=200 {
        world.update(dt);
        let y = world.get_entity(key).unwrap().transform.position.y;
        assert!(y >= 0.0, "Hopper must never sink below ground. y={}", y);
        peak = peak.max(y);

        let airborne = world.motion().hopper().unwrap().sim.is_jumping();
        if !airborne && landing_tick.is_none() {
            landing_tick = Some(tick);
        }
    }

    // Analytic flight time: 2 * v0 / |g| = 16 / 15 s = 64 ticks
    let tick = landing_tick.expect("hopper should land within 200 ticks");
    assert!(
        (62..=66).contains(&tick),
        "Landing should fall within 2 ticks of the analytic flight time, got {}",
        tick
    );

    // Analytic apex: v0^2 / (2 * |g|) = 64 / 30
    let apex = 8.0_f32 * 8.0 / (2.0 * 15.0);
    assert!(
        (peak - apex).abs() < 0.15,
        "Peak {} should be near the analytic apex {}",
        peak,
        apex
    );

    // Back at the anchor after landing
    let y = world.get_entity(key).unwrap().transform.position.y;
    assert!(y.abs() < 1e-4, "Hopper should rest at its anchor. y={}", y);
}

/// Test that the periodic trigger keeps the hopper cycling indefinitely
#[test]
fn test_hopper_cycles_forever() {
    let mut world = World::new();
    let key = world.add_entity(
        Entity::new(Mesh::Empty)
            .with_transform(Transform::from_position(Vec3::new(0.0, 0.0, 2.0)))
            .with_name("kangaroo"),
    );
    world.set_hopper(
        key,
        Hopper::new(
            JumpSimulator::new(JumpConfig::new(-15.0, 8.0)),
            JumpTimer::new(1.8),
        ),
    );

    // 20 seconds at 60 fps covers ~11 trigger firings
    let mut launches = 0;
    let mut was_jumping = false;
    for _ in 0..1200 {
        world.update(1.0 / 60.0);
        let jumping = world.motion().hopper().unwrap().sim.is_jumping();
        if jumping && !was_jumping {
            launches += 1;
        }
        was_jumping = jumping;
    }

    assert!(
        launches >= 10,
        "Hopper should keep launching on every interval, got {} launches",
        launches
    );
}

// ==================== Combined Pipeline Test ====================

/// Scroll and jump together: the hopper bobs in place while scenery scrolls
#[test]
fn test_scenery_scrolls_while_hopper_jumps() {
    let mut world = World::new();

    let hills = world
        .motion_mut()
        .add_scroller(ParallaxScroller::new(5.0, 40.0));
    let hill = world.add_entity(
        Entity::new(Mesh::Sphere { radius: 2.0 })
            .with_transform(Transform::from_position(Vec3::new(0.0, 1.0, -20.0)))
            .with_scroller(hills),
    );

    let roo = world.add_entity(
        Entity::new(Mesh::Empty)
            .with_transform(Transform::from_position(Vec3::new(0.0, 0.0, 2.0))),
    );
    world.set_hopper(
        roo,
        Hopper::new(
            JumpSimulator::new(JumpConfig::default()),
            JumpTimer::new(0.5),
        ),
    );

    let mut roo_peak = 0.0_f32;
    for _ in 0..300 {
        world.update(1.0 / 60.0);
        let hill_x = world.get_entity(hill).unwrap().transform.position.x;
        // The scenery stays inside the wrap window
        assert!(hill_x <= 0.0 && hill_x > -40.5, "hill_x={}", hill_x);
        // The hopper only ever moves vertically
        let roo_pos = world.get_entity(roo).unwrap().transform.position;
        assert_eq!(roo_pos.x, 0.0);
        assert_eq!(roo_pos.z, 2.0);
        roo_peak = roo_peak.max(roo_pos.y);
    }

    assert!(roo_peak > 0.5, "Hopper should have jumped. peak={}", roo_peak);
}
