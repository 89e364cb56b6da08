mod common;

use bundlescope_core::walker::ObjectGraphWalker;
use bundlescope_plugin::ControllerRef;
use common::{MockObject, MockWorld, caps, id};
use std::sync::Arc;
use std::sync::atomic::Ordering;

#[test]
fn test_cycle_terminates_and_visits_each_once() {
    let world = Arc::new(
        MockWorld::new()
            .object(1, MockObject::asset(10).refs(&[2]))
            .object(2, MockObject::asset(20).refs(&[1])),
    );
    let caps = caps(&world, None, None);

    let (visited, stats) = ObjectGraphWalker::new(&caps).walk(&[id(1)]);

    assert_eq!(visited.len(), 2);
    assert!(visited.contains(id(1)));
    assert!(visited.contains(id(2)));
    assert_eq!(stats.visited, 2);
    assert_eq!(world.handles_opened.load(Ordering::SeqCst), 2);
}

#[test]
fn test_diamond_visits_shared_object_once() {
    let world = Arc::new(
        MockWorld::new()
            .object(1, MockObject::asset(1).refs(&[2, 3]))
            .object(2, MockObject::asset(2).refs(&[4]))
            .object(3, MockObject::asset(3).refs(&[4]))
            .object(4, MockObject::asset(4)),
    );
    let caps = caps(&world, None, None);

    let (visited, _) = ObjectGraphWalker::new(&caps).walk(&[id(1)]);

    assert_eq!(visited.len(), 4);
    assert_eq!(world.handles_opened.load(Ordering::SeqCst), 4);
}

#[test]
fn test_discovery_order_is_depth_first() {
    let world = Arc::new(
        MockWorld::new()
            .object(1, MockObject::asset(1).refs(&[2, 4]))
            .object(2, MockObject::asset(2).refs(&[3]))
            .object(3, MockObject::asset(3))
            .object(4, MockObject::asset(4)),
    );
    let caps = caps(&world, None, None);

    let (visited, _) = ObjectGraphWalker::new(&caps).walk(&[id(1)]);
    let order: Vec<_> = visited.into_ordered().into_iter().map(|(o, _)| o).collect();

    assert_eq!(order, vec![id(1), id(2), id(3), id(4)]);
}

#[test]
fn test_null_and_value_fields_are_not_followed() {
    let world = Arc::new(
        MockWorld::new()
            .object(1, MockObject::asset(1).null_ref().value().refs(&[2]))
            .object(2, MockObject::asset(2)),
    );
    let caps = caps(&world, None, None);

    let (visited, stats) = ObjectGraphWalker::new(&caps).walk(&[id(1)]);

    assert_eq!(visited.len(), 2);
    assert_eq!(stats.followed_references, 1);
}

#[test]
fn test_animator_plain_controller_contributes_clips() {
    let world = Arc::new(
        MockWorld::new()
            .object(
                1,
                MockObject::asset(1).animator(Some(ControllerRef::Plain {
                    clips: vec![id(11), id(12)],
                })),
            )
            .object(11, MockObject::asset(11))
            .object(12, MockObject::asset(12)),
    );
    let caps = caps(&world, None, None);

    let (visited, stats) = ObjectGraphWalker::new(&caps).walk(&[id(1)]);

    assert_eq!(visited.len(), 3);
    assert!(visited.contains(id(11)));
    assert!(visited.contains(id(12)));
    assert_eq!(stats.animator_clips, 2);
}

#[test]
fn test_animator_override_controller_is_skipped() {
    let world = Arc::new(
        MockWorld::new()
            .object(1, MockObject::asset(1).animator(Some(ControllerRef::Override)))
            .object(2, MockObject::asset(2).animator(None)),
    );
    let caps = caps(&world, None, None);

    let (visited, stats) = ObjectGraphWalker::new(&caps).walk(&[id(1), id(2)]);

    assert_eq!(visited.len(), 2);
    assert_eq!(stats.animator_clips, 0);
}

#[test]
fn test_container_components_are_walked() {
    let world = Arc::new(
        MockWorld::new()
            .object(1, MockObject::asset(1).container(&[2, 3]))
            .object(2, MockObject::transient().component())
            .object(3, MockObject::transient().component().refs(&[4]))
            .object(4, MockObject::asset(4)),
    );
    let caps = caps(&world, None, None);

    let (visited, stats) = ObjectGraphWalker::new(&caps).walk(&[id(1)]);

    assert_eq!(visited.len(), 4);
    assert!(visited.contains(id(4)));
    assert_eq!(stats.components, 2);
}

#[test]
fn test_nested_container_components_are_walked() {
    // A child container reached by reference still contributes its components
    let world = Arc::new(
        MockWorld::new()
            .object(1, MockObject::asset(1).refs(&[2]))
            .object(2, MockObject::asset(2).container(&[3]))
            .object(3, MockObject::transient().component()),
    );
    let caps = caps(&world, None, None);

    let (visited, _) = ObjectGraphWalker::new(&caps).walk(&[id(1)]);

    assert!(visited.contains(id(3)));
}

#[test]
fn test_introspection_failure_keeps_object_without_children() {
    let world = Arc::new(
        MockWorld::new()
            .object(1, MockObject::asset(1).refs(&[2]))
            .object(2, MockObject::asset(2).refs(&[3]).broken())
            .object(3, MockObject::asset(3)),
    );
    let caps = caps(&world, None, None);

    let (visited, stats) = ObjectGraphWalker::new(&caps).walk(&[id(1)]);

    assert_eq!(visited.len(), 2);
    assert!(visited.get(id(2)).unwrap().handle.is_none());
    assert!(!visited.contains(id(3)));
    assert_eq!(stats.introspection_failures, 1);
}

#[test]
fn test_root_flag_set_when_root_was_reached_first_by_reference() {
    let world = Arc::new(
        MockWorld::new()
            .object(1, MockObject::asset(1).refs(&[2]))
            .object(2, MockObject::asset(2)),
    );
    let caps = caps(&world, None, None);

    let (visited, _) = ObjectGraphWalker::new(&caps).walk(&[id(1), id(2)]);

    assert!(visited.get(id(1)).unwrap().root);
    assert!(visited.get(id(2)).unwrap().root);
    assert_eq!(visited.len(), 2);
}

#[test]
fn test_dropping_visited_set_releases_every_handle() {
    let world = Arc::new(
        MockWorld::new()
            .object(1, MockObject::asset(1).refs(&[2, 3]))
            .object(2, MockObject::asset(2))
            .object(3, MockObject::asset(3)),
    );
    let caps = caps(&world, None, None);

    let (visited, _) = ObjectGraphWalker::new(&caps).walk(&[id(1)]);
    assert_eq!(world.handles_released.load(Ordering::SeqCst), 0);

    drop(visited);
    assert!(world.handles_balanced());
    assert_eq!(world.handles_released.load(Ordering::SeqCst), 3);
}

#[test]
fn test_deep_reference_chain_does_not_overflow() {
    let depth = 50_000u64;
    let mut world = MockWorld::new();
    for n in 0..depth {
        world = world.object(n, MockObject::transient().refs(&[n + 1]));
    }
    world = world.object(depth, MockObject::transient());
    let world = Arc::new(world);
    let caps = caps(&world, None, None);

    let (visited, _) = ObjectGraphWalker::new(&caps).walk(&[id(0)]);

    assert_eq!(visited.len(), depth as usize + 1);
}
