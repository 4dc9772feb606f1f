use fireworks_room::input_bridge::{InputConfig, LaunchBridge};
use fireworks_room::listener::{ChannelListener, FireworksEvent};
use fireworks_room::physic_engine::{
    LaunchError, PhysicConfig, PhysicEngine, PhysicEngineFireworks,
};
use fireworks_room::Simulator;
use std::time::Duration;

mod helpers;
use helpers::{call_log, count, CallLog, RecordingListener, TestAudio, TestRenderer};

type TestSimulator = Simulator<TestRenderer, PhysicEngineFireworks, TestAudio>;

fn simulator(log: &CallLog) -> TestSimulator {
    let physic = PhysicEngineFireworks::new(&PhysicConfig {
        seed: Some(11),
        ..PhysicConfig::default()
    });
    Simulator::new(
        TestRenderer::new(log.clone()),
        physic,
        TestAudio::new(log.clone()),
        LaunchBridge::new(&InputConfig::default(), Some(11)),
    )
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_frame_is_a_no_op_until_started() {
    let log = call_log();
    let mut sim = simulator(&log);
    sim.resize(800.0, 600.0, 1.0).unwrap();

    let stats = sim.frame(ms(0));

    assert!(!stats.rendered);
    assert_eq!(sim.frames(), 0);
    assert_eq!(count(&log, "renderer.render_frame"), 0);
}

#[test]
fn test_lifecycle_calls_engines_in_order() {
    let log = call_log();
    let mut sim = simulator(&log);
    sim.resize(800.0, 600.0, 1.0).unwrap();

    sim.start();
    sim.start(); // idempotent
    let stats = sim.frame(ms(0));
    assert!(stats.rendered);
    sim.close();

    assert_eq!(
        *log.borrow(),
        vec![
            "renderer.resize",
            "audio.start",
            "renderer.render_frame",
            "audio.stop",
            "renderer.close"
        ]
    );
    assert!(!sim.is_running());
}

#[test]
fn test_frame_without_surface_is_not_rendered() {
    let log = call_log();
    let mut sim = simulator(&log);
    assert!(sim.resize(0.0, 600.0, 1.0).is_err());
    sim.start();

    let stats = sim.frame(ms(0));

    assert!(!stats.rendered);
    assert_eq!(sim.surface_size(), None);
    assert_eq!(sim.frames(), 1);
}

#[test]
fn test_inbound_launch_plays_sound_without_on_launch() {
    let log = call_log();
    let mut sim = simulator(&log);
    let listener = RecordingListener::default();
    sim.set_listener(Box::new(listener.clone()));
    sim.resize(800.0, 600.0, 1.0).unwrap();
    sim.start();

    sim.launch(400.0, 600.0, 400.0, 200.0, Some(120.0)).unwrap();
    assert_eq!(count(&log, "audio.play_launch"), 1);
    assert!(listener.launches.borrow().is_empty());

    for i in 0..60 {
        sim.frame(ms(i * 16));
    }

    let explosions = listener.explosions.borrow();
    assert_eq!(explosions.len(), 1);
    assert_eq!((explosions[0].pos.x, explosions[0].pos.y), (400.0, 200.0));
    assert_eq!(count(&log, "audio.play_explosion"), 1);
}

#[test]
fn test_invalid_inbound_launch_is_rejected() {
    let log = call_log();
    let mut sim = simulator(&log);
    sim.start();

    assert!(matches!(
        sim.launch(f32::NAN, 0.0, 0.0, 0.0, None),
        Err(LaunchError::NonFiniteCoordinate { name: "sx", .. })
    ));
    assert!(matches!(
        sim.launch(0.0, 0.0, 2.0e6, 0.0, None),
        Err(LaunchError::CoordinateOutOfRange { name: "tx", .. })
    ));
    assert_eq!(count(&log, "audio.play_launch"), 0);
}

#[test]
fn test_pointer_down_requires_a_surface() {
    let log = call_log();
    let mut sim = simulator(&log);
    sim.start();

    assert_eq!(
        sim.pointer_down(100.0, 100.0, ms(0)),
        Err(LaunchError::NoSurface)
    );
}

#[test]
fn test_pointer_down_notifies_listener_once() {
    let log = call_log();
    let mut sim = simulator(&log);
    let listener = RecordingListener::default();
    sim.set_listener(Box::new(listener.clone()));
    sim.resize(800.0, 600.0, 1.0).unwrap();
    sim.start();

    sim.pointer_down(300.0, 150.0, ms(0)).unwrap();
    sim.pointer_up();

    let launches = listener.launches.borrow();
    assert_eq!(launches.len(), 1);
    let request = launches[0];
    assert_eq!(request.target().x, 300.0);
    assert_eq!(request.target().y, 150.0);
    assert_eq!(request.origin().y, 600.0);
    assert!((350.0..=450.0).contains(&request.origin().x));
    assert!(request.hue().is_some());
}

#[test]
fn test_stop_cancels_repeat_fire() {
    let log = call_log();
    let mut sim = simulator(&log);
    sim.resize(800.0, 600.0, 1.0).unwrap();
    sim.start();

    sim.pointer_down(400.0, 100.0, ms(0)).unwrap();
    assert!(sim.bridge().is_repeating());

    sim.stop();
    assert!(!sim.bridge().is_repeating());

    let rockets_before = sim.physic().rockets_count();
    let stats = sim.frame(ms(1000));
    assert_eq!(stats.repeat_launches, 0);
    assert_eq!(sim.physic().rockets_count(), rockets_before);
}

#[test]
fn test_input_is_ignored_while_stopped() {
    let log = call_log();
    let mut sim = simulator(&log);
    sim.resize(800.0, 600.0, 1.0).unwrap();
    sim.start();
    sim.stop();

    assert_eq!(
        sim.pointer_down(400.0, 100.0, ms(0)),
        Err(LaunchError::NotRunning)
    );
    assert_eq!(
        sim.launch(400.0, 600.0, 400.0, 200.0, None),
        Err(LaunchError::NotRunning)
    );
    assert!(!sim.bridge().is_repeating());
    assert_eq!(sim.physic().rockets_count(), 0);
    assert_eq!(count(&log, "audio.play_launch"), 0);

    sim.start();
    let stats = sim.frame(ms(10_000));
    assert_eq!(stats.repeat_launches, 0);
    assert_eq!(stats.rockets, 0);
}

#[test]
fn test_restart_does_not_replay_missed_repeat_fire() {
    let log = call_log();
    let mut sim = simulator(&log);
    sim.resize(800.0, 600.0, 1.0).unwrap();
    sim.start();
    sim.pointer_down(400.0, 100.0, ms(0)).unwrap();
    sim.bridge_mut().pointer_move(400.0, 120.0);

    sim.stop();
    sim.start();

    assert!(!sim.bridge().is_repeating());
    assert_eq!(sim.frame(ms(10_000)).repeat_launches, 0);
}

#[test]
fn test_channel_listener_forwards_events() {
    let log = call_log();
    let mut sim = simulator(&log);
    let (listener, receiver) = ChannelListener::unbounded();
    sim.set_listener(Box::new(listener));
    sim.resize(800.0, 600.0, 1.0).unwrap();
    sim.start();

    sim.pointer_down(400.0, 590.0, ms(0)).unwrap();
    sim.pointer_up();
    for i in 0..20 {
        sim.frame(ms(i * 16));
    }

    let events: Vec<FireworksEvent> = receiver.try_iter().collect();
    assert!(matches!(events.first(), Some(FireworksEvent::Launched(_))));
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, FireworksEvent::Exploded(_)))
            .count(),
        1
    );
}
