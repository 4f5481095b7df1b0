//! End-to-end scenarios through the scheduler, scene and camera.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use orrery_app::{
    AppError, FrameScene, FrameScheduler, ObjectId, RenderBackend, RenderError, Scene, UiCommand,
};
use orrery_camera::{Presentation, RecordingPresenter, ViewMode};
use orrery_celestial::{AsteroidBelt, BodyDef, BodyInfo, CelestialRegistry};
use orrery_config::Config;
use orrery_input::PointerEvent;

#[derive(Default)]
struct Recorder {
    frames: Vec<FrameScene>,
}

impl RenderBackend for Recorder {
    fn render(&mut self, frame: &FrameScene) -> Result<(), RenderError> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

fn default_scene() -> Scene {
    let mut config = Config::default();
    config.simulation.asteroid_count = 50;
    Scene::from_config(&config).unwrap()
}

fn scheduler() -> FrameScheduler<Recorder> {
    FrameScheduler::new(|| Ok(Recorder::default())).unwrap()
}

fn down(id: u64, x: f32, y: f32) -> PointerEvent {
    PointerEvent::Down {
        id,
        position: Vec2::new(x, y),
    }
}

fn moved(id: u64, x: f32, y: f32) -> PointerEvent {
    PointerEvent::Move {
        id,
        position: Vec2::new(x, y),
    }
}

fn earth_only() -> Scene {
    let earth = BodyDef {
        id: "earth".into(),
        radius: 2.0,
        orbital_radius: 45.0,
        color: 0x2233ff,
        rotation_speed: 0.01,
        orbital_speed: 0.03,
        initial_angle: 0.0,
        height: 0.0,
        info: BodyInfo {
            title: "Earth".into(),
            summary: "Home.".into(),
            facts: vec!["One moon".into()],
        },
    };
    let registry = CelestialRegistry::from_defs([earth]).unwrap();
    Scene::new(registry, AsteroidBelt::default(), Default::default())
}

#[test]
fn test_earth_after_hundred_ticks() {
    let mut sched = scheduler();
    let mut scene = earth_only();
    for _ in 0..100 {
        sched.tick(&mut scene, 1.0 / 60.0).unwrap();
    }
    let earth = scene.registry.get("earth").unwrap();
    assert!((earth.angle() - 3.0).abs() < 1e-3, "angle {}", earth.angle());
    let p = earth.position();
    assert!((p.x - -44.55).abs() < 0.05, "x {}", p.x);
    assert!((p.z - 6.35).abs() < 0.05, "z {}", p.z);

    let frame = sched.renderer().frames.last().unwrap();
    assert_eq!(frame.body("earth").unwrap().position, p);
}

#[test]
fn test_orbit_angle_matches_closed_form_at_any_scale() {
    let mut sched = scheduler();
    let mut scene = default_scene();
    let mut presenter = RecordingPresenter::new();
    scene.apply_command(UiCommand::SetTimeScale(2.5), 0.0, &mut presenter);
    let speed = 0.013_f32;
    for _ in 0..40 {
        sched.tick(&mut scene, 0.016).unwrap();
    }
    let jupiter = scene.registry.get("jupiter").unwrap();
    let expected = (40.0 * speed * 2.5).rem_euclid(TAU);
    assert!((jupiter.angle() - expected).abs() < 1e-3);
}

#[test]
fn test_pause_and_resume_continue_from_paused_angle() {
    let mut sched = scheduler();
    let mut scene = default_scene();
    let mut presenter = RecordingPresenter::new();
    for _ in 0..10 {
        sched.tick(&mut scene, 0.016).unwrap();
    }
    let paused_at = scene.registry.get("mars").unwrap().angle();
    let rotation_at = scene.registry.get("mars").unwrap().rotation();
    scene.apply_command(UiCommand::TogglePlayback, sched.now(), &mut presenter);
    for _ in 0..25 {
        sched.tick(&mut scene, 0.016).unwrap();
    }
    let mars = scene.registry.get("mars").unwrap();
    assert_eq!(mars.angle(), paused_at);
    assert_eq!(mars.rotation(), rotation_at);

    scene.apply_command(UiCommand::TogglePlayback, sched.now(), &mut presenter);
    sched.tick(&mut scene, 0.016).unwrap();
    let mars = scene.registry.get("mars").unwrap();
    assert!((mars.angle() - (paused_at + 0.024)).abs() < 1e-5);
}

#[test]
fn test_central_body_never_moves() {
    let mut sched = scheduler();
    let mut scene = default_scene();
    let start = scene.registry.get("sun").unwrap().position();
    for _ in 0..30 {
        sched.tick(&mut scene, 0.016).unwrap();
    }
    let sun = scene.registry.get("sun").unwrap();
    assert_eq!(sun.position(), start);
    assert!(sun.rotation() > 0.0);
}

#[test]
fn test_galaxy_view_lands_bit_exact() {
    let mut sched = scheduler();
    let mut scene = default_scene();
    let mut presenter = RecordingPresenter::new();
    let galaxy = UiCommand::SwitchView(ViewMode::Galaxy);
    scene.apply_command(galaxy, sched.now(), &mut presenter);
    for _ in 0..150 {
        sched.tick(&mut scene, 1.0 / 60.0).unwrap();
    }
    assert_eq!(
        scene.navigator.camera().position,
        Vec3::new(0.0, 200.0, 800.0)
    );
    assert!(!scene.navigator.is_transitioning());
    match presenter.last() {
        Some(Presentation::View { title, .. }) => assert_eq!(title, "Galaxy"),
        other => panic!("expected view presentation, got {other:?}"),
    }
}

#[test]
fn test_transition_path_has_no_overshoot() {
    let mut sched = scheduler();
    let mut scene = default_scene();
    let mut presenter = RecordingPresenter::new();
    let start = scene.navigator.camera().position;
    let goal = Vec3::new(0.0, 600.0, 2400.0);
    let universe = UiCommand::SwitchView(ViewMode::Universe);
    scene.apply_command(universe, sched.now(), &mut presenter);

    let total = (goal - start).length();
    let mut last = 0.0_f32;
    for _ in 0..130 {
        sched.tick(&mut scene, 1.0 / 60.0).unwrap();
        let travelled = (scene.navigator.camera().position - start).length();
        assert!(travelled + 1e-3 >= last);
        assert!(travelled <= total + 1e-2);
        last = travelled;
    }
    assert_eq!(scene.navigator.camera().position, goal);
}

#[test]
fn test_pinch_in_zooms_toward_origin() {
    let mut sched = scheduler();
    let mut scene = default_scene();
    let before = scene.navigator.camera().distance();
    scene.handle_pointer(down(1, 100.0, 200.0));
    scene.handle_pointer(down(2, 200.0, 200.0));
    scene.handle_pointer(moved(2, 160.0, 200.0));
    sched.tick(&mut scene, 0.016).unwrap();
    let after = scene.navigator.camera().distance();
    assert!(after < before);
    assert!((before - after - 20.0).abs() < 1e-2);

    let min = scene.navigator.settings().controls.min_distance;
    for step in 0..200 {
        let x = if step % 2 == 0 { 60.0 } else { 1000.0 };
        scene.handle_pointer(moved(2, x, 200.0));
        assert!(scene.navigator.camera().distance() >= min - 1e-3);
    }
}

#[test]
fn test_drag_during_transition_cancels_it() {
    let mut sched = scheduler();
    let mut scene = default_scene();
    let mut presenter = RecordingPresenter::new();
    let universe = UiCommand::SwitchView(ViewMode::Universe);
    scene.apply_command(universe, sched.now(), &mut presenter);
    for _ in 0..20 {
        sched.tick(&mut scene, 1.0 / 60.0).unwrap();
    }
    assert!(scene.navigator.is_transitioning());

    scene.handle_pointer(down(7, 0.0, 0.0));
    scene.handle_pointer(moved(7, 10.0, 0.0));
    assert!(!scene.navigator.is_transitioning());

    let held = scene.navigator.camera().position;
    for _ in 0..200 {
        sched.tick(&mut scene, 1.0 / 60.0).unwrap();
    }
    assert_eq!(scene.navigator.camera().position, held);
}

#[test]
fn test_focus_unknown_body_changes_nothing() {
    let mut sched = scheduler();
    let mut scene = default_scene();
    let mut presenter = RecordingPresenter::new();
    sched.tick(&mut scene, 0.016).unwrap();
    let camera = scene.navigator.camera().clone();
    let focus = UiCommand::FocusBody("nibiru".into());
    scene.apply_command(focus, sched.now(), &mut presenter);
    assert!(!scene.navigator.is_transitioning());
    assert!(presenter.presentations.is_empty());
    assert_eq!(scene.navigator.camera(), &camera);
}

#[test]
fn test_focus_presents_body_and_flies_to_it() {
    let mut sched = scheduler();
    let mut scene = default_scene();
    let mut presenter = RecordingPresenter::new();
    scene.playback.running = false;
    let focus = UiCommand::FocusBody("saturn".into());
    scene.apply_command(focus, sched.now(), &mut presenter);
    for _ in 0..130 {
        sched.tick(&mut scene, 1.0 / 60.0).unwrap();
    }
    let saturn = scene.registry.get("saturn").unwrap();
    let expected = saturn.position() + Vec3::new(0.0, 8.0, 24.0);
    assert_eq!(scene.navigator.camera().position, expected);
    match presenter.last() {
        Some(Presentation::Body { title, facts, .. }) => {
            assert_eq!(title, &saturn.info().title);
            assert!(!facts.is_empty());
        }
        other => panic!("expected body presentation, got {other:?}"),
    }
}

#[test]
fn test_renderer_factory_failure() {
    let failing = || Err(RenderError::Init("no surface".into()));
    let result = FrameScheduler::<Recorder>::new(failing);
    assert!(matches!(result, Err(AppError::RendererUnavailable(_))));
}

#[test]
fn test_frame_carries_every_asteroid() {
    let mut sched = scheduler();
    let mut scene = default_scene();
    sched.tick(&mut scene, 0.016).unwrap();
    let frame = sched.renderer().frames.last().unwrap();
    let rocks = frame
        .objects
        .iter()
        .filter(|o| matches!(o.id, ObjectId::Asteroid(_)))
        .count();
    assert_eq!(rocks, 50);
}

#[test]
fn test_body_table_from_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("bodies.ron");
    std::fs::write(
        &table,
        r#"[
    (id: "star", radius: 5.0, orbital_radius: 0.0, color: 0xffffff, rotation_speed: 0.01,
     orbital_speed: 0.0, height: 0.0, info: (title: "Star", summary: "Bright.", facts: [])),
    (id: "rock", radius: 1.0, orbital_radius: 30.0, color: 0x999999, rotation_speed: 0.0,
     orbital_speed: 0.1, height: 1.0, info: (title: "Rock", summary: "Small.", facts: ["Dusty"])),
]"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.simulation.body_table = Some(table);
    config.simulation.asteroid_count = 0;
    let scene = Scene::from_config(&config).unwrap();
    assert_eq!(scene.registry.len(), 2);
    assert!(scene.registry.get("star").unwrap().is_central());
    let rock = scene.registry.get("rock").unwrap();
    assert_eq!(rock.position(), Vec3::new(30.0, 1.0, 0.0));
}
