//! Spline Scene Editor (headless).
//!
//! Baut eine Bézier-Kurve mit drei Knots auf, spielt eine feste
//! Event-Folge durch den Coordinator und gibt die Szene als JSON aus.

use anyhow::Context;
use glam::Vec2;
use serde::Serialize;
use spline_scene_editor::{
    BezierSpline, ControlSide, EditCoordinator, EditorOptions, EditorState, HandleTarget,
    PointerEvent,
};

/// Kurzfassung des Editor-Zustands nach dem Durchlauf.
#[derive(Debug, Serialize)]
struct SceneSummary {
    knots: usize,
    segments: usize,
    live_primitives: usize,
    installed_total: u64,
    released_total: u64,
    committed_edits: u64,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Spline Scene Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let model = BezierSpline::new([
        BezierSpline::new_vertex(Vec2::new(100.0, 100.0), None, Some(Vec2::new(120.0, 150.0))),
        BezierSpline::new_vertex(Vec2::new(300.0, 300.0), Some(Vec2::new(200.0, 300.0)), None),
        BezierSpline::new_vertex(Vec2::new(500.0, 100.0), Some(Vec2::new(490.0, 150.0)), None),
    ]);
    let mut state = EditorState::with_options(model, options);
    let mut coordinator = EditCoordinator::new();

    coordinator
        .rebuild(&mut state)
        .context("Initialer Szenen-Aufbau fehlgeschlagen")?;

    for event in demo_events() {
        coordinator
            .handle_event(&mut state, event)
            .with_context(|| format!("Event {:?} fehlgeschlagen", event))?;
    }

    let summary = SceneSummary {
        knots: state.model.knot_count(),
        segments: state.model.segment_count(),
        live_primitives: state.registry.live_count(),
        installed_total: state.registry.installed_total(),
        released_total: state.registry.released_total(),
        committed_edits: state.command_log.total_committed(),
    };
    log::info!(
        "Zusammenfassung: {}",
        serde_json::to_string(&summary).context("Zusammenfassung nicht serialisierbar")?
    );

    let scene = coordinator.build_render_scene(&state);
    println!(
        "{}",
        serde_json::to_string_pretty(&scene).context("Szene nicht serialisierbar")?
    );

    Ok(())
}

/// Vertex verschieben, Steuerpunkt ziehen, am Ende anhängen, neuen Vertex verschieben.
fn demo_events() -> Vec<PointerEvent> {
    let press_release = |target: HandleTarget, position: Vec2| {
        [
            PointerEvent::Press { target },
            PointerEvent::Release { target, position },
        ]
    };

    let mut events = Vec::new();
    events.extend(press_release(HandleTarget::vertex(1), Vec2::new(310.0, 290.0)));
    events.extend(press_release(
        HandleTarget::control(1, ControlSide::Entry),
        Vec2::new(220.0, 320.0),
    ));
    events.push(PointerEvent::DoubleActivate { knot: 2 });
    events.extend(press_release(HandleTarget::vertex(3), Vec2::new(560.0, 160.0)));
    events
}
