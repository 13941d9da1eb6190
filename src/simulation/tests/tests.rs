use super::*;
use crate::events::CanvasEdge;

const W: f64 = 800.0;
const H: f64 = 600.0;

const RECORDS: &str = r#"[
  {"date": "2024-06-01", "time": "am", "certainty": 2,
   "Energy": "high", "Emotion": "positive", "Attention": "medium",
   "Motivation": "low", "Engagement": "neutral", "Meaning": "high"},
  {"date": "2024-06-01", "time": "pm", "certainty": 0,
   "Energy": "low", "Emotion": "negative", "Attention": "low",
   "Motivation": "medium", "Engagement": "high", "Meaning": "low"},
  {"date": "2024-06-02", "time": "am",
   "Energy": {"value": "medium", "certainty": 1},
   "Emotion": {"value": "high", "certainty": 1},
   "Attention": {"value": "high", "certainty": 2},
   "Motivation": {"value": "high", "certainty": 2},
   "Engagement": {"value": "low", "certainty": 0},
   "Meaning": {"value": "medium", "certainty": 1}}
]"#;

#[test]
fn import_spawns_bodies_inside_the_spawn_margin() {
    let mut world = WorldCore::new();
    let n = world.import_json(RECORDS, W, H).unwrap();
    assert_eq!(n, 3);
    assert_eq!(world.body_count(), 3);

    let margin = world.config().spawn_margin;
    for b in world.bodies() {
        assert!(b.pos.x >= margin && b.pos.x <= W - margin);
        assert!(b.pos.y >= margin && b.pos.y <= H - margin);
        assert!(b.velocity.x.abs() <= 2.0 && b.velocity.y.abs() <= 2.0);
        assert_eq!(b.angle, 0.0);
    }
    assert!(world.bodies()[0].angular_vel < 0.0);
    assert!(world.bodies()[1].angular_vel > 0.0);
}

#[test]
fn rejected_import_keeps_previous_bodies() {
    let mut world = WorldCore::new();
    world.import_json(RECORDS, W, H).unwrap();
    let ids: Vec<u32> = world.bodies().iter().map(|b| b.id).collect();

    assert!(world.import_json(r#"[{"date": "x", "time": "am"}]"#, W, H).is_err());
    let after: Vec<u32> = world.bodies().iter().map(|b| b.id).collect();
    assert_eq!(ids, after);
}

#[test]
fn reimport_replaces_bodies_clears_history_and_never_reuses_ids() {
    let mut world = WorldCore::new();
    world.import_json(RECORDS, W, H).unwrap();
    for _ in 0..200 {
        world.step(W, H, 1.0);
    }

    world.import_json(RECORDS, W, H).unwrap();
    assert_eq!(world.frame(), 0);
    assert!(world.log().boundary_records().is_empty());
    assert_eq!(world.log().interactions().count(), 0);
    let ids: Vec<u32> = world.bodies().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![4, 5, 6]);
    assert!(world.body(1).is_none());
}

#[test]
fn csv_import_works_end_to_end() {
    let mut world = WorldCore::new();
    let csv = "date,time,certainty,Energy,Emotion,Attention,Motivation,Engagement,Meaning\n\
               2024-01-01,am,1,high,low,medium,high,neutral,positive\n\
               2024-01-01,pm,1,low,high,medium,low,neutral,negative";
    assert_eq!(world.import_csv(csv, W, H).unwrap(), 2);
}

#[test]
fn step_counts_frames_and_keeps_speed_bounded() {
    let mut world = WorldCore::new();
    world.import_json(RECORDS, W, H).unwrap();
    // At most two vertices can cross the left wall at once, each adding gain
    let gain = world.config().left_wall_gain;
    let max = world.config().max_speed * gain * gain;
    for _ in 0..500 {
        world.step(W, H, 1.0);
        for b in world.bodies() {
            assert!(b.velocity.x.abs() <= max && b.velocity.y.abs() <= max);
            assert!(b.pos.is_finite());
        }
    }
    assert_eq!(world.frame(), 500);
}

#[test]
fn bodies_stay_on_canvas() {
    let mut world = WorldCore::new();
    world.import_json(RECORDS, W, H).unwrap();
    for _ in 0..1000 {
        world.step(W, H, 1.0);
        for b in world.bodies() {
            // A center may sit between the inradius and the radius from a
            // wall without any vertex crossing it.
            let inner = b.radius * 3f64.sqrt() / 2.0 - 1e-6;
            assert!(b.pos.x >= inner && b.pos.x <= W - inner);
            assert!(b.pos.y >= inner && b.pos.y <= H - inner);
        }
    }
}

#[test]
fn wall_hits_are_logged_with_frame_and_body_state() {
    let mut world = WorldCore::new();
    world.import_json(RECORDS, W, H).unwrap();
    // Shrink the canvas so every body is already past the right/bottom walls
    world.step(120.0, 120.0, 1.0);

    let records = world.log().boundary_records();
    assert!(!records.is_empty());
    assert!(records.iter().all(|r| r.frame == 0));
    assert!(records
        .iter()
        .any(|r| r.edge == CanvasEdge::Right || r.edge == CanvasEdge::Bottom));
    for r in records {
        let b = world.body(r.hex_id).unwrap();
        assert_eq!((r.hex_x, r.hex_y), (b.pos.x, b.pos.y));
    }
}

#[test]
fn zero_or_invalid_dt_freezes_motion() {
    let mut world = WorldCore::new();
    world.import_json(RECORDS, W, H).unwrap();
    let before: Vec<_> = world.bodies().iter().map(|b| (b.pos, b.angle)).collect();
    world.step(W, H, 0.0);
    world.step(W, H, f64::NAN);
    let after: Vec<_> = world.bodies().iter().map(|b| (b.pos, b.angle)).collect();
    assert_eq!(before, after);
    assert_eq!(world.frame(), 2);
}

#[test]
fn same_seed_gives_same_placement() {
    let mut a = WorldCore::new();
    let mut b = WorldCore::new();
    a.import_json(RECORDS, W, H).unwrap();
    b.import_json(RECORDS, W, H).unwrap();
    let pa: Vec<_> = a.bodies().iter().map(|x| (x.pos, x.velocity)).collect();
    let pb: Vec<_> = b.bodies().iter().map(|x| (x.pos, x.velocity)).collect();
    assert_eq!(pa, pb);

    b.set_seed(777);
    b.import_json(RECORDS, W, H).unwrap();
    let pc: Vec<_> = b.bodies().iter().map(|x| x.pos).collect();
    assert_ne!(pa.iter().map(|x| x.0).collect::<Vec<_>>(), pc);
}

#[test]
fn render_extract_packs_centers_vertices_and_colors() {
    let mut world = WorldCore::new();
    world.import_json(RECORDS, W, H).unwrap();
    assert_eq!(world.extract_render(), 3);

    let verts = world.render_vertices();
    let colors = world.render_colors();
    assert_eq!(verts.len(), 3 * VERTEX_FLOATS_PER_BODY);
    assert_eq!(colors.len(), 3 * COLOR_FLOATS_PER_BODY);

    let b0 = &world.bodies()[0];
    assert_eq!(verts[0], b0.pos.x as f32);
    assert_eq!(verts[2], b0.vertices[0].x as f32);
    // Energy "high" with global certainty 2
    assert_eq!(&colors[0..3], &[0.0, 100.0, 100.0]);
    // Second body, Emotion "negative", certainty 0
    assert_eq!(&colors[COLOR_FLOATS_PER_BODY + 3..COLOR_FLOATS_PER_BODY + 6], &[30.0, 20.0, 20.0]);
}

#[test]
fn perf_stats_are_filled_when_enabled() {
    let mut world = WorldCore::new();
    world.import_json(RECORDS, W, H).unwrap();
    world.enable_perf_metrics(true);
    world.step(W, H, 1.0);
    let stats = world.get_perf_stats();
    assert_eq!(stats.body_count(), 3);
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn set_config_validates_and_applies() {
    let mut world = WorldCore::new();
    let bad = EngineConfig { friction: 2.0, ..Default::default() };
    assert!(world.set_config(bad).is_err());

    let good = EngineConfig { tolerance: 5.0, ..Default::default() };
    world.set_config(good).unwrap();
    assert_eq!(world.config().tolerance, 5.0);
}
