//! App-level tests: the plugin wired into a headless Bevy app.

use bevy::prelude::*;

use crate::scroller::TerrainScroller;
use crate::settings::TerrainSettings;
use crate::{ReseedTerrain, SegmentWrapped, TerrainPlugin};

fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, TerrainPlugin));
    app
}

fn assert_even_spacing(scroller: &TerrainScroller) {
    let mut positions: Vec<f32> = scroller.segments().iter().map(|s| s.position()).collect();
    positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let depth = scroller.layout().depth();
    for pair in positions.windows(2) {
        assert!((pair[1] - pair[0] - depth).abs() < 1e-2, "{positions:?}");
    }
}

#[test]
fn test_plugin_initializes_resources() {
    let mut app = headless_app();
    app.update();
    assert!(app.world().contains_resource::<TerrainSettings>());
    assert!(app.world().contains_resource::<TerrainScroller>());
}

#[test]
fn test_spacing_invariant_holds_across_updates() {
    let mut app = headless_app();
    for _ in 0..20 {
        app.update();
        std::thread::sleep(std::time::Duration::from_millis(2));
        assert_even_spacing(app.world().resource::<TerrainScroller>());
    }
}

#[test]
fn test_reseed_event_rebuilds_every_segment() {
    let mut app = headless_app();
    app.update();

    let seed = app.world().resource::<TerrainSettings>().seed();
    app.world_mut().send_event(ReseedTerrain {
        seed: seed.wrapping_add(1),
    });
    app.update();

    let count = app
        .world()
        .resource::<TerrainScroller>()
        .layout()
        .count();
    let events = app.world().resource::<Events<SegmentWrapped>>();
    let mut cursor = events.get_cursor();
    let reported: Vec<usize> = cursor.read(events).map(|e| e.segment).collect();
    assert_eq!(reported.len(), count);
    assert_eq!(
        app.world().resource::<TerrainSettings>().seed(),
        seed.wrapping_add(1)
    );
}
