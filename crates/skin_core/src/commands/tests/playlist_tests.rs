use super::*;
use crate::test_support::RecordingEngine;

#[test]
fn navigation_commands() {
    let engine = Arc::new(RecordingEngine::with_items(4));
    CmdPlaylistNext::new(engine.clone()).execute();
    CmdPlaylistPrevious::new(engine.clone()).execute();
    CmdPlaylistFirst::new(engine.clone()).execute();
    assert_eq!(engine.calls(), ["next", "previous", "play_at 0"]);
}

#[test]
fn toggles_map_to_order_and_repeat() {
    let engine = Arc::new(RecordingEngine::default());
    CmdPlaylistRandom::new(engine.clone(), true).execute();
    CmdPlaylistRandom::new(engine.clone(), false).execute();
    CmdPlaylistLoop::new(engine.clone(), true).execute();
    CmdPlaylistRepeat::new(engine.clone(), true).execute();
    CmdPlaylistRepeat::new(engine.clone(), false).execute();
    assert_eq!(
        engine.calls(),
        [
            "order Random",
            "order Normal",
            "repeat All",
            "repeat Current",
            "repeat None"
        ]
    );
}

#[test]
fn load_appends_and_plays_local_files() {
    let engine = Arc::new(RecordingEngine::with_items(2));
    CmdPlaylistLoad::new(engine.clone(), "file:///music/list.m3u").execute();
    assert_eq!(
        engine.calls(),
        ["append file:///music/list.m3u", "play_at 2"]
    );
}

#[test]
fn load_rejects_non_local_uris() {
    let engine = Arc::new(RecordingEngine::default());
    CmdPlaylistLoad::new(engine.clone(), "http://example.org/list.m3u").execute();
    CmdPlaylistLoad::new(engine.clone(), "not a uri").execute();
    assert!(engine.calls().is_empty());
}

#[test]
fn save_picks_the_export_module_from_the_name() {
    let engine = Arc::new(RecordingEngine::default());
    CmdPlaylistSave::new(engine.clone(), "/tmp/list.xspf").execute();
    CmdPlaylistSave::new(engine.clone(), "/tmp/list.m3u8").execute();
    CmdPlaylistSave::new(engine.clone(), "/tmp/list.html").execute();
    CmdPlaylistSave::new(engine.clone(), "/tmp/list.txt").execute();
    assert_eq!(
        engine.calls(),
        [
            "export /tmp/list.xspf export-xspf",
            "export /tmp/list.m3u8 export-m3u",
            "export /tmp/list.html export-html"
        ]
    );
}

#[test]
fn failed_export_is_contained() {
    let engine = Arc::new(RecordingEngine {
        fail_export: true,
        ..RecordingEngine::default()
    });
    CmdPlaylistSave::new(engine.clone(), "/tmp/list.m3u").execute();
    assert!(engine.calls().is_empty());
}
