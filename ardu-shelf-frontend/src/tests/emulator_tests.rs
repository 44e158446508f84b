use super::*;

#[test]
fn test_embed_url_encodes_binary() {
    assert_eq!(
        embed_url("https://example.org/games/a b.hex"),
        "https://felipemanga.github.io/ProjectABE/?url=https%3A%2F%2Fexample.org%2Fgames%2Fa+b.hex&skin=BareFit"
    );
}

#[test]
fn test_play_makes_panel_visible() {
    let mut panel = EmulatorPanel::new();
    assert!(!panel.is_visible());

    let instance = panel.play("a.hex");
    assert_eq!(instance.binary_url, "a.hex");
    assert_eq!(instance.src, embed_url("a.hex"));
    assert!(panel.is_visible());
    assert_eq!(panel.instances().len(), 1);
}

#[test]
fn test_newer_instances_go_first() {
    let mut panel = EmulatorPanel::new();
    panel.play("first.hex");
    panel.play("second.hex");

    let urls: Vec<_> = panel.instances().iter().map(|i| i.binary_url.as_str()).collect();
    assert_eq!(urls, vec!["second.hex", "first.hex"]);
}

#[test]
fn test_close_removes_most_recent_and_hides() {
    let mut panel = EmulatorPanel::new();
    panel.play("first.hex");
    panel.play("second.hex");

    let closed = panel.close().unwrap();
    assert_eq!(closed.binary_url, "second.hex");
    assert!(!panel.is_visible());
    assert_eq!(panel.instances().len(), 1);
    assert_eq!(panel.instances()[0].binary_url, "first.hex");
}

#[test]
fn test_close_on_empty_panel() {
    let mut panel = EmulatorPanel::new();
    assert!(panel.close().is_none());
    assert!(!panel.is_visible());
}
