//! Integration test to ensure a screen can be brought up, driven and torn down.

use flipout::{
    config, demo_script, CellState, DiscColor, FlipoutResult, GridCell, ImageSurface, PixelRect,
    Screen, ScriptPlayer, SpriteAtlas,
};
use std::time::Duration;

#[test]
fn test_basic_startup() -> FlipoutResult<()> {
    let screen = Screen::init(ImageSurface::for_board(8), SpriteAtlas::new("assets/sprites.png"));

    // Nothing is drawn or running until commands arrive
    assert!(!screen.is_animating());
    assert!(screen.messages().is_empty());
    assert!(screen.surface().is_clear(PixelRect::new(0, 0, 720, 720)));

    let (surface, atlas) = screen.teardown();
    assert_eq!(surface.width(), config::canvas_size(8));
    assert!(!atlas.is_loaded());

    Ok(())
}

#[test]
fn test_demo_replays_to_rest() -> FlipoutResult<()> {
    let mut screen = Screen::init(ImageSurface::for_board(8), SpriteAtlas::generated());
    let mut player = ScriptPlayer::new(demo_script());

    let mut guard = 0;
    while !player.is_finished() || screen.is_animating() {
        player.advance(&mut screen, config::TICK_PERIOD);
        screen.advance(config::TICK_PERIOD);
        guard += 1;
        assert!(guard < 10_000, "demo never settled");
    }

    let mirror = screen.mirror();
    assert_eq!(mirror.count(DiscColor::Black), 5);
    assert_eq!(mirror.count(DiscColor::White), 2);
    assert_eq!(mirror.get(GridCell::new(3, 3)), CellState::Stone(DiscColor::Black));
    assert_eq!(mirror.get(GridCell::new(2, 3)), CellState::Empty);
    assert_eq!(screen.messages().get("you"), Some("Move f6"));

    // Every stone is on the canvas, every empty cell is clear.
    for y in 0..8 {
        for x in 0..8 {
            let cell = GridCell::new(x, y);
            let area = PixelRect::cell_at(flipout::grid_to_point(cell));
            let clear = screen.surface().is_clear(area);
            match mirror.get(cell) {
                CellState::Empty => assert!(clear, "{} should be clear", cell),
                _ => assert!(!clear, "{} should be drawn", cell),
            }
        }
    }

    Ok(())
}

#[test]
fn test_pending_atlas_degrades_to_no_drawing() {
    let mut screen = Screen::init(ImageSurface::for_board(8), SpriteAtlas::new("not/there.png"));

    screen.update_grid("put", "black", 3, 4, None);
    screen.update_grid("flip", "white", 3, 4, Some(0));
    screen.advance(Duration::from_secs(2));

    assert!(screen.surface().is_clear(PixelRect::new(0, 0, 720, 720)));
    assert_eq!(
        screen.mirror().get(GridCell::new(3, 4)),
        CellState::Stone(DiscColor::White)
    );
    assert!(!screen.is_animating());
}
