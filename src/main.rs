//! # Flipout Screen Entry Point
//!
//! Replays a command script on the board, either in a macroquad window or
//! headless with simulated time.

use clap::Parser;
use flipout::{
    config, demo_script, generate_sheet, load_script, to_json_lines, FlipoutResult, ImageSurface,
    MacroquadDisplay, Screen, ScriptEvent, ScriptPlayer, SpriteAtlas,
};
use log::{debug, error, info, warn};
use macroquad::input::{
    is_key_pressed, is_mouse_button_pressed, mouse_position, KeyCode, MouseButton,
};
use macroquad::time::get_frame_time;
use macroquad::window::{next_frame, Conf};
use macroquad::Window;
use std::path::PathBuf;
use std::time::Duration;

/// Command line arguments for the flipout screen.
#[derive(Parser, Debug)]
#[command(name = "flipout")]
#[command(about = "Reversi board renderer with animated disc flips")]
#[command(version)]
struct Args {
    /// Sprite atlas image (16 columns x 2 rows of 80px cells)
    #[arg(long, default_value = config::DEFAULT_SPRITE_PATH)]
    assets: PathBuf,

    /// JSON-lines command script to replay (built-in demo if omitted)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Board edge length in cells (1 to 64)
    #[arg(
        long,
        default_value_t = config::DEFAULT_BOARD_SIZE,
        value_parser = clap::value_parser!(i32).range(1..=config::MAX_BOARD_SIZE as i64)
    )]
    board_size: i32,

    /// Replay without a window and print the final board
    #[arg(long)]
    headless: bool,

    /// Print the built-in demo script and exit
    #[arg(long)]
    print_demo: bool,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> FlipoutResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting flipout screen v{}", flipout::VERSION);

    if args.print_demo {
        print!("{}", to_json_lines(&demo_script())?);
        return Ok(());
    }

    let events = match &args.script {
        Some(path) => {
            info!("Loading script {}", path.display());
            load_script(path)?
        }
        None => demo_script(),
    };
    info!("Script has {} events", events.len());

    if args.headless {
        return run_headless(&args, events);
    }

    run_window(args, events);
    Ok(())
}

/// Initializes `env_logger`, falling back to the CLI level when RUST_LOG is unset.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Replays the script with simulated ticks and prints the resting board.
fn run_headless(args: &Args, events: Vec<ScriptEvent>) -> FlipoutResult<()> {
    let mut screen = Screen::with_board_size(
        ImageSurface::for_board(args.board_size),
        SpriteAtlas::generated(),
        args.board_size,
    );
    let mut player = ScriptPlayer::new(events);

    let mut simulated = Duration::ZERO;
    while !player.is_finished() || screen.is_animating() {
        player.advance(&mut screen, config::TICK_PERIOD);
        screen.advance(config::TICK_PERIOD);
        simulated += config::TICK_PERIOD;
    }
    info!("Replay finished after {:.2}s of simulated time", simulated.as_secs_f32());

    print!("{}", screen.mirror());
    for (id, text) in screen.messages().iter() {
        println!("{}: {}", id, text);
    }

    screen.teardown();
    Ok(())
}

/// Opens the macroquad window and runs the replay loop inside it.
fn run_window(args: Args, events: Vec<ScriptEvent>) {
    let display = MacroquadDisplay::new(args.board_size);
    let (width, height) = display.window_size();

    let conf = Conf {
        window_title: "Flipout".to_owned(),
        window_width: width,
        window_height: height,
        window_resizable: false,
        ..Default::default()
    };

    Window::from_config(conf, async move {
        if let Err(e) = run_game_loop(args, display, events).await {
            error!("Game loop failed: {}", e);
        }
    });
}

/// Main loop: replay, animate, present.
async fn run_game_loop(
    args: Args,
    mut display: MacroquadDisplay,
    events: Vec<ScriptEvent>,
) -> FlipoutResult<()> {
    let mut screen = Screen::with_board_size(
        ImageSurface::for_board(args.board_size),
        SpriteAtlas::new(&args.assets),
        args.board_size,
    );
    let mut player = ScriptPlayer::new(events);
    let mut first_frame = true;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Quit requested");
            break;
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            if let Some(cell) = display.cell_at(x, y) {
                debug!("Clicked cell {}", cell);
            }
        }

        let elapsed = Duration::from_secs_f32(get_frame_time().max(0.0));
        // Commands drawn before the atlas arrives would be lost.
        if screen.renderer().atlas().is_loaded() {
            player.advance(&mut screen, elapsed);
        }
        screen.advance(elapsed);

        display.render(&screen);
        next_frame().await;

        if first_frame {
            first_frame = false;
            load_atlas(&mut screen).await;
        }
    }

    screen.teardown();
    info!("Game loop ended");
    Ok(())
}

/// Loads the atlas image, falling back to generated sprites.
async fn load_atlas(screen: &mut Screen<ImageSurface>) {
    if let Err(e) = screen.atlas_mut().load().await {
        warn!("{}; using generated sprites", e);
        screen.atlas_mut().install(generate_sheet());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size_defaults_to_eight() {
        let args = Args::try_parse_from(["flipout", "--headless"]).unwrap();
        assert_eq!(args.board_size, 8);
        assert!(args.headless);
    }

    #[test]
    fn test_board_size_is_bounded() {
        assert!(Args::try_parse_from(["flipout", "--board-size", "64"]).is_ok());
        assert!(Args::try_parse_from(["flipout", "--board-size", "0"]).is_err());
        assert!(Args::try_parse_from(["flipout", "--board-size", "65"]).is_err());
        assert!(Args::try_parse_from(["flipout", "--board-size", "2000000000"]).is_err());
    }
}
