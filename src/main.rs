//! Headless runner: plays one scripted round against the in-memory scene and
//! the recording timeline, logging every step.
//!
//! ```text
//! lanedraw [success|short|idle] [--config <path>] [--debug] [--open]
//! ```

use anyhow::{Context, Result, bail};
use lanedraw::GameController;
use lanedraw::config::GameConfig;
use lanedraw::layout::{Layout, ScreenSize};
use lanedraw::logging;
use lanedraw::scene::MemoryScene;
use lanedraw::timeline::RecordingTimeline;
use lanedraw::types::{Actor, Point};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

const SCREEN: ScreenSize = ScreenSize {
    width: 1280.0,
    height: 800.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    /// Both cars drawn into their gates
    Success,
    /// Paths reach the gate with a single point each
    Short,
    /// No input until the watchdog fires
    Idle,
}

struct Args {
    script: Script,
    config: Option<PathBuf>,
    debug: bool,
    open: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        script: Script::Success,
        config: None,
        debug: false,
        open: false,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "success" => args.script = Script::Success,
            "short" => args.script = Script::Short,
            "idle" => args.script = Script::Idle,
            "--debug" => args.debug = true,
            "--open" => args.open = true,
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(PathBuf::from(path));
            }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(args)
}

type Game = GameController<MemoryScene, RecordingTimeline>;

/// Press inside the actor's aim window, drag to the middle of its gate.
fn draw_into_gate(game: &mut Game, actor: Actor, steps: usize, now: Instant) {
    let start = game.layout().actor_home(actor);
    let gate = game.gate(actor);
    let end = Point::new((gate.x.from + gate.x.to) / 2.0, (gate.y.from + gate.y.to) / 2.0);

    game.handle_pointer_down(start, now);
    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        game.handle_pointer_move(Point::new(
            start.x + (end.x - start.x) * t,
            start.y + (end.y - start.y) * t,
        ));
    }
    for (actor, outcome) in game.handle_pointer_up() {
        info!(%actor, ?outcome, "pointer up");
    }
}

/// Deliver every queued cue, as a playing timeline would.
fn play_timeline(game: &mut Game) {
    while let Some(cue) = game.timeline_mut().next_cue() {
        game.handle_cue(cue);
    }
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => GameConfig::load_from(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => GameConfig::load(),
    };
    logging::init(args.debug || config.debug_logging);

    let start = Instant::now();
    let layout = Layout::new(SCREEN);
    let scene = MemoryScene::from_layout(&layout);
    let mut game = Game::new(scene, RecordingTimeline::new(), config, layout, start);

    match args.script {
        Script::Success => {
            draw_into_gate(&mut game, Actor::Red, 12, start);
            draw_into_gate(&mut game, Actor::Yellow, 12, start);
        }
        Script::Short => {
            draw_into_gate(&mut game, Actor::Red, 1, start);
            draw_into_gate(&mut game, Actor::Yellow, 1, start);
        }
        Script::Idle => {
            let later = start + game.watchdog().timeout();
            game.tick(later);
        }
    }

    play_timeline(&mut game);
    info!(
        status = ?game.status(),
        ops = game.timeline().ops().len(),
        "round complete"
    );

    if let Some(exit) = game.handle_exit_click() {
        if args.open {
            open::that(&exit.url).with_context(|| format!("open {}", exit.url))?;
        } else {
            info!(url = %exit.url, "exit button live (pass --open to follow it)");
        }
    }

    Ok(())
}
