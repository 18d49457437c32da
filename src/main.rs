mod ai;
mod config;
mod debug;
mod game;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Config;
use game::{InputAction, MatchState, Side, Simulation};
use ui::{CourtTransform, OverlayMessage};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args);
    debug::init(options.debug)?;

    let config = config::load_config().context("loading configuration")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_match(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

struct Options {
    debug: bool,
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options { debug: false };
    for arg in &args[1..] {
        match arg.as_str() {
            "--debug" | "-d" => options.debug = true,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage(&args[0]);
                std::process::exit(1);
            }
        }
    }
    options
}

fn print_usage(program: &str) {
    println!("Solopong - terminal Pong against a scripted opponent");
    println!();
    println!("Usage:");
    println!("  {program}            # play");
    println!("  {program} --debug    # play with diagnostics in /tmp/solopong-debug.log");
    println!();
    println!("Move with the arrow keys or the mouse; Space serves, P pauses,");
    println!("R restarts the match, Q quits.");
    println!();
    println!("Opponent styles (config key 'ai.style'):");
    for kind in ai::OpponentKind::all() {
        println!(
            "  {:5}  {}",
            kind.display_name().to_lowercase(),
            kind.description()
        );
    }
    println!();
    println!("Settings live in {}", config::get_config_path().display());
}

fn run_match<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
) -> Result<()> {
    tracing::debug!("match loop started");

    let mut sim = Simulation::new(&config.court, &config.ai);
    let palette = config.display.palette();

    let frame_duration = Duration::from_millis(1000 / config.display.target_fps.max(1));
    let max_step = config.court.max_step_ms as f32 / 1000.0;
    let serve_delay = Duration::from_millis(config.court.serve_delay_ms);

    // A goal schedules the next serve here; the simulation itself owns no
    // timers.
    let mut pending_serve: Option<(Instant, Side)> = None;
    let mut last_frame = Instant::now();

    loop {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32().min(max_step);
        last_frame = now;

        let size = terminal.size()?;
        let court = sim.court();
        let tf = CourtTransform::new(size.width, size.height, &court);

        for action in game::poll_input(&config.keybindings)? {
            match action {
                InputAction::Quit => return Ok(()),
                InputAction::Reset => {
                    sim.reset();
                    pending_serve = None;
                }
                InputAction::Serve => {
                    // valid before the opening serve and between points;
                    // the simulation ignores it otherwise
                    sim.serve(Side::Player);
                    pending_serve = None;
                }
                InputAction::Pause => sim.toggle_pause(),
                InputAction::MoveLeft => {
                    sim.set_player_target(sim.player().x - config.court.paddle_tap_distance);
                }
                InputAction::MoveRight => {
                    sim.set_player_target(sim.player().x + config.court.paddle_tap_distance);
                }
                InputAction::PointerAt { column } => {
                    let x = tf.column_to_court_x(column);
                    sim.set_player_target(x - sim.player().w / 2.0);
                }
            }
        }

        if let Some((due, toward)) = pending_serve {
            if now >= due && sim.state() == MatchState::PointScored {
                sim.serve(toward);
                pending_serve = None;
            }
        }

        let events = sim.advance(dt);
        if let Some(side) = events.point {
            if events.match_over {
                pending_serve = None;
            } else {
                // the next serve heads toward whoever just scored
                pending_serve = Some((now + serve_delay, side));
            }
        }

        let commands = sim.render_commands(&palette);
        let overlay = overlay_for(&sim);
        terminal.draw(|frame| ui::render(frame, &commands, &court, overlay.as_ref()))?;

        // Frame rate limiting
        let elapsed = now.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }
}

fn overlay_for(sim: &Simulation) -> Option<OverlayMessage> {
    match sim.state() {
        MatchState::NotStarted => {
            let goal = match sim.win_score {
                0 => "Endless rally - no score cap".to_string(),
                n => format!("First to {n} wins"),
            };
            Some(
                OverlayMessage::info(vec![
                    goal,
                    String::new(),
                    "Press Space to serve".to_string(),
                ])
                .with_title("SOLOPONG"),
            )
        }
        MatchState::Paused => Some(OverlayMessage::info(vec![
            "Paused".to_string(),
            String::new(),
            "P to resume".to_string(),
        ])),
        MatchState::Over => {
            let scores = sim.scores();
            let lines = vec![
                format!("{} : {}", scores.player, scores.cpu),
                String::new(),
                "R to restart  |  Q to quit".to_string(),
            ];
            Some(match sim.winner() {
                Some(Side::Player) => OverlayMessage::success(lines).with_title("YOU WIN"),
                _ => OverlayMessage::error(lines).with_title("CPU WINS"),
            })
        }
        MatchState::Running | MatchState::PointScored => None,
    }
}
