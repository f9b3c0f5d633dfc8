use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use handflap::core::build_info::version_line;
use handflap::core::constants::{INPUT_POLL_MS, MAX_SMOOTHING_WINDOW, TICK_INTERVAL_MS};
use handflap::core::logging::init_file_logging;
use handflap::game::GameSession;
use handflap::gesture::{
    ClassifiedInput, GestureInput, GestureSignal, HandPose, InputStats, KeyboardHand,
    LandmarkStream, PrecomputedLandmarks,
};
use handflap::ui::{render_game, Hud};
use handflap::{Result, SessionConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Command line options.
#[derive(Debug, Default)]
struct Options {
    config_path: Option<PathBuf>,
    landmarks_path: Option<PathBuf>,
    seed: Option<u64>,
    smoothing_window: Option<usize>,
}

/// Where gestures come from: synthesized by keys, or streamed landmarks.
enum InputSource {
    Keyboard(ClassifiedInput<KeyboardHand, PrecomputedLandmarks>),
    Landmarks(ClassifiedInput<LandmarkStream, PrecomputedLandmarks>),
}

impl InputSource {
    fn label(&self) -> String {
        match self {
            InputSource::Keyboard(_) => "Keyboard hand".to_string(),
            InputSource::Landmarks(input) => {
                if input.source().is_closed() {
                    "Tracker (closed)".to_string()
                } else {
                    "Hand tracker".to_string()
                }
            }
        }
    }

    fn stats(&self) -> InputStats {
        match self {
            InputSource::Keyboard(input) => input.stats(),
            InputSource::Landmarks(input) => input.stats(),
        }
    }

    /// Keys only drive the hand in keyboard mode.
    fn press(&mut self, pose: HandPose) {
        if let InputSource::Keyboard(input) = self {
            input.source_mut().press(pose);
        }
    }

    fn reset(&mut self) {
        match self {
            InputSource::Keyboard(input) => input.reset(),
            InputSource::Landmarks(input) => input.reset(),
        }
    }
}

impl GestureInput for InputSource {
    fn next_signal(&mut self) -> GestureSignal {
        match self {
            InputSource::Keyboard(input) => input.next_signal(),
            InputSource::Landmarks(input) => input.next_signal(),
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'handflap --help' for usage.");
            std::process::exit(1);
        }
    };

    let mut config = SessionConfig::load_or_default(options.config_path.as_deref())?;
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    if let Some(window) = options.smoothing_window {
        config.smoothing_window = window;
    }
    config.validate()?;

    // A missing log file is not fatal
    match init_file_logging() {
        Ok(log_path) => info!(log = %log_path.display(), "handflap starting"),
        Err(e) => eprintln!("Warning: logging disabled, could not open the log file: {}", e),
    }

    let mut input = match &options.landmarks_path {
        Some(path) => InputSource::Landmarks(ClassifiedInput::new(
            LandmarkStream::open(path)?,
            PrecomputedLandmarks,
            config.smoothing_window,
        )),
        None => InputSource::Keyboard(ClassifiedInput::new(
            KeyboardHand::new(),
            PrecomputedLandmarks,
            config.smoothing_window,
        )),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_game(&mut terminal, &config, &mut input);

    // Cleanup terminal even if the game loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    if let Err(e) = &result {
        warn!(error = %e, "handflap exited with an error");
    }
    result
}

fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: &SessionConfig,
    input: &mut InputSource,
) -> Result<()> {
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut session = GameSession::new(config.clone())?;
    let mut last_tick = Instant::now();
    let mut redraw = true;

    loop {
        if redraw {
            let hud = Hud {
                input_label: input.label(),
                input: input.stats(),
                seed: session.seed(),
                smoothing_window: config.smoothing_window,
            };
            let snapshot = session.snapshot();
            terminal.draw(|frame| {
                let area = frame.size();
                render_game(frame, area, &snapshot, &hud);
            })?;
            redraw = false;
        }

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Release {
                    match key_event.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                        KeyCode::Up | KeyCode::Char(' ') | KeyCode::Char('k') => {
                            input.press(HandPose::ThumbUp);
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            input.press(HandPose::ThumbDown);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') if session.is_over() => {
                            session = GameSession::new(config.clone())?;
                            input.reset();
                            last_tick = Instant::now();
                            redraw = true;
                        }
                        _ => {}
                    }
                }
            }
        }

        // The driver paces ticks; the session never waits on input
        if !session.is_over() && last_tick.elapsed() >= tick_interval {
            session.step(input);
            last_tick = Instant::now();
            redraw = true;
        }
    }

    info!(ticks = session.ticks(), over = session.is_over(), "handflap quitting");
    Ok(())
}

fn parse_args(args: &[String]) -> std::result::Result<Options, String> {
    let mut options = Options::default();

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args.get(i + 1);
        match flag {
            "--version" | "-v" => {
                println!("{}", version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "-c" | "--config" => {
                let path = value.ok_or("--config needs a path")?;
                options.config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "-l" | "--landmarks" => {
                let path = value.ok_or("--landmarks needs a path (or - for stdin)")?;
                options.landmarks_path = Some(PathBuf::from(path));
                i += 1;
            }
            "-s" | "--seed" => {
                let seed = value.ok_or("--seed needs a value")?;
                options.seed = Some(
                    seed.parse()
                        .map_err(|_| format!("Invalid seed: {}", seed))?,
                );
                i += 1;
            }
            "--smooth" => {
                let window = value.ok_or("--smooth needs a value")?;
                let window: usize = window
                    .parse()
                    .map_err(|_| format!("Invalid smoothing window: {}", window))?;
                if window == 0 || window > MAX_SMOOTHING_WINDOW {
                    return Err(format!(
                        "Smoothing window must be between 1 and {}",
                        MAX_SMOOTHING_WINDOW
                    ));
                }
                options.smoothing_window = Some(window);
                i += 1;
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn print_help() {
    println!("Handflap - gesture-controlled arcade game\n");
    println!("Usage: handflap [options]\n");
    println!("Options:");
    println!("  -l, --landmarks <PATH>  Read hand landmarks (JSON lines) from PATH, or - for stdin");
    println!("  -c, --config <PATH>     Session config JSON (default: ~/.handflap/config.json)");
    println!("  -s, --seed <N>          Seed for pipe placement");
    println!("      --smooth <N>        Majority window for gesture smoothing (1 = off)");
    println!("  -v, --version           Show version information");
    println!("  -h, --help              Show this help message");
    println!();
    println!("Without --landmarks, Up/Space raises the thumb and Down lowers it.");
}
