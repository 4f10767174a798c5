mod input;
mod ui;

use arcade::core::constants::FRAME_POLL_MS;
use arcade::games::{ActiveGame, CatchInput, GameKind, GameMenu};
use arcade::{build_info, config, core, games, utils};
use arcade::{RoundSettings, ScenePhase, SoundCue};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use input::{HeldDirection, MenuAction, ResultsAction};
use log::{debug, info, warn};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use config::Config;
use ui::sprites::{preload, SpriteSheet};

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CliCommand {
    Play(Option<GameKind>),
    Help,
    Version,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<CliCommand, String> {
    let mut game = None;

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--version" | "-v" => return Ok(CliCommand::Version),
            s if s.starts_with('-') => return Err(format!("Unknown option: {}", s)),
            s => match GameKind::parse(s) {
                Some(kind) if game.is_none() => game = Some(kind),
                Some(_) => return Err("Only one game can be given".to_string()),
                None => return Err(format!("Unknown game: {}", s)),
            },
        }
    }

    Ok(CliCommand::Play(game))
}

fn print_help() {
    println!("Arcade - Terminal Arcade Games\n");
    println!("Usage: arcade [game]\n");
    println!("Games:");
    for kind in GameKind::ALL {
        println!("  {:<8} {}", kind.key(), kind.description());
    }
    println!("\nOptions:");
    println!("  --version       Show version information");
    println!("  --help          Show this help message");
    println!("\nSettings live in ~/.arcade/config.json; set ARCADE_LOG=debug for verbose logs.");
}

fn main() -> io::Result<()> {
    let game = match parse_args(std::env::args().skip(1)) {
        Ok(CliCommand::Help) => {
            print_help();
            return Ok(());
        }
        Ok(CliCommand::Version) => {
            println!("{}", build_info::version_string());
            return Ok(());
        }
        Ok(CliCommand::Play(game)) => game,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run 'arcade --help' for usage.");
            std::process::exit(1);
        }
    };

    // Logging is best-effort; the games run fine without a log file
    if let Ok(path) = utils::logging::init() {
        info!("{} starting, logging to {}", build_info::version_string(), path.display());
    }

    let config = Config::load();
    info!("Config: {:?}", config);

    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.backend_mut().execute(EnterAlternateScreen)?;

    // Key release reporting where the terminal supports it
    let release_events = supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        terminal
            .backend_mut()
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
    }

    let mut app = App::new(config, game, release_events);
    let result = run(&mut terminal, &mut app);

    // Cleanup terminal even if the loop failed
    if release_events {
        let _ = terminal.backend_mut().execute(PopKeyboardEnhancementFlags);
    }
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        warn!("Exited with error: {}", e);
    }
    result
}

/// Frame loop: draw, collect input, advance the active scene, play cues.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    while !app.quit {
        terminal.draw(|frame| app.draw(frame))?;

        let mut keys = Vec::new();
        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            // Drain everything that queued up during the frame
            loop {
                if let Event::Key(key) = event::read()? {
                    keys.push(key);
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let now = Instant::now();
        for key in keys {
            app.handle_key(key, now);
        }

        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        app.update(dt_ms, now, &mut rng);

        if app.play_cues() {
            let backend = terminal.backend_mut();
            backend.write_all(b"\x07")?;
            backend.flush()?;
        }
    }

    Ok(())
}

/// Everything the frame loop mutates.
struct App {
    config: Config,
    settings: RoundSettings,
    menu: GameMenu,
    game: Option<ActiveGame>,
    sheet: SpriteSheet,
    held: HeldDirection,
    /// Key releases are reported, so the hold window is not needed.
    release_events: bool,
    quit: bool,
}

impl App {
    fn new(config: Config, game: Option<GameKind>, release_events: bool) -> Self {
        let settings = config.round_settings();
        let mut app = Self {
            config,
            settings,
            menu: GameMenu::new(),
            game: None,
            sheet: preload(GameKind::Fruit),
            held: HeldDirection::new(),
            release_events,
            quit: false,
        };
        if let Some(kind) = game {
            app.start_game(kind);
        }
        app
    }

    /// Preload the scene's sprites and create it, paused on the start overlay.
    fn start_game(&mut self, kind: GameKind) {
        info!("Loading {}", kind.name());
        self.sheet = preload(kind);
        debug!("Preloaded {} sprites", self.sheet.len());
        self.menu = GameMenu::with_selected(kind);
        self.held.release();
        self.game = Some(ActiveGame::start(kind, self.settings));
    }

    fn back_to_menu(&mut self) {
        self.game = None;
        self.held.release();
    }

    fn draw(&self, frame: &mut Frame) {
        match &self.game {
            Some(game) => ui::draw_game(frame, game, &self.sheet),
            None => ui::draw_menu(frame, &self.menu, &self.config),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if input::is_interrupt(&key) {
            self.quit = true;
            return;
        }
        if key.kind == KeyEventKind::Release {
            self.release_events = true;
        }

        let Some(game) = self.game.as_mut() else {
            if key.kind == KeyEventKind::Release {
                return;
            }
            match input::map_menu_key(&key) {
                MenuAction::Up => self.menu.navigate_up(),
                MenuAction::Down => self.menu.navigate_down(),
                MenuAction::Select => self.start_game(self.menu.selected_kind()),
                MenuAction::Quit => self.quit = true,
                MenuAction::None => {}
            }
            return;
        };

        match game.phase() {
            ScenePhase::Over => {
                if key.kind == KeyEventKind::Release {
                    return;
                }
                let kind = game.kind();
                match input::map_results_key(&key) {
                    ResultsAction::PlayAgain => self.start_game(kind),
                    ResultsAction::Menu => self.back_to_menu(),
                    ResultsAction::Quit => self.quit = true,
                    ResultsAction::None => {}
                }
            }
            ScenePhase::WaitingToStart
                if key.code == KeyCode::Esc && key.kind != KeyEventKind::Release =>
            {
                self.back_to_menu();
            }
            _ => match game {
                ActiveGame::Catch(g) => {
                    let action = input::map_catch_key(&key);
                    if key.kind == KeyEventKind::Release && action != CatchInput::Stop {
                        return;
                    }
                    match action {
                        CatchInput::Left | CatchInput::Right => self.held.press(now),
                        CatchInput::Stop => self.held.release(),
                        _ => {}
                    }
                    games::catch::process_input(g, action);
                }
                ActiveGame::Flappy(g) => {
                    if key.kind != KeyEventKind::Release {
                        games::flappy::process_input(g, input::map_flappy_key(&key));
                    }
                }
            },
        }
    }

    fn update<R: Rng>(&mut self, dt_ms: u64, now: Instant, rng: &mut R) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        if !self.release_events && self.held.expired(now) {
            if let ActiveGame::Catch(g) = game {
                games::catch::process_input(g, CatchInput::Stop);
            }
        }

        game.tick(dt_ms, rng);
    }

    /// Drain the scene's sound cues. Returns true if the bell should ring.
    fn play_cues(&mut self) -> bool {
        let Some(game) = self.game.as_mut() else {
            return false;
        };
        let mut ring = false;
        for cue in game.drain_cues() {
            debug!("Sound cue: {:?}", cue);
            ring |= matches!(cue, SoundCue::Catch | SoundCue::Crash | SoundCue::TimeUp);
        }
        ring && self.config.sound
    }
}
