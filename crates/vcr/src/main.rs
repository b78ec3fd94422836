//! vcr CLI - replay a file's commit history in the terminal

mod app;
mod config;
mod layout;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use vcr_core::{Dispatch, FileHistory, Player};

#[derive(Parser, Debug)]
#[command(name = "vcr")]
#[command(version, about = "Replay a file's commit history in the terminal")]
struct Args {
    /// File to replay, relative to the current directory
    path: PathBuf,

    /// Directory prefix prepended to the path (git aliases pass $GIT_PREFIX here)
    #[arg(long, default_value = "")]
    prefix: PathBuf,

    /// Delay in milliseconds between auto-advance steps that added lines
    #[arg(short, long, default_value = "1000")]
    speed: u64,

    /// Fixed width of each rendered text column
    #[arg(long, default_value = "80")]
    col_width: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::Config::load();

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    if !vcr_core::git::is_git_repo(&cwd) {
        anyhow::bail!(
            "Not in a git repository.\n\
             \n\
             Usage: vcr <path>\n\
             \n\
             Run from inside the repository that tracks the file."
        );
    }

    let repo_root =
        vcr_core::git::get_repo_root(&cwd).context("Failed to get git repository root")?;

    // Repo-relative path of the tracked file. The prefix restores the
    // true cwd when invoked through a git alias, which runs commands
    // from the repository toplevel.
    let below_root = cwd
        .strip_prefix(&repo_root)
        .unwrap_or(Path::new(""))
        .to_path_buf();
    let tracked = below_root.join(&args.prefix).join(&args.path);

    // CLI overrides config when set away from its default
    let speed = if args.speed != 1000 {
        args.speed
    } else {
        config.playback.speed
    };
    let col_width = if args.col_width != 80 {
        args.col_width
    } else {
        config.ui.col_width
    };
    let theme = config.ui.theme.resolve();

    let player = Player::new(FileHistory::new(repo_root, tracked));
    let mut app = App::new(player, theme, col_width, speed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        return Err(err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<FileHistory>) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        app.player
            .refresh()
            .context("Failed to read revision label")?;
        terminal.draw(|f| ui::draw(f, app))?;

        // Throttle auto-advance only on steps that introduced added
        // rows, so commits that changed nothing visible fly by
        if app.player.wants_delay() {
            thread::sleep(app.step_delay);
        }

        // While playing or rewinding the next move is synthesized;
        // otherwise block until a real key arrives
        let command = match app.player.auto_command() {
            Some(command) => Some(command),
            None => match event::read()? {
                Event::Key(key) => app.command_for_key(key),
                _ => None,
            },
        };

        if let Some(command) = command {
            match app.player.apply(command) {
                Dispatch::Continue => {}
                Dispatch::Blocked => app.note_blocked(),
                Dispatch::Quit => return Ok(()),
            }
        }

        if app.take_bell() {
            execute!(io::stdout(), Print("\u{0007}"))?;
        }
    }
}
