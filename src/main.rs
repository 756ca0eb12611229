mod app;
mod args;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod input;
mod logging;
mod render;
mod util;
use crate::app::App;
use crate::args::{Arguments, Invocation, USAGE};
use crate::clock::FrameClock;
use crate::game::Round;
use crate::input::CrosstermInput;
use crate::render::TerminalSurface;
use anyhow::Context;
use crossterm::terminal::SetTitle;
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Invocation::from_parser(lexopt::Parser::from_env()) {
        Ok(Invocation::Run(args)) => io_exit(run(&args)),
        Ok(Invocation::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Invocation::Version) => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{USAGE}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Arguments) -> anyhow::Result<()> {
    let config = args.load_config().context("failed to load configuration")?;
    logging::init(&config.logging)?;
    let terminal = ratatui::init();
    // Not every terminal supports titles, and the game works without one
    let _ = crossterm::execute!(io::stdout(), SetTitle(consts::WINDOW_TITLE));
    let mut surface = TerminalSurface::new(terminal, consts::GRID);
    let r = App::new(Round::new(consts::GRID), config.game.tick_rate).run(
        &mut surface,
        &mut CrosstermInput,
        &mut FrameClock::new(),
    );
    ratatui::restore();
    r.context("error while running game")
}

fn io_exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = ?e, "Exiting on error");
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
