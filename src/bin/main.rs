use std::{
    process::ExitCode,
    thread,
    time::{Duration, Instant},
};

use log::{error, info, warn};
use clap::Parser;
use speedreader_core::{
    app::{InputOutcome, Player, TickResult},
    content::{TextSource, default_sample_text, estimate_reading_minutes},
    render::DEFAULT_ANCHOR_PERCENT,
    timing::SpeedPreset,
};
use thiserror::Error;

use cli::Cli;
use file_source::FileText;
use keyboard::KeyboardInput;
use terminal::TerminalRenderer;

#[path = "main/cli.rs"]
mod cli;
#[path = "main/file_source.rs"]
mod file_source;
#[path = "main/keyboard.rs"]
mod keyboard;
#[path = "main/terminal.rs"]
mod terminal;

const IDLE_POLL_MS: u64 = 50;
const INPUT_POLL_MS: u64 = 20;

#[derive(Debug, Error)]
enum RunError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid speed: {0}")]
    Speed(#[from] speedreader_core::timing::ConfigError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    let (title, text) = load_text(&cli)?;

    let mut config = cli.preset.config();
    if let Some(wpm) = cli.wpm {
        config = config.with_suggested_target(wpm)?;
    }

    let mut player = Player::new(&text, config);
    if player.total() == 0 {
        warn!("{title}: no words to read");
        return Ok(());
    }

    let minutes = estimate_reading_minutes(player.tokens(), config.target_wpm())?;
    info!(
        "{}: {} words, ~{} min at {} wpm (preset {})",
        title,
        player.total(),
        minutes,
        config.target_wpm(),
        SpeedPreset::matching(&config).map_or("custom", SpeedPreset::name)
    );

    let mut renderer = TerminalRenderer::new(cli.width, DEFAULT_ANCHOR_PERCENT);
    let mut input = cli.interactive.then(KeyboardInput::open).transpose()?;

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    player.play(now_ms());
    player.with_screen(|screen| renderer.render(screen))?;

    loop {
        let now = now_ms();
        let mut render_requested = false;

        if let Some(provider) = input.as_mut() {
            match player.pump_input(provider, now) {
                Ok(InputOutcome::CloseRequested) => break,
                Ok(InputOutcome::Handled) => render_requested = true,
                Ok(InputOutcome::Ignored) => {}
                Err(err) => {
                    warn!("keyboard: {err}; closing reader");
                    player.pause();
                    break;
                }
            }
        }

        match player.tick(now) {
            TickResult::NoRender => {}
            TickResult::RenderRequested => render_requested = true,
            TickResult::Finished => {
                player.with_screen(|screen| renderer.render(screen))?;
                if input.is_none() {
                    break;
                }
            }
        }

        if render_requested {
            player.with_screen(|screen| renderer.render(screen))?;
        }

        let poll_ms = if input.is_some() {
            INPUT_POLL_MS
        } else {
            IDLE_POLL_MS
        };
        let sleep_ms = player
            .next_deadline_ms()
            .map_or(poll_ms, |due| due.saturating_sub(now).min(poll_ms));
        thread::sleep(Duration::from_millis(sleep_ms.max(1)));
    }

    renderer.finish()?;
    drop(input);
    Ok(())
}

fn load_text(cli: &Cli) -> Result<(String, String), RunError> {
    let Some(path) = cli.path.as_ref() else {
        let mut sample = default_sample_text();
        let title = sample.title().unwrap_or("Sample").to_owned();
        let Ok(text) = sample.load();
        return Ok((title, text));
    };

    let mut source = FileText::new(path.clone());
    let text = source.load().map_err(|err| RunError::Read {
        path: path.display().to_string(),
        source: err,
    })?;
    let title = source.title().unwrap_or("Untitled").to_owned();
    Ok((title, text))
}
