use std::path::PathBuf;

use clap::Parser;
use speedreader_core::timing::SpeedPreset;

#[derive(Debug, Parser, Clone)]
#[command(name = "speedreader")]
#[command(about = "Read a text file one word at a time")]
pub(super) struct Cli {
    /// Speed preset: slow, normal, fast or speed.
    #[arg(long, default_value_t = SpeedPreset::Normal)]
    pub(super) preset: SpeedPreset,

    /// Target WPM suggested from outside, e.g. by a text-analysis service.
    #[arg(long)]
    pub(super) wpm: Option<u32>,

    /// Line width in columns.
    #[arg(long, default_value_t = 60)]
    pub(super) width: usize,

    /// Take keyboard control: Space play/pause, arrows seek and change speed,
    /// Shift+arrow seeks further, R resets, Esc closes.
    #[arg(short, long)]
    pub(super) interactive: bool,

    /// Plain UTF-8 text file. A built-in sample is read when omitted.
    pub(super) path: Option<PathBuf>,
}
