//! PIN pad CLI - interactive terminal demo of the PIN lock widget.
//!
//! Keys are read from standard input one line at a time: digits press digit
//! keys, `<` presses delete, `q` quits. The widget is redrawn after every
//! change.

mod devices;
mod listener;

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use pinpad_core::{IndicatorType, KeyOrder, Pin, PinLength, PinPadConfig};
use pinpad_widget::{PinLockView, render, run_with};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::devices::{StdinKeypad, TerminalFeedback};
use crate::listener::CheckingListener;

#[derive(Parser, Debug)]
#[command(name = "pinpad")]
#[command(about = "Interactive PIN pad demo", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of digits in a PIN
    #[arg(short = 'l', long)]
    pin_length: Option<usize>,

    /// PIN the demo accepts
    #[arg(short, long, default_value = "1234")]
    expected_pin: String,

    /// Shuffle the digit keys
    #[arg(long)]
    shuffle: bool,

    /// Hide the delete key
    #[arg(long)]
    hide_delete: bool,

    /// Disable haptic feedback
    #[arg(long)]
    no_vibrate: bool,

    /// Indicator variant
    #[arg(long, value_enum)]
    indicator: Option<IndicatorArg>,

    /// Write the effective configuration to this file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum IndicatorArg {
    Fixed,
    Fill,
    FillWithAnimation,
}

impl From<IndicatorArg> for IndicatorType {
    fn from(arg: IndicatorArg) -> Self {
        match arg {
            IndicatorArg::Fixed => IndicatorType::Fixed,
            IndicatorArg::Fill => IndicatorType::Fill,
            IndicatorArg::FillWithAnimation => IndicatorType::FillWithAnimation,
        }
    }
}

impl Cli {
    /// The configuration file (or defaults) with command-line overrides
    /// applied.
    fn config(&self) -> Result<PinPadConfig> {
        let mut config = match &self.config {
            Some(path) => PinPadConfig::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => PinPadConfig::default(),
        };

        if let Some(len) = self.pin_length {
            config.pin_length = PinLength::new(len)?;
        }
        if self.shuffle {
            config.key_order = KeyOrder::Shuffled;
        }
        if self.hide_delete {
            config.show_delete_button = false;
        }
        if self.no_vibrate {
            config.vibrate = false;
        }
        if let Some(indicator) = self.indicator {
            config.indicator_type = indicator.into();
        }

        Ok(config)
    }
}

fn draw(view: &PinLockView) {
    println!();
    for line in render(view) {
        println!("{line}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "pinpad=info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;

    if let Some(path) = &cli.write_config {
        config
            .save(path)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        info!(path = %path.display(), "Configuration written");
        return Ok(());
    }

    let expected: Pin = cli
        .expected_pin
        .parse()
        .context("expected PIN must contain only digits")?;
    ensure!(
        expected.len() == config.pin_length.get(),
        "expected PIN has {} digits but the PIN length is {}",
        expected.len(),
        config.pin_length
    );

    let mut view = PinLockView::builder()
        .with_config(config)
        .with_listener(CheckingListener::new(expected))
        .with_feedback(TerminalFeedback)
        .build()?;

    info!(
        pin_length = %view.pin_length(),
        layout = %view.key_layout(),
        "PIN pad ready"
    );
    if let Some(device) = view.feedback_info() {
        info!(%device, "Feedback device");
    }
    draw(&view);

    let mut keypad = StdinKeypad::new();
    run_with(&mut view, &mut keypad, draw).await?;

    Ok(())
}
