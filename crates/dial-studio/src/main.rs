use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Args, Parser, Subcommand};
use dial_clock::prelude::*;
use dial_engine::logging::{LoggingConfig, init_logging};
use dial_engine::time::{CivilTime, ManualCivil, ManualMonotonic};

/// Fonts tried when `--font` is not given.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Longest wait for a redraw request before `run` gives up.
const STALL_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Parser)]
#[command(name = "dial-studio", version, about = "Render the dial clock to PNG files")]
struct Cli {
    /// More output: -v debug, -vv trace. RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw a single frame, hands at rest.
    Render {
        #[command(flatten)]
        face: FaceArgs,

        /// Time to show as HH:MM:SS. Defaults to the local time.
        #[arg(long)]
        time: Option<CivilTime>,

        #[arg(short, long, default_value = "dial.png")]
        out: PathBuf,
    },
    /// Show the clock on live time and write one PNG per repaint.
    Run {
        #[command(flatten)]
        face: FaceArgs,

        /// Number of frames to write before hiding the clock.
        #[arg(long, default_value_t = 40)]
        frames: u32,

        #[arg(long, default_value = "frames")]
        out_dir: PathBuf,
    },
}

#[derive(Args)]
struct FaceArgs {
    /// Edge length of the square output.
    #[arg(long, default_value_t = 300)]
    size: u32,

    /// arabic or roman.
    #[arg(long, default_value = "arabic")]
    numerals: NumeralStyle,

    /// Face fill as #RRGGBB or #RRGGBBAA.
    #[arg(long, default_value = "#00000000")]
    face_color: Color,

    /// Surface color behind the face.
    #[arg(long, default_value = "#1e1e24")]
    background: Color,

    /// TrueType/OpenType font for the numerals.
    #[arg(long)]
    font: Option<PathBuf>,
}

impl FaceArgs {
    fn config(&self) -> Result<ClockConfig> {
        let config = ClockConfig::new().numerals(self.numerals).face_color(self.face_color);
        Ok(match load_typeface(self.font.as_deref())? {
            Some(typeface) => config.typeface(typeface),
            None => config,
        })
    }

    fn surface(&self) -> Raster {
        let mut raster = Raster::new(self.size, self.size);
        raster.fill(self.background);
        raster
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig::with_verbosity(cli.verbose));

    match cli.command {
        Command::Render { face, time, out } => render(&face, time, &out),
        Command::Run { face, frames, out_dir } => run(&face, frames, &out_dir),
    }
}

fn render(face: &FaceArgs, time: Option<CivilTime>, out: &Path) -> Result<()> {
    let sources = match time {
        Some(time) => TimeSources::new(Arc::new(ManualMonotonic::new(0)), Arc::new(ManualCivil::new(time))),
        None => TimeSources::system(),
    };

    let (tx, _rx) = mpsc::channel();
    let mut clock = Clock::new(face.config()?, sources, tx);
    clock.on_size(face.size, face.size);
    clock.on_show();

    let mut surface = face.surface();
    clock.draw(&mut surface);
    clock.on_detach();

    surface
        .save_png(out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    log::info!("wrote {}", out.display());
    Ok(())
}

fn run(face: &FaceArgs, frames: u32, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let (tx, rx) = mpsc::channel();
    let mut clock = Clock::new(face.config()?, TimeSources::system(), tx);
    clock.on_size(face.size, face.size);
    clock.on_show();

    let mut written = 0;
    let result = loop {
        if written == frames {
            break Ok(());
        }
        match rx.recv_timeout(STALL_TIMEOUT) {
            Ok(RedrawRequest) => {}
            Err(RecvTimeoutError::Timeout) => {
                break Err(anyhow!("no redraw request for {}s", STALL_TIMEOUT.as_secs()));
            }
            Err(RecvTimeoutError::Disconnected) => break Ok(()),
        }
        if !clock.on_redraw_request() {
            continue;
        }

        let mut surface = face.surface();
        clock.draw(&mut surface);
        let path = out_dir.join(format!("frame-{written:04}.png"));
        if let Err(err) = surface.save_png(&path) {
            break Err(err).with_context(|| format!("failed to write {}", path.display()));
        }
        log::debug!("wrote {}", path.display());
        written += 1;
    };

    clock.on_hide();
    result?;
    log::info!("wrote {written} frames to {}", out_dir.display());
    Ok(())
}

fn load_typeface(path: Option<&Path>) -> Result<Option<Typeface>> {
    let bytes = match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read font {}", path.display()))?
        }
        None => match SYSTEM_FONTS.iter().find_map(|p| fs::read(p).ok()) {
            Some(bytes) => bytes,
            None => {
                log::warn!("no system font found; numerals will be skipped");
                return Ok(None);
            }
        },
    };
    let typeface = Typeface::from_bytes(&bytes).context("failed to parse font")?;
    Ok(Some(typeface))
}
