use std::io;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use panegrid::config::Settings;
use panegrid::input::{EvdevDevice, KeyCode, Poller};
use panegrid::tui::terminal_guard::{install_termination_signals, TerminalGuard};
use panegrid::ui::backend::ansi::AnsiBackend;
use panegrid::ui::core::{begin_layer, end_layer, Grid, PercentRect, Vec2, View};
use panegrid::ui::widgets::MessageList;

mod logging;

const USAGE: &str = "usage: panegrid [DEVICE] [--config PATH]";

const LOREM: &str = "Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam nonumy \
eirmod tempor invidunt ut labore et dolore magna aliquyam erat, sed diam voluptua. At vero eos \
et accusam et justo duo dolores et ea rebum. Stet clita kasd gubergren, no sea takimata sanctus \
est Lorem ipsum dolor sit amet.";

#[derive(Debug, Default)]
struct Args {
    device: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args() -> io::Result<Args> {
    let mut parsed = Args::default();
    let mut args = std::env::args_os().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args
                .next()
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, USAGE))?;
            parsed.config = Some(PathBuf::from(path));
        } else if parsed.device.is_none() {
            parsed.device = Some(PathBuf::from(arg));
        } else {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, USAGE));
        }
    }
    Ok(parsed)
}

fn main() -> io::Result<()> {
    let args = parse_args()?;
    let settings = Settings::load_or_default(args.config.as_deref()).map_err(io::Error::other)?;
    let grid = settings.grid().map_err(io::Error::other)?;
    let device_path = args
        .device
        .or_else(|| settings.input.device.clone())
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, USAGE))?;

    let mut logging = logging::init();
    let log_rx = logging.as_mut().and_then(|guard| guard.take_log_rx());

    let mut device = EvdevDevice::open(&device_path, settings.grab_delay())?;
    let guard = TerminalGuard::enter()?;
    install_termination_signals(guard.restorer())?;

    let result = run(grid, &settings, &mut device, log_rx);
    if let Err(err) = &result {
        tracing::error!(error = %err, "main loop failed");
    }
    drop(guard);
    result
}

fn panel(title: &str, x: i32, grid: &Grid) -> io::Result<MessageList> {
    let mut view = View::new(
        title,
        PercentRect::new(Vec2::new(x, 0), Vec2::new(20, 100)),
        Vec2::ZERO,
    );
    view.align(grid).map_err(io::Error::other)?;
    MessageList::new(view).map_err(io::Error::other)
}

fn run(
    grid: Grid,
    settings: &Settings,
    device: &mut EvdevDevice,
    log_rx: Option<Receiver<String>>,
) -> io::Result<()> {
    let poller = Poller::new(settings.poll_interval());
    let step = settings.reveal.chars_per_tick.max(1);
    let mut log = panel("Log", 0, &grid)?;
    let mut inventory = panel("Inventory", 80, &grid)?;
    // Unlocked handle: the stdout lock is only taken for each frame's write,
    // so a signal-driven restore can still reach the terminal.
    let mut backend = AnsiBackend::new(io::stdout());

    loop {
        let input = poller.poll(device);
        if input.pressed(KeyCode::ESC) || input.pressed(KeyCode::Q) {
            tracing::info!("quit key pressed, leaving");
            break;
        }
        if input.pressed(KeyCode::L) {
            log.push(LOREM);
        }
        if input.pressed(KeyCode::I) {
            inventory.push(LOREM);
        }
        if let Some(rx) = &log_rx {
            log.push_pending(rx);
        }

        log.step(step);
        inventory.step(step);

        let mut layer = begin_layer(grid);
        log.draw(&mut layer);
        inventory.draw(&mut layer);
        end_layer(layer, &mut backend)?;
    }

    Ok(())
}
