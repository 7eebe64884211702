//! dirhop: a dual-pane terminal directory browser built with ratatui.
//!
//! This binary initialises the terminal on stderr, runs the main event loop,
//! restores the terminal on exit or panic, and finally prints the path chosen
//! with quit-and-navigate on stdout so a shell wrapper can `cd` into it.

mod icons;
mod input;
mod loader;
mod render;
mod ui;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dirhop_core::{
    ActionRegistry, Completion, Config, CoreError, CoreResult, Environment, Keymap, LocalFs,
    Navigator, Theme,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::input::decode_key;
use crate::loader::Loader;
use crate::render::{render, RenderContext};

type Tty = Terminal<CrosstermBackend<io::Stderr>>;

/// How long one poll for terminal input may block before completions are drained.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Shell function printed by `--shell-init`.
const SHELL_INIT: &str = r#"dh() {
    target="$(command dirhop "$@")" || return
    if [ -n "$target" ]; then
        cd -- "$target" || return
    fi
}
"#;

/// Browse directories in two panes and print the one you pick.
#[derive(Parser, Debug)]
#[command(name = "dirhop", version, about)]
struct Cli {
    /// Directory to start in (defaults to the current directory)
    path: Option<PathBuf>,

    /// Settings file (defaults to <config dir>/dirhop/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log file (defaults to dirhop.log in the system temp directory)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print a `dh` shell function that cds into the chosen directory, then exit
    #[arg(long)]
    shell_init: bool,
}

/// Settings, key bindings and colours loaded at startup.
struct Settings {
    config: Config,
    keymap: Keymap,
    theme: Theme,
}

impl Settings {
    /// Loads `config.toml` (or `config_path`) plus `keymap.toml` and
    /// `theme.toml` from the same directory. Missing files use defaults.
    fn load(config_path: Option<&Path>) -> Self {
        let config_path = config_path.map(Path::to_path_buf).or_else(default_config_path);
        let Some(config_path) = config_path else {
            tracing::info!("no config directory; using defaults");
            return Self {
                config: Config::default(),
                keymap: Keymap::default(),
                theme: Theme::default(),
            };
        };
        let dir = config_path.parent().unwrap_or(Path::new("."));
        Self {
            config: load_or_default(&config_path, Config::load),
            keymap: load_or_default(&dir.join("keymap.toml"), Keymap::load),
            theme: load_or_default(&dir.join("theme.toml"), Theme::load),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dirhop").join("config.toml"))
}

/// Loads one settings file. A missing file is silent; any other failure is
/// reported on stderr (before the UI starts) and falls back to defaults.
fn load_or_default<T: Default>(path: &Path, load: impl FnOnce(&Path) -> CoreResult<T>) -> T {
    match load(path) {
        Ok(value) => {
            tracing::debug!(path = %path.display(), "loaded settings file");
            value
        }
        Err(CoreError::NotFound(_)) => T::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings file ignored");
            eprintln!("dirhop: ignoring {}: {e}", path.display());
            T::default()
        }
    }
}

/// Sends tracing output to a file so it never touches the terminal or
/// stdout. Logging stays off if the file cannot be opened.
fn init_logging(log_file: Option<&Path>) {
    let path = log_file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| std::env::temp_dir().join("dirhop.log"));
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Resolves the start directory. A path that cannot be canonicalised is
/// kept as given so the navigator reports the load error in the UI.
fn resolve_start_dir(path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    Ok(path.canonicalize().unwrap_or_else(|e| {
        tracing::warn!(
            path = %path.display(),
            error = %e,
            "could not canonicalise start directory"
        );
        path
    }))
}

/// Writes `path` and a newline. On Unix the raw bytes are written so names
/// that are not valid UTF-8 survive the trip to the calling shell.
fn write_emitted_path(out: &mut impl Write, path: &Path) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        out.write_all(path.as_os_str().as_bytes())?;
    }
    #[cfg(not(unix))]
    write!(out, "{}", path.display())?;
    out.write_all(b"\n")?;
    out.flush()
}

fn setup_terminal() -> anyhow::Result<Tty> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tty) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.shell_init {
        print!("{SHELL_INIT}");
        return Ok(());
    }

    init_logging(cli.log_file.as_deref());
    let settings = Settings::load(cli.config.as_deref());
    let start_dir = resolve_start_dir(cli.path)?;
    tracing::info!(start = %start_dir.display(), "starting");

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, start_dir, settings).await;

    restore_terminal(&mut terminal)?;

    match result {
        Ok(Some(path)) => write_emitted_path(&mut io::stdout().lock(), &path)?,
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Runs the event loop until the navigator terminates and returns the
/// emitted path, if any.
async fn run_app(
    terminal: &mut Tty,
    start_dir: PathBuf,
    settings: Settings,
) -> anyhow::Result<Option<PathBuf>> {
    let (tx, mut rx) = mpsc::unbounded_channel::<Completion>();
    let loader = Loader::new(Arc::new(LocalFs::new(settings.config.preview.max_lines)), tx);
    let registry = ActionRegistry::new();

    let env = Environment::from_process(start_dir);
    let (mut nav, requests) = Navigator::new(env, &settings.config, settings.keymap).start();
    loader.dispatch(requests);

    loop {
        // 1. Apply finished I/O
        while let Ok(completion) = rx.try_recv() {
            let (next, requests) = nav.complete(completion);
            nav = next;
            loader.dispatch(requests);
        }

        if nav.is_terminated() {
            break;
        }

        // 2. Render
        let ctx = RenderContext {
            theme: &settings.theme,
            keymap: nav.keymap(),
            registry: &registry,
            show_icons: settings.config.ui.show_icons,
            window_height: nav.scroll_window().window_height(),
            preview_height: nav.preview_viewport(),
        };
        terminal.draw(|f| render(f, &nav.view(), &ctx))?;

        // 3. One key at a time
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if let Some(key) = decode_key(key) {
                    let (next, requests) = nav.handle_key(key);
                    nav = next;
                    loader.dispatch(requests);
                }
            }
        }
    }

    Ok(nav.emitted_path().map(Path::to_path_buf))
}
