//! Command line front end for the theme resolver.
//!
//! Persists the preference in a JSON file (the native equivalent of browser
//! local storage) and asks the OS for its appearance unless `--system`
//! forces one.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use tracing::Level;

use vectorlab_theme::{
    FileStore, Headless, NullStore, OsSignal, PreferenceStore, ResolverConfig, SystemSignal,
    ThemeMode, ThemeResolver, ThemeSurface, DEFAULT_STORAGE_KEY,
};

#[derive(Parser, Debug)]
#[command(name = "vectorlab-theme", version, about = "Resolve and persist the VectorLab color theme")]
struct Cli {
    /// Preference file (defaults to <config dir>/vectorlab/preferences.json)
    #[arg(long, env = "VECTORLAB_THEME_STORE", global = true)]
    store: Option<PathBuf>,

    /// Key the preference is stored under
    #[arg(long, default_value = DEFAULT_STORAGE_KEY, global = true)]
    key: String,

    /// Use this system preference instead of asking the OS
    #[arg(long, global = true)]
    system: Option<ThemeMode>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the startup theme, persisting it when nothing was stored
    Init,
    /// Print the stored preference
    Get,
    /// Store an explicit choice
    Set { mode: ThemeMode },
    /// Flip the active theme and store it
    Toggle,
    /// Print the system preference
    System,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn setup_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_store(path: Option<PathBuf>) -> Box<dyn PreferenceStore> {
    match path {
        Some(path) => Box::new(FileStore::new(path)),
        None => match FileStore::at_default_location() {
            Ok(store) => Box::new(store),
            Err(err) => {
                tracing::warn!(error = %err, "no preference location, running without storage");
                Box::new(NullStore)
            }
        },
    }
}

/// The OS signal, unless `forced` pins the answer.
fn system_signal(forced: Option<ThemeMode>) -> impl Fn() -> Option<bool> {
    move || match forced {
        Some(mode) => Some(mode.is_dark()),
        None => OsSignal.prefers_dark(),
    }
}

/// Runs one subcommand, returning the mode to print (`None` for "unset").
fn run<S, P, T>(
    command: Command,
    resolver: &mut ThemeResolver<S, P, T>,
) -> Result<Option<ThemeMode>>
where
    S: PreferenceStore,
    P: SystemSignal,
    T: ThemeSurface,
{
    let mode = match command {
        Command::Init => Some(resolver.init_theme()),
        Command::Get => resolver.read_stored_preference(),
        Command::Set { mode } => {
            resolver.set_theme(mode);
            anyhow::ensure!(
                resolver.read_stored_preference() == Some(mode),
                "{mode} was applied but could not be saved; rerun with -v for details"
            );
            Some(mode)
        }
        Command::Toggle => Some(resolver.toggle()),
        Command::System => Some(resolver.detect_system_preference()),
    };
    Ok(mode)
}

fn styled(mode: ThemeMode) -> console::StyledObject<ThemeMode> {
    match mode {
        ThemeMode::Dark => style(mode).magenta().bold(),
        ThemeMode::Light => style(mode).yellow().bold(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = ResolverConfig::default().with_storage_key(cli.key);
    let signal = system_signal(cli.system);
    let mut resolver =
        ThemeResolver::new(open_store(cli.store), signal, Headless).with_config(config);

    match run(cli.command, &mut resolver)? {
        Some(mode) => println!("{}", styled(mode)),
        None => println!("{}", style("unset").dim()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vectorlab_theme::{FixedSignal, MemoryStore, RecordingSurface};

    fn page(store: MemoryStore) -> ThemeResolver<MemoryStore, FixedSignal, RecordingSurface> {
        ThemeResolver::new(store, FixedSignal::dark(), RecordingSurface::new())
    }

    #[test]
    fn test_parse_set_mode() {
        let cli = Cli::try_parse_from(["vectorlab-theme", "set", "dark"]).unwrap();
        assert!(matches!(cli.command, Command::Set { mode: ThemeMode::Dark }));
        assert_eq!(cli.key, DEFAULT_STORAGE_KEY);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["vectorlab-theme", "set", "Dark"]).is_err());
        assert!(Cli::try_parse_from(["vectorlab-theme", "set", "purple"]).is_err());
        assert!(Cli::try_parse_from(["vectorlab-theme", "system", "--system", "dim"]).is_err());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "vectorlab-theme",
            "-vv",
            "toggle",
            "--system",
            "dark",
            "--key",
            "other",
            "--store",
            "/tmp/prefs.json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Toggle));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.system, Some(ThemeMode::Dark));
        assert_eq!(cli.key, "other");
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/prefs.json")));
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["vectorlab-theme"]).is_err());
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::DEBUG);
        assert_eq!(log_level(2), Level::TRACE);
        assert_eq!(log_level(7), Level::TRACE);
    }

    #[test]
    fn test_forced_system_signal() {
        assert_eq!(system_signal(Some(ThemeMode::Dark))(), Some(true));
        assert_eq!(system_signal(Some(ThemeMode::Light))(), Some(false));
    }

    #[test]
    fn test_run_set_persists() {
        let mut resolver = page(MemoryStore::new());
        let shown = run(Command::Set { mode: ThemeMode::Light }, &mut resolver).unwrap();
        assert_eq!(shown, Some(ThemeMode::Light));
        assert_eq!(resolver.read_stored_preference(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_run_set_fails_when_store_rejects_write() {
        let mut resolver = page(MemoryStore::new().read_only());
        let err = run(Command::Set { mode: ThemeMode::Dark }, &mut resolver).unwrap_err();
        assert!(err.to_string().contains("could not be saved"));
        assert_eq!(resolver.current(), Some(ThemeMode::Dark));
    }

    #[test]
    fn test_run_get_unset_and_stored() {
        let mut empty = page(MemoryStore::new());
        assert_eq!(run(Command::Get, &mut empty).unwrap(), None);

        let mut stored = page(MemoryStore::new().with(DEFAULT_STORAGE_KEY, "light"));
        assert_eq!(run(Command::Get, &mut stored).unwrap(), Some(ThemeMode::Light));
    }

    #[test]
    fn test_run_init_toggle_and_system() {
        let mut resolver = page(MemoryStore::new());
        assert_eq!(run(Command::System, &mut resolver).unwrap(), Some(ThemeMode::Dark));
        assert_eq!(run(Command::Init, &mut resolver).unwrap(), Some(ThemeMode::Dark));
        assert_eq!(run(Command::Toggle, &mut resolver).unwrap(), Some(ThemeMode::Light));
        assert_eq!(resolver.read_stored_preference(), Some(ThemeMode::Light));
    }
}
