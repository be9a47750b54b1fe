//! window-layout: inspect and snapshot the stored window layout
//!
//! Usage:
//!   window-layout [--namespace <path>] load
//!   window-layout [--namespace <path>] snapshot
//!   window-layout [--namespace <path>] restore

use std::process::ExitCode;
use window_layout::StoreConfig;

enum Command {
    Load,
    Snapshot,
    Restore,
}

fn parse_args() -> Result<(StoreConfig, Command), String> {
    let mut config = StoreConfig::default();
    let mut command = None;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--namespace" => {
                let namespace = args
                    .next()
                    .ok_or_else(|| "--namespace requires a value".to_string())?;
                config = StoreConfig::new(namespace);
            }
            "load" => command = Some(Command::Load),
            "snapshot" => command = Some(Command::Snapshot),
            "restore" => command = Some(Command::Restore),
            other => return Err(format!("Unknown argument: {other}")),
        }
    }

    Ok((config, command.unwrap_or(Command::Load)))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let (config, command) = match parse_args() {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("Usage: window-layout [--namespace <path>] [load|snapshot|restore]");
            return ExitCode::from(2);
        }
    };

    run(&config, command)
}

#[cfg(windows)]
fn run(config: &StoreConfig, command: Command) -> ExitCode {
    use window_layout::WindowLayoutStore;
    use window_layout::platform::RegistryStore;
    use window_layout::platform::window::{apply_layout, get_active_window};

    let store = WindowLayoutStore::new(RegistryStore::new(config));

    match command {
        Command::Load => {
            let layout = store.load();
            println!("Namespace: HKCU\\{}", store.backend().namespace());
            println!("{layout:#?}");
        }
        Command::Snapshot => {
            let hwnd = match get_active_window() {
                Ok(hwnd) => hwnd,
                Err(err) => {
                    log::error!("Cannot snapshot: {err}");
                    return ExitCode::FAILURE;
                }
            };

            let layout = store.query_live(&hwnd);
            store.save(&layout);
            println!("Saved foreground window {:?}", hwnd);
            println!("{layout:#?}");
        }
        Command::Restore => {
            let layout = store.load();
            let applied = get_active_window().and_then(|hwnd| apply_layout(hwnd, &layout));
            if let Err(err) = applied {
                log::error!("Cannot restore layout: {err}");
                return ExitCode::FAILURE;
            }
            println!("{layout:#?}");
        }
    }

    ExitCode::SUCCESS
}

#[cfg(not(windows))]
fn run(config: &StoreConfig, _command: Command) -> ExitCode {
    log::error!(
        "No registry backend on this platform (namespace {})",
        config.namespace
    );
    ExitCode::FAILURE
}
