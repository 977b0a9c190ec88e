//! Main app runner

use std::process::ExitCode;

use crate::application::ports::{ScanCodeResolver, SyntheticInputSink};
use crate::application::InputInjector;
use crate::domain::{KeyParseError, VirtualKey};
use crate::infrastructure::{create_sink, SystemClock};

use super::args::{Cli, Commands};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

type BoxedInjector =
    InputInjector<Box<dyn SyntheticInputSink>, Box<dyn ScanCodeResolver>, SystemClock>;

/// Run the CLI
pub fn run(cli: Cli) -> ExitCode {
    let mut presenter = Presenter::new();

    // A bare invocation runs the alt-tab gesture.
    match cli.command.unwrap_or(Commands::AltTab) {
        Commands::Keys => {
            list_keys(&presenter);
            ExitCode::from(EXIT_SUCCESS)
        }
        Commands::Press { key } => run_press(&mut presenter, cli.dry_run, &key),
        Commands::Release { key } => run_release(&mut presenter, cli.dry_run, &key),
        Commands::Tap { key } => run_tap(&mut presenter, cli.dry_run, &key),
        Commands::AltTab => run_alt_tab(&mut presenter, cli.dry_run),
    }
}

fn list_keys(presenter: &Presenter) {
    for key in VirtualKey::ALL {
        presenter.key_value(&key.to_string(), &format!("{:#04x}", key.code()));
    }
}

fn parse_key(presenter: &Presenter, name: &str) -> Result<VirtualKey, ExitCode> {
    name.parse().map_err(|e: KeyParseError| {
        presenter.error(&e.to_string());
        ExitCode::from(EXIT_USAGE_ERROR)
    })
}

fn build_injector(presenter: &Presenter, dry_run: bool) -> Result<BoxedInjector, ExitCode> {
    match create_sink(dry_run) {
        Ok((sink, resolver, _backend)) => {
            if dry_run {
                presenter.info("Dry run: events are built and discarded");
            }
            Ok(InputInjector::new(sink, resolver, SystemClock::new()))
        }
        Err(e) => {
            presenter.error(&e.to_string());
            Err(ExitCode::from(EXIT_ERROR))
        }
    }
}

fn run_press(presenter: &mut Presenter, dry_run: bool, name: &str) -> ExitCode {
    let key = match parse_key(presenter, name) {
        Ok(key) => key,
        Err(code) => return code,
    };
    let injector = match build_injector(presenter, dry_run) {
        Ok(injector) => injector,
        Err(code) => return code,
    };

    match injector.press_key(key) {
        Ok(()) => {
            presenter.success(&format!("Pressed {}", key));
            presenter.warn(&format!(
                "{} stays held until 'synthkey release {}' is sent",
                key, key
            ));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_release(presenter: &mut Presenter, dry_run: bool, name: &str) -> ExitCode {
    let key = match parse_key(presenter, name) {
        Ok(key) => key,
        Err(code) => return code,
    };
    let injector = match build_injector(presenter, dry_run) {
        Ok(injector) => injector,
        Err(code) => return code,
    };

    match injector.release_key(key) {
        Ok(()) => {
            presenter.success(&format!("Released {}", key));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_tap(presenter: &mut Presenter, dry_run: bool, name: &str) -> ExitCode {
    let key = match parse_key(presenter, name) {
        Ok(key) => key,
        Err(code) => return code,
    };
    let injector = match build_injector(presenter, dry_run) {
        Ok(injector) => injector,
        Err(code) => return code,
    };

    match injector.press_and_release(key) {
        Ok(()) => {
            presenter.success(&format!("Tapped {}", key));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run_alt_tab(presenter: &mut Presenter, dry_run: bool) -> ExitCode {
    let injector = match build_injector(presenter, dry_run) {
        Ok(injector) => injector,
        Err(code) => return code,
    };

    presenter.start_spinner("Holding the task switcher open...");
    match injector.alt_tab() {
        Ok(()) => {
            presenter.spinner_success("Alt-tab gesture sent");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}
