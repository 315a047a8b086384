// SPDX-License-Identifier: MPL-2.0
use env_logger::{Builder, Env};
use gap2growth_ui::app::{self, paths, Flags};

const HELP: &str = "\
Gap2Growth desktop client

USAGE:
  gap2growth_ui [OPTIONS]

OPTIONS:
  -h, --help               Print this help
  --lang <LOCALE>          Interface language (e.g. en-US, fr)
  --config-dir <PATH>      Directory holding settings.toml
";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}

fn main() -> iced::Result {
    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("wgpu_hal", log::LevelFilter::Error)
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unrecognized arguments: {remaining:?}");
    }

    paths::init_cli_override(flags.config_dir.clone());
    log::info!("starting {} {}", paths::APP_NAME, env!("CARGO_PKG_VERSION"));
    app::run(flags)
}
