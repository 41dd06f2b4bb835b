// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, paths, Flags};
use iced_reel::{config, logging};
use std::path::PathBuf;

const HELP: &str = "\
Usage: iced_reel [OPTIONS] [FEED.toml]

Options:
  --lang <id>         UI language (e.g. en-US, fr)
  --config-dir <dir>  Directory holding settings.toml
  --log <filter>      Log level or filter directive (overridden by RUST_LOG)
  -h, --help          Print this help
";

struct Cli {
    lang: Option<String>,
    config_dir: Option<String>,
    log: Option<String>,
    feed_path: Option<PathBuf>,
}

fn parse_args() -> Result<Option<Cli>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let cli = Cli {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        log: args.opt_value_from_str("--log")?,
        feed_path: args.opt_free_from_str()?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: unused arguments: {:?}", rest);
    }
    Ok(Some(cli))
}

fn main() -> iced::Result {
    let cli = match parse_args() {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(cli.config_dir);
    let (config, config_warning) = config::load();
    logging::init(cli.log.as_deref(), &config.logging.level);

    app::run(Flags {
        lang: cli.lang,
        feed_path: cli.feed_path,
        config,
        config_warning,
    })
}
