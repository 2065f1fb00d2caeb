// SPDX-License-Identifier: MPL-2.0
use majlis::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
majlis - share recipes and activities

USAGE:
  majlis [OPTIONS]

OPTIONS:
  --lang <en|ar>       Interface language
  --config-dir <DIR>   Directory holding settings.toml
  --data-dir <DIR>     Directory holding storage.cbor
  --route <PATH>       Initial route (/, /main, /food, /activities, ...)
  -h, --help           Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        route: args.opt_value_from_str("--route")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("majlis=info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
