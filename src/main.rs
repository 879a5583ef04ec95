// SPDX-License-Identifier: MPL-2.0
use gallery_lens::app::{self, paths, Flags};
use gallery_lens::logging;

const HELP: &str = "\
Gallery Lens

USAGE:
  gallery_lens [OPTIONS] [MANIFEST]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --server <URL>         Image server base URL
  --config-dir <DIR>     Directory holding settings.toml
  --download-dir <DIR>   Directory downloads are written to
  -h, --help             Print this help

ARGS:
  <MANIFEST>             JSON gallery manifest to display
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let server = args.opt_value_from_str("--server")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let download_dir = args.opt_value_from_str("--download-dir")?;
    let manifest_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        server,
        config_dir,
        download_dir,
        manifest_path,
    }))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init();
    paths::init_cli_overrides(flags.config_dir.clone(), flags.download_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Gallery Lens");

    app::run(flags)
}
