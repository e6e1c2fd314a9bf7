#[macro_use]
extern crate log;
extern crate env_logger;

extern crate mathreader;

use mathreader::config::{self, CONFIG_FILE};
use mathreader::{App, Config, FileStore};

use std::path::PathBuf;

fn usage() -> String {
    let help = &[
        "-c, --config: writes a default config to stdout",
        "-h, --help: shows this message",
    ];

    help.iter().fold(
        String::from("usage: mathreader [-c|--config] [-h|--help]"),
        |mut a, c| {
            a.push_str("\n\t");
            a.push_str(c);
            a
        },
    )
}

fn main() {
    env_logger::Builder::from_default_env()
        .default_format_timestamp(false)
        .init();

    let mut args = ::std::env::args();
    if let Some(next) = args.nth(1) {
        match next.as_str() {
            "-c" | "--config" => {
                info!("generating a default json config");
                let mut stdout = ::std::io::stdout();
                if let Err(err) = Config::default().dump(&mut stdout) {
                    error!("cannot write the config: {}", err);
                    ::std::process::exit(1);
                }
                return;
            }

            "-h" | "--help" | _ => {
                println!("{}", usage());
                return;
            }
        }
    }

    let path = ::std::env::var("MATHREADER_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE));

    let config = match Config::load(&path) {
        Ok(config) => config,
        Err(config::Error::CannotRead(err)) => {
            info!("using the default config ({}: {})", path.display(), err);
            Config::default()
        }
        Err(err) => {
            error!("{}", err);
            ::std::process::exit(2);
        }
    }
    .with_env();

    let store = match FileStore::open(&config.store) {
        Ok(store) => store,
        Err(err) => {
            error!("cannot open the store at {}: {}", config.store.display(), err);
            ::std::process::exit(2);
        }
    };

    let stdin = ::std::io::stdin();
    let stdout = ::std::io::stdout();

    let mut app = App::new(config, Box::new(store)).with_config_path(path);
    if let Err(err) = app.run(stdin.lock(), stdout.lock()) {
        error!("{}", err);
        ::std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_lists_flags() {
        let usage = usage();
        assert!(usage.starts_with("usage: mathreader"));
        assert!(usage.contains("\n\t-c, --config"));
        assert!(usage.contains("\n\t-h, --help"));
    }
}
