// SPDX-License-Identifier: MPL-2.0
use localized_strings::config;
use localized_strings::i18n::LocalizedStrings;
use localized_strings::paths;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: localized-strings [OPTIONS] URL [KEY...]

Loads the dictionary at URL (served from the local cache while it is fresh)
and prints `key = value` for each KEY, or every key when none are given.

Options:
  --lang CODE        Language code to load under (default: config, then \"en\")
  --data-dir DIR     Directory holding the string cache
  --config-dir DIR   Directory holding settings.toml
  -h, --help         Print this help
";

const FALLBACK_LANGUAGE: &str = "en";

struct Flags {
    lang: Option<String>,
    data_dir: Option<String>,
    config_dir: Option<String>,
    url: String,
    keys: Vec<String>,
}

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;

    let mut rest = args
        .finish()
        .into_iter()
        .filter_map(|s| s.into_string().ok());
    let Some(url) = rest.next() else {
        return Err(pico_args::Error::MissingArgument);
    };

    Ok(Some(Flags {
        lang,
        data_dir,
        config_dir,
        url,
        keys: rest.collect(),
    }))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir, flags.config_dir);

    let (cfg, warning) = config::load();
    if let Some(key) = warning {
        tracing::warn!(warning = %key, "using default configuration");
    }

    let lang = flags
        .lang
        .or_else(|| cfg.general.language.clone())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string());

    let strings = match LocalizedStrings::open_default(&cfg) {
        Ok(strings) => strings,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = strings.load(&lang, &flags.url).await {
        eprintln!("error: failed to load {lang} from {}: {err}", flags.url);
        return ExitCode::FAILURE;
    }

    let keys = if flags.keys.is_empty() {
        let mut keys: Vec<String> = strings
            .dictionary(&lang)
            .map(|dictionary| dictionary.keys().map(str::to_string).collect())
            .unwrap_or_default();
        keys.sort();
        keys
    } else {
        flags.keys
    };

    for key in &keys {
        println!("{key} = {}", strings.string_or_key(&lang, key));
    }
    ExitCode::SUCCESS
}
