use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::cache_dir;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::LineDelimiter;

const HOTKEYS_TEXT: &str = "HOTKEYS:
- F1 / F2 / F3: Switch between the servers, configuration and themes pages.
- Tab / CTRL+n: Select the next server.
- CTRL+p: Select the previous server.
- Up / Down: Browse the stdin history of the selected server, or the theme list.
- PageUp / PageDown, CTRL+u / CTRL+d: Scroll the console.
- Enter: Send stdin to the selected server, or apply the selected theme.
- CTRL+s: Save the configuration.
- CTRL+t: Terminate all servers (press twice).
- CTRL+c: Quit.";

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for servdeck")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running servdeck with environment variable RUST_LOG=servdeck")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn arg_interval(key: ConfigKey, env: &'static str, help: &str) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env)
        .num_args(1)
        .help(format!("{help} [default: {}]", Config::default(key)))
        .global(true);
}

pub fn build() -> Command {
    let hotkeys_text = HOTKEYS_TEXT
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            return Paint::new(line).underline().bold().to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("servdeck")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(hotkeys_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("SERVDECK_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::Url.to_string())
                .short('u')
                .long(ConfigKey::Url.to_string())
                .env("SERVDECK_URL")
                .num_args(1)
                .help(format!("Address of the server controller dashboard. The socket address is derived from it. [default: {}]", Config::default(ConfigKey::Url)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::LineDelimiter.to_string())
                .short('d')
                .long(ConfigKey::LineDelimiter.to_string())
                .env("SERVDECK_LINE_DELIMITER")
                .num_args(1)
                .help(format!("Separator the backend uses between console output lines. [default: {}]", Config::default(ConfigKey::LineDelimiter)))
                .value_parser(PossibleValuesParser::new(LineDelimiter::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::FullOutput.to_string())
                .long(ConfigKey::FullOutput.to_string())
                .env("SERVDECK_FULL_OUTPUT")
                .num_args(1)
                .help(format!("Ask the backend for the full console output in each roster refresh. [default: {}]", Config::default(ConfigKey::FullOutput)))
                .value_parser(PossibleValuesParser::new(["true", "false"]))
                .global(true),
        )
        .arg(arg_interval(
            ConfigKey::RefreshInterval,
            "SERVDECK_REFRESH_INTERVAL",
            "Time in milliseconds between roster refresh requests.",
        ))
        .arg(arg_interval(
            ConfigKey::SpecializationInterval,
            "SERVDECK_SPECIALIZATION_INTERVAL",
            "Time in milliseconds between player count title updates.",
        ))
        .arg(arg_interval(
            ConfigKey::HealthCheckInterval,
            "SERVDECK_HEALTH_CHECK_INTERVAL",
            "Time in milliseconds before the first health check after losing the connection.",
        ))
        .arg(arg_interval(
            ConfigKey::HealthCheckMaxInterval,
            "SERVDECK_HEALTH_CHECK_MAX_INTERVAL",
            "Upper bound in milliseconds for the delay between health checks. The delay doubles after each failed check.",
        ))
        .arg(arg_interval(
            ConfigKey::HealthCheckTimeout,
            "SERVDECK_HEALTH_CHECK_TIMEOUT",
            "Time to wait in milliseconds before timing out a health check.",
        ))
        .arg(
            Arg::new(ConfigKey::StateFile.to_string())
                .long(ConfigKey::StateFile.to_string())
                .env("SERVDECK_STATE_FILE")
                .num_args(1)
                .help(format!("Path to the file the selected theme is saved to. [default: {}]", Config::default(ConfigKey::StateFile)))
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = cache_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
