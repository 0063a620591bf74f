//! buttonkit - button component stylesheet generator
//!
//! Loads a palette from configuration and emits the class-based button
//! ruleset, either once or continuously in watch mode.

mod css;
mod styles;
mod watch;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info, warn};

use buttonkit_core::{
    ButtonPalette, ButtonState, Config, Intent, Interaction, Size, logging, resolve_button_style,
};

/// buttonkit - button component stylesheet generator
#[derive(Parser, Debug)]
#[command(name = "buttonkit", version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (uses XDG lookup if not specified)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print example configuration and exit
    #[arg(long)]
    print_example_config: bool,

    /// Validate configuration and exit (returns non-zero on errors)
    #[arg(long)]
    check_config: bool,

    /// Write the stylesheet to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep running and regenerate the output when the config changes
    #[arg(long, requires = "output")]
    watch: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve one (intent, size, state) combination to a style record
    Resolve {
        /// Color intent class
        #[arg(long, value_enum, default_value = "default")]
        intent: IntentArg,

        /// Size modifier class
        #[arg(long, value_enum, default_value = "default")]
        size: SizeArg,

        /// Interaction state
        #[arg(long, value_enum, default_value = "idle")]
        state: StateArg,

        /// Apply the busy overlay
        #[arg(long)]
        busy: bool,

        /// Apply the disabled overlay
        #[arg(long)]
        disabled: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum IntentArg {
    Default,
    Primary,
    Danger,
}

impl From<IntentArg> for Intent {
    fn from(arg: IntentArg) -> Self {
        match arg {
            IntentArg::Default => Intent::Default,
            IntentArg::Primary => Intent::Primary,
            IntentArg::Danger => Intent::Danger,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SizeArg {
    Default,
    Xs,
    Sm,
    Lg,
}

impl From<SizeArg> for Size {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Default => Size::Default,
            SizeArg::Xs => Size::Xs,
            SizeArg::Sm => Size::Sm,
            SizeArg::Lg => Size::Lg,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StateArg {
    Idle,
    Hover,
    Focus,
    Active,
}

impl From<StateArg> for Interaction {
    fn from(arg: StateArg) -> Self {
        match arg {
            StateArg::Idle => Interaction::Idle,
            StateArg::Hover => Interaction::Hover,
            StateArg::Focus => Interaction::Focus,
            StateArg::Active => Interaction::Active,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    logging::init(args.verbose);

    // --print-example-config: print the example config with comments
    if args.print_example_config {
        print!("{}", buttonkit_core::config::DEFAULT_CONFIG_TOML);
        return ExitCode::SUCCESS;
    }

    // Load configuration using XDG lookup chain
    // If --config is specified, it must exist and be valid (no fallback)
    let load_result = match Config::find_and_load(args.config.as_deref()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(ref source) = load_result.source {
        info!("Loaded configuration from {:?}", source);
    } else if load_result.used_defaults {
        warn!("Using default configuration (no config file found)");
    }

    let config = load_result.config;

    // Validate configuration (strict - fail on invalid values)
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    debug!("Configuration validated successfully");
    debug!("{}", config.summary());

    for warning in config.warnings() {
        warn!("{}", warning);
    }

    // --check-config: just validate and exit
    if args.check_config {
        if let Some(ref source) = load_result.source {
            println!("Configuration valid: {}", source.display());
        } else {
            println!("Configuration valid (using defaults)");
        }
        return ExitCode::SUCCESS;
    }

    // Subcommands run against the loaded config
    if let Some(command) = args.command {
        return handle_command(command, &config);
    }

    // Generate the stylesheet
    let stylesheet = css::render(&config, load_result.source.as_deref());

    let Some(output) = args.output else {
        print!("{}", stylesheet);
        return ExitCode::SUCCESS;
    };

    if let Err(e) = std::fs::write(&output, &stylesheet) {
        eprintln!("Error: failed to write {}: {}", output.display(), e);
        return ExitCode::FAILURE;
    }
    info!("Wrote {} ({} bytes)", output.display(), stylesheet.len());

    if args.watch {
        let Some(ref config_path) = load_result.source else {
            eprintln!("Error: --watch needs a config file on disk, but none was found");
            return ExitCode::FAILURE;
        };
        if let Err(e) = watch::run(config_path, &output) {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// Handle CLI subcommands.
fn handle_command(command: Command, config: &Config) -> ExitCode {
    match command {
        Command::Resolve {
            intent,
            size,
            state,
            busy,
            disabled,
        } => {
            let intent = Intent::from(intent);
            let size = Size::from(size);
            let button_state = ButtonState {
                interaction: Interaction::from(state),
                busy,
                disabled,
            };

            let palette = ButtonPalette::from_config(config);
            let record = resolve_button_style(&palette, intent, size, button_state);
            let classes = styles::class_list(intent, size, button_state);

            let out = serde_json::json!({
                "classes": classes,
                "style": record,
            });

            match serde_json::to_string_pretty(&out) {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}
