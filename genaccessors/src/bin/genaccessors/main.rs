mod context;
mod examples;
mod output;
mod theme;

use anyhow::{Context, Result};
use clap::{
    ColorChoice, Command, CommandFactory, FromArgMatches, Parser,
    builder::{Styles, styling::AnsiColor},
};
use colored::{Color as ThemeColor, Colorize, control::ShouldColorize};
use log::{debug, info};
use std::fmt::Write;
use std::io;
use std::path::PathBuf;

use context::{DEFAULT_CONFIG_FILE, Overrides, RunContext};
use examples::{EXAMPLES, ExampleGroup};
use output::{GlobalOptions, OutputManager};
use theme::{ICONS, THEME};

const ENVIRONMENT_VARIABLES: &[(&str, &str)] = &[
    ("GENACCESSORS_CONFIG", "Config file used when --config is not given"),
    ("RUST_LOG", "Diagnostic log filter, e.g. genaccessors=debug"),
    ("NO_COLOR", "Disable colored status output"),
];

#[derive(Parser)]
#[command(name = "genaccessors")]
#[command(version)]
#[command(
    about = "Generate Elm lens accessors for record fields",
    long_about = r#"Generates the GenAccessors Elm module: one Accessors.makeOneToOne
lens per record field, written to standard output or to a file.

Without arguments the built-in field list is used. Fields can also come
from a genaccessors.toml file in the current directory or from --field.
Status messages go to stderr, so stdout only ever carries the module.
"#
)]
struct Cli {
    /// Config file (defaults to ./genaccessors.toml when present)
    #[arg(short = 'c', long, env = "GENACCESSORS_CONFIG")]
    config: Option<PathBuf>,

    /// Field to generate an accessor for; repeat to list several
    #[arg(short = 'f', long = "field", value_name = "NAME")]
    fields: Vec<String>,

    /// Write the module to this file instead of standard output
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Reject field names that are not valid Elm identifiers, or repeated
    #[arg(long)]
    strict: bool,

    /// Suppress status output (only errors will be shown)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Enable verbose status output
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn parse_with_styles() -> Self {
        let matches = build_cli_command()
            .styles(help_styles())
            .get_matches();
        Cli::from_arg_matches(&matches).unwrap_or_else(|err| err.exit())
    }
}

fn build_cli_command() -> Command {
    let use_color = detect_color_support();
    let appendix = render_appendix(EXAMPLES, use_color);
    Cli::command()
        .after_long_help(appendix)
        .color(if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        })
}

fn render_appendix(groups: &[ExampleGroup], use_color: bool) -> String {
    let theme = &THEME;
    let mut buffer = String::new();

    let heading = stylize("Examples:", theme.highlight, true, use_color);
    let _ = writeln!(buffer, "{heading}");

    for group in groups {
        let title = stylize(group.title, theme.primary, true, use_color);
        let _ = writeln!(buffer, "  {title}");

        for command in group.commands {
            let arrow = stylize(ICONS.arrow, theme.secondary, false, use_color);
            let command_text = stylize(command, theme.secondary, false, use_color);
            let _ = writeln!(buffer, "    {arrow} {command_text}");
        }

        buffer.push('\n');
    }

    let env_heading = stylize("Environment Variables:", theme.highlight, true, use_color);
    let _ = writeln!(buffer, "{env_heading}");
    for (key, description) in ENVIRONMENT_VARIABLES {
        let key_text = stylize(key, theme.key, true, use_color);
        let value_text = stylize(description, theme.value, false, use_color);
        let _ = writeln!(buffer, "  {key_text}  {value_text}");
    }

    buffer
}

fn stylize(text: &str, color: ThemeColor, bold: bool, use_color: bool) -> String {
    if use_color {
        let styled = text.color(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    } else {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    ShouldColorize::from_env().should_colorize()
}

/// Help colors, matching the status palette in `THEME`.
fn help_styles() -> Styles {
    Styles::styled()
        .usage(AnsiColor::BrightBlue.on_default().bold())
        .header(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Magenta.on_default())
        .placeholder(AnsiColor::BrightBlack.on_default())
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().bold())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse_with_styles();

    let output = OutputManager::new(GlobalOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_color: cli.no_color,
    });

    if let Err(err) = execute(cli, &output) {
        output.error(&format!("Error: {err:#}"));
        std::process::exit(1);
    }
}

fn execute(cli: Cli, output: &OutputManager) -> Result<()> {
    let ctx = RunContext::resolve(Overrides {
        config: cli.config,
        fields: cli.fields,
        output: cli.output,
        strict: cli.strict,
    })?;
    debug!("resolved run context: {ctx:?}");

    match &ctx.config_path {
        Some(path) => output.verbose(&format!("Using config {}", path.display())),
        None => output.verbose(&format!("No {DEFAULT_CONFIG_FILE} found, using defaults")),
    }
    output.key_value("fields", &ctx.fields.len().to_string());
    output.key_value("strict", &ctx.strict.to_string());

    if ctx.fields.is_empty() {
        output.warning("No fields configured; only the module header will be generated");
    }

    if ctx.strict {
        ctx.fields
            .validate_all()
            .context("Field list failed strict validation")?;
    }

    match &ctx.output {
        None => {
            let mut stdout = io::stdout().lock();
            genaccessors::write_module(&mut stdout, ctx.fields.as_slice())
                .context("Failed to write to standard output")?;
        }
        Some(path) => {
            let module = genaccessors::emit(ctx.fields.as_slice());
            let written = genaccessors::write_if_changed(path, &module)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if written {
                info!("wrote {} ({} fields)", path.display(), ctx.fields.len());
                output.success(&format!(
                    "{} Generated {} with {} accessors",
                    ICONS.file,
                    path.display(),
                    ctx.fields.len()
                ));
            } else {
                output.info(&format!("{} is up to date", path.display()));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_repeated_fields() {
        let cli = Cli::try_parse_from(["genaccessors", "-f", "name", "--field", "email", "--strict"])
            .unwrap();
        assert_eq!(cli.fields, ["name", "email"]);
        assert!(cli.strict);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_appendix_lists_examples_and_environment() {
        let appendix = render_appendix(EXAMPLES, false);
        assert!(appendix.starts_with("Examples:\n"));
        assert!(appendix.contains("genaccessors -f name -f email"));
        assert!(appendix.contains("GENACCESSORS_CONFIG"));
    }

    #[test]
    fn test_styled_help_renders_appendix() {
        let mut command = build_cli_command().styles(help_styles());
        let help = command.render_long_help().to_string();
        assert!(help.contains("--strict"));
        assert!(help.contains("Environment Variables:"));
    }
}
