use std::fs;
use std::path::Path;

use clap::Parser;

use fqlint::cli::{Cli, ColorChoice, Commands, ConfigAction, InitArgs, LintArgs, ValidatorsArgs};
use fqlint::config::{Config, ConfigLoader, FileConfigLoader};
use fqlint::linter::{LintMode, LintSummary, Linter};
use fqlint::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use fqlint::validators::{ValidationLevel, ValidatorSet};
use fqlint::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Lint(args) => run_lint(args, &cli),
        Commands::Validators(args) => run_validators(args),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_lint(args: &LintArgs, cli: &Cli) -> i32 {
    match run_lint_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.suggestion() {
                eprintln!("  help: {hint}");
            }
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_lint_impl(args: &LintArgs, cli: &Cli) -> fqlint::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Build the linter
    let linter = Linter::new(
        ValidatorSet::default(),
        config.validation.single_level,
        config.validation.paired_level,
        config.validation.mode,
    );

    // 4. Report which validators will run
    if cli.verbose >= 1 && !cli.quiet {
        print_roster(&linter);
    }

    // 5. Lint one file or a pair of files
    let summary = match &args.read_two {
        Some(read_two) => linter.lint_pair(&args.read_one, read_two)?,
        None => linter.lint_file(&args.read_one)?,
    };

    // 6. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &summary, color_mode, linter.mode())?;

    // 7. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 8. Determine exit code
    if summary.has_violations() {
        Ok(EXIT_VALIDATION_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> fqlint::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

const fn apply_cli_overrides(config: &mut Config, args: &LintArgs) {
    if let Some(level) = args.single_level {
        config.validation.single_level = level;
    }

    if let Some(level) = args.paired_level {
        config.validation.paired_level = level;
    }

    if let Some(mode) = args.lint_mode {
        config.validation.mode = mode;
    }
}

fn print_roster(linter: &Linter) {
    let single = linter.validators().single_codes(linter.single_level());
    let paired = linter.validators().paired_codes(linter.paired_level());

    eprintln!(
        "Single-read validators at level {}: [{}]",
        linter.single_level(),
        single.join(", ")
    );
    eprintln!(
        "Paired-read validators at level {}: [{}]",
        linter.paired_level(),
        paired.join(", ")
    );
}

fn format_output(
    format: OutputFormat,
    summary: &LintSummary,
    color_mode: ColorMode,
    mode: LintMode,
) -> fqlint::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode, mode).format(summary),
        OutputFormat::Json => JsonFormatter.format(summary),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> fqlint::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_validators(args: &ValidatorsArgs) -> i32 {
    let validators = ValidatorSet::default();
    print!("{}", format_validator_roster(&validators, args.level));
    EXIT_SUCCESS
}

fn format_validator_roster(validators: &ValidatorSet, level: Option<ValidationLevel>) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("Single-read validators:\n");
    for validator in validators.single_validators() {
        if level.is_none_or(|max| validator.level() <= max) {
            let _ = writeln!(
                output,
                "  {}  {:<8} {}",
                validator.code(),
                validator.level(),
                validator.description()
            );
        }
    }

    output.push_str("\nPaired-read validators:\n");
    for validator in validators.paired_validators() {
        if level.is_none_or(|max| validator.level() <= max) {
            let _ = writeln!(
                output,
                "  {}  {:<8} {}",
                validator.code(),
                validator.level(),
                validator.description()
            );
        }
    }

    output
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> fqlint::Result<()> {
    let output_path = &args.output;

    // Check if file already exists
    if output_path.exists() && !args.force {
        return Err(fqlint::FqLintError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    // Generate template config
    let template = generate_config_template();

    // Write to file
    fs::write(output_path, template)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn generate_config_template() -> String {
    r#"# fqlint configuration file
# See: https://github.com/fqlint/fqlint for documentation

[validation]
# Level for single-read validators: "minimum", "low", or "high".
# Each validator carries its own level and runs when that level is at
# or below the configured one.
single_level = "low"

# Level for paired-read validators (used when two files are given)
paired_level = "low"

# "error" stops at the first violation, "report" collects all of them
mode = "error"
"#
    .to_string()
}

fn run_config(args: &fqlint::cli::ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_validate_impl(config_path: &Path) -> fqlint::Result<()> {
    // Levels and mode are validated while the TOML deserializes, so a
    // clean parse is a valid configuration.
    let loader = FileConfigLoader::new();
    loader.load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> fqlint::Result<String> {
    // Load configuration (from file or defaults)
    let config = load_config(config_path, false)?;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        _ => Ok(format_config_text(&config)),
    }
}

fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    output.push_str("[validation]\n");
    let _ = writeln!(
        output,
        "  single_level = \"{}\"",
        config.validation.single_level
    );
    let _ = writeln!(
        output,
        "  paired_level = \"{}\"",
        config.validation.paired_level
    );
    let _ = writeln!(output, "  mode = \"{}\"", config.validation.mode);

    output
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
