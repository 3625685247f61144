//! WB Launch Constructor - pick how to launch the DL Workbench
//!
//! Answers the launch form from flags and saved selections, or through
//! the interactive wizard when started without arguments.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wb_launch_constructor::config::{self, CONFIG_DIR_NAME, CONFIG_EXTENSION};
use wb_launch_constructor::tui::display::summary_lines;
use wb_launch_constructor::{
    Cli, Error, LaunchConfig, OutputFormat, TuiApp, display_summary, init_locale,
    should_run_interactive,
};

// Initialize i18n for this binary
rust_i18n::i18n!("locales", fallback = "en");

// CLI Output Module
mod cli_output {
    //! CLI 输出美化模块
    //!
    //! 为命令行输出提供统一的颜色和格式样式。

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::stdout;

    /// CLI 主题颜色
    pub struct CliTheme;

    impl CliTheme {
        /// 成功颜色（绿色）
        pub const SUCCESS: Color = Color::Green;
        /// 错误颜色（红色）
        pub const ERROR: Color = Color::Red;
        /// 提示颜色（暗灰色）
        pub const HINT: Color = Color::DarkGrey;
        /// 强调颜色（青色）
        pub const ACCENT: Color = Color::Cyan;
    }

    /// 打印分隔线
    pub fn print_separator() {
        let _ = stdout().execute(Print(&format!("{}\n", "─".repeat(60))));
    }

    /// 打印标题
    pub fn print_title(title: &str) {
        let _ = stdout().execute(Print(style(format!("  {}\n", title)).bold()));
    }

    /// 打印成功消息
    pub fn print_success(msg: &str) {
        let _ = stdout().execute(Print(style("✓ ").with(CliTheme::SUCCESS).bold()));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// 打印错误消息
    pub fn print_error(msg: &str) {
        let _ = stdout().execute(Print(style("✗ ").with(CliTheme::ERROR).bold()));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// 打印提示消息
    pub fn print_hint(msg: &str) {
        let _ = stdout().execute(Print(style("→ ").with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// 打印键值对
    pub fn print_key_value(key: &str, value: &str, value_color: Option<Color>) {
        let key_styled = style(key).with(CliTheme::HINT);
        let value_styled = match value_color {
            Some(color) => style(value).with(color),
            None => style(value).bold(),
        };
        let _ = stdout().execute(Print("  "));
        let _ = stdout().execute(Print(key_styled));
        let _ = stdout().execute(Print(": "));
        let _ = stdout().execute(Print(value_styled));
        let _ = stdout().execute(Print("\n"));
    }

    /// 打印日志文件路径
    pub fn print_log_path(label: &str, path: &str) {
        let _ = stdout().execute(Print(style("  📁 ").with(CliTheme::ACCENT)));
        let _ = stdout().execute(Print(style(format!("{}: ", label)).with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", path)));
    }

    /// 打印空行
    pub fn print_blank() {
        let _ = stdout().execute(Print("\n"));
    }
}

/// Convenience macro for translation
macro_rules! t {
    ($key:expr) => {
        rust_i18n::t!($key)
    };
    ($key:expr, $($tt:tt)*) => {
        rust_i18n::t!($key, $($tt)*)
    };
}

fn main() -> Result<()> {
    // Initialize locale based on system settings
    init_locale();

    if should_run_interactive() {
        return run_interactive_mode();
    }

    run_cli_mode()
}

/// Run the Ratatui wizard
fn run_interactive_mode() -> Result<()> {
    let exe_dir = config::executable_dir();
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = exe_dir
        .join("Log")
        .join(format!("Interactive_{}.log", timestamp));

    // The terminal belongs to the TUI, so log to the file only
    let _guard = setup_file_only_logging(&log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "WB Launch Constructor starting in interactive mode"
    );

    let app = TuiApp::new(exe_dir.join(CONFIG_DIR_NAME))?;
    match app.run()? {
        Some(result) => {
            info!(config_file = %result.config_path.display(), "Interactive session complete");
            display_summary(&result.config, Some(&result.config_path));
        }
        None => {
            info!("User cancelled interactive mode");
        }
    }

    Ok(())
}

/// Run in standard CLI mode
fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();
    let exe_dir = config::executable_dir();

    let log_path = get_log_path(&exe_dir, &cli);
    let _guard = setup_logging(&cli, &log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "WB Launch Constructor starting"
    );

    let base = load_saved_selection(&cli, &exe_dir)?;
    let form = cli.build_form(base.as_ref())?;

    let selection = match form.build_config() {
        Ok(selection) => selection,
        Err(Error::IncompleteForm(missing)) => {
            use cli_output::*;

            error!(?missing, "Selection is incomplete");
            print_error(&t!("missing_fields_error"));
            for field in missing {
                print_hint(field.name());
            }
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if cli.verbose {
        info!(?selection, "Selection resolved");
    }

    print_selection(&selection, cli.format)?;

    if let Some(ref save_path) = cli.save {
        let save_path = with_config_extension(save_path);
        selection.save_to_file(&save_path)?;
        cli_output::print_success(&format!(
            "{} {}",
            t!("config_saved_to"),
            save_path.display()
        ));
    }

    if cli.format == OutputFormat::Text {
        cli_output::print_log_path(&t!("log_file"), &log_path.display().to_string());
    }

    info!(log_file = %log_path.display(), "Log file location");
    Ok(())
}

/// Print the selection in the requested format
fn print_selection(selection: &LaunchConfig, format: OutputFormat) -> Result<()> {
    if let Some(encoded) = format.encode(selection)? {
        print!("{}", encoded);
        return Ok(());
    }

    use cli_output::*;

    print_separator();
    print_title(&t!("configuration_summary"));
    print_separator();
    print_blank();
    for (label, value) in summary_lines(selection) {
        print_key_value(&label, &value, None);
    }
    print_blank();
    Ok(())
}

/// Determine the log file path based on config file or timestamp
fn get_log_path(exe_dir: &Path, cli: &Cli) -> PathBuf {
    let log_dir = exe_dir.join("Log");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    if let Some(config_name) = cli.config_name() {
        let config_log_dir = log_dir.join(&config_name);
        let log_filename = format!("{}_{}.log", config_name, timestamp);
        config_log_dir.join(log_filename)
    } else {
        let log_filename = format!("CLIRun_{}.log", timestamp);
        log_dir.join(log_filename)
    }
}

/// Append the selection extension when the path has none
fn with_config_extension(path: &Path) -> PathBuf {
    if path.extension().is_none() {
        path.with_extension(CONFIG_EXTENSION)
    } else {
        path.to_path_buf()
    }
}

/// Resolve config path - supports shorthand syntax
fn resolve_config_path(exe_dir: &Path, config_path: &Path) -> PathBuf {
    if config_path.exists() {
        return config_path.to_path_buf();
    }

    let with_extension = with_config_extension(config_path);
    if with_extension.exists() {
        return with_extension;
    }

    let filename = config_path.file_name().unwrap_or(config_path.as_os_str());
    let in_config_dir = with_config_extension(&exe_dir.join(CONFIG_DIR_NAME).join(filename));
    if in_config_dir.exists() {
        return in_config_dir;
    }

    config_path.to_path_buf()
}

/// Load the saved selection named by `--config`, if any
fn load_saved_selection(cli: &Cli, exe_dir: &Path) -> Result<Option<LaunchConfig>> {
    let Some(ref config_path) = cli.config else {
        return Ok(None);
    };

    let resolved_path = resolve_config_path(exe_dir, config_path);
    if !resolved_path.exists() {
        anyhow::bail!("{} {}", t!("cli_config_not_found"), resolved_path.display());
    }

    info!(config_file = %resolved_path.display(), "Loading saved selection");
    Ok(Some(LaunchConfig::load_from_file(&resolved_path)?))
}

/// Setup logging for CLI mode (file + console)
fn setup_logging(cli: &Cli, log_path: &Path) -> Result<Option<WorkerGuard>> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (non_blocking, guard) = tracing_appender::non_blocking(open_log_file(log_path)?);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(Some(guard))
}

/// Setup logging for interactive mode (file only, no console)
fn setup_file_only_logging(log_path: &Path) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let (non_blocking, guard) = tracing_appender::non_blocking(open_log_file(log_path)?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(Some(guard))
}

fn open_log_file(log_path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    Ok(std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?)
}
