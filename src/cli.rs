//! CLI argument parsing with clap

use crate::config::LaunchConfig;
use crate::error::Result;
use crate::form::{Device, EnumOption, FieldName, LaunchForm, Launcher, MachineOs, OptionValue};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the final selection is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned label/value lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// TOML, the same layout as a saved selection
    Toml,
}

impl OutputFormat {
    /// Encode a selection for machine-readable formats
    ///
    /// Returns `None` for [`OutputFormat::Text`], which is printed as styled
    /// label/value lines by the binary.
    pub fn encode(&self, selection: &LaunchConfig) -> Result<Option<String>> {
        match self {
            OutputFormat::Text => Ok(None),
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(selection)? + "\n")),
            OutputFormat::Toml => Ok(Some(selection.to_toml()?)),
        }
    }
}

/// WB Launch Constructor - pick how to launch the DL Workbench
///
/// Answers the launch form from a saved selection and/or flags and prints
/// the result. Run without arguments for the interactive wizard.
#[derive(Parser, Debug)]
#[command(name = "wb-launch-constructor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Saved selection to start from (TOML format)
    ///
    /// Accepts a path, a path without extension, or a bare name looked up
    /// in the Config directory next to the executable. Flags override it.
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// OpenVINO toolkit is already installed
    #[arg(long, value_name = "BOOL")]
    pub openvino_installed: Option<bool>,

    /// Docker is already installed
    #[arg(long, value_name = "BOOL")]
    pub docker_installed: Option<bool>,

    /// Operating system of the host
    #[arg(long = "os", value_enum)]
    pub machine_os: Option<MachineOs>,

    /// Accelerators on the host (replaces the saved list)
    #[arg(short = 'd', long = "device", num_args = 1.., value_enum)]
    pub devices: Option<Vec<Device>>,

    /// Start the Workbench with the Python wrapper or plain Docker
    #[arg(long, value_enum)]
    pub start_with: Option<Launcher>,

    /// An HTTP proxy is required
    #[arg(long, value_name = "BOOL")]
    pub http_proxy: Option<bool>,

    /// An HTTPS proxy is required
    #[arg(long, value_name = "BOOL")]
    pub https_proxy: Option<bool>,

    /// A no-proxy list is required
    #[arg(long, value_name = "BOOL")]
    pub no_proxy: Option<bool>,

    /// Save the resulting selection to this file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Output format of the printed selection
    #[arg(short = 'f', long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long)]
    pub json_log: bool,
}

impl Cli {
    /// Get config file name (without extension) for log naming
    pub fn config_name(&self) -> Option<String> {
        self.config.as_ref().and_then(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
    }

    /// Single-choice overrides given on the command line, in field order
    pub fn overrides(&self) -> Vec<(FieldName, OptionValue)> {
        let mut overrides = Vec::new();

        if let Some(installed) = self.openvino_installed {
            overrides.push((FieldName::OpenVinoInstalled, OptionValue::Bool(installed)));
        }
        if let Some(installed) = self.docker_installed {
            overrides.push((FieldName::DockerInstalled, OptionValue::Bool(installed)));
        }
        if let Some(os) = self.machine_os {
            overrides.push((FieldName::MachineOs, os.option_value()));
        }
        if let Some(launcher) = self.start_with {
            overrides.push((FieldName::WbLauncher, launcher.option_value()));
        }
        if let Some(proxy) = self.http_proxy {
            overrides.push((FieldName::HttpProxy, OptionValue::Bool(proxy)));
        }
        if let Some(proxy) = self.https_proxy {
            overrides.push((FieldName::HttpsProxy, OptionValue::Bool(proxy)));
        }
        if let Some(proxy) = self.no_proxy {
            overrides.push((FieldName::NoProxy, OptionValue::Bool(proxy)));
        }

        overrides
    }

    /// Apply CLI arguments on top of the form
    /// CLI arguments take precedence over the saved selection
    pub fn apply_to(&self, form: &mut LaunchForm) -> Result<()> {
        for (field, value) in self.overrides() {
            form.set_value(field, value)?;
        }
        if let Some(ref devices) = self.devices {
            form.set_devices(devices.iter().copied());
        }
        Ok(())
    }

    /// Build the form from a saved selection (or the defaults) plus overrides
    pub fn build_form(&self, base: Option<&LaunchConfig>) -> Result<LaunchForm> {
        let mut form = match base {
            Some(selection) => LaunchForm::from_config(selection),
            None => LaunchForm::new(),
        };
        self.apply_to(&mut form)?;
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["wb-launch-constructor"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_no_flags_keeps_defaults() {
        let cli = parse(&["--format", "json"]);
        assert!(cli.overrides().is_empty());
        assert_eq!(cli.format, OutputFormat::Json);

        let form = cli.build_form(None).unwrap();
        assert_eq!(form.build_config().unwrap(), LaunchConfig::default());
    }

    #[test]
    fn test_flags_override_saved_selection() {
        let saved = LaunchConfig {
            machine_os: MachineOs::Ubuntu,
            devices: vec![Device::Gpu],
            ..LaunchConfig::default()
        };
        let cli = parse(&[
            "--os",
            "windows",
            "--docker-installed",
            "false",
            "--start-with",
            "docker",
        ]);

        let selection = cli.build_form(Some(&saved)).unwrap().build_config().unwrap();
        assert_eq!(selection.machine_os, MachineOs::Windows);
        assert!(!selection.docker_installed);
        assert_eq!(selection.start_with, Launcher::Docker);
        assert_eq!(selection.devices, vec![Device::Gpu]);
    }

    #[test]
    fn test_device_flag_replaces_list_without_duplicates() {
        let cli = parse(&["-d", "hddl", "cpu", "hddl"]);
        let form = cli.build_form(None).unwrap();
        assert_eq!(form.devices(), &[Device::Hddl, Device::Cpu]);
    }

    #[test]
    fn test_encode_formats() {
        let selection = LaunchConfig {
            devices: vec![Device::Gpu, Device::Ncs2],
            ..LaunchConfig::default()
        };

        assert!(OutputFormat::Text.encode(&selection).unwrap().is_none());

        let json = OutputFormat::Json.encode(&selection).unwrap().unwrap();
        let parsed: LaunchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, selection);
        assert!(json.contains("\"NCS2\""));

        let toml = OutputFormat::Toml.encode(&selection).unwrap().unwrap();
        assert!(toml.contains("start_with = \"pip\""));
    }

    #[test]
    fn test_rejects_unknown_option() {
        let args = ["wb-launch-constructor", "--os", "macos"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_config_name() {
        let cli = parse(&["-C", "Config/lab.toml"]);
        assert_eq!(cli.config_name().as_deref(), Some("lab"));
    }
}
