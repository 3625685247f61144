//! Typed option sets for the text-valued fields

use crate::form::field::OptionValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of options backing a text-valued field
pub trait EnumOption: Copy + PartialEq + Default + 'static {
    /// All variants in descriptor order
    fn variants() -> &'static [Self];

    /// The descriptor value this variant stands for
    fn value(&self) -> &'static str;

    /// Index in [`EnumOption::variants`]
    fn to_index(&self) -> usize {
        Self::variants()
            .iter()
            .position(|variant| variant == self)
            .unwrap_or(0)
    }

    /// Variant at `index`, falling back to the default
    fn from_index(index: usize) -> Self {
        Self::variants().get(index).copied().unwrap_or_default()
    }

    /// Variant whose descriptor value equals `value`
    fn from_value(value: &str) -> Option<Self> {
        Self::variants()
            .iter()
            .copied()
            .find(|variant| variant.value() == value)
    }

    /// Variant matching an option value
    fn from_option(value: OptionValue) -> Option<Self> {
        value.as_text().and_then(Self::from_value)
    }

    /// As an option value
    fn option_value(&self) -> OptionValue {
        OptionValue::Text(self.value())
    }
}

/// Operating system of the machine running the Workbench
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
pub enum MachineOs {
    #[default]
    Linux,
    Windows,
    Ubuntu,
}

impl EnumOption for MachineOs {
    fn variants() -> &'static [Self] {
        &[MachineOs::Linux, MachineOs::Windows, MachineOs::Ubuntu]
    }

    fn value(&self) -> &'static str {
        match self {
            MachineOs::Linux => "Linux",
            MachineOs::Windows => "Windows",
            MachineOs::Ubuntu => "Ubuntu",
        }
    }
}

/// Accelerator available on the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Device {
    /// Central processing unit
    #[default]
    Cpu,
    /// Integrated or discrete graphics
    Gpu,
    /// Intel Neural Compute Stick 2
    Ncs2,
    /// High density deep learning accelerator cards
    Hddl,
}

impl EnumOption for Device {
    fn variants() -> &'static [Self] {
        &[Device::Cpu, Device::Gpu, Device::Ncs2, Device::Hddl]
    }

    fn value(&self) -> &'static str {
        match self {
            Device::Cpu => "CPU",
            Device::Gpu => "GPU",
            Device::Ncs2 => "NCS2",
            Device::Hddl => "HDDL",
        }
    }
}

/// How the Workbench gets started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Launcher {
    /// Python wrapper installed with pip
    #[default]
    Pip,
    /// Plain docker command
    Docker,
}

impl EnumOption for Launcher {
    fn variants() -> &'static [Self] {
        &[Launcher::Pip, Launcher::Docker]
    }

    fn value(&self) -> &'static str {
        match self {
            Launcher::Pip => "pip",
            Launcher::Docker => "docker",
        }
    }
}

macro_rules! display_as_value {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.value())
                }
            }
        )*
    };
}

display_as_value!(MachineOs, Device, Launcher);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::field::{DEVICES_FIELD, MACHINE_OS_FIELD, START_WITH_FIELD};

    #[test]
    fn test_variants_match_descriptors() {
        let os: Vec<_> = MachineOs::variants().iter().map(|v| v.option_value()).collect();
        let described: Vec<_> = MACHINE_OS_FIELD.options.iter().map(|o| o.value).collect();
        assert_eq!(os, described);

        let devices: Vec<_> = Device::variants().iter().map(|v| v.option_value()).collect();
        let described: Vec<_> = DEVICES_FIELD.options.iter().map(|o| o.value).collect();
        assert_eq!(devices, described);

        let launchers: Vec<_> = Launcher::variants().iter().map(|v| v.option_value()).collect();
        let described: Vec<_> = START_WITH_FIELD.options.iter().map(|o| o.value).collect();
        assert_eq!(launchers, described);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Device::from_value("NCS2"), Some(Device::Ncs2));
        assert_eq!(Device::from_value("ncs2"), None);
        assert_eq!(Launcher::from_option(OptionValue::Bool(true)), None);
        assert_eq!(MachineOs::from_index(7), MachineOs::Linux);
    }

    #[test]
    fn test_serde_uses_descriptor_values() {
        assert_eq!(serde_json::to_string(&Device::Hddl).unwrap(), "\"HDDL\"");
        assert_eq!(serde_json::to_string(&Launcher::Docker).unwrap(), "\"docker\"");
        assert_eq!(serde_json::to_string(&MachineOs::Ubuntu).unwrap(), "\"Ubuntu\"");
    }
}
