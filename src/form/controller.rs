//! Launch form controller
//!
//! Holds the live state of one launch form. Renderers read it through the
//! query and accessor methods and write user input back through the
//! mutation methods; every mutation is followed by a [`FormEvent`] sent to
//! the registered observers.

use crate::config::LaunchConfig;
use crate::error::{Error, Result};
use crate::form::control::{Control, ControlStatus, Required};
use crate::form::field::{
    DEVICES_FIELD, DOCKER_INSTALLED_FIELD, HTTP_PROXY_FIELD, HTTPS_PROXY_FIELD, MACHINE_OS_FIELD,
    NO_PROXY_FIELD, OPENVINO_INSTALLED_FIELD, OptionField, OptionValue, START_WITH_FIELD,
};
use crate::form::options::{Device, EnumOption, Launcher, MachineOs};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    OpenVinoInstalled,
    DockerInstalled,
    MachineOs,
    Devices,
    WbLauncher,
    HttpProxy,
    HttpsProxy,
    NoProxy,
}

impl FieldName {
    /// All fields in display order
    pub fn all() -> &'static [FieldName] {
        &[
            FieldName::OpenVinoInstalled,
            FieldName::DockerInstalled,
            FieldName::MachineOs,
            FieldName::Devices,
            FieldName::WbLauncher,
            FieldName::HttpProxy,
            FieldName::HttpsProxy,
            FieldName::NoProxy,
        ]
    }

    /// Look a field up by its form name
    pub fn from_name(name: &str) -> Option<FieldName> {
        match name {
            "openVINOInstalled" => Some(FieldName::OpenVinoInstalled),
            "dockerInstalled" => Some(FieldName::DockerInstalled),
            "machineOS" => Some(FieldName::MachineOs),
            "devices" => Some(FieldName::Devices),
            "wbLauncher" => Some(FieldName::WbLauncher),
            "httpProxy" => Some(FieldName::HttpProxy),
            "httpsProxy" => Some(FieldName::HttpsProxy),
            "noProxy" => Some(FieldName::NoProxy),
            _ => None,
        }
    }

    /// Form name of the field
    pub fn name(&self) -> &'static str {
        match self {
            FieldName::OpenVinoInstalled => "openVINOInstalled",
            FieldName::DockerInstalled => "dockerInstalled",
            FieldName::MachineOs => "machineOS",
            FieldName::Devices => "devices",
            FieldName::WbLauncher => "wbLauncher",
            FieldName::HttpProxy => "httpProxy",
            FieldName::HttpsProxy => "httpsProxy",
            FieldName::NoProxy => "noProxy",
        }
    }

    /// Static descriptor of the field
    pub fn descriptor(&self) -> &'static OptionField {
        match self {
            FieldName::OpenVinoInstalled => &OPENVINO_INSTALLED_FIELD,
            FieldName::DockerInstalled => &DOCKER_INSTALLED_FIELD,
            FieldName::MachineOs => &MACHINE_OS_FIELD,
            FieldName::Devices => &DEVICES_FIELD,
            FieldName::WbLauncher => &START_WITH_FIELD,
            FieldName::HttpProxy => &HTTP_PROXY_FIELD,
            FieldName::HttpsProxy => &HTTPS_PROXY_FIELD,
            FieldName::NoProxy => &NO_PROXY_FIELD,
        }
    }

    /// Whether the field holds a list of values
    pub fn is_multi_select(&self) -> bool {
        matches!(self, FieldName::Devices)
    }
}

impl FromStr for FieldName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        FieldName::from_name(name).ok_or_else(|| Error::UnknownField(name.to_string()))
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregate validity of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// At least one field has no acceptable value
    Incomplete,
    /// Every field holds an allowed value
    Valid,
}

/// Change notification sent after each mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormEvent {
    /// Field that changed; `None` when the whole form was replaced
    pub field: Option<FieldName>,
    /// Form status after the change
    pub status: FormStatus,
}

type Observer = Box<dyn FnMut(&FormEvent)>;

/// Live state of a launch form
pub struct LaunchForm {
    openvino_installed: Control<bool>,
    docker_installed: Control<bool>,
    machine_os: Control<MachineOs>,
    devices: Control<Vec<Device>>,
    start_with: Control<Launcher>,
    http_proxy: Control<bool>,
    https_proxy: Control<bool>,
    no_proxy: Control<bool>,
    observers: Vec<Observer>,
}

fn seed_bool(field: &OptionField) -> Control<bool> {
    Control::new(field.default.and_then(|value| value.as_bool()))
}

fn seed_enum<E: EnumOption + Required>(field: &OptionField) -> Control<E> {
    Control::new(field.default.and_then(E::from_option))
}

impl LaunchForm {
    /// Create a form with every field at its default
    pub fn new() -> Self {
        let default_device = DEVICES_FIELD.default.and_then(Device::from_option);

        Self {
            openvino_installed: seed_bool(&OPENVINO_INSTALLED_FIELD),
            docker_installed: seed_bool(&DOCKER_INSTALLED_FIELD),
            machine_os: seed_enum(&MACHINE_OS_FIELD),
            devices: Control::new(Some(default_device.into_iter().collect())),
            start_with: seed_enum(&START_WITH_FIELD),
            http_proxy: seed_bool(&HTTP_PROXY_FIELD),
            https_proxy: seed_bool(&HTTPS_PROXY_FIELD),
            no_proxy: seed_bool(&NO_PROXY_FIELD),
            observers: Vec::new(),
        }
    }

    /// Create a form holding a saved selection
    pub fn from_config(config: &LaunchConfig) -> Self {
        let mut form = Self::new();
        form.load_config(config);
        form
    }

    /// Register a change observer
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&FormEvent) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, field: Option<FieldName>) {
        let event = FormEvent {
            field,
            status: self.status(),
        };
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }

    fn bool_control(&self, field: FieldName) -> Option<&Control<bool>> {
        match field {
            FieldName::OpenVinoInstalled => Some(&self.openvino_installed),
            FieldName::DockerInstalled => Some(&self.docker_installed),
            FieldName::HttpProxy => Some(&self.http_proxy),
            FieldName::HttpsProxy => Some(&self.https_proxy),
            FieldName::NoProxy => Some(&self.no_proxy),
            _ => None,
        }
    }

    fn bool_control_mut(&mut self, field: FieldName) -> Option<&mut Control<bool>> {
        match field {
            FieldName::OpenVinoInstalled => Some(&mut self.openvino_installed),
            FieldName::DockerInstalled => Some(&mut self.docker_installed),
            FieldName::HttpProxy => Some(&mut self.http_proxy),
            FieldName::HttpsProxy => Some(&mut self.https_proxy),
            FieldName::NoProxy => Some(&mut self.no_proxy),
            _ => None,
        }
    }

    /// Current value of a single-choice field
    ///
    /// The device list has no scalar value and always yields `None`.
    pub fn value(&self, field: FieldName) -> Option<OptionValue> {
        match field {
            FieldName::MachineOs => self.machine_os.value().map(|os| os.option_value()),
            FieldName::WbLauncher => self.start_with.value().map(|l| l.option_value()),
            FieldName::Devices => None,
            _ => self
                .bool_control(field)
                .and_then(|control| control.value().copied())
                .map(OptionValue::Bool),
        }
    }

    /// Whether the field named `name` currently holds `value`
    ///
    /// Unknown names never match.
    pub fn is_option_selected(&self, name: &str, value: OptionValue) -> bool {
        FieldName::from_name(name).is_some_and(|field| self.is_selected(field, value))
    }

    /// Whether `field` currently holds `value`
    pub fn is_selected(&self, field: FieldName, value: OptionValue) -> bool {
        self.value(field) == Some(value)
    }

    /// Whether `device` is in the device list
    pub fn is_device_selected(&self, device: Device) -> bool {
        self.devices
            .value()
            .is_some_and(|devices| devices.contains(&device))
    }

    /// Add `device` if absent, otherwise remove its first occurrence
    pub fn toggle_device(&mut self, device: Device) {
        if self.devices.value().is_none() {
            self.devices.set(Vec::new());
        }

        let mut selected = false;
        if let Some(devices) = self.devices.value_mut() {
            match devices.iter().position(|d| *d == device) {
                Some(index) => {
                    devices.remove(index);
                }
                None => {
                    devices.push(device);
                    selected = true;
                }
            }
        }

        debug!(%device, selected, devices = ?self.devices(), "Toggled device");
        self.notify(Some(FieldName::Devices));
    }

    /// Replace the device list, keeping the first occurrence of repeats
    pub fn set_devices<I>(&mut self, devices: I)
    where
        I: IntoIterator<Item = Device>,
    {
        let mut unique: Vec<Device> = Vec::new();
        for device in devices {
            if !unique.contains(&device) {
                unique.push(device);
            }
        }

        debug!(devices = ?unique, "Set devices");
        self.devices.set(unique);
        self.notify(Some(FieldName::Devices));
    }

    /// Write a single-choice field
    pub fn set_value(&mut self, field: FieldName, value: OptionValue) -> Result<()> {
        let descriptor = field.descriptor();

        if field.is_multi_select() {
            return Err(Error::MultiSelectField(field));
        }
        if descriptor.disabled {
            return Err(Error::DisabledField(field));
        }
        if !descriptor.allows(value) {
            warn!(%field, %value, "Rejected value outside field options");
            return Err(Error::InvalidOption {
                field,
                value: value.to_string(),
            });
        }

        match field {
            FieldName::MachineOs => {
                if let Some(os) = MachineOs::from_option(value) {
                    self.machine_os.set(os);
                }
            }
            FieldName::WbLauncher => {
                if let Some(launcher) = Launcher::from_option(value) {
                    self.start_with.set(launcher);
                }
            }
            _ => {
                if let (Some(control), Some(checked)) =
                    (self.bool_control_mut(field), value.as_bool())
                {
                    control.set(checked);
                }
            }
        }

        debug!(%field, %value, "Set field value");
        self.notify(Some(field));
        Ok(())
    }

    /// Parse user text against the field's options and write it
    pub fn set_from_str(&mut self, field: FieldName, input: &str) -> Result<()> {
        match field.descriptor().parse(input) {
            Some(value) => self.set_value(field, value),
            None => Err(Error::InvalidOption {
                field,
                value: input.to_string(),
            }),
        }
    }

    /// Write a field addressed by its form name; devices take a comma list
    pub fn set_named(&mut self, name: &str, input: &str) -> Result<()> {
        let field: FieldName = name.parse()?;
        if !field.is_multi_select() {
            return self.set_from_str(field, input);
        }

        let mut devices = Vec::new();
        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match field.descriptor().parse(part).and_then(Device::from_option) {
                Some(device) => devices.push(device),
                None => {
                    return Err(Error::InvalidOption {
                        field,
                        value: part.to_string(),
                    });
                }
            }
        }
        self.set_devices(devices);
        Ok(())
    }

    /// Move a single-choice field to its next option, wrapping around
    pub fn select_next_option(&mut self, field: FieldName) -> Result<()> {
        self.step_option(field, true)
    }

    /// Move a single-choice field to its previous option, wrapping around
    pub fn select_prev_option(&mut self, field: FieldName) -> Result<()> {
        self.step_option(field, false)
    }

    fn step_option(&mut self, field: FieldName, forward: bool) -> Result<()> {
        let options = field.descriptor().options;
        let count = options.len();
        if count == 0 {
            return Ok(());
        }

        let current = self
            .value(field)
            .and_then(|value| field.descriptor().index_of(value));
        let next = match current {
            Some(index) if forward => (index + 1) % count,
            Some(0) => count - 1,
            Some(index) => index - 1,
            None => 0,
        };

        self.set_value(field, options[next].value)
    }

    /// Unset a field
    pub fn clear(&mut self, field: FieldName) {
        match field {
            FieldName::MachineOs => self.machine_os.clear(),
            FieldName::WbLauncher => self.start_with.clear(),
            FieldName::Devices => self.devices.clear(),
            _ => {
                if let Some(control) = self.bool_control_mut(field) {
                    control.clear();
                }
            }
        }

        debug!(%field, "Cleared field");
        self.notify(Some(field));
    }

    /// Replace every field with a saved selection
    pub fn load_config(&mut self, config: &LaunchConfig) {
        self.openvino_installed.set(config.openvino_installed);
        self.docker_installed.set(config.docker_installed);
        self.machine_os.set(config.machine_os);
        self.start_with.set(config.start_with);
        self.http_proxy.set(config.http_proxy);
        self.https_proxy.set(config.https_proxy);
        self.no_proxy.set(config.no_proxy);

        let mut devices: Vec<Device> = Vec::new();
        for device in &config.devices {
            if !devices.contains(device) {
                devices.push(*device);
            }
        }
        self.devices.set(devices);

        debug!(?config, "Loaded selection into form");
        self.notify(None);
    }

    /// Export the selection; fails while any field is missing
    pub fn build_config(&self) -> Result<LaunchConfig> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Error::IncompleteForm(missing));
        }

        Ok(LaunchConfig {
            openvino_installed: self.openvino_installed.is_checked(),
            docker_installed: self.docker_installed.is_checked(),
            machine_os: self.machine_os.value().copied().unwrap_or_default(),
            devices: self.devices().to_vec(),
            start_with: self.start_with.value().copied().unwrap_or_default(),
            http_proxy: self.http_proxy.is_checked(),
            https_proxy: self.https_proxy.is_checked(),
            no_proxy: self.no_proxy.is_checked(),
        })
    }

    /// Selected devices in insertion order
    pub fn devices(&self) -> &[Device] {
        self.devices.value().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn machine_os(&self) -> Option<MachineOs> {
        self.machine_os.value().copied()
    }

    pub fn start_with(&self) -> Option<Launcher> {
        self.start_with.value().copied()
    }

    /// HTTP proxy control
    pub fn http_proxy_control(&self) -> &Control<bool> {
        &self.http_proxy
    }

    /// HTTPS proxy control
    pub fn https_proxy_control(&self) -> &Control<bool> {
        &self.https_proxy
    }

    /// No-proxy control
    pub fn no_proxy_control(&self) -> &Control<bool> {
        &self.no_proxy
    }

    /// Required-validator status of one field
    pub fn control_status(&self, field: FieldName) -> ControlStatus {
        match field {
            FieldName::MachineOs => self.machine_os.status(),
            FieldName::WbLauncher => self.start_with.status(),
            FieldName::Devices => self.devices.status(),
            _ => self
                .bool_control(field)
                .map(Control::status)
                .unwrap_or(ControlStatus::Invalid),
        }
    }

    /// Fields currently failing validation
    pub fn missing_fields(&self) -> Vec<FieldName> {
        FieldName::all()
            .iter()
            .copied()
            .filter(|field| self.control_status(*field) == ControlStatus::Invalid)
            .collect()
    }

    pub fn status(&self) -> FormStatus {
        if self.missing_fields().is_empty() {
            FormStatus::Valid
        } else {
            FormStatus::Incomplete
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status() == FormStatus::Valid
    }
}

impl Default for LaunchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LaunchForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LaunchForm")
            .field("openvino_installed", &self.openvino_installed)
            .field("docker_installed", &self.docker_installed)
            .field("machine_os", &self.machine_os)
            .field("devices", &self.devices)
            .field("start_with", &self.start_with)
            .field("http_proxy", &self.http_proxy)
            .field("https_proxy", &self.https_proxy)
            .field("no_proxy", &self.no_proxy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_new_form_uses_defaults() {
        let form = LaunchForm::new();

        for field in FieldName::all() {
            if field.is_multi_select() {
                continue;
            }
            assert_eq!(form.value(*field), field.descriptor().default, "{}", field);
        }
        assert_eq!(form.devices(), &[Device::Cpu]);
        assert!(form.is_valid());
    }

    #[test]
    fn test_toggle_adds_device() {
        let mut form = LaunchForm::new();
        form.toggle_device(Device::Gpu);

        assert_eq!(form.devices(), &[Device::Cpu, Device::Gpu]);
        assert!(form.is_device_selected(Device::Gpu));
    }

    #[test]
    fn test_toggle_removes_device() {
        let mut form = LaunchForm::new();
        form.set_devices([Device::Cpu, Device::Gpu]);
        form.toggle_device(Device::Cpu);

        assert_eq!(form.devices(), &[Device::Gpu]);
        assert!(!form.is_device_selected(Device::Cpu));
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut form = LaunchForm::new();
        for device in [Device::Cpu, Device::Hddl] {
            let before = form.is_device_selected(device);
            form.toggle_device(device);
            form.toggle_device(device);
            assert_eq!(form.is_device_selected(device), before);
        }
    }

    #[test]
    fn test_toggles_never_duplicate() {
        let mut form = LaunchForm::new();
        let sequence = [
            Device::Gpu,
            Device::Ncs2,
            Device::Cpu,
            Device::Gpu,
            Device::Hddl,
            Device::Cpu,
            Device::Ncs2,
            Device::Gpu,
        ];
        for device in sequence {
            form.toggle_device(device);
            let devices = form.devices();
            for (i, d) in devices.iter().enumerate() {
                assert!(!devices[i + 1..].contains(d), "duplicate {}", d);
            }
        }
    }

    #[test]
    fn test_toggle_keeps_order_of_survivors() {
        let mut form = LaunchForm::new();
        form.set_devices([Device::Hddl, Device::Cpu, Device::Ncs2]);

        form.toggle_device(Device::Cpu);
        form.toggle_device(Device::Gpu);

        assert_eq!(form.devices(), &[Device::Hddl, Device::Ncs2, Device::Gpu]);
    }

    #[test]
    fn test_set_devices_drops_repeats() {
        let mut form = LaunchForm::new();
        form.set_devices([Device::Gpu, Device::Cpu, Device::Gpu]);
        assert_eq!(form.devices(), &[Device::Gpu, Device::Cpu]);
    }

    #[test]
    fn test_option_selected_follows_value() {
        let mut form = LaunchForm::new();
        assert!(form.is_option_selected("machineOS", OptionValue::Text("Linux")));

        form.set_value(FieldName::MachineOs, OptionValue::Text("Windows"))
            .unwrap();
        assert!(!form.is_option_selected("machineOS", OptionValue::Text("Linux")));
        assert!(form.is_option_selected("machineOS", OptionValue::Text("Windows")));
    }

    #[test]
    fn test_unknown_field_is_not_selected() {
        let form = LaunchForm::new();
        assert!(!form.is_option_selected("nonexistentField", OptionValue::Bool(true)));
        assert!(!form.is_option_selected("devices", OptionValue::Text("CPU")));
    }

    #[test]
    fn test_set_value_rejects_foreign_values() {
        let mut form = LaunchForm::new();

        assert!(matches!(
            form.set_value(FieldName::MachineOs, OptionValue::Text("Solaris")),
            Err(Error::InvalidOption { .. })
        ));
        assert!(matches!(
            form.set_value(FieldName::HttpProxy, OptionValue::Text("yes")),
            Err(Error::InvalidOption { .. })
        ));
        assert!(matches!(
            form.set_value(FieldName::Devices, OptionValue::Text("GPU")),
            Err(Error::MultiSelectField(FieldName::Devices))
        ));
        assert_eq!(form.machine_os(), Some(MachineOs::Linux));
    }

    #[test]
    fn test_set_from_str() {
        let mut form = LaunchForm::new();
        form.set_from_str(FieldName::WbLauncher, "Plain Docker Command")
            .unwrap();
        assert_eq!(form.start_with(), Some(Launcher::Docker));

        form.set_from_str(FieldName::NoProxy, "yes").unwrap();
        assert!(form.no_proxy_control().is_checked());

        assert!(form.set_from_str(FieldName::NoProxy, "perhaps").is_err());
    }

    #[test]
    fn test_option_cycling_wraps() {
        let mut form = LaunchForm::new();

        form.select_prev_option(FieldName::MachineOs).unwrap();
        assert_eq!(form.machine_os(), Some(MachineOs::Ubuntu));

        form.select_next_option(FieldName::MachineOs).unwrap();
        assert_eq!(form.machine_os(), Some(MachineOs::Linux));

        form.select_next_option(FieldName::HttpsProxy).unwrap();
        assert!(form.https_proxy_control().is_checked());

        form.clear(FieldName::WbLauncher);
        form.select_next_option(FieldName::WbLauncher).unwrap();
        assert_eq!(form.start_with(), Some(Launcher::Pip));
    }

    #[test]
    fn test_removing_all_devices_makes_form_incomplete() {
        let mut form = LaunchForm::new();
        assert_eq!(form.status(), FormStatus::Valid);

        form.toggle_device(Device::Cpu);
        assert_eq!(form.status(), FormStatus::Incomplete);
        assert_eq!(form.missing_fields(), vec![FieldName::Devices]);
        assert_eq!(form.control_status(FieldName::Devices), ControlStatus::Invalid);

        form.toggle_device(Device::Ncs2);
        assert_eq!(form.status(), FormStatus::Valid);
    }

    #[test]
    fn test_cleared_field_fails_validation() {
        let mut form = LaunchForm::new();
        form.clear(FieldName::HttpProxy);

        assert!(!form.http_proxy_control().is_valid());
        assert!(!form.is_option_selected("httpProxy", OptionValue::Bool(false)));
        assert!(matches!(
            form.build_config(),
            Err(Error::IncompleteForm(fields)) if fields == vec![FieldName::HttpProxy]
        ));
    }

    #[test]
    fn test_toggle_after_clear_starts_new_list() {
        let mut form = LaunchForm::new();
        form.clear(FieldName::Devices);
        assert!(!form.is_device_selected(Device::Cpu));

        form.toggle_device(Device::Gpu);
        assert_eq!(form.devices(), &[Device::Gpu]);
    }

    #[test]
    fn test_observers_see_post_change_status() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut form = LaunchForm::new();
        form.subscribe(move |event| sink.borrow_mut().push(*event));

        form.toggle_device(Device::Cpu);
        form.set_value(FieldName::HttpProxy, OptionValue::Bool(true))
            .unwrap();
        form.toggle_device(Device::Gpu);
        let _ = form.set_value(FieldName::MachineOs, OptionValue::Text("BeOS"));

        let events = events.borrow();
        assert_eq!(
            *events,
            vec![
                FormEvent {
                    field: Some(FieldName::Devices),
                    status: FormStatus::Incomplete
                },
                FormEvent {
                    field: Some(FieldName::HttpProxy),
                    status: FormStatus::Incomplete
                },
                FormEvent {
                    field: Some(FieldName::Devices),
                    status: FormStatus::Valid
                },
            ]
        );
    }

    #[test]
    fn test_load_config_sends_one_event() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);

        let mut form = LaunchForm::new();
        form.clear(FieldName::Devices);
        form.subscribe(move |event| sink.borrow_mut().push(*event));

        form.load_config(&LaunchConfig::default());

        assert_eq!(
            *events.borrow(),
            vec![FormEvent {
                field: None,
                status: FormStatus::Valid
            }]
        );
    }

    #[test]
    fn test_config_round_trip_through_form() {
        let config = LaunchConfig {
            openvino_installed: false,
            docker_installed: true,
            machine_os: MachineOs::Windows,
            devices: vec![Device::Gpu, Device::Hddl, Device::Gpu],
            start_with: Launcher::Docker,
            http_proxy: true,
            https_proxy: false,
            no_proxy: true,
        };

        let form = LaunchForm::from_config(&config);
        let built = form.build_config().unwrap();

        assert_eq!(built.devices, vec![Device::Gpu, Device::Hddl]);
        assert_eq!(built.machine_os, MachineOs::Windows);
        assert!(built.http_proxy);
        assert!(!built.openvino_installed);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FieldName::all() {
            assert_eq!(FieldName::from_name(field.name()), Some(*field));
        }
        assert_eq!(FieldName::from_name("machineos"), None);
        assert!(matches!(
            "machineos".parse::<FieldName>(),
            Err(Error::UnknownField(_))
        ));
    }

    #[test]
    fn test_set_named() {
        let mut form = LaunchForm::new();

        form.set_named("machineOS", "windows").unwrap();
        assert_eq!(form.machine_os(), Some(MachineOs::Windows));

        form.set_named("devices", "gpu, NCS2, gpu").unwrap();
        assert_eq!(form.devices(), &[Device::Gpu, Device::Ncs2]);

        assert!(matches!(
            form.set_named("proxy", "yes"),
            Err(Error::UnknownField(_))
        ));
        assert!(matches!(
            form.set_named("devices", "TPU"),
            Err(Error::InvalidOption { .. })
        ));
        assert_eq!(form.devices(), &[Device::Gpu, Device::Ncs2]);
    }
}
