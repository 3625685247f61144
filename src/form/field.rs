//! Static field descriptors
//!
//! Each configurable setting is described once, at compile time, by an
//! [`OptionField`]: a label, the ordered options a user may pick from and
//! the value the form starts with.

use std::fmt;

/// Value carried by a single option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionValue {
    Bool(bool),
    Text(&'static str),
}

impl OptionValue {
    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(value) => Some(*value),
            OptionValue::Text(_) => None,
        }
    }

    /// Text payload, if any
    pub fn as_text(&self) -> Option<&'static str> {
        match self {
            OptionValue::Text(value) => Some(value),
            OptionValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(value) => write!(f, "{}", value),
            OptionValue::Text(value) => f.write_str(value),
        }
    }
}

/// One selectable entry of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioOption {
    pub label: &'static str,
    pub value: OptionValue,
}

/// Immutable description of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionField {
    pub label: &'static str,
    pub options: &'static [RadioOption],
    pub disabled: bool,
    pub default: Option<OptionValue>,
}

impl OptionField {
    /// Whether `value` is one of this field's options
    pub fn allows(&self, value: OptionValue) -> bool {
        self.options.iter().any(|option| option.value == value)
    }

    /// Position of `value` among the options
    pub fn index_of(&self, value: OptionValue) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }

    /// Resolve user text (an option value or label, case-insensitive) to an option value
    ///
    /// Boolean fields also accept `true`/`false`/`yes`/`no`.
    pub fn parse(&self, input: &str) -> Option<OptionValue> {
        let input = input.trim();
        self.options
            .iter()
            .find(|option| match option.value {
                OptionValue::Text(value) => {
                    value.eq_ignore_ascii_case(input) || option.label.eq_ignore_ascii_case(input)
                }
                OptionValue::Bool(value) => {
                    option.label.eq_ignore_ascii_case(input)
                        || value.to_string().eq_ignore_ascii_case(input)
                }
            })
            .map(|option| option.value)
    }
}

const YES_NO: [RadioOption; 2] = [
    RadioOption {
        label: "Yes",
        value: OptionValue::Bool(true),
    },
    RadioOption {
        label: "No",
        value: OptionValue::Bool(false),
    },
];

pub static OPENVINO_INSTALLED_FIELD: OptionField = OptionField {
    label: "I have OpenVINO installed",
    options: &YES_NO,
    disabled: false,
    default: Some(OptionValue::Bool(true)),
};

pub static DOCKER_INSTALLED_FIELD: OptionField = OptionField {
    label: "I have Docker installed",
    options: &YES_NO,
    disabled: false,
    default: Some(OptionValue::Bool(true)),
};

pub static MACHINE_OS_FIELD: OptionField = OptionField {
    label: "My OS",
    options: &[
        RadioOption {
            label: "Linux",
            value: OptionValue::Text("Linux"),
        },
        RadioOption {
            label: "Windows",
            value: OptionValue::Text("Windows"),
        },
        RadioOption {
            label: "Ubuntu",
            value: OptionValue::Text("Ubuntu"),
        },
    ],
    disabled: false,
    default: Some(OptionValue::Text("Linux")),
};

pub static DEVICES_FIELD: OptionField = OptionField {
    label: "Accelerators on my machine",
    options: &[
        RadioOption {
            label: "CPU",
            value: OptionValue::Text("CPU"),
        },
        RadioOption {
            label: "GPU",
            value: OptionValue::Text("GPU"),
        },
        RadioOption {
            label: "NCS2",
            value: OptionValue::Text("NCS2"),
        },
        RadioOption {
            label: "HDDL",
            value: OptionValue::Text("HDDL"),
        },
    ],
    disabled: false,
    default: Some(OptionValue::Text("CPU")),
};

pub static START_WITH_FIELD: OptionField = OptionField {
    label: "Start DL Workbench with",
    options: &[
        RadioOption {
            label: "Python wrapper",
            value: OptionValue::Text("pip"),
        },
        RadioOption {
            label: "Plain Docker Command",
            value: OptionValue::Text("docker"),
        },
    ],
    disabled: false,
    default: Some(OptionValue::Text("pip")),
};

pub static HTTP_PROXY_FIELD: OptionField = OptionField {
    label: "Use HTTP Proxy",
    options: &YES_NO,
    disabled: false,
    default: Some(OptionValue::Bool(false)),
};

pub static HTTPS_PROXY_FIELD: OptionField = OptionField {
    label: "Use HTTPS Proxy",
    options: &YES_NO,
    disabled: false,
    default: Some(OptionValue::Bool(false)),
};

pub static NO_PROXY_FIELD: OptionField = OptionField {
    label: "Use No Proxy",
    options: &YES_NO,
    disabled: false,
    default: Some(OptionValue::Bool(false)),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_allowed_options() {
        for field in [
            &OPENVINO_INSTALLED_FIELD,
            &DOCKER_INSTALLED_FIELD,
            &MACHINE_OS_FIELD,
            &DEVICES_FIELD,
            &START_WITH_FIELD,
            &HTTP_PROXY_FIELD,
            &HTTPS_PROXY_FIELD,
            &NO_PROXY_FIELD,
        ] {
            let default = field.default.unwrap();
            assert!(field.allows(default), "{} default not in options", field.label);
        }
    }

    #[test]
    fn test_parse_by_value_and_label() {
        assert_eq!(
            START_WITH_FIELD.parse("docker"),
            Some(OptionValue::Text("docker"))
        );
        assert_eq!(
            START_WITH_FIELD.parse("python wrapper"),
            Some(OptionValue::Text("pip"))
        );
        assert_eq!(MACHINE_OS_FIELD.parse("ubuntu"), Some(OptionValue::Text("Ubuntu")));
        assert_eq!(MACHINE_OS_FIELD.parse("macOS"), None);
    }

    #[test]
    fn test_parse_boolean_field() {
        assert_eq!(HTTP_PROXY_FIELD.parse("yes"), Some(OptionValue::Bool(true)));
        assert_eq!(HTTP_PROXY_FIELD.parse("FALSE"), Some(OptionValue::Bool(false)));
        assert_eq!(HTTP_PROXY_FIELD.parse("maybe"), None);
    }

    #[test]
    fn test_index_of() {
        assert_eq!(DEVICES_FIELD.index_of(OptionValue::Text("NCS2")), Some(2));
        assert_eq!(DEVICES_FIELD.index_of(OptionValue::Bool(true)), None);
    }
}
