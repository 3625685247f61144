//! Launch configuration form
//!
//! Field descriptors, typed option sets, per-field controls and the form
//! controller that ties them together.

pub mod control;
pub mod controller;
pub mod field;
pub mod options;

pub use control::{Control, ControlStatus, Required};
pub use controller::{FieldName, FormEvent, FormStatus, LaunchForm};
pub use field::{OptionField, OptionValue, RadioOption};
pub use options::{Device, EnumOption, Launcher, MachineOs};
