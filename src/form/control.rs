//! Per-field control state

/// Validation outcome of one control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStatus {
    Valid,
    Invalid,
}

/// Values that can satisfy a "required" validator
pub trait Required {
    /// Whether a held value counts as present
    fn is_present(&self) -> bool {
        true
    }
}

impl Required for bool {}
impl Required for crate::form::MachineOs {}
impl Required for crate::form::Launcher {}

impl<T> Required for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

/// A required form control holding an optional value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control<T> {
    value: Option<T>,
}

impl<T: Required> Control<T> {
    /// Control seeded with an initial value
    pub fn new(value: Option<T>) -> Self {
        Self { value }
    }

    /// Current value
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Mutable access to the held value
    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Replace the value
    pub(crate) fn set(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Unset the value
    pub(crate) fn clear(&mut self) {
        self.value = None;
    }

    /// Required-validator status
    pub fn status(&self) -> ControlStatus {
        match &self.value {
            Some(value) if value.is_present() => ControlStatus::Valid,
            _ => ControlStatus::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status() == ControlStatus::Valid
    }
}

impl Control<bool> {
    /// Checked state for a yes/no control; unset reads as unchecked
    pub fn is_checked(&self) -> bool {
        self.value == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_scalar() {
        let mut control = Control::new(Some(false));
        assert!(control.is_valid());
        assert!(!control.is_checked());

        control.clear();
        assert_eq!(control.status(), ControlStatus::Invalid);
    }

    #[test]
    fn test_required_list_needs_an_entry() {
        let mut control: Control<Vec<u8>> = Control::new(Some(vec![1]));
        assert!(control.is_valid());

        if let Some(list) = control.value_mut() {
            list.clear();
        }
        assert!(!control.is_valid());
    }
}
