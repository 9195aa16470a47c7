/// State reported by a checkbox that may also be indeterminate.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckedState {
    Checked,
    #[default]
    Unchecked,
    Indeterminate,
}

impl CheckedState {
    /// Reads a raw checkbox signal. Only the exact string `"true"` counts as checked.
    pub fn parse(signal: &str) -> Self {
        match signal {
            "true" => CheckedState::Checked,
            "indeterminate" => CheckedState::Indeterminate,
            _ => CheckedState::Unchecked,
        }
    }

    pub fn from_input(checked: bool, indeterminate: bool) -> Self {
        match (indeterminate, checked) {
            (true, _) => CheckedState::Indeterminate,
            (false, true) => CheckedState::Checked,
            (false, false) => CheckedState::Unchecked,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, CheckedState::Checked)
    }
}

impl From<bool> for CheckedState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckedState::Checked
        } else {
            CheckedState::Unchecked
        }
    }
}
