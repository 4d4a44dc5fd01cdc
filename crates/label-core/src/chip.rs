// File: crates/label-core/src/chip.rs
// Summary: Chip descriptor model: identity, package geometry, and per-pin labels.

use crate::error::LabelError;

/// Physical spacing constants of a dual-in-line package, in millimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackageGeometry {
    /// Distance between the two pin columns.
    pub row_spacing_mm: f64,
    /// Distance between adjacent pins within a column.
    pub pin_spacing_mm: f64,
}

impl PackageGeometry {
    pub const fn new(row_spacing_mm: f64, pin_spacing_mm: f64) -> Self {
        Self { row_spacing_mm, pin_spacing_mm }
    }

    /// Narrow DIP: 0.3" row spacing, 0.1" pin pitch.
    pub const fn dip() -> Self {
        Self::new(7.62, 2.54)
    }
}

/// A chip to be labeled: name, description, and an ordered set of pin names.
///
/// Pin indices are 1-based. The pin count is fixed at construction and must
/// be even; the two-column layout divides it by two. Labels are assigned with
/// [`Chip::set_pin`] and must all be present before rendering.
#[derive(Clone, Debug)]
pub struct Chip {
    name: String,
    description: String,
    pins: Vec<Option<String>>,
    package: PackageGeometry,
}

impl Chip {
    /// Create a chip with `pin_count` unassigned pins.
    /// Fails when `pin_count` is zero or odd.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        pin_count: usize,
        package: PackageGeometry,
    ) -> Result<Self, LabelError> {
        if pin_count == 0 || pin_count % 2 != 0 {
            return Err(LabelError::Precondition(format!(
                "pin count must be even and nonzero, got {pin_count}"
            )));
        }
        Ok(Self {
            name: name.into(),
            description: description.into(),
            pins: vec![None; pin_count],
            package,
        })
    }

    /// Create a chip with every pin assigned from `labels`, in pin order.
    pub fn with_pins<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        package: PackageGeometry,
        labels: I,
    ) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pins: Vec<Option<String>> = labels.into_iter().map(|l| Some(l.into())).collect();
        let mut chip = Self::new(name, description, pins.len(), package)?;
        chip.pins = pins;
        Ok(chip)
    }

    /// Assign the label for 1-based pin `index`.
    pub fn set_pin(&mut self, index: usize, label: impl Into<String>) -> Result<(), LabelError> {
        if index == 0 || index > self.pins.len() {
            return Err(LabelError::Precondition(format!(
                "pin index {index} out of range 1..={}",
                self.pins.len()
            )));
        }
        self.pins[index - 1] = Some(label.into());
        Ok(())
    }

    /// Label of 1-based pin `index`, if assigned.
    pub fn pin(&self, index: usize) -> Option<&str> {
        self.pins.get(index.checked_sub(1)?)?.as_deref()
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn package(&self) -> &PackageGeometry {
        &self.package
    }

    /// Check that every pin in `1..=pin_count` has a label.
    pub fn ensure_labeled(&self) -> Result<(), LabelError> {
        for (i, pin) in self.pins.iter().enumerate() {
            if pin.is_none() {
                return Err(LabelError::Precondition(format!("pin {} has no label", i + 1)));
            }
        }
        Ok(())
    }
}

/// Split a leading active-low marker (`~`, `/` or `!`) off a pin label.
/// Returns the stripped label and whether the pin is inverted.
pub fn strip_polarity(label: &str) -> (&str, bool) {
    let mut chars = label.chars();
    match chars.next() {
        Some('~' | '/' | '!') => (chars.as_str(), true),
        _ => (label, false),
    }
}
