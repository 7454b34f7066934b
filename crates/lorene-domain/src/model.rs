//! Model module - the record extracted from one LORENE output file

use crate::field::Field;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Equilibrium model quantities for one input file
///
/// Every numeric quantity is a slot that is either present (matched in the
/// input or derived) or absent. Formatting code reads slots through
/// [`NeutronStarModel::value`], which maps an absent slot to 0.0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NeutronStarModel {
    /// Source the record was extracted from (the path as given)
    pub filename: String,

    /// Equation of state label
    pub eos_name: String,

    /// Rotation law label
    pub rotation_type: String,

    values: [Option<f64>; Field::COUNT],
}

impl NeutronStarModel {
    /// Create an empty record for the given source
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    /// Get a slot, `None` when the quantity was never found
    pub fn get(&self, field: Field) -> Option<f64> {
        self.values[field.index()]
    }

    /// Get a slot with the 0.0 default applied
    pub fn value(&self, field: Field) -> f64 {
        self.get(field).unwrap_or(0.0)
    }

    /// Set a slot
    pub fn set(&mut self, field: Field, value: f64) {
        self.values[field.index()] = Some(value);
    }

    /// Check whether a slot holds a value
    pub fn is_present(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Number of slots holding a value
    pub fn present_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Compute the derived quantities from the extracted ones
    ///
    /// - `M_binding = M_bary - M_grav` when both masses are > 0
    /// - `R_polar = R_circ * axis_ratio` when both are > 0
    ///
    /// A target whose sources are missing is left as it was. Running this
    /// twice gives the same record as running it once.
    pub fn derive(&mut self) {
        if let (Some(grav), Some(bary)) = (
            self.positive(Field::MGrav),
            self.positive(Field::MBary),
        ) {
            self.set(Field::MBinding, bary - grav);
        }

        if let (Some(radius), Some(ratio)) = (
            self.positive(Field::RCirc),
            self.positive(Field::AxisRatio),
        ) {
            self.set(Field::RPolar, radius * ratio);
        }
    }

    fn positive(&self, field: Field) -> Option<f64> {
        self.get(field).filter(|v| *v > 0.0)
    }
}

impl Serialize for NeutronStarModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + Field::COUNT))?;
        map.serialize_entry("filename", &self.filename)?;
        map.serialize_entry("eos_name", &self.eos_name)?;
        map.serialize_entry("rotation_type", &self.rotation_type)?;
        for field in Field::ALL {
            map.serialize_entry(field.key(), &self.value(field))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NeutronStarModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ModelVisitor)
    }
}

struct ModelVisitor;

impl<'de> Visitor<'de> for ModelVisitor {
    type Value = NeutronStarModel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a flat map of model quantities")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut model = NeutronStarModel::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "filename" => model.filename = map.next_value()?,
                "eos_name" => model.eos_name = map.next_value()?,
                "rotation_type" => model.rotation_type = map.next_value()?,
                other => match Field::parse(other) {
                    Some(field) => model.set(field, map.next_value()?),
                    None => {
                        map.next_value::<IgnoredAny>()?;
                    }
                },
            }
        }
        Ok(model)
    }
}
