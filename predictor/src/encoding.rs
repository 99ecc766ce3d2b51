//! The categorical to numeric encoding the model was trained with.
//!
//! Categorical codes follow the alphabetical order of the category names (the way a label
//! encoder assigns them), the ticket class keeps its ordinal. Changing any code here silently
//! changes what the model sees.

use machine_learning::Frame;
use serde::Serialize;

use crate::passenger::{EmbarkPort, PassengerInput, Sex, TicketClass};

/// The columns of a record, in the order the model was trained on.
pub const FEATURE_NAMES: [&str; 5] = ["Pclass", "Sex", "Age", "Fare", "Embarked"];

impl Sex {
    /// Female → 0, Male → 1.
    pub fn code(&self) -> u8 {
        match self {
            Sex::Female => 0,
            Sex::Male => 1,
        }
    }
}

impl TicketClass {
    /// First → 1, Second → 2, Third → 3.
    pub fn code(&self) -> u8 {
        match self {
            TicketClass::First => 1,
            TicketClass::Second => 2,
            TicketClass::Third => 3,
        }
    }
}

impl EmbarkPort {
    /// Cherbourg → 0, Queenstown → 1, Southampton → 2.
    pub fn code(&self) -> u8 {
        match self {
            EmbarkPort::Cherbourg => 0,
            EmbarkPort::Queenstown => 1,
            EmbarkPort::Southampton => 2,
        }
    }
}

/// The numeric record fed to the model for a single passenger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EncodedFeatureRecord {
    #[serde(rename = "Pclass")]
    pub pclass: u8,
    #[serde(rename = "Sex")]
    pub sex: u8,
    #[serde(rename = "Age")]
    pub age: f32,
    #[serde(rename = "Fare")]
    pub fare: f32,
    #[serde(rename = "Embarked")]
    pub embarked: u8,
}

impl EncodedFeatureRecord {
    /// Returns the values of the record, in [`FEATURE_NAMES`] order.
    pub fn values(&self) -> [f32; 5] {
        [
            f32::from(self.pclass),
            f32::from(self.sex),
            self.age,
            self.fare,
            f32::from(self.embarked),
        ]
    }

    /// Returns `(column, value)` pairs in [`FEATURE_NAMES`] order.
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, f32)> {
        FEATURE_NAMES.into_iter().zip(self.values())
    }

    /// Builds the single row frame handed to the model.
    pub fn to_frame(&self) -> Frame {
        Frame::from_row(self.columns())
    }
}

/// Encodes the raw input of a passenger.
///
/// The mapping is total over the enumerated domains, numeric fields pass through unchanged.
pub fn encode(input: &PassengerInput) -> EncodedFeatureRecord {
    EncodedFeatureRecord {
        pclass: input.ticket_class.code(),
        sex: input.sex.code(),
        age: input.age,
        fare: input.fare,
        embarked: input.embark_port.code(),
    }
}
