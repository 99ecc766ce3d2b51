//! The passenger attributes collected by the form.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// The domain of the `age` field.
pub const AGE_RANGE: RangeInclusive<f32> = 0.0..=100.0;
pub const AGE_DEFAULT: f32 = 30.0;
pub const AGE_STEP: f32 = 1.0;

/// The domain of the `fare` field.
pub const FARE_RANGE: RangeInclusive<f32> = 0.0..=600.0;
pub const FARE_DEFAULT: f32 = 32.0;
pub const FARE_STEP: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Every choice, in the order the form presents them.
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketClass {
    First,
    Second,
    Third,
}

impl TicketClass {
    pub const ALL: [TicketClass; 3] = [TicketClass::First, TicketClass::Second, TicketClass::Third];

    pub fn label(&self) -> &'static str {
        match self {
            TicketClass::First => "1st Class (Upper)",
            TicketClass::Second => "2nd Class (Middle)",
            TicketClass::Third => "3rd Class (Lower)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmbarkPort {
    Southampton,
    Cherbourg,
    Queenstown,
}

impl EmbarkPort {
    pub const ALL: [EmbarkPort; 3] = [
        EmbarkPort::Southampton,
        EmbarkPort::Cherbourg,
        EmbarkPort::Queenstown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmbarkPort::Southampton => "Southampton (S)",
            EmbarkPort::Cherbourg => "Cherbourg (C)",
            EmbarkPort::Queenstown => "Queenstown (Q)",
        }
    }
}

/// The raw values of a single prediction request.
///
/// `age` and `fare` are expected inside [`AGE_RANGE`] and [`FARE_RANGE`], the form clamps them
/// before building the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassengerInput {
    pub sex: Sex,
    pub age: f32,
    pub ticket_class: TicketClass,
    pub fare: f32,
    pub embark_port: EmbarkPort,
}

impl Default for PassengerInput {
    /// The values the form starts with.
    fn default() -> Self {
        Self {
            sex: Sex::Male,
            age: AGE_DEFAULT,
            ticket_class: TicketClass::First,
            fare: FARE_DEFAULT,
            embark_port: EmbarkPort::Southampton,
        }
    }
}
