use log::info;
use predictor::{
    passenger::{AGE_DEFAULT, AGE_RANGE, AGE_STEP, FARE_DEFAULT, FARE_RANGE, FARE_STEP},
    predict_detail, Classifier, EmbarkPort, EncodedFeatureRecord, LoadError, Outcome,
    PassengerInput, SharedModel, Sex, TicketClass,
};

use super::field::{Choice, NumberField};

/// The focusable parts of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sex,
    Age,
    TicketClass,
    Fare,
    EmbarkPort,
    Predict,
}

impl Focus {
    pub const ALL: [Focus; 6] = [
        Focus::Sex,
        Focus::Age,
        Focus::TicketClass,
        Focus::Fare,
        Focus::EmbarkPort,
        Focus::Predict,
    ];

    fn step_by(self, steps: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0) as i32;
        Self::ALL[(i + steps).rem_euclid(len) as usize]
    }
}

/// What the panel under the trigger shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Idle,
    Predicted(Outcome),
    Failed(String),
}

pub struct FormState {
    model: Option<SharedModel>,
    pub load_error: Option<LoadError>,
    pub focus: Focus,
    pub sex: Choice<Sex>,
    pub age: NumberField,
    pub ticket_class: Choice<TicketClass>,
    pub fare: NumberField,
    pub embark_port: Choice<EmbarkPort>,
    pub status: Status,
    /// The record of the last successful prediction.
    pub record: Option<EncodedFeatureRecord>,
    pub show_raw: bool,
}

impl FormState {
    /// Creates the form with its default values around the outcome of loading the model.
    pub fn new(model: Result<SharedModel, LoadError>) -> Self {
        let (model, load_error) = match model {
            Ok(model) => (Some(model), None),
            Err(e) => (None, Some(e)),
        };

        Self {
            model,
            load_error,
            focus: Focus::Sex,
            sex: Choice::new(&Sex::ALL),
            age: NumberField::new(AGE_DEFAULT, AGE_RANGE, AGE_STEP, 2),
            ticket_class: Choice::new(&TicketClass::ALL),
            fare: NumberField::new(FARE_DEFAULT, FARE_RANGE, FARE_STEP, 2),
            embark_port: Choice::new(&EmbarkPort::ALL),
            status: Status::Idle,
            record: None,
            show_raw: false,
        }
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// The values currently entered, typed numbers included.
    pub fn input(&self) -> PassengerInput {
        PassengerInput {
            sex: self.sex.selected(),
            age: self.age.value(),
            ticket_class: self.ticket_class.selected(),
            fare: self.fare.value(),
            embark_port: self.embark_port.selected(),
        }
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, steps: i32) {
        if let Some(field) = self.focused_number() {
            field.commit();
        }
        self.focus = self.focus.step_by(steps);
    }

    /// Changes the focused choice or steps the focused number.
    pub fn adjust(&mut self, steps: i32) {
        match self.focus {
            Focus::Sex => self.sex.step_by(steps),
            Focus::Age => self.age.step_by(steps),
            Focus::TicketClass => self.ticket_class.step_by(steps),
            Focus::Fare => self.fare.step_by(steps),
            Focus::EmbarkPort => self.embark_port.step_by(steps),
            Focus::Predict => {}
        }
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.focused_number() {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_number() {
            field.backspace();
        }
    }

    pub fn toggle_raw(&mut self) {
        self.show_raw = !self.show_raw;
    }

    /// Runs a prediction with the entered values and stores its outcome.
    pub fn predict(&mut self) {
        self.age.commit();
        self.fare.commit();

        let input = self.input();
        let model = self.model.as_deref().map(|m| m as &dyn Classifier);

        match predict_detail(&input, model) {
            Ok(detail) => {
                let outcome = Outcome::from(detail.result);
                info!("{}", outcome.summary());
                self.status = Status::Predicted(outcome);
                self.record = Some(detail.record);
            }
            Err(e) => {
                self.status = Status::Failed(e.to_string());
                self.record = None;
            }
        }
    }

    fn focused_number(&mut self) -> Option<&mut NumberField> {
        match self.focus {
            Focus::Age => Some(&mut self.age),
            Focus::Fare => Some(&mut self.fare),
            _ => None,
        }
    }
}
