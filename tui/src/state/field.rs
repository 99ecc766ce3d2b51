use std::ops::RangeInclusive;

/// Digits kept while typing, enough for any value in the form's domains.
const MAX_BUFFER_LEN: usize = 8;

/// A bounded numeric input.
///
/// Typed text lives in a buffer until the field is committed, then it's parsed and clamped
/// into the range. Text that doesn't parse keeps the previous value.
#[derive(Debug, Clone)]
pub struct NumberField {
    value: f32,
    range: RangeInclusive<f32>,
    step: f32,
    decimals: usize,
    buffer: Option<String>,
}

impl NumberField {
    pub fn new(value: f32, range: RangeInclusive<f32>, step: f32, decimals: usize) -> Self {
        Self {
            value,
            range,
            step,
            decimals,
            buffer: None,
        }
    }

    /// The value the field currently holds, including uncommitted text.
    pub fn value(&self) -> f32 {
        self.buffer
            .as_deref()
            .and_then(|b| b.parse::<f32>().ok())
            .map(|v| self.clamp(v))
            .unwrap_or(self.value)
    }

    pub fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    /// What the field shows: the typed text while editing, the formatted value otherwise.
    pub fn text(&self) -> String {
        match &self.buffer {
            Some(b) => b.clone(),
            None => format!("{:.*}", self.decimals, self.value),
        }
    }

    /// Types a character, starting a fresh buffer on the first keystroke.
    pub fn push(&mut self, c: char) {
        let buffer = self.buffer.get_or_insert_with(String::new);
        if buffer.len() >= MAX_BUFFER_LEN {
            return;
        }

        match c {
            '0'..='9' => buffer.push(c),
            '.' if !buffer.contains('.') => buffer.push(c),
            _ => {}
        }
    }

    /// Erases the last character, editing the displayed value if nothing was typed yet.
    pub fn backspace(&mut self) {
        let text = self.text();
        self.buffer.get_or_insert(text).pop();
    }

    pub fn commit(&mut self) {
        self.value = self.value();
        self.buffer = None;
    }

    /// Moves the value by `steps` increments, staying inside the range.
    pub fn step_by(&mut self, steps: i32) {
        self.commit();
        let value = self.value + self.step * steps as f32;
        self.value = self.clamp(self.round(value));
    }

    fn clamp(&self, v: f32) -> f32 {
        v.clamp(*self.range.start(), *self.range.end())
    }

    fn round(&self, v: f32) -> f32 {
        let p = 10f32.powi(self.decimals as i32);
        (v * p).round() / p
    }
}

/// A pick from a closed set of options.
#[derive(Debug, Clone)]
pub struct Choice<T: 'static> {
    options: &'static [T],
    index: usize,
}

impl<T: Copy> Choice<T> {
    /// Starts on the first option, `options` must not be empty.
    pub fn new(options: &'static [T]) -> Self {
        Self { options, index: 0 }
    }

    pub fn selected(&self) -> T {
        self.options[self.index]
    }

    /// Moves the selection by `steps`, wrapping around both ends.
    pub fn step_by(&mut self, steps: i32) {
        let len = self.options.len() as i32;
        self.index = (self.index as i32 + steps).rem_euclid(len) as usize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fare() -> NumberField {
        NumberField::new(32.0, 0.0..=600.0, 0.1, 1)
    }

    #[test]
    fn typed_values_are_clamped_on_commit() {
        let mut field = fare();
        for c in "999".chars() {
            field.push(c);
        }
        assert_eq!(field.text(), "999");

        field.commit();
        assert_eq!(field.value(), 600.0);
        assert_eq!(field.text(), "600.0");
    }

    #[test]
    fn unparseable_text_keeps_the_previous_value() {
        let mut field = fare();
        field.push('.');
        assert_eq!(field.value(), 32.0);

        field.commit();
        assert_eq!(field.value(), 32.0);
        assert!(!field.is_editing());
    }

    #[test]
    fn only_one_decimal_point_is_accepted() {
        let mut field = fare();
        for c in "7.5.1x".chars() {
            field.push(c);
        }
        assert_eq!(field.text(), "7.51");
    }

    #[test]
    fn backspace_edits_the_shown_value() {
        let mut field = fare();
        field.backspace();
        assert_eq!(field.text(), "32.");
        assert_eq!(field.value(), 32.0);

        field.backspace();
        field.backspace();
        assert_eq!(field.text(), "3");
        assert_eq!(field.value(), 3.0);
    }

    #[test]
    fn stepping_stays_in_range() {
        let mut field = fare();
        field.step_by(1);
        assert_eq!(field.text(), "32.1");

        let mut field = NumberField::new(0.0, 0.0..=100.0, 1.0, 1);
        field.step_by(-1);
        assert_eq!(field.value(), 0.0);

        let mut field = NumberField::new(100.0, 0.0..=100.0, 1.0, 1);
        field.step_by(3);
        assert_eq!(field.value(), 100.0);
    }

    #[test]
    fn choices_wrap_around() {
        static OPTIONS: [char; 3] = ['a', 'b', 'c'];
        let mut choice = Choice::new(&OPTIONS);

        choice.step_by(-1);
        assert_eq!(choice.selected(), 'c');

        choice.step_by(1);
        assert_eq!(choice.selected(), 'a');
    }
}
