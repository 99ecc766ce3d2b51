use crossterm::event::KeyCode;
use ratatui::{widgets::Block, Frame};

use crate::state::form::{Focus, FormState};
use crate::ui::{layout, theme::Theme, widgets};

use super::Action;

const HINTS: &[(&str, &str)] = &[
    ("↑↓ / tab", "move"),
    ("←→", "change"),
    ("enter", "predict"),
    ("r", "raw data"),
    ("q", "quit"),
];

pub fn handle_key(state: &mut FormState, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::BackTab => state.focus_prev(),
        KeyCode::Down | KeyCode::Tab => state.focus_next(),
        KeyCode::Left => state.adjust(-1),
        KeyCode::Right => state.adjust(1),
        KeyCode::Enter if state.focus == Focus::Predict => state.predict(),
        KeyCode::Enter => state.focus_next(),
        KeyCode::Backspace => state.backspace(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => state.type_char(c),
        KeyCode::Char('r') => state.toggle_raw(),
        KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
        _ => {}
    }

    Action::None
}

pub fn draw(f: &mut Frame, state: &FormState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let regions = layout::form(area, state.load_error.is_some(), state.show_raw);

    f.render_widget(widgets::header(), regions.header);

    if let (Some(err), Some(banner)) = (&state.load_error, regions.banner) {
        f.render_widget(widgets::banner(err), banner);
    }

    let focus = state.focus;

    let sex = widgets::choice_field("Gender", state.sex.selected().label(), focus == Focus::Sex);
    let age = widgets::number_field("Age", &state.age, focus == Focus::Age);
    let class = widgets::choice_field(
        "Ticket Class",
        state.ticket_class.selected().label(),
        focus == Focus::TicketClass,
    );
    let passenger = [sex, age, class].concat();
    f.render_widget(
        widgets::panel(
            "Passenger Info",
            passenger,
            matches!(focus, Focus::Sex | Focus::Age | Focus::TicketClass),
        ),
        regions.passenger,
    );

    let fare = widgets::number_field("Ticket Fare ($)", &state.fare, focus == Focus::Fare);
    let port = widgets::choice_field(
        "Port of Embarkation",
        state.embark_port.selected().label(),
        focus == Focus::EmbarkPort,
    );
    let trip = [fare, port].concat();
    f.render_widget(
        widgets::panel(
            "Trip Details",
            trip,
            matches!(focus, Focus::Fare | Focus::EmbarkPort),
        ),
        regions.trip,
    );

    f.render_widget(
        widgets::button(focus == Focus::Predict, state.has_model()),
        regions.button,
    );
    f.render_widget(widgets::outcome(&state.status), regions.outcome);

    if let Some(raw) = regions.raw {
        f.render_widget(widgets::raw_data(state.record.as_ref()), raw);
    }

    f.render_widget(widgets::hints(HINTS), regions.hints);
}

#[cfg(test)]
mod tests {
    use predictor::{LoadError, TicketClass};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::state::form::Status;

    fn without_model() -> FormState {
        FormState::new(Err(LoadError::NotFound {
            path: "titanic_model.json".into(),
        }))
    }

    fn screen_text(state: &FormState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn keys_drive_the_form() {
        let mut state = without_model();

        assert_eq!(handle_key(&mut state, KeyCode::Down), Action::None);
        assert_eq!(state.focus, Focus::Age);

        handle_key(&mut state, KeyCode::Char('4'));
        handle_key(&mut state, KeyCode::Char('2'));
        handle_key(&mut state, KeyCode::Tab);
        assert_eq!(state.input().age, 42.0);

        handle_key(&mut state, KeyCode::Right);
        handle_key(&mut state, KeyCode::Right);
        assert_eq!(state.input().ticket_class, TicketClass::Third);

        handle_key(&mut state, KeyCode::Char('r'));
        assert!(state.show_raw);
    }

    #[test]
    fn enter_only_predicts_on_the_button() {
        let mut state = without_model();

        handle_key(&mut state, KeyCode::Enter);
        assert_eq!(state.status, Status::Idle);
        assert_eq!(state.focus, Focus::Age);

        handle_key(&mut state, KeyCode::BackTab);
        handle_key(&mut state, KeyCode::BackTab);
        assert_eq!(state.focus, Focus::Predict);
        handle_key(&mut state, KeyCode::Enter);
        assert!(matches!(state.status, Status::Failed(_)));
    }

    #[test]
    fn q_and_esc_quit() {
        let mut state = without_model();
        assert_eq!(handle_key(&mut state, KeyCode::Char('q')), Action::Quit);
        assert_eq!(handle_key(&mut state, KeyCode::Esc), Action::Quit);
    }

    #[test]
    fn missing_model_is_announced() {
        let text = screen_text(&without_model());

        assert!(text.contains("Titanic Survival Predictor"));
        assert!(text.contains("Error: 'titanic_model.json' not found."));
        assert!(text.contains("Predict Survival"));
    }

    #[test]
    fn button_is_muted_without_a_model() {
        let mut terminal = Terminal::new(TestBackend::new(120, 50)).unwrap();
        terminal.draw(|f| draw(f, &without_model())).unwrap();

        let buffer = terminal.backend().buffer();
        let cells = buffer.content();
        let start = (0..cells.len() - 7)
            .find(|&i| cells[i..i + 7].iter().map(|c| c.symbol()).collect::<String>() == "Predict")
            .unwrap();

        assert_eq!(cells[start].fg, Theme::FG_MUTED);
    }

    #[test]
    fn raw_data_shows_the_feature_columns() {
        let mut state = without_model();
        state.toggle_raw();

        let text = screen_text(&state);
        assert!(text.contains("Pclass"));
        assert!(text.contains("Embarked"));
    }
}
