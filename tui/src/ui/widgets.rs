use ratatui::{
    layout::{Alignment, Constraint},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use predictor::{EncodedFeatureRecord, LoadError, FEATURE_NAMES};

use crate::state::{field::NumberField, form::Status};

use super::theme::Theme;

pub fn header<'a>() -> Paragraph<'a> {
    let lines = vec![
        Line::from(Span::styled("Titanic Survival Predictor", Theme::title())),
        Line::from(Span::styled(
            "Enter passenger details to predict if they would have survived the Titanic disaster.",
            Theme::dim(),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// The notice shown when the model couldn't be loaded.
pub fn banner<'a>(err: &LoadError) -> Paragraph<'a> {
    Paragraph::new(Line::from(vec![
        Span::styled(" ✖ ", Theme::error()),
        Span::styled(err.to_string(), Theme::error()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::error()),
    )
    .wrap(Wrap { trim: true })
}

/// A bordered group of fields.
pub fn panel<'a>(title: &'a str, lines: Vec<Line<'a>>, focused: bool) -> Paragraph<'a> {
    let border = if focused {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {title} "))
            .title_style(Theme::title()),
    )
}

fn label<'a>(text: &'a str, focused: bool) -> Line<'a> {
    let (prefix, style) = if focused {
        ("▶ ", Theme::accent_cyan())
    } else {
        ("  ", Theme::dim())
    };

    Line::from(vec![Span::styled(prefix, style), Span::styled(text, style)])
}

/// A closed choice, drawn with arrows when it can be changed.
pub fn choice_field<'a>(name: &'a str, value: &'a str, focused: bool) -> [Line<'a>; 2] {
    let value = if focused {
        Line::from(vec![
            Span::styled("    ◀ ", Theme::accent_cyan()),
            Span::styled(value, Theme::text().add_modifier(Modifier::BOLD)),
            Span::styled(" ▶", Theme::accent_cyan()),
        ])
    } else {
        Line::from(Span::styled(format!("    {value}"), Theme::text()))
    };

    [label(name, focused), value]
}

pub fn number_field<'a>(name: &'a str, field: &NumberField, focused: bool) -> [Line<'a>; 2] {
    let mut spans = vec![Span::styled(
        format!("    {}", field.text()),
        if focused {
            Theme::text().add_modifier(Modifier::BOLD)
        } else {
            Theme::text()
        },
    )];
    if focused && field.is_editing() {
        spans.push(Span::styled("█", Theme::accent_cyan()));
    }

    [label(name, focused), Line::from(spans)]
}

/// The trigger, muted while there's no model to predict with.
pub fn button<'a>(focused: bool, enabled: bool) -> Paragraph<'a> {
    let style = if enabled {
        Theme::button(focused)
    } else {
        Theme::muted()
    };

    Paragraph::new(Span::styled("  Predict Survival  ", style))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused {
                    Theme::border_focused()
                } else {
                    Theme::border()
                }),
        )
}

pub fn outcome<'a>(status: &Status) -> Paragraph<'a> {
    let (lines, style) = match status {
        Status::Idle => (
            vec![Line::from(Span::styled(
                "No prediction yet.",
                Theme::muted(),
            ))],
            Theme::border(),
        ),
        Status::Predicted(outcome) => {
            let style = if outcome.survived {
                Theme::success()
            } else {
                Theme::error()
            };
            (
                vec![
                    Line::from(Span::styled(
                        format!("Prediction: {}", outcome.headline),
                        style,
                    )),
                    Line::from(Span::styled(
                        format!("{}: {}", outcome.caption, outcome.percent),
                        style,
                    )),
                ],
                style,
            )
        }
        Status::Failed(msg) => (
            vec![Line::from(Span::styled(msg.clone(), Theme::error()))],
            Theme::error(),
        ),
    };

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(" Outcome ")
                .title_style(Theme::title()),
        )
}

/// The encoded record fed to the model, or a note when nothing was predicted yet.
pub fn raw_data<'a>(record: Option<&EncodedFeatureRecord>) -> Table<'a> {
    let header =
        Row::new(FEATURE_NAMES.map(Cell::from)).style(Style::default().add_modifier(Modifier::BOLD));

    let rows = record
        .map(|r| {
            Row::new(vec![
                Cell::from(r.pclass.to_string()),
                Cell::from(r.sex.to_string()),
                Cell::from(format!("{:.2}", r.age)),
                Cell::from(format!("{:.2}", r.fare)),
                Cell::from(r.embarked.to_string()),
            ])
        })
        .into_iter()
        .collect::<Vec<_>>();

    let title = if record.is_some() {
        " Raw Data "
    } else {
        " Raw Data (predict first) "
    };

    Table::new(rows, [Constraint::Ratio(1, 5); 5])
        .header(header)
        .style(Theme::text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(title)
                .title_style(Theme::title()),
        )
}

pub fn hints<'a>(hints: &[(&'a str, &'a str)]) -> Paragraph<'a> {
    let spans = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, Theme::dim()),
                Span::styled(format!("  {action}    "), Theme::muted()),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
