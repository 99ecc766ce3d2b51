use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The regions of the form screen.
pub struct FormLayout {
    pub header: Rect,
    pub banner: Option<Rect>,
    pub passenger: Rect,
    pub trip: Rect,
    pub button: Rect,
    pub outcome: Rect,
    pub raw: Option<Rect>,
    pub hints: Rect,
}

/// Computes the main layout regions.
pub fn form(area: Rect, show_banner: bool, show_raw: bool) -> FormLayout {
    let outer = centered_rect(70, 96, area);

    let mut constraints = vec![Constraint::Length(3)];
    if show_banner {
        constraints.push(Constraint::Length(3));
    }
    constraints.extend([
        Constraint::Length(9), // inputs
        Constraint::Length(3), // button
        Constraint::Length(4), // outcome
    ]);
    if show_raw {
        constraints.push(Constraint::Length(5));
    }
    constraints.extend([Constraint::Min(0), Constraint::Length(1)]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(outer);

    let mut next = chunks.iter().copied();
    let mut take = || next.next().unwrap_or_default();

    let header = take();
    let banner = show_banner.then(&mut take);
    let inputs = take();
    let button = take();
    let outcome = take();
    let raw = show_raw.then(&mut take);
    let _spacer = take();
    let hints = take();

    let (passenger, trip) = columns(inputs);

    FormLayout {
        header,
        banner,
        passenger,
        trip,
        button,
        outcome,
        raw,
        hints,
    }
}

/// Splits an area into two equal columns.
pub fn columns(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    (cols[0], cols[1])
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
