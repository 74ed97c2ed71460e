use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen areas, top to bottom.
pub struct Regions {
    pub tabs: Rect,
    pub filters: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn split(area: Rect) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    Regions {
        tabs: rows[0],
        filters: rows[1],
        body: rows[2],
        footer: rows[3],
    }
}

/// Search box on the left, category selector on the right.
pub fn split_filters(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);
    (cols[0], cols[1])
}

/// Card list on the left, focused card on the right.
pub fn split_body(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);
    (cols[0], cols[1])
}

/// A box of at most `width` x `height` centred in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
