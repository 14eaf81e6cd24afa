use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::grid::{Cell, Grid};
use crate::simulation::Snapshot;

const FOOD_SYMBOL: &str = "♥";
const HEAD_SYMBOL: &str = "@";

fn buffer_pos(cell: Cell, area: Rect) -> Option<(u16, u16)> {
    // Grids bigger than the terminal are clipped, not wrapped
    (cell.x < area.width && cell.y < area.height).then(|| (cell.x + area.x, cell.y + area.y))
}

impl Widget for &Snapshot {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(pos) = self.last_vacated.and_then(|c| buffer_pos(c, area)) {
            buf[pos].reset();
        }

        for &segment in self.body.iter().skip(1) {
            if let Some(pos) = buffer_pos(segment, area) {
                buf[pos].set_symbol(" ").set_bg(Color::Green);
            }
        }

        if let Some(pos) = self.body.first().and_then(|&head| buffer_pos(head, area)) {
            buf[pos]
                .set_symbol(HEAD_SYMBOL)
                .set_fg(Color::Yellow)
                .set_bg(Color::Green);
        }

        if let Some(pos) = buffer_pos(self.food, area) {
            buf[pos].set_symbol(FOOD_SYMBOL).set_fg(Color::LightRed);
        }
    }
}

/// Lays out one frame: a status line on top and the bordered board below it.
pub fn draw(frame: &mut Frame, grid: Grid, snapshot: &Snapshot) {
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(frame.area());

    let status = format!(
        "SNEK    Length: {}    arrows/WASD to turn, q to quit",
        snapshot.body.len()
    );
    frame.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let board = Rect {
        width: (grid.width.saturating_add(2)).min(layout[1].width),
        height: (grid.height.saturating_add(2)).min(layout[1].height),
        ..layout[1]
    };
    let block = Block::default().borders(Borders::ALL);
    let inner_area = block.inner(board);

    frame.render_widget(block, board);
    frame.render_widget(snapshot, inner_area);
}
