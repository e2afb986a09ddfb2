use folio_core::animation::GridLines;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

/// Paint grid lines on blank cells only, so content always wins
pub fn render_grid(buf: &mut Buffer, area: Rect, lines: &GridLines, style: Style) {
    let cols: Vec<u16> = lines
        .columns
        .iter()
        .map(|c| area.x + c.round() as u16)
        .filter(|x| *x < area.right())
        .collect();
    let rows: Vec<u16> = lines
        .rows
        .iter()
        .map(|r| area.y + r.round() as u16)
        .filter(|y| *y < area.bottom())
        .collect();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let on_col = cols.contains(&x);
            let on_row = rows.contains(&y);
            let symbol = match (on_col, on_row) {
                (true, true) => "┼",
                (true, false) => "│",
                (false, true) => "─",
                (false, false) => continue,
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                if cell.symbol() == " " {
                    cell.set_symbol(symbol).set_style(style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_skips_occupied_cells() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "ab", Style::default());
        let lines = GridLines {
            columns: vec![0.0, 5.0],
            rows: vec![0.0],
        };
        render_grid(&mut buf, area, &lines, Style::default());

        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert_eq!(buf[(5, 0)].symbol(), "┼");
        assert_eq!(buf[(3, 0)].symbol(), "─");
        assert_eq!(buf[(0, 2)].symbol(), "│");
        assert_eq!(buf[(3, 2)].symbol(), " ");
    }
}
