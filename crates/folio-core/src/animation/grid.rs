/// Background grid recalculated whenever the viewport is resized or scrolled
#[derive(Debug, Clone, Copy)]
pub struct GridOverlay {
    pub cell_width: f64,
    pub cell_height: f64,
    /// Fraction of the scroll distance the grid moves by
    pub parallax: f64,
}

impl Default for GridOverlay {
    fn default() -> Self {
        Self {
            cell_width: 200.0,
            cell_height: 300.0,
            parallax: 0.5,
        }
    }
}

/// Line positions in viewport coordinates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    pub columns: Vec<f64>,
    pub rows: Vec<f64>,
}

impl GridOverlay {
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        Self {
            cell_width,
            cell_height,
            ..Self::default()
        }
    }

    /// Vertical and horizontal line positions covering a `width` × `height` viewport
    pub fn lines(&self, width: f64, height: f64, scroll_y: f64) -> GridLines {
        if self.cell_width <= 0.0 || self.cell_height <= 0.0 {
            return GridLines::default();
        }

        let columns = positions(0.0, self.cell_width, width);
        let shift = (scroll_y * self.parallax).rem_euclid(self.cell_height);
        let rows = positions(-shift, self.cell_height, height);

        GridLines { columns, rows }
    }
}

fn positions(first: f64, step: f64, extent: f64) -> Vec<f64> {
    let mut out = Vec::new();
    let mut at = first;
    while at < extent {
        if at >= 0.0 {
            out.push(at);
        }
        at += step;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_cover_viewport() {
        let grid = GridOverlay::default();
        let lines = grid.lines(1000.0, 900.0, 0.0);
        assert_eq!(lines.columns, vec![0.0, 200.0, 400.0, 600.0, 800.0]);
        assert_eq!(lines.rows, vec![0.0, 300.0, 600.0]);
    }

    #[test]
    fn test_rows_shift_with_scroll() {
        let grid = GridOverlay::default();
        // 200 * 0.5 = 100 shift
        let lines = grid.lines(400.0, 900.0, 200.0);
        assert_eq!(lines.rows, vec![200.0, 500.0, 800.0]);
        assert_eq!(lines.columns, vec![0.0, 200.0]);
    }

    #[test]
    fn test_resize_recomputes() {
        let grid = GridOverlay::new(10.0, 10.0);
        assert_eq!(grid.lines(30.0, 10.0, 0.0).columns.len(), 3);
        assert_eq!(grid.lines(55.0, 10.0, 0.0).columns.len(), 6);
    }

    #[test]
    fn test_degenerate_cells_yield_no_lines() {
        let grid = GridOverlay::new(0.0, 10.0);
        assert_eq!(grid.lines(100.0, 100.0, 0.0), GridLines::default());
    }
}
