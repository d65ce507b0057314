/// Tracks a single-finger swipe on the table to decide whether the browser's
/// vertical scroll should be suppressed in favour of horizontal scrolling.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Returns true when the move is predominantly horizontal (|dx| > |dy|),
    /// i.e. the default action should be prevented.
    pub fn touch_move(&self, x: f64, y: f64) -> bool {
        let Some((start_x, start_y)) = self.start else {
            return false;
        };
        let dx = x - start_x;
        let dy = y - start_y;
        dx.abs() > dy.abs()
    }

    pub fn touch_end(&mut self) {
        self.start = None;
    }
}
