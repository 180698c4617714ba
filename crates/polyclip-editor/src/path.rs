use polyclip_core::{Point, Polygon};

/// The polygon currently being drawn plus the live pointer position.
#[derive(Debug, Clone, Default)]
pub struct PathTracker {
    in_progress: Vec<Point>,
    cursor: Point,
}

impl PathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, p: Point) {
        self.in_progress.push(p);
    }

    pub fn update_cursor(&mut self, p: Point) {
        self.cursor = p;
    }

    /// Close the path at the cursor and start a new one.
    ///
    /// The result may have fewer than three vertices; callers decide whether to
    /// keep it.
    pub fn commit_path(&mut self) -> Polygon {
        let mut points = std::mem::take(&mut self.in_progress);
        points.push(self.cursor);
        Polygon::new(points)
    }

    pub fn cancel_path(&mut self) {
        self.in_progress.clear();
    }

    pub fn in_progress(&self) -> &[Point] {
        &self.in_progress
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// In-progress vertices followed by the cursor, as drawn for the dashed preview.
    pub fn preview(&self) -> Vec<Point> {
        let mut pts = self.in_progress.clone();
        pts.push(self.cursor);
        pts
    }
}
