use polyclip_core::{Polygon, Role};

/// Committed primary and clip polygons plus the most recent clip result.
#[derive(Debug, Clone, Default)]
pub struct PolygonStore {
    primary: Vec<Polygon>,
    clip: Vec<Polygon>,
    clip_results: Vec<Polygon>,
}

impl PolygonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primary(&self) -> &[Polygon] {
        &self.primary
    }

    pub fn clip(&self) -> &[Polygon] {
        &self.clip
    }

    pub fn clip_results(&self) -> &[Polygon] {
        &self.clip_results
    }

    /// Append a committed polygon. Returns `false`, storing nothing, when the
    /// polygon has fewer than three vertices.
    pub fn push(&mut self, role: Role, polygon: Polygon) -> bool {
        if !polygon.is_complete() {
            return false;
        }
        match role {
            Role::Primary => self.primary.push(polygon),
            Role::Clip => self.clip.push(polygon),
        }
        true
    }

    /// Number of entries in the flattened drag index space.
    pub fn draggable_len(&self) -> usize {
        self.primary.len() + self.clip.len()
    }

    /// Map a flattened drag index to its collection and position. Primary
    /// polygons occupy `0..primary.len()`, clip polygons follow.
    pub fn resolve_drag_target(&self, index: usize) -> Option<(Role, usize)> {
        if index < self.primary.len() {
            Some((Role::Primary, index))
        } else if index - self.primary.len() < self.clip.len() {
            Some((Role::Clip, index - self.primary.len()))
        } else {
            None
        }
    }

    pub fn polygon_mut(&mut self, role: Role, index: usize) -> Option<&mut Polygon> {
        match role {
            Role::Primary => self.primary.get_mut(index),
            Role::Clip => self.clip.get_mut(index),
        }
    }

    pub fn set_clip_results(&mut self, results: Vec<Polygon>) {
        self.clip_results = results;
    }

    pub fn clear_clip_results(&mut self) {
        self.clip_results.clear();
    }

    pub fn clear(&mut self) {
        self.primary.clear();
        self.clip.clear();
        self.clip_results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyclip_core::Point;

    fn triangle(offset: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(offset, 0.0),
            Point::new(offset + 1.0, 0.0),
            Point::new(offset, 1.0),
        ])
    }

    #[test]
    fn incomplete_polygons_are_refused() {
        let mut store = PolygonStore::new();
        assert!(!store.push(Role::Primary, Polygon::new(vec![Point::new(0.0, 0.0)])));
        assert!(store.primary().is_empty());
    }

    #[test]
    fn drag_targets_span_primary_then_clip() {
        let mut store = PolygonStore::new();
        store.push(Role::Primary, triangle(0.0));
        store.push(Role::Primary, triangle(1.0));
        store.push(Role::Clip, triangle(2.0));

        assert_eq!(store.draggable_len(), 3);
        assert_eq!(store.resolve_drag_target(0), Some((Role::Primary, 0)));
        assert_eq!(store.resolve_drag_target(1), Some((Role::Primary, 1)));
        assert_eq!(store.resolve_drag_target(2), Some((Role::Clip, 0)));
        assert_eq!(store.resolve_drag_target(3), None);
    }

    #[test]
    fn drag_targets_with_only_clip_polygons() {
        let mut store = PolygonStore::new();
        store.push(Role::Clip, triangle(0.0));
        assert_eq!(store.resolve_drag_target(0), Some((Role::Clip, 0)));
        assert_eq!(store.resolve_drag_target(1), None);
    }

    #[test]
    fn clear_empties_everything() {
        let mut store = PolygonStore::new();
        store.push(Role::Primary, triangle(0.0));
        store.push(Role::Clip, triangle(0.0));
        store.set_clip_results(vec![triangle(0.0)]);
        store.clear();
        assert!(store.primary().is_empty());
        assert!(store.clip().is_empty());
        assert!(store.clip_results().is_empty());
    }
}
