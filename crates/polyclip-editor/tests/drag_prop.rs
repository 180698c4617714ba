use polyclip_editor::{EditorConfig, Point, Scene};
use polyclip_geometry::{ClipError, ClipOracle, PointList};
use proptest::prelude::*;

struct Nothing;

impl ClipOracle for Nothing {
    fn clip(&self, _: &[PointList], _: &[PointList]) -> Result<Vec<PointList>, ClipError> {
        Ok(Vec::new())
    }
}

fn coord() -> impl Strategy<Value = f64> {
    -1.0e4f64..1.0e4
}

proptest! {
    #[test]
    fn drag_shifts_only_the_target_and_every_vertex_exactly(
        primary in prop::collection::vec((coord(), coord()), 3..8),
        clip in prop::collection::vec((coord(), coord()), 3..8),
        target in 0usize..2,
        dx in coord(),
        dy in coord(),
    ) {
        let mut scene = Scene::with_oracle(Nothing, &EditorConfig::default());
        for pts in [&primary, &clip] {
            let (last, rest) = pts.split_last().unwrap();
            for &p in rest {
                scene.add_vertex(Point::from(p));
            }
            scene.update_cursor(Point::from(*last));
            scene.commit_path();
            scene.set_mode(polyclip_editor::Mode::DrawClip);
        }
        let before_primary = scene.primary().to_vec();
        let before_clip = scene.clip().to_vec();

        scene.move_polygon(target, dx, dy, true).unwrap();

        let (moved, before, untouched, untouched_before) = if target == 0 {
            (&scene.primary()[0], &before_primary[0], &scene.clip()[0], &before_clip[0])
        } else {
            (&scene.clip()[0], &before_clip[0], &scene.primary()[0], &before_primary[0])
        };
        prop_assert_eq!(moved.len(), before.len());
        for (a, b) in moved.points().iter().zip(before.points()) {
            prop_assert_eq!(*a, Point::new(b.x + dx, b.y + dy));
        }
        prop_assert_eq!(untouched, untouched_before);
    }
}
