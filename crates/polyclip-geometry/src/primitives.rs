use cavalier_contours::polyline::{PlineSource, PlineVertex, Polyline};

/// Closed straight-edged polyline through `vertices`.
pub fn polygon(vertices: &[[f64; 2]]) -> Polyline<f64> {
    let mut pl = Polyline::new_closed();
    for &[x, y] in vertices {
        pl.vertex_data.push(PlineVertex::new(x, y, 0.0));
    }
    pl
}

/// Axis-aligned rectangle spanning `min` to `max`.
#[cfg(test)]
pub fn rectangle(min: [f64; 2], max: [f64; 2]) -> Polyline<f64> {
    polygon(&[
        [min[0], min[1]],
        [max[0], min[1]],
        [max[0], max[1]],
        [min[0], max[1]],
    ])
}

/// Vertex positions of `pl` in order. Bulge values are dropped: every polyline built
/// from user polygons has straight edges, and so does any boolean result of them.
pub fn vertices(pl: &Polyline<f64>) -> Vec<[f64; 2]> {
    pl.vertex_data.iter().map(|v| [v.x, v.y]).collect()
}

pub fn is_valid_closed_polyline(pl: &Polyline<f64>) -> bool {
    pl.is_closed() && pl.vertex_count() >= 2
}
