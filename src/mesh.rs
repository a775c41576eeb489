/// Triangle-fan index list for a boundary of `vertex_count` points.
///
/// The boundary's first point is the observer, so triangle `i` is
/// `{0, i + 1, i + 2}`. Fewer than three points triangulate to nothing.
pub fn fan_triangles(vertex_count: usize) -> Vec<u16> {
    if vertex_count < 3 {
        return Vec::new();
    }
    let mut indices = Vec::with_capacity((vertex_count - 2) * 3);
    for i in 0..vertex_count - 2 {
        indices.push(0);
        indices.push((i + 1) as u16);
        indices.push((i + 2) as u16);
    }
    indices
}
