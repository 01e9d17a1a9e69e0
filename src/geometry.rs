//! Static geometry catalog: a unit cube (wireframe and solid variants) and a
//! coordinate-axes marker, expanded from shared corner data into flat
//! vertex/color lists that live side by side in two append-only buffers.

/// Primitive assembly rule for a vertex range.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Topology {
    LineStrip,
    TriangleList,
    LineList,
}

/// A range of the shared vertex/color buffers plus its topology. Immutable
/// once handed out by [`GeometryBank::load`].
#[derive(Clone, Copy, Debug)]
pub struct ShapeDescriptor {
    pub start: u32,
    pub count: u32,
    pub topology: Topology,
}

/// Shared vertex and color storage. Every loaded shape occupies a disjoint
/// contiguous range; positions and colors stay paired 1:1.
pub struct GeometryBank {
    points: Vec<[f32; 4]>,
    colors: Vec<[f32; 4]>,
}

impl GeometryBank {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Appends one shape's data and records where it landed.
    pub fn load(
        &mut self,
        points: &[[f32; 4]],
        colors: &[[f32; 4]],
        topology: Topology,
    ) -> ShapeDescriptor {
        debug_assert_eq!(points.len(), colors.len());
        let start = self.points.len() as u32;
        self.points.extend_from_slice(points);
        self.colors.extend_from_slice(colors);
        ShapeDescriptor {
            start,
            count: points.len() as u32,
            topology,
        }
    }

    pub fn points(&self) -> &[[f32; 4]] {
        &self.points
    }

    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }
}

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const LIGHT_RED: [f32; 4] = [1.0, 0.5, 0.5, 1.0];
const LIGHT_GREEN: [f32; 4] = [0.5, 1.0, 0.5, 1.0];
const LIGHT_BLUE: [f32; 4] = [0.5, 0.5, 1.0, 1.0];

/// Corners of a unit cube centered on the origin.
const CUBE_CORNERS: [[f32; 4]; 8] = [
    [0.5, 0.5, 0.5, 1.0],
    [0.5, 0.5, -0.5, 1.0],
    [0.5, -0.5, 0.5, 1.0],
    [0.5, -0.5, -0.5, 1.0],
    [-0.5, 0.5, 0.5, 1.0],
    [-0.5, 0.5, -0.5, 1.0],
    [-0.5, -0.5, 0.5, 1.0],
    [-0.5, -0.5, -0.5, 1.0],
];

/// Six open rectangular loops, five vertices each (closing on the start
/// vertex), drawn as one connected line strip.
const WIRE_CUBE_LOOKUPS: [usize; 30] = [
    0, 4, 6, 2, 0, // front
    1, 0, 2, 3, 1, // right
    5, 1, 3, 7, 5, // back
    4, 5, 7, 6, 4, // left
    4, 0, 1, 5, 4, // top
    6, 7, 3, 2, 6, // bottom
];

/// Six faces, two triangles each.
const SOLID_CUBE_LOOKUPS: [usize; 36] = [
    0, 4, 6, 0, 6, 2, // front
    1, 0, 2, 1, 2, 3, // right
    5, 1, 3, 5, 3, 7, // back
    4, 5, 7, 4, 7, 6, // left
    4, 0, 1, 4, 1, 5, // top
    6, 7, 3, 6, 3, 2, // bottom
];

/// One color per face, in face order.
const FACE_COLORS: [[f32; 4]; 6] = [LIGHT_BLUE, LIGHT_GREEN, LIGHT_RED, BLUE, RED, GREEN];

/// Descriptors for every shape the viewer draws.
pub struct Shapes {
    pub wire_cube: ShapeDescriptor,
    pub solid_cube: ShapeDescriptor,
    pub axes: ShapeDescriptor,
}

/// Builds the full catalog. Runs exactly once at startup, before the bank is
/// uploaded and any descriptor is referenced by a draw.
pub fn build() -> (GeometryBank, Shapes) {
    let mut bank = GeometryBank::new();

    let wire_points: Vec<[f32; 4]> = WIRE_CUBE_LOOKUPS.iter().map(|&i| CUBE_CORNERS[i]).collect();
    let wire_colors = vec![WHITE; wire_points.len()];
    let wire_cube = bank.load(&wire_points, &wire_colors, Topology::LineStrip);

    let solid_points: Vec<[f32; 4]> =
        SOLID_CUBE_LOOKUPS.iter().map(|&i| CUBE_CORNERS[i]).collect();
    // One distinct color per face run of six vertices.
    let solid_colors: Vec<[f32; 4]> = (0..solid_points.len())
        .map(|i| FACE_COLORS[i / 6])
        .collect();
    let solid_cube = bank.load(&solid_points, &solid_colors, Topology::TriangleList);

    // Three axis segments through the origin, length 4 units.
    let axes_points: [[f32; 4]; 6] = [
        [2.0, 0.0, 0.0, 1.0],
        [-2.0, 0.0, 0.0, 1.0],
        [0.0, 2.0, 0.0, 1.0],
        [0.0, -2.0, 0.0, 1.0],
        [0.0, 0.0, 2.0, 1.0],
        [0.0, 0.0, -2.0, 1.0],
    ];
    let axes_colors = [GREEN, GREEN, RED, RED, BLUE, BLUE];
    let axes = bank.load(&axes_points, &axes_colors, Topology::LineList);

    (bank, Shapes {
        wire_cube,
        solid_cube,
        axes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_cube_is_thirty_white_vertices() {
        let (bank, shapes) = build();
        assert_eq!(shapes.wire_cube.count, 30);
        assert_eq!(shapes.wire_cube.topology, Topology::LineStrip);
        let start = shapes.wire_cube.start as usize;
        for c in &bank.colors()[start..start + 30] {
            assert_eq!(*c, WHITE);
        }
    }

    #[test]
    fn solid_cube_has_six_color_runs_of_six() {
        let (bank, shapes) = build();
        assert_eq!(shapes.solid_cube.count, 36);
        assert_eq!(shapes.solid_cube.topology, Topology::TriangleList);
        let start = shapes.solid_cube.start as usize;
        let colors = &bank.colors()[start..start + 36];
        let mut distinct = Vec::new();
        for run in colors.chunks(6) {
            // every vertex in a face run shares the face color
            for c in run {
                assert_eq!(*c, run[0]);
            }
            assert!(!distinct.contains(&run[0]));
            distinct.push(run[0]);
        }
        assert_eq!(distinct.len(), 6);
    }

    #[test]
    fn axes_marker_is_six_vertices_two_per_color() {
        let (bank, shapes) = build();
        assert_eq!(shapes.axes.count, 6);
        assert_eq!(shapes.axes.topology, Topology::LineList);
        let start = shapes.axes.start as usize;
        let colors = &bank.colors()[start..start + 6];
        for expected in [GREEN, RED, BLUE] {
            assert_eq!(colors.iter().filter(|c| **c == expected).count(), 2);
        }
    }

    #[test]
    fn shapes_occupy_disjoint_contiguous_ranges() {
        let (bank, shapes) = build();
        assert_eq!(bank.points().len(), bank.colors().len());
        assert_eq!(shapes.wire_cube.start, 0);
        assert_eq!(shapes.solid_cube.start, 30);
        assert_eq!(shapes.axes.start, 66);
        assert_eq!(bank.points().len(), 72);
    }

    #[test]
    fn axis_segments_pass_through_origin() {
        let (bank, shapes) = build();
        let start = shapes.axes.start as usize;
        let pts = &bank.points()[start..start + 6];
        for pair in pts.chunks(2) {
            // each segment's endpoints are opposite, so the midpoint is the origin
            for k in 0..3 {
                assert_eq!(pair[0][k] + pair[1][k], 0.0);
            }
        }
    }
}
