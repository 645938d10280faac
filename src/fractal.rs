// Fractal layout generator.
//
// The whole tree lives in one flat arena, packed generation by generation:
//
//   index:      0 | 1 2 | 3 4 5 6 | 7 ... 14 | ...
//   generation: 0 |  1  |    2    |    3     | ...
//
// Nothing stores a parent or child link. A segment's position is enough:
// the parent of `i` is `(i - 1) / 2` and the children of `p` sit at
// `2p + 1` (left) and `2p + 2` (right). The arena is rebuilt from scratch
// every frame in one forward pass, without recursion and without growing.

use crate::error::Error;
use crate::types::{FractalParameters, Point, Segment};

/// The trunk. Fixed geometry, independent of the parameters.
pub const ROOT: Segment = Segment {
    start: Point::new(0.0, -1.0),
    end: Point::new(0.0, -0.5),
    heading: 90.0,
    length: 0.5,
};

/// Project `length` along `heading` (degrees) from `origin`.
#[inline]
pub fn compute_endpoint(heading: f32, length: f32, origin: Point) -> Point {
    let rad = heading.to_radians();
    Point {
        x: origin.x + length * rad.cos(),
        y: origin.y + length * rad.sin(),
    }
}

/// A segment that grows out of the tip of `parent`.
#[inline]
pub fn derive_child(heading: f32, length: f32, parent: &Segment) -> Segment {
    Segment {
        start: parent.end,
        end: compute_endpoint(heading, length, parent.end),
        heading,
        length,
    }
}

/// Both children of `parent`, left first.
pub fn derive_branch_pair(parent: &Segment, params: &FractalParameters) -> (Segment, Segment) {
    let left = derive_child(
        parent.heading - params.left_angle_delta,
        parent.length * params.left_scale,
        parent,
    );
    let right = derive_child(
        parent.heading + params.right_angle_delta,
        parent.length * params.right_scale,
        parent,
    );
    (left, right)
}

/// Segments written for a tree with `depth` generations below the root:
/// 1 + 2 + 4 + ... + 2^depth. Saturates at `usize::MAX`.
pub fn required_count(depth: u32) -> usize {
    1usize
        .checked_shl(depth.saturating_add(1))
        .map_or(usize::MAX, |n| n - 1)
}

/// Where the parent of segment `index` lives. The root has none.
#[inline]
pub fn parent_index(index: usize) -> Option<usize> {
    if index == 0 { None } else { Some((index - 1) / 2) }
}

/// (left, right) slots for the children of segment `index`.
#[inline]
pub fn child_indices(index: usize) -> (usize, usize) {
    (2 * index + 1, 2 * index + 2)
}

/// Fixed-capacity arena holding one generated tree.
pub struct TreeLayout {
    segments: Vec<Segment>,
    generation_starts: Vec<usize>, // first index of each generation, root included
    capacity: usize,
}

impl TreeLayout {
    /// Reserve room for `capacity` segments. Nothing is generated yet.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            segments: Vec::with_capacity(capacity),
            generation_starts: Vec::with_capacity(usize::BITS as usize + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Every populated segment in draw order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Generations below the root held by the last successful `generate`.
    pub fn depth(&self) -> Option<u32> {
        self.generation_starts.len().checked_sub(1).map(|d| d as u32)
    }

    /// First index of every generation, root (0) first.
    pub fn generation_starts(&self) -> &[usize] {
        &self.generation_starts
    }

    /// The segments of generation `g`, or None if it was not generated.
    pub fn generation(&self, g: usize) -> Option<&[Segment]> {
        let start = *self.generation_starts.get(g)?;
        let end = self
            .generation_starts
            .get(g + 1)
            .copied()
            .unwrap_or(self.segments.len());
        Some(&self.segments[start..end])
    }

    /// The segment whose tip `index` grows from.
    pub fn parent(&self, index: usize) -> Option<&Segment> {
        if index >= self.segments.len() {
            return None;
        }
        parent_index(index).map(|p| &self.segments[p])
    }
}

/// Rebuild `layout` as a tree `depth` generations deep.
///
/// Fails with `CapacityExceeded` before touching the arena when the tree
/// would not fit; the previous tree stays intact in that case.
pub fn generate(depth: u32, params: &FractalParameters, layout: &mut TreeLayout) -> Result<(), Error> {
    let required = required_count(depth);
    if required > layout.capacity {
        return Err(Error::CapacityExceeded { depth, required, capacity: layout.capacity });
    }

    // Reserved up front, so this never reallocates.
    layout.segments.clear();
    layout.segments.resize(required, Segment::default());
    layout.segments[0] = ROOT;

    layout.generation_starts.clear();
    layout.generation_starts.push(0);

    let mut previous_generation_start = 0;
    let mut generation_start = 1;

    for _ in 0..depth {
        let parent_count = generation_start - previous_generation_start;

        for k in 0..parent_count {
            let parent = layout.segments[previous_generation_start + k];
            let (left, right) = derive_branch_pair(&parent, params);

            let slot = generation_start + 2 * k;
            layout.segments[slot] = left;
            layout.segments[slot + 1] = right;
        }

        layout.generation_starts.push(generation_start);
        previous_generation_start = generation_start;
        generation_start += 2 * parent_count;
    }

    debug_assert_eq!(generation_start, required);
    Ok(())
}
