use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};

use super::geometry::Geometry;

/// The seven piece types.
///
/// Each type carries an ordered, cyclic list of geometries, one per distinct rotation state.
/// Shapes with rotational symmetry list fewer states: the square has one, the S, Z and rod
/// shapes have two, the others four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    /// 2×2 square.
    O = 0,
    /// L-shape.
    L = 1,
    /// Mirrored L-shape.
    J = 2,
    /// Z-shape.
    Z = 3,
    /// Mirrored Z-shape.
    S = 4,
    /// T-shape.
    T = 5,
    /// Straight rod.
    I = 6,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        ShapeKind::ALL[rng.random_range(0..ShapeKind::LEN)]
    }
}

impl ShapeKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::I,
    ];

    /// Returns the rotation states of this shape in counter-clockwise order.
    #[must_use]
    pub const fn geometries(self) -> &'static [Geometry] {
        match self {
            ShapeKind::O => O_GEOMETRIES,
            ShapeKind::L => L_GEOMETRIES,
            ShapeKind::J => J_GEOMETRIES,
            ShapeKind::Z => Z_GEOMETRIES,
            ShapeKind::S => S_GEOMETRIES,
            ShapeKind::T => T_GEOMETRIES,
            ShapeKind::I => I_GEOMETRIES,
        }
    }

    #[must_use]
    pub const fn rotation_count(self) -> usize {
        self.geometries().len()
    }
}

const O_GEOMETRIES: &[Geometry] = &[Geometry::new(&[&[1, 1], &[1, 1]])];

const L_GEOMETRIES: &[Geometry] = &[
    Geometry::new(&[&[0, 0, 0], &[1, 1, 1], &[1, 0, 0]]),
    Geometry::new(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 1]]),
    Geometry::new(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
    Geometry::new(&[&[1, 1, 0], &[0, 1, 0], &[0, 1, 0]]),
];

const J_GEOMETRIES: &[Geometry] = &[
    Geometry::new(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 1]]),
    Geometry::new(&[&[0, 1, 1], &[0, 1, 0], &[0, 1, 0]]),
    Geometry::new(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
    Geometry::new(&[&[0, 1, 0], &[0, 1, 0], &[1, 1, 0]]),
];

const Z_GEOMETRIES: &[Geometry] = &[
    Geometry::new(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
    Geometry::new(&[&[0, 1, 0], &[1, 1, 0], &[1, 0, 0]]),
];

const S_GEOMETRIES: &[Geometry] = &[
    Geometry::new(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
    Geometry::new(&[&[1, 0, 0], &[1, 1, 0], &[0, 1, 0]]),
];

const T_GEOMETRIES: &[Geometry] = &[
    Geometry::new(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
    Geometry::new(&[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]]),
    Geometry::new(&[&[0, 0, 0], &[1, 1, 1], &[0, 1, 0]]),
    Geometry::new(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]]),
];

const I_GEOMETRIES: &[Geometry] = &[
    Geometry::new(&[&[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0], &[0, 1, 0, 0]]),
    Geometry::new(&[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
];

#[cfg(test)]
mod tests {
    use rand::{SeedableRng as _, rngs::StdRng};

    use super::*;

    #[test]
    fn test_rotation_counts_follow_symmetry() {
        assert_eq!(ShapeKind::O.rotation_count(), 1);
        assert_eq!(ShapeKind::L.rotation_count(), 4);
        assert_eq!(ShapeKind::J.rotation_count(), 4);
        assert_eq!(ShapeKind::Z.rotation_count(), 2);
        assert_eq!(ShapeKind::S.rotation_count(), 2);
        assert_eq!(ShapeKind::T.rotation_count(), 4);
        assert_eq!(ShapeKind::I.rotation_count(), 2);
    }

    #[test]
    fn test_every_geometry_has_four_cells() {
        for kind in ShapeKind::ALL {
            for (rotation, geometry) in kind.geometries().iter().enumerate() {
                assert_eq!(
                    geometry.filled_count(),
                    4,
                    "{kind:?} rotation {rotation} should have 4 cells",
                );
            }
        }
    }

    #[test]
    fn test_geometries_are_square() {
        for kind in ShapeKind::ALL {
            for geometry in kind.geometries() {
                assert_eq!(geometry.width(), geometry.height(), "{kind:?}");
            }
        }
    }

    #[test]
    fn test_random_kind_covers_all_shapes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; ShapeKind::LEN];
        for _ in 0..500 {
            let kind: ShapeKind = rng.random();
            seen[kind as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "not every shape was drawn: {seen:?}");
    }
}
