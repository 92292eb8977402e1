/// Integer voxel coordinate inside a volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Voxel {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Voxel {
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    pub fn manhattan(self, other: Self) -> u64 {
        u64::from(self.x.abs_diff(other.x))
            + u64::from(self.y.abs_diff(other.y))
            + u64::from(self.z.abs_diff(other.z))
    }

    /// True when the voxels share a face (6-connectivity).
    pub fn is_face_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }

    pub fn to_array(self) -> [u32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[u32; 3]> for Voxel {
    fn from([x, y, z]: [u32; 3]) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::Voxel;

    #[test]
    fn face_adjacency_is_unit_manhattan() {
        let a = Voxel::new(2, 3, 4);

        assert!(a.is_face_adjacent(Voxel::new(1, 3, 4)));
        assert!(a.is_face_adjacent(Voxel::new(2, 3, 5)));
        assert!(!a.is_face_adjacent(a));
        assert!(!a.is_face_adjacent(Voxel::new(3, 4, 4)));
        assert_eq!(a.manhattan(Voxel::new(0, 0, 0)), 9);
    }

    #[test]
    fn array_conversion() {
        let v = Voxel::from([7, 8, 9]);
        assert_eq!(v, Voxel::new(7, 8, 9));
        assert_eq!(v.to_array(), [7, 8, 9]);
    }
}
