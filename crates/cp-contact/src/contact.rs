use cp_core::{Error, Voxel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Two face-adjacent voxels: `label1` holds the first label, `label2` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactPoint {
    pub label1: Voxel,
    pub label2: Voxel,
}

impl ContactPoint {
    /// Axis along which the two voxels differ, or `None` if they are not
    /// face-adjacent.
    pub fn axis(&self) -> Option<Axis> {
        if !self.label1.is_face_adjacent(self.label2) {
            return None;
        }
        if self.label1.x != self.label2.x {
            Some(Axis::X)
        } else if self.label1.y != self.label2.y {
            Some(Axis::Y)
        } else {
            Some(Axis::Z)
        }
    }

    pub fn to_flat(&self) -> [u32; 6] {
        let a = self.label1;
        let b = self.label2;
        [a.x, a.y, a.z, b.x, b.y, b.z]
    }
}

/// Groups a flat `x1, y1, z1, x2, y2, z2, ...` buffer into contact points.
pub fn contact_points_from_flat(flat: &[u32]) -> Result<Vec<ContactPoint>, Error> {
    if flat.len() % 6 != 0 {
        return Err(Error::SizeMismatch {
            expected: flat.len() - flat.len() % 6,
            actual: flat.len(),
        });
    }

    Ok(flat
        .chunks_exact(6)
        .map(|c| ContactPoint {
            label1: Voxel::new(c[0], c[1], c[2]),
            label2: Voxel::new(c[3], c[4], c[5]),
        })
        .collect())
}
