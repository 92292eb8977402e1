use crate::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Volume<T> {
    sx: usize,
    sy: usize,
    sz: usize,
    data: Vec<T>,
}

impl<T> Volume<T> {
    pub fn from_vec(sx: usize, sy: usize, sz: usize, data: Vec<T>) -> Result<Self, Error> {
        let expected = voxel_count(sx, sy, sz).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { sx, sy, sz, data })
    }

    pub fn dims(&self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&T> {
        if x >= self.sx || y >= self.sy || z >= self.sz {
            return None;
        }
        self.data.get(x + self.sx * (y + self.sy * z))
    }

    pub fn get_mut(&mut self, x: usize, y: usize, z: usize) -> Option<&mut T> {
        if x >= self.sx || y >= self.sy || z >= self.sz {
            return None;
        }
        self.data.get_mut(x + self.sx * (y + self.sy * z))
    }

    pub fn as_view(&self) -> VolumeView<'_, T> {
        VolumeView {
            sx: self.sx,
            sy: self.sy,
            sz: self.sz,
            data: &self.data,
        }
    }
}

impl<T: Clone> Volume<T> {
    pub fn new_fill(sx: usize, sy: usize, sz: usize, value: T) -> Self {
        let len = voxel_count(sx, sy, sz).expect("volume size overflow");
        Self {
            sx,
            sy,
            sz,
            data: vec![value; len],
        }
    }

    /// Fills the half-open box `[x0, x1) x [y0, y1) x [z0, z1)`, clipped to the
    /// volume bounds.
    pub fn fill_box(&mut self, min: [usize; 3], max: [usize; 3], value: T) {
        let x1 = max[0].min(self.sx);
        let y1 = max[1].min(self.sy);
        let z1 = max[2].min(self.sz);
        for z in min[2]..z1 {
            for y in min[1]..y1 {
                let row = self.sx * (y + self.sy * z);
                for x in min[0]..x1 {
                    self.data[row + x] = value.clone();
                }
            }
        }
    }
}

/// Borrowed, read-only view over a contiguous label buffer.
#[derive(Debug, Clone, Copy)]
pub struct VolumeView<'a, T> {
    sx: usize,
    sy: usize,
    sz: usize,
    data: &'a [T],
}

impl<'a, T> VolumeView<'a, T> {
    /// Wraps `data` as an `sx * sy * sz` volume.
    ///
    /// `data` may be longer than the volume; trailing elements are ignored.
    pub fn from_slice(sx: usize, sy: usize, sz: usize, data: &'a [T]) -> Result<Self, Error> {
        let min_len = voxel_count(sx, sy, sz).ok_or(Error::SizeMismatch {
            expected: usize::MAX,
            actual: data.len(),
        })?;

        if data.len() < min_len {
            return Err(Error::SizeMismatch {
                expected: min_len,
                actual: data.len(),
            });
        }

        Ok(Self {
            sx,
            sy,
            sz,
            data: &data[..min_len],
        })
    }

    pub fn from_slice_2d(sx: usize, sy: usize, data: &'a [T]) -> Result<Self, Error> {
        Self::from_slice(sx, sy, 1, data)
    }

    pub fn sx(&self) -> usize {
        self.sx
    }

    pub fn sy(&self) -> usize {
        self.sy
    }

    pub fn sz(&self) -> usize {
        self.sz
    }

    pub fn dims(&self) -> (usize, usize, usize) {
        (self.sx, self.sy, self.sz)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Linear index of `(x, y, z)`. Does not bounds-check.
    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        x + self.sx * (y + self.sy * z)
    }

    /// Inverse of [`Self::index`]. Returns `None` past the end of the volume.
    pub fn coords(&self, index: usize) -> Option<(usize, usize, usize)> {
        if index >= self.data.len() {
            return None;
        }
        let x = index % self.sx;
        let rest = index / self.sx;
        Some((x, rest % self.sy, rest / self.sy))
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&'a T> {
        if x >= self.sx || y >= self.sy || z >= self.sz {
            return None;
        }
        self.data.get(self.index(x, y, z))
    }

    /// Exactly `sx * sy * sz` elements.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

fn voxel_count(sx: usize, sy: usize, sz: usize) -> Option<usize> {
    sx.checked_mul(sy)?.checked_mul(sz)
}

#[cfg(test)]
mod tests {
    use super::{Volume, VolumeView};
    use crate::Error;

    #[test]
    fn view_indexing_is_x_fastest() {
        let data: Vec<u16> = (0..24).collect();
        let view = VolumeView::from_slice(4, 3, 2, &data).expect("valid view");

        assert_eq!(view.dims(), (4, 3, 2));
        assert_eq!(view.get(0, 0, 0), Some(&0));
        assert_eq!(view.get(3, 0, 0), Some(&3));
        assert_eq!(view.get(0, 1, 0), Some(&4));
        assert_eq!(view.get(0, 0, 1), Some(&12));
        assert_eq!(view.get(3, 2, 1), Some(&23));
        assert_eq!(view.get(4, 0, 0), None);
        assert_eq!(view.get(0, 3, 0), None);
        assert_eq!(view.get(0, 0, 2), None);
    }

    #[test]
    fn coords_inverts_index() {
        let data = vec![0u8; 5 * 4 * 3];
        let view = VolumeView::from_slice(5, 4, 3, &data).expect("valid view");

        for z in 0..3 {
            for y in 0..4 {
                for x in 0..5 {
                    let i = view.index(x, y, z);
                    assert_eq!(view.coords(i), Some((x, y, z)));
                }
            }
        }
        assert_eq!(view.coords(60), None);
    }

    #[test]
    fn short_buffer_is_rejected_and_long_buffer_truncated() {
        let data = vec![1u32; 7];
        let err = VolumeView::from_slice(2, 2, 2, &data).expect_err("too short");
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 8,
                actual: 7
            }
        );

        let view = VolumeView::from_slice(3, 2, 1, &data).expect("long buffer is fine");
        assert_eq!(view.len(), 6);
        assert_eq!(view.as_slice().len(), 6);
    }

    #[test]
    fn zero_sized_dims_give_empty_view() {
        let data: Vec<u8> = Vec::new();
        let view = VolumeView::from_slice(0, 5, 5, &data).expect("empty view");
        assert!(view.is_empty());
        assert_eq!(view.coords(0), None);
    }

    #[test]
    fn owned_volume_fill_box_and_view() {
        let mut vol = Volume::new_fill(4, 4, 4, 0u8);
        vol.fill_box([1, 1, 1], [3, 9, 2], 7);
        *vol.get_mut(0, 0, 3).expect("in bounds") = 9;

        assert_eq!(vol.get(1, 1, 1), Some(&7));
        assert_eq!(vol.get(2, 3, 1), Some(&7));
        assert_eq!(vol.get(1, 1, 2), Some(&0));
        assert_eq!(vol.get(0, 0, 3), Some(&9));
        assert_eq!(vol.data().iter().filter(|&&v| v == 7).count(), 2 * 3);

        let view = vol.as_view();
        assert_eq!(view.get(2, 2, 1), Some(&7));
    }

    #[test]
    fn from_vec_requires_exact_length() {
        assert!(Volume::from_vec(2, 2, 1, vec![0u8; 4]).is_ok());
        assert_eq!(
            Volume::from_vec(2, 2, 1, vec![0u8; 5]).expect_err("wrong length"),
            Error::SizeMismatch {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn view_2d_is_single_slice() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let view = VolumeView::from_slice_2d(3, 2, &data).expect("valid 2d view");
        assert_eq!(view.dims(), (3, 2, 1));
        assert_eq!(view.get(2, 1, 0), Some(&6));
    }
}
