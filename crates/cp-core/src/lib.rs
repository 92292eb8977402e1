//! Foundational primitives for dense labeled volumes.
//!
//! ## Memory Layout
//! Volumes are flat, contiguous buffers in x-fastest, y-next, z-slowest
//! order. The voxel at `(x, y, z)` lives at linear index
//! `x + sx * (y + sy * z)`. There is no padding and no stride other than the
//! volume dimensions themselves.
//!
//! ## Borrowing
//! [`VolumeView`] borrows a caller-owned buffer read-only, so any number of
//! views (and scans) may share one buffer. [`Volume`] is the owned variant
//! used by tools and tests.
//!
//! ## 2D Inputs
//! A 2D label image is a volume with `sz == 1`; see
//! [`VolumeView::from_slice_2d`].

mod error;
mod geom;
mod volume;

pub use error::Error;
pub use geom::Voxel;
pub use volume::{Volume, VolumeView};
