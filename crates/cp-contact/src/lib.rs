//! Contact point detection between two labeled regions of a dense 3D volume.
//!
//! A contact point is a pair of face-adjacent voxels where one carries
//! `label1` and the other carries `label2`. Output is oriented: the
//! `label1` voxel always comes first, whichever voxel the scan reached first.
//!
//! Scan policy:
//! - Voxels are visited once in linear-index order (z, then y, then x).
//! - Only the three backward neighbors (-x, -y, -z) are tested, so each
//!   adjacent pair is seen from exactly one side and never reported twice.
//!
//! Connectivity options:
//! - [`Connectivity::C6`]: face neighbors. This is the only one supported;
//!   any other requested value is rejected before scanning.
//!
//! The flat API ([`find_contact_points3d`]) returns six `u32` per contact in
//! the order `x1, y1, z1, x2, y2, z2`. [`find_contact_points`] returns typed
//! [`ContactPoint`] values instead.

mod config;
mod contact;
mod scan;

pub use config::{Connectivity, ContactScanConfig, LabelPolicy};
pub use contact::{Axis, ContactPoint, contact_points_from_flat};
pub use scan::{find_contact_points, find_contact_points3d, find_contact_points3d_6};
