use cp_core::{Error, VolumeView, Voxel};
use tracing::{debug, warn};

use crate::config::{Connectivity, ContactScanConfig, LabelPolicy};
use crate::contact::ContactPoint;

/// Finds every face-adjacent `label1`/`label2` voxel pair in a flat volume.
///
/// `data` is read as an `sx * sy * sz` volume in x-fastest order and must hold
/// at least that many elements. Only `connectivity == 6` is supported; any
/// other value fails before the volume is touched.
///
/// Returns six values per contact, `x1, y1, z1, x2, y2, z2`, where the first
/// voxel carries `label1` and the second carries `label2`.
pub fn find_contact_points3d<T: Copy + PartialEq>(
    data: &[T],
    label1: T,
    label2: T,
    sx: usize,
    sy: usize,
    sz: usize,
    connectivity: i64,
) -> Result<Vec<u32>, Error> {
    let connectivity = Connectivity::try_from(connectivity).inspect_err(|_| {
        warn!(connectivity, "rejecting contact scan: unsupported connectivity");
    })?;
    let vol = VolumeView::from_slice(sx, sy, sz, data)?;

    match connectivity {
        Connectivity::C6 => find_contact_points3d_6(&vol, label1, label2),
    }
}

/// 6-connected scan kernel.
///
/// Fails only when a non-empty volume has a dimension too large for `u32`
/// coordinates.
pub fn find_contact_points3d_6<T: Copy + PartialEq>(
    vol: &VolumeView<'_, T>,
    label1: T,
    label2: T,
) -> Result<Vec<u32>, Error> {
    check_coord_range(vol)?;

    let mut out = Vec::new();
    scan6(vol, label1, label2, |first, second| {
        out.extend_from_slice(&first);
        out.extend_from_slice(&second);
    });

    debug!(
        sx = vol.sx(),
        sy = vol.sy(),
        sz = vol.sz(),
        contacts = out.len() / 6,
        "contact scan finished"
    );

    Ok(out)
}

/// Typed entry point over a validated view.
pub fn find_contact_points<T: Copy + PartialEq>(
    vol: &VolumeView<'_, T>,
    label1: T,
    label2: T,
    cfg: &ContactScanConfig,
) -> Result<Vec<ContactPoint>, Error> {
    if cfg.label_policy == LabelPolicy::RejectEqual && label1 == label2 {
        warn!("rejecting contact scan: label1 == label2");
        return Err(Error::EqualLabels);
    }
    check_coord_range(vol)?;

    let mut out = Vec::new();
    match cfg.connectivity {
        Connectivity::C6 => scan6(vol, label1, label2, |first, second| {
            out.push(ContactPoint {
                label1: Voxel::from(first),
                label2: Voxel::from(second),
            });
        }),
    }

    debug!(
        sx = vol.sx(),
        sy = vol.sy(),
        sz = vol.sz(),
        contacts = out.len(),
        "contact scan finished"
    );

    Ok(out)
}

/// Coordinates are emitted as `u32`. An empty volume emits none, so its
/// dimensions are not constrained.
fn check_coord_range<T>(vol: &VolumeView<'_, T>) -> Result<(), Error> {
    if vol.is_empty() {
        return Ok(());
    }
    let (sx, sy, sz) = vol.dims();
    for len in [sx, sy, sz] {
        if u32::try_from(len.saturating_sub(1)).is_err() {
            return Err(Error::OutOfBounds);
        }
    }
    Ok(())
}

/// Calls `emit(label1_voxel, label2_voxel)` for every contact in scan order.
///
/// Callers must run [`check_coord_range`] first.
fn scan6<T, F>(vol: &VolumeView<'_, T>, label1: T, label2: T, mut emit: F)
where
    T: Copy + PartialEq,
    F: FnMut([u32; 3], [u32; 3]),
{
    let (sx, sy, sz) = vol.dims();
    let data = vol.as_slice();

    // Backward neighbor offsets. Each adjacency is tested from the voxel with
    // the larger linear index only.
    let back_x = 1;
    let back_y = sx;
    let back_z = sx * sy;

    let mut loc = 0usize;

    for z in 0..sz {
        for y in 0..sy {
            for x in 0..sx {
                let cur = data[loc];
                if cur == label1 || cur == label2 {
                    let cur_is_label1 = cur == label1;
                    let test_value = if cur_is_label1 { label2 } else { label1 };
                    let here = [x as u32, y as u32, z as u32];

                    let mut found = |there: [u32; 3]| {
                        if cur_is_label1 {
                            emit(here, there);
                        } else {
                            emit(there, here);
                        }
                    };

                    if x > 0 && data[loc - back_x] == test_value {
                        found([here[0] - 1, here[1], here[2]]);
                    }
                    if y > 0 && data[loc - back_y] == test_value {
                        found([here[0], here[1] - 1, here[2]]);
                    }
                    if z > 0 && data[loc - back_z] == test_value {
                        found([here[0], here[1], here[2] - 1]);
                    }
                }
                loc += 1;
            }
        }
    }
}
