//! Example: contact surface between a ball and the block around it.
//!
//! Builds a cubic volume of label 2 with a ball of label 1 in the middle,
//! scans for 1/2 contacts, and reports how many faces were found per axis.
//! While the ball stays inside the volume, the counts are its exposed face
//! area along each axis.
//!
//! Run from the workspace root:
//!   cargo run -p contact-points --example two_regions -- --help
//!   cargo run -p contact-points --example two_regions -- --size 48 --radius 15

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use contact_points::{Axis, ContactScanConfig, Volume, find_contact_points};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(about = "Find contact points between a voxel ball and its surroundings")]
struct Args {
    /// Edge length of the cubic volume
    #[arg(long, default_value_t = 32)]
    size: usize,

    /// Ball radius in voxels
    #[arg(long, default_value_t = 10.0)]
    radius: f32,

    /// Optional JSON output path for the contact list
    #[arg(long)]
    out: Option<String>,
}

#[derive(Serialize)]
struct ContactDto {
    label1: [u32; 3],
    label2: [u32; 3],
}

#[derive(Serialize)]
struct Report {
    size: usize,
    radius: f32,
    elapsed_ms: f64,
    faces_x: usize,
    faces_y: usize,
    faces_z: usize,
    contacts: Vec<ContactDto>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.size == 0 {
        bail!("--size must be positive");
    }

    let s = args.size;
    let c = (s as f32 - 1.0) * 0.5;
    let r2 = args.radius * args.radius;

    let mut vol = Volume::new_fill(s, s, s, 2u16);
    for z in 0..s {
        for y in 0..s {
            for x in 0..s {
                let d2 = (x as f32 - c).powi(2) + (y as f32 - c).powi(2) + (z as f32 - c).powi(2);
                if d2 <= r2 {
                    *vol.get_mut(x, y, z).context("voxel in bounds")? = 1;
                }
            }
        }
    }

    let t0 = Instant::now();
    let contacts = find_contact_points(&vol.as_view(), 1u16, 2, &ContactScanConfig::default())
        .context("scanning ball volume")?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    let mut faces = [0usize; 3];
    for cp in &contacts {
        match cp.axis() {
            Some(Axis::X) => faces[0] += 1,
            Some(Axis::Y) => faces[1] += 1,
            Some(Axis::Z) => faces[2] += 1,
            None => bail!("non-adjacent contact {cp:?}"),
        }
    }

    println!(
        "{} contacts in {:.3} ms (x: {}, y: {}, z: {})",
        contacts.len(),
        elapsed_ms,
        faces[0],
        faces[1],
        faces[2]
    );

    if let Some(path) = args.out {
        let report = Report {
            size: s,
            radius: args.radius,
            elapsed_ms,
            faces_x: faces[0],
            faces_y: faces[1],
            faces_z: faces[2],
            contacts: contacts
                .iter()
                .map(|cp| ContactDto {
                    label1: cp.label1.to_array(),
                    label2: cp.label2.to_array(),
                })
                .collect(),
        };
        let bytes = serde_json::to_vec_pretty(&report).context("serializing report")?;
        std::fs::write(&path, bytes).with_context(|| format!("writing {path}"))?;
        println!("wrote {path}");
    }

    Ok(())
}
