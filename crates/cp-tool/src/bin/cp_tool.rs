use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use cp_contact::{
    Connectivity, ContactPoint, ContactScanConfig, LabelPolicy, find_contact_points,
};
use cp_core::{Volume, VolumeView};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cp_tool")]
#[command(about = "Find contact points between two labels in a raw 3D label volume")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a raw volume and write contacts.json + meta.json.
    #[command(name = "scan")]
    Scan(ScanArgs),
    /// Write a two-block raw volume (labels 1 and 2) for trying `scan`.
    #[command(name = "synth")]
    Synth(SynthArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Dtype {
    U8,
    U16,
    U32,
    U64,
}

impl Dtype {
    fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
        }
    }
}

#[derive(Args, Debug, Clone)]
struct VolumeArgs {
    /// Volume size as SX,SY,SZ (x fastest).
    #[arg(long, required = true, value_delimiter = ',')]
    dims: Vec<usize>,
    /// Element type of the raw little-endian buffer.
    #[arg(long, value_enum, default_value_t = Dtype::U32)]
    dtype: Dtype,
}

#[derive(Args, Debug, Clone)]
struct ScanArgs {
    #[arg(long, required = true)]
    input: PathBuf,
    #[command(flatten)]
    volume: VolumeArgs,
    #[arg(long, required = true)]
    label1: u64,
    #[arg(long, required = true)]
    label2: u64,
    #[arg(long, default_value_t = 6)]
    connectivity: i64,
    /// Fail instead of emitting self-pairs when label1 == label2.
    #[arg(long, default_value_t = false)]
    reject_equal_labels: bool,
    #[arg(long, default_value = "out/contacts")]
    out: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct SynthArgs {
    #[command(flatten)]
    volume: VolumeArgs,
    #[arg(long, default_value = "out/two_blocks.raw")]
    out: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
struct ContactDto {
    label1: [u32; 3],
    label2: [u32; 3],
}

#[derive(Debug, Clone, Serialize)]
struct MetaScan {
    input: String,
    dims: [usize; 3],
    dtype: &'static str,
    label1: u64,
    label2: u64,
    connectivity: i64,
    label_policy: &'static str,
    contact_count: usize,
    elapsed_ms: f64,
}

/// Label element types readable from a raw little-endian buffer.
trait RawLabel: Copy + PartialEq + TryFrom<u64> {
    const WIDTH: usize;

    fn read_le(bytes: &[u8]) -> Self;

    fn write_le(self, out: &mut Vec<u8>);
}

macro_rules! impl_raw_label {
    ($($t:ty),*) => {
        $(
            impl RawLabel for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn read_le(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_le_bytes(buf)
                }

                fn write_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_raw_label!(u8, u16, u32, u64);

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Command::Scan(args) => match args.volume.dtype {
            Dtype::U8 => run_scan::<u8>(&args),
            Dtype::U16 => run_scan::<u16>(&args),
            Dtype::U32 => run_scan::<u32>(&args),
            Dtype::U64 => run_scan::<u64>(&args),
        },
        Command::Synth(args) => match args.volume.dtype {
            Dtype::U8 => run_synth::<u8>(&args),
            Dtype::U16 => run_synth::<u16>(&args),
            Dtype::U32 => run_synth::<u32>(&args),
            Dtype::U64 => run_synth::<u64>(&args),
        },
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_scan<T: RawLabel>(args: &ScanArgs) -> Result<()> {
    ensure_file_exists(&args.input, "input")?;
    let [sx, sy, sz] = dims3(&args.volume.dims)?;

    let label1 = to_label::<T>(args.label1, args.volume.dtype, "label1")?;
    let label2 = to_label::<T>(args.label2, args.volume.dtype, "label2")?;
    let cfg = ContactScanConfig {
        connectivity: Connectivity::try_from(args.connectivity)
            .with_context(|| format!("--connectivity {}", args.connectivity))?,
        label_policy: if args.reject_equal_labels {
            LabelPolicy::RejectEqual
        } else {
            LabelPolicy::Allow
        },
    };

    let data = load_raw::<T>(&args.input, sx, sy, sz)?;
    let view = VolumeView::from_slice(sx, sy, sz, &data)
        .with_context(|| format!("viewing {} as {sx}x{sy}x{sz}", args.input.display()))?;

    let t0 = Instant::now();
    let contacts = find_contact_points(&view, label1, label2, &cfg).with_context(|| {
        format!(
            "scanning {} for labels {} / {}",
            args.input.display(),
            args.label1,
            args.label2
        )
    })?;
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;

    info!(
        contacts = contacts.len(),
        elapsed_ms,
        "scanned {}",
        args.input.display()
    );

    fs::create_dir_all(&args.out)
        .with_context(|| format!("creating output directory {}", args.out.display()))?;

    let dtos: Vec<ContactDto> = contacts.iter().map(contact_dto).collect();
    write_json(args.out.join("contacts.json"), &dtos)?;
    write_json(
        args.out.join("meta.json"),
        &MetaScan {
            input: args.input.display().to_string(),
            dims: [sx, sy, sz],
            dtype: args.volume.dtype.name(),
            label1: args.label1,
            label2: args.label2,
            connectivity: cfg.connectivity.neighbors(),
            label_policy: match cfg.label_policy {
                LabelPolicy::Allow => "allow",
                LabelPolicy::RejectEqual => "reject_equal",
            },
            contact_count: contacts.len(),
            elapsed_ms,
        },
    )?;

    Ok(())
}

fn run_synth<T: RawLabel>(args: &SynthArgs) -> Result<()> {
    let [sx, sy, sz] = dims3(&args.volume.dims)?;
    let one = to_label::<T>(1, args.volume.dtype, "label 1")?;
    let two = to_label::<T>(2, args.volume.dtype, "label 2")?;
    let byte_len = voxel_count(sx, sy, sz)?
        .checked_mul(T::WIDTH)
        .context("volume byte size overflows")?;

    let mut vol = Volume::new_fill(sx, sy, sz, one);
    vol.fill_box([sx / 2, 0, 0], [sx, sy, sz], two);

    let mut bytes = Vec::with_capacity(byte_len);
    for &v in vol.data() {
        v.write_le(&mut bytes);
    }

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    fs::write(&args.out, bytes).with_context(|| format!("writing {}", args.out.display()))?;

    info!(
        "wrote {sx}x{sy}x{sz} {} volume to {}; expected contacts: {}",
        args.volume.dtype.name(),
        args.out.display(),
        if sx >= 2 { sy * sz } else { 0 }
    );

    Ok(())
}

fn dims3(dims: &[usize]) -> Result<[usize; 3]> {
    match dims {
        &[sx, sy, sz] => Ok([sx, sy, sz]),
        other => bail!("--dims expects SX,SY,SZ, got {} values.", other.len()),
    }
}

fn voxel_count(sx: usize, sy: usize, sz: usize) -> Result<usize> {
    sx.checked_mul(sy)
        .and_then(|v| v.checked_mul(sz))
        .with_context(|| format!("volume dimensions {sx}x{sy}x{sz} overflow"))
}

fn to_label<T: RawLabel>(value: u64, dtype: Dtype, what: &str) -> Result<T> {
    match T::try_from(value) {
        Ok(v) => Ok(v),
        Err(_) => bail!("{what} = {value} does not fit in {}.", dtype.name()),
    }
}

fn load_raw<T: RawLabel>(path: &Path, sx: usize, sy: usize, sz: usize) -> Result<Vec<T>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;

    let count = voxel_count(sx, sy, sz)?;
    let expected = count
        .checked_mul(T::WIDTH)
        .context("volume byte size overflows")?;

    if bytes.len() != expected {
        bail!(
            "raw volume size mismatch: {sx}x{sy}x{sz} x {} bytes = {}, file has {}.",
            T::WIDTH,
            expected,
            bytes.len()
        );
    }

    Ok(bytes.chunks_exact(T::WIDTH).map(T::read_le).collect())
}

fn contact_dto(cp: &ContactPoint) -> ContactDto {
    ContactDto {
        label1: cp.label1.to_array(),
        label2: cp.label2.to_array(),
    }
}

fn write_json(path: PathBuf, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(&path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn ensure_file_exists(path: &Path, what: &str) -> Result<()> {
    if !path.exists() {
        bail!("{} file does not exist: {}", what, path.display());
    }
    if !path.is_file() {
        bail!("{} path is not a file: {}", what, path.display());
    }
    Ok(())
}
