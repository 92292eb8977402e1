use cp_core::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    C6,
}

impl Connectivity {
    pub fn neighbors(self) -> i64 {
        match self {
            Self::C6 => 6,
        }
    }
}

impl TryFrom<i64> for Connectivity {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            6 => Ok(Self::C6),
            other => Err(Error::UnsupportedConnectivity(other)),
        }
    }
}

/// What to do when `label1 == label2`.
///
/// `Allow` keeps the raw behavior: every same-label backward adjacency is
/// emitted as a self-pair with the visited voxel first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelPolicy {
    #[default]
    Allow,
    RejectEqual,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactScanConfig {
    pub connectivity: Connectivity,
    pub label_policy: LabelPolicy,
}

impl ContactScanConfig {
    /// Builds a config from a raw neighbor count, failing for anything but 6.
    pub fn with_connectivity(connectivity: i64) -> Result<Self, Error> {
        Ok(Self {
            connectivity: Connectivity::try_from(connectivity)?,
            ..Self::default()
        })
    }
}
