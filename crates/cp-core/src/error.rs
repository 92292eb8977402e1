use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    OutOfBounds,
    UnsupportedConnectivity(i64),
    EqualLabels,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::OutOfBounds => write!(f, "out of bounds"),
            Self::UnsupportedConnectivity(c) => {
                write!(f, "unsupported connectivity {c}: only 6 (3D faces) is supported")
            }
            Self::EqualLabels => write!(f, "label1 and label2 must differ"),
        }
    }
}

impl std::error::Error for Error {}
