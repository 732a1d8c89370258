use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    SizeMismatch { expected: usize, actual: usize },
    RaggedRows { row: usize },
    SchemaAlreadyCreated,
    SchemaNotCreated,
    DuplicateNode { id: u32 },
    UnknownNode { id: u32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::RaggedRows { row } => {
                write!(f, "row {row} has a different length than row 0")
            }
            Self::SchemaAlreadyCreated => write!(f, "schema already created on this store"),
            Self::SchemaNotCreated => write!(f, "schema has not been created on this store"),
            Self::DuplicateNode { id } => write!(f, "node id {id} already exists"),
            Self::UnknownNode { id } => write!(f, "node id {id} does not exist"),
        }
    }
}

impl std::error::Error for Error {}
