use std::fmt;

use crate::objects::MeshFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Vertex,
    Normal,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Vertex => write!(f, "vertex"),
            Attribute::Normal => write!(f, "normal"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ObjError {
    #[error("resource `{name}` not found: {source}")]
    ResourceNotFound {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("line {line}: could not extract index from `{token}`")]
    UnparsableIndex { line: usize, token: String },

    /// `index` is the 1-based value as written in the file.
    #[error("mesh {mesh}: {attribute} index {index} out of range ({available} available)")]
    IndexOutOfRange {
        mesh: usize,
        attribute: Attribute,
        index: usize,
        available: usize,
    },

    #[error("{0:?} array construction not implemented yet")]
    UnsupportedFormat(MeshFormat),

    #[error("mesh {index} does not exist, document has {count}")]
    MeshNotFound { index: usize, count: usize },

    #[error("upload error: {0}")]
    Upload(String),
}

impl ObjError {
    pub fn malformed<T: ToString>(msg: T) -> Self {
        return ObjError::MalformedDocument(msg.to_string());
    }

    pub fn upload<T: ToString>(msg: T) -> Self {
        return ObjError::Upload(msg.to_string());
    }
}

pub type ObjResult<T> = Result<T, ObjError>;

/// What to do when loading or building fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Hand the error back to the caller.
    #[default]
    Recover,
    /// Treat every error as fatal and panic with its message.
    Abort,
}

impl ErrorPolicy {
    pub fn apply<T>(self, result: ObjResult<T>) -> ObjResult<T> {
        match (self, result) {
            (ErrorPolicy::Abort, Err(e)) => {
                log::error!("{}", e);
                panic!("{}", e);
            }
            (_, result) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recover_passes_errors_through() {
        let result: ObjResult<()> = Err(ObjError::malformed("no mesh"));
        let err = ErrorPolicy::Recover.apply(result).unwrap_err();
        assert!(matches!(err, ObjError::MalformedDocument(_)));
        assert_eq!(err.to_string(), "malformed document: no mesh");
    }

    #[test]
    fn abort_passes_success_through() {
        assert_eq!(ErrorPolicy::Abort.apply(Ok(3)).unwrap(), 3);
    }

    #[test]
    #[should_panic(expected = "array construction not implemented yet")]
    fn abort_panics_on_error() {
        let result: ObjResult<()> = Err(ObjError::UnsupportedFormat(MeshFormat::VertexTexture));
        let _ = ErrorPolicy::Abort.apply(result);
    }

    #[test]
    fn out_of_range_message_names_the_attribute() {
        let err = ObjError::IndexOutOfRange {
            mesh: 1,
            attribute: Attribute::Normal,
            index: 9,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "mesh 1: normal index 9 out of range (2 available)"
        );
    }
}
