use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_bound(start: impl ToString, end: impl ToString) -> Error {
        ErrorKind::InvalidBound {
            start: start.to_string(),
            end: end.to_string(),
        }
        .into()
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Error {
        ErrorKind::IndexOutOfRange { index, len }.into()
    }

    pub fn value_out_of_range(value: impl ToString, width: &'static str) -> Error {
        ErrorKind::ValueOutOfRange {
            value: value.to_string(),
            width,
        }
        .into()
    }

    pub fn overflow(context: impl Into<String>) -> Error {
        ErrorKind::Overflow {
            context: context.into(),
        }
        .into()
    }

    pub fn insufficient_elements(operation: &'static str, required: usize, len: usize) -> Error {
        ErrorKind::InsufficientElements {
            operation,
            required,
            len,
        }
        .into()
    }

    /// Returns `true` if this is an [`ErrorKind::InvalidBound`].
    pub fn is_invalid_bound(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidBound { .. })
    }

    /// Returns `true` if this is an [`ErrorKind::Overflow`].
    pub fn is_overflow(&self) -> bool {
        matches!(self.kind(), ErrorKind::Overflow { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid bounds: end ({end}) is less than start ({start})")]
    InvalidBound { start: String, end: String },

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("value {value} does not fit into {width}")]
    ValueOutOfRange { value: String, width: &'static str },

    #[error("size overflow: {context}")]
    Overflow { context: String },

    #[error("{operation} requires at least {required} elements, got {len}")]
    InsufficientElements {
        operation: &'static str,
        required: usize,
        len: usize,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

impl From<std::collections::TryReserveError> for Error {
    fn from(e: std::collections::TryReserveError) -> Self {
        Error::overflow(e.to_string())
    }
}

impl From<std::num::TryFromIntError> for Error {
    fn from(e: std::num::TryFromIntError) -> Self {
        Error::overflow(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = Error::invalid_bound(10, 3);
        assert!(e.is_invalid_bound());
        assert_eq!(
            e.to_string(),
            "invalid bounds: end (3) is less than start (10)"
        );

        let e = Error::index_out_of_range(7, 5);
        assert_eq!(e.to_string(), "index 7 is out of range for length 5");

        let e = Error::insufficient_elements("random", 2, 1);
        assert_eq!(e.to_string(), "random requires at least 2 elements, got 1");
    }

    #[test]
    fn test_into_kind() {
        let e = Error::value_out_of_range(300, "u8");
        match e.into_kind() {
            ErrorKind::ValueOutOfRange { value, width } => {
                assert_eq!(value, "300");
                assert_eq!(width, "u8");
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn test_try_reserve_maps_to_overflow() {
        let mut v = Vec::<u64>::new();
        let e: Error = v.try_reserve_exact(usize::MAX).unwrap_err().into();
        assert!(e.is_overflow());
    }
}
