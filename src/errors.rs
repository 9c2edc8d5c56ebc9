#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayError {
    IndexOutOfBounds {
        index: usize,
        len: usize,
    },
    AllocFailed {
        new_capacity: usize,
    },
    ZeroSizedElement,
}

impl core::fmt::Display for ArrayError {

    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {} was out of bounds of len {}", index, len)
            },
            Self::AllocFailed { new_capacity } => {
                write!(f, "allocation failed with new capacity {}", new_capacity)
            },
            Self::ZeroSizedElement => {
                write!(f, "size of element type is zero")
            },
        }
    }
}

impl core::error::Error for ArrayError {}
