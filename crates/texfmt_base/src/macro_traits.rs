//! Contains traits implemented by the texfmt derive macros


/// Trait to get the number of variants in an enum
pub trait EnumCountT {
    /// Number of variants in the enum
    const COUNT : usize;
}

/// Trait to get an enum from its declaration index
pub trait EnumFromIndexT: Sized {
    /// Try to convert an index to an enum
    fn from_idx(idx: usize) -> Option<Self>;

    /// Try to convert an index to an enum, if it couldn't convert it, return a default value
    fn from_idx_or(idx: usize, default: Self) -> Self;

    /// Convert an index to an enum, without checking bounds
    /// 
    /// # SAFETY
    /// 
    /// The user is required to make sure that the index is an index of a valid enum variant
    unsafe fn from_idx_unchecked(idx: usize) -> Self;
}

/// Trait to convert an enum to and from its canonical name
pub trait EnumFromNameT: Sized {
    /// Get the canonical name of the variant
    fn name(&self) -> &'static str;

    /// Try to parse the enum from its canonical name, ignoring ASCII case.
    fn parse(s: &str) -> Option<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    enum Axis {
        X,
        Y,
    }

    impl EnumCountT for Axis {
        const COUNT: usize = 2;
    }

    impl EnumFromIndexT for Axis {
        fn from_idx(idx: usize) -> Option<Self> {
            match idx {
                0 => Some(Axis::X),
                1 => Some(Axis::Y),
                _ => None,
            }
        }

        fn from_idx_or(idx: usize, default: Self) -> Self {
            Self::from_idx(idx).unwrap_or(default)
        }

        unsafe fn from_idx_unchecked(idx: usize) -> Self {
            if idx == 0 { Axis::X } else { Axis::Y }
        }
    }

    #[test]
    fn from_idx_or_falls_back() {
        assert_eq!(Axis::COUNT, 2);
        assert_eq!(Axis::from_idx(1), Some(Axis::Y));
        assert_eq!(Axis::from_idx(2), None);
        assert_eq!(Axis::from_idx_or(7, Axis::X), Axis::X);
    }
}
