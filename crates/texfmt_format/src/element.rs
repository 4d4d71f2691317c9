use core::fmt;
use texfmt_base::EnumCountT;
use texfmt_macros::{EnumCount, EnumDisplay};

use crate::{Error, Format, Result};

/// Scalar type of a vertex element or shader value
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumCount, EnumDisplay)]
pub enum TypeCat {
    Void,
    Bool,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
}

impl TypeCat {
    /// Get the size of a scalar of this type in bytes
    pub fn byte_size(self) -> u32 {
        match self {
            TypeCat::Void => 0,
            TypeCat::Bool |
            TypeCat::Int8 |
            TypeCat::UInt8 => 1,
            TypeCat::Int16 |
            TypeCat::UInt16 => 2,
            TypeCat::Int32 |
            TypeCat::UInt32 |
            TypeCat::Float => 4,
            TypeCat::Int64 |
            TypeCat::UInt64 |
            TypeCat::Double => 8,
        }
    }
}

/// How integer data is presented to a shader
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, EnumCount, EnumDisplay)]
pub enum NormalizationMode {
    /// Read as integers
    #[default]
    Integer,
    /// Read as floats normalized to [0, 1] (unsigned) or [-1, 1] (signed)
    Normalized,
    /// Bits are reinterpreted as (half precision) floats
    Float,
}

/// Element description: a scalar type and a number of elements
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct ElementType {
    pub type_cat:    TypeCat,
    pub array_count: u32,
}

impl ElementType {
    pub const fn new(type_cat: TypeCat, array_count: u32) -> Self {
        Self { type_cat, array_count }
    }

    /// Single scalar element
    pub const fn scalar(type_cat: TypeCat) -> Self {
        Self::new(type_cat, 1)
    }

    /// Get the size of the element in bytes
    pub fn byte_size(self) -> u64 {
        u64::from(self.type_cat.byte_size()) * u64::from(self.array_count)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.array_count == 1 {
            f.write_fmt(format_args!("{}", self.type_cat))
        } else {
            f.write_fmt(format_args!("{}[{}]", self.type_cat, self.array_count))
        }
    }
}

impl Format {
    /// Get the format used to store an element with the given normalization.
    ///
    /// Floating point elements ignore the normalization mode and always use 32-bit float formats.
    /// Returns [`Format::Unknown`] when no format can store the element, e.g. 3-element 8-bit or 16-bit elements.
    pub fn from_element(element: ElementType, norm: NormalizationMode) -> Format {
        match element.array_count {
            1..=4 => ELEMENT_FORMATS[element.type_cat as usize][norm as usize][element.array_count as usize - 1],
            _ => Format::Unknown,
        }
    }

    /// Get the format used to store an element with the given normalization, or an error if none exists
    pub fn try_from_element(element: ElementType, norm: NormalizationMode) -> Result<Format> {
        match Self::from_element(element, norm) {
            Format::Unknown => Err(Error::UnsupportedElement(element, norm)),
            format => Ok(format),
        }
    }
}

/// Get the format used to store an element with the given normalization, see [`Format::from_element`]
pub fn as_format(element: ElementType, norm: NormalizationMode) -> Format {
    Format::from_element(element, norm)
}

pub fn try_as_format(element: ElementType, norm: NormalizationMode) -> Result<Format> {
    Format::try_from_element(element, norm)
}

//==============================================================================================================================
// LUTS
//==============================================================================================================================

type ArityFormats = [Format; 4];
type NormFormats = [ArityFormats; NormalizationMode::COUNT];

const U: Format = Format::Unknown;
const NO_FORMATS: ArityFormats = [U, U, U, U];
const UNSUPPORTED: NormFormats = [NO_FORMATS; NormalizationMode::COUNT];
const FLOAT32: ArityFormats = [Format::R32Float, Format::R32G32Float, Format::R32G32B32Float, Format::R32G32B32A32Float];

const ELEMENT_FORMATS: [NormFormats; TypeCat::COUNT] = [
    //               Integer                                                                                    , Normalized                                                             , Float
    /* Void   */ UNSUPPORTED,
    /* Bool   */ UNSUPPORTED,
    /* Int8   */ [[Format::R8SInt , Format::R8G8SInt  , U                    , Format::R8G8B8A8SInt        ], [Format::R8SNorm , Format::R8G8SNorm  , U, Format::R8G8B8A8SNorm    ], NO_FORMATS],
    /* UInt8  */ [[Format::R8UInt , Format::R8G8UInt  , U                    , Format::R8G8B8A8UInt        ], [Format::R8UNorm , Format::R8G8UNorm  , U, Format::R8G8B8A8UNorm    ], NO_FORMATS],
    /* Int16  */ [[Format::R16SInt, Format::R16G16SInt, U                    , Format::R16G16B16A16SInt    ], [Format::R16SNorm, Format::R16G16SNorm, U, Format::R16G16B16A16SNorm], [Format::R16Float, Format::R16G16Float, U, Format::R16G16B16A16Float]],
    /* UInt16 */ [[Format::R16UInt, Format::R16G16UInt, U                    , Format::R16G16B16A16UInt    ], [Format::R16UNorm, Format::R16G16UNorm, U, Format::R16G16B16A16UNorm], [Format::R16Float, Format::R16G16Float, U, Format::R16G16B16A16Float]],
    /* Int32  */ [[Format::R32SInt, Format::R32G32SInt, Format::R32G32B32SInt, Format::R32G32B32A32SInt    ], NO_FORMATS                                                             , NO_FORMATS],
    /* UInt32 */ [[Format::R32UInt, Format::R32G32UInt, Format::R32G32B32UInt, Format::R32G32B32A32UInt    ], NO_FORMATS                                                             , NO_FORMATS],
    /* Int64  */ UNSUPPORTED,
    /* UInt64 */ UNSUPPORTED,
    /* Float  */ [FLOAT32, FLOAT32, FLOAT32],
    /* Double */ UNSUPPORTED,
];
