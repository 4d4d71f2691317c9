use core::fmt;

use crate::{ComponentType, CompressionType, ElementType, Format, FormatComponents, NormalizationMode};

/// Format registry error
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// The format has no channels, so per-channel values are undefined
    NoComponents(Format),
    /// No format matches the requested classification
    NoMatchingFormat {
        compression:    CompressionType,
        components:     FormatComponents,
        component_type: ComponentType,
        precision:      u32,
    },
    /// No format can store the element type with the given normalization
    UnsupportedElement(ElementType, NormalizationMode),
    /// The name does not belong to any format
    UnknownFormatName(String),
    /// The format table breaks one of its invariants
    InvalidTable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoComponents(format)                 => f.write_fmt(format_args!("Format '{format}' has no components")),
            Error::NoMatchingFormat { compression, components, component_type, precision }
                                                        => f.write_fmt(format_args!("No format with compression '{compression}', components '{components}', component type '{component_type}' and {precision}-bit precision")),
            Error::UnsupportedElement(element, norm)    => f.write_fmt(format_args!("No format can store '{element}' with '{norm}' normalization")),
            Error::UnknownFormatName(name)              => f.write_fmt(format_args!("Unknown format name: '{name}'")),
            Error::InvalidTable(s)                      => f.write_fmt(format_args!("Invalid format table: {s}")),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
