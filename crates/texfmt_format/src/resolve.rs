use core::{fmt, str::FromStr};
use texfmt_base::EnumFromNameT;
use texfmt_logging::{log_verbose, log_warning, LogCategory};

use crate::{ComponentType, CompressionType, Error, Format, FormatComponents, Result};

const FIND_LOG_CAT: LogCategory = LogCategory::new_with_sub("Format", "Find");
const NAME_LOG_CAT: LogCategory = LogCategory::new_with_sub("Format", "Name");

/// Semantic classification of a format
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct FormatDesc {
    pub compression:    CompressionType,
    pub components:     FormatComponents,
    pub component_type: ComponentType,
    /// Average bits per component, see [`Format::component_precision`]
    pub precision:      u32,
}

impl FormatDesc {
    pub const fn new(compression: CompressionType, components: FormatComponents, component_type: ComponentType, precision: u32) -> Self {
        Self { compression, components, component_type, precision }
    }

    fn find_exact(self) -> Option<Format> {
        Format::iter()
            .skip(1)
            .find(|format| format.desc() == self)
    }
}

impl fmt::Display for FormatDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{} {} {} ({}-bit)", self.compression, self.components, self.component_type, self.precision))
    }
}

impl From<Format> for FormatDesc {
    fn from(format: Format) -> Self {
        format.desc()
    }
}

impl Format {
    /// Get the classification of the format
    pub fn desc(self) -> FormatDesc {
        FormatDesc {
            compression:    self.compression_type(),
            components:     self.components(),
            component_type: self.component_type(),
            precision:      self.try_component_precision().unwrap_or(0),
        }
    }

    /// Find the first format matching the classification.
    ///
    /// When `RGB` components are requested and no 3 component format matches, the search is repeated with `RGBAlpha`,
    /// so the result may have more components than requested. Callers that need an exact component count should check [`Format::components`].
    ///
    /// Returns [`Format::Unknown`] when nothing matches.
    pub fn find(desc: FormatDesc) -> Format {
        if let Some(format) = desc.find_exact() {
            return format;
        }

        if desc.components == FormatComponents::RGB {
            let fallback = FormatDesc { components: FormatComponents::RGBAlpha, ..desc };
            if let Some(format) = fallback.find_exact() {
                log_verbose!(FIND_LOG_CAT, "No RGB format matches '{desc}', using '{format}'");
                return format;
            }
        }
        Format::Unknown
    }

    /// Find the first format matching the classification, see [`Format::find`]
    pub fn try_find(desc: FormatDesc) -> Result<Format> {
        match Self::find(desc) {
            Format::Unknown => Err(Error::NoMatchingFormat {
                compression:    desc.compression,
                components:     desc.components,
                component_type: desc.component_type,
                precision:      desc.precision,
            }),
            format => Ok(format),
        }
    }

    /// Get the canonical name of the format
    pub fn as_str(self) -> &'static str {
        self.name()
    }

    /// Get the format with the given canonical name, ignoring ASCII case.
    ///
    /// Returns [`Format::Unknown`] for unrecognized names.
    pub fn from_name(name: &str) -> Format {
        match <Format as EnumFromNameT>::parse(name) {
            Some(format) => format,
            None => {
                log_warning!(NAME_LOG_CAT, "Unrecognized format name '{name}'");
                Format::Unknown
            },
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        <Format as EnumFromNameT>::parse(s).ok_or_else(|| Error::UnknownFormatName(s.to_string()))
    }
}

/// Find the first format matching the classification, see [`Format::find`]
pub fn find_format(compression: CompressionType, components: FormatComponents, component_type: ComponentType, precision: u32) -> Format {
    Format::find(FormatDesc::new(compression, components, component_type, precision))
}

/// Find the first format matching the classification, or an error if none exists, see [`Format::find`]
pub fn try_find_format(compression: CompressionType, components: FormatComponents, component_type: ComponentType, precision: u32) -> Result<Format> {
    Format::try_find(FormatDesc::new(compression, components, component_type, precision))
}

#[cfg(test)]
mod tests {
    use crate::BlockCompression;
    use super::*;

    #[test]
    fn exact_match() {
        assert_eq!(find_format(CompressionType::None, FormatComponents::RGBAlpha, ComponentType::UNorm, 8), Format::R8G8B8A8UNorm);
        assert_eq!(find_format(CompressionType::None, FormatComponents::Luminance, ComponentType::Float, 32), Format::R32Float);
        assert_eq!(find_format(CompressionType::None, FormatComponents::Depth, ComponentType::Float, 32), Format::D32Float);
        assert_eq!(find_format(CompressionType::None, FormatComponents::RG, ComponentType::SNorm, 16), Format::R16G16SNorm);
        assert_eq!(
            find_format(CompressionType::BlockCompressed(BlockCompression::BC3), FormatComponents::RGBAlpha, ComponentType::UNormSrgb, 2),
            Format::BC3Srgb
        );
    }

    #[test]
    fn rgb_falls_back_to_rgba() {
        let format = find_format(CompressionType::None, FormatComponents::RGB, ComponentType::UNorm, 8);
        assert_eq!(format, Format::R8G8B8A8UNorm);
        assert_eq!(format.components(), FormatComponents::RGBAlpha);

        assert_eq!(find_format(CompressionType::None, FormatComponents::RGB, ComponentType::Float, 16), Format::R16G16B16A16Float);
        // An exact 3 component match wins over the fallback
        assert_eq!(find_format(CompressionType::None, FormatComponents::RGB, ComponentType::Float, 32), Format::R32G32B32Float);
    }

    #[test]
    fn no_match() {
        assert_eq!(find_format(CompressionType::None, FormatComponents::RGBAlpha, ComponentType::Float, 7), Format::Unknown);
        // Only RGB gets a fallback
        assert_eq!(find_format(CompressionType::None, FormatComponents::RG, ComponentType::UNormSrgb, 8), Format::Unknown);

        let desc = FormatDesc::new(CompressionType::None, FormatComponents::Alpha, ComponentType::SInt, 8);
        assert_eq!(
            Format::try_find(desc),
            Err(Error::NoMatchingFormat { compression: CompressionType::None, components: FormatComponents::Alpha, component_type: ComponentType::SInt, precision: 8 })
        );
        assert_eq!(try_find_format(CompressionType::None, FormatComponents::Stencil, ComponentType::UInt, 8), Ok(Format::S8UInt));
    }

    #[test]
    fn unknown_is_never_found() {
        assert_eq!(Format::find(Format::Unknown.desc()), Format::Unknown);
    }

    #[test]
    fn names() {
        assert_eq!(Format::R8G8B8A8Srgb.as_str(), "R8G8B8A8_UNORM_SRGB");
        assert_eq!(Format::D32FloatS8UInt.as_str(), "D32_FLOAT_S8_UINT");
        assert_eq!(Format::Matrix3x4.to_string(), "Matrix3x4");
        assert_eq!(Format::from_name("bc7_unorm_srgb"), Format::BC7Srgb);
        assert_eq!(Format::from_name("D24_UNORM_S8_UINT"), Format::D24UNormS8UInt);
        assert_eq!(Format::from_name("R8G8B8A8"), Format::Unknown);
        assert_eq!("S8_UINT".parse::<Format>(), Ok(Format::S8UInt));
        assert_eq!("nope".parse::<Format>(), Err(Error::UnknownFormatName("nope".to_string())));
    }
}
