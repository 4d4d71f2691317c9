use core::fmt;
use texfmt_base::{EnumCountT, EnumFromIndexT};
use texfmt_macros::{EnumCount, EnumDisplay, EnumFromIndex, EnumFromName};
#[cfg(feature = "validation")]
use texfmt_logging::log_error;

use crate::{Error, Result};

/// Block compression (BC) scheme
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumCount, EnumDisplay)]
pub enum BlockCompression {
    /// BC1 (DXT1): RGB with optional 1-bit alpha
    BC1,
    /// BC2 (DXT2/DXT3): RGB with explicit 4-bit alpha
    BC2,
    /// BC3 (DXT4/DXT5): RGB with interpolated alpha
    BC3,
    /// BC4: single channel
    BC4,
    /// BC5: two channels
    BC5,
    /// BC6H: HDR RGB
    BC6H,
    /// BC7: high quality RGB(A)
    BC7,
}

impl BlockCompression {
    /// Get the number of bits per channel a texel decodes to
    pub fn decompressed_component_precision(self) -> u32 {
        match self {
            BlockCompression::BC6H => 16,
            // BC7 can store higher precision data, but decodes to 8 bits
            _ => 8,
        }
    }
}

/// Compression type of a format
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub enum CompressionType {
    /// Uncompressed
    #[default]
    None,
    /// Block compressed with the given scheme
    BlockCompressed(BlockCompression),
}

impl CompressionType {
    /// Is this a compressed type?
    pub fn is_compressed(self) -> bool {
        self != CompressionType::None
    }

    /// Get the block compression scheme, if any
    pub fn block_compression(self) -> Option<BlockCompression> {
        match self {
            CompressionType::None => None,
            CompressionType::BlockCompressed(bc) => Some(bc),
        }
    }
}

impl fmt::Display for CompressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionType::None => f.pad("None"),
            CompressionType::BlockCompressed(bc) => fmt::Display::fmt(bc, f),
        }
    }
}

/// Semantic grouping of the channels in a format
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumCount, EnumFromIndex, EnumDisplay)]
pub enum FormatComponents {
    /// No sensible channel layout (e.g. matrix storage)
    Unknown,
    Alpha,
    Depth,
    Stencil,
    DepthStencil,
    Luminance,
    LuminanceAlpha,
    RG,
    RGB,
    RGBAlpha,
    /// RGB with a shared exponent
    RGBE,
}

impl FormatComponents {
    /// Get the number of independently addressable channels
    pub const fn count(self) -> u32 {
        match self {
            FormatComponents::Alpha |
            FormatComponents::Luminance |
            FormatComponents::Depth |
            FormatComponents::Stencil => 1,

            FormatComponents::LuminanceAlpha |
            FormatComponents::RG |
            FormatComponents::DepthStencil => 2,

            FormatComponents::RGB => 3,

            FormatComponents::RGBAlpha |
            FormatComponents::RGBE => 4,

            FormatComponents::Unknown => 0,
        }
    }
}

/// Numeric interpretation of the bits of a channel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, EnumCount, EnumFromIndex, EnumDisplay)]
pub enum ComponentType {
    /// Typeless format
    ///
    /// Can be viewed as any other type with the same bit layout
    Typeless,
    Float,
    UInt,
    SInt,
    UNorm,
    SNorm,
    /// Unsigned normalized, stored in sRGB color space
    UNormSrgb,
    /// Shared exponent
    Exponential,
    UnsignedFloat16,
    SignedFloat16,
}

impl ComponentType {
    /// Does the type have an integer representation?
    pub fn is_integer(self) -> bool {
        matches!(self, Self::UInt | Self::SInt)
    }

    /// Does the type have a non-integer representation?
    ///
    /// # Note
    ///
    /// Prefer this function over `!self.is_integer()`, as that results in `true` for a typeless format, which is neither an integer or non-integer format
    pub fn is_non_integer(self) -> bool {
        self != Self::Typeless && !self.is_integer()
    }

    /// Is the type normalized to [0, 1] or [-1, 1] when read?
    pub fn is_normalized(self) -> bool {
        matches!(self, Self::UNorm | Self::SNorm | Self::UNormSrgb)
    }
}

/// Channel layout before a numeric interpretation is applied
#[derive(Clone, Copy, PartialEq, Eq, Debug, EnumCount)]
pub(crate) enum ChannelPrefix {
    R32G32B32A32,
    R32G32B32,
    R16G16B16A16,
    R32G32,
    R10G10B10A2,
    R11G11B10,
    R8G8B8A8,
    R16G16,
    R32,
    D32,
    R24G8,
    R8G8,
    R16,
    D16,
    R8,
    A8,
    R1,
    R9G9B9E5,
    R8G8B8G8,
    G8R8G8B8,
    BC1,
    BC2,
    BC3,
    BC4,
    BC5,
    BC6H,
    BC7,
    B5G6R5,
    B5G5R5A1,
    B8G8R8A8,
    B8G8R8X8,
    /// Formats that are special cased in every query
    Irregular,
}

impl ChannelPrefix {
    fn components(self) -> FormatComponents {
        PREFIX_COMPONENTS[self as usize]
    }
}

/// Format
///
/// Closed set of storage layouts for texels and vertex elements.
///
/// The canonical name of each format (see [`Format::as_str`]) is stable, and is used to persist formats in text.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default, EnumCount, EnumFromIndex, EnumDisplay, EnumFromName)]
pub enum Format {
    /// No format, also returned when a lookup has no result
    #[default]
    #[name("Unknown")]
    Unknown,

    // 32-bit component RGBA
    #[name("R32G32B32A32_TYPELESS")]
    R32G32B32A32Typeless,
    #[name("R32G32B32A32_FLOAT")]
    R32G32B32A32Float,
    #[name("R32G32B32A32_UINT")]
    R32G32B32A32UInt,
    #[name("R32G32B32A32_SINT")]
    R32G32B32A32SInt,

    // 32-bit component RGB
    #[name("R32G32B32_TYPELESS")]
    R32G32B32Typeless,
    #[name("R32G32B32_FLOAT")]
    R32G32B32Float,
    #[name("R32G32B32_UINT")]
    R32G32B32UInt,
    #[name("R32G32B32_SINT")]
    R32G32B32SInt,

    // 16-bit component RGBA
    #[name("R16G16B16A16_TYPELESS")]
    R16G16B16A16Typeless,
    #[name("R16G16B16A16_FLOAT")]
    R16G16B16A16Float,
    #[name("R16G16B16A16_UNORM")]
    R16G16B16A16UNorm,
    #[name("R16G16B16A16_UINT")]
    R16G16B16A16UInt,
    #[name("R16G16B16A16_SNORM")]
    R16G16B16A16SNorm,
    #[name("R16G16B16A16_SINT")]
    R16G16B16A16SInt,

    // 32-bit component RG
    #[name("R32G32_TYPELESS")]
    R32G32Typeless,
    #[name("R32G32_FLOAT")]
    R32G32Float,
    #[name("R32G32_UINT")]
    R32G32UInt,
    #[name("R32G32_SINT")]
    R32G32SInt,

    // 8-bit component RGBA
    #[name("R8G8B8A8_TYPELESS")]
    R8G8B8A8Typeless,
    #[name("R8G8B8A8_UNORM")]
    R8G8B8A8UNorm,
    #[name("R8G8B8A8_UNORM_SRGB")]
    R8G8B8A8Srgb,
    #[name("R8G8B8A8_UINT")]
    R8G8B8A8UInt,
    #[name("R8G8B8A8_SNORM")]
    R8G8B8A8SNorm,
    #[name("R8G8B8A8_SINT")]
    R8G8B8A8SInt,

    // 10-bit component RGB with 2-bit A
    #[name("R10G10B10A2_TYPELESS")]
    R10G10B10A2Typeless,
    #[name("R10G10B10A2_UNORM")]
    R10G10B10A2UNorm,
    #[name("R10G10B10A2_UINT")]
    R10G10B10A2UInt,

    // 11-bit R and G, 10-bit B
    #[name("R11G11B10_FLOAT")]
    R11G11B10Float,

    // 16-bit component RG
    #[name("R16G16_TYPELESS")]
    R16G16Typeless,
    #[name("R16G16_FLOAT")]
    R16G16Float,
    #[name("R16G16_UNORM")]
    R16G16UNorm,
    #[name("R16G16_UINT")]
    R16G16UInt,
    #[name("R16G16_SNORM")]
    R16G16SNorm,
    #[name("R16G16_SINT")]
    R16G16SInt,

    // 32-bit component R
    #[name("R32_TYPELESS")]
    R32Typeless,
    #[name("R32_FLOAT")]
    R32Float,
    #[name("R32_UINT")]
    R32UInt,
    #[name("R32_SINT")]
    R32SInt,

    // 32-bit depth
    #[name("D32_FLOAT")]
    D32Float,

    // 24-bit depth with 8-bit stencil, and the views onto its aspects
    #[name("R24G8_TYPELESS")]
    R24G8Typeless,
    #[name("D24_UNORM_S8_UINT")]
    D24UNormS8UInt,
    #[name("R24_UNORM_X8_TYPELESS")]
    R24UNormX8Typeless,
    #[name("X24_TYPELESS_G8_UINT")]
    X24TypelessG8UInt,

    // 8-bit component RG
    #[name("R8G8_TYPELESS")]
    R8G8Typeless,
    #[name("R8G8_UNORM")]
    R8G8UNorm,
    #[name("R8G8_UINT")]
    R8G8UInt,
    #[name("R8G8_SNORM")]
    R8G8SNorm,
    #[name("R8G8_SINT")]
    R8G8SInt,

    // 16-bit component R
    #[name("R16_TYPELESS")]
    R16Typeless,
    #[name("R16_FLOAT")]
    R16Float,
    #[name("R16_UNORM")]
    R16UNorm,
    #[name("R16_UINT")]
    R16UInt,
    #[name("R16_SNORM")]
    R16SNorm,
    #[name("R16_SINT")]
    R16SInt,

    // 16-bit depth
    #[name("D16_UNORM")]
    D16UNorm,

    // 8-bit component R
    #[name("R8_TYPELESS")]
    R8Typeless,
    #[name("R8_UNORM")]
    R8UNorm,
    #[name("R8_UINT")]
    R8UInt,
    #[name("R8_SNORM")]
    R8SNorm,
    #[name("R8_SINT")]
    R8SInt,

    // 8-bit alpha
    #[name("A8_UNORM")]
    A8UNorm,

    // 1-bit R
    #[name("R1_UNORM")]
    R1UNorm,

    // 9-bit component RGB with 5-bit shared exponent
    #[name("R9G9B9E5_SHAREDEXP")]
    R9G9B9E5SharedExp,

    // Packed 4:2:2 RGB
    #[name("R8G8_B8G8_UNORM")]
    R8G8B8G8UNorm,
    #[name("G8R8_G8B8_UNORM")]
    G8R8G8B8UNorm,

    // Block compression
    #[name("BC1_TYPELESS")]
    BC1Typeless,
    #[name("BC1_UNORM")]
    BC1UNorm,
    #[name("BC1_UNORM_SRGB")]
    BC1Srgb,
    #[name("BC2_TYPELESS")]
    BC2Typeless,
    #[name("BC2_UNORM")]
    BC2UNorm,
    #[name("BC2_UNORM_SRGB")]
    BC2Srgb,
    #[name("BC3_TYPELESS")]
    BC3Typeless,
    #[name("BC3_UNORM")]
    BC3UNorm,
    #[name("BC3_UNORM_SRGB")]
    BC3Srgb,
    #[name("BC4_TYPELESS")]
    BC4Typeless,
    #[name("BC4_UNORM")]
    BC4UNorm,
    #[name("BC4_SNORM")]
    BC4SNorm,
    #[name("BC5_TYPELESS")]
    BC5Typeless,
    #[name("BC5_UNORM")]
    BC5UNorm,
    #[name("BC5_SNORM")]
    BC5SNorm,

    // Packed 16-bit BGR(A)
    #[name("B5G6R5_UNORM")]
    B5G6R5UNorm,
    #[name("B5G5R5A1_UNORM")]
    B5G5R5A1UNorm,

    // 8-bit component BGRA
    #[name("B8G8R8A8_UNORM")]
    B8G8R8A8UNorm,
    #[name("B8G8R8A8_TYPELESS")]
    B8G8R8A8Typeless,
    #[name("B8G8R8A8_UNORM_SRGB")]
    B8G8R8A8Srgb,

    // 8-bit component BGR with unused 8 bits
    #[name("B8G8R8X8_UNORM")]
    B8G8R8X8UNorm,
    #[name("B8G8R8X8_TYPELESS")]
    B8G8R8X8Typeless,
    #[name("B8G8R8X8_UNORM_SRGB")]
    B8G8R8X8Srgb,

    // HDR and high quality block compression
    #[name("BC6H_TYPELESS")]
    BC6HTypeless,
    #[name("BC6H_UF16")]
    BC6HUF16,
    #[name("BC6H_SF16")]
    BC6HSF16,
    #[name("BC7_TYPELESS")]
    BC7Typeless,
    #[name("BC7_UNORM")]
    BC7UNorm,
    #[name("BC7_UNORM_SRGB")]
    BC7Srgb,

    // Formats that don't fit the regular table layout
    #[name("D32_FLOAT_S8_UINT")]
    D32FloatS8UInt,
    #[name("S8_UINT")]
    S8UInt,
    #[name("Matrix4x4")]
    Matrix4x4,
    #[name("Matrix3x4")]
    Matrix3x4,
}

sa::assert_eq_size!(Format, u8);
sa::const_assert!(Format::COUNT <= u8::MAX as usize);

impl Format {
    /// Get the compression type of the format
    pub fn compression_type(self) -> CompressionType {
        FORMAT_INFO[self as usize].compression
    }

    /// Is the format block compressed?
    pub fn is_block_compressed(self) -> bool {
        self.compression_type().is_compressed()
    }

    pub(crate) fn prefix(self) -> ChannelPrefix {
        FORMAT_INFO[self as usize].prefix
    }

    /// Get the semantic channel grouping of the format
    ///
    /// BC4 reports `Luminance` and BC5 reports `RG`, matching the channels they store, so both have a precision of 4 bits.
    /// Lookups that treated every block compressed format as `RGBAlpha` need to use these groupings instead.
    pub fn components(self) -> FormatComponents {
        match self {
            Format::D32FloatS8UInt => FormatComponents::DepthStencil,
            Format::S8UInt => FormatComponents::Stencil,
            _ => self.prefix().components(),
        }
    }

    /// Get the number of channels in the format
    pub fn component_count(self) -> u32 {
        self.components().count()
    }

    /// Get the numeric interpretation of the format's channels
    ///
    /// Composite depth/stencil formats report the type of the stencil channel.
    pub fn component_type(self) -> ComponentType {
        match self {
            Format::D32FloatS8UInt |
            Format::S8UInt => ComponentType::UInt,
            Format::Matrix4x4 |
            Format::Matrix3x4 => ComponentType::Float,
            _ => FORMAT_INFO[self as usize].component_type,
        }
    }

    /// Get the number of bits used by a single texel or element
    ///
    /// For block compressed formats, this is the average number of bits per texel of the compressed data.
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            Format::D32FloatS8UInt => 32 + 8,
            Format::S8UInt => 8,
            Format::Matrix4x4 => 4 * 4 * 32,
            Format::Matrix3x4 => 3 * 4 * 32,
            _ => FORMAT_INFO[self as usize].bits_per_pixel as u32,
        }
    }

    /// Get the average number of bits per channel
    ///
    /// Returns an error for formats without any channels.
    pub fn try_component_precision(self) -> Result<u32> {
        match self.component_count() {
            0 => Err(Error::NoComponents(self)),
            count => Ok(self.bits_per_pixel() / count),
        }
    }

    /// Get the average number of bits per channel, or 0 for formats without any channels
    pub fn component_precision(self) -> u32 {
        match self.try_component_precision() {
            Ok(precision) => precision,
            Err(_err) => {
                #[cfg(feature = "validation")]
                log_error!(crate::LOG_CAT, Format::component_precision, "{_err}");
                0
            },
        }
    }

    /// Get the number of bits per channel after decompression
    ///
    /// For uncompressed formats this is the same as [`Format::component_precision`].
    pub fn decompressed_component_precision(self) -> u32 {
        match self.compression_type() {
            CompressionType::BlockCompressed(bc) => bc.decompressed_component_precision(),
            CompressionType::None => self.component_precision(),
        }
    }

    /// Does the format contain a depth channel?
    pub fn has_depth_aspect(self) -> bool {
        matches!(self.components(), FormatComponents::Depth | FormatComponents::DepthStencil)
    }

    /// Does the format contain a stencil channel?
    pub fn has_stencil_aspect(self) -> bool {
        matches!(self.components(), FormatComponents::Stencil | FormatComponents::DepthStencil)
    }

    /// Iterate over all formats, in declaration order, including [`Format::Unknown`]
    pub fn iter() -> impl Iterator<Item = Format> + Clone {
        (0..Format::COUNT).map(|idx| Format::from_idx_or(idx, Format::Unknown))
    }

    /// Call a closure for each format.
    pub fn for_each<F>(f: F)
    where
        F : FnMut(Format)
    {
        Self::iter().for_each(f)
    }
}

/// Get the compression type of a format, see [`Format::compression_type`]
pub fn compression_type(format: Format) -> CompressionType {
    format.compression_type()
}

/// Get the number of channels in a channel grouping
pub fn component_count(components: FormatComponents) -> u32 {
    components.count()
}

#[derive(Clone, Copy)]
struct FormatInfo {
    prefix:         ChannelPrefix,
    component_type: ComponentType,
    compression:    CompressionType,
    bits_per_pixel: u16,
}

impl FormatInfo {
    const fn new(prefix: ChannelPrefix, component_type: ComponentType, compression: CompressionType, bits_per_pixel: u16) -> Self {
        Self { prefix, component_type, compression, bits_per_pixel }
    }
}

//==============================================================================================================================
// LUTS
//==============================================================================================================================

const NONE: CompressionType = CompressionType::None;
const BC1 : CompressionType = CompressionType::BlockCompressed(BlockCompression::BC1);
const BC2 : CompressionType = CompressionType::BlockCompressed(BlockCompression::BC2);
const BC3 : CompressionType = CompressionType::BlockCompressed(BlockCompression::BC3);
const BC4 : CompressionType = CompressionType::BlockCompressed(BlockCompression::BC4);
const BC5 : CompressionType = CompressionType::BlockCompressed(BlockCompression::BC5);
const BC6H: CompressionType = CompressionType::BlockCompressed(BlockCompression::BC6H);
const BC7 : CompressionType = CompressionType::BlockCompressed(BlockCompression::BC7);

// Irregular formats only have a placeholder row, their values come from the special cases in the queries
const FORMAT_INFO: [FormatInfo; Format::COUNT] = [
    //                                        Prefix                     , Component type                , Compr., Bits
    /* Unknown              */ FormatInfo::new(ChannelPrefix::Irregular   , ComponentType::Typeless       , NONE,   0),
    /* R32G32B32A32Typeless */ FormatInfo::new(ChannelPrefix::R32G32B32A32, ComponentType::Typeless       , NONE, 128),
    /* R32G32B32A32Float    */ FormatInfo::new(ChannelPrefix::R32G32B32A32, ComponentType::Float          , NONE, 128),
    /* R32G32B32A32UInt     */ FormatInfo::new(ChannelPrefix::R32G32B32A32, ComponentType::UInt           , NONE, 128),
    /* R32G32B32A32SInt     */ FormatInfo::new(ChannelPrefix::R32G32B32A32, ComponentType::SInt           , NONE, 128),
    /* R32G32B32Typeless    */ FormatInfo::new(ChannelPrefix::R32G32B32   , ComponentType::Typeless       , NONE,  96),
    /* R32G32B32Float       */ FormatInfo::new(ChannelPrefix::R32G32B32   , ComponentType::Float          , NONE,  96),
    /* R32G32B32UInt        */ FormatInfo::new(ChannelPrefix::R32G32B32   , ComponentType::UInt           , NONE,  96),
    /* R32G32B32SInt        */ FormatInfo::new(ChannelPrefix::R32G32B32   , ComponentType::SInt           , NONE,  96),
    /* R16G16B16A16Typeless */ FormatInfo::new(ChannelPrefix::R16G16B16A16, ComponentType::Typeless       , NONE,  64),
    /* R16G16B16A16Float    */ FormatInfo::new(ChannelPrefix::R16G16B16A16, ComponentType::Float          , NONE,  64),
    /* R16G16B16A16UNorm    */ FormatInfo::new(ChannelPrefix::R16G16B16A16, ComponentType::UNorm          , NONE,  64),
    /* R16G16B16A16UInt     */ FormatInfo::new(ChannelPrefix::R16G16B16A16, ComponentType::UInt           , NONE,  64),
    /* R16G16B16A16SNorm    */ FormatInfo::new(ChannelPrefix::R16G16B16A16, ComponentType::SNorm          , NONE,  64),
    /* R16G16B16A16SInt     */ FormatInfo::new(ChannelPrefix::R16G16B16A16, ComponentType::SInt           , NONE,  64),
    /* R32G32Typeless       */ FormatInfo::new(ChannelPrefix::R32G32      , ComponentType::Typeless       , NONE,  64),
    /* R32G32Float          */ FormatInfo::new(ChannelPrefix::R32G32      , ComponentType::Float          , NONE,  64),
    /* R32G32UInt           */ FormatInfo::new(ChannelPrefix::R32G32      , ComponentType::UInt           , NONE,  64),
    /* R32G32SInt           */ FormatInfo::new(ChannelPrefix::R32G32      , ComponentType::SInt           , NONE,  64),
    /* R8G8B8A8Typeless     */ FormatInfo::new(ChannelPrefix::R8G8B8A8    , ComponentType::Typeless       , NONE,  32),
    /* R8G8B8A8UNorm        */ FormatInfo::new(ChannelPrefix::R8G8B8A8    , ComponentType::UNorm          , NONE,  32),
    /* R8G8B8A8Srgb         */ FormatInfo::new(ChannelPrefix::R8G8B8A8    , ComponentType::UNormSrgb      , NONE,  32),
    /* R8G8B8A8UInt         */ FormatInfo::new(ChannelPrefix::R8G8B8A8    , ComponentType::UInt           , NONE,  32),
    /* R8G8B8A8SNorm        */ FormatInfo::new(ChannelPrefix::R8G8B8A8    , ComponentType::SNorm          , NONE,  32),
    /* R8G8B8A8SInt         */ FormatInfo::new(ChannelPrefix::R8G8B8A8    , ComponentType::SInt           , NONE,  32),
    /* R10G10B10A2Typeless  */ FormatInfo::new(ChannelPrefix::R10G10B10A2 , ComponentType::Typeless       , NONE,  32),
    /* R10G10B10A2UNorm     */ FormatInfo::new(ChannelPrefix::R10G10B10A2 , ComponentType::UNorm          , NONE,  32),
    /* R10G10B10A2UInt      */ FormatInfo::new(ChannelPrefix::R10G10B10A2 , ComponentType::UInt           , NONE,  32),
    /* R11G11B10Float       */ FormatInfo::new(ChannelPrefix::R11G11B10   , ComponentType::Float          , NONE,  32),
    /* R16G16Typeless       */ FormatInfo::new(ChannelPrefix::R16G16      , ComponentType::Typeless       , NONE,  32),
    /* R16G16Float          */ FormatInfo::new(ChannelPrefix::R16G16      , ComponentType::Float          , NONE,  32),
    /* R16G16UNorm          */ FormatInfo::new(ChannelPrefix::R16G16      , ComponentType::UNorm          , NONE,  32),
    /* R16G16UInt           */ FormatInfo::new(ChannelPrefix::R16G16      , ComponentType::UInt           , NONE,  32),
    /* R16G16SNorm          */ FormatInfo::new(ChannelPrefix::R16G16      , ComponentType::SNorm          , NONE,  32),
    /* R16G16SInt           */ FormatInfo::new(ChannelPrefix::R16G16      , ComponentType::SInt           , NONE,  32),
    /* R32Typeless          */ FormatInfo::new(ChannelPrefix::R32         , ComponentType::Typeless       , NONE,  32),
    /* R32Float             */ FormatInfo::new(ChannelPrefix::R32         , ComponentType::Float          , NONE,  32),
    /* R32UInt              */ FormatInfo::new(ChannelPrefix::R32         , ComponentType::UInt           , NONE,  32),
    /* R32SInt              */ FormatInfo::new(ChannelPrefix::R32         , ComponentType::SInt           , NONE,  32),
    /* D32Float             */ FormatInfo::new(ChannelPrefix::D32         , ComponentType::Float          , NONE,  32),
    /* R24G8Typeless        */ FormatInfo::new(ChannelPrefix::R24G8       , ComponentType::Typeless       , NONE,  32),
    /* D24UNormS8UInt       */ FormatInfo::new(ChannelPrefix::R24G8       , ComponentType::UInt           , NONE,  32),
    /* R24UNormX8Typeless   */ FormatInfo::new(ChannelPrefix::R24G8       , ComponentType::UNorm          , NONE,  32),
    /* X24TypelessG8UInt    */ FormatInfo::new(ChannelPrefix::R24G8       , ComponentType::UInt           , NONE,  32),
    /* R8G8Typeless         */ FormatInfo::new(ChannelPrefix::R8G8        , ComponentType::Typeless       , NONE,  16),
    /* R8G8UNorm            */ FormatInfo::new(ChannelPrefix::R8G8        , ComponentType::UNorm          , NONE,  16),
    /* R8G8UInt             */ FormatInfo::new(ChannelPrefix::R8G8        , ComponentType::UInt           , NONE,  16),
    /* R8G8SNorm            */ FormatInfo::new(ChannelPrefix::R8G8        , ComponentType::SNorm          , NONE,  16),
    /* R8G8SInt             */ FormatInfo::new(ChannelPrefix::R8G8        , ComponentType::SInt           , NONE,  16),
    /* R16Typeless          */ FormatInfo::new(ChannelPrefix::R16         , ComponentType::Typeless       , NONE,  16),
    /* R16Float             */ FormatInfo::new(ChannelPrefix::R16         , ComponentType::Float          , NONE,  16),
    /* R16UNorm             */ FormatInfo::new(ChannelPrefix::R16         , ComponentType::UNorm          , NONE,  16),
    /* R16UInt              */ FormatInfo::new(ChannelPrefix::R16         , ComponentType::UInt           , NONE,  16),
    /* R16SNorm             */ FormatInfo::new(ChannelPrefix::R16         , ComponentType::SNorm          , NONE,  16),
    /* R16SInt              */ FormatInfo::new(ChannelPrefix::R16         , ComponentType::SInt           , NONE,  16),
    /* D16UNorm             */ FormatInfo::new(ChannelPrefix::D16         , ComponentType::UNorm          , NONE,  16),
    /* R8Typeless           */ FormatInfo::new(ChannelPrefix::R8          , ComponentType::Typeless       , NONE,   8),
    /* R8UNorm              */ FormatInfo::new(ChannelPrefix::R8          , ComponentType::UNorm          , NONE,   8),
    /* R8UInt               */ FormatInfo::new(ChannelPrefix::R8          , ComponentType::UInt           , NONE,   8),
    /* R8SNorm              */ FormatInfo::new(ChannelPrefix::R8          , ComponentType::SNorm          , NONE,   8),
    /* R8SInt               */ FormatInfo::new(ChannelPrefix::R8          , ComponentType::SInt           , NONE,   8),
    /* A8UNorm              */ FormatInfo::new(ChannelPrefix::A8          , ComponentType::UNorm          , NONE,   8),
    /* R1UNorm              */ FormatInfo::new(ChannelPrefix::R1          , ComponentType::UNorm          , NONE,   1),
    /* R9G9B9E5SharedExp    */ FormatInfo::new(ChannelPrefix::R9G9B9E5    , ComponentType::Exponential    , NONE,  32),
    /* R8G8B8G8UNorm        */ FormatInfo::new(ChannelPrefix::R8G8B8G8    , ComponentType::UNorm          , NONE,  16),
    /* G8R8G8B8UNorm        */ FormatInfo::new(ChannelPrefix::G8R8G8B8    , ComponentType::UNorm          , NONE,  16),
    /* BC1Typeless          */ FormatInfo::new(ChannelPrefix::BC1         , ComponentType::Typeless       , BC1 ,   4),
    /* BC1UNorm             */ FormatInfo::new(ChannelPrefix::BC1         , ComponentType::UNorm          , BC1 ,   4),
    /* BC1Srgb              */ FormatInfo::new(ChannelPrefix::BC1         , ComponentType::UNormSrgb      , BC1 ,   4),
    /* BC2Typeless          */ FormatInfo::new(ChannelPrefix::BC2         , ComponentType::Typeless       , BC2 ,   8),
    /* BC2UNorm             */ FormatInfo::new(ChannelPrefix::BC2         , ComponentType::UNorm          , BC2 ,   8),
    /* BC2Srgb              */ FormatInfo::new(ChannelPrefix::BC2         , ComponentType::UNormSrgb      , BC2 ,   8),
    /* BC3Typeless          */ FormatInfo::new(ChannelPrefix::BC3         , ComponentType::Typeless       , BC3 ,   8),
    /* BC3UNorm             */ FormatInfo::new(ChannelPrefix::BC3         , ComponentType::UNorm          , BC3 ,   8),
    /* BC3Srgb              */ FormatInfo::new(ChannelPrefix::BC3         , ComponentType::UNormSrgb      , BC3 ,   8),
    /* BC4Typeless          */ FormatInfo::new(ChannelPrefix::BC4         , ComponentType::Typeless       , BC4 ,   4),
    /* BC4UNorm             */ FormatInfo::new(ChannelPrefix::BC4         , ComponentType::UNorm          , BC4 ,   4),
    /* BC4SNorm             */ FormatInfo::new(ChannelPrefix::BC4         , ComponentType::SNorm          , BC4 ,   4),
    /* BC5Typeless          */ FormatInfo::new(ChannelPrefix::BC5         , ComponentType::Typeless       , BC5 ,   8),
    /* BC5UNorm             */ FormatInfo::new(ChannelPrefix::BC5         , ComponentType::UNorm          , BC5 ,   8),
    /* BC5SNorm             */ FormatInfo::new(ChannelPrefix::BC5         , ComponentType::SNorm          , BC5 ,   8),
    /* B5G6R5UNorm          */ FormatInfo::new(ChannelPrefix::B5G6R5      , ComponentType::UNorm          , NONE,  16),
    /* B5G5R5A1UNorm        */ FormatInfo::new(ChannelPrefix::B5G5R5A1    , ComponentType::UNorm          , NONE,  16),
    /* B8G8R8A8UNorm        */ FormatInfo::new(ChannelPrefix::B8G8R8A8    , ComponentType::UNorm          , NONE,  32),
    /* B8G8R8A8Typeless     */ FormatInfo::new(ChannelPrefix::B8G8R8A8    , ComponentType::Typeless       , NONE,  32),
    /* B8G8R8A8Srgb         */ FormatInfo::new(ChannelPrefix::B8G8R8A8    , ComponentType::UNormSrgb      , NONE,  32),
    /* B8G8R8X8UNorm        */ FormatInfo::new(ChannelPrefix::B8G8R8X8    , ComponentType::UNorm          , NONE,  32),
    /* B8G8R8X8Typeless     */ FormatInfo::new(ChannelPrefix::B8G8R8X8    , ComponentType::Typeless       , NONE,  32),
    /* B8G8R8X8Srgb         */ FormatInfo::new(ChannelPrefix::B8G8R8X8    , ComponentType::UNormSrgb      , NONE,  32),
    /* BC6HTypeless         */ FormatInfo::new(ChannelPrefix::BC6H        , ComponentType::Typeless       , BC6H,   8),
    /* BC6HUF16             */ FormatInfo::new(ChannelPrefix::BC6H        , ComponentType::UnsignedFloat16, BC6H,   8),
    /* BC6HSF16             */ FormatInfo::new(ChannelPrefix::BC6H        , ComponentType::SignedFloat16  , BC6H,   8),
    /* BC7Typeless          */ FormatInfo::new(ChannelPrefix::BC7         , ComponentType::Typeless       , BC7 ,   8),
    /* BC7UNorm             */ FormatInfo::new(ChannelPrefix::BC7         , ComponentType::UNorm          , BC7 ,   8),
    /* BC7Srgb              */ FormatInfo::new(ChannelPrefix::BC7         , ComponentType::UNormSrgb      , BC7 ,   8),
    /* D32FloatS8UInt       */ FormatInfo::new(ChannelPrefix::Irregular   , ComponentType::Typeless       , NONE,   0),
    /* S8UInt               */ FormatInfo::new(ChannelPrefix::Irregular   , ComponentType::Typeless       , NONE,   0),
    /* Matrix4x4            */ FormatInfo::new(ChannelPrefix::Irregular   , ComponentType::Typeless       , NONE,   0),
    /* Matrix3x4            */ FormatInfo::new(ChannelPrefix::Irregular   , ComponentType::Typeless       , NONE,   0),
];

const PREFIX_COMPONENTS: [FormatComponents; ChannelPrefix::COUNT] = [
    /* R32G32B32A32 */ FormatComponents::RGBAlpha,
    /* R32G32B32    */ FormatComponents::RGB,
    /* R16G16B16A16 */ FormatComponents::RGBAlpha,
    /* R32G32       */ FormatComponents::RG,
    /* R10G10B10A2  */ FormatComponents::RGBAlpha,
    /* R11G11B10    */ FormatComponents::RGB,
    /* R8G8B8A8     */ FormatComponents::RGBAlpha,
    /* R16G16       */ FormatComponents::RG,
    /* R32          */ FormatComponents::Luminance,
    /* D32          */ FormatComponents::Depth,
    /* R24G8        */ FormatComponents::DepthStencil,
    /* R8G8         */ FormatComponents::RG,
    /* R16          */ FormatComponents::Luminance,
    /* D16          */ FormatComponents::Depth,
    /* R8           */ FormatComponents::Luminance,
    /* A8           */ FormatComponents::Alpha,
    /* R1           */ FormatComponents::Luminance,
    /* R9G9B9E5     */ FormatComponents::RGBE,
    /* R8G8B8G8     */ FormatComponents::RGB,
    /* G8R8G8B8     */ FormatComponents::RGB,
    /* BC1          */ FormatComponents::RGB,
    /* BC2          */ FormatComponents::RGBAlpha,
    /* BC3          */ FormatComponents::RGBAlpha,
    /* BC4          */ FormatComponents::Luminance,
    /* BC5          */ FormatComponents::RG,
    /* BC6H         */ FormatComponents::RGB,
    /* BC7          */ FormatComponents::RGBAlpha,
    /* B5G6R5       */ FormatComponents::RGB,
    /* B5G5R5A1     */ FormatComponents::RGBAlpha,
    /* B8G8R8A8     */ FormatComponents::RGBAlpha,
    /* B8G8R8X8     */ FormatComponents::RGB,
    /* Irregular    */ FormatComponents::Unknown,
];
