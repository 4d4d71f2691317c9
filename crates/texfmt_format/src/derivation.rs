//! Mappings from a format to a related format along a single axis.
//!
//! Every mapping returns its input unchanged when no related format exists.
//! That identity result is not an error: it is the only "no such variant" signal, so a caller that needs to know
//! whether a format *has* a linear/sRGB counterpart should use [`Format::has_linear_and_srgb_formats`].

use crate::Format;

/// Formats sharing a bit layout that can be viewed as either linear or sRGB
struct ColorSpaceFamily {
    typeless: Format,
    linear:   Format,
    srgb:     Format,
}

impl ColorSpaceFamily {
    const fn new(typeless: Format, linear: Format, srgb: Format) -> Self {
        Self { typeless, linear, srgb }
    }

    fn contains(&self, format: Format) -> bool {
        format == self.typeless || format == self.linear || format == self.srgb
    }

    fn find(format: Format) -> Option<&'static ColorSpaceFamily> {
        COLOR_SPACE_FAMILIES.iter().find(|family| family.contains(format))
    }
}

/// Formats sharing a depth and/or stencil bit layout
///
/// `target` is the format used to write to the resource as a depth/stencil target, the views are used to read a single aspect.
struct DepthStencilFamily {
    typeless:     Format,
    target:       Format,
    depth_view:   Option<Format>,
    stencil_view: Option<Format>,
}

impl DepthStencilFamily {
    const fn new(typeless: Format, target: Format, depth_view: Option<Format>, stencil_view: Option<Format>) -> Self {
        Self { typeless, target, depth_view, stencil_view }
    }

    fn find(pred: impl Fn(&DepthStencilFamily) -> bool) -> Option<&'static DepthStencilFamily> {
        DEPTH_STENCIL_FAMILIES.iter().find(|family| pred(family))
    }
}

impl Format {
    /// Get the sRGB variant of the format.
    ///
    /// The typeless member of a linear/sRGB family also maps to the sRGB member.
    /// Returns `self` when there is no sRGB variant.
    pub fn as_srgb_format(self) -> Format {
        ColorSpaceFamily::find(self).map_or(self, |family| family.srgb)
    }

    /// Get the linear variant of the format.
    ///
    /// The typeless member of a linear/sRGB family also maps to the linear member.
    /// Returns `self` when there is no linear variant.
    pub fn as_linear_format(self) -> Format {
        ColorSpaceFamily::find(self).map_or(self, |family| family.linear)
    }

    /// Is the format part of a family that has both a linear and an sRGB variant (including the family's typeless format)?
    pub fn has_linear_and_srgb_formats(self) -> bool {
        ColorSpaceFamily::find(self).is_some()
    }

    /// Get the typeless variant of the format.
    ///
    /// Only linear/sRGB families, the depth/stencil families and the 32-bit single channel family are mapped.
    /// Textures that may be viewed as either linear or sRGB are created with this format, so widening it to formats
    /// that [`Format::as_srgb_format`] and [`Format::as_linear_format`] don't touch would change which format those resources are created with.
    ///
    /// Returns `self` when no mapping applies.
    pub fn as_typeless_format(self) -> Format {
        if let Some(family) = ColorSpaceFamily::find(self) {
            return family.typeless;
        }

        match self {
            Format::D24UNormS8UInt |
            Format::R24UNormX8Typeless |
            Format::X24TypelessG8UInt => Format::R24G8Typeless,

            Format::D32Float |
            Format::R32Float |
            Format::R32UInt |
            Format::R32SInt => Format::R32Typeless,

            Format::S8UInt => Format::R8Typeless,

            _ => self,
        }
    }

    /// Get the format used to bind the format's resource as a depth/stencil target.
    ///
    /// Accepts the typeless format or one of the aspect views of a depth/stencil family.
    /// Returns `self` when the format is not part of a depth/stencil family.
    pub fn as_depth_stencil_format(self) -> Format {
        DepthStencilFamily::find(|family| self == family.typeless || Some(self) == family.depth_view || Some(self) == family.stencil_view)
            .map_or(self, |family| family.target)
    }

    /// Get the format used to read only the depth aspect in a shader.
    ///
    /// Accepts the typeless format, the target format or the stencil view of a depth/stencil family.
    /// Returns `self` when the format has no depth aspect view.
    pub fn as_depth_aspect_srv_format(self) -> Format {
        DepthStencilFamily::find(|family| self == family.typeless || self == family.target || Some(self) == family.stencil_view)
            .and_then(|family| family.depth_view)
            .unwrap_or(self)
    }

    /// Get the format used to read only the stencil aspect in a shader.
    ///
    /// Accepts the typeless format, the target format or the depth view of a depth/stencil family.
    /// Returns `self` when the format has no stencil aspect view.
    pub fn as_stencil_aspect_srv_format(self) -> Format {
        DepthStencilFamily::find(|family| self == family.typeless || self == family.target || Some(self) == family.depth_view)
            .and_then(|family| family.stencil_view)
            .unwrap_or(self)
    }
}

//==============================================================================================================================
// LUTS
//==============================================================================================================================

static COLOR_SPACE_FAMILIES: [ColorSpaceFamily; 7] = [
    //                    Typeless                   , Linear                  , sRGB
    ColorSpaceFamily::new(Format::R8G8B8A8Typeless   , Format::R8G8B8A8UNorm   , Format::R8G8B8A8Srgb),
    ColorSpaceFamily::new(Format::BC1Typeless        , Format::BC1UNorm        , Format::BC1Srgb     ),
    ColorSpaceFamily::new(Format::BC2Typeless        , Format::BC2UNorm        , Format::BC2Srgb     ),
    ColorSpaceFamily::new(Format::BC3Typeless        , Format::BC3UNorm        , Format::BC3Srgb     ),
    ColorSpaceFamily::new(Format::BC7Typeless        , Format::BC7UNorm        , Format::BC7Srgb     ),
    ColorSpaceFamily::new(Format::B8G8R8A8Typeless   , Format::B8G8R8A8UNorm   , Format::B8G8R8A8Srgb),
    ColorSpaceFamily::new(Format::B8G8R8X8Typeless   , Format::B8G8R8X8UNorm   , Format::B8G8R8X8Srgb),
];

static DEPTH_STENCIL_FAMILIES: [DepthStencilFamily; 3] = [
    //                      Typeless             , Target                , Depth view                       , Stencil view
    DepthStencilFamily::new(Format::R24G8Typeless, Format::D24UNormS8UInt, Some(Format::R24UNormX8Typeless) , Some(Format::X24TypelessG8UInt)),
    DepthStencilFamily::new(Format::R32Typeless  , Format::D32Float      , Some(Format::R32Float)           , None                           ),
    DepthStencilFamily::new(Format::R8Typeless   , Format::S8UInt        , None                             , Some(Format::R8UInt)           ),
];
