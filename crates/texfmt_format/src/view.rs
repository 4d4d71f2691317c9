use texfmt_macros::{EnumCount, EnumDisplay};

use crate::Format;

/// Aspect and color space a texture view addresses
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, EnumCount, EnumDisplay)]
pub enum AspectFilter {
    /// Use the resource's format as is
    #[default]
    Color,
    Depth,
    Stencil,
    DepthStencil,
    /// Color, viewed in linear color space
    ColorLinear,
    /// Color, viewed in sRGB color space
    ColorSRGB,
}

/// How a view onto a resource is bound
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, EnumCount, EnumDisplay)]
pub enum FormatUsage {
    /// Read in a shader
    #[default]
    ShaderResource,
    /// Written as a render target
    RenderTarget,
    /// Written (and tested against) as a depth/stencil target
    DepthStencil,
    /// Read and written in a shader
    UnorderedAccess,
}

impl FormatUsage {
    /// Does the usage bind the resource as a depth/stencil target?
    pub fn is_depth_stencil_target(self) -> bool {
        self == FormatUsage::DepthStencil
    }
}

impl Format {
    /// Get the format a view onto a resource of this format should use.
    ///
    /// Depth and stencil aspects resolve to the combined depth/stencil format when bound as a depth/stencil target,
    /// and to the matching single aspect format otherwise. Linear and sRGB filters ignore the usage.
    pub fn resolve(self, aspect: AspectFilter, usage: FormatUsage) -> Format {
        match aspect {
            AspectFilter::Color => self,

            AspectFilter::Depth |
            AspectFilter::DepthStencil => if usage.is_depth_stencil_target() {
                self.as_depth_stencil_format()
            } else {
                self.as_depth_aspect_srv_format()
            },

            AspectFilter::Stencil => if usage.is_depth_stencil_target() {
                self.as_depth_stencil_format()
            } else {
                self.as_stencil_aspect_srv_format()
            },

            AspectFilter::ColorLinear => self.as_linear_format(),
            AspectFilter::ColorSRGB => self.as_srgb_format(),
        }
    }
}

/// Get the format a view onto a resource of the base format should use, see [`Format::resolve`]
pub fn resolve_format(base: Format, aspect: AspectFilter, usage: FormatUsage) -> Format {
    base.resolve(aspect, usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    const USAGES: [FormatUsage; 4] = [FormatUsage::ShaderResource, FormatUsage::RenderTarget, FormatUsage::DepthStencil, FormatUsage::UnorderedAccess];

    #[test]
    fn color_is_unchanged() {
        for usage in USAGES {
            assert_eq!(resolve_format(Format::R24G8Typeless, AspectFilter::Color, usage), Format::R24G8Typeless);
            assert_eq!(resolve_format(Format::BC1Srgb, AspectFilter::Color, usage), Format::BC1Srgb);
        }
    }

    #[test]
    fn depth_and_stencil() {
        let base = Format::R24G8Typeless;
        assert_eq!(resolve_format(base, AspectFilter::Depth, FormatUsage::DepthStencil), Format::D24UNormS8UInt);
        assert_eq!(resolve_format(base, AspectFilter::DepthStencil, FormatUsage::DepthStencil), Format::D24UNormS8UInt);
        assert_eq!(resolve_format(base, AspectFilter::Stencil, FormatUsage::DepthStencil), Format::D24UNormS8UInt);

        assert_eq!(resolve_format(base, AspectFilter::Depth, FormatUsage::ShaderResource), Format::R24UNormX8Typeless);
        assert_eq!(resolve_format(base, AspectFilter::DepthStencil, FormatUsage::ShaderResource), Format::R24UNormX8Typeless);
        assert_eq!(resolve_format(base, AspectFilter::Stencil, FormatUsage::ShaderResource), Format::X24TypelessG8UInt);
        assert_eq!(resolve_format(base, AspectFilter::Stencil, FormatUsage::UnorderedAccess), Format::X24TypelessG8UInt);

        assert_eq!(resolve_format(Format::R32Typeless, AspectFilter::Depth, FormatUsage::RenderTarget), Format::R32Float);
    }

    #[test]
    fn color_space_ignores_usage() {
        for usage in USAGES {
            assert_eq!(resolve_format(Format::R8G8B8A8Typeless, AspectFilter::ColorLinear, usage), Format::R8G8B8A8UNorm);
            assert_eq!(resolve_format(Format::R8G8B8A8Typeless, AspectFilter::ColorSRGB, usage), Format::R8G8B8A8Srgb);
            assert_eq!(resolve_format(Format::R32Float, AspectFilter::ColorSRGB, usage), Format::R32Float);
        }
    }
}
