use texfmt_format::*;

/// Depth buffer that is rendered to and later sampled, e.g. for ambient occlusion
struct DepthTexture {
    format: Format,
}

impl DepthTexture {
    fn new(depth_format: Format) -> Self {
        Self { format: depth_format.as_typeless_format() }
    }

    fn target_view(&self) -> Format {
        self.format.resolve(AspectFilter::Depth, FormatUsage::DepthStencil)
    }

    fn depth_view(&self) -> Format {
        self.format.resolve(AspectFilter::Depth, FormatUsage::ShaderResource)
    }

    fn stencil_view(&self) -> Format {
        self.format.resolve(AspectFilter::Stencil, FormatUsage::ShaderResource)
    }
}

#[test]
fn depth_stencil_texture() {
    let texture = DepthTexture::new(Format::D24UNormS8UInt);
    assert_eq!(texture.format, Format::R24G8Typeless);
    assert_eq!(texture.target_view(), Format::D24UNormS8UInt);
    assert_eq!(texture.depth_view(), Format::R24UNormX8Typeless);
    assert_eq!(texture.stencil_view(), Format::X24TypelessG8UInt);

    assert!(texture.target_view().has_depth_aspect());
    assert!(texture.target_view().has_stencil_aspect());
    assert_eq!(texture.depth_view().as_typeless_format(), texture.format);
}

#[test]
fn depth_only_texture() {
    let texture = DepthTexture::new(Format::D32Float);
    assert_eq!(texture.format, Format::R32Typeless);
    assert_eq!(texture.target_view(), Format::D32Float);
    assert_eq!(texture.depth_view(), Format::R32Float);
    // No stencil aspect to view
    assert_eq!(texture.stencil_view(), Format::R32Typeless);
}

#[test]
fn stencil_only_texture() {
    let texture = DepthTexture::new(Format::S8UInt);
    assert_eq!(texture.format, Format::R8Typeless);
    assert_eq!(texture.target_view(), Format::S8UInt);
    assert_eq!(texture.stencil_view(), Format::R8UInt);
    assert_eq!(texture.format.resolve(AspectFilter::Stencil, FormatUsage::DepthStencil), Format::S8UInt);
}

#[test]
fn texture_from_config_name() {
    let format: Format = "r24g8_typeless".parse().unwrap();
    assert_eq!(format.resolve(AspectFilter::DepthStencil, FormatUsage::DepthStencil).as_str(), "D24_UNORM_S8_UINT");
    assert_eq!(format.resolve(AspectFilter::Depth, FormatUsage::ShaderResource).as_str(), "R24_UNORM_X8_TYPELESS");
}

#[test]
fn srgb_render_target() {
    let texture = Format::R8G8B8A8Srgb.as_typeless_format();
    assert_eq!(texture, Format::R8G8B8A8Typeless);
    assert_eq!(texture.resolve(AspectFilter::ColorSRGB, FormatUsage::RenderTarget), Format::R8G8B8A8Srgb);
    assert_eq!(texture.resolve(AspectFilter::ColorLinear, FormatUsage::UnorderedAccess), Format::R8G8B8A8UNorm);

    let compressed = Format::BC7Srgb.as_typeless_format();
    assert_eq!(compressed.resolve(AspectFilter::ColorLinear, FormatUsage::ShaderResource), Format::BC7UNorm);
    assert_eq!(compressed.decompressed_component_precision(), 8);
}
