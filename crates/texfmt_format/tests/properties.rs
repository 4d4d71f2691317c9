use texfmt_base::EnumCountT;
use texfmt_format::*;

const TYPE_CATS: [TypeCat; TypeCat::COUNT] = [
    TypeCat::Void, TypeCat::Bool,
    TypeCat::Int8, TypeCat::UInt8, TypeCat::Int16, TypeCat::UInt16, TypeCat::Int32, TypeCat::UInt32, TypeCat::Int64, TypeCat::UInt64,
    TypeCat::Float, TypeCat::Double,
];
const NORMALIZATION_MODES: [NormalizationMode; NormalizationMode::COUNT] = [NormalizationMode::Integer, NormalizationMode::Normalized, NormalizationMode::Float];

#[test]
fn table_validates() {
    assert_eq!(validate_format_table(), Ok(()));
}

#[test]
fn every_format_is_classified() {
    assert_eq!(Format::iter().count(), Format::COUNT);

    for format in Format::iter().skip(1) {
        assert_ne!(format.bits_per_pixel(), 0, "{format}");
        assert_eq!(format.is_block_compressed(), format.compression_type() != CompressionType::None, "{format}");
        if format.component_count() != 0 {
            assert_eq!(format.component_precision(), format.bits_per_pixel() / format.component_count(), "{format}");
        }
    }

    let mut visited = 0;
    Format::for_each(|_| visited += 1);
    assert_eq!(visited, Format::COUNT);
}

#[test]
fn names_round_trip() {
    for format in Format::iter() {
        let name = format.as_str();
        assert_eq!(Format::from_name(name), format);
        assert_eq!(Format::from_name(&name.to_ascii_lowercase()), format);
        assert_eq!(name.parse::<Format>(), Ok(format));
        assert_eq!(format.to_string(), name);
    }
}

#[test]
fn linear_and_srgb_are_inverse() {
    for format in Format::iter() {
        assert_eq!(format.as_srgb_format().as_linear_format(), format.as_linear_format(), "{format}");
        assert_eq!(format.as_linear_format().as_srgb_format(), format.as_srgb_format(), "{format}");
        if !format.has_linear_and_srgb_formats() {
            assert_eq!(format.as_srgb_format(), format);
            assert_eq!(format.as_linear_format(), format);
        }
    }
}

#[test]
fn typeless_is_idempotent() {
    for format in Format::iter() {
        let typeless = format.as_typeless_format();
        assert_eq!(typeless.as_typeless_format(), typeless, "{format}");
        assert_eq!(typeless.bits_per_pixel(), format.bits_per_pixel(), "{format}");
    }
}

#[test]
fn aspect_views_round_trip() {
    for format in Format::iter() {
        let depth = format.as_depth_aspect_srv_format();
        if depth != format {
            assert!(depth.as_depth_stencil_format().has_depth_aspect(), "{format}");
        }

        let stencil = format.as_stencil_aspect_srv_format();
        if stencil != format {
            assert!(stencil.as_depth_stencil_format().has_stencil_aspect(), "{format}");
        }
    }
}

#[test]
fn find_returns_matching_format() {
    for format in Format::iter().skip(1) {
        let desc = format.desc();
        let found = Format::find(desc);
        assert_eq!(found.desc(), desc, "{format} found {found}");
        assert_eq!(Format::try_find(desc), Ok(found));
    }
}

#[test]
fn find_only_widens_rgb() {
    let types = [ComponentType::Typeless, ComponentType::Float, ComponentType::UInt, ComponentType::SInt, ComponentType::UNorm, ComponentType::SNorm, ComponentType::UNormSrgb];
    for component_type in types {
        for precision in [1, 2, 4, 8, 10, 16, 32] {
            let rgb = find_format(CompressionType::None, FormatComponents::RGB, component_type, precision);
            match rgb.components() {
                FormatComponents::RGB => assert_eq!(rgb.component_precision(), precision),
                FormatComponents::RGBAlpha => {
                    assert_eq!(rgb, find_format(CompressionType::None, FormatComponents::RGBAlpha, component_type, precision));
                },
                _ => assert_eq!(rgb, Format::Unknown, "{component_type} {precision}"),
            }

            let rg = find_format(CompressionType::None, FormatComponents::RG, component_type, precision);
            assert!(rg == Format::Unknown || rg.components() == FormatComponents::RG);
        }
    }
}

#[test]
fn elements_map_to_matching_formats() {
    for type_cat in TYPE_CATS {
        for norm in NORMALIZATION_MODES {
            for count in 0..=5 {
                let element = ElementType::new(type_cat, count);
                let format = as_format(element, norm);
                assert_eq!(Format::try_from_element(element, norm).ok(), (format != Format::Unknown).then_some(format));
                if format == Format::Unknown {
                    continue;
                }

                assert_eq!(format.component_count(), count, "{element} {norm}");
                assert_eq!(u64::from(format.bits_per_pixel()), element.byte_size() * 8, "{element} {norm}");
                assert!(!format.is_block_compressed());
            }
        }
    }
}

#[test]
fn color_views_follow_derivations() {
    let usages = [FormatUsage::ShaderResource, FormatUsage::RenderTarget, FormatUsage::DepthStencil, FormatUsage::UnorderedAccess];
    for format in Format::iter() {
        for usage in usages {
            assert_eq!(resolve_format(format, AspectFilter::Color, usage), format);
            assert_eq!(resolve_format(format, AspectFilter::ColorLinear, usage), format.as_linear_format());
            assert_eq!(resolve_format(format, AspectFilter::ColorSRGB, usage), format.as_srgb_format());
        }
    }
}
