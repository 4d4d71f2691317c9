use texfmt_logging::{log_error, LogCategory};

use crate::{ComponentType, Error, Format, FormatComponents, Result};

const LOG_CAT: LogCategory = LogCategory::new_with_sub("Format", "Validate");

fn check(cond: bool, msg: impl FnOnce() -> String) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(Error::InvalidTable(msg()))
    }
}

fn validate_classification(format: Format) -> Result<()> {
    let components = format.components();
    let bits = format.bits_per_pixel();
    let precision = format.try_component_precision().unwrap_or(0);

    check(format == Format::Unknown || bits > 0, || format!("'{format}' has no bits"))?;
    check(components.count() * precision <= bits, || format!("'{format}' has more bits in its components than in a pixel"))?;
    if let Some(bc) = format.compression_type().block_compression() {
        check(components != FormatComponents::Unknown, || format!("block compressed format '{format}' has no components"))?;
        check(format.decompressed_component_precision() == bc.decompressed_component_precision(), || format!("'{format}' does not decompress to {bc} precision"))?;
    }

    let found = Format::find(format.desc());
    check(format == Format::Unknown || found.desc() == format.desc(), || format!("looking up '{format}' by classification returned '{found}'"))
}

fn validate_name(format: Format) -> Result<()> {
    let name = format.as_str();
    let parsed = Format::from_name(name);
    check(parsed == format, || format!("name '{name}' of '{format:?}' parses to '{parsed:?}'"))
}

fn validate_color_space(format: Format) -> Result<()> {
    let linear = format.as_linear_format();
    let srgb = format.as_srgb_format();

    if !format.has_linear_and_srgb_formats() {
        return check(linear == format && srgb == format, || format!("'{format}' has no linear/sRGB pair, but maps to '{linear}'/'{srgb}'"));
    }

    let typeless = format.as_typeless_format();
    check(srgb.as_linear_format() == linear, || format!("sRGB variant of '{format}' does not map back to '{linear}'"))?;
    check(linear.as_srgb_format() == srgb, || format!("linear variant of '{format}' does not map back to '{srgb}'"))?;
    check(linear.component_type() == ComponentType::UNorm, || format!("linear variant '{linear}' is not UNorm"))?;
    check(srgb.component_type() == ComponentType::UNormSrgb, || format!("sRGB variant '{srgb}' is not UNorm sRGB"))?;
    check(typeless.component_type() == ComponentType::Typeless, || format!("typeless variant '{typeless}' of '{format}' has a type"))?;
    check(linear.as_typeless_format() == typeless && srgb.as_typeless_format() == typeless, || format!("linear/sRGB variants of '{format}' don't share '{typeless}'"))?;
    check(typeless.has_linear_and_srgb_formats(), || format!("typeless variant '{typeless}' has no linear/sRGB pair"))
}

fn validate_typeless(format: Format) -> Result<()> {
    let typeless = format.as_typeless_format();
    check(typeless.as_typeless_format() == typeless, || format!("typeless variant of '{format}' is not stable"))?;
    check(typeless == format || typeless.component_type() == ComponentType::Typeless, || format!("'{format}' maps to '{typeless}', which is not typeless"))?;
    check(typeless.bits_per_pixel() == format.bits_per_pixel(), || format!("'{format}' and '{typeless}' have different sizes"))
}

fn validate_aspects(format: Format) -> Result<()> {
    let target = format.as_depth_stencil_format();
    check(target == format || target.has_depth_aspect() || target.has_stencil_aspect(), || format!("'{format}' maps to '{target}', which has no depth or stencil"))?;

    let depth = format.as_depth_aspect_srv_format();
    if depth != format {
        let back = depth.as_depth_stencil_format();
        check(back.has_depth_aspect(), || format!("depth view '{depth}' of '{format}' maps to '{back}', which has no depth"))?;
    }

    let stencil = format.as_stencil_aspect_srv_format();
    if stencil != format {
        let back = stencil.as_depth_stencil_format();
        check(back.has_stencil_aspect(), || format!("stencil view '{stencil}' of '{format}' maps to '{back}', which has no stencil"))?;
    }
    Ok(())
}

/// Check that the format table and the mappings between formats are consistent
pub fn validate_format_table() -> Result<()> {
    let res = Format::iter().try_for_each(|format| {
        validate_classification(format)?;
        validate_name(format)?;
        validate_color_space(format)?;
        validate_typeless(format)?;
        validate_aspects(format)
    });

    if let Err(err) = &res {
        log_error!(LOG_CAT, validate_format_table, "{err}");
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_valid() {
        assert_eq!(validate_format_table(), Ok(()));
    }

    #[test]
    fn check_reports_message() {
        assert_eq!(check(false, || "broken".to_string()), Err(Error::InvalidTable("broken".to_string())));
        assert_eq!(check(true, || unreachable!()), Ok(()));
    }
}
