use std::str::FromStr;
use texel_layout::*;

/// Group of formats selected by `list --family`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatFamily {
    Color,
    DepthStencil,
    Compressed,
    Multiplane,
    Packed,
    Ycbcr,
    All,
}

impl FormatFamily {
    pub fn contains(self, format: Format) -> bool {
        match self {
            FormatFamily::Color => is_color(format),
            FormatFamily::DepthStencil => is_depth_or_stencil(format),
            FormatFamily::Compressed => is_compressed(format),
            FormatFamily::Multiplane => is_multiplane(format),
            FormatFamily::Packed => is_packed(format),
            FormatFamily::Ycbcr => requires_ycbcr_conversion(format),
            FormatFamily::All => !is_undefined(format),
        }
    }
}

// Implement FromStr to allow parsing from command line arguments
impl FromStr for FormatFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "color" | "colour" => Ok(FormatFamily::Color),
            "depth-stencil" | "depth" => Ok(FormatFamily::DepthStencil),
            "compressed" => Ok(FormatFamily::Compressed),
            "multiplane" => Ok(FormatFamily::Multiplane),
            "packed" => Ok(FormatFamily::Packed),
            "ycbcr" => Ok(FormatFamily::Ycbcr),
            "all" => Ok(FormatFamily::All),
            _ => Err(format!(
                "Invalid family: {s}. Valid families are: color, depth-stencil, compressed, multiplane, packed, ycbcr, all"
            )),
        }
    }
}

/// Parses a format from its identifier name or its raw API value.
pub fn parse_format(value: &str) -> Result<Format, String> {
    match value.trim().parse::<u32>() {
        Ok(raw) => Format::try_from(raw).map_err(|e| e.to_string()),
        Err(_) => value.parse::<Format>().map_err(|e| format!("{e}: {value}")),
    }
}

/// Parses a single aspect name as accepted by `--src-aspect` and `--dst-aspect`.
pub fn parse_aspect(value: &str) -> Result<ImageAspects, String> {
    match value.to_lowercase().as_str() {
        "color" | "colour" => Ok(ImageAspects::COLOR),
        "depth" => Ok(ImageAspects::DEPTH),
        "stencil" => Ok(ImageAspects::STENCIL),
        "plane0" | "plane-0" => Ok(ImageAspects::PLANE_0),
        "plane1" | "plane-1" => Ok(ImageAspects::PLANE_1),
        "plane2" | "plane-2" => Ok(ImageAspects::PLANE_2),
        _ => Err(format!(
            "Invalid aspect: {value}. Valid aspects are: color, depth, stencil, plane0, plane1, plane2"
        )),
    }
}

/// Formats an aspect mask as `COLOR | PLANE_0`, or `NONE` when empty.
pub fn aspect_names(aspects: ImageAspects) -> String {
    if aspects.is_empty() {
        return "NONE".to_string();
    }

    aspects
        .iter_names()
        .map(|(name, _)| name)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Names of every family and numeric representation `format` belongs to.
pub fn family_names(format: Format) -> Vec<&'static str> {
    let families: [(fn(Format) -> bool, &'static str); 22] = [
        (is_undefined, "undefined"),
        (is_color, "color"),
        (is_depth_only, "depth"),
        (is_stencil_only, "stencil"),
        (is_depth_and_stencil, "depth-stencil"),
        (is_compressed_block_compression, "bc"),
        (is_compressed_etc2_eac, "etc2-eac"),
        (is_compressed_astc_ldr, "astc"),
        (is_compressed_pvrtc, "pvrtc"),
        (is_packed, "packed"),
        (is_multiplane, "multiplane"),
        (is_single_plane_422, "422"),
        (requires_ycbcr_conversion, "ycbcr"),
        (is_unorm, "unorm"),
        (is_snorm, "snorm"),
        (is_uint, "uint"),
        (is_sint, "sint"),
        (is_float, "float"),
        (is_srgb, "srgb"),
        (is_uscaled, "uscaled"),
        (is_sscaled, "sscaled"),
        (element_is_texel, "texel-element"),
    ];

    families
        .iter()
        .filter(|(predicate, _)| predicate(format))
        .map(|&(_, name)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("R8G8B8A8_UNORM", Format::R8G8B8A8Unorm)]
    #[case("37", Format::R8G8B8A8Unorm)]
    #[case("1000156003", Format::G8B8R82Plane420Unorm)]
    #[case("vk_format_bc1_rgb_unorm_block", Format::BC1RgbUnormBlock)]
    fn parses_names_and_raw_values(#[case] input: &str, #[case] expected: Format) {
        assert_eq!(parse_format(input), Ok(expected));
    }

    #[rstest]
    #[case("185")]
    #[case("R8G8B8A8")]
    fn rejects_unknown_formats(#[case] input: &str) {
        assert!(parse_format(input).is_err());
    }

    #[rstest]
    #[case("color", ImageAspects::COLOR)]
    #[case("Stencil", ImageAspects::STENCIL)]
    #[case("plane-1", ImageAspects::PLANE_1)]
    #[case("PLANE2", ImageAspects::PLANE_2)]
    fn parses_aspects(#[case] input: &str, #[case] expected: ImageAspects) {
        assert_eq!(parse_aspect(input), Ok(expected));
    }

    #[test]
    fn rejects_unknown_aspects() {
        assert!(parse_aspect("plane3").is_err());
    }

    #[rstest]
    #[case(ImageAspects::empty(), "NONE")]
    #[case(ImageAspects::COLOR, "COLOR")]
    #[case(ImageAspects::DEPTH | ImageAspects::STENCIL, "DEPTH | STENCIL")]
    fn names_aspects(#[case] aspects: ImageAspects, #[case] expected: &str) {
        assert_eq!(aspect_names(aspects), expected);
    }

    #[rstest]
    #[case("compressed", FormatFamily::Compressed)]
    #[case("DEPTH-STENCIL", FormatFamily::DepthStencil)]
    #[case("all", FormatFamily::All)]
    fn parses_families(#[case] input: &str, #[case] expected: FormatFamily) {
        assert_eq!(input.parse::<FormatFamily>(), Ok(expected));
    }

    #[test]
    fn all_family_skips_undefined() {
        assert!(!FormatFamily::All.contains(Format::Undefined));
        assert!(FormatFamily::All.contains(Format::R8Unorm));
    }

    #[rstest]
    #[case(Format::R8G8B8A8Srgb, &["color", "srgb", "texel-element"])]
    #[case(Format::D24UnormS8Uint, &["depth-stencil", "texel-element"])]
    #[case(Format::BC7UnormBlock, &["color", "bc", "unorm"])]
    fn lists_families(#[case] format: Format, #[case] expected: &[&str]) {
        assert_eq!(family_names(format), expected);
    }
}
