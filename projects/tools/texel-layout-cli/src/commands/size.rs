use crate::error::CliError;
use crate::util::parse_format;
use argh::FromArgs;
use bytesize::ByteSize;
use texel_layout::{image_byte_size, is_multiplane, try_region_byte_size, Format, LayoutError};

#[derive(FromArgs, Debug)]
/// Print the bytes needed to store a region and a whole image of a format
#[argh(subcommand, name = "size")]
pub struct SizeCmd {
    /// format name or raw value
    #[argh(positional, from_str_fn(parse_format))]
    pub format: Format,

    /// width in texels
    #[argh(positional)]
    pub width: u32,

    /// height in texels
    #[argh(positional)]
    pub height: u32,

    /// depth in texels [default: 1]
    #[argh(option, default = "1")]
    pub depth: u32,
}

pub fn handle_size_command(cmd: SizeCmd) -> Result<(), CliError> {
    let SizeCmd {
        format,
        width,
        height,
        depth,
    } = cmd;

    println!("{format} {width}x{height}x{depth}");
    println!("{}", region_size_line(format, width, height, depth)?);
    println!("{}", image_size_line(format, width, height, depth));
    Ok(())
}

/// Region size report; regions the layout cannot size as one block are reported as `n/a`.
fn region_size_line(
    format: Format,
    width: u32,
    height: u32,
    depth: u32,
) -> Result<String, CliError> {
    match try_region_byte_size(format, width, height, depth) {
        Ok(bytes) => Ok(format!("Region size: {bytes} bytes ({})", ByteSize(bytes))),
        // Partial blocks are still valid for a whole image, only the region size is undefined
        Err(LayoutError::UnalignedRegion {
            block_width,
            block_height,
            ..
        }) => Ok(format!(
            "Region size: n/a (not aligned to {block_width}x{block_height} blocks)"
        )),
        // Multi-planar formats have no single element size, their planes are summed below
        Err(LayoutError::UnsizedFormat(_)) if is_multiplane(format) => {
            Ok("Region size: n/a (multi-planar, see image size)".to_string())
        }
        Err(LayoutError::SizeOverflow { .. }) => {
            Ok("Region size: n/a (exceeds 64 bits)".to_string())
        }
        Err(e) => Err(e.into()),
    }
}

fn image_size_line(format: Format, width: u32, height: u32, depth: u32) -> String {
    let image = image_byte_size(format, width, height, depth);
    format!("Image size:  {image} bytes ({})", ByteSize(image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Format::R8G8B8A8Unorm, 16, 16, "Region size: 1024 bytes")]
    #[case(Format::BC1RgbUnormBlock, 6, 6, "Region size: n/a (not aligned to 4x4 blocks)")]
    #[case(
        Format::G8B8R82Plane420Unorm,
        16,
        16,
        "Region size: n/a (multi-planar, see image size)"
    )]
    #[case(
        Format::G16B16R163Plane444Unorm,
        16,
        16,
        "Region size: n/a (multi-planar, see image size)"
    )]
    fn reports_region_sizes(
        #[case] format: Format,
        #[case] width: u32,
        #[case] height: u32,
        #[case] expected: &str,
    ) {
        let line = region_size_line(format, width, height, 1).unwrap();
        assert!(line.starts_with(expected), "{line}");
    }

    #[test]
    fn multiplane_formats_still_report_image_size() {
        let format = Format::G8B8R82Plane420Unorm;
        assert!(region_size_line(format, 16, 16, 1).is_ok());
        assert!(image_size_line(format, 16, 16, 1).starts_with("Image size:  384 bytes"));
    }

    #[test]
    fn oversized_regions_are_not_an_error() {
        let line = region_size_line(Format::R64G64B64A64Sfloat, u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(line.unwrap(), "Region size: n/a (exceeds 64 bits)");
    }

    #[test]
    fn undefined_format_is_an_error() {
        assert!(region_size_line(Format::Undefined, 4, 4, 1).is_err());
    }
}
