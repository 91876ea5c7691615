#![no_main]

// Every query must be total over arbitrary raw format values, aspect masks and extents.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texel_layout::*;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct QueryInput {
    pub format: u32,
    /// Small values hit known formats far more often than a uniform u32.
    pub format_index: u8,
    pub aspects: u32,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

fuzz_target!(|input: QueryInput| {
    let formats = Format::all();
    let format = match Format::from_raw(input.format) {
        Some(format) => format,
        None => formats[input.format_index as usize % formats.len()],
    };
    let aspects = ImageAspects::from_bits_truncate(input.aspects);
    let (width, height, depth) = (input.width, input.height, input.depth);

    // Exactly one aspect class
    let classes = [
        is_color(format),
        is_depth_only(format),
        is_stencil_only(format),
        is_depth_and_stencil(format),
        is_undefined(format),
    ];
    assert_eq!(classes.iter().filter(|&&c| c).count(), 1, "{format}");

    let extent = texel_block_extent(format);
    assert!(extent.texel_count() >= 1);

    let size = element_size(format, aspects);
    let _ = texel_size(format);
    let _ = channel_count(format);

    if !is_multiplane(format) {
        assert_eq!(plane_divisors(format, aspects), PlaneDivisors::IDENTITY);
        assert_eq!(compatible_single_plane_format(format, aspects), Format::Undefined);
    } else if let Some(index) = aspects.plane_index() {
        if (index as u32) < plane_count(format) {
            assert!(size > 0, "{format} plane {index}");
        }
    }

    // The unchecked variant must agree whenever the checked one accepts the region
    if let Ok(bytes) = try_region_byte_size(format, width, height, depth) {
        assert_eq!(bytes, region_byte_size(format, width, height, depth));
    }

    let image = image_byte_size(format, width, height, depth);
    if width == 0 || height == 0 || depth == 0 {
        assert_eq!(image, 0);
    }
});
