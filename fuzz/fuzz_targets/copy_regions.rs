#![no_main]

// Copy validation must agree with the boolean size check for arbitrary region lists.

use libfuzzer_sys::{arbitrary, fuzz_target};
use texel_layout::*;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct CopyInput {
    pub src_format: u8,
    pub dst_format: u8,
    pub regions: Vec<(u8, u8)>,
}

fuzz_target!(|input: CopyInput| {
    let formats = Format::all();
    let src = formats[input.src_format as usize % formats.len()];
    let dst = formats[input.dst_format as usize % formats.len()];
    let regions: Vec<CopyRegion> = input
        .regions
        .iter()
        .map(|&(src_aspect, dst_aspect)| {
            CopyRegion::new(
                ImageAspects::from_bits_truncate(u32::from(src_aspect)),
                ImageAspects::from_bits_truncate(u32::from(dst_aspect)),
            )
        })
        .collect();

    let matches = copy_element_sizes_match(src, dst, &regions);
    match validate_copy_regions(src, dst, &regions) {
        Ok(()) => assert!(matches),
        Err(LayoutError::CopySizeMismatch {
            src_size, dst_size, ..
        }) => {
            assert!(!matches);
            assert_ne!(src_size, dst_size);
        }
        Err(LayoutError::UnsizedFormat(_)) => {}
        Err(e) => panic!("unexpected error: {e}"),
    }
});
