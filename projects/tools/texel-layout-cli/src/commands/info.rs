use crate::util::{aspect_names, family_names, parse_format};
use argh::FromArgs;
use texel_layout::*;

#[derive(FromArgs, Debug)]
/// Print the layout properties of a format
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// format name (e.g. R8G8B8A8_UNORM) or raw value
    #[argh(positional, from_str_fn(parse_format))]
    pub format: Format,
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), Box<dyn std::error::Error>> {
    let format = cmd.format;
    let extent = texel_block_extent(format);

    println!("Format:         {format} ({})", format.as_raw());
    println!("Aspects:        {}", aspect_names(format.aspects()));
    println!("Families:       {}", family_names(format).join(", "));
    println!(
        "Element size:   {} bytes",
        element_size(format, ImageAspects::COLOR)
    );
    println!("Channels:       {}", channel_count(format));
    println!("Class:          {:?}", format.compatibility_class());
    println!(
        "Block extent:   {}x{}x{}",
        extent.width, extent.height, extent.depth
    );
    println!("Texel size:     {} bytes", texel_size(format));

    if is_depth_and_stencil(format) {
        println!(
            "Depth element:  {} bytes",
            element_size(format, ImageAspects::DEPTH)
        );
        println!(
            "Stencil element: {} bytes",
            element_size(format, ImageAspects::STENCIL)
        );
    }

    let planes = plane_count(format);
    println!("Planes:         {planes}");
    if is_multiplane(format) {
        for (index, &aspect) in ImageAspects::PLANES[..planes as usize].iter().enumerate() {
            let divisors = plane_divisors(format, aspect);
            println!(
                "  Plane {index}: {} ({} bytes), divisors {}x{}",
                compatible_single_plane_format(format, aspect),
                element_size(format, aspect),
                divisors.width_divisor,
                divisors.height_divisor
            );
        }
    }

    Ok(())
}
