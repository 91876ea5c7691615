use crate::util::FormatFamily;
use argh::FromArgs;
use texel_layout::{element_size, texel_block_extent, Format, ImageAspects};

#[derive(FromArgs, Debug)]
/// List formats with their element size and compatibility class
#[argh(subcommand, name = "list")]
pub struct ListCmd {
    /// family to list: color, depth-stencil, compressed, multiplane, packed, ycbcr, all [default: all]
    #[argh(option, default = "FormatFamily::All")]
    pub family: FormatFamily,
}

pub fn handle_list_command(cmd: ListCmd) -> Result<(), Box<dyn std::error::Error>> {
    let formats: Vec<Format> = Format::all()
        .iter()
        .copied()
        .filter(|&format| cmd.family.contains(format))
        .collect();

    println!(
        "{:<44} {:>10} {:>6} {:>8}  Class",
        "Format", "Value", "Bytes", "Block"
    );
    for &format in &formats {
        let extent = texel_block_extent(format);
        println!(
            "{:<44} {:>10} {:>6} {:>8}  {:?}",
            format.name(),
            format.as_raw(),
            element_size(format, ImageAspects::COLOR),
            format!("{}x{}", extent.width, extent.height),
            format.compatibility_class()
        );
    }

    println!("\n{} formats", formats.len());
    Ok(())
}
