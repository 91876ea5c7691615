use crate::error::CliError;
use crate::util::{aspect_names, parse_aspect, parse_format};
use argh::FromArgs;
use texel_layout::{validate_copy_regions, CopyRegion, Format, ImageAspects};

#[derive(FromArgs, Debug)]
/// Check whether a raw copy between two formats moves equally sized elements
#[argh(subcommand, name = "copy-check")]
pub struct CopyCheckCmd {
    /// source format name or raw value
    #[argh(positional, from_str_fn(parse_format))]
    pub src: Format,

    /// destination format name or raw value
    #[argh(positional, from_str_fn(parse_format))]
    pub dst: Format,

    /// source aspect: color, depth, stencil, plane0, plane1, plane2 [default: color]
    #[argh(option, from_str_fn(parse_aspect), default = "ImageAspects::COLOR")]
    pub src_aspect: ImageAspects,

    /// destination aspect: color, depth, stencil, plane0, plane1, plane2 [default: color]
    #[argh(option, from_str_fn(parse_aspect), default = "ImageAspects::COLOR")]
    pub dst_aspect: ImageAspects,
}

pub fn handle_copy_check_command(cmd: CopyCheckCmd) -> Result<(), CliError> {
    let region = CopyRegion::new(cmd.src_aspect, cmd.dst_aspect);
    println!(
        "{} [{}] -> {} [{}]",
        cmd.src,
        aspect_names(cmd.src_aspect),
        cmd.dst,
        aspect_names(cmd.dst_aspect)
    );

    validate_copy_regions(cmd.src, cmd.dst, &[region])?;
    println!("Copy is valid.");
    Ok(())
}
