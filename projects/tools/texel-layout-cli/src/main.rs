mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Inspect memory layouts of GPU texel formats
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Info(commands::info::InfoCmd),
    Size(commands::size::SizeCmd),
    List(commands::list::ListCmd),
    CopyCheck(commands::copy_check::CopyCheckCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Info(cmd) => {
            commands::info::handle_info_command(cmd)?;
        }
        Commands::Size(cmd) => {
            commands::size::handle_size_command(cmd)?;
        }
        Commands::List(cmd) => {
            commands::list::handle_list_command(cmd)?;
        }
        Commands::CopyCheck(cmd) => {
            commands::copy_check::handle_copy_check_command(cmd)?;
        }
    }

    Ok(())
}
