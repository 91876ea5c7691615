use texel_layout::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
