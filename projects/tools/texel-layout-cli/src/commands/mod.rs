pub mod copy_check;
pub mod info;
pub mod list;
pub mod size;
