pub mod apply;
pub mod catalog;
pub mod check;
pub mod init;
pub mod render;
pub mod suggest;
pub mod transfer;

pub use apply::{apply, ApplyArgs};
pub use catalog::{elements, templates};
pub use check::check;
pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};
pub use suggest::{suggest, SuggestArgs};
pub use transfer::{export, import, ExportArgs, ImportArgs};
