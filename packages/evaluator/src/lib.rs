pub mod layouts;
pub mod projector;
pub mod styles;
pub mod vdom;

pub use projector::{project, ProjectContext, SelectionOptions};
pub use styles::compose_styles;
pub use vdom::{CssRule, VNode, VirtualDomDocument};
