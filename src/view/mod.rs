//! Page view: state projected to a view model, then to HTML

pub mod markup;
pub mod model;

pub use markup::{render_page, render_scatter_hearts, render_subtree};
pub use model::{AcceptedView, AskingView, MountPlan, Subtree, ViewModel, mount_plan};
