//! Reusable components

mod nav;
mod footer;
mod cards;
mod progress;
mod toast;

pub use nav::Nav;
pub use footer::Footer;
pub use cards::*;
pub use progress::ProgressBar;
pub use toast::{provide_toaster, use_toaster, ToastRegion, Toaster};
