pub mod use_notice;
pub mod use_options;

pub use use_notice::*;
pub use use_options::*;
