pub mod article;
pub mod sentiment;
pub mod report;

pub use article::*;
pub use sentiment::*;
pub use report::*;
