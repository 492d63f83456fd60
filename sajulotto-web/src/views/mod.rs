pub mod analyzing;
pub mod idle;
pub mod result;

pub use analyzing::AnalyzingView;
pub use idle::IdleView;
pub use result::{ResultView, RollView};
