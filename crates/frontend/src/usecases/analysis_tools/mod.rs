pub mod view;

pub use view::AnalysisToolTab;
