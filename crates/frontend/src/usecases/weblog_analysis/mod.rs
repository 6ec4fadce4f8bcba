mod chat;
pub mod view;

pub use view::WeblogAnalysisTab;
