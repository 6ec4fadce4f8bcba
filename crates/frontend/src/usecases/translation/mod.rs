pub mod view;

pub use view::TranslationTab;
