//! Building blocks shared by the console tabs.

mod action_button;
mod file_picker_button;
mod result_panel;
mod tab_frame;

pub use action_button::ActionButton;
pub use file_picker_button::FilePickerButton;
pub use result_panel::ResultPanel;
pub use tab_frame::TabFrame;
