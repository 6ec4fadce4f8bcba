/// Which host capabilities are present. View operations touching a missing
/// capability degrade to no-ops, which is also how the views run under unit
/// tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewFeatures {
    pub document: bool,
    pub storage: bool,
    pub file_pickers: bool,
    pub resize: bool,
}

impl ViewFeatures {
    /// Everything off.
    pub fn headless() -> Self {
        Self::default()
    }

    pub fn detect() -> Self {
        let window = web_sys::window();
        let document = window.as_ref().and_then(|w| w.document());
        let storage = window
            .as_ref()
            .and_then(|w| w.local_storage().ok().flatten())
            .is_some();
        let has_body = document.as_ref().and_then(|d| d.body()).is_some();

        let features = Self {
            document: document.is_some(),
            storage,
            file_pickers: has_body,
            resize: window.is_some(),
        };
        log::debug!("view features: {:?}", features);
        features
    }
}
