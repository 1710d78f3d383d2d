/// A display region of the upload page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub visible: bool,
    pub content: String,
}

impl Region {
    fn hidden() -> Self {
        Self::default()
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Results,
    Error,
}

/// The loading indicator, results and error regions of one page.
///
/// At most one region is visible at a time; the transitions below are the
/// only way to change visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    pub loading: Region,
    pub results: Region,
    pub error: Region,
}

impl Default for Regions {
    fn default() -> Self {
        Self::idle()
    }
}

impl Regions {
    pub fn idle() -> Self {
        Self {
            loading: Region::hidden(),
            results: Region::hidden(),
            error: Region::hidden(),
        }
    }

    pub fn show_loading(&mut self) {
        self.loading.show();
        self.results.hide();
        self.error.hide();
    }

    /// Replaces the results content and reveals it.
    pub fn show_results(&mut self, markup: String) {
        self.loading.hide();
        self.error.hide();
        self.results.content = markup;
        self.results.show();
    }

    pub fn show_error(&mut self, message: String) {
        self.loading.hide();
        self.results.hide();
        self.error.content = message;
        self.error.show();
    }

    pub fn state(&self) -> ViewState {
        if self.loading.visible {
            ViewState::Loading
        } else if self.error.visible {
            ViewState::Error
        } else if self.results.visible {
            ViewState::Results
        } else {
            ViewState::Idle
        }
    }
}
