//! Page-container state: which item is selected, whether the edit dialog
//! is open, the refresh counter dependent views re-fetch on, and the last
//! banner message. One implementation serves both resource pages.

#[derive(Debug, Clone, Default)]
pub struct PageState {
    selected: Option<i64>,
    dialog_open: bool,
    refresh_key: u64,
    banner: Option<String>,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    /// Selecting an item is what triggers the detail-panel fetch upstream.
    pub fn select(&mut self, id: i64) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
    }

    /// Views re-fetch whenever this counter changes.
    pub fn refresh_key(&self) -> u64 {
        self.refresh_key
    }

    /// A successful save closes the dialog and bumps the refresh counter.
    pub fn saved(&mut self, banner: impl Into<String>) {
        self.dialog_open = false;
        self.refresh_key += 1;
        self.banner = Some(banner.into());
    }

    /// A failed save leaves the dialog open so the user can correct it.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
    }

    /// Deletions also invalidate the lists and drop a stale selection.
    pub fn deleted(&mut self, id: i64) {
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.refresh_key += 1;
    }

    pub fn take_banner(&mut self) -> Option<String> {
        self.banner.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_closes_dialog_and_bumps_refresh() {
        let mut page = PageState::new();
        page.open_dialog();
        assert_eq!(page.refresh_key(), 0);

        page.saved("Account registered!");
        assert!(!page.dialog_open());
        assert_eq!(page.refresh_key(), 1);
        assert_eq!(page.take_banner().as_deref(), Some("Account registered!"));
        assert_eq!(page.take_banner(), None);
    }

    #[test]
    fn failed_save_keeps_dialog_open() {
        let mut page = PageState::new();
        page.open_dialog();
        page.failed("Failed to update account");
        assert!(page.dialog_open());
        assert_eq!(page.refresh_key(), 0);
        assert_eq!(page.take_banner().as_deref(), Some("Failed to update account"));
    }

    #[test]
    fn deleting_the_selected_item_clears_selection() {
        let mut page = PageState::new();
        page.select(7);
        page.deleted(7);
        assert_eq!(page.selected(), None);
        assert_eq!(page.refresh_key(), 1);

        page.select(3);
        page.deleted(9);
        assert_eq!(page.selected(), Some(3));
    }
}
