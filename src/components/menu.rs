//! Mobile navigation menu
//!
//! Works without script: the toggle is a link carrying `?menu=open`, and the
//! close link points back at the bare path.

use serde::Serialize;

/// Query parameter value that opens the menu
pub const MENU_OPEN: &str = "open";

/// Open/closed state of the mobile menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    pub open: bool,
}

/// Template view of the mobile menu
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MobileMenuView {
    pub open: bool,
    /// Link target of the toggle button
    pub toggle_href: String,
    /// Link target that closes the menu
    pub close_href: String,
}

impl MobileMenu {
    /// State from the `menu` query parameter
    pub fn from_query(value: Option<&str>) -> Self {
        Self {
            open: value == Some(MENU_OPEN),
        }
    }

    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Where the toggle button points for a page at `path`
    pub fn toggle_href(&self, path: &str) -> String {
        if self.open {
            path.to_string()
        } else {
            format!("{}?menu={}", path, MENU_OPEN)
        }
    }

    pub fn view(&self, path: &str) -> MobileMenuView {
        MobileMenuView {
            open: self.open,
            toggle_href: self.toggle_href(path),
            close_href: path.to_string(),
        }
    }
}
