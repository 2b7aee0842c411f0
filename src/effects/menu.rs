pub const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";
pub const NAV_PANEL_SELECTOR: &str = ".nav-links";
pub const ICON_BAR_SELECTOR: &str = "span";
pub const OPEN_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub property: &'static str,
    pub value: &'static str,
}

const CLOSED_ICON: [BarStyle; 3] = [
    BarStyle {
        property: "transform",
        value: "rotate(0) translate(0, 0)",
    },
    BarStyle {
        property: "opacity",
        value: "1",
    },
    BarStyle {
        property: "transform",
        value: "rotate(0) translate(0, 0)",
    },
];

const OPEN_ICON: [BarStyle; 3] = [
    BarStyle {
        property: "transform",
        value: "rotate(45deg) translate(5px, 5px)",
    },
    BarStyle {
        property: "opacity",
        value: "0",
    },
    BarStyle {
        property: "transform",
        value: "rotate(-45deg) translate(7px, -6px)",
    },
];

/// Open/closed state of the hamburger menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn from_class_present(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu when it is open. Returns whether anything changed.
    pub fn close(&mut self) -> bool {
        if self.open {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// A document click closes the menu unless it landed on the panel or the
    /// toggle button.
    pub fn should_close_on_click(&self, inside_panel: bool, inside_toggle: bool) -> bool {
        self.open && !inside_panel && !inside_toggle
    }

    pub fn icon(&self) -> [BarStyle; 3] {
        if self.open {
            OPEN_ICON
        } else {
            CLOSED_ICON
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_number_of_toggles_restores_initial_state() {
        let mut menu = MenuState::default();
        let initial_icon = menu.icon();

        for _ in 0..4 {
            menu.toggle();
        }

        assert!(!menu.is_open());
        assert_eq!(menu.icon(), initial_icon);
    }

    #[test]
    fn open_icon_forms_an_x() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());

        let icon = menu.icon();
        assert_eq!(icon[0].value, "rotate(45deg) translate(5px, 5px)");
        assert_eq!(icon[1], BarStyle { property: "opacity", value: "0" });
        assert_eq!(icon[2].value, "rotate(-45deg) translate(7px, -6px)");
    }

    #[test]
    fn outside_click_only_closes_an_open_menu() {
        let closed = MenuState::default();
        assert!(!closed.should_close_on_click(false, false));

        let open = MenuState::from_class_present(true);
        assert!(open.should_close_on_click(false, false));
        assert!(!open.should_close_on_click(true, false));
        assert!(!open.should_close_on_click(false, true));
    }

    #[test]
    fn close_reports_whether_state_changed() {
        let mut menu = MenuState::from_class_present(true);

        assert!(menu.close());
        assert!(!menu.close());
        assert_eq!(menu.icon(), CLOSED_ICON);
    }
}
