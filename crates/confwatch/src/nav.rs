//! Navigation bar state: the mobile menu toggle, the responsive layout and
//! the fixed set of links.

use crate::config::DEFAULT_BREAKPOINT_PX;
use crate::route::RouteTable;

/// Where a link is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Brand,
    /// In the inline row and in the mobile sheet.
    Menu,
    /// Only in the inline row.
    InlineOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub placement: Placement,
}

impl NavLink {
    pub fn in_sheet(&self) -> bool {
        self.placement == Placement::Menu
    }

    pub fn inline(&self) -> bool {
        matches!(self.placement, Placement::Menu | Placement::InlineOnly)
    }
}

pub const BRAND: NavLink = NavLink {
    label: "ML Conference Tracker",
    href: "/papers",
    placement: Placement::Brand,
};

const LINKS: [NavLink; 3] = [
    BRAND,
    NavLink {
        label: "Conference Summaries",
        href: "/conference-summary?conference=ICLR&year=2025",
        placement: Placement::InlineOnly,
    },
    NavLink {
        label: "Our Motivation",
        href: "/motivation",
        placement: Placement::Menu,
    },
];

/// Every link the navigation bar renders, brand first.
pub fn links() -> &'static [NavLink] {
    &LINKS
}

/// Links pointing at paths the route table does not serve.
///
/// These are left as they are; the caller only reports them.
pub fn undeclared(table: &RouteTable) -> impl Iterator<Item = &'static NavLink> + '_ {
    links().iter().filter(move |link| !table.is_declared(link.href))
}

/// How the navigation bar lays out its links for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Links and theme toggle sit behind the menu trigger.
    Sheet,
    /// Links and theme toggle render in the bar itself.
    Inline,
}

impl Layout {
    pub fn for_width(width_px: f64, breakpoint_px: u32) -> Self {
        if width_px < f64::from(breakpoint_px) {
            Layout::Sheet
        } else {
            Layout::Inline
        }
    }

    pub fn from_wide_match(matches: bool) -> Self {
        if matches { Layout::Inline } else { Layout::Sheet }
    }

    /// Whether the slide-in panel is visible. `menu_open` has no visual
    /// effect on the inline layout.
    pub fn shows_sheet(&self, menu_open: bool) -> bool {
        *self == Layout::Sheet && menu_open
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::for_width(f64::from(DEFAULT_BREAKPOINT_PX), DEFAULT_BREAKPOINT_PX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// The mobile menu trigger was clicked.
    TriggerMenu,
    /// A navigation link was clicked.
    FollowLink,
    /// A theme toggle was clicked, either inline or inside the sheet.
    ToggleTheme { in_sheet: bool },
    /// The sheet was dismissed without picking anything.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOutcome {
    pub menu_open: bool,
    /// The shared theme must be flipped as part of this interaction.
    pub flip_theme: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn apply(&self, action: NavAction) -> NavOutcome {
        match action {
            NavAction::TriggerMenu => NavOutcome {
                menu_open: !self.menu_open,
                flip_theme: false,
            },
            NavAction::FollowLink | NavAction::Close => NavOutcome {
                menu_open: false,
                flip_theme: false,
            },
            NavAction::ToggleTheme { in_sheet: true } => NavOutcome {
                menu_open: false,
                flip_theme: true,
            },
            NavAction::ToggleTheme { in_sheet: false } => NavOutcome {
                menu_open: self.menu_open,
                flip_theme: true,
            },
        }
    }

    pub fn next(&self, action: NavAction) -> Self {
        Self {
            menu_open: self.apply(action).menu_open,
        }
    }
}
