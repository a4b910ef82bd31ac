//! Which menu entries light up for the current page.

/// Distance from the top past which the sidebar scrolls to its active item
pub const SIDEBAR_SCROLL_THRESHOLD_PX: f64 = 300.0;

/// Window width from which the vertical menu collapses instead of hiding
pub const COLLAPSE_BREAKPOINT_PX: f64 = 992.0;

/// Class applied to an element related to the active sidebar anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarTarget {
    /// `n`-th ancestor of the anchor (1 = parent)
    Ancestor(usize),
    /// previous sibling of the `n`-th ancestor
    PreviousOfAncestor(usize),
}

/// Classes added around the active sidebar anchor, metisMenu style.
pub const SIDEBAR_ACTIVE_CLASSES: [(SidebarTarget, &str); 6] = [
    (SidebarTarget::Ancestor(1), "mm-active"),
    (SidebarTarget::Ancestor(2), "mm-show"),
    (SidebarTarget::PreviousOfAncestor(2), "mm-active"),
    (SidebarTarget::Ancestor(3), "mm-active"),
    (SidebarTarget::Ancestor(4), "mm-show"),
    (SidebarTarget::Ancestor(5), "mm-active"),
];

/// Ancestors of the active top-nav anchor that get `active`
pub const TOPNAV_ACTIVE_DEPTH: usize = 6;

/// Location href without query string or fragment.
pub fn page_url(href: &str) -> &str {
    href.split(['?', '#']).next().unwrap_or(href)
}

pub fn is_current_page(anchor_href: &str, location_href: &str) -> bool {
    !anchor_href.is_empty() && anchor_href == page_url(location_href)
}

/// Scroll offset for the sidebar so the active item stays in view.
pub fn sidebar_scroll_target(active_offset_top: f64) -> Option<f64> {
    (active_offset_top > SIDEBAR_SCROLL_THRESHOLD_PX).then(|| active_offset_top - SIDEBAR_SCROLL_THRESHOLD_PX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseAction {
    Toggle,
    Remove,
}

/// What the vertical menu button does to `vertical-collpsed`.
pub fn collapse_action(window_width: f64, breakpoint: f64) -> CollapseAction {
    if window_width >= breakpoint {
        CollapseAction::Toggle
    } else {
        CollapseAction::Remove
    }
}
