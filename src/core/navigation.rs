//! In-page navigation model
//!
//! Sections expose stable anchor ids; the header, the footer and the mobile
//! bottom bar only ever refer to sections through [`Anchor`].

use derive_more::Display;

/// Scroll offset (px) past which the header switches to its solid style
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Sections that navigation can target.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    #[default]
    #[display("inicio")]
    Inicio,
    #[display("productos")]
    Productos,
    #[display("testimonios")]
    Testimonios,
    #[display("contacto")]
    Contacto,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [
        Anchor::Inicio,
        Anchor::Productos,
        Anchor::Testimonios,
        Anchor::Contacto,
    ];

    /// DOM id of the target section
    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Inicio => "inicio",
            Anchor::Productos => "productos",
            Anchor::Testimonios => "testimonios",
            Anchor::Contacto => "contacto",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Anchor::Inicio => "#inicio",
            Anchor::Productos => "#productos",
            Anchor::Testimonios => "#testimonios",
            Anchor::Contacto => "#contacto",
        }
    }

    /// Resolve `#id` (or a bare `id`) back to an anchor
    #[cfg(test)]
    pub fn from_href(href: &str) -> Option<Self> {
        let id = href.strip_prefix('#').unwrap_or(href);
        Self::ALL.into_iter().find(|a| a.id() == id)
    }
}

/// A labelled link to an in-page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: Anchor,
}

impl NavLink {
    pub const fn new(label: &'static str, anchor: Anchor) -> Self {
        Self { label, anchor }
    }
}

pub const HEADER_LINKS: &[NavLink] = &[
    NavLink::new("Inicio", Anchor::Inicio),
    NavLink::new("Productos", Anchor::Productos),
    NavLink::new("Testimonios", Anchor::Testimonios),
    NavLink::new("Contacto", Anchor::Contacto),
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink::new("Inicio", Anchor::Inicio),
    NavLink::new("Productos", Anchor::Productos),
    NavLink::new("Testimonios", Anchor::Testimonios),
];

/// Whether the header should use its scrolled style at `scroll_y`
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

/// Coalesces scroll events so at most one evaluation runs per frame.
///
/// ```
/// # use marquesa_express::core::navigation::FrameThrottle;
/// let mut throttle = FrameThrottle::default();
/// assert!(throttle.try_schedule());
/// assert!(!throttle.try_schedule());
/// throttle.frame_done();
/// assert!(throttle.try_schedule());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameThrottle {
    ticking: bool,
}

impl FrameThrottle {
    /// Returns true if the caller should request a frame now
    pub fn try_schedule(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Mark the scheduled frame as processed
    pub fn frame_done(&mut self) {
        self.ticking = false;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}

/// Mobile menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs that drive the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger button pressed
    Toggle,
    /// A navigation link was followed (after its scroll was issued)
    LinkActivated,
    /// The dimmed overlay behind the menu was clicked
    OverlayClicked,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, _) => MenuState::Closed,
            (MenuState::Closed, _) => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Body scrolling is suppressed while the menu is open
    pub fn locks_scroll(self) -> bool {
        self.is_open()
    }

    /// Target opacity of the backdrop overlay
    pub fn overlay_opacity(self) -> f64 {
        if self.is_open() { 1.0 } else { 0.0 }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.is_open() {
            "Cerrar menú"
        } else {
            "Abrir menú"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_ids_and_hrefs() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.href(), format!("#{}", anchor.id()));
            assert_eq!(anchor.to_string(), anchor.id());
        }
    }

    #[test]
    fn test_anchor_from_href() {
        assert_eq!(Anchor::from_href("#productos"), Some(Anchor::Productos));
        assert_eq!(Anchor::from_href("contacto"), Some(Anchor::Contacto));
        assert_eq!(Anchor::from_href("#precios"), None);
        assert_eq!(Anchor::from_href(""), None);
    }

    #[test]
    fn test_nav_tables() {
        let header: Vec<_> = HEADER_LINKS.iter().map(|l| l.anchor).collect();
        assert_eq!(header, Anchor::ALL);
        let footer: Vec<_> = FOOTER_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(footer, ["Inicio", "Productos", "Testimonios"]);
    }

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn test_frame_throttle_coalesces() {
        let mut throttle = FrameThrottle::default();
        let scheduled = (0..10).filter(|_| throttle.try_schedule()).count();
        assert_eq!(scheduled, 1);
        assert!(throttle.is_pending());
        throttle.frame_done();
        assert!(!throttle.is_pending());
        assert!(throttle.try_schedule());
    }

    #[test]
    fn test_menu_toggle_scenario() {
        let closed = MenuState::default();
        assert_eq!(closed, MenuState::Closed);
        assert_eq!(closed.overlay_opacity(), 0.0);
        assert!(!closed.locks_scroll());

        let open = closed.next(MenuEvent::Toggle);
        assert!(open.is_open());
        assert_eq!(open.overlay_opacity(), 1.0);
        assert!(open.locks_scroll());

        let closed_again = open.next(MenuEvent::Toggle);
        assert_eq!(closed_again, MenuState::Closed);
        assert!(!closed_again.locks_scroll());
    }

    #[test]
    fn test_menu_closes_on_link_and_overlay() {
        assert_eq!(MenuState::Open.next(MenuEvent::LinkActivated), MenuState::Closed);
        assert_eq!(MenuState::Open.next(MenuEvent::OverlayClicked), MenuState::Closed);
        assert_eq!(MenuState::Closed.next(MenuEvent::LinkActivated), MenuState::Closed);
        assert_eq!(MenuState::Closed.next(MenuEvent::OverlayClicked), MenuState::Closed);
    }

    #[test]
    fn test_menu_rapid_toggling_ends_consistent() {
        let state = (0..7).fold(MenuState::Closed, |s, _| s.next(MenuEvent::Toggle));
        assert!(state.is_open());
        assert_eq!(state.next(MenuEvent::Toggle), MenuState::Closed);
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(MenuState::Closed.toggle_label(), "Abrir menú");
        assert_eq!(MenuState::Open.toggle_label(), "Cerrar menú");
    }
}
