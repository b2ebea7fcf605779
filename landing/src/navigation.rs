//! Navigation link registry.
//!
//! The registry is static data. Visibility is a filter applied when the nav
//! renders; hidden entries stay in [`NAVIGATION_LINKS`] and keep their anchor.

/// In-page anchor targets. Each one matches a section `id` on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavLinkId {
    Home,
    About,
    Services,
    Contact,
}

impl NavLinkId {
    /// Every valid identifier, in page order.
    pub const ALL: [NavLinkId; 4] = [
        NavLinkId::Home,
        NavLinkId::About,
        NavLinkId::Services,
        NavLinkId::Contact,
    ];

    /// Section element id.
    pub const fn anchor(self) -> &'static str {
        match self {
            NavLinkId::Home => "home",
            NavLinkId::About => "about",
            NavLinkId::Services => "services",
            NavLinkId::Contact => "contact",
        }
    }

    /// Link target pointing at [`Self::anchor`].
    pub const fn href(self) -> &'static str {
        match self {
            NavLinkId::Home => "#home",
            NavLinkId::About => "#about",
            NavLinkId::Services => "#services",
            NavLinkId::Contact => "#contact",
        }
    }
}

/// One entry of the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: NavLinkId,
    pub name: &'static str,
    pub show: bool,
}

impl NavLink {
    pub const fn href(&self) -> &'static str {
        self.id.href()
    }
}

pub static NAVIGATION_LINKS: [NavLink; 4] = [
    // Brand link already points home
    NavLink {
        id: NavLinkId::Home,
        name: "Home",
        show: false,
    },
    NavLink {
        id: NavLinkId::About,
        name: "Acerca de Nosotros",
        show: true,
    },
    NavLink {
        id: NavLinkId::Services,
        name: "Servicios",
        show: true,
    },
    NavLink {
        id: NavLinkId::Contact,
        name: "Contactanos",
        show: true,
    },
];

/// Links with `show` set, in registry order.
pub fn visible_links() -> impl Iterator<Item = &'static NavLink> {
    NAVIGATION_LINKS.iter().filter(|link| link.show)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn visible_links_keep_registry_order() {
        let names: Vec<_> = visible_links().map(|link| link.name).collect();
        assert_eq!(names, vec!["Acerca de Nosotros", "Servicios", "Contactanos"]);
    }

    #[test]
    fn hidden_links_stay_in_registry() {
        assert_eq!(NAVIGATION_LINKS.len(), 4);
        let home = &NAVIGATION_LINKS[0];
        assert_eq!(home.id, NavLinkId::Home);
        assert!(!home.show);
        assert_eq!(home.href(), "#home");
    }

    #[test]
    fn registry_follows_identifier_order() {
        let ids: Vec<_> = NAVIGATION_LINKS.iter().map(|link| link.id).collect();
        assert_eq!(ids, NavLinkId::ALL.to_vec());
    }

    #[test]
    fn href_is_anchor_with_hash() {
        for id in NavLinkId::ALL {
            assert_eq!(id.href(), format!("#{}", id.anchor()));
        }
    }
}
