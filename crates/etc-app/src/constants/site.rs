//! Site name and navigation entries

/// One navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub name: &'static str,
    pub description: &'static str,
    /// Sidebar entries
    pub nav_items: &'static [NavItem],
    /// Account menu entries
    pub nav_menu_items: &'static [NavItem],
    /// External links
    pub links: &'static [NavItem],
}

impl SiteConfig {
    /// Sidebar entry for a path, if any
    pub fn nav_item_for(&self, href: &str) -> Option<&'static NavItem> {
        self.nav_items.iter().find(|item| item.href == href)
    }
}

pub const SITE: SiteConfig = SiteConfig {
    name: "ETC System",
    description: "Enables easy toll payment management, balance tracking, and real-time toll history for users, with secure, efficient administration tools.",
    nav_items: &[
        NavItem { label: "Home", href: "/" },
        NavItem { label: "Vehicles", href: "/vehicles" },
        NavItem { label: "Payment", href: "/payment" },
    ],
    nav_menu_items: &[
        NavItem { label: "Profile", href: "/profile" },
        NavItem { label: "Dashboard", href: "/dashboard" },
        NavItem { label: "Projects", href: "/projects" },
        NavItem { label: "Team", href: "/team" },
        NavItem { label: "Calendar", href: "/calendar" },
        NavItem { label: "Settings", href: "/settings" },
        NavItem { label: "Help & Feedback", href: "/help-feedback" },
        NavItem { label: "Logout", href: "/logout" },
    ],
    links: &[
        NavItem { label: "github", href: "https://github.com/nextui-org/nextui" },
        NavItem { label: "twitter", href: "https://twitter.com/getnextui" },
        NavItem { label: "docs", href: "https://nextui.org" },
        NavItem { label: "discord", href: "https://discord.gg/9b6yyZKmH4" },
        NavItem { label: "sponsor", href: "https://patreon.com/jrgarciadev" },
    ],
};
