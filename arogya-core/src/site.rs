//! Site routes and per-page metadata (title, description, canonical URL, robots).

use std::fmt;

use serde::Serialize;

pub const DEFAULT_TITLE: &str = "Arogya | Guided Exercise & Wellness Program for Adults";
pub const DEFAULT_DESCRIPTION: &str = "Join Arogya — a community-based wellness program with 3 live exercise sessions per week and lifestyle discussions on nutrition, sleep, and stress. Led by a Registered Dietitian.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", href: "/" },
    NavLink { label: "About", href: "/about" },
    NavLink { label: "Schedule", href: "/schedule" },
    NavLink { label: "Contact", href: "/contact" },
];

pub const LEGAL_LINKS: [NavLink; 2] = [
    NavLink { label: "Privacy Policy", href: "/privacy" },
    NavLink { label: "Terms of Service", href: "/terms" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Schedule,
    Contact,
    Join,
    Privacy,
    Terms,
    NotFound,
}

impl Page {
    pub const ROUTED: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Schedule,
        Page::Contact,
        Page::Join,
        Page::Privacy,
        Page::Terms,
    ];

    /// Resolve a URL path. Query, fragment and trailing slashes are ignored;
    /// anything unrecognized is `NotFound`.
    pub fn route(path: &str) -> Page {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        Page::ROUTED
            .into_iter()
            .find(|page| page.path() == Some(normalized))
            .unwrap_or(Page::NotFound)
    }

    pub fn path(&self) -> Option<&'static str> {
        match self {
            Page::Home => Some("/"),
            Page::About => Some("/about"),
            Page::Schedule => Some("/schedule"),
            Page::Contact => Some("/contact"),
            Page::Join => Some("/join"),
            Page::Privacy => Some("/privacy"),
            Page::Terms => Some("/terms"),
            Page::NotFound => None,
        }
    }

    fn title(&self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            Page::About => Some("About Arogya | Our Mission & Approach to Wellness"),
            Page::Schedule => Some("Session Schedule | Arogya Wellness Program"),
            Page::Contact => Some("Contact Arogya | Questions About Our Wellness Program"),
            Page::Join => Some("Join Arogya | Start Your Wellness Journey Today"),
            Page::Privacy => Some("Privacy Policy | Arogya Wellness"),
            Page::Terms => Some("Terms of Service | Arogya Wellness"),
            Page::NotFound => Some("Page Not Found | Arogya Wellness"),
        }
    }

    fn description(&self) -> Option<&'static str> {
        match self {
            Page::Home => None,
            Page::About => Some(
                "Learn about Arogya's holistic approach to wellness, our founding story, and the expert team behind our guided exercise and lifestyle program.",
            ),
            Page::Schedule => Some(
                "View the full Arogya session schedule. 3 live exercise sessions and 1 lifestyle discussion per week. Join from anywhere — all fitness levels welcome.",
            ),
            Page::Contact => Some(
                "Have questions about Arogya? Get in touch with our team. We typically respond within 24 hours.",
            ),
            Page::Join => Some(
                "Sign up for Arogya's guided exercise and wellness program. 3 live sessions weekly, lifestyle coaching, and a supportive community.",
            ),
            Page::Privacy => Some(
                "Learn how Arogya collects, uses, and protects your personal information. Read our complete privacy policy.",
            ),
            Page::Terms => Some(
                "Read the terms and conditions for using Arogya's wellness program and website services.",
            ),
            Page::NotFound => Some(
                "The page you're looking for doesn't exist. Return to Arogya's homepage to continue your wellness journey.",
            ),
        }
    }

    pub fn is_indexed(&self) -> bool {
        *self != Page::NotFound
    }

    /// Metadata for this page when served at `path` under `site_url`.
    pub fn meta(&self, site_url: &str, path: &str) -> PageMeta {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        PageMeta {
            title: self.title().unwrap_or(DEFAULT_TITLE).to_string(),
            description: self.description().unwrap_or(DEFAULT_DESCRIPTION).to_string(),
            canonical_url: format!("{}{}", site_url.trim_end_matches('/'), path),
            robots: if self.is_indexed() {
                "index, follow"
            } else {
                "noindex, nofollow"
            },
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Schedule => "Schedule",
            Page::Contact => "Contact",
            Page::Join => "Join",
            Page::Privacy => "Privacy",
            Page::Terms => "Terms",
            Page::NotFound => "Not Found",
        };
        write!(f, "{name}")
    }
}

/// What a navigation writes into the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Also used for og:url.
    pub canonical_url: String,
    pub robots: &'static str,
}
