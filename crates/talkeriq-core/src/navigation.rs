//! Route table and sidebar highlighting

use serde::Serialize;

/// Where the root path sends the browser
pub const HOME_PATH: &str = "/dashboard";

/// Sign-in page, rendered outside the main layout
pub const LOGIN_PATH: &str = "/login";

/// Icon shown next to a sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    /// Dashboard grid
    LayoutDashboard,
    /// Robot
    Bot,
    /// Database cylinder
    Database,
    /// Handset
    Phone,
    /// Handset with waves
    PhoneCall,
    /// Clock face
    Clock,
    /// Bar chart
    BarChart,
    /// Credit card
    CreditCard,
    /// Key
    Key,
    /// Webhook
    Webhook,
    /// Question mark
    HelpCircle,
}

impl NavIcon {
    /// Glyph used when rendering without an icon font
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::LayoutDashboard => "\u{25A6}",
            Self::Bot => "\u{1F916}",
            Self::Database => "\u{1F5C4}",
            Self::Phone => "\u{260E}",
            Self::PhoneCall => "\u{1F4DE}",
            Self::Clock => "\u{23F1}",
            Self::BarChart => "\u{1F4CA}",
            Self::CreditCard => "\u{1F4B3}",
            Self::Key => "\u{1F511}",
            Self::Webhook => "\u{1F517}",
            Self::HelpCircle => "\u{2753}",
        }
    }
}

/// One sidebar link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Target path
    pub path: &'static str,
    /// Link text
    pub label: &'static str,
    /// Leading icon
    pub icon: NavIcon,
}

const fn entry(path: &'static str, label: &'static str, icon: NavIcon) -> NavEntry {
    NavEntry { path, label, icon }
}

/// Main sidebar entries, top to bottom
pub const NAV_ENTRIES: [NavEntry; 10] = [
    entry("/dashboard", "Dashboard", NavIcon::LayoutDashboard),
    entry("/voice-agents", "Agents", NavIcon::Bot),
    entry("/knowledge-base", "Knowledge Base", NavIcon::Database),
    entry("/phone-numbers", "Phone Numbers", NavIcon::Phone),
    entry("/batch-call", "Batch Call", NavIcon::PhoneCall),
    entry("/call-history", "Call History", NavIcon::Clock),
    entry("/analytics", "Analytics", NavIcon::BarChart),
    entry("/billing", "Billing", NavIcon::CreditCard),
    entry("/api-keys", "API Keys", NavIcon::Key),
    entry("/webhooks", "Webhooks", NavIcon::Webhook),
];

/// Entry pinned to the bottom of the sidebar
pub const HELP_ENTRY: NavEntry = entry("/help-center", "Help Center", NavIcon::HelpCircle);

/// A sidebar entry with its highlight state for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// The entry
    #[serde(flatten)]
    pub entry: NavEntry,
    /// Whether the entry's path is the current path
    pub active: bool,
}

/// Exact-path highlighting; `/dashboard/x` does not light up `/dashboard`
#[must_use]
pub fn is_active(entry: &NavEntry, current_path: &str) -> bool {
    entry.path == current_path
}

/// Main sidebar entries marked for `current_path`
#[must_use]
pub fn nav_links(current_path: &str) -> Vec<NavLink> {
    NAV_ENTRIES
        .iter()
        .map(|entry| NavLink {
            entry: *entry,
            active: is_active(entry, current_path),
        })
        .collect()
}

/// Help entry marked for `current_path`
#[must_use]
pub fn help_link(current_path: &str) -> NavLink {
    NavLink {
        entry: HELP_ENTRY,
        active: is_active(&HELP_ENTRY, current_path),
    }
}

/// Sections that are routed but not built yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Placeholder {
    /// Bulk outbound calling
    BatchCall,
    /// Call logs
    CallHistory,
    /// Reporting
    Analytics,
    /// Plans and invoices
    Billing,
    /// Developer keys
    ApiKeys,
    /// Event callbacks
    Webhooks,
    /// Documentation
    HelpCenter,
}

impl Placeholder {
    /// Every placeholder section
    pub const ALL: [Self; 7] = [
        Self::BatchCall,
        Self::CallHistory,
        Self::Analytics,
        Self::Billing,
        Self::ApiKeys,
        Self::Webhooks,
        Self::HelpCenter,
    ];

    /// Route path
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::BatchCall => "/batch-call",
            Self::CallHistory => "/call-history",
            Self::Analytics => "/analytics",
            Self::Billing => "/billing",
            Self::ApiKeys => "/api-keys",
            Self::Webhooks => "/webhooks",
            Self::HelpCenter => "/help-center",
        }
    }

    /// Page heading
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BatchCall => "Batch Call",
            Self::CallHistory => "Call History",
            Self::Analytics => "Analytics",
            Self::Billing => "Billing",
            Self::ApiKeys => "API Keys",
            Self::Webhooks => "Webhooks",
            Self::HelpCenter => "Help Center",
        }
    }

    /// Coming-soon line under the heading
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::BatchCall => "Batch calling features coming soon...",
            Self::CallHistory => "Call history and logs coming soon...",
            Self::Analytics => "Analytics dashboard coming soon...",
            Self::Billing => "Billing management coming soon...",
            Self::ApiKeys => "API keys management coming soon...",
            Self::Webhooks => "Webhook configuration coming soon...",
            Self::HelpCenter => "Help and documentation coming soon...",
        }
    }
}

/// Page a path renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Page {
    /// Overview
    Dashboard,
    /// Phone number list
    PhoneNumbers,
    /// Voice agent list
    VoiceAgents,
    /// Knowledge base list
    KnowledgeBase,
    /// Sign-in form
    Login,
    /// Routed but unbuilt section
    Placeholder(Placeholder),
    /// Anything else
    NotFound,
}

/// Outcome of looking a path up in the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Send the browser elsewhere, replacing the history entry
    Redirect(&'static str),
    /// Render a page
    Render(Page),
}

/// Look `path` up in the route table
#[must_use]
pub fn resolve(path: &str) -> Resolution {
    let page = match path {
        "/" | "" => return Resolution::Redirect(HOME_PATH),
        "/dashboard" => Page::Dashboard,
        "/phone-numbers" => Page::PhoneNumbers,
        "/voice-agents" => Page::VoiceAgents,
        "/knowledge-base" => Page::KnowledgeBase,
        LOGIN_PATH => Page::Login,
        other => Placeholder::ALL
            .into_iter()
            .find(|placeholder| placeholder.path() == other)
            .map_or(Page::NotFound, Page::Placeholder),
    };

    Resolution::Render(page)
}
