//! Page-type catalog consumed by the add-page menu

use pagebar_core::PageType;
use serde::Serialize;

/// Menu entry describing one page type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageTypeInfo {
    #[serde(rename = "type")]
    pub page_type: PageType,
    /// Icon name in the host's icon set
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const CATALOG: &[PageTypeInfo] = &[
    PageTypeInfo {
        page_type: PageType::Form,
        icon: "newspaper",
        title: "Form",
        description: "Page to collect user input",
    },
    PageTypeInfo {
        page_type: PageType::Cover,
        icon: "book-open",
        title: "Cover",
        description: "Welcome users to your form",
    },
    PageTypeInfo {
        page_type: PageType::Ending,
        icon: "check-circle",
        title: "Ending",
        description: "Show a thank you page or redirect users",
    },
    PageTypeInfo {
        page_type: PageType::Review,
        icon: "eye",
        title: "Review",
        description: "Let users review their submission",
    },
    PageTypeInfo {
        page_type: PageType::Payment,
        icon: "banknotes",
        title: "Payment",
        description: "Collect payments with Stripe",
    },
    PageTypeInfo {
        page_type: PageType::Login,
        icon: "lock-closed",
        title: "Login",
        description: "Let users login with email, password or SSO",
    },
    PageTypeInfo {
        page_type: PageType::Scheduling,
        icon: "calendar-days",
        title: "Scheduling",
        description: "Book meetings on your calendar",
    },
];

/// All catalog entries, in menu order
pub fn catalog() -> &'static [PageTypeInfo] {
    CATALOG
}

/// Catalog entry for a page type
pub fn info(page_type: PageType) -> &'static PageTypeInfo {
    // CATALOG covers every variant in PageType::all() order
    let index = PageType::all()
        .iter()
        .position(|t| *t == page_type)
        .unwrap_or_default();
    &CATALOG[index]
}
