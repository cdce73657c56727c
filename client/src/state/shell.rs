//! Shell chrome state: API health badge and navigation items.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use campus_api::types::ApiStatus;
use campus_api::{AdminApi, ApiError, Transport};

/// Result of the one health check issued when the shell mounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiHealth {
    #[default]
    Checking,
    Connected,
    Error,
}

impl ApiHealth {
    pub fn from_status(result: Result<ApiStatus, ApiError>) -> Self {
        match result {
            Ok(status) if status.is_success() => Self::Connected,
            Ok(status) => {
                log::debug!("api status reported {}", status.status);
                Self::Error
            }
            Err(e) => {
                log::debug!("api status check failed: {e}");
                Self::Error
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking API...",
            Self::Connected => "API Connected",
            Self::Error => "API Error",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Checking => "badge badge--pending",
            Self::Connected => "badge badge--ok",
            Self::Error => "badge badge--error",
        }
    }
}

pub async fn check_health<T: Transport>(api: &AdminApi<T>) -> ApiHealth {
    ApiHealth::from_status(api.status().await)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Dashboard", href: "/" },
    NavItem { label: "Staff", href: "/staff" },
    NavItem { label: "Students", href: "/students" },
    NavItem { label: "Clubs", href: "/clubs" },
    NavItem { label: "Clusters", href: "/clusters" },
];

/// Whether `href` is the active nav entry for `path`.
pub fn is_active(path: &str, href: &str) -> bool {
    let path = path.trim_end_matches('/');
    let href = href.trim_end_matches('/');
    if href.is_empty() {
        return path.is_empty();
    }
    path == href || path.starts_with(&format!("{href}/"))
}
