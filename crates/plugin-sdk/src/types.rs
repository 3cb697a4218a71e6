//! Core types shared between plugins and the kernel.
//!
//! Menu items cross the plugin boundary as plain values; the kernel never
//! validates label or URL content.

use serde::{Deserialize, Serialize};

/// Default sort order for menu items that do not set one.
pub const DEFAULT_ORDER: i32 = 1000;

/// Permission that grants visibility of every menu item.
pub const ADMINISTER_SITE: &str = "administer site";

/// One navigable entry in an admin menu.
///
/// Two items are equal when their label and URL match; presentation fields
/// (icon, class, order, permission) do not take part in comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Human-readable label.
    pub label: String,
    /// Target URL.
    pub url: String,
    /// Machine name, derived from the label when not given.
    #[serde(default)]
    pub name: String,
    /// Icon identifier for the admin theme.
    #[serde(default)]
    pub icon_name: Option<String>,
    /// Extra CSS classes.
    #[serde(default)]
    pub classname: String,
    /// Sort order (lower = earlier).
    #[serde(default = "default_order")]
    pub order: i32,
    /// Permission required to see the item (None = always shown).
    #[serde(default)]
    pub permission: Option<String>,
}

fn default_order() -> i32 {
    DEFAULT_ORDER
}

impl MenuItem {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            name: slugify(&label),
            label,
            url: url.into(),
            icon_name: None,
            classname: String::new(),
            order: DEFAULT_ORDER,
            permission: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn icon(mut self, icon_name: impl Into<String>) -> Self {
        self.icon_name = Some(icon_name.into());
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Fill in the machine name from the label if it is empty.
    ///
    /// Deserialized items skip [`MenuItem::new`], so callers loading items
    /// from data should run this once.
    pub fn with_default_name(mut self) -> Self {
        if self.name.is_empty() {
            self.name = slugify(&self.label);
        }
        self
    }

    /// Whether the item is visible to the given user.
    pub fn is_shown(&self, user: &UserContext) -> bool {
        match &self.permission {
            None => true,
            Some(permission) => user.is_admin() || user.has_permission(permission),
        }
    }

    /// Whether a request path falls under this item's URL.
    pub fn is_active(&self, path: &str) -> bool {
        !self.url.is_empty() && path.starts_with(&self.url)
    }
}

impl PartialEq for MenuItem {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.url == other.url
    }
}

impl Eq for MenuItem {}

/// Lowercase the input and collapse runs of non-alphanumerics into `-`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// The user a menu is being built for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    /// Whether the user is authenticated.
    pub authenticated: bool,
    /// Permissions granted to the user.
    pub permissions: Vec<String>,
}

impl UserContext {
    /// Create context for anonymous user.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            permissions: Vec::new(),
        }
    }

    /// Create context for authenticated user.
    pub fn authenticated(permissions: Vec<String>) -> Self {
        Self {
            authenticated: true,
            permissions,
        }
    }

    /// Check if user has a specific permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Check if user is admin.
    pub fn is_admin(&self) -> bool {
        self.has_permission(ADMINISTER_SITE)
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_name_from_label() {
        let item = MenuItem::new("Site Settings", "/admin/settings/");
        assert_eq!(item.name, "site-settings");
        assert_eq!(item.order, DEFAULT_ORDER);
        assert!(item.permission.is_none());
    }

    #[test]
    fn explicit_name_overrides_slug() {
        let item = MenuItem::new("Site Settings", "/admin/settings/")
            .name("settings");
        assert_eq!(item.name, "settings");
        assert_eq!(item.clone().with_default_name().name, "settings");
        assert_eq!(item, MenuItem::new("Site Settings", "/admin/settings/"));
    }

    #[test]
    fn equality_ignores_presentation_fields() {
        let a = MenuItem::new("Blog", "/blog").order(1).icon("doc");
        let b = MenuItem::new("Blog", "/blog").order(900);
        assert_eq!(a, b);
        assert_ne!(a, MenuItem::new("Blog", "/news"));
        assert_ne!(a, MenuItem::new("News", "/blog"));
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Hello,  World! "), "hello-world");
        assert_eq!(slugify("item1"), "item1");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn deserialize_applies_defaults() {
        let json = r#"{"label": "Pages", "url": "/admin/pages/"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.order, DEFAULT_ORDER);
        assert!(item.name.is_empty());
        assert_eq!(item.with_default_name().name, "pages");
    }

    #[test]
    fn permission_controls_visibility() {
        let item = MenuItem::new("Users", "/admin/users/")
            .permission("administer users");

        let editor = UserContext::authenticated(vec!["administer users".to_string()]);
        let admin = UserContext::authenticated(vec![ADMINISTER_SITE.to_string()]);

        let anonymous = UserContext::anonymous();

        assert!(!item.is_shown(&anonymous));
        assert!(item.is_shown(&editor));
        assert!(item.is_shown(&admin));
        assert!(MenuItem::new("Help", "/help").is_shown(&anonymous));
    }

    #[test]
    fn active_by_url_prefix() {
        let item = MenuItem::new("Blog", "/admin/blog/");
        assert!(item.is_active("/admin/blog/"));
        assert!(item.is_active("/admin/blog/42/edit"));
        assert!(!item.is_active("/admin/"));
        assert!(!MenuItem::new("Empty", "").is_active("/admin/"));
    }
}
