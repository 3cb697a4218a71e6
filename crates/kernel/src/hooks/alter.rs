//! Declarative menu constructors loaded from the manifest.

use ordine_sdk::{MenuConstructor, MenuItem, UserContext};

/// Removes items by machine name.
#[derive(Debug, Clone)]
pub struct RemoveItems {
    names: Vec<String>,
}

impl RemoveItems {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl MenuConstructor for RemoveItems {
    fn construct(&self, items: &mut Vec<MenuItem>, _user: &UserContext) {
        items.retain(|item| !self.names.contains(&item.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_named_items_only() {
        let mut items = vec![
            MenuItem::new("Pages", "/admin/pages/"),
            MenuItem::new("Reports", "/admin/reports/"),
            MenuItem::new("Usage Report", "/admin/usage/").name("usage"),
            MenuItem::new("Help", "/help/"),
        ];

        let alter = RemoveItems::new(vec![
            "reports".to_string(),
            "usage".to_string(),
            "missing".to_string(),
        ]);
        alter.construct(&mut items, &UserContext::anonymous());

        assert_eq!(
            items,
            vec![
                MenuItem::new("Pages", "/admin/pages/"),
                MenuItem::new("Help", "/help/"),
            ]
        );
    }
}
