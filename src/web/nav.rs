//! Header navigation shared by every page.

/// One entry of the header navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Named routes shown in the header, in display order.
const NAV_LINKS: &[(&str, &str)] = &[("/", "New Link"), ("/stats", "Statistics")];

/// Builds the header entries, marking the one matching `current_path`.
pub fn nav_items(current_path: &str) -> Vec<NavItem> {
    NAV_LINKS
        .iter()
        .map(|&(href, label)| NavItem {
            href,
            label,
            active: href == current_path,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_item_is_active() {
        let items = nav_items("/stats");
        assert_eq!(items.len(), 2);
        assert!(!items[0].active);
        assert!(items[1].active);
        assert_eq!(items[1].label, "Statistics");
    }

    #[test]
    fn test_unknown_path_highlights_nothing() {
        assert!(nav_items("/elsewhere").iter().all(|item| !item.active));
    }
}
