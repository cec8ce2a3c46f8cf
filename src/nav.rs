#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { name: "Home", path: "/" },
    NavItem { name: "About", path: "/about" },
    NavItem { name: "Projects", path: "/projects" },
    NavItem { name: "Experience", path: "/experience" },
    NavItem { name: "Skills", path: "/skills" },
    NavItem { name: "Contact", path: "/contact" },
];

/// Home only matches exactly, every other link also matches its subpaths.
pub fn is_active(item_path: &str, pathname: &str) -> bool {
    if item_path == "/" {
        pathname == "/"
    } else {
        pathname.starts_with(item_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_only_exact() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/about"));
        assert!(!is_active("/", ""));
    }

    #[test]
    fn test_prefix_match() {
        assert!(is_active("/projects", "/projects"));
        assert!(is_active("/projects", "/projects/"));
        assert!(!is_active("/projects", "/"));
        assert!(!is_active("/contact", "/about"));
    }

    #[test]
    fn test_exactly_one_item_active_per_page() {
        for item in NAV_ITEMS {
            let active = NAV_ITEMS
                .into_iter()
                .filter(|other| is_active(other.path, item.path))
                .collect::<Vec<_>>();
            assert_eq!(active, vec![item]);
        }
    }
}
