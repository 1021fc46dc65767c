/* Header navigation table */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
  pub label: &'static str,
  pub href: &'static str,
}

impl MenuItem {
  /// In-page anchors render as plain `a` tags; everything else goes through
  /// the router.
  pub fn is_anchor(&self) -> bool {
    self.href.contains('#')
  }
}

pub fn menu_items() -> [MenuItem; 4] {
  [
    MenuItem { label: "How it works", href: "/#how-it-works" },
    MenuItem { label: "About", href: "/#about" },
    MenuItem { label: "Trades", href: "/#main-banner" },
    MenuItem { label: "Docs", href: "/documentation" },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn menu_keeps_its_order() {
    let labels: Vec<&str> = menu_items().iter().map(|m| m.label).collect();
    assert_eq!(labels, vec!["How it works", "About", "Trades", "Docs"]);
  }

  #[test]
  fn section_links_point_at_home_page_anchors() {
    let items = menu_items();
    assert_eq!(items[0].href, "/#how-it-works");
    assert_eq!(items[1].href, "/#about");
    assert_eq!(items[2].href, "/#main-banner");
    assert!(items[0].is_anchor());
  }

  #[test]
  fn docs_entry_is_a_router_path() {
    let docs = menu_items()[3];
    assert_eq!(docs.href, "/documentation");
    assert!(!docs.is_anchor());
  }
}
