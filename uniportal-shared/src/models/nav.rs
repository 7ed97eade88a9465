//! Sidebar navigation tree and its persona filter.
//!
//! The tree is plain configuration data: visibility rules are expressed as
//! [`Visibility`] values interpreted by [`Visibility::allows`], so the whole
//! tree can be serialized or loaded from JSON.

use super::persona::{Citizenship, Cohort, Faculty, Persona, Status};
use super::route::Page;
use serde::{Deserialize, Serialize};

/// Visibility predicate attached to a navigation node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    RequiresFaculty(Faculty),
    RequiresCohort(Cohort),
    RequiresCitizenship(Citizenship),
    RequiresStatus(Status),
    /// Every nested rule must hold.
    AllOf(Vec<Visibility>),
    /// At least one nested rule must hold.
    AnyOf(Vec<Visibility>),
}

impl Visibility {
    /// Evaluates the rule against `persona`.
    #[must_use]
    pub fn allows(&self, persona: &Persona) -> bool {
        match self {
            Self::RequiresFaculty(faculty) => persona.faculty == *faculty,
            Self::RequiresCohort(cohort) => persona.cohort == *cohort,
            Self::RequiresCitizenship(citizenship) => persona.citizenship == *citizenship,
            Self::RequiresStatus(status) => persona.status == *status,
            Self::AllOf(rules) => rules.iter().all(|rule| rule.allows(persona)),
            Self::AnyOf(rules) => rules.iter().any(|rule| rule.allows(persona)),
        }
    }
}

/// Icon hint for top-level entries. Rendering maps it to a concrete icon set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Grid,
    Bell,
    Calendar,
    File,
    LifeBuoy,
    Map,
}

/// Leaf or group payload. A node is exactly one of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    Path(String),
    Children(Vec<NavItem>),
}

/// One entry of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<NavIcon>,
    #[serde(flatten)]
    pub target: NavTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_if: Option<Visibility>,
}

impl NavItem {
    /// Builds a leaf pointing at `path`.
    pub fn link(id: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            target: NavTarget::Path(path.into()),
            visible_if: None,
        }
    }

    /// Builds a leaf pointing at a registered page.
    pub fn page(id: impl Into<String>, label: impl Into<String>, page: Page) -> Self {
        Self::link(id, label, page.path())
    }

    /// Builds a group.
    pub fn group(id: impl Into<String>, label: impl Into<String>, children: Vec<NavItem>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            target: NavTarget::Children(children),
            visible_if: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: NavIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn visible_if(mut self, rule: Visibility) -> Self {
        self.visible_if = Some(rule);
        self
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match &self.target {
            NavTarget::Path(path) => Some(path),
            NavTarget::Children(_) => None,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[NavItem] {
        match &self.target {
            NavTarget::Path(_) => &[],
            NavTarget::Children(children) => children,
        }
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self.target, NavTarget::Children(_))
    }

    /// Whether this node (ignoring ancestors) is visible to `persona`.
    #[must_use]
    pub fn is_visible_to(&self, persona: &Persona) -> bool {
        self.visible_if
            .as_ref()
            .is_none_or(|rule| rule.allows(persona))
    }
}

/// Drops every node whose rule rejects `persona`, together with its subtree.
/// Groups left without children are kept.
#[must_use]
pub fn filter_nav(items: &[NavItem], persona: &Persona) -> Vec<NavItem> {
    items
        .iter()
        .filter(|item| item.is_visible_to(persona))
        .map(|item| {
            let target = match &item.target {
                NavTarget::Path(path) => NavTarget::Path(path.clone()),
                NavTarget::Children(children) => NavTarget::Children(filter_nav(children, persona)),
            };
            NavItem {
                target,
                ..item.clone()
            }
        })
        .collect()
}

/// The portal sidebar.
#[must_use]
pub fn portal_navigation() -> Vec<NavItem> {
    vec![
        NavItem::page("dashboard", "Dashboard", Page::Dashboard).with_icon(NavIcon::Grid),
        NavItem::page("inbox", "Inbox & Notices", Page::Inbox).with_icon(NavIcon::Bell),
        NavItem::page("calendar", "Calendar & Planner", Page::Calendar)
            .with_icon(NavIcon::Calendar),
        NavItem::group(
            "my-study",
            "My Study",
            vec![
                NavItem::page("progress", "Progress & Results", Page::Progress),
                NavItem::page("timetable", "My Timetable", Page::Timetable),
                NavItem::link("enrollment", "Enrolment", "/topic/enrollment"),
            ],
        ),
        NavItem::page("admin", "Admin & Finance", Page::Admin).with_icon(NavIcon::File),
        NavItem::group(
            "services",
            "Services & Life",
            vec![
                NavItem::page("housing", "Accommodation", Page::Housing),
                NavItem::page("life", "Student Life", Page::Life),
                NavItem::page("it", "IT Services", Page::It),
                NavItem::page("visa", "Visa Compliance", Page::Visa)
                    .visible_if(Visibility::RequiresCitizenship(Citizenship::International)),
            ],
        ),
        NavItem::page("support", "Help & Support", Page::Help).with_icon(NavIcon::LifeBuoy),
        NavItem::page("map", "Campus Map", Page::Map).with_icon(NavIcon::Map),
        NavItem::page("documents", "My Documents", Page::Documents).with_icon(NavIcon::File),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[NavItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    fn collect_ids<'a>(items: &'a [NavItem], out: &mut Vec<&'a str>) {
        for item in items {
            out.push(item.id.as_str());
            collect_ids(item.children(), out);
        }
    }

    fn find<'a>(items: &'a [NavItem], id: &str) -> Option<&'a NavItem> {
        items.iter().find_map(|item| {
            if item.id == id {
                Some(item)
            } else {
                find(item.children(), id)
            }
        })
    }

    /// Tree with nested rules at several depths.
    fn sample_tree() -> Vec<NavItem> {
        vec![
            NavItem::link("home", "Home", "/"),
            NavItem::group(
                "intl",
                "International",
                vec![
                    NavItem::link("visa", "Visa", "/visa"),
                    NavItem::link("arts-only", "Arts", "/arts")
                        .visible_if(Visibility::RequiresFaculty(Faculty::Arts)),
                ],
            )
            .visible_if(Visibility::RequiresCitizenship(Citizenship::International)),
            NavItem::group(
                "research",
                "Research",
                vec![
                    NavItem::link("thesis", "Thesis", "/thesis").visible_if(Visibility::AllOf(vec![
                        Visibility::RequiresCohort(Cohort::Postgrad),
                        Visibility::RequiresStatus(Status::Returning),
                    ])),
                    NavItem::link("labs", "Labs", "/labs").visible_if(Visibility::AnyOf(vec![
                        Visibility::RequiresFaculty(Faculty::Science),
                        Visibility::RequiresCohort(Cohort::Postgrad),
                    ])),
                ],
            ),
        ]
    }

    /// Walks the unfiltered tree alongside the filtered one and checks that
    /// nothing hidden, or below something hidden, survived.
    fn assert_filter_sound(original: &[NavItem], persona: &Persona) {
        let filtered = filter_nav(original, persona);
        let mut kept = Vec::new();
        collect_ids(&filtered, &mut kept);

        fn check(items: &[NavItem], persona: &Persona, ancestor_hidden: bool, kept: &[&str]) {
            for item in items {
                let hidden = ancestor_hidden || !item.is_visible_to(persona);
                assert_eq!(
                    kept.contains(&item.id.as_str()),
                    !hidden,
                    "node `{}` for {persona:?}",
                    item.id
                );
                check(item.children(), persona, hidden, kept);
            }
        }
        check(original, persona, false, &kept);
    }

    #[test]
    fn test_filter_soundness_for_every_persona() {
        let trees = [portal_navigation(), sample_tree()];
        for persona in Persona::all() {
            for tree in &trees {
                assert_filter_sound(tree, &persona);
            }
        }
    }

    #[test]
    fn test_visa_only_for_international() {
        let nav = portal_navigation();
        let domestic = filter_nav(&nav, &Persona::default());
        assert!(find(&domestic, "visa").is_none());
        assert!(find(&domestic, "services").is_some());

        let international = Persona {
            citizenship: Citizenship::International,
            ..Persona::default()
        };
        let filtered = filter_nav(&nav, &international);
        assert_eq!(find(&filtered, "visa").and_then(NavItem::path), Some("/visa"));
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let nav = portal_navigation();
        let before = nav.clone();
        let _ = filter_nav(&nav, &Persona::default());
        assert_eq!(nav, before);
    }

    #[test]
    fn test_hidden_group_drops_subtree() {
        let tree = sample_tree();
        let filtered = filter_nav(&tree, &Persona::default());
        assert_eq!(ids(&filtered), vec!["home", "research"]);
        assert!(find(&filtered, "visa").is_none());
    }

    #[test]
    fn test_empty_group_is_kept() {
        let tree = vec![NavItem::group(
            "empty",
            "Empty",
            vec![NavItem::link("x", "X", "/x")
                .visible_if(Visibility::RequiresFaculty(Faculty::Arts))],
        )];
        let filtered = filter_nav(&tree, &Persona::default());
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].children().is_empty());
        assert!(filtered[0].is_group());
    }

    #[test]
    fn test_composite_rules() {
        let returning_postgrad = Persona {
            cohort: Cohort::Postgrad,
            status: Status::Returning,
            faculty: Faculty::Arts,
            ..Persona::default()
        };
        let research = filter_nav(&sample_tree(), &returning_postgrad);
        let group = find(&research, "research").unwrap();
        assert_eq!(ids(group.children()), vec!["thesis", "labs"]);

        let arts_undergrad = Persona {
            faculty: Faculty::Arts,
            ..Persona::default()
        };
        let research = filter_nav(&sample_tree(), &arts_undergrad);
        assert!(find(&research, "research").unwrap().children().is_empty());
    }

    #[test]
    fn test_every_node_is_leaf_or_group() {
        fn walk(items: &[NavItem]) {
            for item in items {
                assert_ne!(item.path().is_some(), item.is_group(), "node `{}`", item.id);
                walk(item.children());
            }
        }
        walk(&portal_navigation());
    }

    #[test]
    fn test_tree_loads_from_json() {
        let json = r#"[
            { "id": "home", "label": "Home", "icon": "grid", "path": "/" },
            { "id": "svc", "label": "Services", "children": [
                { "id": "visa", "label": "Visa", "path": "/visa",
                  "visible_if": { "requires_citizenship": "international" } }
            ] }
        ]"#;
        let tree: Vec<NavItem> = serde_json::from_str(json).unwrap();
        assert_eq!(tree[0].icon, Some(NavIcon::Grid));
        assert_eq!(tree[0].path(), Some("/"));
        assert_eq!(
            tree[1].children()[0].visible_if,
            Some(Visibility::RequiresCitizenship(Citizenship::International))
        );
        let filtered = filter_nav(&tree, &Persona::default());
        assert!(filtered[1].children().is_empty());
    }

    #[test]
    fn test_tree_serializes_flat() {
        let value = serde_json::to_value(NavItem::link("a", "A", "/a")).unwrap();
        assert_eq!(value, serde_json::json!({ "id": "a", "label": "A", "path": "/a" }));
    }
}
