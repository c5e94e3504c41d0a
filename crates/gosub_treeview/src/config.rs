use gosub_config::ConfigStore;

/// Class names carried by the elements of a tree node. External styling depends on these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssClasses {
    pub root: String,
    pub expandable: String,
    pub collapsed: String,
    pub expanded: String,
    pub title: String,
    pub title_text: String,
    pub expand_button: String,
    pub internal: String,
}

impl Default for CssClasses {
    fn default() -> Self {
        Self {
            root: "b-node".into(),
            expandable: "b-node_expandable".into(),
            collapsed: "b-node_collapsed".into(),
            expanded: "b-node_expanded".into(),
            title: "b-node__title".into(),
            title_text: "b-node__title-text".into(),
            expand_button: "b-node__expand-button".into(),
            internal: "b-node__internal".into(),
        }
    }
}

/// Labels of the expand control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyphs {
    pub collapsed: String,
    pub expanded: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            collapsed: "+".into(),
            expanded: "\u{2212}".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeViewConfig {
    pub css: CssClasses,
    pub glyphs: Glyphs,
    /// Tag name of every element created for a node
    pub tag: String,
    /// Log records whose parent is never reached
    pub report_orphans: bool,
    /// Refuse to render records that cannot all be placed in the tree
    pub strict: bool,
}

impl Default for TreeViewConfig {
    fn default() -> Self {
        Self {
            css: CssClasses::default(),
            glyphs: Glyphs::default(),
            tag: "div".into(),
            report_orphans: true,
            strict: false,
        }
    }
}

impl TreeViewConfig {
    /// Reads the `treeview.*` settings from the given store. Settings the store does not know
    /// keep their built-in value.
    pub fn from_store(store: &ConfigStore) -> Self {
        let defaults = Self::default();

        let string = |key: &str, default: String| store.get(key).map_or(default, |setting| setting.as_string());
        let boolean = |key: &str, default: bool| store.get(key).map_or(default, |setting| setting.to_bool());

        Self {
            css: CssClasses {
                root: string("treeview.css.root", defaults.css.root),
                expandable: string("treeview.css.expandable", defaults.css.expandable),
                collapsed: string("treeview.css.collapsed", defaults.css.collapsed),
                expanded: string("treeview.css.expanded", defaults.css.expanded),
                title: string("treeview.css.title", defaults.css.title),
                title_text: string("treeview.css.title_text", defaults.css.title_text),
                expand_button: string("treeview.css.expand_button", defaults.css.expand_button),
                internal: string("treeview.css.internal", defaults.css.internal),
            },
            glyphs: Glyphs {
                collapsed: string("treeview.glyph.collapsed", defaults.glyphs.collapsed),
                expanded: string("treeview.glyph.expanded", defaults.glyphs.expanded),
            },
            tag: string("treeview.element.tag", defaults.tag),
            report_orphans: boolean("treeview.hierarchy.report_orphans", defaults.report_orphans),
            strict: boolean("treeview.hierarchy.strict", defaults.strict),
        }
    }
}
