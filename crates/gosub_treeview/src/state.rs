//! Visual state of a single tree node and the markers that belong to it
use crate::config::{CssClasses, Glyphs};

/// Expand state of a node. A leaf has no children to show or hide, so its `collapsed` flag has
/// no visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualState {
    pub expandable: bool,
    pub collapsed: bool,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            expandable: false,
            collapsed: true,
        }
    }
}

impl VisualState {
    /// State after the expand control is activated. Leaves do not change.
    #[must_use]
    pub fn toggled(self) -> Self {
        if !self.expandable {
            return self;
        }

        Self {
            collapsed: !self.collapsed,
            ..self
        }
    }

    /// The complete class list of the node element for this state
    pub fn classes<'a>(&self, css: &'a CssClasses) -> Vec<&'a str> {
        let mut classes = vec![css.root.as_str()];
        if self.expandable {
            classes.push(css.expandable.as_str());
            classes.push(if self.collapsed {
                css.collapsed.as_str()
            } else {
                css.expanded.as_str()
            });
        }
        classes
    }

    /// Label of the expand control. Leaves have an empty control.
    pub fn glyph<'a>(&self, glyphs: &'a Glyphs) -> &'a str {
        match (self.expandable, self.collapsed) {
            (false, _) => "",
            (true, true) => glyphs.collapsed.as_str(),
            (true, false) => glyphs.expanded.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(false, true, &["b-node"], ""; "leaf")]
    #[test_case(false, false, &["b-node"], ""; "leaf ignores collapsed flag")]
    #[test_case(true, true, &["b-node", "b-node_expandable", "b-node_collapsed"], "+"; "collapsed")]
    #[test_case(true, false, &["b-node", "b-node_expandable", "b-node_expanded"], "\u{2212}"; "expanded")]
    fn markers(expandable: bool, collapsed: bool, classes: &[&str], glyph: &str) {
        let state = VisualState { expandable, collapsed };
        assert_eq!(state.classes(&CssClasses::default()), classes);
        assert_eq!(state.glyph(&Glyphs::default()), glyph);
    }

    #[test]
    fn new_state_is_collapsed_leaf() {
        let state = VisualState::default();
        assert!(state.collapsed);
        assert!(!state.expandable);
    }

    #[test]
    fn toggle_twice_restores() {
        let state = VisualState {
            expandable: true,
            collapsed: true,
        };
        assert!(!state.toggled().collapsed);
        assert_eq!(state.toggled().toggled(), state);
    }

    #[test]
    fn leaf_does_not_toggle() {
        let state = VisualState::default();
        assert_eq!(state.toggled(), state);
    }
}
