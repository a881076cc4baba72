use std::collections::HashMap;

/// Id of a screen that is not embedded under a parent element.
pub const STANDALONE_ID: &str = "vecterra";

/// Element ids assigned to one screen.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScreenIds {
    pub screen: String,
    pub group: String,
}

impl ScreenIds {
    fn for_screen(screen: String) -> Self {
        let group = format!("{screen}_groups");
        Self { screen, group }
    }

    /// Id of the `n`th pen layer (1-based).
    pub fn layer(&self, n: usize) -> String {
        format!("{}_group_{n}", self.screen)
    }

    pub fn background(&self) -> String {
        format!("{}_background", self.screen)
    }
}

/// Hands out screen ids, counting how many screens each parent element hosts.
///
/// Owned by the caller and passed to surface constructors.
#[derive(Debug, Default)]
pub struct ScreenRegistry {
    counters: HashMap<String, usize>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids for a standalone screen. Does not touch any counter.
    pub fn standalone() -> ScreenIds {
        ScreenIds::for_screen(STANDALONE_ID.to_owned())
    }

    /// Allocates ids for a new screen.
    ///
    /// `None` yields the standalone ids; `Some(parent)` yields `<parent>_svg_<n>` where `n`
    /// counts the screens embedded under `parent` so far, starting at 1.
    pub fn allocate(&mut self, parent: Option<&str>) -> ScreenIds {
        let Some(parent) = parent else {
            return Self::standalone();
        };
        let n = self.counters.entry(parent.to_owned()).or_insert(0);
        *n += 1;
        ScreenIds::for_screen(format!("{parent}_svg_{n}"))
    }

    /// Screens embedded under `parent` so far.
    pub fn count(&self, parent: &str) -> usize {
        self.counters.get(parent).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standalone_ids() {
        let ids = ScreenRegistry::new().allocate(None);
        assert_eq!(ids.screen, "vecterra");
        assert_eq!(ids.group, "vecterra_groups");
        assert_eq!(ids.layer(2), "vecterra_group_2");
        assert_eq!(ids.background(), "vecterra_background");
    }

    #[test]
    fn counters_are_per_parent() {
        let mut reg = ScreenRegistry::new();
        assert_eq!(reg.allocate(Some("canvas")).screen, "canvas_svg_1");
        assert_eq!(reg.allocate(Some("canvas")).screen, "canvas_svg_2");
        assert_eq!(reg.allocate(Some("other")).screen, "other_svg_1");
        assert_eq!(reg.allocate(None).screen, "vecterra");
        assert_eq!(reg.count("canvas"), 2);
        assert_eq!(reg.count("missing"), 0);
    }
}
