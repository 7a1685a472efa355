use super::AppState;
use crate::types::{INITIAL_VISIBLE, VISIBLE_STEP};

/// How many canonically-ordered entries the display exposes. Independent
/// of leaderboard rank; the two are separate projections of the same
/// collection.
#[derive(Debug, Clone)]
pub struct VisibilityWindow {
    visible_count: usize,
}

impl Default for VisibilityWindow {
    fn default() -> Self {
        Self {
            visible_count: INITIAL_VISIBLE,
        }
    }
}

impl VisibilityWindow {
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Uncapped above the archive length; consumers clamp when slicing
    pub fn expand(&mut self) {
        self.visible_count += VISIBLE_STEP;
    }

    pub fn collapse(&mut self) {
        self.visible_count = INITIAL_VISIBLE;
    }

    pub fn is_expanded(&self) -> bool {
        self.visible_count > INITIAL_VISIBLE
    }
}

impl AppState {
    pub async fn expand_archive(&self) {
        self.window.write().await.expand();
    }

    pub async fn collapse_archive(&self) {
        self.window.write().await.collapse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_four_and_collapsed() {
        let window = VisibilityWindow::default();
        assert_eq!(window.visible_count(), 4);
        assert!(!window.is_expanded());
    }

    #[test]
    fn test_expand_adds_four_each_step() {
        let mut window = VisibilityWindow::default();

        window.expand();
        assert_eq!(window.visible_count(), 8);
        assert!(window.is_expanded());

        window.expand();
        assert_eq!(window.visible_count(), 12);
    }

    #[test]
    fn test_collapse_resets_from_any_value() {
        let mut window = VisibilityWindow::default();
        for _ in 0..5 {
            window.expand();
        }
        assert_eq!(window.visible_count(), 24);

        window.collapse();
        assert_eq!(window.visible_count(), 4);
        assert!(!window.is_expanded());
    }

    #[test]
    fn test_collapse_when_already_collapsed() {
        let mut window = VisibilityWindow::default();
        window.collapse();
        assert_eq!(window.visible_count(), 4);
    }
}
