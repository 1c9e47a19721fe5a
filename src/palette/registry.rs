//! Action registry behind the command palette.
//!
//! Actions form a tree through parent pointers. The palette can be "rooted"
//! at an action while navigating nested groups; searching and breadcrumbs are
//! computed relative to that root.

use std::sync::RwLock;

use log::warn;

use super::action::Action;

#[derive(Default)]
struct PaletteState {
    // insertion order doubles as display order
    actions: Vec<Action>,
    root_id: Option<String>,
}

#[derive(Default)]
pub struct CommandPalette {
    state: RwLock<PaletteState>,
}

impl CommandPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action. Re-registering an id replaces the existing action
    /// in place; it never duplicates.
    pub fn register(&self, action: Action) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        match state.actions.iter_mut().find(|a| a.id == action.id) {
            Some(existing) => *existing = action,
            None => state.actions.push(action),
        }
    }

    pub fn register_all(&self, actions: Vec<Action>) {
        for action in actions {
            self.register(action);
        }
    }

    pub fn remove(&self, id: &str) -> Option<Action> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        let index = state.actions.iter().position(|a| a.id == id)?;
        Some(state.actions.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<Action> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.actions.iter().find(|a| a.id == id).cloned()
    }

    pub fn actions(&self) -> Vec<Action> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.actions.clone()
    }

    /// Navigate into (or out of) a nested action group.
    pub fn set_root(&self, id: Option<String>) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.root_id = id;
    }

    pub fn root(&self) -> Option<String> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.root_id.clone()
    }

    /// Case-insensitive substring search over name and subtitle, restricted
    /// to descendants of the current root (everything when unrooted).
    pub fn search(&self, query: &str) -> Vec<Action> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let query = query.to_lowercase();

        state
            .actions
            .iter()
            .filter(|a| state.root_id.is_none() || is_descendant(&state.actions, a, state.root_id.as_deref()))
            .filter(|a| {
                query.is_empty()
                    || a.name.to_lowercase().contains(&query)
                    || a.subtitle
                        .as_ref()
                        .is_some_and(|s| s.to_lowercase().contains(&query))
            })
            .cloned()
            .collect()
    }

    /// Ancestor chain of `id`, top-down, excluding the action itself.
    pub fn ancestors(&self, id: &str) -> Vec<Action> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        ancestors_of(&state.actions, id)
    }

    /// Breadcrumb names shown next to an action in search results, with the
    /// current root and everything above it elided.
    pub fn breadcrumb(&self, id: &str) -> Vec<String> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let chain = ancestors_of(&state.actions, id);
        visible_ancestors(&chain, state.root_id.as_deref())
            .iter()
            .map(|a| a.name.clone())
            .collect()
    }

    /// Invoke an action's handler. Returns false when the action is unknown
    /// or has no handler.
    pub async fn perform(&self, id: &str) -> bool {
        let handler = {
            let state = self.state.read().unwrap_or_else(|e| e.into_inner());
            match state.actions.iter().find(|a| a.id == id) {
                Some(action) => action.perform.clone(),
                None => {
                    warn!("palette action {} not registered", id);
                    return false;
                }
            }
        };
        match handler {
            Some(handler) => {
                handler().await;
                true
            }
            None => false,
        }
    }
}

fn ancestors_of(actions: &[Action], id: &str) -> Vec<Action> {
    let mut chain = vec![];
    let mut current = actions
        .iter()
        .find(|a| a.id == id)
        .and_then(|a| a.parent_id.clone());

    while let Some(parent_id) = current {
        let Some(parent) = actions.iter().find(|a| a.id == parent_id) else {
            break;
        };
        // guards against parent cycles
        if chain.iter().any(|a: &Action| a.id == parent.id) {
            break;
        }
        current = parent.parent_id.clone();
        chain.push(parent.clone());
    }

    chain.reverse();
    chain
}

fn is_descendant(actions: &[Action], action: &Action, root_id: Option<&str>) -> bool {
    let Some(root_id) = root_id else { return true };
    ancestors_of(actions, &action.id)
        .iter()
        .any(|a| a.id == root_id)
}

/// Slice an ancestor chain so it only shows path segments below the current
/// navigation root: when rooted at "Set theme", a "Dark" child reads as
/// "Dark", not "Set theme > Dark".
pub fn visible_ancestors<'a>(ancestors: &'a [Action], root_id: Option<&str>) -> &'a [Action] {
    let Some(root_id) = root_id else {
        return ancestors;
    };
    match ancestors.iter().position(|a| a.id == root_id) {
        Some(index) => &ancestors[index + 1..],
        None => ancestors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use futures::FutureExt;

    use crate::palette::ActionHandler;

    fn counting_handler(counter: Arc<AtomicUsize>) -> ActionHandler {
        Arc::new(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
            .boxed()
        })
    }

    #[test]
    fn reregistering_an_id_replaces_not_duplicates() {
        let palette = CommandPalette::new();
        palette.register(Action::new("refresh", "Refresh"));
        palette.register(Action::new("refresh", "Refresh tokens balances"));

        let actions = palette.actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].name, "Refresh tokens balances");
    }

    #[tokio::test]
    async fn perform_runs_the_most_recently_registered_handler() {
        let palette = CommandPalette::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        palette.register(Action::new("refresh", "Refresh").with_perform(counting_handler(first.clone())));
        palette.register(Action::new("refresh", "Refresh").with_perform(counting_handler(second.clone())));

        assert!(palette.perform("refresh").await);
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn perform_on_unknown_or_inert_action_is_false() {
        let palette = CommandPalette::new();
        palette.register(Action::new("group", "Group"));
        assert!(!palette.perform("missing").await);
        assert!(!palette.perform("group").await);
    }

    fn nested_palette() -> CommandPalette {
        let palette = CommandPalette::new();
        palette.register_all(vec![
            Action::new("settings", "Settings"),
            Action::new("theme", "Set theme").with_parent("settings"),
            Action::new("theme-dark", "Dark").with_parent("theme"),
        ]);
        palette
    }

    #[test]
    fn breadcrumb_elides_up_to_and_including_the_root() {
        let palette = nested_palette();

        assert_eq!(palette.breadcrumb("theme-dark"), vec!["Settings", "Set theme"]);

        // rooted at the middle level, only segments below it remain; the
        // leaf's breadcrumb is empty so it renders by name alone
        palette.set_root(Some("theme".into()));
        assert!(palette.breadcrumb("theme-dark").is_empty());

        palette.set_root(Some("settings".into()));
        assert_eq!(palette.breadcrumb("theme-dark"), vec!["Set theme"]);
    }

    #[test]
    fn search_is_scoped_to_the_current_root() {
        let palette = nested_palette();
        palette.register(Action::new("quit", "Quit"));

        let all: Vec<_> = palette.search("").iter().map(|a| a.id.clone()).collect();
        assert_eq!(all.len(), 4);

        palette.set_root(Some("settings".into()));
        let rooted: Vec<_> = palette.search("").iter().map(|a| a.id.clone()).collect();
        assert_eq!(rooted, vec!["theme", "theme-dark"]);

        let dark = palette.search("dar");
        assert_eq!(dark.len(), 1);
        assert_eq!(dark[0].id, "theme-dark");
    }

    #[test]
    fn search_matches_subtitles_case_insensitively() {
        let palette = CommandPalette::new();
        palette.register(Action::new("refresh", "Refresh").with_subtitle("Tokens balances"));
        assert_eq!(palette.search("TOKENS").len(), 1);
        assert!(palette.search("swap").is_empty());
    }
}
