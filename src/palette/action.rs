use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

/// What runs when an action is invoked. Handlers capture their collaborators
/// by `Arc`/`Weak`, so an action registered once keeps delegating to whatever
/// its owner currently does.
pub type ActionHandler = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// A named, searchable palette entry, optionally nested under a parent and
/// optionally carrying a keyboard shortcut. The palette itself has no domain
/// knowledge; anything interesting lives in the handler.
#[derive(Clone)]
pub struct Action {
    pub id: String,
    pub name: String,
    pub subtitle: Option<String>,
    pub shortcut: Vec<String>,
    pub parent_id: Option<String>,
    pub perform: Option<ActionHandler>,
}

impl Action {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subtitle: None,
            shortcut: vec![],
            parent_id: None,
            perform: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_shortcut(mut self, keys: &[&str]) -> Self {
        self.shortcut = keys.iter().map(|k| k.to_string()).collect();
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_perform(mut self, handler: ActionHandler) -> Self {
        self.perform = Some(handler);
        self
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("subtitle", &self.subtitle)
            .field("shortcut", &self.shortcut)
            .field("parent_id", &self.parent_id)
            .field("perform", &self.perform.as_ref().map(|_| "<handler>"))
            .finish()
    }
}
