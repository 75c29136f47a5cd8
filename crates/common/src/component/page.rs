use serde::{Deserialize, Serialize};

use super::{Component, ComponentMeta};
use crate::identity::User;

/// A wiki page, optionally nested under a parent page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    page_id: String,
    parent_page_id: Option<String>,
    content: String,
    #[serde(flatten)]
    meta: ComponentMeta,
}

impl Page {
    pub fn new(
        page_id: impl Into<String>,
        parent_page_id: Option<String>,
        owner: User,
        content: impl Into<String>,
    ) -> Self {
        Self {
            page_id: page_id.into(),
            parent_page_id,
            content: content.into(),
            meta: ComponentMeta::new(owner),
        }
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn parent_page_id(&self) -> Option<&str> {
        self.parent_page_id.as_deref()
    }
}

impl Component for Page {
    const KIND: &'static str = "page";

    fn id(&self) -> &str {
        &self.page_id
    }

    fn meta(&self) -> &ComponentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ComponentMeta {
        &mut self.meta
    }

    fn contents(&self) -> &str {
        &self.content
    }

    fn set_contents(&mut self, contents: String) {
        self.content = contents;
    }
}
