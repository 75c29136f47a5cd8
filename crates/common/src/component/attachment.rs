use serde::{Deserialize, Serialize};

use super::{Component, ComponentMeta};
use crate::identity::User;

/// A file stored in the wiki, keyed by its filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    filename: String,
    contents: String,
    #[serde(flatten)]
    meta: ComponentMeta,
}

impl Attachment {
    pub fn new(filename: impl Into<String>, contents: impl Into<String>, owner: User) -> Self {
        Self {
            filename: filename.into(),
            contents: contents.into(),
            meta: ComponentMeta::new(owner),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}

impl Component for Attachment {
    const KIND: &'static str = "attachment";

    fn id(&self) -> &str {
        &self.filename
    }

    fn meta(&self) -> &ComponentMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut ComponentMeta {
        &mut self.meta
    }

    fn contents(&self) -> &str {
        &self.contents
    }

    fn set_contents(&mut self, contents: String) {
        self.contents = contents;
    }
}
