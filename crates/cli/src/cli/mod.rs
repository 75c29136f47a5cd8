pub mod args;
pub mod op;
pub mod ops;

pub use ops::{Acl, Check, Init, Show, Version};
