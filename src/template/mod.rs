mod seed;
mod store;
mod substitution;
mod types;

pub use seed::install_defaults;
pub use store::{MemoryTemplateStore, TemplateStore};
pub use substitution::substitute;
pub use types::{Template, TemplateError, TemplateResult};
