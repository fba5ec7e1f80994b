pub use crate::diagnostics::{Diagnostics, Warning, WarningKind};
pub use crate::errors::{SourceContext, WeftError};
pub use crate::expand::{expand, expand_str, ExpandOutput, Options, DIRECTIVE_NAME};

pub mod args;
pub mod cli;
pub mod diagnostics;
pub mod errors;
pub mod expand;
pub mod registry;
pub mod syntax;
pub mod utilities;
