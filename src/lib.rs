pub mod cli;
pub mod compiler;
pub mod error;
pub mod field;
pub mod logging;
pub mod page;
pub mod tui;
pub mod types;
pub mod validate;
pub mod wizard;

// Re-export key types and functions at the crate root
pub use compiler::{command_line, compile, CommandOutput};
pub use error::{ConfigurationConflictError, ValidationError};
pub use field::{Field, FieldId, FieldKind};
pub use logging::{get_log_file_path, init_logging};
pub use page::{Control, Page};
pub use tui::{init_terminal, restore_terminal, Renderer, Theme, TuiApp};
pub use types::{OutputFormat, ScanConfiguration, ScanTechnique};
pub use validate::validate;
pub use wizard::{Event, Status, Wizard};
