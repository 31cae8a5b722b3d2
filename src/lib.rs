/*!
 * vcfilters - Generate Visual Studio .filters files from C++ project files
 *
 * Reads a .vcxproj project file, groups its source files into virtual
 * folders derived from their relative paths, and writes the companion
 * .filters document Visual Studio uses to display them.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{Result, VcFiltersError};
pub use report::{ConversionReport, ReportFormat, Reporter};
pub use scanner::Scanner;
pub use types::{FileEntry, ItemKind, ProjectItems};
pub use utils::{filter_name, normalize_include};
pub use writer::FiltersWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
