//! Terminal front ends
//!
//! - **`OutputWriter`** - Status messages with severity levels, used by the
//!   one-shot commands
//! - **`ratatui_adapter`** - The interactive image browser
//!
//! ```
//! use imgseek::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new(false);
//! output.success("Copied URL");
//! output.info("Page 1/5");
//! ```

pub mod error;
pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::ImageBrowser;
