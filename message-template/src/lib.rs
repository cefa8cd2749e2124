//! Message templates for structured logging.
//!
//! A template authored as `"User {UserId} logged in from {IpAddress}"`
//! is parsed once into a positional form, and two views are served
//! from that single parse: a rendered display string, and the ordered
//! name/value pairs that structured backends index log events by.
//!
//! ```
//! use message_template::{values, MessageTemplate};
//!
//! let template = MessageTemplate::new("User {UserId} logged in from {IpAddress}");
//! let args = values![42, "10.0.0.17"];
//!
//! assert_eq!(
//!     template.format(&args).unwrap(),
//!     "User 42 logged in from 10.0.0.17"
//! );
//!
//! let pairs = template.get_values(&args);
//! assert_eq!(pairs[0].0, "UserId");
//! assert_eq!(pairs.last().unwrap().0, "{OriginalFormat}");
//! ```
//!
//! Doubled braces are literals (`"{{x}}"` renders as `{x}`), holes may
//! carry alignment and format specifiers (`"{Count,5:D2}"`), and
//! malformed brace syntax degrades to literal text rather than
//! failing.

mod error;
mod positional;
mod scanner;
mod template;
mod value;

pub use error::{Result, TemplateError};
pub use template::{MessageTemplate, ORIGINAL_FORMAT_KEY};
pub use value::TemplateValue;
