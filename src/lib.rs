//! cellwidth - Terminal column width of Unicode text
//!
//! Computes how many fixed-width cells a code point or string takes up on a
//! monospaced terminal, in the manner of POSIX `wcwidth`/`wcswidth`.
//!
//! # Single Code Point
//! ```
//! use cellwidth::{width, Width};
//!
//! assert_eq!(width(0x0041), Width::Narrow); // A
//! assert_eq!(width(0x4E00), Width::Wide); // 一
//! assert_eq!(width(0x0000), Width::Zero);
//! assert_eq!(width(0x0301), Width::NonPrintable); // combining acute accent
//! ```
//!
//! # Sequences and Strings
//! ```
//! use cellwidth::{display_width, sequence_width};
//!
//! assert_eq!(sequence_width([0x48, 0x69], None), Some(2));
//! assert_eq!(display_width("日本語"), Some(6));
//! // Any control character makes the whole string unmeasurable
//! assert_eq!(display_width("bell\x07"), None);
//! ```
//!
//! # Legacy CJK Terminals
//! ```
//! use cellwidth::{sequence_width_cjk, width, width_cjk, Width};
//!
//! // INVERTED EXCLAMATION MARK is East Asian Ambiguous
//! assert_eq!(width(0x00A1), Width::Narrow);
//! assert_eq!(width_cjk(0x00A1), Width::Wide);
//! assert_eq!(sequence_width_cjk([0x00A1, 0x0041]), Some(3));
//! ```
//!
//! # Configured Classifier
//! ```
//! use cellwidth::{AmbiguousTable, Classifier, WidthOptions};
//!
//! let options = WidthOptions::cjk().with_table(AmbiguousTable::Updated);
//! let classifier = Classifier::new(options);
//! assert_eq!(classifier.sequence_width([0x2189, 0x41], None), Some(3));
//! ```

mod classifier;
mod error;
mod table;
mod tables;
mod text;
mod types;

pub use classifier::{
    is_combining, is_wide, sequence_width, sequence_width_cjk, width, width_cjk, Classifier,
};
pub use error::TableError;
pub use table::{contains, IntervalTable};
pub use text::{char_width, char_width_cjk, display_width, display_width_cjk, truncate_to_width};
pub use types::{AmbiguousTable, CodePoint, Interval, Width, WidthOptions};
