//! Signal analyzers that run over scanner output.
//!
//! - [`nesting`]: maximum loop nesting depth from the line stream
//! - [`recursion`]: recursion shape of the first self-calling function
//! - [`containers`]: built-in container idioms present in the text

pub mod containers;
pub mod nesting;
pub mod recursion;

pub use containers::{constructs_list, detect_containers, ContainerKind};
pub use nesting::{max_loop_nesting, LineShape};
pub use recursion::{classify_recursion, RecursionKind, RecursionSignal};
