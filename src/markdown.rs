//! Convert a Slack thread into Markdown fit for a GitHub issue or pull
//! request comment.
//!
//! Messages are sorted, attributed, linked back to Slack, and quoted. Within
//! each message user mentions are resolved via a [UserResolver], labelled
//! links are rewritten, and code fences are moved onto their own lines.
//!
//! See [document::from_thread].

pub mod document;
pub mod error;
mod fence;
mod link;
pub mod mention;
mod order;
mod render;
pub mod thread;
mod ts;

pub use document::{from_thread, wrap_in_details};
pub use error::{ArchiveError, ResolutionError};
pub use mention::{mention_ids, UserResolver};
pub use thread::{Message, Thread, Ts};
