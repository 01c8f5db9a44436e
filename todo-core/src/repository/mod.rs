//! Repository Layer
//!
//! Data access abstractions and the in-memory todo collection.

mod traits;
mod todo_collection;


pub use traits::Repository;
pub use todo_collection::{ItemCounts, TodoCollection};
