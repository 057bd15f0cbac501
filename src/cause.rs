//! Walking the causal chain of a failure.
//!
//! A failure arrives as an [`anyhow::Error`] wrapping however many layers of
//! context the startup path added. Analyzers rarely care about the outermost
//! message; they look for a concrete cause type somewhere in the chain.

use std::error::Error;

/// Finds the first cause of type `T` in the failure's chain, searching
/// outermost-first.
pub fn find_cause<T>(failure: &anyhow::Error) -> Option<&T>
where
    T: Error + 'static,
{
    failure.chain().find_map(|err| err.downcast_ref::<T>())
}

/// Renders the `Display` form of `err` and every source beneath it.
pub fn render_chain(err: &(dyn Error + 'static)) -> Vec<String> {
    let mut rendered = Vec::new();
    let mut current: Option<&(dyn Error + 'static)> = Some(err);
    while let Some(err) = current {
        rendered.push(err.to_string());
        current = err.source();
    }
    rendered
}
