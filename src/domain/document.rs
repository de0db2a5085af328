//! Navigable document tree contract
//!
//! The loader only needs to find child elements by name and read their text;
//! any parsed tree exposing those two operations can feed a plan.

pub trait DocumentNode {
    /// Element name
    fn name(&self) -> &str;

    /// Text content of this element (may be empty)
    fn text(&self) -> &str;

    /// Direct children with the given element name, in document order
    fn children(&self, name: &str) -> Vec<&Self>;

    /// First direct child with the given element name
    fn child(&self, name: &str) -> Option<&Self> {
        self.children(name).into_iter().next()
    }
}
