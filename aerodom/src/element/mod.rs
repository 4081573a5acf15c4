mod content;
mod node;

use std::collections::HashSet;

pub use content::Content;
pub use node::{generate_id, Element, TEXT_NODE};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element matching `predicate`, in document order.
pub fn find_all<'a, F>(root: &'a Element, predicate: F) -> Vec<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    let mut found = Vec::new();
    walk(root, &predicate, &mut found);
    found
}

fn walk<'a, F>(element: &'a Element, predicate: &F, found: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    if predicate(element) {
        found.push(element);
    }
    for child in element.child_elements() {
        walk(child, predicate, found);
    }
}

/// Collect every element with the given tag, in document order.
pub fn find_by_tag<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    find_all(root, |el| el.tag == tag)
}

/// Collect every element carrying `role="<role>"`, in document order.
pub fn find_by_role<'a>(root: &'a Element, role: &str) -> Vec<&'a Element> {
    find_all(root, |el| el.get_attr("role") == Some(role))
}

/// Return the first id that appears more than once in the tree.
///
/// Identifiers derived from labels can collide when two items share a label.
/// Nothing prevents that at build time; callers that care run this check.
pub fn find_duplicate_id(root: &Element) -> Option<String> {
    let mut seen = HashSet::new();
    find_all(root, |el| el.id.is_some())
        .into_iter()
        .filter_map(|el| el.id.as_deref())
        .find(|id| !seen.insert(*id))
        .map(str::to_string)
}
