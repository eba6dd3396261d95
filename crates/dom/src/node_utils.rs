use std::rc::Rc;

use markup5ever_rcdom::{Handle, NodeData};

/// True for an element node whose tag name matches `name` (ASCII case folded).
pub fn is_element_named(node: &Handle, name: &str) -> bool {
    match &node.data {
        NodeData::Element { name: qual, .. } => qual.local.eq_ignore_ascii_case(name),
        _ => false,
    }
}

pub fn get_attr(node: &Handle, attr: &str) -> Option<String> {
    let NodeData::Element { attrs, .. } = &node.data else {
        return None;
    };
    attrs
        .borrow()
        .iter()
        .find(|a| a.name.local.eq_ignore_ascii_case(attr))
        .map(|a| a.value.to_string())
}

pub fn has_attr(node: &Handle, attr: &str) -> bool {
    let NodeData::Element { attrs, .. } = &node.data else {
        return false;
    };
    attrs
        .borrow()
        .iter()
        .any(|a| a.name.local.eq_ignore_ascii_case(attr))
}

/// Set `attr` to `value`, replacing an existing attribute in place so the
/// element's attribute order is preserved.
pub fn set_attr(node: &Handle, attr: &str, value: &str) {
    let NodeData::Element { attrs, .. } = &node.data else {
        return;
    };
    let mut attrs = attrs.borrow_mut();
    match attrs
        .iter_mut()
        .find(|a| a.name.local.eq_ignore_ascii_case(attr))
    {
        Some(existing) => existing.value = value.into(),
        None => attrs.push(crate::new_attribute(attr, value)),
    }
}

/// First element in document order whose tag name is in `names`, optionally
/// required to carry `with_attr`.
pub fn find_element(root: &Handle, names: &[&str], with_attr: Option<&str>) -> Option<Handle> {
    for child in root.children.borrow().iter() {
        if names.iter().any(|n| is_element_named(child, n))
            && with_attr.is_none_or(|a| has_attr(child, a))
        {
            return Some(child.clone());
        }
        if let Some(found) = find_element(child, names, with_attr) {
            return Some(found);
        }
    }
    None
}

/// Preorder walk over every element below `root`.
///
/// Attribute mutation from the callback is fine; the walk only holds child
/// list borrows, never attribute borrows.
pub fn walk_elements(root: &Handle, f: &mut impl FnMut(&Handle)) {
    for child in root.children.borrow().iter() {
        if let NodeData::Element { .. } = child.data {
            f(child);
        }
        walk_elements(child, f);
    }
}

/// Insert `child` as the first child of `parent`.
pub fn prepend_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().insert(0, child);
}
