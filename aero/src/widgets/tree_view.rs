//! Tree view widget - nested expandable lists.

use std::sync::Arc;

use aerodom::{Element, generate_id};

use super::disclosure::Disclosure;
use super::{HasState, NeedsState, Passthrough};
use crate::handler_context::{EventData, events, notify};
use crate::state::State;
use crate::{HandlerRegistry, WidgetHandlers};

/// A node of the tree. Nodes with children render as expandable branches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
    pub default_expanded: bool,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn expanded(mut self) -> Self {
        self.default_expanded = true;
        self
    }

    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A tree view builder.
///
/// Branch state is kept per node path (`0`, `0/1`, `0/1/2`, ...) so a node
/// keeps its state while its siblings change. Clicking a branch summary
/// toggles that branch only and calls `on_toggle` with `EventData::Toggle`.
///
/// # Example
///
/// ```ignore
/// TreeView::new()
///     .items(vec![
///         TreeNode::new("Documents").expanded().child(TreeNode::new("Work")),
///     ])
///     .connectors(true)
///     .state(&tree_state)
///     .build(&registry, &handlers);
/// ```
#[derive(Clone, Debug)]
pub struct TreeView<S = NeedsState> {
    state_marker: S,
    id: Option<String>,
    items: Vec<TreeNode>,
    connectors: bool,
    collapse_button: bool,
    container: bool,
    passthrough: Passthrough,
}

impl Default for TreeView<NeedsState> {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeView<NeedsState> {
    /// Create a new tree view builder.
    pub fn new() -> Self {
        Self {
            state_marker: NeedsState,
            id: None,
            items: Vec::new(),
            connectors: false,
            collapse_button: false,
            container: true,
            passthrough: Passthrough::default(),
        }
    }

    /// Set the state reference. Required before calling `build()`.
    pub fn state(
        self,
        s: &State<Disclosure<String>>,
    ) -> TreeView<HasState<'_, Disclosure<String>>> {
        TreeView {
            state_marker: HasState(s),
            id: self.id,
            items: self.items,
            connectors: self.connectors,
            collapse_button: self.collapse_button,
            container: self.container,
            passthrough: self.passthrough,
        }
    }
}

impl<S> TreeView<S> {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn items(mut self, items: Vec<TreeNode>) -> Self {
        self.items = items;
        self
    }

    /// Draw connector lines between nodes.
    pub fn connectors(mut self, show: bool) -> Self {
        self.connectors = show;
        self
    }

    /// Draw +/- buttons on branches.
    pub fn collapse_button(mut self, show: bool) -> Self {
        self.collapse_button = show;
        self
    }

    /// Draw the sunken container around the tree (on by default).
    pub fn container(mut self, show: bool) -> Self {
        self.container = show;
        self
    }

    passthrough_methods!();
}

impl<'a> TreeView<HasState<'a, Disclosure<String>>> {
    /// Build the tree element.
    pub fn build(self, registry: &HandlerRegistry, handlers: &WidgetHandlers) -> Element {
        let state = self.state_marker.0;
        let id = self.id.clone().unwrap_or_else(|| generate_id("treeview"));

        // Record defaults for nodes seen for the first time
        let mut unseen = Vec::new();
        state.with(|d| collect_unseen(&self.items, "", d, &mut unseen));
        if !unseen.is_empty() {
            state.update_quiet(|d| {
                for (path, default_open) in unseen {
                    d.register(path, default_open);
                }
            });
        }
        let disclosure = state.get();
        log::debug!("[TreeView::build] id={} roots={}", id, self.items.len());

        let builder = NodeBuilder {
            tree_id: &id,
            disclosure: &disclosure,
            state,
            registry,
            on_toggle: handlers.get("on_toggle").cloned(),
        };
        let children = self
            .items
            .iter()
            .enumerate()
            .map(|(index, node)| builder.node(node, &index.to_string()));

        let tree = Element::ul()
            .id(&id)
            .class("tree-view")
            .class_if(self.container, "has-container")
            .class_if(self.connectors, "has-connector")
            .class_if(self.collapse_button, "has-collapse-button")
            .children(children);

        self.passthrough.apply(tree)
    }
}

fn collect_unseen(
    nodes: &[TreeNode],
    parent: &str,
    disclosure: &Disclosure<String>,
    out: &mut Vec<(String, bool)>,
) {
    for (index, node) in nodes.iter().enumerate() {
        if !node.is_branch() {
            continue;
        }
        let path = child_path(parent, index);
        if !disclosure.contains(&path) {
            out.push((path.clone(), node.default_expanded));
        }
        collect_unseen(&node.children, &path, disclosure, out);
    }
}

fn child_path(parent: &str, index: usize) -> String {
    if parent.is_empty() {
        index.to_string()
    } else {
        format!("{}/{}", parent, index)
    }
}

struct NodeBuilder<'b> {
    tree_id: &'b str,
    disclosure: &'b Disclosure<String>,
    state: &'b State<Disclosure<String>>,
    registry: &'b HandlerRegistry,
    on_toggle: Option<crate::Handler>,
}

impl NodeBuilder<'_> {
    fn node(&self, node: &TreeNode, path: &str) -> Element {
        if !node.is_branch() {
            return Element::li().inner_text(node.label.as_str());
        }

        let open = self.disclosure.is_open(&path.to_string());
        let summary_id = format!("{}-node-{}", self.tree_id, path.replace('/', "-"));

        let state = self.state.clone();
        let node_path = path.to_string();
        let on_toggle = self.on_toggle.clone();
        self.registry.register(
            &summary_id,
            events::CLICK,
            Arc::new(move |hx| {
                let mut now_open = false;
                state.update(|d| now_open = d.toggle(node_path.clone()));
                log::debug!("[TreeView::on_toggle] {} open={}", node_path, now_open);
                notify(on_toggle.as_ref(), hx, EventData::Toggle { open: now_open });
            }),
        );

        let children = node
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| self.node(child, &child_path(path, index)));

        Element::li().child(
            Element::details()
                .flag("open", open)
                .child(Element::summary().id(summary_id).inner_text(node.label.as_str()))
                .child(Element::ul().children(children)),
        )
    }
}
