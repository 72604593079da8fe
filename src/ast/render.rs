use super::node::Node;

/// Renders a finished tree as graph text, children before parents, one
/// label line per node and one edge line per ownership link.
pub fn render(root: &Node) -> String {
    let mut out = String::from("graph {\n");
    let mut next_id = 0;
    render_node(root, &mut out, &mut next_id);
    out.push_str("}\n");
    out
}

fn render_node(node: &Node, out: &mut String, next_id: &mut usize) -> usize {
    let child_ids: Vec<usize> = node
        .children()
        .iter()
        .map(|child| render_node(child, out, next_id))
        .collect();

    let id = *next_id;
    *next_id += 1;

    out.push_str(&format!("N{}[label=\"{}\"];\n", id, node.render_label()));
    for child_id in child_ids {
        out.push_str(&format!("N{}--N{};\n", id, child_id));
    }

    id
}
