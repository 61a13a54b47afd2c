//! Quokka CLI
//!
//! Walks a demo document depth-first, printing each element's tag and
//! attribute list, and optionally evaluates a simple selector against every
//! element, highlighting the ones that match. Illustrates the `Node`
//! contract the selector engine consumes; the matching itself all lives in
//! `quokka-css`.

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use quokka_css::Selector;
use quokka_dom::{Attribute, DomTree, ElementData, NodeId, NodeType};

#[derive(Parser)]
#[command(
    name = "quokka",
    about = "Walk the demo DOM tree and match a CSS simple selector"
)]
struct Args {
    /// Selector fragment to evaluate against every element,
    /// e.g. 'li', '#list', '.pretty-list', '[rel="stylesheet"]', '*'
    selector: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let selector = args.selector.as_deref().map(Selector::parse).transpose()?;

    let tree = build_demo_document();
    print_elements(&tree, tree.root(), selector.as_ref());

    Ok(())
}

/// Depth-first walk printing every element; matching elements are highlighted.
fn print_elements(tree: &DomTree, id: NodeId, selector: Option<&Selector>) {
    for &child in tree.children(id) {
        if let Some(node) = tree.get(child) {
            if let NodeType::Element(data) = &node.node_type {
                let matched = selector.is_some_and(|sel| sel.matches(node));
                print_element(data, matched);
            }
            print_elements(tree, child, selector);
        }
    }
}

/// Print one element's tag and attribute list.
fn print_element(data: &ElementData, matched: bool) {
    println!("# <==============================> #");
    if matched {
        println!("TAG: {} {}", data.tag_name.green().bold(), "(match)".green());
    } else {
        println!("TAG: {}", data.tag_name);
    }
    for attr in &data.attrs {
        println!("  {}={:?}", attr.name, attr.value);
    }
}

/// Build the demo page as a DOM tree:
///
/// ```text
/// <html lang="en">
///   <head>
///     <meta charset="utf-8">
///     <title>title</title>
///     <link rel="stylesheet" href="style.css">
///   </head>
///   <body>
///     <ul id="list" class="pretty-list">
///       <li class="pretty-element-list">Element 1</li>
///       <li class="pretty-element-list">Element 2</li>
///       <li class="pretty-element-list">Element 3</li>
///     </ul>
///   </body>
/// </html>
/// ```
fn build_demo_document() -> DomTree {
    let mut tree = DomTree::new();

    let html = tree.alloc(element("html", &[("lang", "en")]));
    tree.append_child(NodeId::ROOT, html);

    let head = tree.alloc(element("head", &[]));
    tree.append_child(html, head);

    let meta = tree.alloc(element("meta", &[("charset", "utf-8")]));
    tree.append_child(head, meta);

    let title = tree.alloc(element("title", &[]));
    tree.append_child(head, title);
    let title_text = tree.alloc(NodeType::Text("title".to_string()));
    tree.append_child(title, title_text);

    let link = tree.alloc(element(
        "link",
        &[("rel", "stylesheet"), ("href", "style.css")],
    ));
    tree.append_child(head, link);

    let body = tree.alloc(element("body", &[]));
    tree.append_child(html, body);

    let ul = tree.alloc(element(
        "ul",
        &[("id", "list"), ("class", "pretty-list")],
    ));
    tree.append_child(body, ul);

    for n in 1..=3 {
        let li = tree.alloc(element("li", &[("class", "pretty-element-list")]));
        tree.append_child(ul, li);
        let text = tree.alloc(NodeType::Text(format!("Element {n}")));
        tree.append_child(li, text);
    }

    tree
}

/// Build an element node type from a tag and attribute pairs.
fn element(tag: &str, attrs: &[(&str, &str)]) -> NodeType {
    NodeType::Element(ElementData {
        tag_name: tag.to_string(),
        attrs: attrs
            .iter()
            .map(|&(name, value)| Attribute::new(name, value))
            .collect(),
    })
}
