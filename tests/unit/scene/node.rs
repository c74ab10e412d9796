use super::*;

#[test]
fn line_markup_has_geometry_then_shared_suffix() {
    let n = Node::line(
        1.0,
        2.5,
        3.0,
        4.0,
        Attrs::new()
            .style("stroke-width: 1")
            .transform("rotate(6 440,440)")
            .attr("id", "tick"),
    );
    assert_eq!(
        n.markup(),
        "<line x1=\"1\" y1=\"2.5\" x2=\"3\" y2=\"4\" style=\"stroke-width: 1\" \
         transform=\"rotate(6 440,440)\" id=\"tick\"/>"
    );
}

#[test]
fn empty_style_and_transform_are_omitted() {
    let n = Node::circle(5.0, 5.0, 2.0, Attrs::new());
    assert_eq!(n.markup(), "<circle cx=\"5\" cy=\"5\" r=\"2\"></circle>");
}

#[test]
fn rect_and_polygon_markup() {
    let r = Node::rounded_rect(0.0, 0.0, 10.0, 20.0, 15.0, 15.0, Attrs::new());
    assert_eq!(
        r.markup(),
        "<rect x=\"0\" y=\"0\" width=\"10\" height=\"20\" rx=\"15\" ry=\"15\"></rect>"
    );

    let p = Node::polygon(
        vec![Point::new(0.0, 1.0), Point::new(2.0, 3.5)],
        Attrs::new().attr("class", "segment"),
    );
    assert_eq!(
        p.markup(),
        "<polygon points=\"0,1 2,3.5\" class=\"segment\"></polygon>"
    );
}

#[test]
fn custom_map_keeps_insertion_order_and_overwrites_in_place() {
    let mut a = Attrs::new().attr("id", "x").attr("class", "hide").attr("href", "a.png");
    a.set("class", "unhide");
    assert_eq!(a.to_string(), " id=\"x\" class=\"unhide\" href=\"a.png\"");
}

#[test]
fn raw_custom_attributes_are_verbatim_and_editable() {
    let mut a = Attrs::new().raw("id=\"logo\" class=\"hide\"");
    assert_eq!(a.id(), Some("logo"));
    assert_eq!(a.get("class"), Some("hide"));

    a.set("class", "unhide");
    a.set("href", "x.png");
    assert_eq!(a.to_string(), " id=\"logo\" class=\"unhide\" href=\"x.png\"");
}

#[test]
fn raw_lookup_requires_attribute_boundary() {
    let a = Attrs::new().raw("data-id=\"a\" id=\"b\"");
    assert_eq!(a.id(), Some("b"));
}

#[test]
fn group_concatenates_nodes_and_raw_children_in_order() {
    let g = Node::group(
        vec![
            Node::circle(0.0, 0.0, 1.0, Attrs::new()).into(),
            "<!-- raw -->".into(),
            Node::text(1.0, 2.0, "XII", Attrs::new()).into(),
        ],
        Attrs::new().attr("id", "g"),
    );
    assert_eq!(
        g.markup(),
        "<g id=\"g\"><circle cx=\"0\" cy=\"0\" r=\"1\"></circle><!-- raw -->\
         <text x=\"1\" y=\"2\">XII</text></g>"
    );
}

#[test]
fn generic_uses_its_tag() {
    let n = Node::generic(
        "defs",
        vec![Node::generic("filter", vec![], Attrs::new().attr("id", "f1")).into()],
        Attrs::new(),
    );
    assert_eq!(n.markup(), "<defs><filter id=\"f1\"></filter></defs>");
}

#[test]
fn text_and_attribute_values_are_escaped() {
    let n = Node::text(0.0, 0.0, "a<b & c", Attrs::new().attr("title", "say \"hi\""));
    assert_eq!(
        n.markup(),
        "<text x=\"0\" y=\"0\" title=\"say &quot;hi&quot;\">a&lt;b &amp; c</text>"
    );
}

#[test]
fn find_searches_depth_first_and_only_text_holds_content() {
    let mut g = Node::group(
        vec![Node::group(
            vec![Node::text(0.0, 0.0, "1", Attrs::new().attr("id", "label")).into()],
            Attrs::new().attr("id", "inner"),
        )
        .into()],
        Attrs::new().attr("id", "outer"),
    );

    assert!(g.find("inner").is_some());
    assert_eq!(g.find("label").and_then(Node::text_content), Some("1"));
    assert!(g.find("missing").is_none());

    assert!(g.find_mut("label").is_some_and(|n| n.set_text("2")));
    assert_eq!(g.find("label").and_then(Node::text_content), Some("2"));
    assert!(!g.find_mut("inner").unwrap().set_text("nope"));
}

#[test]
fn markup_is_idempotent() {
    let n = Node::group(
        vec![Node::line(0.0, 0.0, 1.0, 1.0, Attrs::new()).into()],
        Attrs::new(),
    );
    assert_eq!(n.markup(), n.markup());
}
