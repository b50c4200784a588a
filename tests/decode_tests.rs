use indexmap::IndexMap;
use node_decode::{decode, decode_child, node, set_if_exists, yaml, Decode, DecodeError, Node};

#[derive(Debug, PartialEq)]
struct Camera {
    name: String,
    resolution: [u32; 2],
    exposure: Option<f64>,
    tags: Vec<String>,
}

impl Decode for Camera {
    fn decode(node: &Node) -> Result<Self, DecodeError> {
        let mut camera = Camera {
            name: decode_child(node, "name")?,
            resolution: decode_child(node, "resolution")?,
            exposure: None,
            tags: Vec::new(),
        };
        set_if_exists(&mut camera.exposure, node, "exposure")?;
        set_if_exists(&mut camera.tags, node, "tags")?;
        Ok(camera)
    }
}

#[test]
fn scalar_text_decodes_to_integer() {
    assert_eq!(decode::<i32>(&node!("42")), Ok(42));
}

#[test]
fn malformed_scalar_references_the_literal() {
    let err = decode::<i32>(&node!("abc")).unwrap_err();
    assert!(err.message.contains("\"abc\""));
    assert!(err.message.contains("i32"));
}

#[test]
fn fixed_array_decodes_in_order() {
    let root = yaml::from_str("[1, 2, 3]").unwrap();
    assert_eq!(decode::<[i32; 3]>(&root), Ok([1, 2, 3]));
}

#[test]
fn fixed_array_rejects_wrong_lengths() {
    let short = yaml::from_str("[1, 2]").unwrap();
    let err = decode::<[i32; 3]>(&short).unwrap_err();
    assert_eq!(err.message, "wrong number of elements, expected 3, got 2");

    let long = yaml::from_str("[1, 2, 3, 4]").unwrap();
    assert!(decode::<[i32; 3]>(&long).is_err());
}

#[test]
fn null_decodes_to_empty_sequence() {
    assert_eq!(decode::<Vec<i32>>(&Node::Null), Ok(vec![]));

    // An omitted optional list stays empty through set_if_exists too.
    let root = yaml::from_str("tags: ~").unwrap();
    let mut tags = vec!["preset".to_string()];
    set_if_exists(&mut tags, &root, "tags").unwrap();
    assert!(tags.is_empty());
}

#[test]
fn mapping_from_non_mapping_never_partially_populates() {
    let err = decode::<IndexMap<String, i32>>(&node!([1, 2])).unwrap_err();
    assert_eq!(
        err.message,
        "unexpected node type, expected mapping, got sequence"
    );
}

#[test]
fn trace_reads_deepest_first() {
    let root = yaml::from_str("a: [1, x]").unwrap();
    let err = decode::<IndexMap<String, Vec<i64>>>(&root).unwrap_err();

    assert_eq!(err.trace.len(), 2);
    assert_eq!(err.trace[0].name, "1");
    assert_eq!(err.trace[1].name, "a");
    assert_eq!(
        err.to_string(),
        "failed to parse \"x\" as i64 at 1 (scalar) -> a (sequence)"
    );
}

#[test]
fn custom_type_decodes_from_yaml() {
    let root = yaml::from_str(
        "\
name: front
resolution: [1920, 1080]
tags: [outdoor, wide]
",
    )
    .unwrap();

    let camera: Camera = decode(&root).unwrap();
    assert_eq!(
        camera,
        Camera {
            name: "front".to_string(),
            resolution: [1920, 1080],
            exposure: None,
            tags: vec!["outdoor".to_string(), "wide".to_string()],
        }
    );
}

#[test]
fn custom_type_failures_carry_the_full_path() {
    let root = yaml::from_str(
        "\
cameras:
  - name: front
    resolution: [1920, tall]
",
    )
    .unwrap();

    let err = decode::<IndexMap<String, Vec<Camera>>>(&root).unwrap_err();
    assert_eq!(err.message, "failed to parse \"tall\" as u32");
    assert_eq!(
        err.format_trace(),
        "1 (scalar) -> resolution (sequence) -> 0 (mapping) -> cameras (sequence)"
    );
}

#[test]
fn decode_child_missing_key() {
    let root = yaml::from_str("name: front").unwrap();
    let err = decode_child::<String>(&root, "mode").unwrap_err();
    assert_eq!(err.message, "no such key: mode");
}

#[test]
fn whole_subtrees_can_be_deferred() {
    let root = yaml::from_str("raw: {anything: [goes, here]}").unwrap();
    let raw: Node = decode_child(&root, "raw").unwrap();
    assert!(raw.is_mapping());
}
