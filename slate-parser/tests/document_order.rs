//! Whole-document conversion tests
//!
//! These run the full pipeline over the sample documents in docs/samples/
//! and over inline documents that exercise traversal order. Emission order
//! is exactly document order: one pre-order pass, tag-driven, so a
//! recognized tag is processed wherever it sits in the tree.

use slate_parser::slate::error::ConvertError;
use slate_parser::slate::loader::{DocumentLoader, LoaderError};
use slate_parser::slate::testing::{assert_config, convert_str, workspace_path};

fn convert_sample(name: &str) -> String {
    DocumentLoader::from_path(workspace_path(name))
        .unwrap()
        .convert()
        .unwrap()
}

#[test]
fn test_server_sample_converts_verbatim() {
    let output = convert_sample("docs/samples/server.xml");
    let expected = "\
{{!--
Server limits, tuned for the teaching cluster.
--}}
(def port 8080)
(def workers 4)
$[
  timeout : 30,
  retries : 3,
]
{{!-- |+ port workers| : 8084 --}}
{{!-- |max timeout retries| : 30 --}}";
    assert_eq!(output, expected);
}

#[test]
fn test_output_carries_no_trailing_newline() {
    let output = convert_sample("docs/samples/server.xml");
    assert!(!output.ends_with('\n'));
}

#[test]
fn test_expressions_sample_covers_every_operator() {
    let output = convert_sample("docs/samples/expressions.xml");
    assert_config(&output)
        .line_count(7)
        .line(0, "(def base 100)")
        .line(1, "{{!-- |+ base 1 2| : 103 --}}")
        .line(2, "{{!-- |- base 58| : 42 --}}")
        .line(3, "{{!-- |* 6 7| : 42 --}}")
        .line(4, "{{!-- |/ base 8| : 12 --}}")
        .line(5, "{{!-- |mod base 7| : 2 --}}")
        .line(6, "{{!-- |max base 12 250| : 250 --}}");
}

#[test]
fn test_dictionary_sample_feeds_entries_into_expressions() {
    let output = convert_sample("docs/samples/dictionary.xml");
    assert_config(&output)
        .line_count(9)
        .line(0, "{{!--")
        .line(1, "Canvas geometry.")
        .line(2, "--}}")
        .line(3, "$[")
        .line(4, "  width : 120,")
        .line(5, "  height : 80,")
        .line(6, "  depth : 10,")
        .line(7, "]")
        .line(8, "{{!-- |* width height| : 9600 --}}");
}

#[test]
fn test_forward_reference_sample_fails() {
    let err = DocumentLoader::from_path(workspace_path(
        "docs/samples/invalid/forward-reference.xml",
    ))
    .unwrap()
    .convert()
    .unwrap_err();
    assert!(matches!(
        err,
        LoaderError::Convert(ConvertError::UnresolvedOperand(_))
    ));
}

#[test]
fn test_bad_name_sample_fails() {
    let err = DocumentLoader::from_path(workspace_path("docs/samples/invalid/bad-name.xml"))
        .unwrap()
        .convert()
        .unwrap_err();
    assert!(matches!(
        err,
        LoaderError::Convert(ConvertError::InvalidIdentifier { .. })
    ));
}

#[test]
fn test_truncated_sample_fails() {
    let err = DocumentLoader::from_path(workspace_path("docs/samples/invalid/truncated.xml"))
        .unwrap()
        .convert()
        .unwrap_err();
    assert!(matches!(
        err,
        LoaderError::Convert(ConvertError::MalformedDocument(_))
    ));
}

#[test]
fn test_emission_is_preorder_over_the_whole_tree() {
    let output = convert_str(
        r#"<config>
             <section>
               <const name="a" value="1"/>
               <group><const name="b" value="2"/></group>
               <const name="c" value="3"/>
             </section>
             <const name="d" value="4"/>
           </config>"#,
    );
    assert_config(&output)
        .line_count(4)
        .line(0, "(def a 1)")
        .line(1, "(def b 2)")
        .line(2, "(def c 3)")
        .line(3, "(def d 4)");
}

#[test]
fn test_unknown_tags_anywhere_are_ignored() {
    let output = convert_str(
        r#"<settings>
             <preamble/>
             <const name="kept" value="1"/>
             <footer>trailing text</footer>
           </settings>"#,
    );
    assert_config(&output).line_count(1).line(0, "(def kept 1)");
}

#[test]
fn test_document_with_no_recognized_tags_is_empty_output() {
    let output = convert_str("<settings><one/><two/></settings>");
    assert_eq!(output, "");
}

#[test]
fn test_mixed_document_interleaves_constructs_in_order() {
    let output = convert_str(
        r#"<config>
             <comment>part one</comment>
             <const name="n" value="2"/>
             <dictionary><entry name="m" value="5"/></dictionary>
             <expr value="|* n m|"/>
             <comment>part two</comment>
           </config>"#,
    );
    assert_config(&output)
        .line_count(11)
        .line(0, "{{!--")
        .line(1, "part one")
        .line(2, "--}}")
        .line(3, "(def n 2)")
        .line(4, "$[")
        .line(5, "  m : 5,")
        .line(6, "]")
        .line(7, "{{!-- |* n m| : 10 --}}")
        .line(8, "{{!--")
        .line(9, "part two")
        .line(10, "--}}");
}
