//! End-to-end tests: tokenized JSON in, CSV/matrix/metadata out.

use screenplay_feature_extractor::{
    feature_matrix, run_pipeline, split_class_tag, write_csv, ExportMetadata, FeatureCatalog,
    FeatureSpec, LineClass, SCHEMA_VERSION,
};

/// Two dialogue lines sharing a speaker prefix, plus a direction line, in
/// the external tokenizer's JSON format.
const SCRIPT_JSON: &str = r#"[
    {
        "indent_chars": "",
        "tokenized_words": [
            { "surface": "太郎", "part_of_speech": "名詞,固有名詞,人名,名",
              "infl_type": "*", "infl_form": "*", "base_form": "太郎",
              "reading": "タロウ", "phonetic": "タロー" },
            { "surface": "「", "part_of_speech": "記号,括弧開,*,*",
              "infl_type": "*", "infl_form": "*", "base_form": "「",
              "reading": "「", "phonetic": "「" },
            { "surface": "おはよう", "part_of_speech": "感動詞,*,*,*",
              "infl_type": "*", "infl_form": "*", "base_form": "おはよう",
              "reading": "オハヨウ", "phonetic": "オハヨー" },
            { "surface": "」", "part_of_speech": "記号,括弧閉,*,*",
              "infl_type": "*", "infl_form": "*", "base_form": "」",
              "reading": "」", "phonetic": "」" }
        ]
    },
    {
        "indent_chars": "",
        "tokenized_words": [
            { "surface": "太郎", "part_of_speech": "名詞,固有名詞,人名,名",
              "infl_type": "*", "infl_form": "*", "base_form": "太郎",
              "reading": "タロウ", "phonetic": "タロー" },
            { "surface": "「", "part_of_speech": "記号,括弧開,*,*",
              "infl_type": "*", "infl_form": "*", "base_form": "「",
              "reading": "「", "phonetic": "「" },
            { "surface": "うん", "part_of_speech": "感動詞,*,*,*",
              "infl_type": "*", "infl_form": "*", "base_form": "うん",
              "reading": "ウン", "phonetic": "ウン" },
            { "surface": "」", "part_of_speech": "記号,括弧閉,*,*",
              "infl_type": "*", "infl_form": "*", "base_form": "」",
              "reading": "」", "phonetic": "」" }
        ]
    },
    {
        "indent_chars": "　　",
        "tokenized_words": [
            { "surface": "朝", "part_of_speech": "名詞,一般,*,*",
              "infl_type": "*", "infl_form": "*", "base_form": "朝",
              "reading": "アサ", "phonetic": "アサ" },
            { "surface": "。", "part_of_speech": "記号,句点,*,*",
              "infl_type": "*", "infl_form": "*", "base_form": "。",
              "reading": "。", "phonetic": "。" }
        ]
    }
]"#;

const SPEC_SOURCE: &str = "\
sc_count_of_lines
sc_count_of_lines_with_bracket
ln_count_of_words
ln_length_of_common_head
ln_begins_with_name
ln_ends_with_close_bracket
ln_length_of_indent
";

#[test]
fn test_pipeline_vectors() {
    let catalog = FeatureCatalog::default();
    let output = run_pipeline(SCRIPT_JSON.as_bytes(), SPEC_SOURCE, &catalog).unwrap();

    assert_eq!(output.lines_processed, 3);
    assert_eq!(output.features_per_line, 7);
    assert!(output.warnings.is_empty());

    // Dialogue lines share the 太郎「 opening (2 tokens).
    assert_eq!(output.vectors[0], vec![3.0, 2.0, 4.0, 2.0, 7.0, 1.0, 0.0]);
    assert_eq!(output.vectors[1], vec![3.0, 2.0, 4.0, 2.0, 7.0, 1.0, 0.0]);
    // The direction line shares nothing and is indented two characters.
    assert_eq!(output.vectors[2], vec![3.0, 2.0, 2.0, 0.0, 1.0, 0.0, 2.0]);
}

#[test]
fn test_pipeline_to_csv() {
    let catalog = FeatureCatalog::default();
    let output = run_pipeline(
        SCRIPT_JSON.as_bytes(),
        "ln_count_of_words\nln_ends_with_close_bracket\n",
        &catalog,
    )
    .unwrap();

    let mut csv = Vec::new();
    write_csv(&output.vectors, &mut csv).unwrap();
    assert_eq!(String::from_utf8(csv).unwrap(), "4,1\n4,1\n2,0\n");
}

#[test]
fn test_pipeline_to_matrix_and_metadata() {
    let catalog = FeatureCatalog::default();
    let outcome = FeatureSpec::parse(SPEC_SOURCE, &catalog);
    let output = run_pipeline(SCRIPT_JSON.as_bytes(), SPEC_SOURCE, &catalog).unwrap();

    let matrix = feature_matrix(&output.vectors).unwrap();
    assert_eq!(matrix.shape(), &[3, 7]);
    assert_eq!(matrix[[2, 6]], 2.0);

    let metadata = ExportMetadata::new(&outcome.spec, output.lines_processed);
    assert_eq!(metadata.n_lines, 3);
    assert_eq!(metadata.n_features, 7);
    assert_eq!(metadata.schema_version, SCHEMA_VERSION);
    assert_eq!(metadata.columns[3], "ln_length_of_common_head");
}

#[test]
fn test_pipeline_with_bad_spec_still_runs() {
    let catalog = FeatureCatalog::default();
    let output = run_pipeline(
        SCRIPT_JSON.as_bytes(),
        "ln_bogus_feature\nln_count_of_words\nln_count_of_words\n",
        &catalog,
    )
    .unwrap();

    // Unknown name dropped, duplicate collapsed; both warned.
    assert_eq!(output.features_per_line, 1);
    assert_eq!(output.warnings.len(), 2);
}

#[test]
fn test_training_line_label_flow() {
    // Training data prefixes raw lines with a class tag; the splitter peels
    // it off before tokenization, and the catalog position is the class
    // index the trainer consumes.
    let (class, body) = split_class_tag("DIALOGUE,太郎「おはよう」");
    assert_eq!(class, Some(LineClass::Dialogue));
    assert_eq!(body, "太郎「おはよう」");
    assert_eq!(LineClass::Dialogue.class_index(), 8);

    let (class, body) = split_class_tag("太郎「おはよう」");
    assert_eq!(class, None);
    assert_eq!(body, "太郎「おはよう」");
}
