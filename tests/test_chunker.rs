use knowledgequest::domain::chunker::chunk;
use knowledgequest::domain::values::chunk_policy::ChunkPolicy;

mod common;

#[test]
fn hundred_words_make_two_fragments() {
    // window 80, overlap 15: window 1 covers words 0..=79, window 2 starts
    // at word 65 and reaches the end.
    let text = common::words(100);
    let chunks = chunk(&text, "doc1", &ChunkPolicy::default());

    assert_eq!(chunks.len(), 2);
    assert!(chunks[0].text.starts_with("[Source: doc1] word0 "));
    assert!(chunks[0].text.ends_with("word79"));
    assert!(chunks[1].text.starts_with("[Source: doc1] word65 "));
    assert!(chunks[1].text.ends_with("word99"));
}

#[test]
fn empty_input_yields_no_fragments() {
    let policy = ChunkPolicy::default();
    assert!(chunk("", "doc", &policy).is_empty());
    assert!(chunk("   \t\n  ", "doc", &policy).is_empty());
}

#[test]
fn short_text_yields_single_fragment() {
    let chunks = chunk("flour water salt yeast", "doc", &ChunkPolicy::default());
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text, "[Source: doc] flour water salt yeast");
    assert_eq!(chunks[0].source_id, "doc");
}

#[test]
fn no_window_exceeds_size() {
    let policy = ChunkPolicy::new(10, 3).unwrap();
    let text = common::words(57);
    // The source prefix adds two tokens of its own.
    for c in chunk(&text, "d", &policy) {
        assert!(c.text.split_whitespace().count() <= policy.window() + 2);
    }
}

#[test]
fn windows_cover_all_tokens_without_gaps() {
    let policy = ChunkPolicy::new(10, 3).unwrap();
    let n = 57;
    let text = common::words(n);
    let chunks = chunk(&text, "d", &policy);

    for i in 0..n {
        let wanted = format!("word{i}");
        assert!(
            chunks
                .iter()
                .any(|c| c.text.split_whitespace().any(|t| t == wanted)),
            "token {wanted} missing from every window"
        );
    }

    // Consecutive windows share exactly `overlap` tokens.
    let first: Vec<&str> = chunks[0].text.split_whitespace().skip(2).collect();
    let second: Vec<&str> = chunks[1].text.split_whitespace().skip(2).collect();
    assert_eq!(&first[first.len() - policy.overlap()..], &second[..policy.overlap()]);
}

#[test]
fn exact_window_length_is_one_fragment() {
    let policy = ChunkPolicy::new(10, 3).unwrap();
    let chunks = chunk(&common::words(10), "d", &policy);
    assert_eq!(chunks.len(), 1);
}

#[test]
fn chunking_is_deterministic() {
    let text = common::words(200);
    let policy = ChunkPolicy::default();
    assert_eq!(chunk(&text, "d", &policy), chunk(&text, "d", &policy));
}

#[test]
fn policy_rejects_degenerate_parameters() {
    assert!(ChunkPolicy::new(0, 0).is_err());
    assert!(ChunkPolicy::new(80, 80).is_err());
    assert!(ChunkPolicy::new(80, 120).is_err());
    let policy = ChunkPolicy::new(80, 15).unwrap();
    assert_eq!(policy.stride(), 65);
}
