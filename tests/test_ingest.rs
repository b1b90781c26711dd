mod common;

#[tokio::test]
async fn hundred_word_document_yields_two_fragments() {
    let (kq, _dir) = common::setup();

    let report = kq
        .ingest(vec![common::doc("doc1", &common::words(100))])
        .await
        .unwrap();

    assert_eq!(report.documents_seen, 1);
    assert_eq!(report.documents_ingested, 1);
    assert_eq!(report.documents_skipped, 0);
    assert_eq!(report.fragments_inserted, 2);

    let stats = kq.stats().unwrap();
    assert_eq!(stats.fragments, 2);
    assert_eq!(stats.sources.len(), 1);
    assert_eq!(stats.sources[0].source_id, "doc1");
    assert_eq!(stats.sources[0].fragments, 2);
}

#[tokio::test]
async fn empty_documents_are_skipped_without_aborting_the_batch() {
    let (kq, _dir) = common::setup();

    let report = kq
        .ingest(vec![
            common::doc("empty.txt", ""),
            common::doc("blank.txt", "   \n\t "),
            common::doc("real.txt", "strong flour with high protein content"),
        ])
        .await
        .unwrap();

    assert_eq!(report.documents_seen, 3);
    assert_eq!(report.documents_ingested, 1);
    assert_eq!(report.documents_skipped, 2);
    assert_eq!(report.fragments_inserted, 1);
}

#[tokio::test]
async fn ingesting_nothing_reports_zero_everywhere() {
    let (kq, _dir) = common::setup();
    let report = kq.ingest(vec![]).await.unwrap();
    assert_eq!(report.documents_seen, 0);
    assert_eq!(report.documents_ingested, 0);
    assert_eq!(report.documents_skipped, 0);
    assert_eq!(report.fragments_inserted, 0);
    assert_eq!(kq.stats().unwrap().fragments, 0);
}

#[tokio::test]
async fn fragments_carry_the_source_tag() {
    let (kq, _dir) = common::setup();
    kq.ingest(vec![common::doc("levain.txt", "wild yeast starter culture")])
        .await
        .unwrap();

    let response = kq.ask("wild yeast starter culture", 1).await.unwrap();
    assert_eq!(response.results.len(), 1);
    assert!(response.results[0]
        .text
        .starts_with("[Source: levain.txt] "));
}

// Re-ingestion appends; there is no dedup path. Documented behavior.
#[tokio::test]
async fn reingesting_the_same_document_appends_duplicates() {
    let (kq, _dir) = common::setup();
    let doc = common::doc("doc1", &common::words(100));
    kq.ingest(vec![doc.clone()]).await.unwrap();
    kq.ingest(vec![doc]).await.unwrap();
    assert_eq!(kq.stats().unwrap().fragments, 4);
}
