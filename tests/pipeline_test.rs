//! Pipeline Integration Tests
//!
//! End-to-end runs through the public API: text in, framed splits
//! and batches out.

mod common;

use review_prep::{Pipeline, PipelineConfig, PipelineError, SplitFractions, SplitKind, PAD_ID};

fn pipeline(seq_len: usize, batch_size: usize) -> Pipeline {
    let cfg = PipelineConfig::new(batch_size)
        .unwrap()
        .with_seq_len(seq_len)
        .unwrap();
    Pipeline::new(cfg).unwrap()
}

#[test]
fn test_two_review_scenario() {
    // Two reviews are too few for the default split to keep both in
    // train, so check the rows wherever they land.
    let data = pipeline(4, 1).run("good movie\nbad film.", "positive\nnegative").unwrap();
    let v    = &data.vocabulary;

    let (good, movie) = (v.id("good").unwrap(), v.id("movie").unwrap());
    let (bad, film)   = (v.id("bad").unwrap(), v.id("film").unwrap());

    let mut rows   = Vec::new();
    let mut labels = Vec::new();
    for kind in SplitKind::ALL {
        let split = data.splits.get(kind);
        rows.extend(split.features().iter_rows().map(|r| r.to_vec()));
        labels.extend_from_slice(split.labels());
    }

    assert_eq!(rows, vec![vec![0, 0, good, movie], vec![0, 0, bad, film]]);
    assert_eq!(labels, vec![1, 0]);
}

#[test]
fn test_long_review_keeps_first_tokens() {
    // 250 distinct tokens, each appearing once; ids follow the
    // alphabetical tie-break, so compare against the vocabulary.
    let words: Vec<String> = (0..250).map(|i| format!("w{i:03}")).collect();
    let review   = words.join(" ");
    let reviews  = vec![review.as_str(); 10].join("\n");
    let labels   = vec!["positive"; 10].join("\n");

    let data     = pipeline(200, 1).run(&reviews, &labels).unwrap();
    let expected: Vec<u32> = words[..200]
        .iter()
        .map(|w| data.vocabulary.id(w).unwrap())
        .collect();

    assert_eq!(data.splits.train.features().row(0), expected.as_slice());
}

#[test]
fn test_seven_rows_two_batches() {
    // 7 training rows: floor(0.8 * 9) = 7
    let reviews = (0..9).map(|i| format!("word{i}")).collect::<Vec<_>>().join("\n");
    let labels  = vec!["negative"; 9].join("\n");
    let data    = pipeline(3, 3).run(&reviews, &labels).unwrap();

    assert_eq!(data.splits.train.len(), 7);
    let loader = data.batches(SplitKind::Train).unwrap();
    let sizes: Vec<usize> = loader.iter().map(|b| b.rows()).collect();
    assert_eq!(sizes, vec![3, 3]);
}

#[test]
fn test_rows_always_fixed_length() {
    let (reviews, labels) = common::random_corpus(7, 300);
    for seq_len in [1, 5, 17, 200] {
        let data = pipeline(seq_len, 8).run(&reviews, &labels).unwrap();
        for kind in SplitKind::ALL {
            assert!(data.splits.get(kind).features().iter_rows().all(|r| r.len() == seq_len));
        }
    }
}

#[test]
fn test_vocabulary_ids_are_a_bijection() {
    let (reviews, labels) = common::random_corpus(11, 200);
    let data = pipeline(10, 4).run(&reviews, &labels).unwrap();
    let v    = &data.vocabulary;

    let mut ids: Vec<u32> = v.entries().iter().map(|e| v.id(&e.token).unwrap()).collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=v.len() as u32).collect::<Vec<_>>());
    assert!(!ids.contains(&PAD_ID));
}

#[test]
fn test_rerun_is_identical() {
    let (reviews, labels) = common::random_corpus(3, 250);
    let p = pipeline(20, 16);

    let first  = p.run(&reviews, &labels).unwrap();
    let second = p.run(&reviews, &labels).unwrap();
    assert_eq!(first.vocabulary, second.vocabulary);
    assert_eq!(first.splits, second.splits);
}

#[test]
fn test_partition_is_exact() {
    let (reviews, labels) = common::random_corpus(5, 333);
    let data = pipeline(12, 10).run(&reviews, &labels).unwrap();

    let surviving = 333 - data.dropped_reviews;
    assert_eq!(data.total_rows(), surviving);
    for kind in SplitKind::ALL {
        let s = data.splits.get(kind);
        assert_eq!(s.features().rows(), s.labels().len());
    }
}

#[test]
fn test_batches_are_always_full() {
    let (reviews, labels) = common::random_corpus(9, 401);
    let data = pipeline(8, 7).run(&reviews, &labels).unwrap();

    for kind in SplitKind::ALL {
        let loader = data.batches(kind).unwrap();
        let n      = data.splits.get(kind).len();
        let served: usize = loader.iter().map(|b| {
            assert_eq!(b.rows(), 7);
            b.rows()
        }).sum();
        assert_eq!(served, (n / 7) * 7);
    }
}

#[test]
fn test_custom_split_fractions() {
    let cfg = PipelineConfig::new(1)
        .unwrap()
        .with_seq_len(2)
        .unwrap()
        .with_split(SplitFractions::new(0.5, 0.25, 0.25).unwrap())
        .unwrap();
    let reviews = (0..8).map(|i| format!("t{i}")).collect::<Vec<_>>().join("\n");
    let labels  = vec!["positive"; 8].join("\n");

    let data = Pipeline::new(cfg).unwrap().run(&reviews, &labels).unwrap();
    assert_eq!(
        (data.splits.train.len(), data.splits.valid.len(), data.splits.test.len()),
        (4, 2, 2)
    );
}

#[test]
fn test_label_mismatch_detected_before_filtering() {
    // The empty second review would be dropped; the mismatch must still be caught
    let err = pipeline(4, 1).run("fine\n!!!\ngood", "positive\nnegative").unwrap_err();
    assert!(matches!(err, PipelineError::LabelCountMismatch { reviews: 3, labels: 2 }));
}

#[test]
fn test_trailing_newlines_tolerated() {
    let data = pipeline(4, 1).run("good movie\nbad film\n", "positive\nnegative\n").unwrap();
    assert_eq!(data.total_rows(), 2);
    assert_eq!(data.dropped_reviews, 0);
}

#[test]
fn test_empty_corpus() {
    let data = pipeline(4, 1).run("", "").unwrap();
    assert_eq!(data.total_rows(), 0);
    assert_eq!(data.dropped_reviews, 1);
    assert!(data.vocabulary.is_empty());
    assert_eq!(data.batches(SplitKind::Train).unwrap().iter().count(), 0);
}
