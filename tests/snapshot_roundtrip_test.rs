use std::sync::Arc;

use verdict::analysis::WhitespaceTokenizer;
use verdict::classifier::Classifier;
use verdict::dataset::Example;
use verdict::error::Result;
use verdict::persist;

fn trained_classifier() -> Result<Classifier> {
    let dataset = vec![
        Example::new("good great awesome", true),
        Example::new("lovely wonderful good", true),
        Example::new("bad terrible awful", false),
        Example::new("dreadful bad horrid", false),
    ];
    let mut classifier =
        Classifier::from_dataset(&dataset, Arc::new(WhitespaceTokenizer::new()))?;
    // Push some weights off 1.0 so the round trip covers trained state
    classifier.train("good great", false)?;
    classifier.train("bad awful", true)?;
    Ok(classifier)
}

const PROBES: &[&str] = &["good", "awful", "good bad", "good great xyz", "unknown only", ""];

#[test]
fn test_round_trip_produces_bit_identical_guesses() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bayes.json");

    let classifier = trained_classifier()?;
    persist::save(&classifier.snapshot(), &path, true)?;

    let restored = Classifier::from_snapshot(
        persist::load(&path)?,
        Arc::new(WhitespaceTokenizer::new()),
    )?;

    for probe in PROBES {
        let original = classifier.guess(probe)?;
        let roundtrip = restored.guess(probe)?;
        assert_eq!(original.positive.to_bits(), roundtrip.positive.to_bits());
        assert_eq!(original.negative.to_bits(), roundtrip.negative.to_bits());
        assert_eq!(original.certainty.to_bits(), roundtrip.certainty.to_bits());
    }
    Ok(())
}

#[test]
fn test_restored_classifier_keeps_learning() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bayes.json");

    let classifier = trained_classifier()?;
    persist::save(&classifier.snapshot(), &path, false)?;

    let mut restored = Classifier::from_snapshot(
        persist::load(&path)?,
        Arc::new(WhitespaceTokenizer::new()),
    )?;
    let before = restored.total_examples();

    restored.learn("splendid", true)?;
    assert_eq!(restored.total_examples(), before + 1);
    assert_eq!(
        restored.total_examples(),
        restored.total_positive_examples() + restored.total_negative_examples()
    );

    let (label, certainty) = restored.guess_label("splendid")?;
    assert!(label);
    assert!(certainty > 0.0);
    Ok(())
}

#[tokio::test]
async fn test_async_save_matches_blocking_save() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let sync_path = dir.path().join("sync.json");
    let async_path = dir.path().join("async.json");

    let snapshot = trained_classifier()?.snapshot();
    persist::save(&snapshot, &sync_path, false)?;
    persist::save_async(&snapshot, &async_path, false).await?;

    assert_eq!(persist::load(&sync_path)?, persist::load(&async_path)?);
    Ok(())
}

#[test]
fn test_loads_snapshot_written_without_weights() -> Result<()> {
    // Snapshot shape from before weighted retraining existed: token entries
    // carry no weight field and must default to 1.0
    let json = r#"{
        "totalPositiveBits": 1,
        "totalNegativeBits": 1,
        "uniquePositiveBits": 1,
        "uniqueNegativeBits": 1,
        "totalPositiveInputs": 1,
        "totalNegativeInputs": 1,
        "totalInputs": 2,
        "positiveProbability": 0.5,
        "negativeProbability": 0.5,
        "bitClass": {
            "good": {
                "positive": 1, "negative": 0, "count": 1,
                "positiveProbability": 1.0, "negativeProbability": 0.0
            },
            "bad": {
                "positive": 0, "negative": 1, "count": 1,
                "positiveProbability": 0.0, "negativeProbability": 1.0
            }
        }
    }"#;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("legacy.json");
    std::fs::write(&path, json)?;

    let classifier = Classifier::from_snapshot(
        persist::load(&path)?,
        Arc::new(WhitespaceTokenizer::new()),
    )?;

    assert_eq!(classifier.table().get("good").unwrap().weight, 1.0);
    let (label, certainty) = classifier.guess_label("good")?;
    assert!(label);
    assert!(certainty > 0.0);
    Ok(())
}
