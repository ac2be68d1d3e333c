// cleanspeak-core/tests/concurrency_tests.rs
use anyhow::Result;
use std::sync::Arc;
use std::thread;

use cleanspeak_core::{FilterAction, FilterConfig, ProfanityEngine, Severity, TextFilter, WordEntry};

fn config(word: &str, action: FilterAction) -> FilterConfig {
    let mut config = FilterConfig::default();
    config.words.push(WordEntry::new(word, Severity::Mild));
    config.actions.insert(Severity::Mild, action);
    config
}

#[test]
fn concurrent_callers_do_not_lose_statistics() -> Result<()> {
    let engine = Arc::new(ProfanityEngine::new(config("damn", FilterAction::Mask))?);
    const THREADS: u64 = 8;
    const CALLS: u64 = 200;

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..CALLS {
                    let (filtered, _) = engine.filter_text("well damn it", false);
                    assert_eq!(filtered, "well d**n it");
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let totals = engine.statistics();
    assert_eq!(totals.words_processed, THREADS * CALLS * 3);
    assert_eq!(totals.words_filtered, THREADS * CALLS);
    assert_eq!(totals.by_severity.mild, THREADS * CALLS);
    Ok(())
}

#[test]
fn readers_see_whole_snapshots_during_reload() -> Result<()> {
    // Either "alpha" or "omega" is registered, never both and never neither.
    let alpha = config("alpha", FilterAction::Placeholder);
    let omega = config("omega", FilterAction::Placeholder);
    let engine = Arc::new(ProfanityEngine::new(alpha.clone())?);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..500 {
                    let matches = engine.find_matches("alpha omega");
                    assert_eq!(matches.len(), 1);
                }
            })
        })
        .collect();

    for i in 0..100 {
        let next = if i % 2 == 0 { omega.clone() } else { alpha.clone() };
        engine.reload(next)?;
    }

    for reader in readers {
        reader.join().expect("reader panicked");
    }
    Ok(())
}

#[test]
fn concurrent_mutators_are_serialized() -> Result<()> {
    let engine = Arc::new(ProfanityEngine::new(config("seed", FilterAction::Flag))?);
    let words: Vec<String> = (0..16).map(|i| format!("word{}x", (b'a' + i as u8) as char)).collect();

    let handles: Vec<_> = words
        .iter()
        .cloned()
        .map(|word| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.add_word(&word, Severity::Moderate))
        })
        .collect();
    for handle in handles {
        handle.join().expect("mutator panicked")?;
    }

    for word in &words {
        assert!(engine.contains_profanity(word), "{} was lost", word);
    }
    assert_eq!(engine.lexicon().word_count(), words.len() + 1);
    Ok(())
}
