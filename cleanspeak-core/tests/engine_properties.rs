// cleanspeak-core/tests/engine_properties.rs
use anyhow::Result;
use test_log::test;

use cleanspeak_core::{
    FilterAction, FilterConfig, ProfanityEngine, Severity, TextFilter, WordEntry,
};

fn config_with(words: &[(&str, Severity)], action: FilterAction) -> FilterConfig {
    let mut config = FilterConfig::default();
    for (word, severity) in words {
        config.words.push(WordEntry::new(*word, *severity));
    }
    for severity in Severity::ALL {
        config.actions.insert(severity, action);
    }
    config
}

fn engine_with(words: &[(&str, Severity)], action: FilterAction) -> Result<ProfanityEngine> {
    ProfanityEngine::new(config_with(words, action))
}

#[test]
fn case_is_preserved_when_masking() -> Result<()> {
    let engine = engine_with(&[("damn", Severity::Mild)], FilterAction::Mask)?;
    let (filtered, _) = engine.filter_text("This is DAMN annoying", false);
    assert_eq!(filtered, "This is D**N annoying");
    Ok(())
}

#[test]
fn matches_are_boundary_aligned() -> Result<()> {
    let engine = engine_with(&[("ass", Severity::Moderate)], FilterAction::Placeholder)?;
    for clean in ["first class", "an assassin", "grass", "passing", "classy assassins"] {
        assert!(engine.find_matches(clean).is_empty(), "false positive in {:?}", clean);
    }
    let (filtered, stats) = engine.filter_text("you ass!", false);
    assert_eq!(filtered, "you [FILTERED]!");
    assert_eq!(stats.words_matched, 1);
    Ok(())
}

#[test]
fn obfuscated_spellings_resolve_to_the_same_word() -> Result<()> {
    let engine = engine_with(&[("fuck", Severity::Moderate)], FilterAction::Mask)?;
    let literal = engine.find_matches("fuck");
    assert_eq!(literal.len(), 1);

    for spelling in ["f@ck", "fuuuck", "f4ck", "FuCk", "F@@@CK", "phuck", "PHUCK", "fuxx"] {
        let matches = engine.find_matches(spelling);
        assert_eq!(matches.len(), 1, "no match for {:?}", spelling);
        assert_eq!(matches[0].word, literal[0].word);
        assert_eq!(matches[0].severity, literal[0].severity);
        assert_eq!(matches[0].matched_text, spelling);
    }
    assert_eq!(engine.filter_text("what the fuuuck", false).0, "what the f****k");
    assert_eq!(engine.filter_text("phuck off", false).0, "p***k off");
    Ok(())
}

#[test]
fn stretched_double_letters_are_filtered() -> Result<()> {
    let engine = engine_with(
        &[("ass", Severity::Moderate), ("asshole", Severity::Severe), ("pussy", Severity::Severe)],
        FilterAction::Placeholder,
    )?;
    assert_eq!(engine.filter_text("you asssss", false).0, "you [FILTERED]");
    assert_eq!(engine.filter_text("what an asssshole!", false).0, "what an [FILTERED]!");
    assert_eq!(engine.filter_text("pusssy", false).0, "[FILTERED]");
    let matches = engine.find_matches("asssshole");
    assert_eq!(matches[0].word, "asshole");
    assert_eq!(matches[0].severity, Severity::Severe);
    Ok(())
}

#[test]
fn obscured_digits_may_read_as_another_vowel() -> Result<()> {
    // Accepted false positive: a zero could hide any vowel, so "sh0t" reads as "shit".
    let engine = engine_with(&[("shit", Severity::Moderate)], FilterAction::Placeholder)?;
    assert_eq!(engine.filter_text("sh0t", false).0, "[FILTERED]");
    assert!(engine.find_matches("shot").is_empty());
    Ok(())
}

#[test]
fn longest_match_wins() -> Result<()> {
    let engine = engine_with(
        &[("ass", Severity::Moderate), ("asshole", Severity::Severe)],
        FilterAction::Placeholder,
    )?;
    let matches = engine.find_matches("you asshole");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].word, "asshole");
    assert_eq!(matches[0].severity, Severity::Severe);
    assert_eq!((matches[0].start, matches[0].end), (4, 11));
    Ok(())
}

#[test]
fn statistics_are_consistent_and_resettable() -> Result<()> {
    let engine = engine_with(
        &[("damn", Severity::Mild), ("shit", Severity::Moderate), ("cunt", Severity::Severe)],
        FilterAction::Mask,
    )?;

    let inputs = ["damn this shit", "", "nothing to see", "CUNT damn d@mn $hit"];
    for input in inputs {
        engine.reset_statistics();
        let (_, stats) = engine.filter_text(input, false);
        assert_eq!(stats.by_severity.total(), stats.words_matched, "input {:?}", input);

        let totals = engine.statistics();
        assert_eq!(totals.words_processed, stats.words_processed);
        assert_eq!(totals.words_filtered, stats.words_matched);
    }

    engine.reset_statistics();
    engine.filter_text("damn damn", false);
    engine.filter_text("shit happens", true);
    let totals = engine.statistics();
    assert_eq!(totals.words_processed, 4);
    assert_eq!(totals.words_filtered, 3);
    assert_eq!(totals.filter_rate_percent, 75.0);
    assert_eq!(totals.by_severity.mild, 2);
    assert_eq!(totals.by_severity.moderate, 1);
    Ok(())
}

#[test]
fn custom_replacement_beats_the_action() -> Result<()> {
    let mut config = config_with(&[("shit", Severity::Moderate)], FilterAction::Remove);
    config.custom_replacements.insert("shit".to_string(), "shoot".to_string());
    let engine = ProfanityEngine::new(config)?;

    assert_eq!(engine.filter_text("shit", false).0, "shoot");
    assert_eq!(engine.filter_text("oh $h1t!", true).0, "oh shoot!");
    Ok(())
}

#[test]
fn remove_and_placeholder_are_idempotent() -> Result<()> {
    for action in [FilterAction::Remove, FilterAction::Placeholder] {
        let engine = engine_with(
            &[("damn", Severity::Mild), ("fuck", Severity::Moderate)],
            action,
        )?;
        let (once, _) = engine.filter_text("Damn, f@ck this fuuuck", false);
        assert!(engine.find_matches(&once).is_empty(), "{:?} left matches in {:?}", action, once);
        let (twice, stats) = engine.filter_text(&once, false);
        assert_eq!(twice, once);
        assert_eq!(stats.words_matched, 0);
    }
    Ok(())
}

#[test]
fn filtering_is_deterministic() -> Result<()> {
    let engine = ProfanityEngine::with_defaults()?;
    engine.set_action(Severity::Moderate, FilterAction::Mask)?;
    let input = "What the F@CK, you b1tch. Damn it all to hell!";
    let first = engine.render(input);
    for _ in 0..10 {
        assert_eq!(engine.render(input).console, first.console);
        assert_eq!(engine.render(input).plain, first.plain);
    }
    Ok(())
}

#[test]
fn unconfigured_severity_falls_back_to_placeholder() -> Result<()> {
    let mut config = FilterConfig::default();
    config.words.push(WordEntry::new("heck", Severity::Mild));
    let engine = ProfanityEngine::new(config)?;
    assert_eq!(engine.filter_text("heck no", true).0, "[FILTERED] no");
    Ok(())
}

#[test]
fn failed_reload_keeps_previous_lexicon() -> Result<()> {
    let engine = engine_with(&[("damn", Severity::Mild)], FilterAction::Mask)?;
    let mut broken = FilterConfig::default();
    broken.words.push(WordEntry::new("", Severity::Mild));

    assert!(engine.reload(broken).is_err());
    assert_eq!(engine.filter_text("damn", false).0, "d**n");

    engine.reload(config_with(&[("heck", Severity::Mild)], FilterAction::Flag))?;
    assert_eq!(engine.filter_text("damn heck", false).0, "damn heck[!]");
    Ok(())
}

#[test]
fn unicode_text_is_preserved() -> Result<()> {
    let engine = engine_with(&[("damn", Severity::Mild)], FilterAction::Mask)?;
    let (filtered, stats) = engine.filter_text("¡Qué DAMN día! 日本", false);
    assert_eq!(filtered, "¡Qué D**N día! 日本");
    assert_eq!(stats.words_processed, 4);
    Ok(())
}
