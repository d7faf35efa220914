use anyhow::Result;
use patmatch::search::{build_matcher, search_many};
use patmatch::{
    cache, Algorithm, BoyerMooreMatcher, BruteForceMatcher, KmpMatcher, PatternMatcher,
    RabinKarpMatcher, SearchConfig, SearchError,
};
use proptest::prelude::*;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

const ABRACADABRA_TEXT: &str = "abacadabrabracabracadabrabrabracad";

fn all_matchers(pattern: &str) -> Vec<Box<dyn PatternMatcher>> {
    vec![
        Box::new(BruteForceMatcher::new(pattern)),
        Box::new(KmpMatcher::new(pattern)),
        Box::new(BoyerMooreMatcher::new(pattern)),
        Box::new(RabinKarpMatcher::new(pattern)),
    ]
}

fn assert_all(pattern: &str, text: &str, expected: Option<usize>) {
    for matcher in all_matchers(pattern) {
        assert_eq!(
            matcher.search(text),
            expected,
            "{} searching {:?} in {:?}",
            matcher.algorithm(),
            pattern,
            text
        );
    }
}

#[test]
fn test_concrete_scenarios() {
    assert_all("abc", "xxabcxx", Some(2));
    assert_all("abc", "xxxxxxx", None);
    assert_all("aaa", "aaaa", Some(0));
    assert_all("rab", ABRACADABRA_TEXT, Some(8));
    assert_all("zzz", "", None);
    assert_all("a", "a", Some(0));
}

#[test]
fn test_classic_examples() {
    assert_all("abracadabra", ABRACADABRA_TEXT, Some(14));
    assert_all("bcara", ABRACADABRA_TEXT, None);
    assert_all("rabrabracad", ABRACADABRA_TEXT, Some(23));
    assert_all("abacad", ABRACADABRA_TEXT, Some(0));
    assert_all("THEM", "THETHEYTHYTHEMEM", Some(10));
}

#[test]
fn test_pattern_longer_than_text() {
    assert_all("abcd", "abc", None);
    assert_all("aa", "a", None);
}

#[test]
fn test_full_text_match() {
    assert_all("abracadabra", "abracadabra", Some(0));
}

#[test]
fn test_only_first_occurrence_is_reported() {
    assert_all("ab", "xxabyyabzzab", Some(2));
    assert_all("aa", "baaaaa", Some(1));
}

#[test]
fn test_empty_pattern_matches_at_zero() {
    assert_all("", "", Some(0));
    assert_all("", "anything", Some(0));
}

#[test]
fn test_unicode_symbols() {
    assert_all("ñá", "españáñá", Some(4));
    assert_all("🦀", "rust 🦀 crab", Some(5));
}

#[test]
fn test_from_utf8() -> Result<()> {
    let matcher = KmpMatcher::from_utf8("rab".as_bytes())?;
    assert_eq!(matcher.search(ABRACADABRA_TEXT), Some(8));

    let err = RabinKarpMatcher::from_utf8(&[0x61, 0xff, 0x62]).unwrap_err();
    assert!(matches!(err, SearchError::InvalidPattern(_)));
    Ok(())
}

#[test]
fn test_repeated_searches_match_fresh_matchers() {
    let texts = ["xxabcxx", "abc", "", "ababcabc", "xyz", "abcabcabc"];
    for algorithm in Algorithm::ALL {
        let reused = build_matcher(algorithm, "abc");
        for text in texts {
            let fresh = build_matcher(algorithm, "abc");
            assert_eq!(reused.search(text), fresh.search(text), "{algorithm} on {text:?}");
        }
        // And again in reverse order
        for text in texts.iter().rev() {
            let fresh = build_matcher(algorithm, "abc");
            assert_eq!(reused.search(text), fresh.search(text));
        }
    }
}

#[test]
fn test_matchers_shared_across_threads() {
    let texts: Vec<String> = (0..32)
        .map(|i| format!("{}rab{}", "ca".repeat(i), ABRACADABRA_TEXT))
        .collect();

    for algorithm in Algorithm::ALL {
        let matcher = build_matcher(algorithm, "rab");
        let expected: Vec<Option<usize>> = texts.iter().map(|t| matcher.search(t)).collect();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let matcher = Arc::clone(&matcher);
                let texts = texts.clone();
                thread::spawn(move || texts.iter().map(|t| matcher.search(t)).collect::<Vec<_>>())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}

#[test]
fn test_search_many_matches_sequential() -> Result<()> {
    let texts: Vec<String> = (0..500)
        .map(|i| {
            if i % 3 == 0 {
                format!("{}abracadabra", "ab".repeat(i % 17))
            } else {
                "abracadabr".repeat(i % 5)
            }
        })
        .collect();

    for algorithm in Algorithm::ALL {
        let matcher = build_matcher(algorithm, "abracadabra");
        let sequential: Vec<Option<usize>> = texts.iter().map(|t| matcher.search(t)).collect();
        let parallel = search_many(matcher.as_ref(), &texts, NonZeroUsize::new(4).unwrap())?;
        assert_eq!(parallel, sequential, "{algorithm}");
    }
    Ok(())
}

#[test]
fn test_rabin_karp_never_reports_colliding_windows() {
    // "Aa" and "BB" hash the same, so does every concatenation of them
    let pattern = "AaBBAaAaBBAaBBBBAaAaAaBB";
    let text: String = pattern
        .as_bytes()
        .chunks(2)
        .map(|pair| if pair == b"Aa" { "BB" } else { "Aa" })
        .collect();

    let matcher = RabinKarpMatcher::new(pattern);
    let (found, stats) = matcher.search_with_stats(&text);
    assert_eq!(found, None);
    assert!(stats.spurious_hits >= 1);
    assert_eq!(BruteForceMatcher::new(pattern).search(&text), None);
}

#[test]
fn test_engine_report() -> Result<()> {
    let config = SearchConfig {
        pattern: "abc".to_string(),
        text: "xxabcxx".to_string(),
        algorithms: Algorithm::ALL.to_vec(),
        thread_count: NonZeroUsize::new(2).unwrap(),
        log_level: "warn".to_string(),
    };

    let report = patmatch::search(&config)?;
    assert_eq!(report.agreed_index(), Some(Some(2)));
    assert_eq!(
        report.render(&report.outcomes[0]),
        "text:       xxabcxx\npattern:      abc\n"
    );
    Ok(())
}

#[test]
fn test_cache_clear() {
    let metrics = patmatch::metrics::SearchMetrics::new();
    let _ = cache::cached_matcher(Algorithm::Kmp, "cache-clear-pattern", &metrics);
    assert!(cache::len() >= 1);

    cache::clear();

    let matcher = cache::cached_matcher(Algorithm::Kmp, "cache-clear-pattern", &metrics);
    assert_eq!(metrics.cache_misses(), 2);
    assert_eq!(matcher.search("xcache-clear-pattern"), Some(1));
}

#[test]
fn test_searching_many_patterns_keeps_cache_bounded() -> Result<()> {
    let mut config = SearchConfig {
        pattern: String::new(),
        text: ABRACADABRA_TEXT.to_string(),
        algorithms: Algorithm::ALL.to_vec(),
        thread_count: NonZeroUsize::MIN,
        log_level: "warn".to_string(),
    };

    let rounds = cache::MAX_CACHED_MATCHERS / 2;
    for i in 0..rounds {
        config.pattern = format!("distinct-pattern-{}", i);
        let report = patmatch::search(&config)?;
        assert_eq!(report.agreed_index(), Some(None));
    }

    // A few entries of slack for tests running alongside
    assert!(
        cache::len() <= cache::MAX_CACHED_MATCHERS + 8,
        "cache grew to {}",
        cache::len()
    );
    Ok(())
}

proptest! {
    #[test]
    fn prop_agrees_with_brute_force(
        pattern in "[abc]{0,6}",
        text in "[abc]{0,40}",
    ) {
        let expected = BruteForceMatcher::new(&pattern).search(&text);
        prop_assert_eq!(expected, text.find(pattern.as_str()));

        prop_assert_eq!(KmpMatcher::new(&pattern).search(&text), expected);
        prop_assert_eq!(BoyerMooreMatcher::new(&pattern).search(&text), expected);
        prop_assert_eq!(RabinKarpMatcher::new(&pattern).search(&text), expected);
    }

    #[test]
    fn prop_long_patterns_agree(
        prefix in "[ab]{0,60}",
        pattern in "[ab]{13,30}",
        suffix in "[ab]{0,60}",
    ) {
        // Long enough for the Rabin-Karp hash to wrap
        let text = format!("{prefix}{pattern}{suffix}");
        let expected = BruteForceMatcher::new(&pattern).search(&text);
        prop_assert!(expected.is_some());

        prop_assert_eq!(KmpMatcher::new(&pattern).search(&text), expected);
        prop_assert_eq!(BoyerMooreMatcher::new(&pattern).search(&text), expected);
        prop_assert_eq!(RabinKarpMatcher::new(&pattern).search(&text), expected);
    }

    #[test]
    fn prop_stats_do_not_change_results(
        pattern in "[xyz]{1,5}",
        text in "[xyz]{0,30}",
    ) {
        for algorithm in Algorithm::ALL {
            let matcher = build_matcher(algorithm, &pattern);
            let (with_stats, _) = matcher.search_with_stats(&text);
            prop_assert_eq!(with_stats, matcher.search(&text));
        }
    }
}
