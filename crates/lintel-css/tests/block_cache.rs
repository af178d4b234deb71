//! Integration tests for incremental re-parsing with a block cache.

use lintel_css::{BlockCache, CacheConfig, ParseReport, Parser};

const SHEET: &str = "\
body { margin: 0; font-family: sans-serif }
.header { display: flex; padding: 8px 16px }
.header > a:hover { color: #336699; text-decoration: underline }
@media (min-width: 600px) {
  .header { padding: 16px 32px }
}
.footer { border-top: 1px solid #ccc; color: gray }
";

fn cached(cache: &mut BlockCache, css: &str) -> ParseReport {
    Parser::new().parse_with_cache(css, cache).unwrap()
}

fn full(css: &str) -> ParseReport {
    Parser::new().parse(css).unwrap()
}

#[test]
fn cached_reparse_is_identical() {
    let mut cache = BlockCache::new();
    let first = cached(&mut cache, SHEET);
    let second = cached(&mut cache, SHEET);
    let reference = full(SHEET);

    assert_eq!(first.events, reference.events);
    assert_eq!(second.events, reference.events);
    assert_eq!(first.stats.blocks_recorded, 5);
    assert_eq!(second.stats.cache_hits, 5);
    assert_eq!(second.stats.cache_misses, 0);
}

#[test]
fn cached_reparse_scans_fewer_tokens() {
    let mut cache = BlockCache::new();
    let first = cached(&mut cache, SHEET);
    let second = cached(&mut cache, SHEET);
    assert!(
        second.stats.tokens * 2 < first.stats.tokens,
        "{} vs {}",
        second.stats.tokens,
        first.stats.tokens
    );
}

#[test]
fn edit_invalidates_one_block() {
    let mut cache = BlockCache::new();
    cached(&mut cache, SHEET);

    let edited = SHEET.replace("color: gray", "color: black");
    let report = cached(&mut cache, &edited);
    assert_eq!(report.stats.cache_misses, 1);
    assert_eq!(report.stats.cache_hits, 4);
    assert_eq!(report.events, full(&edited).events);
}

#[test]
fn inserted_lines_shift_replayed_rules() {
    let mut cache = BlockCache::new();
    cached(&mut cache, SHEET);

    let edited = format!("/* banner */\n\n  .intro {{ top: 0 }}\n{SHEET}");
    let report = cached(&mut cache, &edited);
    assert_eq!(report.stats.cache_misses, 1);
    assert_eq!(report.stats.cache_hits, 5);
    assert_eq!(report.events, full(&edited).events);
}

#[test]
fn rules_moved_within_a_line_shift_columns() {
    let mut cache = BlockCache::new();
    cached(&mut cache, "a { top: 0 } b { left: 0 }");
    let edited = "b { left: 0 } a { top: 0 }";
    let report = cached(&mut cache, edited);
    assert_eq!(report.stats.cache_hits, 2);
    assert_eq!(report.events, full(edited).events);
}

#[test]
fn rules_with_errors_are_replayed_with_their_messages() {
    let css = "a { color: #ggg }\nb { top: 0 }\n";
    let mut cache = BlockCache::new();
    cached(&mut cache, css);
    let edited = format!("\n{css}");
    let report = cached(&mut cache, &edited);
    assert_eq!(report.stats.cache_hits, 2);
    assert_eq!(report.events, full(&edited).events);
    assert_eq!(report.of_type(lintel_css::EventType::Warning).count(), 1);
}

#[test]
fn stale_blocks_are_trimmed() {
    let config = CacheConfig {
        max_age: std::time::Duration::ZERO,
        ..CacheConfig::default()
    };
    let mut cache = BlockCache::with_config(config);
    cached(&mut cache, "a { top: 0 }");
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.trim(), 1);
    assert!(cache.is_empty());
}
