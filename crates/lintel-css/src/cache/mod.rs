//! Incremental block cache.
//!
//! A [`BlockCache`] remembers the events of top-level style rules, keyed by
//! their source text up to and including the opening `{`. When the same
//! rule text shows up again in a later parse, possibly at another position,
//! its events are replayed with shifted positions instead of re-scanning
//! the rule.
//!
//! Blocks are grouped into generations, one per parse. A block stored by an
//! earlier parse is taken over by the first matching rule of the current
//! parse; further matches of the same text within one parse replay a copy.

mod shift;

pub use shift::{Delta, ShiftPositions};

use std::collections::HashMap;
use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;
use crate::parser::Event;
use crate::reader::Position;

new_key_type! {
    /// Handle of a cached block.
    pub struct BlockId;
}

/// Cache tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Blocks older than this are evicted by [`BlockCache::trim`].
    pub max_age: Duration,
    /// Minimum interval between the automatic trims run at parse start.
    pub trim_delay: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_age: Duration::from_secs(10 * 60),
            trim_delay: Duration::from_secs(10),
        }
    }
}

/// Cumulative cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub stored: u64,
    /// Hits that moved a block from an earlier generation.
    pub taken_over: u64,
    pub evicted: u64,
}

#[derive(Debug, Clone)]
struct CachedBlock {
    /// Source text from the rule start through its closing `}`.
    text: String,
    start: Position,
    /// Position just after the closing `}`.
    end: Position,
    generation: u64,
    stamp: Instant,
    events: Vec<Event>,
    /// No messages were reported inside the block.
    clean: bool,
}

impl CachedBlock {
    fn contains(&self, pos: Position) -> bool {
        let at = (pos.line, pos.col);
        (self.start.line, self.start.col) <= at && at <= (self.end.line, self.end.col)
    }
}

/// Events of a cache hit, already moved to the requested position.
#[derive(Debug, Clone, PartialEq)]
pub struct Replay {
    pub events: Vec<Event>,
    /// Where parsing resumes.
    pub end: Position,
    /// The block produced no messages last time. Only counted in
    /// `ParseStats::clean_hits`.
    pub clean: bool,
}

/// Cache of parsed style rules, shared across parses of evolving text.
///
/// # Example
///
/// ```
/// use lintel_css::cache::BlockCache;
/// use lintel_css::parser::Parser;
///
/// let mut cache = BlockCache::new();
/// let mut parser = Parser::new();
/// parser.parse_with_cache("a { color: red }", &mut cache).unwrap();
/// let report = parser
///     .parse_with_cache("b { top: 0 }\na { color: red }", &mut cache)
///     .unwrap();
/// assert_eq!(report.stats.cache_hits, 1);
/// ```
#[derive(Debug, Clone)]
pub struct BlockCache {
    config: CacheConfig,
    blocks: SlotMap<BlockId, CachedBlock>,
    keys: HashMap<String, Vec<BlockId>>,
    generation: u64,
    now: Instant,
    last_trim: Option<Instant>,
    stats: CacheStats,
}

impl Default for BlockCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Source text from `start` through the next `{`.
fn block_key(source: &str, start: usize) -> Option<&str> {
    let rest = source.get(start..)?;
    let brace = rest.find('{')?;
    Some(&rest[..=brace])
}

/// Whether the stored `text` starts `input`. The cheap byte probes reject
/// most mismatches before the full comparison.
fn text_matches(text: &str, key: &str, input: &str) -> bool {
    let (t, i) = (text.as_bytes(), input.as_bytes());
    let k = key.len();
    if k == 0 || t.len() < k || t.len() > i.len() {
        return false;
    }
    t[0] == i[0]
        && t[k - 1] == i[k - 1]
        && t[t.len() - 1] == i[t.len() - 1]
        && t.starts_with(key.as_bytes())
        && i.starts_with(t)
}

impl BlockCache {
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            config,
            blocks: SlotMap::with_key(),
            keys: HashMap::new(),
            generation: 0,
            now: Instant::now(),
            last_trim: None,
            stats: CacheStats::default(),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Start a new parse generation at time `now`. Trims stale blocks when
    /// the last trim is older than the configured delay.
    pub fn begin(&mut self, now: Instant) {
        self.generation += 1;
        self.now = now;
        let due = self
            .last_trim
            .is_none_or(|last| now.saturating_duration_since(last) >= self.config.trim_delay);
        if due {
            self.trim_at(now);
        }
        tracing::debug!(target: targets::CACHE, generation = self.generation, blocks = self.len(), "begin parse");
    }

    /// Look up a block whose text starts `source` at `start`.
    pub fn find(&mut self, source: &str, start: Position) -> Option<Replay> {
        let key = block_key(source, start.offset)?;
        let input = &source[start.offset..];
        let current = self.generation;
        let found = self.keys.get(key).and_then(|ids| {
            let candidates = ids
                .iter()
                .copied()
                .filter(|id| text_matches(&self.blocks[*id].text, key, input));
            let distance = |id: &BlockId| self.blocks[*id].start.offset.abs_diff(start.offset);
            let (older, same): (Vec<_>, Vec<_>) =
                candidates.partition(|id| self.blocks[*id].generation != current);
            older
                .iter()
                .min_by_key(|id| (self.blocks[**id].generation, distance(*id)))
                .map(|id| (*id, true))
                .or_else(|| same.iter().min_by_key(|id| distance(*id)).map(|id| (*id, false)))
        });
        let Some((id, take_over)) = found else {
            self.stats.misses += 1;
            tracing::trace!(target: targets::CACHE, line = start.line, col = start.col, "cache miss");
            return None;
        };

        let block = &mut self.blocks[id];
        let delta = Delta::between(block.start, start);
        let replay = if take_over {
            block.events.shift_positions(&delta);
            block.start = start;
            block.end = delta.apply(block.end);
            block.generation = current;
            block.stamp = self.now;
            self.stats.taken_over += 1;
            Replay {
                events: block.events.clone(),
                end: block.end,
                clean: block.clean,
            }
        } else {
            let mut events = block.events.clone();
            events.shift_positions(&delta);
            Replay {
                events,
                end: delta.apply(block.end),
                clean: block.clean,
            }
        };
        self.stats.hits += 1;
        tracing::trace!(
            target: targets::CACHE,
            ?id,
            take_over,
            line = start.line,
            col = start.col,
            events = replay.events.len(),
            "cache hit"
        );
        Some(replay)
    }

    /// Store the events of the block spanning `start..end` of `source`.
    pub fn store(&mut self, source: &str, start: Position, end: Position, events: Vec<Event>) {
        let Some(key) = block_key(source, start.offset) else {
            return;
        };
        let Some(text) = source.get(start.offset..end.offset) else {
            return;
        };
        if text.len() < key.len() {
            return;
        }
        let id = self.blocks.insert(CachedBlock {
            text: text.to_string(),
            start,
            end,
            generation: self.generation,
            stamp: self.now,
            events,
            clean: false,
        });
        self.keys.entry(key.to_string()).or_default().push(id);
        self.stats.stored += 1;
        tracing::trace!(target: targets::CACHE, ?id, line = start.line, col = start.col, "stored block");
    }

    /// Evict stale blocks now.
    pub fn trim(&mut self) -> usize {
        self.trim_at(Instant::now())
    }

    /// Evict blocks older than the maximum age at time `now`.
    ///
    /// Of each key's stale blocks, those from earlier generations among
    /// the oldest half of the key's entries are kept. Returns the number
    /// of evicted blocks.
    pub fn trim_at(&mut self, now: Instant) -> usize {
        let max_age = self.config.max_age;
        let current = self.generation;
        let blocks = &mut self.blocks;
        let mut evicted = 0;
        self.keys.retain(|_, ids| {
            ids.sort_by_key(|id| blocks[*id].stamp);
            let half = ids.len() / 2;
            let mut index = 0;
            ids.retain(|id| {
                let block = &blocks[*id];
                let keep = now.saturating_duration_since(block.stamp) < max_age
                    || (block.generation != current && index < half);
                index += 1;
                if !keep {
                    blocks.remove(*id);
                    evicted += 1;
                }
                keep
            });
            !ids.is_empty()
        });
        self.last_trim = Some(now);
        self.stats.evicted += evicted as u64;
        if evicted > 0 {
            tracing::debug!(target: targets::CACHE, evicted, remaining = self.blocks.len(), "trimmed cache");
        }
        evicted
    }

    /// Mark blocks of the current generation that contain none of the
    /// message `positions` as clean.
    ///
    /// The flag is statistics only: clean and dirty blocks replay the same
    /// events, and the hit shows up in `ParseStats::clean_hits`.
    pub fn feedback(&mut self, positions: &[Position]) {
        let current = self.generation;
        let mut marked = 0usize;
        for block in self.blocks.values_mut() {
            if block.generation != current || block.events.is_empty() {
                continue;
            }
            block.clean = !positions.iter().any(|pos| block.contains(*pos));
            marked += usize::from(block.clean);
        }
        tracing::trace!(target: targets::CACHE, marked, "applied message feedback");
    }

    /// Drop every block.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of parses started with this cache.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Number of blocks known to produce no messages.
    pub fn clean_count(&self) -> usize {
        self.blocks.values().filter(|b| b.clean).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{ParseReport, Parser};

    fn parse(cache: &mut BlockCache, css: &str) -> ParseReport {
        Parser::new().parse_with_cache(css, cache).unwrap()
    }

    #[test]
    fn test_block_key() {
        assert_eq!(block_key("x a > b { c: d }", 2), Some("a > b {"));
        assert_eq!(block_key("a b", 0), None);
    }

    #[test]
    fn test_text_matches() {
        let text = "a { b: c }";
        assert!(text_matches(text, "a {", "a { b: c } d { }"));
        assert!(!text_matches(text, "a {", "a { b: x }"));
        assert!(!text_matches(text, "a {", "a { b: c"));
    }

    #[test]
    fn test_store_and_find() {
        let mut cache = BlockCache::new();
        let first = parse(&mut cache, "a { color: red }");
        assert_eq!(first.stats.blocks_recorded, 1);
        assert_eq!(cache.len(), 1);

        let source = "\n  a { color: red }";
        cache.begin(Instant::now());
        let replay = cache.find(source, Position::new(2, 3, 3)).unwrap();
        assert_eq!(replay.end, Position::new(2, 19, source.len()));
        assert_eq!(replay.events[0].pos, Position::new(2, 3, 3));
        assert!(!replay.clean);
        assert_eq!(cache.stats().taken_over, 1);
        assert!(cache.find(source, Position::new(1, 1, 0)).is_none());
    }

    #[test]
    fn test_same_generation_copies() {
        let mut cache = BlockCache::new();
        parse(&mut cache, "a { top: 0 }");
        let report = parse(&mut cache, "a { top: 0 }\na { top: 0 }");
        assert_eq!(report.stats.cache_hits, 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().taken_over, 1);
        assert_eq!(report.events, Parser::new().parse("a { top: 0 }\na { top: 0 }").unwrap().events);
    }

    #[test]
    fn test_empty_rules_not_stored() {
        let mut cache = BlockCache::new();
        let report = parse(&mut cache, "a {} b { top: 0 }");
        assert_eq!(report.stats.blocks_recorded, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_trim_keeps_older_half() {
        let config = CacheConfig {
            max_age: Duration::from_secs(60),
            trim_delay: Duration::from_secs(3600),
        };
        let mut cache = BlockCache::with_config(config);
        for value in 0..4 {
            parse(&mut cache, &format!("a {{ top: {value} }}"));
        }
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.trim_at(Instant::now()), 0);

        let later = Instant::now() + Duration::from_secs(3600);
        assert_eq!(cache.trim_at(later), 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evicted, 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_feedback_marks_clean_blocks() {
        let mut cache = BlockCache::new();
        let css = "a { color: #ggg }\nb { top: 0 }";
        let first = parse(&mut cache, css);
        let positions = first.message_positions();
        assert_eq!(positions.len(), 1);
        cache.feedback(&positions);
        assert_eq!(cache.clean_count(), 1);

        let second = parse(&mut cache, css);
        assert_eq!(second.stats.cache_hits, 2);
        assert_eq!(second.stats.clean_hits, 1);
        assert_eq!(second.events, first.events);
    }
}
