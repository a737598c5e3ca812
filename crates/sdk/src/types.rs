use std::fmt::Display;

use alloy::primitives::TxHash;
use chrono::{DateTime, Utc};

/// Instant in chain history the state/event is up to date with.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Eq, Ord, Hash, Default)]
pub struct BlockInstant {
    block_number: u64,
    block_timestamp: u64,
}

impl BlockInstant {
    pub fn new(block_number: u64, block_timestamp: u64) -> Self {
        Self { block_number, block_timestamp }
    }

    pub fn block_number(&self) -> u64 { self.block_number }

    pub fn block_timestamp(&self) -> u64 { self.block_timestamp }

    pub fn next(&self) -> Self {
        Self { block_number: self.block_number + 1, block_timestamp: self.block_timestamp }
    }
}

impl Display for BlockInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ts = DateTime::<Utc>::from_timestamp(self.block_timestamp as i64, 0)
            .unwrap_or_default()
            .format("%Y-%m-%d %H:%M:%S");
        if self.block_number > 0 {
            write!(f, "#{} @ {}", self.block_number, ts)
        } else {
            write!(f, "{}", ts)
        }
    }
}

/// Log context an event was emitted with.
#[derive(Clone, Debug)]
pub struct EventContext<E> {
    tx_hash: TxHash,
    tx_index: u64,
    log_index: u64,
    event: E,
}

impl<E> EventContext<E> {
    pub fn new(tx_hash: TxHash, tx_index: u64, log_index: u64, event: E) -> Self {
        Self { tx_hash, tx_index, log_index, event }
    }

    pub fn tx_hash(&self) -> TxHash { self.tx_hash }

    pub fn tx_index(&self) -> u64 { self.tx_index }

    pub fn log_index(&self) -> u64 { self.log_index }

    pub fn event(&self) -> &E { &self.event }
}

/// Events captured within a single block.
#[derive(Clone, Debug)]
pub struct BlockEvents<E> {
    instant: BlockInstant,
    events: Vec<E>,
}

impl<E> BlockEvents<E> {
    pub fn new(instant: BlockInstant, events: Vec<E>) -> Self { Self { instant, events } }

    pub fn instant(&self) -> BlockInstant { self.instant }

    pub fn events(&self) -> &[E] { &self.events }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::b256;

    use super::*;

    #[test]
    fn test_instant_ordering_follows_block_number() {
        let earlier = BlockInstant::new(10, 1_700_000_000);
        let later = BlockInstant::new(11, 1_700_000_000);
        assert!(earlier < later);
        assert_eq!(earlier.next().block_number(), 11);
    }

    #[test]
    fn test_instant_display_includes_block_and_time() {
        let instant = BlockInstant::new(128, 1_700_000_000);
        assert_eq!(instant.to_string(), "#128 @ 2023-11-14 22:13:20");
    }

    #[test]
    fn test_context_exposes_log_position() {
        let hash = b256!("0x00000000000000000000000000000000000000000000000000000000000000aa");
        let ctx = EventContext::new(hash, 3, 7, "deployed");
        assert_eq!(ctx.tx_hash(), hash);
        assert_eq!(ctx.tx_index(), 3);
        assert_eq!(ctx.log_index(), 7);
        assert_eq!(*ctx.event(), "deployed");
    }
}
