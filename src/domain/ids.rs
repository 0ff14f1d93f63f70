//! Order id allocation

use std::sync::atomic::{AtomicU64, Ordering};

/// Ever-incrementing source of order ids.
///
/// One generator is shared by every user placing orders in a context, so ids
/// are unique across users and never reused. Tests build their own to stay
/// isolated from each other.
#[derive(Debug)]
pub struct OrderIdGenerator {
    next: AtomicU64,
}

impl OrderIdGenerator {
    pub const FIRST_ID: u64 = 1;

    pub fn new() -> Self { Self::starting_at(Self::FIRST_ID) }
    pub fn starting_at(first: u64) -> Self { Self { next: AtomicU64::new(first) } }

    pub fn next_id(&self) -> u64 { self.next.fetch_add(1, Ordering::SeqCst) }

    /// Id the next call to `next_id` will hand out.
    pub fn peek(&self) -> u64 { self.next.load(Ordering::SeqCst) }
}

impl Default for OrderIdGenerator {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_ids_start_at_one_and_increment() {
        let ids = OrderIdGenerator::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
        assert_eq!(ids.peek(), 3);
    }
    #[test]
    fn test_custom_start() {
        let ids = OrderIdGenerator::starting_at(1000);
        assert_eq!(ids.next_id(), 1000);
    }
    #[test]
    fn test_unique_across_threads() {
        let ids = std::sync::Arc::new(OrderIdGenerator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let ids = ids.clone();
                std::thread::spawn(move || (0..100).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();
        let mut all: Vec<u64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 400);
    }
}
