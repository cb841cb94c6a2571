//! Bump-pointer string pool.
//!
//! Serves many small string copies out of coarse byte blocks with a
//! single forward cursor, and frees everything at once when dropped.
//! Stored strings are addressed by [`PoolStr`] handles into the owning
//! block rather than by independently owned allocations.

use super::error::{CedictError, Result};

/// Smallest usable capacity for a fresh block.
const MIN_BLOCK: usize = 32_000;
/// Largest single string the pool will accept.
const MAX_ALLOC: usize = 1024 * 1024;
/// Block sizes are rounded up to this unit.
const GRANULARITY: usize = 64 * 1024;

/// Handle to a string stored in a [`StringPool`].
///
/// Only meaningful to the pool that minted it; resolving a handle
/// against a different pool may panic or return unrelated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStr {
    block: u32,
    offset: u32,
    len: u32,
}

struct Block {
    data: Box<[u8]>,
    used: usize,
}

impl Block {
    fn remaining(&self) -> usize {
        self.data.len() - self.used
    }
}

/// Bump-pointer allocator over a growable list of byte blocks.
///
/// Only the newest block receives allocations; filled blocks are
/// retained untouched until the whole pool drops, so handles stay valid
/// for the pool's lifetime. Total retained memory never shrinks.
pub struct StringPool {
    blocks: Vec<Block>,
    min_block: usize,
    max_alloc: usize,
}

impl StringPool {
    pub fn new() -> Self {
        Self::with_limits(MIN_BLOCK, MAX_ALLOC)
    }

    /// Pool with an explicit block-size floor and single-allocation
    /// ceiling. Used by tests to force block growth with small inputs.
    pub fn with_limits(min_block: usize, max_alloc: usize) -> Self {
        Self {
            blocks: Vec::new(),
            min_block,
            max_alloc,
        }
    }

    /// Copy `s` into the pool and return a handle to it.
    ///
    /// The fast path bumps the current block's cursor without touching
    /// the system allocator. When the current block is too full, a new
    /// block of `max(min_block, needed)` bytes, rounded up to the
    /// allocation granularity, becomes current and the copy lands there.
    /// One terminator byte is reserved after the copy (excluded from the
    /// handle's length), so even an empty string consumes a byte.
    ///
    /// # Errors
    /// [`CedictError::Allocation`] if `s` alone exceeds the pool's
    /// single-allocation ceiling. The pool stays valid and keeps serving
    /// smaller requests afterwards.
    pub fn alloc(&mut self, s: &str) -> Result<PoolStr> {
        let needed = s.len() + 1;
        let fits = self
            .blocks
            .last()
            .is_some_and(|block| block.remaining() >= needed);
        if !fits {
            if s.len() > self.max_alloc {
                return Err(CedictError::Allocation {
                    requested: s.len(),
                    max: self.max_alloc,
                });
            }
            self.grow(needed);
        }

        // A current block with room for `needed` bytes exists from here.
        let index = self.blocks.len() - 1;
        let block = &mut self.blocks[index];
        let offset = block.used;
        block.data[offset..offset + s.len()].copy_from_slice(s.as_bytes());
        block.data[offset + s.len()] = 0;
        block.used += needed;

        Ok(PoolStr {
            block: index as u32,
            offset: offset as u32,
            len: s.len() as u32,
        })
    }

    /// Resolve a handle minted by this pool back to its text.
    pub fn get(&self, handle: PoolStr) -> &str {
        let block = &self.blocks[handle.block as usize];
        let start = handle.offset as usize;
        let bytes = &block.data[start..start + handle.len as usize];
        // Safety: the bytes were copied from a `&str` in `alloc` and are
        // never mutated afterwards.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }

    /// Total capacity of all blocks acquired so far.
    pub fn allocated_bytes(&self) -> usize {
        self.blocks.iter().map(|block| block.data.len()).sum()
    }

    /// Number of blocks acquired so far.
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    fn grow(&mut self, needed: usize) {
        let size = round_up(needed.max(self.min_block), GRANULARITY);
        self.blocks.push(Block {
            data: vec![0u8; size].into_boxed_slice(),
            used: 0,
        });
    }
}

impl Default for StringPool {
    fn default() -> Self {
        Self::new()
    }
}

fn round_up(n: usize, unit: usize) -> usize {
    n.div_ceil(unit) * unit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_and_get_round_trip() {
        let mut pool = StringPool::new();
        let hello = pool.alloc("hello").expect("alloc");
        let empty = pool.alloc("").expect("alloc empty");
        let hanzi = pool.alloc("你好").expect("alloc hanzi");
        assert_eq!(pool.get(hello), "hello");
        assert_eq!(pool.get(empty), "");
        assert_eq!(pool.get(hanzi), "你好");
        assert_eq!(pool.num_blocks(), 1);
    }

    #[test]
    fn growth_acquires_a_second_block_and_keeps_old_handles() {
        // Granularity forces 64 KiB blocks; fill past one block's worth.
        let mut pool = StringPool::new();
        let text = "x".repeat(4096);
        let mut handles = Vec::new();
        while pool.num_blocks() < 2 {
            handles.push(pool.alloc(&text).expect("alloc"));
        }
        assert!(pool.num_blocks() >= 2);
        for handle in &handles {
            assert_eq!(pool.get(*handle), text);
        }
    }

    #[test]
    fn allocations_never_straddle_blocks() {
        let mut pool = StringPool::with_limits(64, 1024 * 1024);
        // First alloc leaves 5 bytes of the 64 KiB granule; the second
        // needs 6 and must start a fresh block.
        let big = "a".repeat(65_530);
        let first = pool.alloc(&big).expect("first");
        let second = pool.alloc("tail!").expect("second");
        assert_eq!(pool.get(first), big);
        assert_eq!(pool.get(second), "tail!");
        assert_eq!(pool.num_blocks(), 2);
    }

    #[test]
    fn oversize_request_fails_without_poisoning_the_pool() {
        let mut pool = StringPool::with_limits(64, 16);
        let err = pool.alloc(&"y".repeat(17)).unwrap_err();
        match err {
            CedictError::Allocation { requested, max } => {
                assert_eq!(requested, 17);
                assert_eq!(max, 16);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        let ok = pool.alloc("still fine").expect("small alloc after failure");
        assert_eq!(pool.get(ok), "still fine");
    }

    #[test]
    fn retained_memory_grows_monotonically() {
        let mut pool = StringPool::new();
        let mut last = 0;
        for _ in 0..64 {
            pool.alloc(&"z".repeat(8192)).expect("alloc");
            let now = pool.allocated_bytes();
            assert!(now >= last);
            last = now;
        }
        assert!(last > 0);
    }
}
