//! # Scratch Buffer Pools
//!
//! The regex matching path needs two transient buffers per call:
//! * an offset table (`Vec<usize>`, one entry per char, plus a sentinel);
//! * a raw match-range list (`Vec<(usize, usize)>`).
//!
//! [`ScratchPool`] recycles these across calls. A checkout hands out an
//! exclusively-owned [`Scratch`] guard; the buffer is returned to the pool
//! when the guard is dropped. Pools are shared across threads, buffers never are.
//!
//! On return, a buffer whose capacity exceeds the pool's retention limit is
//! replaced by a fresh small buffer, so one unusually large input cannot
//! permanently inflate pool memory.

use core::{
    fmt::Debug,
    ops::{Deref, DerefMut},
};

use parking_lot::Mutex;

/// Default fresh capacity of pooled offset tables.
pub const DEFAULT_OFFSET_TABLE_CAPACITY: usize = 256;

/// Default retention limit of pooled offset tables.
pub const DEFAULT_OFFSET_TABLE_RETAIN_LIMIT: usize = 1 << 20;

/// Default fresh capacity of pooled range lists.
pub const DEFAULT_RANGE_LIST_CAPACITY: usize = 16;

/// Default retention limit of pooled range lists.
pub const DEFAULT_RANGE_LIST_RETAIN_LIMIT: usize = 1 << 14;

fn default_max_idle() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Options for [`ScratchPools`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchPoolOptions {
    /// Capacity of freshly allocated offset tables.
    pub offset_table_capacity: usize,

    /// Offset tables with a larger capacity are discarded on return.
    pub offset_table_retain_limit: usize,

    /// Capacity of freshly allocated range lists.
    pub range_list_capacity: usize,

    /// Range lists with a larger capacity are discarded on return.
    pub range_list_retain_limit: usize,

    /// The max number of idle buffers each pool retains.
    pub max_idle: usize,
}

impl Default for ScratchPoolOptions {
    fn default() -> Self {
        Self {
            offset_table_capacity: DEFAULT_OFFSET_TABLE_CAPACITY,
            offset_table_retain_limit: DEFAULT_OFFSET_TABLE_RETAIN_LIMIT,
            range_list_capacity: DEFAULT_RANGE_LIST_CAPACITY,
            range_list_retain_limit: DEFAULT_RANGE_LIST_RETAIN_LIMIT,
            max_idle: default_max_idle(),
        }
    }
}

impl ScratchPoolOptions {
    /// Set the offset table retention limit.
    pub fn set_offset_table_retain_limit(
        &mut self,
        limit: usize,
    ) {
        self.offset_table_retain_limit = limit;
    }

    /// Set the offset table retention limit.
    pub fn with_offset_table_retain_limit(
        mut self,
        limit: usize,
    ) -> Self {
        self.set_offset_table_retain_limit(limit);
        self
    }

    /// Set the range list retention limit.
    pub fn set_range_list_retain_limit(
        &mut self,
        limit: usize,
    ) {
        self.range_list_retain_limit = limit;
    }

    /// Set the range list retention limit.
    pub fn with_range_list_retain_limit(
        mut self,
        limit: usize,
    ) -> Self {
        self.set_range_list_retain_limit(limit);
        self
    }

    /// Set the max number of idle buffers retained per pool.
    pub fn set_max_idle(
        &mut self,
        max_idle: usize,
    ) {
        self.max_idle = max_idle;
    }

    /// Set the max number of idle buffers retained per pool.
    pub fn with_max_idle(
        mut self,
        max_idle: usize,
    ) -> Self {
        self.set_max_idle(max_idle);
        self
    }
}

/// A thread-safe pool of reusable `Vec<T>` buffers.
///
/// ## Style Hints
///
/// Instance names should prefer `${buffer-name}_pool`,
/// for example, `offsets_pool`, `ranges_pool`, etc.
pub struct ScratchPool<T> {
    idle: Mutex<Vec<Vec<T>>>,

    fresh_capacity: usize,
    retain_limit: usize,
    max_idle: usize,
}

impl<T> ScratchPool<T> {
    /// Create a new pool.
    ///
    /// ## Arguments
    /// * `fresh_capacity` - capacity of newly allocated buffers.
    /// * `retain_limit` - returned buffers above this capacity are replaced.
    /// * `max_idle` - the max number of idle buffers held.
    pub fn new(
        fresh_capacity: usize,
        retain_limit: usize,
        max_idle: usize,
    ) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            fresh_capacity,
            retain_limit,
            max_idle,
        }
    }

    /// The retention limit of this pool.
    pub fn retain_limit(&self) -> usize {
        self.retain_limit
    }

    /// The number of idle buffers currently held.
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    /// Check out an empty buffer with at least `min_capacity` capacity.
    ///
    /// The buffer is returned to the pool when the guard drops.
    pub fn checkout(
        &self,
        min_capacity: usize,
    ) -> Scratch<'_, T> {
        Scratch {
            pool: self,
            buf: self.take_buffer(min_capacity),
        }
    }

    /// Take an owned, empty buffer with at least `min_capacity` capacity.
    ///
    /// Callers should hand it back with [`Self::give_back`].
    pub fn take_buffer(
        &self,
        min_capacity: usize,
    ) -> Vec<T> {
        let pooled = self.idle.lock().pop();
        let mut buf = pooled.unwrap_or_else(|| Vec::with_capacity(self.fresh_capacity));
        buf.clear();
        if buf.capacity() < min_capacity {
            buf = Vec::with_capacity(min_capacity);
        }
        buf
    }

    /// Return a buffer to the pool.
    ///
    /// The buffer is cleared; if its capacity exceeds the retention limit,
    /// it is replaced with a fresh buffer.
    pub fn give_back(
        &self,
        mut buf: Vec<T>,
    ) {
        if buf.capacity() > self.retain_limit {
            log::trace!(
                "discarding scratch buffer: capacity {} > retain limit {}",
                buf.capacity(),
                self.retain_limit
            );
            buf = Vec::with_capacity(self.fresh_capacity);
        } else {
            buf.clear();
        }

        let mut idle = self.idle.lock();
        if idle.len() < self.max_idle {
            idle.push(buf);
        }
    }
}

impl<T> Debug for ScratchPool<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ScratchPool")
            .field("fresh_capacity", &self.fresh_capacity)
            .field("retain_limit", &self.retain_limit)
            .field("max_idle", &self.max_idle)
            .field("idle", &self.idle_count())
            .finish()
    }
}

/// A checked-out buffer; returns itself to its [`ScratchPool`] on drop.
pub struct Scratch<'p, T> {
    pool: &'p ScratchPool<T>,
    buf: Vec<T>,
}

impl<T> Scratch<'_, T> {
    /// Return the buffer to the pool now.
    pub fn release(self) {
        drop(self)
    }
}

impl<T> Deref for Scratch<'_, T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<T> DerefMut for Scratch<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

impl<T> Drop for Scratch<'_, T> {
    fn drop(&mut self) {
        self.pool.give_back(core::mem::take(&mut self.buf));
    }
}

/// The pair of pools used by the regex matching path.
#[derive(Debug)]
pub struct ScratchPools {
    /// Pool of char-index to byte-offset tables.
    pub offsets_pool: ScratchPool<usize>,

    /// Pool of raw `(start, end)` match-range lists.
    pub ranges_pool: ScratchPool<(usize, usize)>,
}

impl Default for ScratchPools {
    fn default() -> Self {
        Self::new(&ScratchPoolOptions::default())
    }
}

impl ScratchPools {
    /// Create a new pool pair from options.
    pub fn new(options: &ScratchPoolOptions) -> Self {
        Self {
            offsets_pool: ScratchPool::new(
                options.offset_table_capacity,
                options.offset_table_retain_limit,
                options.max_idle,
            ),
            ranges_pool: ScratchPool::new(
                options.range_list_capacity,
                options.range_list_retain_limit,
                options.max_idle,
            ),
        }
    }
}
