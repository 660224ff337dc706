//! Render scheduling: render requests, render passes, and `single_render` batches.
//!
//! Components call [`request_render`] after every accepted property write.
//! Outside a batch each request is its own render pass; inside
//! [`single_render`] requests are collected, deduplicated, and turned into a
//! single pass when the outermost batch ends. The root drains the dirty set
//! with [`take_dirty`] and re-renders once per pass.
//!
//! Single-threaded and synchronous, with one scheduler per thread.

use std::cell::RefCell;

use indexmap::IndexSet;

use crate::ids::ComponentId;

struct Scheduler {
    /// When > 0 we are inside a `single_render()` call; passes are deferred.
    batch_depth: usize,
    /// Requests made inside the current batch.
    pending: IndexSet<ComponentId>,
    /// Components rendered stale by completed passes, not yet drained.
    dirty: IndexSet<ComponentId>,
    /// Number of render passes scheduled so far.
    passes: u64,
}

impl Scheduler {
    fn new() -> Self {
        Self {
            batch_depth: 0,
            pending: IndexSet::new(),
            dirty: IndexSet::new(),
            passes: 0,
        }
    }

    fn mark_dirty(&mut self, ids: impl IntoIterator<Item = ComponentId>) {
        self.dirty.extend(ids);
        self.passes += 1;
        tracing::debug!(pass = self.passes, dirty = self.dirty.len(), "render pass scheduled");
    }
}

thread_local! {
    static SCHEDULER: RefCell<Scheduler> = RefCell::new(Scheduler::new());
}

/// Request a re-render of `id`.
pub fn request_render(id: ComponentId) {
    SCHEDULER.with(|s| {
        let mut s = s.borrow_mut();
        if s.batch_depth > 0 {
            s.pending.insert(id);
        } else {
            s.mark_dirty([id]);
        }
    });
}

/// Resets the batch depth on drop, so a panicking batch doesn't wedge the scheduler.
struct BatchGuard;

impl BatchGuard {
    fn enter() -> Self {
        SCHEDULER.with(|s| s.borrow_mut().batch_depth += 1);
        BatchGuard
    }
}

impl Drop for BatchGuard {
    fn drop(&mut self) {
        SCHEDULER.with(|s| {
            let mut s = s.borrow_mut();
            s.batch_depth -= 1;
            if s.batch_depth == 0 && !s.pending.is_empty() {
                let pending = std::mem::take(&mut s.pending);
                s.mark_dirty(pending);
            }
        });
    }
}

/// Run `f` as one render batch.
///
/// Any number of render requests made inside `f` (including nested batches)
/// produce exactly one render pass when the outermost batch returns. A batch
/// with no requests produces none.
///
/// ```ignore
/// single_render(|| {
///     button.set_width(Some(CssSize::px(100.0)));
///     button.set_text("Save");
/// });
/// // One render pass here.
/// ```
pub fn single_render<R>(f: impl FnOnce() -> R) -> R {
    let _guard = BatchGuard::enter();
    f()
}

/// Whether a batch is currently open.
pub fn is_batching() -> bool {
    SCHEDULER.with(|s| s.borrow().batch_depth > 0)
}

/// Total number of render passes scheduled on this thread.
pub fn render_passes() -> u64 {
    SCHEDULER.with(|s| s.borrow().passes)
}

/// Whether any completed pass is waiting to be rendered.
pub fn has_dirty() -> bool {
    SCHEDULER.with(|s| !s.borrow().dirty.is_empty())
}

/// Drain the components made stale by completed passes, in request order.
pub fn take_dirty() -> Vec<ComponentId> {
    SCHEDULER.with(|s| std::mem::take(&mut s.borrow_mut().dirty).into_iter().collect())
}

/// Reset this thread's scheduler. Intended for tests.
pub fn reset() {
    SCHEDULER.with(|s| *s.borrow_mut() = Scheduler::new());
}
