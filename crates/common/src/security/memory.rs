//! Memory barrier utilities

/// Compiler fences around sensitive operations.
///
/// A fence does not emit an instruction; it stops the compiler from moving
/// loads and stores across the fence point, which keeps key-schedule wipes
/// and keystream handling in the order the source states.
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Sequentially-consistent compiler fence
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }

    /// Run a closure bracketed by compiler fences
    #[inline]
    pub fn with_barriers<T, F: FnOnce() -> T>(f: F) -> T {
        compiler_fence_seq_cst();
        let result = f();
        compiler_fence_seq_cst();
        result
    }
}
