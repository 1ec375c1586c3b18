use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::mem;
use std::ptr::NonNull;

/// Exclusively owned allocation of `cap` slots of `T`.
///
/// `RawBuf` manages memory only; it never constructs or drops elements.
/// Element lifetime is the container's responsibility. Capacity 0 and
/// zero-sized payloads hold a dangling pointer with no allocation behind it.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

impl<T> RawBuf<T> {
    /// The empty buffer: capacity 0, no allocation.
    pub(crate) const fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    /// Allocates exactly `cap` slots.
    pub(crate) fn allocate(cap: usize) -> Self {
        if cap == 0 || mem::size_of::<T>() == 0 {
            return Self {
                ptr: NonNull::dangling(),
                cap,
            };
        }

        let layout = Layout::array::<T>(cap).expect("capacity overflows allocation size");
        // SAFETY: the layout has non-zero size (cap > 0 and T is not zero-sized).
        let raw = unsafe { alloc(layout).cast::<T>() };
        let Some(ptr) = NonNull::new(raw) else {
            handle_alloc_error(layout)
        };
        Self { ptr, cap }
    }

    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    pub(crate) fn cap(&self) -> usize {
        self.cap
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        let layout = Layout::array::<T>(self.cap).expect("capacity overflows allocation size");
        // SAFETY: the allocation was made with this exact layout.
        unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
    }
}
