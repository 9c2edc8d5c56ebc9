use core::{
    mem,
    ptr::NonNull,
};

pub trait Allocator {

    /// # Safety
    ///
    /// `size` and `align` must form a valid layout. The returned block is
    /// owned by the caller and must be released through `free_raw` with the
    /// same size and align.
    unsafe fn allocate_raw(&self, size: usize, align: usize) -> Option<NonNull<u8>>;

    /// # Safety
    ///
    /// Same contract as `allocate_raw`; release through `free_uninit` with
    /// the same count.
    unsafe fn allocate_uninit<T>(&self, count: usize) -> Option<NonNull<T>> {
        let size = mem::size_of::<T>().checked_mul(count)?;
        let align = mem::align_of::<T>();
        unsafe { self.allocate_raw(size, align).map(|ptr| ptr.cast::<T>()) }
    }

    /// # Safety
    ///
    /// `ptr` must have come from `allocate_raw` on this allocator with the
    /// same size and align, and must not be freed twice.
    unsafe fn free_raw(&self, ptr: NonNull<u8>, size: usize, align: usize);

    /// # Safety
    ///
    /// `ptr` must have come from `allocate_uninit` on this allocator with
    /// the same count. Frees storage only, slot contents are not dropped.
    unsafe fn free_uninit<T>(&self, ptr: NonNull<T>, count: usize) {
        let size = mem::size_of::<T>() * count;
        let align = mem::align_of::<T>();
        unsafe { self.free_raw(ptr.cast::<u8>(), size, align) }
    }
}
