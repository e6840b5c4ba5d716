use std::ops::{Deref, DerefMut};

pub(crate) trait NullCheck {
    fn is_null(&self) -> bool;
}

impl<T> NullCheck for *const T {
    fn is_null(&self) -> bool {
        (*self as *const T).is_null()
    }
}

impl<T> NullCheck for *mut T {
    fn is_null(&self) -> bool {
        (*self as *const T).is_null()
    }
}

/// Owner of a raw SQLite handle, `dealloc` runs once on drop unless the
/// handle is null.
#[derive(Debug)]
pub(crate) struct CBox<T: NullCheck + Copy> {
    pub(crate) ptr: T,
    dealloc: fn(T),
}

impl<T: NullCheck + Copy> CBox<T> {
    pub fn new(ptr: T, dealloc: fn(T)) -> Self {
        Self { ptr, dealloc }
    }
}

impl<T: NullCheck + Copy> Drop for CBox<T> {
    fn drop(&mut self) {
        if !self.ptr.is_null() {
            (self.dealloc)(self.ptr);
        }
    }
}

impl<T: NullCheck + Copy> Deref for CBox<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.ptr
    }
}

impl<T: NullCheck + Copy> DerefMut for CBox<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.ptr
    }
}

// The bundled library is compiled in serialized threading mode.
unsafe impl<T: NullCheck + Copy> Send for CBox<T> {}
unsafe impl<T: NullCheck + Copy> Sync for CBox<T> {}

#[cfg(test)]
mod tests {
    use crate::cbox::CBox;
    use std::{
        ptr,
        sync::atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn cbox_raw_pointer() {
        static DESTROYED: AtomicUsize = AtomicUsize::new(0);
        let mut v = 123;
        let ptr: *mut i32 = &mut v;
        {
            let ptr = CBox::new(ptr::null_mut::<i32>(), |_| {
                DESTROYED.fetch_add(1, Ordering::Relaxed);
            });
            assert!(ptr.is_null());
        }
        assert_eq!(DESTROYED.load(Ordering::Relaxed), 0);
        {
            let ptr = CBox::new(ptr, |_| {
                DESTROYED.fetch_add(1, Ordering::Relaxed);
            });
            assert_eq!(unsafe { **ptr }, 123);
            assert_eq!(DESTROYED.load(Ordering::Relaxed), 0);
        }
        assert_eq!(DESTROYED.load(Ordering::Relaxed), 1);
    }
}
