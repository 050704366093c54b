use crate::strategy::reuses_storage;
use std::{marker::PhantomData, mem::ManuallyDrop, ptr, slice};

/// Maps `input` through `f` inside its own buffer, returning the buffer
/// retyped to `V`. Pointer and capacity are preserved.
///
/// Panics if `U` and `V` don't share a layout.
///
/// If `f` panics, elements already mapped and those not yet reached are
/// dropped and the buffer is freed. The element handed to `f` is `f`'s to drop.
pub fn recycle<U, V>(input: Vec<U>, mut f: impl FnMut(U) -> V) -> Vec<V> {
    assert!(
        reuses_storage::<U, V>(),
        "Can't recycle {} storage for {}",
        std::any::type_name::<U>(),
        std::any::type_name::<V>()
    );

    let mut input = ManuallyDrop::new(input);
    let mut guard = Recycle::<U, V> {
        ptr: input.as_mut_ptr(),
        len: input.len(),
        cap: input.capacity(),
        done: 0,
        _types: PhantomData,
    };

    while guard.done < guard.len {
        // This is safe since slot `done` holds an initialized U that
        // is read exactly once, and U and V share a layout.
        unsafe {
            let slot = guard.ptr.add(guard.done);
            let value = f(slot.read());
            slot.cast::<V>().write(value);
        }
        guard.done += 1;
    }

    let guard = ManuallyDrop::new(guard);
    // This is safe since all len slots now hold V and the allocation
    // came from a Vec with the same layout.
    unsafe { Vec::from_raw_parts(guard.ptr.cast::<V>(), guard.len, guard.cap) }
}

/// Buffer mid rewrite.
/// Slots [0, done) hold V, slot done is moved out, slots (done, len) hold U.
struct Recycle<U, V> {
    ptr: *mut U,
    len: usize,
    cap: usize,
    done: usize,
    _types: PhantomData<(U, V)>,
}

impl<U, V> Drop for Recycle<U, V> {
    fn drop(&mut self) {
        // Only reached on unwind out of f, so done < len.
        unsafe {
            let rest = self.len - self.done - 1;
            ptr::drop_in_place(slice::from_raw_parts_mut(
                self.ptr.cast::<V>(),
                self.done,
            ));
            ptr::drop_in_place(slice::from_raw_parts_mut(self.ptr.add(self.done + 1), rest));
            drop(Vec::from_raw_parts(self.ptr.cast::<V>(), 0, self.cap));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        cell::RefCell,
        panic::{catch_unwind, AssertUnwindSafe},
    };

    #[test]
    fn keeps_buffer() {
        let mut input = Vec::with_capacity(8);
        input.extend([1u32, 2, 3]);
        let (ptr, cap) = (input.as_ptr(), input.capacity());

        let output = recycle(input, |x| x * 10);
        assert_eq!(output, vec![10, 20, 30]);
        assert_eq!(output.as_ptr(), ptr);
        assert_eq!(output.capacity(), cap);
    }

    #[test]
    fn retypes_layout_twins() {
        let output: Vec<f32> = recycle(vec![1u32, 2, 3], |x| x as f32 / 2.0);
        assert_eq!(output, vec![0.5, 1.0, 1.5]);
    }

    #[test]
    fn owned_elements() {
        let input = vec!["a".to_owned(), "b".to_owned()];
        let ptr = input.as_ptr();
        let output = recycle(input, |mut s| {
            s.push('!');
            s
        });
        assert_eq!(output, vec!["a!".to_owned(), "b!".to_owned()]);
        assert_eq!(output.as_ptr(), ptr);
    }

    #[test]
    fn empty() {
        let output = recycle(Vec::<String>::new(), |s| s);
        assert!(output.is_empty());
    }

    #[test]
    fn zero_sized() {
        let output = recycle(vec![(), (), ()], |()| ());
        assert_eq!(output.len(), 3);
    }

    #[test]
    #[should_panic]
    fn different_layout() {
        recycle(vec![1u8], |x| x as u64);
    }

    /// Records its tag on drop.
    struct Noisy<'a>(u32, &'a RefCell<Vec<u32>>);

    impl Drop for Noisy<'_> {
        fn drop(&mut self) {
            self.1.borrow_mut().push(self.0);
        }
    }

    #[test]
    fn unwind_drops_each_once() {
        let dropped = RefCell::new(Vec::new());
        let input = (0..5).map(|i| Noisy(i, &dropped)).collect::<Vec<_>>();

        let panicked = catch_unwind(AssertUnwindSafe(|| {
            recycle(input, |noisy| {
                if noisy.0 == 2 {
                    panic!("boom");
                }
                Noisy(noisy.0 + 100, noisy.1)
            })
        }))
        .is_err();
        assert!(panicked);

        let mut dropped = dropped.into_inner();
        dropped.sort();
        // 0 and 1 were replaced on the way, their replacements dropped with the buffer.
        assert_eq!(dropped, vec![0, 1, 2, 3, 4, 100, 101]);
    }
}
