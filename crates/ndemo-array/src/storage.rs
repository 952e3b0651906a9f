//! Shared element buffer.
//!
//! Every array handle holds a `Storage`. Views clone the `Rc`, copies allocate
//! a new buffer, so writes through any handle of one buffer are seen by all
//! of them. Borrows are taken per call and never held across calls.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

#[derive(Debug)]
pub(crate) struct Storage<T>(Rc<RefCell<Vec<T>>>);

impl<T> Storage<T> {
    pub(crate) fn new(data: Vec<T>) -> Self {
        Storage(Rc::new(RefCell::new(data)))
    }

    /// Another handle on the same buffer.
    pub(crate) fn share(&self) -> Self {
        Storage(Rc::clone(&self.0))
    }

    pub(crate) fn ptr_eq(&self, other: &Storage<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn handles(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub(crate) fn read(&self) -> Ref<'_, Vec<T>> {
        self.0.borrow()
    }

    pub(crate) fn write(&self) -> RefMut<'_, Vec<T>> {
        self.0.borrow_mut()
    }
}
