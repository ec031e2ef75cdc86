use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Shared ownership of a tree node.
///
/// Bags form a tree during recursion: a parent borrows each child's table
/// while it still lives above it on the call stack. `Rc<RefCell<T>>` covers
/// that without introducing cycles, since the bag tree never points back
/// at its own ancestors.
pub struct Link<T> {
    link: Rc<RefCell<T>>,
}

impl<T> Link<T> {
    pub fn new(value: T) -> Self {
        Link { link: Rc::new(RefCell::new(value)) }
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.link.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.link.borrow_mut()
    }

    pub fn get_ptr(&self) -> *const RefCell<T> {
        Rc::as_ptr(&self.link)
    }
}

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Link { link: Rc::clone(&self.link) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Link<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.link.borrow().fmt(f)
    }
}

impl<T> PartialEq for Link<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.link, &other.link)
    }
}

impl<T> Eq for Link<T> {}

impl<T> Hash for Link<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get_ptr().hash(state);
    }
}
