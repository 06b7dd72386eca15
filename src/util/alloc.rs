use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A test element which increments a shared counter whenever an instance is dropped. Instances
/// order themselves by `key` so that they can be stored in the ordered collections.
#[derive(Debug, Clone)]
pub struct CountedDrop {
    pub key: i32,
    count: Rc<RefCell<usize>>,
}

impl CountedDrop {
    pub fn new(key: i32, count: &Rc<RefCell<usize>>) -> CountedDrop {
        CountedDrop {
            key,
            count: Rc::clone(count),
        }
    }

    pub fn counter() -> Rc<RefCell<usize>> {
        Rc::new(RefCell::new(0))
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.count.replace_with(|v| *v + 1);
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for CountedDrop {}

impl PartialOrd for CountedDrop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CountedDrop {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
