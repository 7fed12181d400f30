//! Collections with a restricted interface, or no stored length, which std
//! does not provide.

mod forward_list;
pub use forward_list::{ForwardList, Iter as ForwardListIter};

mod queue;
pub use queue::Queue;

mod stack;
pub use stack::Stack;
