use std::fmt;
use std::mem::size_of;

/// Rendered instead of values whenever the list holds no nodes.
pub const EMPTY_MESSAGE: &str = "Linked list is empty.";

/// A singly-linked list of integers. The list owns the first node and every node owns its
/// successor, so dropping the list releases the whole chain.
///
/// Neither the tail nor the length is cached: appending and measuring both walk the chain.
pub struct LinkedList {
    head: Option<Box<Node>>,
}

struct Node {
    data: i32,
    next: Option<Box<Node>>,
}

impl Node {
    pub fn new(data: i32, next: Option<Box<Node>>) -> Node {
        Node {data: data, next: next}
    }
}

impl LinkedList {
    pub fn new() -> LinkedList {
        LinkedList {head: None}
    }

    /// Number of nodes, counted by walking the chain.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut current: &Option<Box<Node>> = &self.head;
        while let Some(node) = current {
            count += 1;
            current = &node.next;
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends a node holding `data` after the last node, or makes it the head of an empty list.
    pub fn add_node(&mut self, data: i32) {
        let mut link: &mut Option<Box<Node>> = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node::new(data, None)));
    }

    /// Removes the node at zero-based position `index`. An index past the end leaves the list
    /// untouched; nothing tells the caller which case happened.
    pub fn delete_at(&mut self, index: usize) {
        let mut link: &mut Option<Box<Node>> = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => return,
            }
        }
        if let Some(mut node) = link.take() {
            *link = node.next.take();
            log::debug!("Released node {} holding {}", index, node.data);
        }
    }

    /// Removes every node holding `data`, keeping the survivors in their original order.
    pub fn delete_by_value(&mut self, data: i32) {
        let mut remaining = self.head.take();
        let mut link: &mut Option<Box<Node>> = &mut self.head;
        let mut released = 0;
        while let Some(mut node) = remaining {
            remaining = node.next.take();
            if node.data == data {
                released += 1;
            } else {
                link = &mut link.insert(node).next;
            }
        }
        if released > 0 {
            log::debug!("Released {} node(s) holding {}", released, data);
        }
    }

    /// Removes every node holding `data` together with the node that originally followed it.
    ///
    /// Two consecutive nodes go per match. The follower is released whatever it holds and is
    /// never examined as a match itself; the scan resumes at the node after it. So `2 2 3`
    /// with `data == 2` leaves `3`, while `2 2 2` leaves nothing.
    pub fn delete_by_value_and_follower(&mut self, data: i32) {
        let mut remaining = self.head.take();
        let mut link: &mut Option<Box<Node>> = &mut self.head;
        let mut released = 0;
        while let Some(mut node) = remaining {
            remaining = node.next.take();
            if node.data == data {
                released += 1;
                if let Some(mut follower) = remaining {
                    remaining = follower.next.take();
                    released += 1;
                    log::debug!("Released follower holding {} after {}", follower.data, data);
                }
            } else {
                link = &mut link.insert(node).next;
            }
        }
        if released > 0 {
            log::debug!("Released {} node(s) matching or following {}", released, data);
        }
    }

    /// Releases every node. Calling it on an empty list does nothing.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        let mut released = 0;
        while let Some(mut node) = current {
            current = node.next.take();
            released += 1;
        }
        if released > 0 {
            log::debug!("Cleared {} node(s)", released);
        }
    }

    /// Values from head to tail separated by single spaces, or `EMPTY_MESSAGE`.
    pub fn display_forward(&self) -> String {
        let mut current: &Option<Box<Node>> = &self.head;
        let mut result = String::new();
        loop {
            match current {
                Some(node) => {
                    if !result.is_empty() {
                        result.push(' ');
                    }
                    result.push_str(&node.data.to_string());
                    current = &node.next;
                },
                None => break,
            }
        }
        if result.is_empty() {
            return EMPTY_MESSAGE.to_string();
        }
        result
    }

    /// Values from tail to head separated by single spaces, or `EMPTY_MESSAGE`.
    ///
    /// Values are pushed on an explicit stack while walking forward and popped afterwards, so
    /// the rendering depth is bounded by heap space rather than by the thread's call stack.
    pub fn display_reverse(&self) -> String {
        let mut stack: Vec<i32> = Vec::new();
        let mut current: &Option<Box<Node>> = &self.head;
        while let Some(node) = current {
            stack.push(node.data);
            current = &node.next;
        }
        if stack.is_empty() {
            return EMPTY_MESSAGE.to_string();
        }
        let mut tokens: Vec<String> = Vec::with_capacity(stack.len());
        while let Some(data) = stack.pop() {
            tokens.push(data.to_string());
        }
        tokens.join(" ")
    }

    /// Bytes held by the nodes, as `len * size_of::<Node>()`. Allocator overhead is not counted.
    /// Returns `None` for an empty list.
    pub fn memory_estimate(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some(self.len() * size_of::<Node>())
    }
}

impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_forward())
    }
}

impl fmt::Debug for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "LinkedList []");
        }
        write!(f, "LinkedList [{}]", self.display_forward())
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        let mut copy = LinkedList::new();
        let mut link: &mut Option<Box<Node>> = &mut copy.head;
        let mut current: &Option<Box<Node>> = &self.head;
        while let Some(node) = current {
            link = &mut link.insert(Box::new(Node::new(node.data, None))).next;
            current = &node.next;
        }
        copy
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        let mut a = &self.head;
        let mut b = &other.head;
        loop {
            match (a.as_ref(), b.as_ref()) {
                (Some(a_node), Some(b_node)) => {
                    if a_node.data != b_node.data {
                        return false;
                    }
                    a = &a_node.next;
                    b = &b_node.next;
                }
                (None, None) => return true,
                _ => return false,
            }
        }
    }
}
