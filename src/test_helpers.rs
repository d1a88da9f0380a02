//! Shared fakes for the unit tests.
//!
//! - [`FakeElement`]: an in-memory [`Element`] whose clones share state, the
//!   way two `web_sys::Element` handles to the same node do.
//! - [`ManualScheduler`]: a virtual clock; tasks run only when the test
//!   calls [`ManualScheduler::advance`].
//! - [`FakeNotificationHost`]: a document that holds toast records.

use crate::dom::Element;
use crate::notify::{Notification, NotificationHost};
use crate::schedule::Scheduler;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

// =========================================================================
// FakeElement
// =========================================================================

#[derive(Debug, Default)]
struct ElementState {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
}

#[derive(Debug, Clone, Default)]
pub struct FakeElement(Rc<RefCell<ElementState>>);

impl FakeElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let el = Self::new();
        el.0.borrow_mut().text = text.to_string();
        el
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Element for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn set_class(&self, class: &str, present: bool) {
        let mut state = self.0.borrow_mut();
        if present {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attributes.remove(name);
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0
            .borrow_mut()
            .styles
            .insert(property.to_string(), value.to_string());
    }
}

// =========================================================================
// ManualScheduler
// =========================================================================

struct Pending {
    due: u64,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct Clock {
    now: Cell<u64>,
    seq: Cell<u64>,
    pending: RefCell<Vec<Pending>>,
}

#[derive(Clone, Default)]
pub struct ManualScheduler(Rc<Clock>);

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.0.now.get()
    }

    /// Move time forward by `ms`, running every task that comes due in
    /// order, including tasks scheduled by tasks that ran.
    pub fn advance(&self, ms: u64) {
        let target = self.0.now.get() + ms;
        loop {
            let next = {
                let mut pending = self.0.pending.borrow_mut();
                let idx = pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(i, _)| i);
                idx.map(|i| pending.remove(i))
            };
            let Some(task) = next else { break };
            self.0.now.set(task.due);
            (task.task)();
        }
        self.0.now.set(target);
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let seq = self.0.seq.get();
        self.0.seq.set(seq + 1);
        self.0.pending.borrow_mut().push(Pending {
            due: self.0.now.get() + u64::from(delay_ms),
            seq,
            task,
        });
    }
}

// =========================================================================
// FakeNotificationHost
// =========================================================================

/// A toast as the fake document holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRecord {
    pub id: usize,
    pub message: String,
    pub class_name: String,
    pub style: String,
    pub animation: Option<String>,
}

#[derive(Default)]
pub struct FakeNotificationHost {
    next_id: Cell<usize>,
    attached: RefCell<Vec<ToastRecord>>,
    keyframes: Cell<usize>,
}

impl FakeNotificationHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toasts currently in the document.
    pub fn live(&self) -> Vec<ToastRecord> {
        self.attached.borrow().clone()
    }

    pub fn keyframe_blocks(&self) -> usize {
        self.keyframes.get()
    }
}

impl NotificationHost for FakeNotificationHost {
    type Handle = usize;

    fn remove_current(&self) {
        self.attached.borrow_mut().clear();
    }

    fn install_keyframes(&self) {
        if self.keyframes.get() == 0 {
            self.keyframes.set(1);
        }
    }

    fn show(&self, notification: &Notification) -> Option<usize> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.attached.borrow_mut().push(ToastRecord {
            id,
            message: notification.message.clone(),
            class_name: notification.class_name.clone(),
            style: notification.style.clone(),
            animation: None,
        });
        Some(id)
    }

    fn begin_exit(&self, handle: &usize, animation: &str) {
        if let Some(record) = self
            .attached
            .borrow_mut()
            .iter_mut()
            .find(|r| r.id == *handle)
        {
            record.animation = Some(animation.to_string());
        }
    }

    fn dismiss(&self, handle: &usize) {
        self.attached.borrow_mut().retain(|r| r.id != *handle);
    }
}
