// ── Recording windowing backend (tests only) ──────────────────────────────────
//
// Simulates just enough of a native window manager to check the hosting
// state machine: registered classes, live windows, parent links, visibility
// and last geometry.  Every call is appended to a log so tests can assert on
// exact native traffic.  Failures can be injected per operation.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use super::{HostKind, NativeWindowing, PixelRect, Visibility, WindowId, WindowSpec, WindowStyle};
use crate::error::{HostError, Result};

pub(crate) const TEST_DESCRIPTOR: &str = "HWND";

/// One native call as observed by the recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    RegisterClass(String),
    UnregisterClass(String),
    CreateWindow { id: WindowId, class: String, parent: Option<WindowId> },
    DestroyWindow(WindowId),
    SetParent { child: WindowId, parent: WindowId },
    MoveWindow { window: WindowId, rect: PixelRect, repaint: bool },
    SetWindowPos { window: WindowId, rect: PixelRect, visibility: Visibility },
    Invalidate(WindowId),
}

#[derive(Debug, Clone)]
pub(crate) struct WindowRecord {
    pub(crate) class: String,
    pub(crate) parent: Option<WindowId>,
    pub(crate) rect: PixelRect,
    pub(crate) visible: bool,
    pub(crate) style: WindowStyle,
    pub(crate) layered: bool,
}

pub(crate) struct RecordingWindowing {
    kind: HostKind,
    next_id: Cell<usize>,
    calls: RefCell<Vec<Call>>,
    classes: RefCell<HashSet<String>>,
    windows: RefCell<HashMap<WindowId, WindowRecord>>,
    /// Parent links of windows the recorder did not create (caller-owned
    /// children and top-levels).
    foreign_parents: RefCell<HashMap<WindowId, WindowId>>,
    fail_register: Cell<bool>,
    fail_create: Cell<bool>,
    fail_destroy: Cell<bool>,
    fail_set_parent: Cell<bool>,
}

impl RecordingWindowing {
    pub(crate) fn new() -> Self {
        Self::with_kind(HostKind::Headless)
    }

    pub(crate) fn with_kind(kind: HostKind) -> Self {
        Self {
            kind,
            next_id: Cell::new(0x1000),
            calls: RefCell::new(Vec::new()),
            classes: RefCell::new(HashSet::new()),
            windows: RefCell::new(HashMap::new()),
            foreign_parents: RefCell::new(HashMap::new()),
            fail_register: Cell::new(false),
            fail_create: Cell::new(false),
            fail_destroy: Cell::new(false),
            fail_set_parent: Cell::new(false),
        }
    }

    /// Allocate an id for a window created outside the hosting layer, such
    /// as a top-level or a caller-owned child.
    pub(crate) fn foreign_window(&self) -> WindowId {
        self.alloc_id()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub(crate) fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub(crate) fn live_windows(&self) -> usize {
        self.windows.borrow().len()
    }

    pub(crate) fn live_classes(&self) -> usize {
        self.classes.borrow().len()
    }

    pub(crate) fn window(&self, id: WindowId) -> Option<WindowRecord> {
        self.windows.borrow().get(&id).cloned()
    }

    pub(crate) fn is_live(&self, id: WindowId) -> bool {
        self.windows.borrow().contains_key(&id)
    }

    pub(crate) fn parent_of(&self, id: WindowId) -> Option<WindowId> {
        if let Some(w) = self.windows.borrow().get(&id) {
            return w.parent;
        }
        self.foreign_parents.borrow().get(&id).copied()
    }

    pub(crate) fn fail_register(&self, fail: bool) {
        self.fail_register.set(fail);
    }

    pub(crate) fn fail_create(&self, fail: bool) {
        self.fail_create.set(fail);
    }

    pub(crate) fn fail_destroy(&self, fail: bool) {
        self.fail_destroy.set(fail);
    }

    pub(crate) fn fail_set_parent(&self, fail: bool) {
        self.fail_set_parent.set(fail);
    }

    fn alloc_id(&self) -> WindowId {
        let id = self.next_id.get();
        self.next_id.set(id + 0x10);
        WindowId::from_raw(id)
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn failure(function: &'static str) -> HostError {
        HostError::Native { function, code: 0x5 }
    }
}

impl NativeWindowing for RecordingWindowing {
    fn kind(&self) -> HostKind {
        self.kind
    }

    fn descriptor(&self) -> &'static str {
        TEST_DESCRIPTOR
    }

    fn register_class(&self, name: &str) -> Result<()> {
        if self.fail_register.get() {
            return Err(Self::failure("RegisterClassExW"));
        }
        if !self.classes.borrow_mut().insert(name.to_owned()) {
            return Err(Self::failure("RegisterClassExW"));
        }
        self.record(Call::RegisterClass(name.to_owned()));
        Ok(())
    }

    fn unregister_class(&self, name: &str) -> Result<()> {
        self.record(Call::UnregisterClass(name.to_owned()));
        if self.classes.borrow_mut().remove(name) {
            Ok(())
        } else {
            Err(Self::failure("UnregisterClassW"))
        }
    }

    fn create_window(&self, spec: &WindowSpec<'_>) -> Result<WindowId> {
        if self.fail_create.get() || !self.classes.borrow().contains(spec.class_name) {
            return Err(Self::failure("CreateWindowExW"));
        }
        let id = self.alloc_id();
        self.windows.borrow_mut().insert(
            id,
            WindowRecord {
                class: spec.class_name.to_owned(),
                parent: spec.parent,
                rect: spec.rect,
                visible: false,
                style: spec.style,
                layered: spec.layered,
            },
        );
        self.record(Call::CreateWindow {
            id,
            class: spec.class_name.to_owned(),
            parent: spec.parent,
        });
        Ok(id)
    }

    fn destroy_window(&self, window: WindowId) -> Result<()> {
        self.record(Call::DestroyWindow(window));
        if self.fail_destroy.get() {
            return Err(Self::failure("DestroyWindow"));
        }
        let removed = self.windows.borrow_mut().remove(&window);
        match removed {
            Some(_) => {
                // Native children die with their parent.
                let mut windows = self.windows.borrow_mut();
                windows.retain(|_, w| w.parent != Some(window));
                Ok(())
            }
            None => Err(Self::failure("DestroyWindow")),
        }
    }

    fn set_parent(&self, child: WindowId, parent: WindowId) -> Result<()> {
        if self.fail_set_parent.get() {
            return Err(Self::failure("SetParent"));
        }
        self.record(Call::SetParent { child, parent });
        match self.windows.borrow_mut().get_mut(&child) {
            Some(w) => w.parent = Some(parent),
            None => {
                self.foreign_parents.borrow_mut().insert(child, parent);
            }
        }
        Ok(())
    }

    fn move_window(&self, window: WindowId, rect: PixelRect, repaint: bool) -> Result<()> {
        self.record(Call::MoveWindow { window, rect, repaint });
        if let Some(w) = self.windows.borrow_mut().get_mut(&window) {
            w.rect = rect;
        }
        Ok(())
    }

    fn set_window_pos(&self, window: WindowId, rect: PixelRect, visibility: Visibility) -> Result<()> {
        self.record(Call::SetWindowPos { window, rect, visibility });
        match self.windows.borrow_mut().get_mut(&window) {
            Some(w) => {
                w.rect = rect;
                w.visible = visibility == Visibility::Show;
                Ok(())
            }
            None => Err(Self::failure("SetWindowPos")),
        }
    }

    fn invalidate(&self, window: WindowId) -> Result<()> {
        self.record(Call::Invalidate(window));
        Ok(())
    }
}
