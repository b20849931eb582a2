//! Binds the root view to the application store.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

use crate::store::Subscription;
use crate::todos::{
    AppState, RootProps, TodoAction, TodoStore, VisibilityFilter, VisibleTodosSelector,
};

/// Callbacks handed to the child views. Each one dispatches a single action.
pub struct RootCallbacks {
    on_add_click: Box<dyn Fn(&str)>,
    on_todo_click: Box<dyn Fn(usize)>,
    on_filter_change: Box<dyn Fn(VisibilityFilter)>,
}

impl RootCallbacks {
    /// AddTodo submitted `text`.
    pub fn on_add_click(&self, text: &str) {
        (self.on_add_click)(text)
    }

    /// TodoList row `index` (in the visible list) was activated.
    pub fn on_todo_click(&self, index: usize) {
        (self.on_todo_click)(index)
    }

    /// Footer selected `filter`.
    pub fn on_filter_change(&self, filter: VisibilityFilter) {
        (self.on_filter_change)(filter)
    }
}

/// Root view connection: keeps [`RootProps`] in sync with the store.
///
/// Props are recomputed through a memoizing selector on every store
/// notification. Dropping the connection unsubscribes it.
pub struct ConnectedRoot {
    props: Rc<RefCell<RootProps>>,
    version: Rc<Cell<u64>>,
    callbacks: RootCallbacks,
    subscription: Subscription<AppState>,
}

impl ConnectedRoot {
    pub fn connect(store: Rc<TodoStore>) -> Self {
        let mut selector = VisibleTodosSelector::new();
        let initial = store.with_state(|state| selector.select(state).clone());
        let props = Rc::new(RefCell::new(initial));
        let version = Rc::new(Cell::new(0));

        let subscription = {
            let props = Rc::clone(&props);
            let version = Rc::clone(&version);
            let selector = RefCell::new(selector);
            store.subscribe(move |state: &AppState| {
                let mut selector = selector.borrow_mut();
                let next = selector.select(state);
                if *props.borrow() != *next {
                    *props.borrow_mut() = next.clone();
                    version.set(version.get() + 1);
                }
            })
        };

        let callbacks = bind_callbacks(&store, &props);
        tracing::debug!(id = ?subscription.id(), "Root view connected");

        Self {
            props,
            version,
            callbacks,
            subscription,
        }
    }

    pub fn props(&self) -> Ref<'_, RootProps> {
        self.props.borrow()
    }

    /// Incremented each time the derived props actually change.
    pub fn version(&self) -> u64 {
        self.version.get()
    }

    pub fn callbacks(&self) -> &RootCallbacks {
        &self.callbacks
    }

    pub fn is_connected(&self) -> bool {
        self.subscription.is_active()
    }

    pub fn disconnect(self) -> bool {
        self.subscription.unsubscribe()
    }
}

fn bind_callbacks(store: &Rc<TodoStore>, props: &Rc<RefCell<RootProps>>) -> RootCallbacks {
    let on_add_click = {
        let store = Rc::clone(store);
        Box::new(move |text: &str| store.dispatch(TodoAction::add_todo(text)))
    };

    let on_todo_click = {
        let store = Rc::clone(store);
        let props = Rc::clone(props);
        Box::new(move |index: usize| {
            // The index is into the visible list; resolve it to the todo's id
            // before dispatching.
            let id = props.borrow().visible_todo(index).map(|todo| todo.id());
            match id {
                Some(id) => store.dispatch(TodoAction::complete_todo(id)),
                None => tracing::debug!(index, "Ignoring click outside visible list"),
            }
        })
    };

    let on_filter_change = {
        let store = Rc::clone(store);
        Box::new(move |filter: VisibilityFilter| {
            store.dispatch(TodoAction::set_visibility_filter(filter))
        })
    };

    RootCallbacks {
        on_add_click,
        on_todo_click,
        on_filter_change,
    }
}
