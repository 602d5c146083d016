// ============================================================================
// REACTIVITY - Valor observable con notificaciones a subscribers
// ============================================================================
// La UI se suscribe al snapshot del carrito y se le avisa en cada reemplazo;
// acá no hay threads: todo corre en el hilo único del event loop.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber = Box<dyn Fn()>;

/// Valor observable; los clones comparten valor Y subscribers
pub struct Observable<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Reemplazar el valor y notificar
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Mutar el valor con un closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Leer el valor sin clonarlo
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&self.value.borrow())
    }

    /// Suscribirse a cambios; el callback puede dispararse después de que la
    /// vista que lo registró ya no exista, y debe tolerarlo como no-op
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Box::new(callback));
    }

    fn notify(&self) {
        for callback in self.subscribers.borrow().iter() {
            callback();
        }
    }
}

impl<T: Clone> Observable<T> {
    /// Copia del valor actual
    pub fn get_cloned(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}
