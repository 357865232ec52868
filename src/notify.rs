use std::rc::Rc;

use crate::content::IdeaCard;

/// Synchronous user-facing acknowledgment. The browser build blocks on
/// `alert()`; tests record messages instead.
pub trait Notifier {
    fn acknowledge(&self, message: &str);
}

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn acknowledge(&self, message: &str) {
        gloo::dialogs::alert(message);
    }
}

/// Shared handle handed to views through a Yew context.
#[derive(Clone)]
pub struct Notify(Rc<dyn Notifier>);

impl Notify {
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self(Rc::new(notifier))
    }

    pub fn acknowledge(&self, message: &str) {
        log::info!("acknowledge: {message}");
        self.0.acknowledge(message);
    }
}

impl PartialEq for Notify {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub fn idea_message(card: &IdeaCard) -> String {
    format!(
        "Thanks for your interest in \"{}\"! We'll be sharing ways to get involved soon.",
        card.title
    )
}

pub fn acknowledge_idea(card: &IdeaCard, notify: &Notify) {
    notify.acknowledge(&idea_message(card));
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{Notifier, Notify};

    /// Keeps every message instead of showing it.
    #[derive(Clone, Default)]
    pub struct RecordingNotifier(Rc<RefCell<Vec<String>>>);

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<String> {
            self.0.borrow().clone()
        }

        pub fn handle(&self) -> Notify {
            Notify::new(self.clone())
        }
    }

    impl Notifier for RecordingNotifier {
        fn acknowledge(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }
}
