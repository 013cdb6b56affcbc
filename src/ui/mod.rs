//! Page controllers for the interactive parts of the site.
//!
//! Each controller owns its state and timers explicitly. Nothing here
//! touches I/O or reads the clock on its own (except `ContactForm::submit`
//! and the consent timestamp): callers pass `Instant`s in and poll with
//! `tick`, which keeps timed behaviour deterministic.

pub mod accordion;
pub mod carousel;
pub mod catalog;
pub mod consent;
pub mod contact_form;
pub mod counter;
pub mod method_tabs;
pub mod modal;
pub mod tabs;
pub mod timer;

pub use accordion::Accordion;
pub use carousel::Carousel;
pub use catalog::{CatalogGrid, CatalogView, SeminarCard};
pub use consent::{ConsentBanner, ConsentChoice, ConsentState, ConsentStore};
pub use contact_form::{ContactForm, ContactRequest, ContactTransport};
pub use counter::StatCounters;
pub use method_tabs::MethodTabs;
pub use modal::{MemberView, TeamModal};
pub use tabs::TabController;
