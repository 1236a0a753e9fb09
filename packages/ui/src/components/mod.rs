//! Presentation primitives. Styling only; no data access.

mod button;
pub use button::{Button, ButtonVariant};

mod card;
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};

mod input;
pub use input::Input;

mod label;
pub use label::Label;

mod modal;
pub use modal::ModalOverlay;

mod select;
pub use select::Select;

mod toast;
pub use toast::{use_toast, ToastKind, ToastOptions, ToastProvider, Toasts};
