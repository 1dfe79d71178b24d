mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay};
