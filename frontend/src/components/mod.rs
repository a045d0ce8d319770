pub mod confetti_overlay;
pub mod result_modal;
pub mod spin_button;
pub mod wheel_canvas;

pub use confetti_overlay::ConfettiOverlay;
pub use result_modal::ResultModal;
pub use spin_button::SpinButton;
pub use wheel_canvas::WheelCanvas;
