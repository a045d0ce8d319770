pub mod wheel_kiosk;
