pub mod activity;

pub use activity::{Activity, ConfirmationMessage, ErrorDetail};
