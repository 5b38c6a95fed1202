pub mod controller;

pub use controller::{WizardController, WizardStep};
