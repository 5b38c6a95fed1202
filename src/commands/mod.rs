pub mod generate;
pub mod platforms;
pub mod wizard;

pub use generate::{GenerateArgs, GenerateCommand};
pub use platforms::PlatformsCommand;
pub use wizard::WizardCommand;
