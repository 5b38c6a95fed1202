//! Step state machine for one assistant session.
//!
//! The controller owns the answer record and the current position in the
//! derived step sequence. Forward navigation is gated on the current
//! step's validity; backward navigation is always allowed.

use crate::form::ClusterForm;
use crate::platform::{Platform, PlatformRegistry};
use std::sync::Arc;

/// One entry in the derived step sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    ClusterDetails,
    PlatformSelection,
    /// Index into the selected platform's own step list
    Platform(usize),
    /// Placeholder when the selected platform has no step sequence
    NotSupported,
}

pub struct WizardController {
    registry: Arc<PlatformRegistry>,
    form: ClusterForm,
    step: usize,
    copied: bool,
}

impl WizardController {
    pub fn new(registry: Arc<PlatformRegistry>) -> Self {
        Self {
            registry,
            form: ClusterForm::default(),
            step: 0,
            copied: false,
        }
    }

    pub fn form(&self) -> &ClusterForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ClusterForm {
        &mut self.form
    }

    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// The platform implementation for the form's selected platform, if
    /// one is selected and supported
    pub fn selected_platform(&self) -> Option<Arc<dyn Platform>> {
        self.form
            .platform
            .as_deref()
            .and_then(|id| self.registry.get(id))
    }

    /// Derive the step sequence for the current answers: two fixed
    /// leading steps, then the selected platform's steps, or a single
    /// placeholder when the platform is unrecognized.
    pub fn steps(&self) -> Vec<WizardStep> {
        let mut steps = vec![WizardStep::ClusterDetails, WizardStep::PlatformSelection];
        match self.form.platform.as_deref() {
            None => {}
            Some(id) => match self.registry.get(id) {
                Some(platform) => {
                    steps.extend((0..platform.step_titles().len()).map(WizardStep::Platform));
                }
                None => steps.push(WizardStep::NotSupported),
            },
        }
        steps
    }

    /// Zero-based index of the current step, clamped to the sequence
    pub fn step_index(&self) -> usize {
        self.step.min(self.steps().len() - 1)
    }

    pub fn current_step(&self) -> WizardStep {
        self.steps()[self.step_index()]
    }

    pub fn step_title(&self, step: WizardStep) -> String {
        match step {
            WizardStep::ClusterDetails => "Cluster details".to_string(),
            WizardStep::PlatformSelection => "Platform".to_string(),
            WizardStep::Platform(index) => self
                .selected_platform()
                .and_then(|platform| platform.step_titles().get(index).copied())
                .unwrap_or("Details")
                .to_string(),
            WizardStep::NotSupported => "Coming soon".to_string(),
        }
    }

    /// Pure validity check for one step against the current answers
    pub fn is_step_valid(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::ClusterDetails => self.form.has_cluster_details(),
            WizardStep::PlatformSelection => self
                .form
                .platform
                .as_deref()
                .is_some_and(|id| self.registry.has(id)),
            WizardStep::Platform(index) => self
                .selected_platform()
                .is_some_and(|platform| platform.is_step_valid(index, &self.form)),
            WizardStep::NotSupported => false,
        }
    }

    pub fn is_current_step_valid(&self) -> bool {
        self.is_step_valid(self.current_step())
    }

    /// What the current step still needs before `next` will move
    pub fn current_step_requirement(&self) -> Option<String> {
        match self.current_step() {
            WizardStep::ClusterDetails => Some(
                "name, base domain, replica count, pull secret and SSH key are all required"
                    .to_string(),
            ),
            WizardStep::PlatformSelection => Some("choose a supported platform".to_string()),
            WizardStep::Platform(index) => self
                .selected_platform()
                .and_then(|platform| platform.step_requirement(index))
                .map(str::to_string),
            WizardStep::NotSupported => Some("this platform is not supported yet".to_string()),
        }
    }

    /// Advance one step if the current step is valid; a blocked or
    /// already-last position leaves the index untouched.
    pub fn next(&mut self) -> bool {
        if !self.is_current_step_valid() {
            return false;
        }
        let last = self.steps().len() - 1;
        if self.step_index() >= last {
            return false;
        }
        self.step = self.step_index() + 1;
        self.copied = false;
        if self.current_step() == WizardStep::PlatformSelection {
            self.auto_select_platform();
        }
        true
    }

    /// Go back one step; always permitted, clamped at the first step
    pub fn previous(&mut self) -> bool {
        if self.step_index() == 0 {
            return false;
        }
        self.step = self.step_index() - 1;
        self.copied = false;
        true
    }

    pub fn is_first_step(&self) -> bool {
        self.step_index() == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.step_index() == self.steps().len() - 1
    }

    /// Whether the current step is a supported platform's final (review)
    /// step
    pub fn is_review_step(&self) -> bool {
        match self.current_step() {
            WizardStep::Platform(index) => self
                .selected_platform()
                .is_some_and(|platform| index + 1 == platform.step_titles().len()),
            _ => false,
        }
    }

    /// When nothing is chosen and exactly one platform is available,
    /// choose it. A convenience default, not user input.
    pub fn auto_select_platform(&mut self) {
        if self.form.platform.is_none() {
            let ids = self.registry.list();
            if let [only] = ids.as_slice() {
                self.form.platform = Some(only.clone());
            }
        }
    }

    pub fn select_platform(&mut self, id: &str) {
        self.form.platform = Some(id.to_string());
    }

    pub fn generate_command(&self) -> String {
        self.registry.generate_command(&self.form)
    }

    /// Whether the generated command was copied and nothing moved since
    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn mark_copied(&mut self) {
        self.copied = true;
    }
}
