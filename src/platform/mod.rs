pub mod openstack;

pub use openstack::OpenStackPlatform;

use crate::context::Context;
use crate::form::ClusterForm;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Placeholder returned when a command is requested for a platform the
/// registry does not know. The leading `#` keeps it inert if pasted into
/// a shell.
pub const NOT_IMPLEMENTED_COMMAND: &str =
    "# command generation for this platform is not implemented yet";

/// Platform identifiers the assistant knows about but cannot generate
/// commands for yet. Shown as "coming soon" in the platforms listing.
pub const COMING_SOON_PLATFORMS: &[&str] = &["agent", "aws", "azure", "kubevirt"];

/// One infrastructure platform the assistant can build commands for.
///
/// A platform bundles its ordered step titles, a validator per step, the
/// prompts that fill each step, and the command serializer. Registering a
/// new platform is additive; the controller never branches on concrete
/// platform types.
pub trait Platform: Send + Sync {
    /// Stable identifier used as the `hcp create cluster <id>` argument
    fn id(&self) -> &'static str;

    /// Human-readable name for prompts and listings
    fn display_name(&self) -> &'static str;

    /// Ordered titles of this platform's wizard steps
    fn step_titles(&self) -> &'static [&'static str];

    /// Whether the given step's answers allow advancing. Pure in
    /// (step, form); an out-of-range index never blocks.
    fn is_step_valid(&self, step: usize, form: &ClusterForm) -> bool;

    /// One-line hint shown when the step gate blocks advancing
    fn step_requirement(&self, step: usize) -> Option<&'static str>;

    /// Interactively fill the given step's answers
    fn prompt_step(&self, ctx: &Context, step: usize, form: &mut ClusterForm) -> Result<()>;

    /// Serialize the form into the final single-line shell command
    fn generate_command(&self, form: &ClusterForm) -> String;
}

/// Registry mapping platform identifiers to their implementations
pub struct PlatformRegistry {
    platforms: RwLock<HashMap<String, Arc<dyn Platform>>>,
}

impl PlatformRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            platforms: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with every supported platform (OpenStack)
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(OpenStackPlatform));
        registry
    }

    /// Register a platform under its own identifier
    pub fn register(&self, platform: Arc<dyn Platform>) {
        let mut platforms = self.platforms.write().unwrap();
        platforms.insert(platform.id().to_string(), platform);
    }

    /// Look up a platform by identifier
    pub fn get(&self, id: &str) -> Option<Arc<dyn Platform>> {
        let platforms = self.platforms.read().unwrap();
        platforms.get(id).cloned()
    }

    /// Whether the identifier names a supported platform
    pub fn has(&self, id: &str) -> bool {
        let platforms = self.platforms.read().unwrap();
        platforms.contains_key(id)
    }

    /// All registered identifiers, sorted for stable display
    pub fn list(&self) -> Vec<String> {
        let platforms = self.platforms.read().unwrap();
        let mut ids: Vec<String> = platforms.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// All registered platforms, sorted by identifier
    pub fn platforms(&self) -> Vec<Arc<dyn Platform>> {
        let platforms = self.platforms.read().unwrap();
        let mut all: Vec<Arc<dyn Platform>> = platforms.values().cloned().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }

    /// Serialize the form through its selected platform. Never fails: an
    /// unselected or unrecognized platform yields the fixed placeholder.
    pub fn generate_command(&self, form: &ClusterForm) -> String {
        form.platform
            .as_deref()
            .and_then(|id| self.get(id))
            .map(|platform| platform.generate_command(form))
            .unwrap_or_else(|| NOT_IMPLEMENTED_COMMAND.to_string())
    }
}

impl Default for PlatformRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
