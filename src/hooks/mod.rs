// Reporter lifecycle hooks: event payloads, the default-no-op trait, replay.

pub mod events;
pub mod replay;
pub mod traits;

pub use events::HookEvent;
pub use replay::replay;
pub use traits::ReporterHooks;
