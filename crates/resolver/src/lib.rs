//! Actor identity resolution.
//!
//! [`ActorResolver`] turns live game objects, UI screen actors and the
//! examine, party, adventurer-plate and glamour-plate windows into
//! [`ActorIdentifier`]s that stay stable across sessions. It reads the game only
//! through the [`host`] capabilities, which a plugin can back with raw process
//! memory via [`memory`].

pub mod host;
pub mod memory;
pub mod resolver;

pub use actorid_primitives::ActorIdentifier;
pub use host::{CharaCardSource, GameUi, Host, InspectSource, LiveObject, ObjectTable, PartyMember, PartySource};
pub use memory::{LocalMemory, MemorySource, RawCharaCard, RawInspect, RawObjectTable, RawParty, SliceMemory};
pub use resolver::{ActorResolver, ResolverConfig, addons};
