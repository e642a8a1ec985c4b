//! Core value types for actor identity: identifiers, raw host names, world ids,
//! object kinds, screen slots and the versioned memory layout of host objects.

/// Character appearance fingerprints.
pub mod customize;
/// Tagged actor identity values.
pub mod identifier;
/// Host client languages.
pub mod language;
/// Byte offsets of host structures, per game version.
pub mod layout;
/// Raw host character names.
pub mod name;
/// Host object kinds and screen-actor slots.
pub mod object;
/// Home world identifiers.
pub mod world;

pub use customize::{CUSTOMIZE_LEN, Customize};
pub use identifier::{ActorIdentifier, IdentifierType};
pub use language::{ClientLanguage, UnknownLanguage};
pub use layout::ObjectLayout;
pub use name::ByteName;
pub use object::{CUTSCENE_END, CUTSCENE_START, ObjectKind, SCREEN_END, ScreenActor};
pub use world::WorldId;
