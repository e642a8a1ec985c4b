//! Reference data for actor identities.
//!
//! Six name tables (worlds, mounts, companions, ornaments, battle NPC names and
//! event NPC residents) are built from the host's reference sheets once per
//! client language and shared between every consumer through the
//! [`SharedCache`]. [`ActorData`] owns one handle to each and answers the
//! kind/id → name and world name ↔ id questions the resolver and the UI ask.

pub mod actor_data;
pub mod builder;
pub mod shared;
pub mod sheets;
pub mod tables;
pub mod title_case;

pub use actor_data::{ActorData, MANNEQUIN_IDS, is_mannequin, is_mannequin_id, tags};
pub use shared::{SharedCache, SharedHandle};
pub use sheets::{CompanionRow, MountRow, NameRow, ReferenceSheets, Sheet, SheetDump, SheetError, SheetSet, WorldRow};
pub use tables::{NameTable, WorldTable};
pub use title_case::{ARTICLE_ALWAYS_CAPITALIZED, to_title_case};
