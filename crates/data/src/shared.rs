//! Process-wide cache of immutable lookup tables.
//!
//! # Role
//!
//! Tables are keyed by `(table type, tag, language)` and reference counted. The
//! first [`SharedCache::acquire`] of a key runs the builder; later acquisitions
//! share the same `Arc`. Dropping (or [`SharedCache::release`]-ing) the last
//! [`SharedHandle`] removes the entry and drops the table.
//!
//! # Invariants
//!
//! - A key is built at most once while any handle to it is alive, including when
//!   the builder failed (the failure is cached as an empty, unavailable table).
//! - Refcount changes are serialized by the registry lock; the build itself runs
//!   outside that lock behind a per-entry [`OnceLock`], so concurrent first
//!   acquires of one key wait for a single build and other keys are unaffected.
//! - Builders must not acquire the key they are building.

use std::any::{Any, TypeId};
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, LazyLock, OnceLock};

use actorid_primitives::ClientLanguage;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
	ty: TypeId,
	tag: &'static str,
	language: ClientLanguage,
}

impl CacheKey {
	fn of<T: 'static>(tag: &'static str, language: ClientLanguage) -> Self {
		Self {
			ty: TypeId::of::<T>(),
			tag,
			language,
		}
	}
}

struct Built {
	table: Arc<dyn Any + Send + Sync>,
	available: bool,
}

struct Entry {
	refcount: usize,
	slot: Arc<OnceLock<Built>>,
}

#[derive(Default)]
struct Registry {
	entries: Mutex<FxHashMap<CacheKey, Entry>>,
}

impl Registry {
	fn retain(&self, key: &CacheKey) {
		if let Some(entry) = self.entries.lock().get_mut(key) {
			entry.refcount += 1;
		}
	}

	fn release(&self, key: &CacheKey) {
		let mut entries = self.entries.lock();
		let Some(entry) = entries.get_mut(key) else {
			return;
		};

		entry.refcount = entry.refcount.saturating_sub(1);
		if entry.refcount == 0 {
			entries.remove(key);
			tracing::debug!(tag = key.tag, language = %key.language, "shared table dropped");
		}
	}

	fn refcount(&self, key: &CacheKey) -> usize {
		self.entries.lock().get(key).map_or(0, |entry| entry.refcount)
	}
}

/// Reference-counted registry of shared tables.
///
/// Cloning the cache clones a handle to the same registry.
#[derive(Clone, Default)]
pub struct SharedCache {
	registry: Arc<Registry>,
}

static GLOBAL: LazyLock<SharedCache> = LazyLock::new(SharedCache::new);

impl SharedCache {
	/// Creates an empty, independent cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// The process-wide cache shared by every resolver instance.
	pub fn global() -> &'static SharedCache {
		&GLOBAL
	}

	/// Acquires the table for `(T, tag, language)`, building it on first use.
	///
	/// A failing builder is not retried while the entry lives: the caller gets an
	/// empty table with [`SharedHandle::is_available`] returning `false`, and a
	/// warning is logged.
	pub fn acquire<T, E, F>(&self, tag: &'static str, language: ClientLanguage, builder: F) -> SharedHandle<T>
	where
		T: Default + Send + Sync + 'static,
		E: fmt::Display,
		F: FnOnce() -> Result<T, E>,
	{
		let key = CacheKey::of::<T>(tag, language);
		let slot = {
			let mut entries = self.registry.entries.lock();
			let entry = entries.entry(key.clone()).or_insert_with(|| Entry {
				refcount: 0,
				slot: Arc::new(OnceLock::new()),
			});
			entry.refcount += 1;
			Arc::clone(&entry.slot)
		};

		let built = slot.get_or_init(|| build_table(tag, language, builder));
		let (table, available) = match Arc::clone(&built.table).downcast::<T>() {
			Ok(table) => (table, built.available),
			Err(_) => {
				tracing::error!(tag, language = %language, "shared table has an unexpected type");
				(Arc::new(T::default()), false)
			}
		};

		SharedHandle {
			table,
			available,
			key,
			registry: Arc::clone(&self.registry),
		}
	}

	/// Releases a handle; equivalent to dropping it.
	pub fn release<T>(&self, handle: SharedHandle<T>) {
		drop(handle);
	}

	/// Number of live handles for `(T, tag, language)`.
	pub fn refcount<T: 'static>(&self, tag: &'static str, language: ClientLanguage) -> usize {
		self.registry.refcount(&CacheKey::of::<T>(tag, language))
	}

	pub fn contains<T: 'static>(&self, tag: &'static str, language: ClientLanguage) -> bool {
		self.refcount::<T>(tag, language) > 0
	}

	/// Number of live entries across all tags and languages.
	pub fn len(&self) -> usize {
		self.registry.entries.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl fmt::Debug for SharedCache {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SharedCache").field("entries", &self.len()).finish()
	}
}

fn build_table<T, E, F>(tag: &'static str, language: ClientLanguage, builder: F) -> Built
where
	T: Default + Send + Sync + 'static,
	E: fmt::Display,
	F: FnOnce() -> Result<T, E>,
{
	match builder() {
		Ok(table) => {
			tracing::debug!(tag, language = %language, "shared table built");
			Built {
				table: Arc::new(table),
				available: true,
			}
		}
		Err(error) => {
			tracing::warn!(tag, language = %language, %error, "failed to build shared table; using an empty one");
			Built {
				table: Arc::new(T::default()),
				available: false,
			}
		}
	}
}

/// Shared ownership of one cached table.
///
/// Cloning re-acquires the entry; dropping releases it.
pub struct SharedHandle<T> {
	table: Arc<T>,
	available: bool,
	key: CacheKey,
	registry: Arc<Registry>,
}

impl<T> SharedHandle<T> {
	/// `false` if the builder failed and this is the empty fallback table.
	#[inline]
	pub fn is_available(&self) -> bool {
		self.available
	}

	pub fn tag(&self) -> &'static str {
		self.key.tag
	}

	pub fn language(&self) -> ClientLanguage {
		self.key.language
	}

	/// Whether both handles point at the same table instance.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.table, &other.table)
	}
}

impl<T> Deref for SharedHandle<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.table
	}
}

impl<T> Clone for SharedHandle<T> {
	fn clone(&self) -> Self {
		self.registry.retain(&self.key);
		Self {
			table: Arc::clone(&self.table),
			available: self.available,
			key: self.key.clone(),
			registry: Arc::clone(&self.registry),
		}
	}
}

impl<T> Drop for SharedHandle<T> {
	fn drop(&mut self) {
		self.registry.release(&self.key);
	}
}

impl<T> fmt::Debug for SharedHandle<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SharedHandle")
			.field("tag", &self.key.tag)
			.field("language", &self.key.language)
			.field("available", &self.available)
			.finish()
	}
}
